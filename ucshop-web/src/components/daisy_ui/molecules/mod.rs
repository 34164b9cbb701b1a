pub mod accordion;
pub mod card;

pub use accordion::Accordion;
pub use card::Card;

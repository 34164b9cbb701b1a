pub mod badge;
pub mod rating;

pub use badge::Badge;
pub use rating::Rating;

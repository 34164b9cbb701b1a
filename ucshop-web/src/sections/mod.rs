//! Static page sections, top to bottom.
pub mod about;
pub mod catalog;
pub mod contacts;
pub mod faq;
pub mod hero;
pub mod payment;
pub mod reviews;

pub use about::AboutSection;
pub use catalog::CatalogSection;
pub use contacts::ContactsSection;
pub use faq::FaqSection;
pub use hero::Hero;
pub use payment::PaymentSection;
pub use reviews::ReviewsSection;

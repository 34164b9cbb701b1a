pub mod reports;
pub mod session;
pub mod tester;

pub use session::{SessionPlan, SessionRunner, SessionSummary, ShopSession};
pub use tester::*;

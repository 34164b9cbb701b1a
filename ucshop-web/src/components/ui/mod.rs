pub mod history_dialog;
pub mod package_card;
pub mod purchase_dialog;

pub use history_dialog::HistoryDialog;
pub use package_card::PackageCard;
pub use purchase_dialog::PurchaseDialog;

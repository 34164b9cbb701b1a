pub mod daisy_ui;
pub mod focus;
pub mod footer;
pub mod header;
pub mod modal;
pub mod ui;

//! Reusable widgets for the application.

pub mod drop_zone;
pub mod file_picker;

pub use drop_zone::DropZone;
pub use file_picker::FilePickerWidget;

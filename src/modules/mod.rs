pub mod content;
pub mod editor;

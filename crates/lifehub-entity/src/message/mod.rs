//! Message entity and folder enumeration.

pub mod folder;
pub mod model;

pub use folder::Folder;
pub use model::Message;

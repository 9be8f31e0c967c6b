//! Project entity, status enumeration, and the project message board.

pub mod message;
pub mod model;
pub mod status;

pub use message::ProjectMessage;
pub use model::Project;
pub use status::ProjectStatus;

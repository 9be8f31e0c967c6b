//! Notes.

pub mod service;

pub use service::NoteService;

//! Core functionality: the page document model, its store, the editing
//! session, and text normalization

pub mod config;
pub mod page;
pub mod session;
pub mod store;
pub mod text;

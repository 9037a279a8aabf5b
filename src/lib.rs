pub mod app;
pub mod host;
pub mod jikan;
pub mod note;

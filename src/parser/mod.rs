//! Document snapshot parsing

pub mod html;

pub use html::parse_document;

//! Core data models for environment detection

pub mod document;
pub mod environment;
pub mod message;
pub mod platform;
pub mod state;

pub use document::*;
pub use environment::*;
pub use message::*;
pub use platform::*;
pub use state::*;

//! Handler implementations

pub mod console;
pub mod json;
pub mod pretty;

pub use console::ConsoleHandler;
pub use json::JsonHandler;

// Re-export the trait for convenience
pub use crate::core::Handler;

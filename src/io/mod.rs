//! Input and output

pub mod pointer;

// Re-export commonly used items
pub use pointer::{PointerEvent, PointerPlugin};

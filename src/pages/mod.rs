//! Page components for Glowquiz.

mod quiz;

pub use quiz::Quiz;

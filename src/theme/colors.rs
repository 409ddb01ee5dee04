//! Color constants for the Glowquiz studio palette.
//!
//! Deep plum backdrop with blush and gold accents.

#![allow(dead_code)]

// === PLUM (Backgrounds) ===
pub const PLUM_DEEP: &str = "#2f2963";
pub const PLUM_PANEL: &str = "#3a3377";
pub const PLUM_BORDER: &str = "#4b4390";

// === BLUSH (Buttons, primary accents) ===
pub const BLUSH: &str = "#f2a6b8";
pub const BLUSH_GLOW: &str = "rgba(242, 166, 184, 0.35)";

// === GOLD (Highlights, results) ===
pub const GOLD: &str = "#e9c46a";
pub const GOLD_GLOW: &str = "rgba(233, 196, 106, 0.3)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f8f5ff";
pub const TEXT_SECONDARY: &str = "rgba(248, 245, 255, 0.72)";
pub const TEXT_MUTED: &str = "rgba(248, 245, 255, 0.5)";

// === SEMANTIC ===
pub const DANGER: &str = "#ff6b81";
pub const SUCCESS: &str = "#7bd389";

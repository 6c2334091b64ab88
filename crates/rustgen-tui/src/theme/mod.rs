//! Centralized theme system.
//!
//! - `palette` - Raw color constants for the chrome
//! - `styles` - Semantic style builder functions
//! - `syntax` - Per-editor-theme token colors

pub mod palette;
pub mod styles;
pub mod syntax;

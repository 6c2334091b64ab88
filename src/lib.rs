//! rustgen library
//!
//! Command-line handling and the headless runner. The interactive client
//! lives in `rustgen-tui`.

pub mod cli;
pub mod headless;

pub use headless::run_headless;
pub use rustgen_tui::run;

//! Area management and the interactive menu
//!
//! The [`AreaManager`] owns the two accommodation areas and tracks which one
//! is active; the [`Menu`] drives it from a line-oriented input stream,
//! dispatching one validated selection per iteration.

pub mod controller;
pub mod menu;

pub use controller::AreaManager;
pub use menu::{Menu, MenuAction};

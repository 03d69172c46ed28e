//! Interactive voting module
//!
//! Provides a readline-based interactive front end for one voting widget.

mod repl;

pub use repl::{ReplCommand, WidgetRepl};

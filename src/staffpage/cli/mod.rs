//! # CLI Layer
//!
//! This is **one possible UI client** for the staff directory, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and prompts.
//!
//! For the overall architecture, see the crate-level documentation in [`staffpage`].
//!
//! ## Modes
//!
//! - `--generate`: rebuild the public page from the store and exit. Safe for scripts.
//! - `--export PATH`: write a copy of the store (or a `.tar.gz` bundle with its assets) and exit.
//! - `--cli`: the numbered text menu.
//! - no flag: the form editor, a list pane plus a detail form driven by an action menu.
//!
//! Both interactive modes refuse to start when stdin is not a terminal.
//!
//! ## Module Structure
//!
//! - `commands`: mode selection and wiring
//! - `form`: the form editor over [`staffpage::session::FormSession`]
//! - `menu`: the text menu
//! - `print`: message colors, record listings, relative times
//! - `prompt`: the [`prompt::Prompter`] trait and its dialoguer implementation
//! - `setup`: argument parsing and logging

mod commands;
mod form;
mod menu;
mod print;
mod prompt;
pub mod setup;

pub use commands::run;

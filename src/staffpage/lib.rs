//! # Staffpage Architecture
//!
//! Staffpage maintains a clinic's staff directory (a JSON store of medical and support
//! staff records) and regenerates the public `our-staff.html` page from it. Like most of
//! our tools it is a library that happens to have a CLI client: the editors in `cli/`
//! are one way of driving it, the page generator another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - --generate / --export for scripts                        │
//! │  - text menu and form editor for people                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session + API (session.rs, api.rs)                         │
//! │  - FormSession: selection, working form, activity log       │
//! │  - StaffApi: facade returning CmdResult values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, update, remove, duplicate, attach, import, export   │
//! │  - generate: render + publish with backups                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Directory over a StoreBackend                            │
//! │  - JsonFileBackend (production), InMemoryBackend (testing)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Terminal in the Core
//!
//! From `session.rs` inward, code never prints, never prompts and never exits. Anything
//! that needs the user's agreement takes a `confirm` callback. Filesystem access is
//! limited to the store backend, the asset importer, the publisher and export.
//!
//! ## Generated Page
//!
//! Rendering is a pure function of the records plus one existence check per referenced
//! asset: the same store always yields the same HTML. Publishing copies the previous
//! page into `backup_staff_pages/` before overwriting it.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`session`]: State behind the form editor
//! - [`commands`]: Business logic for each operation
//! - [`store`]: The staff directory and its backends
//! - [`model`]: Records, documents, categories and field normalization
//! - [`form`]: Raw form input and its validation
//! - [`assets`]: Copying headshots and documents into the project
//! - [`render`]: HTML generation
//! - [`publish`]: Writing the page and keeping backups
//! - [`audit`]: The in-memory activity log
//! - [`config`]: `staffpage.json` settings
//! - [`error`]: Error types
//! - `cli`: Argument parsing, prompts and editors for the binary (not part of the lib API)

pub mod api;
pub mod assets;
pub mod audit;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod publish;
pub mod render;
pub mod session;
pub mod store;

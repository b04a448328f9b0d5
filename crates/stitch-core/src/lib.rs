//! # stitch-core
//!
//! Resolves a tree of JSON documents that reference each other by relative
//! file path into a single merged document.
//!
//! A page is described by a root document plus component fragments stored in
//! separate files. Any string value that points at a `data.json` fragment
//! (for example `"./header/data.json"`) is replaced by the fully resolved
//! content of that file, to arbitrary depth. Windows-style absolute paths
//! (`C:\assets\logo.png`) are rewritten to forward slashes. Everything else
//! passes through untouched, with object key order and array order preserved.
//!
//! ## Quick start
//!
//! ```rust
//! use serde_json::json;
//! use stitch_core::{MemoryLoader, Resolver};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let loader = MemoryLoader::new()
//!     .with("./page/data.json", r#"{"title":"Home","header":"./header/data.json"}"#)
//!     .with("./header/data.json", r#"{"logo":"C:\\assets\\logo.png"}"#);
//!
//! let page = Resolver::new(loader).resolve_root("./page/data.json").await.unwrap();
//! assert_eq!(page, json!({"title": "Home", "header": {"logo": "C:/assets/logo.png"}}));
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`classify`] — string classification (component reference, foreign path, plain)
//! - [`loader`] — the [`Loader`] seam plus filesystem and in-memory implementations
//! - [`resolver`] — recursive reference resolution
//! - [`overrides`] — JSON Pointer edits applied to a merged document
//! - [`error`] — Error types for load/parse/resolve failures

pub mod classify;
pub mod error;
pub mod loader;
pub mod overrides;
pub mod resolver;

pub use classify::{classify, normalize_foreign_path, StringKind};
pub use error::{Result, StitchError};
pub use loader::{FsLoader, Loader, MemoryLoader};
pub use overrides::{apply_overrides, Override};
pub use resolver::{Resolver, ResolverConfig, DEFAULT_ROOT};

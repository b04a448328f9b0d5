//! Recursive reference resolution.
//!
//! [`Resolver::resolve`] rebuilds a JSON value bottom-up:
//!
//! - objects and arrays are rebuilt from their resolved children, in the
//!   original key/element order;
//! - component references are loaded through the [`Loader`] and resolved in
//!   turn, then substituted for the string;
//! - foreign paths have their backslashes turned into forward slashes;
//! - every other value is returned unchanged.
//!
//! Sibling children are resolved concurrently and joined before their parent
//! is assembled. The first failing sibling aborts the parent; siblings still
//! in flight are dropped. Nothing is returned for a partially resolved tree.
//!
//! There is no cycle detection by default. A document that (transitively)
//! references itself recurses until memory runs out. Set
//! [`ResolverConfig::max_depth`] to turn that into a [`StitchError::DepthExceeded`].

use futures::future::{try_join_all, BoxFuture};
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{trace, warn};

use crate::classify::{classify, normalize_foreign_path, StringKind};
use crate::error::{Result, StitchError};
use crate::loader::Loader;

/// Root document loaded by the `stitch` entry point when none is given.
pub const DEFAULT_ROOT: &str = "page/page1.data.json";

/// Tuning knobs for a [`Resolver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum number of reference hops below the root document.
    ///
    /// `None` (the default) means unbounded. With `Some(0)` the root may not
    /// reference anything; with `Some(1)` its fragments may not reference
    /// further fragments, and so on.
    pub max_depth: Option<usize>,
}

/// Resolves component references in JSON values using a [`Loader`].
#[derive(Debug, Clone)]
pub struct Resolver<L> {
    loader: L,
    config: ResolverConfig,
}

impl<L: Loader> Resolver<L> {
    pub fn new(loader: L) -> Self {
        Self::with_config(loader, ResolverConfig::default())
    }

    pub fn with_config(loader: L, config: ResolverConfig) -> Self {
        Self { loader, config }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Load the root document at `path` and resolve it fully.
    ///
    /// The root itself does not count towards `max_depth`.
    pub async fn resolve_root(&self, path: &str) -> Result<Value> {
        let root = self.loader.load(path).await?;
        self.resolve_at(root, 0).await
    }

    /// Resolve every reference inside `value`.
    pub async fn resolve(&self, value: Value) -> Result<Value> {
        self.resolve_at(value, 0).await
    }

    /// Load the fragment named by `reference` and resolve it, as if it had
    /// appeared as a string inside a root document.
    pub async fn resolve_reference(&self, reference: &str) -> Result<Value> {
        self.resolve_reference_at(reference, 1).await
    }

    // Boxed so the future type stays finite across the recursion.
    fn resolve_at(&self, value: Value, depth: usize) -> BoxFuture<'_, Result<Value>> {
        async move {
            match value {
                Value::Object(map) => self.resolve_object(map, depth).await,
                Value::Array(items) => {
                    let resolved =
                        try_join_all(items.into_iter().map(|item| self.resolve_at(item, depth)))
                            .await?;
                    Ok(Value::Array(resolved))
                }
                Value::String(s) => self.resolve_string(s, depth).await,
                scalar => Ok(scalar),
            }
        }
        .boxed()
    }

    async fn resolve_object(&self, map: Map<String, Value>, depth: usize) -> Result<Value> {
        let (keys, children): (Vec<String>, Vec<Value>) = map.into_iter().unzip();
        let resolved =
            try_join_all(children.into_iter().map(|child| self.resolve_at(child, depth))).await?;
        Ok(Value::Object(keys.into_iter().zip(resolved).collect()))
    }

    async fn resolve_string(&self, s: String, depth: usize) -> Result<Value> {
        match classify(&s) {
            StringKind::ComponentReference(reference) => {
                self.resolve_reference_at(reference, depth + 1).await
            }
            StringKind::ForeignPath(path) => {
                let normalized = normalize_foreign_path(path);
                trace!(from = path, to = %normalized, "normalized foreign path");
                Ok(Value::String(normalized))
            }
            StringKind::Plain => Ok(Value::String(s)),
        }
    }

    async fn resolve_reference_at(&self, reference: &str, depth: usize) -> Result<Value> {
        if let Some(max_depth) = self.config.max_depth {
            if depth > max_depth {
                warn!(reference, max_depth, "reference nesting limit reached");
                return Err(StitchError::DepthExceeded {
                    reference: reference.to_string(),
                    max_depth,
                });
            }
        }
        let fragment = self.loader.load(reference).await?;
        self.resolve_at(fragment, depth).await
    }
}

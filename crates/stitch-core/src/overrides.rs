//! Post-resolution edits addressed by JSON Pointer (RFC 6901).
//!
//! After a page has been stitched together, individual values deep inside
//! it can be replaced without touching the fragment files:
//!
//! ```
//! use serde_json::json;
//! use stitch_core::{apply_overrides, Override};
//!
//! let mut page = json!({"plugins": [{"name": "main", "link": {"content": "old"}}]});
//! let edit: Override = "/plugins/0/link/content=\"Some content\"".parse().unwrap();
//! apply_overrides(&mut page, &[edit]).unwrap();
//! assert_eq!(page["plugins"][0]["link"]["content"], "Some content");
//! ```

use std::str::FromStr;

use serde_json::Value;

use crate::error::{Result, StitchError};

/// A single replacement: put `value` at `pointer`.
#[derive(Debug, Clone, PartialEq)]
pub struct Override {
    pub pointer: String,
    pub value: Value,
}

impl Override {
    pub fn new(pointer: impl Into<String>, value: Value) -> Self {
        Self {
            pointer: pointer.into(),
            value,
        }
    }
}

/// Parses `POINTER=VALUE`. The split happens at the first `=`.
///
/// `VALUE` is read as JSON when it parses (`42`, `true`, `{"a":1}`,
/// `"quoted"`); otherwise it is taken verbatim as a string, so
/// `/title=Hello` sets the string `"Hello"`.
impl FromStr for Override {
    type Err = StitchError;

    fn from_str(s: &str) -> Result<Self> {
        let (pointer, raw) = s
            .split_once('=')
            .ok_or_else(|| StitchError::InvalidOverride(s.to_string()))?;
        if !pointer.starts_with('/') {
            return Err(StitchError::InvalidOverride(s.to_string()));
        }
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        Ok(Self::new(pointer, value))
    }
}

/// Apply `overrides` to `document` in order.
///
/// Every pointer must address a value that already exists; the first one
/// that does not fails with [`StitchError::OverrideTarget`]. Overrides
/// before it have already been applied at that point.
pub fn apply_overrides(document: &mut Value, overrides: &[Override]) -> Result<()> {
    for o in overrides {
        let target = document
            .pointer_mut(&o.pointer)
            .ok_or_else(|| StitchError::OverrideTarget(o.pointer.clone()))?;
        *target = o.value.clone();
    }
    Ok(())
}

//! String classification -- decide what a JSON string leaf stands for.
//!
//! Every string in a document falls into exactly one [`StringKind`]. The
//! rules are checked in a fixed order and the first match wins:
//!
//! 1. **Component reference** -- contains `./` and, somewhere after it, the
//!    marker `data.json` (e.g. `"./header/data.json"`,
//!    `"./cards/promo.data.json"`). The whole string is used as the path.
//! 2. **Foreign path** -- a Windows-style absolute path: a drive letter, a
//!    colon, a backslash and at least one more character
//!    (e.g. `"C:\\assets\\logo.png"`).
//! 3. **Plain** -- anything else.

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal suffix that marks a component fragment file.
pub const COMPONENT_MARKER: &str = "data.json";

static COMPONENT_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\./.*?data\.json").expect("component reference pattern is valid")
});

static FOREIGN_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^[A-Za-z]:\\.+$").expect("foreign path pattern is valid"));

/// What a JSON string leaf denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKind<'a> {
    /// A relative path to another JSON document that should be inlined.
    ComponentReference(&'a str),
    /// A Windows-style absolute path whose separators need normalizing.
    ForeignPath(&'a str),
    /// An ordinary string, left as-is.
    Plain,
}

/// Classify a string according to the rules in the module docs.
///
/// # Examples
///
/// ```
/// use stitch_core::{classify, StringKind};
///
/// assert_eq!(
///     classify("./footer/data.json"),
///     StringKind::ComponentReference("./footer/data.json")
/// );
/// assert_eq!(classify(r"D:\img\a.png"), StringKind::ForeignPath(r"D:\img\a.png"));
/// assert_eq!(classify("hello"), StringKind::Plain);
/// ```
pub fn classify(s: &str) -> StringKind<'_> {
    if COMPONENT_REFERENCE.is_match(s) {
        StringKind::ComponentReference(s)
    } else if FOREIGN_PATH.is_match(s) {
        StringKind::ForeignPath(s)
    } else {
        StringKind::Plain
    }
}

/// Replace every backslash with a forward slash. Nothing else changes.
pub fn normalize_foreign_path(s: &str) -> String {
    s.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_fragment_is_component_reference() {
        assert!(matches!(
            classify("./components/header/data.json"),
            StringKind::ComponentReference("./components/header/data.json")
        ));
    }

    #[test]
    fn prefixed_marker_is_component_reference() {
        assert!(matches!(
            classify("./cards/promo.data.json"),
            StringKind::ComponentReference(_)
        ));
    }

    #[test]
    fn parent_relative_fragment_is_component_reference() {
        // `../` contains `./` as well
        assert!(matches!(
            classify("../shared/data.json"),
            StringKind::ComponentReference(_)
        ));
    }

    #[test]
    fn marker_without_relative_prefix_is_plain() {
        assert_eq!(classify("header/data.json"), StringKind::Plain);
        assert_eq!(classify("data.json"), StringKind::Plain);
    }

    #[test]
    fn relative_path_without_marker_is_plain() {
        assert_eq!(classify("./images/logo.png"), StringKind::Plain);
    }

    #[test]
    fn marker_before_prefix_is_plain() {
        assert_eq!(classify("data.json/./x"), StringKind::Plain);
    }

    #[test]
    fn drive_path_is_foreign() {
        assert_eq!(
            classify(r"C:\Users\me\logo.png"),
            StringKind::ForeignPath(r"C:\Users\me\logo.png")
        );
        assert!(matches!(classify(r"z:\a"), StringKind::ForeignPath(_)));
    }

    #[test]
    fn bare_drive_root_is_plain() {
        assert_eq!(classify(r"C:\"), StringKind::Plain);
    }

    #[test]
    fn drive_path_must_start_the_string() {
        assert_eq!(classify(r"see C:\logo.png"), StringKind::Plain);
        assert_eq!(classify(r"CD:\logo.png"), StringKind::Plain);
        assert_eq!(classify("C:/logo.png"), StringKind::Plain);
    }

    #[test]
    fn component_reference_wins_over_foreign_path() {
        let s = r"C:\site\./blocks/data.json";
        assert_eq!(classify(s), StringKind::ComponentReference(s));
    }

    #[test]
    fn normalize_replaces_every_backslash() {
        assert_eq!(
            normalize_foreign_path(r"C:\a\b\\c.png"),
            "C:/a/b//c.png"
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_foreign_path(r"E:\media\video.mp4");
        assert_eq!(normalize_foreign_path(&once), once);
    }
}

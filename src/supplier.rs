//! Supplier rule registry.
//!
//! Each supplier writes its product codes in its own layout. A rule rewrites
//! that layout into the slash-separated form used downstream:
//!
//! | id                   | rewrite                                        |
//! |----------------------|------------------------------------------------|
//! | `italbox`            | `KBFFFK22222EB` -> `KBFFFK/22222/EB`           |
//! | `sifa`               | `AB 12 CD` -> `AB/12/CD`                       |
//! | `ondulati_santerno`  | `B/KFT/222` -> `KFT/222/B`                     |
//! | `progest`            | `KMT\242\B` -> `KMT/242/B`                     |
//! | `ondulati_del_savio` | `KMT\242\B` -> `KMT/242/B`                     |
//!
//! Rules are total: input that does not match a rule's layout comes back
//! unchanged.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TransformError};

/// Letters, digits, letters (ASCII only).
static LETTERS_DIGITS_LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z]+)([0-9]+)([A-Za-z]+)").expect("valid regex"));

/// One or more whitespace characters, using the same set as
/// [`is_space`](crate::ingest::is_space): Unicode spaces and line breaks plus
/// U+FEFF, but not U+0085.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    )
    .expect("valid regex")
});

/// A supplier profile and its rewrite rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Supplier {
    Italbox,
    Sifa,
    OndulatiSanterno,
    Progest,
    OndulatiDelSavio,
}

impl Supplier {
    /// All suppliers, in selector order.
    pub const ALL: [Supplier; 5] = [
        Supplier::Italbox,
        Supplier::Sifa,
        Supplier::OndulatiSanterno,
        Supplier::Progest,
        Supplier::OndulatiDelSavio,
    ];

    /// Stable identifier used by selectors, config and the CLI.
    pub fn id(&self) -> &'static str {
        match self {
            Supplier::Italbox => "italbox",
            Supplier::Sifa => "sifa",
            Supplier::OndulatiSanterno => "ondulati_santerno",
            Supplier::Progest => "progest",
            Supplier::OndulatiDelSavio => "ondulati_del_savio",
        }
    }

    /// Name shown to the user.
    pub fn display_name(&self) -> &'static str {
        match self {
            Supplier::Italbox => "ITALBOX",
            Supplier::Sifa => "SIFA",
            Supplier::OndulatiSanterno => "ONDULATI SANTERNO",
            Supplier::Progest => "PROGEST",
            Supplier::OndulatiDelSavio => "ONDULATI DEL SAVIO",
        }
    }

    /// Find a supplier by identifier.
    pub fn from_id(id: &str) -> Option<Supplier> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Resolve a selector value into a supplier.
    ///
    /// An empty id means nothing was selected; any other unknown id is
    /// reported as an invalid selection.
    pub fn lookup(id: &str) -> Result<Supplier> {
        if id.is_empty() {
            return Err(TransformError::NoSupplierSelected);
        }
        Self::from_id(id).ok_or_else(|| TransformError::UnknownSupplier(id.to_string()))
    }

    /// Apply this supplier's rewrite rule to `text`.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Supplier::Italbox => LETTERS_DIGITS_LETTERS
                .replace_all(text, "${1}/${2}/${3}")
                .into_owned(),
            Supplier::Sifa => WHITESPACE_RUN.replace_all(text, "/").into_owned(),
            Supplier::OndulatiSanterno => rotate_three_parts(text),
            Supplier::Progest | Supplier::OndulatiDelSavio => text.replace('\\', "/"),
        }
    }
}

/// `a/b/c` becomes `b/c/a`; any other number of parts is left alone.
fn rotate_three_parts(text: &str) -> String {
    let parts: Vec<&str> = text.split('/').collect();
    match parts.as_slice() {
        [first, second, third] => format!("{second}/{third}/{first}"),
        _ => text.to_string(),
    }
}

impl fmt::Display for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Supplier {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self> {
        Self::lookup(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_ids() {
        let ids: Vec<&str> = Supplier::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec![
                "italbox",
                "sifa",
                "ondulati_santerno",
                "progest",
                "ondulati_del_savio"
            ]
        );
        for supplier in Supplier::ALL {
            assert_eq!(Supplier::from_id(supplier.id()), Some(supplier));
        }
    }

    #[test]
    fn test_lookup_errors() {
        assert!(matches!(
            Supplier::lookup(""),
            Err(TransformError::NoSupplierSelected)
        ));
        match Supplier::lookup("acme") {
            Err(TransformError::UnknownSupplier(id)) => assert_eq!(id, "acme"),
            other => panic!("Expected UnknownSupplier, got {other:?}"),
        }
        assert_eq!("sifa".parse::<Supplier>().unwrap(), Supplier::Sifa);
    }

    #[test]
    fn test_italbox() {
        assert_eq!(Supplier::Italbox.apply("KBFFFK22222EB"), "KBFFFK/22222/EB");
        assert_eq!(Supplier::Italbox.apply("AB12CD EF34GH"), "AB/12/CD EF/34/GH");
    }

    #[test]
    fn test_italbox_no_match_is_identity() {
        assert_eq!(Supplier::Italbox.apply("12345"), "12345");
        assert_eq!(Supplier::Italbox.apply("ABC123"), "ABC123");
        assert_eq!(Supplier::Italbox.apply(""), "");
    }

    #[test]
    fn test_sifa() {
        assert_eq!(Supplier::Sifa.apply("AB 12 CD"), "AB/12/CD");
        assert_eq!(Supplier::Sifa.apply("AB  \t12\nCD"), "AB/12/CD");
        assert_eq!(Supplier::Sifa.apply("AB12CD"), "AB12CD");
    }

    #[test]
    fn test_sifa_whitespace_set() {
        assert_eq!(Supplier::Sifa.apply("A\u{85}B"), "A\u{85}B");
        assert_eq!(Supplier::Sifa.apply("A\u{FEFF}B"), "A/B");
        assert_eq!(Supplier::Sifa.apply("A\u{A0}\u{3000}B"), "A/B");
    }

    #[test]
    fn test_sifa_matches_field_trimming() {
        let samples = [
            '\t', '\u{0B}', ' ', '\u{85}', '\u{A0}', '\u{2007}', '\u{200B}', '\u{FEFF}', 'x',
        ];
        for c in samples {
            let collapsed = Supplier::Sifa.apply(&c.to_string()) == "/";
            assert_eq!(collapsed, crate::ingest::is_space(c), "{c:?}");
        }
    }

    #[test]
    fn test_ondulati_santerno() {
        assert_eq!(Supplier::OndulatiSanterno.apply("B/KFT/222"), "KFT/222/B");
        assert_eq!(Supplier::OndulatiSanterno.apply("A/B"), "A/B");
        assert_eq!(Supplier::OndulatiSanterno.apply("A/B/C/D"), "A/B/C/D");
        assert_eq!(Supplier::OndulatiSanterno.apply("//"), "//");
    }

    #[test]
    fn test_backslash_rules() {
        assert_eq!(Supplier::Progest.apply(r"KMT\242\B"), "KMT/242/B");
        assert_eq!(Supplier::OndulatiDelSavio.apply(r"KMT\242\B"), "KMT/242/B");
    }

    #[test]
    fn test_progest_is_idempotent() {
        let once = Supplier::Progest.apply(r"KMT\242\B");
        assert_eq!(Supplier::Progest.apply(&once), once);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Supplier::OndulatiDelSavio.to_string(), "ONDULATI DEL SAVIO");
    }
}

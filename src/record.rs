//! Output record formatting.

use crate::Supplier;

/// Field separator for output records.
pub const FIELD_SEPARATOR: char = ';';

/// Rewrite `text` with the supplier rule and join it with `value`.
///
/// `value` is copied verbatim; it is not checked to be numeric.
pub fn format_record(supplier: Supplier, text: &str, value: &str) -> String {
    format!("{}{FIELD_SEPARATOR}{value}", supplier.apply(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_italbox() {
        assert_eq!(
            format_record(Supplier::Italbox, "KBFFFK22222EB", "10"),
            "KBFFFK/22222/EB;10"
        );
    }

    #[test]
    fn test_value_is_verbatim() {
        assert_eq!(
            format_record(Supplier::Progest, r"A\1\B", " 12,50 €"),
            "A/1/B; 12,50 €"
        );
    }
}

//! Value ordering used by the sort stage.
//!
//! Two texts compare locale-style, two numbers compare numerically, and any
//! other pairing (mixed types, missing values) falls back to comparing the
//! display strings. Missing values display as the empty string.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::row::FieldValue;

/// Base letters only: decomposed, accents dropped, case folded.
fn primary_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase)
}

/// Decomposed and case folded, accents kept.
fn secondary_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Compares two strings the way a user-facing collation would.
///
/// Three levels, each consulted only on a tie of the previous one:
/// base letters ignoring accents and case, then accents (unaccented first),
/// then case (lowercase before uppercase). Close to a root-locale collation
/// for the Latin-script identifiers and names the dashboard deals with.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_chars(a)
        .cmp(primary_chars(b))
        .then_with(|| secondary_chars(a).cmp(secondary_chars(b)))
        .then_with(|| {
            for (ca, cb) in a.nfd().zip(b.nfd()) {
                if ca != cb {
                    return match (ca.is_lowercase(), cb.is_lowercase()) {
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        _ => ca.cmp(&cb),
                    };
                }
            }
            a.nfd().count().cmp(&b.nfd().count())
        })
}

/// Compares two optional field values in ascending order.
pub fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => locale_compare(x, y),
        // NaN has no place in the order; treat it as equal so the stable
        // sort keeps its original position
        (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        _ => {
            let x = a.map(FieldValue::display_string).unwrap_or_default();
            let y = b.map(FieldValue::display_string).unwrap_or_default();
            locale_compare(&x, &y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_locale_compare_is_case_insensitive_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zulu", "alpha"), Ordering::Greater);
        assert_eq!(locale_compare("abc", "abc"), Ordering::Equal);
    }

    #[test]
    fn test_locale_compare_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Truck", "truck"), Ordering::Greater);
    }

    #[test]
    fn test_locale_compare_ignores_accents_first() {
        assert_eq!(locale_compare("Étienne", "Zoe"), Ordering::Less);
        assert_eq!(locale_compare("Zürich", "Zwolle"), Ordering::Less);
        assert_eq!(locale_compare("Gdańsk", "Gdynia"), Ordering::Less);
        assert_eq!(locale_compare("Malmö", "Malmo"), Ordering::Greater);
        assert_eq!(locale_compare("café", "cafe"), Ordering::Greater);
        assert_eq!(locale_compare("Café", "café"), Ordering::Greater);
    }

    #[test]
    fn test_locale_compare_precomposed_equals_decomposed() {
        assert_eq!(locale_compare("Z\u{fc}rich", "Zu\u{308}rich"), Ordering::Equal);
    }

    #[test]
    fn test_numbers_compare_numerically() {
        let nine = FieldValue::Number(9.0);
        let ten = FieldValue::Number(10.0);
        assert_eq!(compare_values(Some(&nine), Some(&ten)), Ordering::Less);
    }

    #[test]
    fn test_numeric_strings_compare_as_text() {
        // "10" < "9" as text; only real numbers get numeric order
        assert_eq!(compare_values(Some(&text("10")), Some(&text("9"))), Ordering::Less);
    }

    #[test]
    fn test_mixed_types_fall_back_to_strings() {
        let n = FieldValue::Number(5.0);
        assert_eq!(compare_values(Some(&n), Some(&text("abc"))), Ordering::Less);
        assert_eq!(compare_values(Some(&FieldValue::Bool(true)), Some(&text("false"))), Ordering::Greater);
    }

    #[test]
    fn test_missing_sorts_as_empty_string() {
        assert_eq!(compare_values(None, Some(&text("a"))), Ordering::Less);
        assert_eq!(compare_values(None, None), Ordering::Equal);
    }
}

//! Cleaning and format checks applied to raw OCR output.

pub const PLATE_LEN: usize = 6;
const TRAILING_DIGITS: usize = 2;

/// Keeps only the alphanumeric characters of an OCR result.
pub fn clean_text(raw: &str) -> String {
    raw.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Six characters, the last two decimal digits, every letter upper case.
///
/// A text with no letters at all is not upper case, so `"123456"` is rejected.
pub fn has_plate_format(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != PLATE_LEN {
        return false;
    }

    let digits_tail = chars[PLATE_LEN - TRAILING_DIGITS..]
        .iter()
        .all(|c| c.is_ascii_digit());

    digits_tail && is_upper_case(&chars)
}

fn is_upper_case(chars: &[char]) -> bool {
    let mut cased = false;
    for c in chars {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clean_text_strips_punctuation() {
        assert_eq!(clean_text("ab1234!!"), "ab1234");
        assert_eq!(clean_text("AB-12·34"), "AB1234");
        assert_eq!(clean_text(" A B\n12 34\u{c}"), "AB1234");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_format_scenarios() {
        assert!(!has_plate_format(&clean_text("ab1234!!")));
        assert!(has_plate_format(&clean_text("AB-12·34")));
        assert!(has_plate_format("A1B234"));
        assert!(!has_plate_format("AB12C4"));
        assert!(!has_plate_format("ABC12"));
        assert!(!has_plate_format("ABCD123"));
        assert!(!has_plate_format("123456"));
        assert!(!has_plate_format("ABCDEF"));
    }

    proptest! {
        #[test]
        fn accepts_upper_case_with_digit_tail(
            head in "[A-Z][A-Z0-9]{3}",
            tail in "[0-9]{2}"
        ) {
            prop_assert!(has_plate_format(&format!("{head}{tail}")));
        }

        #[test]
        fn rejects_any_other_length(text in "[A-Z]{0,10}[0-9]{2}") {
            prop_assume!(text.chars().count() != PLATE_LEN);
            prop_assert!(!has_plate_format(&text));
        }

        #[test]
        fn rejects_lower_case_letters(
            head in "[A-Z0-9]{0,3}",
            lower in "[a-z]",
            tail in "[0-9]{2}"
        ) {
            let padding = "Z".repeat(3 - head.len());
            let text = format!("{head}{lower}{padding}{tail}");
            prop_assert_eq!(text.chars().count(), PLATE_LEN);
            prop_assert!(!has_plate_format(&text));
        }

        #[test]
        fn rejects_non_digit_tail(head in "[A-Z]{4}", tail in "[A-Z][0-9]|[0-9][A-Z]") {
            prop_assert!(!has_plate_format(&format!("{head}{tail}")));
        }

        #[test]
        fn cleaned_text_is_alphanumeric(raw in ".*") {
            prop_assert!(clean_text(&raw).chars().all(char::is_alphanumeric));
        }
    }
}

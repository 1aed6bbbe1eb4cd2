//! Live formatting for payment form fields.
//!
//! Each formatter returns the value to show after an edit, or `None` when the
//! edit should be rejected and the previous value kept. Nothing here checks
//! that a card is real.

/// Longest accepted card number, including grouping spaces.
pub const CARD_NUMBER_MAX_LEN: usize = 19;

/// Longest accepted expiry (`MM/YY`).
pub const EXPIRY_MAX_LEN: usize = 5;

/// Longest accepted security code.
pub const CVV_MAX_LEN: usize = 4;

/// Groups card digits in fours, e.g. `"12345678"` → `"1234 5678"`.
pub fn format_card_number(raw: &str) -> Option<String> {
    let mut formatted = String::with_capacity(raw.len() + raw.len() / 4);
    let mut run = 0_usize;

    for ch in raw.chars().filter(|ch| !ch.is_whitespace()) {
        formatted.push(ch);

        if ch.is_ascii_digit() {
            run += 1;

            if run == 4 {
                formatted.push(' ');
                run = 0;
            }
        } else {
            run = 0;
        }
    }

    let formatted = formatted.trim_end().to_string();

    (formatted.chars().count() <= CARD_NUMBER_MAX_LEN).then_some(formatted)
}

/// Keeps digits and inserts the month separator, e.g. `"0125"` → `"01/25"`.
pub fn format_expiry(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    let formatted = if digits.chars().count() >= 2 {
        let month: String = digits.chars().take(2).collect();
        let year: String = digits.chars().skip(2).take(2).collect();

        format!("{month}/{year}")
    } else {
        digits
    };

    (formatted.chars().count() <= EXPIRY_MAX_LEN).then_some(formatted)
}

/// Caps the security code length.
pub fn format_cvv(raw: &str) -> Option<String> {
    (raw.chars().count() <= CVV_MAX_LEN).then(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_number_groups_digits_in_fours() {
        assert_eq!(format_card_number("12345678").as_deref(), Some("1234 5678"));
    }

    #[test]
    fn card_number_regroups_after_edit() {
        assert_eq!(format_card_number("1234 56789").as_deref(), Some("1234 5678 9"));
    }

    #[test]
    fn card_number_accepts_full_sixteen_digits() {
        assert_eq!(
            format_card_number("4111111111111111").as_deref(),
            Some("4111 1111 1111 1111")
        );
    }

    #[test]
    fn card_number_rejects_seventeenth_digit() {
        assert_eq!(format_card_number("4111 1111 1111 11112"), None);
    }

    #[test]
    fn card_number_restarts_grouping_after_non_digit() {
        assert_eq!(format_card_number("12a3456").as_deref(), Some("12a3456"));
    }

    #[test]
    fn card_number_empty_stays_empty() {
        assert_eq!(format_card_number("").as_deref(), Some(""));
    }

    #[test]
    fn expiry_inserts_slash_after_month() {
        assert_eq!(format_expiry("0125").as_deref(), Some("01/25"));
    }

    #[test]
    fn expiry_with_two_digits_gets_trailing_slash() {
        assert_eq!(format_expiry("12").as_deref(), Some("12/"));
    }

    #[test]
    fn expiry_single_digit_is_unchanged() {
        assert_eq!(format_expiry("1").as_deref(), Some("1"));
    }

    #[test]
    fn expiry_drops_non_digits_and_extra_digits() {
        assert_eq!(format_expiry("01/2567").as_deref(), Some("01/25"));
    }

    #[test]
    fn cvv_accepts_up_to_four_characters() {
        assert_eq!(format_cvv("1234").as_deref(), Some("1234"));
    }

    #[test]
    fn cvv_rejects_fifth_character() {
        assert_eq!(format_cvv("12345"), None);
    }
}

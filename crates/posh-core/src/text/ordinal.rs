/// English ordinal suffix for `n`: "st", "nd", "rd" or "th".
///
/// Any number whose tens digit is 1 takes "th" (11th, 112th).
pub fn ordinal_suffix(n: u64) -> &'static str {
    let ones = n % 10;
    let tens = (n / 10) % 10;

    if tens == 1 {
        return "th";
    }
    match ones {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Renders `n` with its ordinal suffix, e.g. `21` -> `"21st"`.
pub fn ordinal(n: u64) -> String {
    format!("{}{}", n, ordinal_suffix(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(ordinal(0), "0th");
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(10), "10th");
    }

    #[test]
    fn test_teens_take_th() {
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(111), "111th");
        assert_eq!(ordinal(1_012), "1012th");
    }

    #[test]
    fn test_larger_numbers() {
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(103), "103rd");
        assert_eq!(ordinal(121), "121st");
        assert_eq!(ordinal(u64::MAX), "18446744073709551615th");
    }

    proptest! {
        #[test]
        fn suffix_depends_only_on_last_two_digits(n in any::<u64>()) {
            prop_assert_eq!(ordinal_suffix(n), ordinal_suffix(n % 100));
        }

        #[test]
        fn ordinal_starts_with_decimal(n in any::<u64>()) {
            let rendered = ordinal(n);
            prop_assert!(rendered.starts_with(&n.to_string()));
            prop_assert_eq!(rendered.len(), n.to_string().len() + 2);
        }
    }
}

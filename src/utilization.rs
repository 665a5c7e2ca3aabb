use crate::quantity::Amount;

/// Rendered in place of a percentage when allocatable is zero or missing.
pub const PERCENT_UNDEFINED: &str = "N/A";

/// `allocated` as a percentage of `allocatable`, e.g. `"50.00%"`.
/// Over-commitment is reported as is (values above 100% are not clamped).
pub fn percent(allocated: &Amount, allocatable: &Amount) -> String {
    return match Amount::approximate_ratio(allocated, allocatable) {
        Some(ratio) => format!("{:.2}%", ratio * 100.0),
        None => PERCENT_UNDEFINED.to_string(),
    };
}

#[cfg(test)]
mod test {
    use rstest::*;

    use super::*;

    fn amount(text: &str) -> Amount {
        return Amount::try_from(text).unwrap();
    }

    #[rstest]
    #[case("2", "4", "50.00%")]
    #[case("3", "10", "30.00%")]
    #[case("0", "4", "0.00%")]
    #[case("1", "3", "33.33%")]
    #[case("6", "4", "150.00%")]
    #[case("500m", "2", "25.00%")]
    #[case("1Gi", "4Gi", "25.00%")]
    fn test_percent(#[case] allocated: &str, #[case] allocatable: &str, #[case] expected: &str) {
        assert_eq!(percent(&amount(allocated), &amount(allocatable)), expected);
    }

    #[rstest]
    #[case(amount("1"))]
    #[case(Amount::zero())]
    fn test_percent_zero_allocatable(#[case] allocated: Amount) {
        assert_eq!(percent(&allocated, &amount("0")), PERCENT_UNDEFINED);
        assert_eq!(percent(&allocated, &Amount::zero()), PERCENT_UNDEFINED);
    }
}

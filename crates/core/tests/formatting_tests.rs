// ═══════════════════════════════════════════════════════════════════
// Formatting Tests: AmountFormatter, FormatOptions, amount parsing
// ═══════════════════════════════════════════════════════════════════

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use invoice_builder_core::errors::CoreError;
use invoice_builder_core::formatting::parse::{parse_amount, parse_quantity};
use invoice_builder_core::formatting::{AmountFormatter, FormatOptions, DEFAULT_GROUP_SIZE};

fn fmt(amount: f64) -> String {
    AmountFormatter::new()
        .format(amount, &FormatOptions::new())
        .unwrap()
}

fn fmt_with(amount: f64, options: FormatOptions) -> String {
    AmountFormatter::new().format(amount, &options).unwrap()
}

fn fmt_dec(amount: Decimal) -> String {
    AmountFormatter::new()
        .format_decimal(&amount, &FormatOptions::new())
        .unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Zero & integers
// ═══════════════════════════════════════════════════════════════════

mod integers {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(fmt(0.0), "0");
    }

    #[test]
    fn zero_with_prefix() {
        assert_eq!(fmt_with(0.0, FormatOptions::new().with_prefix("$")), "$0");
    }

    #[test]
    fn negative_zero_prints_unsigned() {
        assert_eq!(fmt(-0.0), "0");
    }

    #[test]
    fn zero_with_forced_decimals() {
        assert_eq!(fmt_with(0.0, FormatOptions::new().with_decimal_places(2)), "0.00");
    }

    #[test]
    fn groups_every_three_digits() {
        assert_eq!(fmt(1234567.0), "1,234,567");
    }

    #[test]
    fn exact_group_boundaries() {
        assert_eq!(fmt(999.0), "999");
        assert_eq!(fmt(1000.0), "1,000");
        assert_eq!(fmt(100000.0), "100,000");
        assert_eq!(fmt(1000000.0), "1,000,000");
    }

    #[test]
    fn large_values_stay_in_plain_notation() {
        assert_eq!(fmt(1e21), "1,000,000,000,000,000,000,000");
    }

    #[test]
    fn negative_integers() {
        assert_eq!(fmt(-5.0), "-5");
        assert_eq!(fmt(-1000.0), "-1,000");
        assert_eq!(fmt(-1234567.0), "-1,234,567");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Fractions
// ═══════════════════════════════════════════════════════════════════

mod fractions {
    use super::*;

    #[test]
    fn single_fraction_digit_is_padded() {
        assert_eq!(fmt(1234.5), "1,234.50");
    }

    #[test]
    fn two_fraction_digits_kept() {
        assert_eq!(fmt(12.25), "12.25");
    }

    #[test]
    fn more_than_two_digits_are_rounded() {
        assert_eq!(fmt(1234.567), "1,234.57");
        assert_eq!(fmt(1234.561), "1,234.56");
    }

    #[test]
    fn midpoint_rounds_away_from_zero() {
        assert_eq!(fmt(0.125), "0.13");
        assert_eq!(fmt(-0.125), "-0.13");
    }

    #[test]
    fn rounding_carries_into_new_group() {
        assert_eq!(fmt(999999.995), "1,000,000.00");
    }

    #[test]
    fn float_noise_does_not_leak() {
        assert_eq!(fmt(0.1 + 0.2), "0.30");
    }

    #[test]
    fn tiny_negative_rounds_to_unsigned_zero() {
        assert_eq!(fmt(-0.001), "0.00");
    }

    #[test]
    fn negative_fraction_with_prefix() {
        assert_eq!(
            fmt_with(-1234.5, FormatOptions::new().with_prefix("$")),
            "$-1,234.50"
        );
    }

    #[test]
    fn exact_decimal_trailing_zeros_are_not_digits() {
        assert_eq!(fmt_dec(dec!(800.00)), "800");
        assert_eq!(fmt_dec(dec!(1234.50)), "1,234.50");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Options
// ═══════════════════════════════════════════════════════════════════

mod options {
    use super::*;

    #[test]
    fn default_options_are_empty() {
        let o = FormatOptions::new();
        assert_eq!(o.prefix, None);
        assert_eq!(o.decimal_places, None);
        assert_eq!(o.group_size, None);
    }

    #[test]
    fn forced_decimals_on_integer() {
        assert_eq!(
            fmt_with(1234.0, FormatOptions::new().with_decimal_places(2)),
            "1,234.00"
        );
    }

    #[test]
    fn forced_zero_decimals_rounds() {
        assert_eq!(fmt_with(1234.5, FormatOptions::new().with_decimal_places(0)), "1,235");
        assert_eq!(fmt_with(1234.4, FormatOptions::new().with_decimal_places(0)), "1,234");
    }

    #[test]
    fn forced_one_decimal_pads_one_digit_value() {
        assert_eq!(
            fmt_with(1234.5, FormatOptions::new().with_decimal_places(1)),
            "1,234.50"
        );
    }

    #[test]
    fn forced_one_decimal_does_not_pad_rounded_value() {
        assert_eq!(
            fmt_with(1234.56, FormatOptions::new().with_decimal_places(1)),
            "1,234.6"
        );
    }

    #[test]
    fn forced_three_decimals() {
        assert_eq!(fmt_with(1.5, FormatOptions::new().with_decimal_places(3)), "1.500");
    }

    #[test]
    fn custom_group_size() {
        assert_eq!(fmt_with(1234567.0, FormatOptions::new().with_group_size(4)), "123,4567");
        assert_eq!(fmt_with(1234567.0, FormatOptions::new().with_group_size(2)), "1,23,45,67");
    }

    #[test]
    fn zero_group_size_falls_back_to_default() {
        assert_eq!(DEFAULT_GROUP_SIZE, 3);
        assert_eq!(fmt_with(1234567.0, FormatOptions::new().with_group_size(0)), "1,234,567");
    }

    #[test]
    fn group_size_does_not_touch_fraction() {
        assert_eq!(
            fmt_with(12345.67, FormatOptions::new().with_group_size(2)),
            "1,23,45.67"
        );
    }

    #[test]
    fn multi_character_prefix() {
        assert_eq!(
            fmt_with(850.0, FormatOptions::new().with_prefix("US $")),
            "US $850"
        );
    }

    #[test]
    fn too_many_decimal_places_rejected() {
        let err = AmountFormatter::new()
            .format(1.0, &FormatOptions::new().with_decimal_places(21))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidFormatOptions(_)));
    }

    #[test]
    fn max_decimal_places_accepted() {
        let s = fmt_with(1.0, FormatOptions::new().with_decimal_places(20));
        assert_eq!(s, format!("1.{}", "0".repeat(20)));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Invalid input & determinism
// ═══════════════════════════════════════════════════════════════════

mod invalid_input {
    use super::*;

    #[test]
    fn nan_is_labeled_error() {
        let err = AmountFormatter::new()
            .format(f64::NAN, &FormatOptions::new())
            .unwrap_err();
        match err {
            CoreError::InvalidNumber { field, .. } => assert_eq!(field, "amount"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn infinity_is_error() {
        let f = AmountFormatter::new();
        assert!(f.format(f64::INFINITY, &FormatOptions::new()).is_err());
        assert!(f.format(f64::NEG_INFINITY, &FormatOptions::new()).is_err());
    }

    #[test]
    fn beyond_decimal_range_still_formats() {
        assert_eq!(fmt(1e30), "1,000,000,000,000,000,000,000,000,000,000");
        assert_eq!(fmt(-1e29), "-100,000,000,000,000,000,000,000,000,000");
        assert_eq!(
            fmt_with(1e29, FormatOptions::new().with_prefix("$").with_decimal_places(2)),
            "$100,000,000,000,000,000,000,000,000,000.00"
        );
    }

    #[test]
    fn every_finite_extreme_formats() {
        let f = AmountFormatter::new();
        for amount in [f64::MAX, f64::MIN, 1e-30, 5e-324, -5e-324] {
            assert!(f.format(amount, &FormatOptions::new()).is_ok(), "{amount}");
        }
        let max = fmt(f64::MAX);
        assert!(max.starts_with("179,769,313,486,231,570"));
    }

    #[test]
    fn beyond_decimal_range_still_checks_options() {
        let err = AmountFormatter::new()
            .format(1e30, &FormatOptions::new().with_decimal_places(21))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidFormatOptions(_)));
    }

    #[test]
    fn formatting_twice_is_identical() {
        let f = AmountFormatter::new();
        let options = FormatOptions::new().with_prefix("$");
        for amount in [0.0, 1234.5, -1234.5, 0.125, 1234567.0, 99.99] {
            let first = f.format(amount, &options).unwrap();
            let second = f.format(amount, &options).unwrap();
            assert_eq!(first, second);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Parsing form input
// ═══════════════════════════════════════════════════════════════════

mod parsing {
    use super::*;

    #[test]
    fn plain_number() {
        assert_eq!(parse_amount("price", "42", None).unwrap(), dec!(42));
        assert_eq!(parse_amount("price", "  42.5 ", None).unwrap(), dec!(42.5));
    }

    #[test]
    fn prefix_and_separators() {
        assert_eq!(
            parse_amount("price", "$1,234.50", Some("$")).unwrap(),
            dec!(1234.50)
        );
    }

    #[test]
    fn sign_on_either_side_of_prefix() {
        assert_eq!(parse_amount("vat", "-$5", Some("$")).unwrap(), dec!(-5));
        assert_eq!(parse_amount("vat", "$-5", Some("$")).unwrap(), dec!(-5));
    }

    #[test]
    fn empty_is_error_not_zero() {
        let err = parse_amount("price", "", Some("$")).unwrap_err();
        match err {
            CoreError::InvalidNumber { field, value } => {
                assert_eq!(field, "price");
                assert_eq!(value, "");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn prefix_only_is_error() {
        assert!(parse_amount("price", "$", Some("$")).is_err());
    }

    #[test]
    fn garbage_is_error() {
        for text in ["abc", "1.2.3", "--5", "1e5", "12a", "NaN"] {
            assert!(
                parse_amount("price", text, Some("$")).is_err(),
                "expected '{text}' to be rejected"
            );
        }
    }

    #[test]
    fn quantity_accepts_fractions() {
        assert_eq!(parse_quantity("2.5").unwrap(), dec!(2.5));
        assert_eq!(parse_quantity("0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn negative_quantity_rejected() {
        let err = parse_quantity("-1").unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn parsed_amount_formats_back() {
        let value = parse_amount("price", "$1,234.5", Some("$")).unwrap();
        let s = AmountFormatter::new()
            .format_decimal(&value, &FormatOptions::new().with_prefix("$"))
            .unwrap();
        assert_eq!(s, "$1,234.50");
    }
}

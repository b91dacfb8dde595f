use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Parses a TEXT-stored amount into a Decimal, falling back through f64
/// for scientific notation. Returns ZERO (and logs) on garbage rather
/// than failing a whole listing.
pub(crate) fn parse_stored_decimal(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str).ok().and_then(Decimal::from_f64) {
            Some(dec_val) => dec_val,
            None => {
                log::error!(
                    "Failed to parse {} '{}' as Decimal ({}). Falling back to ZERO.",
                    field_name,
                    value_str,
                    e_decimal
                );
                Decimal::ZERO
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_plain_decimal() {
        assert_eq!(parse_stored_decimal("12.34", "amount"), dec!(12.34));
    }

    #[test]
    fn parses_scientific_notation_via_f64() {
        assert_eq!(parse_stored_decimal("1e2", "amount"), dec!(100));
    }

    #[test]
    fn garbage_falls_back_to_zero() {
        assert_eq!(parse_stored_decimal("not-a-number", "amount"), Decimal::ZERO);
    }
}

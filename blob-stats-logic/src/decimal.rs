use bigdecimal::BigDecimal;
use serde::Serializer;
use serde_with::SerializeAs;

/// Integer `numeric` values as plain decimal digits.
///
/// Postgres decodes values ending in whole groups of zeros with
/// a negative scale, which `Display` prints in exponent form.
pub fn plain_decimal(value: &BigDecimal) -> String {
    value.with_scale(0).to_plain_string()
}

/// `serde_as` adapter serializing through [`plain_decimal`].
pub struct PlainDecimal;

impl SerializeAs<BigDecimal> for PlainDecimal {
    fn serialize_as<S>(source: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&plain_decimal(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde::Serialize;
    use serde_with::serde_as;
    use std::str::FromStr;

    #[rstest]
    #[case(BigDecimal::new(100.into(), -16), "1000000000000000000")]
    #[case(BigDecimal::new(10.into(), -20), "1000000000000000000000")]
    #[case(BigDecimal::new(393216.into(), 0), "393216")]
    #[case(BigDecimal::from(0), "0")]
    #[case(BigDecimal::from_str("123456789012345678901234").unwrap(), "123456789012345678901234")]
    fn prints_integers_without_exponent(#[case] value: BigDecimal, #[case] expected: &str) {
        assert_eq!(expected, plain_decimal(&value));
    }

    #[test]
    fn serde_adapter_uses_plain_digits() {
        #[serde_as]
        #[derive(Serialize)]
        struct Totals {
            #[serde_as(as = "PlainDecimal")]
            total: BigDecimal,
            #[serde_as(as = "Vec<PlainDecimal>")]
            daily: Vec<BigDecimal>,
        }

        let totals = Totals {
            total: BigDecimal::new(100.into(), -16),
            daily: vec![BigDecimal::new(1.into(), -4), BigDecimal::from(7)],
        };
        assert_eq!(
            serde_json::json!({"total": "1000000000000000000", "daily": ["10000", "7"]}),
            serde_json::to_value(&totals).unwrap()
        );
    }
}

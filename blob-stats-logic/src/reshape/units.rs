use num_traits::AsPrimitive;
use serde::Serialize;
use strum::{Display, EnumString};

const BYTES_IN_KILOBYTE: f64 = 1024.0;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
)]
pub enum EthUnit {
    #[default]
    #[strum(serialize = "wei")]
    #[serde(rename = "wei")]
    Wei,
    #[strum(serialize = "Gwei")]
    #[serde(rename = "Gwei")]
    Gwei,
    #[strum(serialize = "ether")]
    #[serde(rename = "ether")]
    Ether,
}

impl EthUnit {
    pub fn factor(&self) -> f64 {
        match self {
            EthUnit::Wei => 1.0,
            EthUnit::Gwei => 1e9,
            EthUnit::Ether => 1e18,
        }
    }

    /// Largest unit whose factor does not exceed `max`.
    pub fn for_max(max: f64) -> Self {
        [EthUnit::Ether, EthUnit::Gwei]
            .into_iter()
            .find(|unit| max >= unit.factor())
            .unwrap_or(EthUnit::Wei)
    }

    /// Unit for a whole series, chosen by its largest absolute value.
    pub fn for_values<'a>(values: impl IntoIterator<Item = &'a f64>) -> Self {
        let max = values
            .into_iter()
            .map(|value| value.abs())
            .filter(|value| value.is_finite())
            .fold(0.0, f64::max);
        Self::for_max(max)
    }

    pub fn scale(&self, wei: f64) -> f64 {
        wei / self.factor()
    }
}

/// Wei amounts expressed in a single unit shared by every element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScaledSeries {
    pub unit: EthUnit,
    pub values: Vec<f64>,
}

impl ScaledSeries {
    pub fn with_unit<T: AsPrimitive<f64>>(unit: EthUnit, wei: &[T]) -> Self {
        Self {
            unit,
            values: wei.iter().map(|&value| unit.scale(value.as_())).collect(),
        }
    }

    pub fn from_wei<T: AsPrimitive<f64>>(wei: &[T]) -> Self {
        let wei: Vec<f64> = wei.iter().map(|&value| value.as_()).collect();
        Self::with_unit(EthUnit::for_values(&wei), &wei)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Scales series drawn on one axis with the unit of the largest value among all of them.
pub fn scale_together<const N: usize>(series: [&[f64]; N]) -> [ScaledSeries; N] {
    let unit = EthUnit::for_values(series.iter().flat_map(|values| values.iter()));
    series.map(|values| ScaledSeries::with_unit(unit, values))
}

pub fn bytes_to_kilobytes<T: AsPrimitive<f64>>(bytes: &[T]) -> Vec<f64> {
    bytes
        .iter()
        .map(|&value| value.as_() / BYTES_IN_KILOBYTE)
        .collect()
}

/// Zero divisor gives zero.
pub fn ratio<A, B>(dividend: A, divisor: B) -> f64
where
    A: AsPrimitive<f64>,
    B: AsPrimitive<f64>,
{
    let divisor: f64 = divisor.as_();
    let dividend: f64 = dividend.as_();
    if divisor == 0.0 {
        0.0
    } else {
        dividend / divisor
    }
}

/// Day-by-day [`ratio`] of two aligned arrays.
pub fn ratios<A, B>(dividends: &[A], divisors: &[B]) -> Vec<f64>
where
    A: AsPrimitive<f64>,
    B: AsPrimitive<f64>,
{
    debug_assert_eq!(dividends.len(), divisors.len());
    dividends
        .iter()
        .zip(divisors)
        .map(|(dividend, divisor)| ratio(*dividend, *divisor))
        .collect()
}

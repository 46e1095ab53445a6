use rust_decimal::Decimal;

use crate::error::{Result, SpecError};
use crate::op::{within, Op};
use crate::specification::{Specification, SpecificationExt};
use crate::traits::HasPrice;

fn decimal(value: f64) -> Result<Decimal> {
    Decimal::try_from(value).map_err(|_| SpecError::InvalidDecimal(value))
}

/// Price strictly greater than the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceGreaterThan {
    bound: Decimal,
}

impl PriceGreaterThan {
    /// Matches prices above `bound`.
    pub fn new(bound: impl Into<Decimal>) -> Self {
        PriceGreaterThan {
            bound: bound.into(),
        }
    }

    /// Builds from a float bound. Fails on NaN and infinities.
    pub fn from_f64(bound: f64) -> Result<Self> {
        Ok(Self::new(decimal(bound)?))
    }
}

impl<T: HasPrice> Specification<T> for PriceGreaterThan {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate
            .price()
            .is_some_and(|price| Op::Gt.compare(&price, &self.bound))
    }

    fn describe(&self) -> String {
        format!("price {} {}", Op::Gt, self.bound)
    }
}

impl SpecificationExt for PriceGreaterThan {}

/// Price strictly less than the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLessThan {
    bound: Decimal,
}

impl PriceLessThan {
    /// Matches prices below `bound`.
    pub fn new(bound: impl Into<Decimal>) -> Self {
        PriceLessThan {
            bound: bound.into(),
        }
    }

    /// Builds from a float bound. Fails on NaN and infinities.
    pub fn from_f64(bound: f64) -> Result<Self> {
        Ok(Self::new(decimal(bound)?))
    }
}

impl<T: HasPrice> Specification<T> for PriceLessThan {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate
            .price()
            .is_some_and(|price| Op::Lt.compare(&price, &self.bound))
    }

    fn describe(&self) -> String {
        format!("price {} {}", Op::Lt, self.bound)
    }
}

impl SpecificationExt for PriceLessThan {}

/// Price within `[min, max]` inclusive. Comparison is numeric, so `100.0`
/// and `100` are the same bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBetween {
    min: Decimal,
    max: Decimal,
}

impl PriceBetween {
    /// Matches prices in `min..=max`; nothing when `min > max`.
    pub fn new(min: impl Into<Decimal>, max: impl Into<Decimal>) -> Self {
        PriceBetween {
            min: min.into(),
            max: max.into(),
        }
    }

    /// Builds from float bounds. Fails when either is NaN or infinite.
    pub fn from_f64(min: f64, max: f64) -> Result<Self> {
        Ok(Self::new(decimal(min)?, decimal(max)?))
    }
}

impl<T: HasPrice> Specification<T> for PriceBetween {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate
            .price()
            .is_some_and(|price| within(&price, &self.min, &self.max))
    }

    fn describe(&self) -> String {
        format!("price in [{}, {}]", self.min, self.max)
    }
}

impl SpecificationExt for PriceBetween {}

//! Fixed-point rating, stored as `decimal(3, 1)`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::StoreError;

pub const RATING_MAX_DIGITS: u32 = 3;
pub const RATING_DECIMAL_PLACES: u32 = 1;

/// Largest magnitude that fits in `decimal(3, 1)`: 99.9.
fn rating_limit() -> Decimal {
    Decimal::new(999, RATING_DECIMAL_PLACES)
}

/// Quantize a rating to one fractional digit, rounding half to even.
///
/// Fails if the quantized value needs more than three digits. No range
/// check is applied beyond that, so negative ratings are accepted.
pub fn normalize_rating(value: Decimal) -> Result<Decimal, StoreError> {
    let mut rounded =
        value.round_dp_with_strategy(RATING_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    if rounded.abs() > rating_limit() {
        return Err(StoreError::Validation(format!(
            "Rating must have at most {RATING_MAX_DIGITS} digits with {RATING_DECIMAL_PLACES} decimal place, got {value}"
        )));
    }
    rounded.rescale(RATING_DECIMAL_PLACES);
    Ok(rounded)
}

/// Normalize a value read back from storage. Backends without a native
/// decimal type may hand back a value like 4.2999999999999998.
pub(crate) fn from_stored(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(RATING_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(RATING_DECIMAL_PLACES);
    rounded
}

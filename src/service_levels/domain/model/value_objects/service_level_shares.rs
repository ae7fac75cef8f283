use std::ops::RangeInclusive;

use crate::shared::domain::model::value_objects::field_violation::FieldViolation;

const SHARES_RANGE: RangeInclusive<i64> = 1..=1000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ServiceLevelShares(i64);

impl ServiceLevelShares {
    pub fn new(value: i64) -> Result<Self, FieldViolation> {
        if !SHARES_RANGE.contains(&value) {
            return Err(FieldViolation::new(
                "shares",
                "Out of range",
                "shares must be between 1 and 1000 (inclusive).",
            ));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

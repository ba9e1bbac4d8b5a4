//! Direction inference for bulk imports.
//!
//! The clock hardware records no direction, so freshly imported punches of
//! one employee-day must be labeled before persisting. The policy is
//! swappable: a stricter or device-assisted strategy can replace the
//! default without touching the classifier or the accounting engine.

use crate::models::direction::Direction;
use chrono::{DateTime, FixedOffset};

/// Assigns one direction per punch of a single employee-day.
/// `timestamps` must already be sorted ascending.
pub trait TypeInference {
    fn infer_types(&self, timestamps: &[DateTime<FixedOffset>]) -> Vec<Direction>;
}

/// Strict alternation: 1st, 3rd, 5th... punch is an entrada, the rest are
/// saidas. Assumes the employee always punches in alternation with no
/// duplicate taps; a double tap or missed punch mis-labels the remainder
/// of the day and is NOT reconciled against an expected shift pattern.
pub struct AlternationPolicy;

impl TypeInference for AlternationPolicy {
    fn infer_types(&self, timestamps: &[DateTime<FixedOffset>]) -> Vec<Direction> {
        timestamps
            .iter()
            .enumerate()
            .map(|(i, _)| {
                if i % 2 == 0 {
                    Direction::Entrada
                } else {
                    Direction::Saida
                }
            })
            .collect()
    }
}

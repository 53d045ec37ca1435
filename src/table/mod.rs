//! Period Tables
//!
//! One [`PeriodTable`] holds the 84 timer periods (7 octaves x 12 notes) for a
//! single clock divisor. [`PeriodTables`] holds one table per supported
//! divisor, always in [`DIVISORS`] order.

use serde::Serialize;
use tracing::debug;

use crate::tuning::{Tuning, NOTES_PER_OCTAVE, OCTAVES};
use crate::{PeriodTableError, Result};

/// Clock divisors of the supported 2A03 variants, in output order
pub const DIVISORS: [u8; 3] = [12, 15, 16];

/// Entries per table
pub const TABLE_LEN: usize = OCTAVES * NOTES_PER_OCTAVE;

/// Timer periods for every note at one clock divisor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodTable {
    divisor: u8,
    #[serde(serialize_with = "serialize_periods")]
    periods: [u16; TABLE_LEN],
}

impl PeriodTable {
    /// Compute the table for `divisor`
    ///
    /// Entries are produced octave-outer, note-inner, so index
    /// `octave * 12 + note` holds that note's period.
    pub fn generate(tuning: &Tuning, divisor: u8) -> Result<Self> {
        if divisor == 0 {
            return Err(PeriodTableError::ConfigError(
                "clock divisor must be non-zero".to_string(),
            ));
        }
        tuning.validate()?;

        let mut periods = [0u16; TABLE_LEN];
        for octave in 0..OCTAVES {
            for note in 0..NOTES_PER_OCTAVE {
                periods[octave * NOTES_PER_OCTAVE + note] = tuning.period(divisor, octave, note);
            }
        }

        debug!(
            divisor,
            first = periods[0],
            last = periods[TABLE_LEN - 1],
            "generated period table"
        );

        Ok(PeriodTable { divisor, periods })
    }

    /// Clock divisor this table was computed for
    pub fn divisor(&self) -> u8 {
        self.divisor
    }

    /// All 84 periods in note order
    pub fn periods(&self) -> &[u16; TABLE_LEN] {
        &self.periods
    }

    /// Period for `note` (0-11) in `octave` (0-6)
    pub fn period(&self, octave: usize, note: usize) -> Option<u16> {
        if octave >= OCTAVES || note >= NOTES_PER_OCTAVE {
            return None;
        }
        Some(self.periods[octave * NOTES_PER_OCTAVE + note])
    }

    /// Period for an absolute semitone index (0 = C1)
    pub fn get(&self, semitone: usize) -> Option<u16> {
        self.periods.get(semitone).copied()
    }

    /// Iterate over the table one octave (12 periods) at a time
    pub fn octaves(&self) -> impl Iterator<Item = &[u16]> {
        self.periods.chunks(NOTES_PER_OCTAVE)
    }
}

// serde only derives fixed-size arrays up to 32 elements
fn serialize_periods<S>(
    periods: &[u16; TABLE_LEN],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(periods.iter())
}

/// One period table per supported divisor, in [`DIVISORS`] order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PeriodTables {
    tables: Vec<PeriodTable>,
}

impl PeriodTables {
    /// Generate tables for every divisor in [`DIVISORS`]
    pub fn generate(tuning: &Tuning) -> Result<Self> {
        Self::generate_for(tuning, &DIVISORS)
    }

    /// Generate tables for an explicit divisor list, preserving its order
    pub fn generate_for(tuning: &Tuning, divisors: &[u8]) -> Result<Self> {
        let tables = divisors
            .iter()
            .map(|&divisor| PeriodTable::generate(tuning, divisor))
            .collect::<Result<Vec<_>>>()?;
        Ok(PeriodTables { tables })
    }

    /// Pick the table for a chip's clock divisor
    pub fn select(&self, divisor: u8) -> Option<&PeriodTable> {
        self.tables.iter().find(|table| table.divisor == divisor)
    }

    /// Iterate over the tables in generation order
    pub fn iter(&self) -> std::slice::Iter<'_, PeriodTable> {
        self.tables.iter()
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True if no tables were generated
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl<'a> IntoIterator for &'a PeriodTables {
    type Item = &'a PeriodTable;
    type IntoIter = std::slice::Iter<'a, PeriodTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

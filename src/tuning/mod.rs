//! Tuning Constants and Period Formula
//!
//! Converts a musical note into a 2A03 timer period:
//!
//! ```text
//! f = f_C1 * 2^(octave + note / 12)
//! T = round((clock / divisor) / (16 * f) - reload_offset)
//! ```
//!
//! The constants are carried in an immutable [`Tuning`] value that is handed
//! to table generation rather than living in globals.

use crate::{PeriodTableError, Result};

/// Frequency of C1 in Hz (octave 0, note 0 of every table)
pub const REFERENCE_C1_HZ: f64 = 32.70;

/// Master clock feeding the 2A03 divider, in Hz
pub const MASTER_CLOCK_HZ: f64 = 20_000_000.0;

/// Fixed divide-by-16 stage in front of the channel timers
pub const TIMER_MULTIPLIER: f64 = 16.0;

/// Notes per octave
pub const NOTES_PER_OCTAVE: usize = 12;

/// Octaves covered by a table (C1..B7)
pub const OCTAVES: usize = 7;

/// Tuning parameters for period generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Frequency of C1 in Hz
    pub reference_hz: f64,
    /// Master clock in Hz
    pub clock_hz: f64,
    /// Timer prescale multiplier
    pub timer_multiplier: f64,
    /// Constant subtracted before rounding (1 reproduces the firmware tables)
    pub reload_offset: u16,
}

impl Tuning {
    /// Tuning with the firmware's `T + 1` timer reload accounted for
    pub fn with_reload_offset(self) -> Self {
        Tuning {
            reload_offset: 1,
            ..self
        }
    }

    /// Check that every parameter yields finite, positive periods
    pub fn validate(&self) -> Result<()> {
        if !self.reference_hz.is_finite() || self.reference_hz <= 0.0 {
            return Err(PeriodTableError::ConfigError(format!(
                "reference pitch must be positive, got {}",
                self.reference_hz
            )));
        }
        if !self.clock_hz.is_finite() || self.clock_hz <= 0.0 {
            return Err(PeriodTableError::ConfigError(format!(
                "clock rate must be positive, got {}",
                self.clock_hz
            )));
        }
        if !self.timer_multiplier.is_finite() || self.timer_multiplier <= 0.0 {
            return Err(PeriodTableError::ConfigError(format!(
                "timer multiplier must be positive, got {}",
                self.timer_multiplier
            )));
        }
        Ok(())
    }

    /// Frequency in Hz of `note` (0-11) in `octave` (0 = octave 1)
    ///
    /// `note / 12` is a real division so every semitone gets its own pitch.
    pub fn note_frequency(&self, octave: usize, note: usize) -> f64 {
        let exponent = octave as f64 + note as f64 / NOTES_PER_OCTAVE as f64;
        self.reference_hz * 2f64.powf(exponent)
    }

    /// Unrounded timer period for a frequency at the given clock divisor
    pub fn exact_period(&self, divisor: u8, frequency: f64) -> f64 {
        let divided_clock = self.clock_hz / divisor as f64;
        divided_clock / (self.timer_multiplier * frequency) - self.reload_offset as f64
    }

    /// Timer period for `note` in `octave` at the given clock divisor
    ///
    /// Rounds half away from zero and saturates to the `u16` range.
    pub fn period(&self, divisor: u8, octave: usize, note: usize) -> u16 {
        let frequency = self.note_frequency(octave, note);
        let period = self.exact_period(divisor, frequency).round();
        period.clamp(0.0, u16::MAX as f64) as u16
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            reference_hz: REFERENCE_C1_HZ,
            clock_hz: MASTER_CLOCK_HZ,
            timer_multiplier: TIMER_MULTIPLIER,
            reload_offset: 0,
        }
    }
}

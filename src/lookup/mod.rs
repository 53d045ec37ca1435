//! Runtime Period Lookup
//!
//! What the synth does with a generated table at run time: turn a
//! fine-tuned pitch into the timer value for one 2A03 channel.
//!
//! Detuning by `dc` sixty-fourths of a semitone changes the period by a
//! factor of `2^(-dc / 768)`. For the 0..63 range of the fine offset this is
//! close enough to the line `1 - 0.00087696 * dc`, which is what the
//! firmware evaluates.

use crate::table::PeriodTable;
use crate::tuning::NOTES_PER_OCTAVE;

/// Slope of the linear detune approximation, per fine step
pub const FINE_STEP_FACTOR: f32 = 0.000_876_96;

/// Shortest period the channels are allowed to run at
pub const MIN_PERIOD: u16 = 8;

/// Longest period that fits the 11-bit channel timer
pub const MAX_PERIOD: u16 = 2047;

/// 2A03 tone channels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Square channel 1
    Pulse1,
    /// Square channel 2
    Pulse2,
    /// Triangle channel; its sequencer steps twice per pulse cycle
    Triangle,
    /// Noise channel
    Noise,
}

/// Fixed-point pitch: upper 10 bits semitone (0 = C1), lower 6 bits fine offset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tone(u16);

impl Tone {
    /// Fine steps per semitone
    pub const STEPS_PER_SEMITONE: u16 = 64;

    /// Highest semitone the 10-bit field can hold
    pub const MAX_SEMITONE: u16 = 0x3FF;

    /// Build from a raw 16-bit value
    pub fn from_raw(raw: u16) -> Self {
        Tone(raw)
    }

    /// Build from a semitone and fine offset
    ///
    /// Both fields are masked to their width: the semitone to 10 bits (wrapping
    /// above [`Tone::MAX_SEMITONE`]) and the offset to 6 bits. Debug builds
    /// reject semitones that do not fit.
    pub fn new(semitone: u16, offset: u8) -> Self {
        debug_assert!(
            semitone <= Self::MAX_SEMITONE,
            "semitone {semitone} does not fit in 10 bits"
        );
        let semitone = semitone & Self::MAX_SEMITONE;
        Tone((semitone << 6) | (offset as u16 & (Self::STEPS_PER_SEMITONE - 1)))
    }

    /// Raw 16-bit value
    pub fn raw(&self) -> u16 {
        self.0
    }

    /// Semitone above C1
    pub fn semitone(&self) -> u16 {
        self.0 >> 6
    }

    /// Fine offset in 1/64 semitone steps
    pub fn offset(&self) -> u8 {
        (self.0 & (Self::STEPS_PER_SEMITONE - 1)) as u8
    }
}

/// Timer period for `tone` on `channel`, clamped to [`MIN_PERIOD`]..=[`MAX_PERIOD`]
///
/// The triangle channel runs an octave low for the same timer value, so its
/// period is halved (`(T - 1) >> 1`). Its lowest octave has no room to halve
/// and instead reads one octave up the table unscaled.
pub fn channel_period(table: &PeriodTable, channel: Channel, tone: Tone) -> u16 {
    let semitone = tone.semitone() as usize;
    let last = table.periods().len() - 1;

    let (index, halve) = match channel {
        Channel::Triangle if semitone < NOTES_PER_OCTAVE => (semitone + NOTES_PER_OCTAVE, false),
        Channel::Triangle => (semitone, true),
        _ => (semitone, false),
    };
    let base_period = table.periods()[index.min(last)];

    let scale = 1.0 - FINE_STEP_FACTOR * tone.offset() as f32;
    let mut period = (scale * base_period as f32) as u16;

    if halve {
        period = period.saturating_sub(1) >> 1;
    }

    period.clamp(MIN_PERIOD, MAX_PERIOD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn firmware_table(divisor: u8) -> PeriodTable {
        PeriodTable::generate(&Tuning::default().with_reload_offset(), divisor).unwrap()
    }

    #[test]
    fn test_tone_fields() {
        let tone = Tone::new(25, 17);
        assert_eq!(tone.semitone(), 25);
        assert_eq!(tone.offset(), 17);
        assert_eq!(tone.raw(), (25 << 6) | 17);
        assert_eq!(Tone::from_raw(tone.raw()), tone);
        assert_eq!(Tone::new(1, 0xFF).offset(), 0x3F);
    }

    #[test]
    fn test_tone_semitone_range() {
        let top = Tone::new(Tone::MAX_SEMITONE, 5);
        assert_eq!(top.semitone(), 1023);
        assert_eq!(top.offset(), 5);
        assert_eq!(Tone::from_raw(u16::MAX).semitone(), Tone::MAX_SEMITONE);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not fit in 10 bits")]
    fn test_tone_rejects_wide_semitone() {
        Tone::new(1024, 0);
    }

    #[test]
    fn test_pulse_clamps_to_timer_range() {
        let table = firmware_table(16);
        // C1 is 2388, beyond the 11-bit timer
        assert_eq!(channel_period(&table, Channel::Pulse1, Tone::new(0, 0)), MAX_PERIOD);
        // A2 (semitone 21) is 709
        assert_eq!(channel_period(&table, Channel::Pulse2, Tone::new(21, 0)), 709);
    }

    #[test]
    fn test_fine_offset_shortens_period() {
        let table = firmware_table(16);
        let base = channel_period(&table, Channel::Pulse1, Tone::new(24, 0));
        let detuned = channel_period(&table, Channel::Pulse1, Tone::new(24, 32));
        assert_eq!(base, 596);
        // (1 - 0.00087696 * 32) * 596 = 579.27
        assert_eq!(detuned, 579);
    }

    #[test]
    fn test_triangle_halves_period() {
        let table = firmware_table(16);
        // (596 - 1) >> 1
        assert_eq!(channel_period(&table, Channel::Triangle, Tone::new(24, 0)), 297);
    }

    #[test]
    fn test_triangle_lowest_octave_reads_next_octave() {
        let table = firmware_table(16);
        // Semitone 3 uses entry 15 (1004) without halving
        assert_eq!(channel_period(&table, Channel::Triangle, Tone::new(3, 0)), 1004);
    }

    #[test]
    fn test_top_of_table() {
        let table = firmware_table(12);
        // (1 - 0.00087696 * 63) * 25 = 23.6, then (23 - 1) >> 1
        let top = channel_period(&table, Channel::Triangle, Tone::new(83, 63));
        assert_eq!(top, 11);
        let beyond = channel_period(&table, Channel::Noise, Tone::new(500, 0));
        assert_eq!(beyond, 25);
    }

    #[test]
    fn test_short_periods_clamp_to_minimum() {
        let tuning = Tuning {
            reference_hz: 500.0,
            ..Tuning::default()
        };
        let table = PeriodTable::generate(&tuning, 12).unwrap();
        assert!(table.get(83).unwrap() < MIN_PERIOD);
        assert_eq!(channel_period(&table, Channel::Pulse1, Tone::new(83, 0)), MIN_PERIOD);
    }
}

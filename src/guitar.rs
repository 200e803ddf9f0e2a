//! # Guitar
//!
//! A guitar binds a string count to a tuning and builds chords and tabs for
//! that instrument.
//!
//! ## Example
//! ```rust
//! use frets::{ChordFamily, ChordFlags, ChordType, Guitar, GuitarMode};
//!
//! let guitar = Guitar::new(GuitarMode::SixString);
//! let e = guitar.play_shape(ChordFlags::None, ChordFamily::E, ChordType::Minor)?;
//! let power = guitar.play_chord(ChordFlags::PalmMute, vec![0, 2, 2, -2, -2, -2])?;
//! let tab = guitar.print_chords(&[e, power], 4)?;
//! assert!(tab.contains("  PM"));
//! # Ok::<(), frets::FretsError>(())
//! ```

use crate::chord::{Chord, ChordFlags, Fret};
use crate::chord_table::{ChordFamily, ChordType};
use crate::error::FretsError;
use crate::phrase::Phrase;
use crate::tab;
use crate::tuning::{Tuning, TuningMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Instrument size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuitarMode {
    SixString,
    SevenString,
    EightString,
}

impl GuitarMode {
    pub fn string_count(self) -> usize {
        match self {
            GuitarMode::SixString => 6,
            GuitarMode::SevenString => 7,
            GuitarMode::EightString => 8,
        }
    }

    /// Mode for a string count
    ///
    /// # Errors
    /// [`FretsError::UnsupportedMode`] for anything other than 6, 7 or 8.
    pub fn from_string_count(count: usize) -> Result<Self, FretsError> {
        match count {
            6 => Ok(GuitarMode::SixString),
            7 => Ok(GuitarMode::SevenString),
            8 => Ok(GuitarMode::EightString),
            _ => Err(FretsError::UnsupportedMode(format!(
                "no guitar with {} strings",
                count
            ))),
        }
    }

    /// Standard tuning for this many strings
    pub fn default_tuning(self) -> TuningMode {
        match self {
            GuitarMode::SixString => TuningMode::Standard6String,
            GuitarMode::SevenString => TuningMode::Standard7String,
            GuitarMode::EightString => TuningMode::Standard8String,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GuitarMode::SixString => "six-string",
            GuitarMode::SevenString => "seven-string",
            GuitarMode::EightString => "eight-string",
        }
    }
}

impl fmt::Display for GuitarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GuitarMode {
    type Err = FretsError;

    /// Accepts `six-string`/`seven-string`/`eight-string` or a bare count
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        match trimmed.as_str() {
            "six-string" | "6" => Ok(GuitarMode::SixString),
            "seven-string" | "7" => Ok(GuitarMode::SevenString),
            "eight-string" | "8" => Ok(GuitarMode::EightString),
            _ => Err(FretsError::UnsupportedMode(format!("unknown guitar '{}'", s))),
        }
    }
}

/// String count plus tuning; the entry point for building chords and tabs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guitar {
    mode: GuitarMode,
    tuning: Tuning,
}

impl Default for Guitar {
    /// Seven strings in standard tuning
    fn default() -> Self {
        Self::new(GuitarMode::SevenString)
    }
}

impl Guitar {
    pub fn new(mode: GuitarMode) -> Self {
        Self {
            mode,
            tuning: Tuning::new(mode.default_tuning()),
        }
    }

    /// Build a guitar with an explicit tuning.
    ///
    /// # Errors
    /// [`FretsError::MismatchedStringCount`] when the tuning is for another
    /// string count.
    pub fn with_tuning(mode: GuitarMode, tuning: TuningMode) -> Result<Self, FretsError> {
        let mut guitar = Self::new(mode);
        guitar.set_tuning(tuning)?;
        Ok(guitar)
    }

    pub fn mode(&self) -> GuitarMode {
        self.mode
    }

    pub fn string_count(&self) -> usize {
        self.mode.string_count()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn set_tuning(&mut self, mode: TuningMode) -> Result<(), FretsError> {
        if mode.string_count() != self.string_count() {
            return Err(FretsError::MismatchedStringCount {
                expected: self.string_count(),
                actual: mode.string_count(),
            });
        }
        debug!(guitar = %self.mode, tuning = %mode, "retuned");
        self.tuning = Tuning::new(mode);
        Ok(())
    }

    /// Chord from explicit frets, lowest string first
    pub fn play_chord(&self, flags: ChordFlags, frets: Vec<Fret>) -> Result<Chord, FretsError> {
        Chord::with_frets(flags, self.string_count(), frets)
    }

    /// Chord from the shape table
    pub fn play_shape(
        &self,
        flags: ChordFlags,
        family: ChordFamily,
        chord_type: ChordType,
    ) -> Result<Chord, FretsError> {
        Chord::from_shape(flags, self.string_count(), family, chord_type)
    }

    /// An empty chord sized for this guitar
    pub fn empty_chord(&self) -> Chord {
        Chord::new(self.string_count())
    }

    pub fn print_chords(
        &self,
        chords: &[Chord],
        max_chords_per_line: usize,
    ) -> Result<String, FretsError> {
        tab::print_chords(chords, &self.tuning, max_chords_per_line)
    }

    pub fn print_phrases(
        &self,
        phrases: &[Phrase],
        max_chords_per_line: usize,
    ) -> Result<String, FretsError> {
        tab::print_phrases(phrases, &self.tuning, max_chords_per_line)
    }
}

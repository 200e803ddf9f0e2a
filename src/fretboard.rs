//! Editing state behind an interactive fretboard.
//!
//! A fretboard view owns drawing and input handling; this type owns the data
//! it edits. Strings are addressed 1-based here (string 1 = lowest string),
//! matching how a cursor moves over the drawn strings.

use crate::chord::{Chord, ChordFlags, Fret, SpecialString, UNFRETTED};
use crate::error::FretsError;
use crate::guitar::GuitarMode;

/// The chord being edited and the string the cursor is on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    chord: Chord,
    cursor: usize,
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::new(GuitarMode::SevenString)
    }
}

impl Fretboard {
    pub fn new(mode: GuitarMode) -> Self {
        Self {
            chord: Chord::new(mode.string_count()),
            cursor: 1,
        }
    }

    pub fn string_count(&self) -> usize {
        self.chord.string_count()
    }

    pub fn chord(&self) -> &Chord {
        &self.chord
    }

    /// 1-based string under the cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, position: usize) -> Result<(), FretsError> {
        self.check_string(position)?;
        self.cursor = position;
        Ok(())
    }

    /// Fret value on a 1-based string
    pub fn fret(&self, string: usize) -> Result<Fret, FretsError> {
        self.check_string(string)?;
        self.chord.get(string as isize - 1)
    }

    /// Set the fret value on a 1-based string.
    ///
    /// # Errors
    /// [`FretsError::InvalidFret`] for values outside `-9..=24`,
    /// [`FretsError::IndexOutOfRange`] for strings outside `1..=string_count`.
    pub fn set_fret(&mut self, string: usize, value: Fret) -> Result<(), FretsError> {
        if !Chord::is_valid_fret(value) {
            return Err(FretsError::InvalidFret(value));
        }
        self.check_string(string)?;
        self.chord.set(string as isize - 1, value)
    }

    pub fn set_fret_at_cursor(&mut self, value: Fret) -> Result<(), FretsError> {
        self.set_fret(self.cursor, value)
    }

    pub fn flags(&self) -> ChordFlags {
        self.chord.flags()
    }

    pub fn set_flags(&mut self, flags: ChordFlags) {
        self.chord.set_flags(flags);
    }

    /// Reset every string to unfretted; the cursor stays put
    pub fn clear(&mut self) {
        self.chord = Chord::new(self.chord.string_count());
    }

    /// Hand the edited chord over and start a fresh one
    pub fn take_chord(&mut self) -> Chord {
        let fresh = Chord::new(self.chord.string_count());
        std::mem::replace(&mut self.chord, fresh)
    }

    /// Load an existing chord for editing.
    ///
    /// # Errors
    /// [`FretsError::MismatchedStringCount`] when the chord is for another
    /// instrument size.
    pub fn load(&mut self, chord: Chord) -> Result<(), FretsError> {
        if chord.string_count() != self.string_count() {
            return Err(FretsError::MismatchedStringCount {
                expected: self.string_count(),
                actual: chord.string_count(),
            });
        }
        self.chord = chord;
        Ok(())
    }

    fn check_string(&self, string: usize) -> Result<(), FretsError> {
        if string == 0 || string > self.string_count() {
            return Err(FretsError::IndexOutOfRange {
                index: string as isize,
                len: self.string_count(),
            });
        }
        Ok(())
    }
}

/// Short label a fretboard view draws on a string; `None` when the string
/// is unfretted and nothing should be drawn.
pub fn symbol(value: Fret) -> Option<String> {
    let label = match SpecialString::from_value(value) {
        Some(SpecialString::Pull) => "p".to_string(),
        Some(SpecialString::HammerDown) => "h".to_string(),
        Some(SpecialString::SlideUp) => "/".to_string(),
        Some(SpecialString::SlideDown) => "\\".to_string(),
        Some(SpecialString::NotPlayed) => "x".to_string(),
        Some(SpecialString::FullBend) => "b".to_string(),
        Some(SpecialString::HalfBend) => "b|2".to_string(),
        Some(SpecialString::QuarterBend) => "b|4".to_string(),
        None if value == UNFRETTED => return None,
        None => value.to_string(),
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty_with_cursor_on_first_string() {
        let board = Fretboard::new(GuitarMode::SixString);
        assert_eq!(board.cursor(), 1);
        assert_eq!(board.chord().frets(), &[-1; 6]);
        assert_eq!(Fretboard::default().string_count(), 7);
    }

    #[test]
    fn test_one_based_access() {
        let mut board = Fretboard::new(GuitarMode::SixString);
        board.set_fret(1, 3).unwrap();
        board.set_fret(6, -2).unwrap();
        assert_eq!(board.fret(1).unwrap(), 3);
        assert_eq!(board.chord().frets(), &[3, -1, -1, -1, -1, -2]);
        assert!(board.fret(0).is_err());
        assert!(board.fret(7).is_err());
    }

    #[test]
    fn test_rejects_invalid_fret() {
        let mut board = Fretboard::new(GuitarMode::SixString);
        assert_eq!(board.set_fret(2, 25), Err(FretsError::InvalidFret(25)));
        assert_eq!(board.set_fret(2, -10), Err(FretsError::InvalidFret(-10)));
        assert_eq!(board.fret(2).unwrap(), -1);
    }

    #[test]
    fn test_cursor_movement() {
        let mut board = Fretboard::new(GuitarMode::SevenString);
        board.set_cursor(7).unwrap();
        board.set_fret_at_cursor(12).unwrap();
        assert_eq!(board.chord().get(-1).unwrap(), 12);

        assert!(board.set_cursor(8).is_err());
        assert!(board.set_cursor(0).is_err());
        assert_eq!(board.cursor(), 7);
    }

    #[test]
    fn test_take_and_clear() {
        let mut board = Fretboard::new(GuitarMode::SixString);
        board.set_fret(3, 2).unwrap();
        board.set_flags(ChordFlags::Harmonic);

        let chord = board.take_chord();
        assert_eq!(chord.flags(), ChordFlags::Harmonic);
        assert_eq!(chord.get(2).unwrap(), 2);
        assert_eq!(board.chord(), &Chord::new(6));

        board.set_fret(1, 5).unwrap();
        board.clear();
        assert_eq!(board.fret(1).unwrap(), -1);
    }

    #[test]
    fn test_load_checks_size() {
        let mut board = Fretboard::new(GuitarMode::SixString);
        assert!(board.load(Chord::new(7)).is_err());
        board.load(Chord::with_frets(ChordFlags::None, 6, vec![0; 6]).unwrap()).unwrap();
        assert_eq!(board.fret(4).unwrap(), 0);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(symbol(-1), None);
        assert_eq!(symbol(-2).as_deref(), Some("x"));
        assert_eq!(symbol(-8).as_deref(), Some("b|2"));
        assert_eq!(symbol(7).as_deref(), Some("7"));
    }
}

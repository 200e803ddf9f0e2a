//! # Tablature Rendering
//!
//! Lays chords out as fixed-width ASCII tablature.
//!
//! ## Layout
//! Chords are printed in lines of `max_chords_per_line` columns. Each line is a
//! block with one row per string (lowest string on top) and a flags row:
//!
//! ```text
//! E[----------]
//! A[---0---3--]
//! D[---0---2--]
//! G[---2---0--]
//! B[---3---1--]
//! E[---2---0--]
//!        PM
//! ```
//!
//! - Row labels are the uppercased tuning names, right-aligned to the longest name
//! - Every chord takes a 4-character column; numbers are left-padded with `-`
//! - A short last line is padded with empty columns so all lines share one width
//! - Rows end with `\r\n`; each block is followed by a blank line
//!
//! Half and quarter bends print as 5-character tokens (`b|2--`, `b|4--`), which
//! shifts the rest of that row by one column. Existing tabs depend on this
//! output, so it is kept as is.
//!
//! ## Example
//! ```rust
//! use frets::{print_chords, Chord, ChordFamily, ChordFlags, ChordType, Tuning, TuningMode};
//!
//! let d = Chord::from_shape(ChordFlags::None, 6, ChordFamily::D, ChordType::Major)?;
//! let tab = print_chords(&[d], &Tuning::new(TuningMode::Standard), 1)?;
//! assert!(tab.starts_with("E[----]\r\nA[---0]\r\n"));
//! # Ok::<(), frets::FretsError>(())
//! ```

use crate::chord::{Chord, ChordFlags, Fret, SpecialString, UNFRETTED};
use crate::error::FretsError;
use crate::phrase::Phrase;
use crate::tuning::Tuning;
use tracing::{debug, trace};

const LINE_END: &str = "\r\n";
const EMPTY_COLUMN: &str = "----";
const EMPTY_FLAG: &str = "    ";

/// Tab token for a single fret value
pub fn fret_token(value: Fret) -> String {
    match SpecialString::from_value(value) {
        Some(SpecialString::Pull) => "p---".to_string(),
        Some(SpecialString::HammerDown) => "h---".to_string(),
        Some(SpecialString::SlideUp) => "/---".to_string(),
        Some(SpecialString::SlideDown) => "\\---".to_string(),
        Some(SpecialString::NotPlayed) => "---x".to_string(),
        Some(SpecialString::FullBend) => "b---".to_string(),
        Some(SpecialString::HalfBend) => "b|2--".to_string(),
        Some(SpecialString::QuarterBend) => "b|4--".to_string(),
        None if value == UNFRETTED => EMPTY_COLUMN.to_string(),
        None => format!("{:->4}", value),
    }
}

/// Flags-row token for a chord
pub fn flag_token(flags: ChordFlags) -> &'static str {
    match flags {
        ChordFlags::None => EMPTY_FLAG,
        ChordFlags::PalmMute => "  PM",
        ChordFlags::Harmonic => "   H",
    }
}

/// Renders chord lists and phrases for one tuning
#[derive(Debug, Clone)]
pub struct TabRenderer {
    tuning: Tuning,
    max_chords_per_line: usize,
}

impl TabRenderer {
    /// # Errors
    /// [`FretsError::InvalidLineWidth`] when `max_chords_per_line` is zero.
    pub fn new(tuning: Tuning, max_chords_per_line: usize) -> Result<Self, FretsError> {
        if max_chords_per_line == 0 {
            return Err(FretsError::InvalidLineWidth);
        }
        Ok(Self {
            tuning,
            max_chords_per_line,
        })
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn max_chords_per_line(&self) -> usize {
        self.max_chords_per_line
    }

    /// Render a chord list as consecutive tab blocks.
    ///
    /// # Errors
    /// [`FretsError::MismatchedStringCount`] when a chord's string count
    /// differs from the tuning's.
    pub fn render_chords(&self, chords: &[Chord]) -> Result<String, FretsError> {
        let string_count = self.tuning.string_count();
        if let Some(chord) = chords.iter().find(|c| c.string_count() != string_count) {
            return Err(FretsError::MismatchedStringCount {
                expected: string_count,
                actual: chord.string_count(),
            });
        }

        let label_width = self.tuning.longest_name_length();
        let mut out = String::new();

        for (line_number, line) in chords.chunks(self.max_chords_per_line).enumerate() {
            trace!(line = line_number, chords = line.len(), "rendering tab line");

            let mut rows: Vec<String> = self
                .tuning
                .string_names()
                .iter()
                .map(|name| format!("{:>width$}[", name.to_uppercase(), width = label_width))
                .collect();
            let mut flag_row = " ".repeat(label_width + 1);

            for chord in line {
                for (row, value) in rows.iter_mut().zip(chord.frets()) {
                    row.push_str(&fret_token(*value));
                }
                flag_row.push_str(flag_token(chord.flags()));
            }

            for _ in line.len()..self.max_chords_per_line {
                for row in rows.iter_mut() {
                    row.push_str(EMPTY_COLUMN);
                }
                flag_row.push_str(EMPTY_FLAG);
            }

            for row in &rows {
                out.push_str(row);
                out.push(']');
                out.push_str(LINE_END);
            }
            out.push_str(&flag_row);
            out.push_str(LINE_END);
            out.push_str(LINE_END);
        }

        debug!(
            chords = chords.len(),
            tuning = %self.tuning.mode(),
            bytes = out.len(),
            "rendered chords"
        );
        Ok(out)
    }

    /// Render each phrase independently, separated by a blank line
    pub fn render_phrases(&self, phrases: &[Phrase]) -> Result<String, FretsError> {
        let mut out = String::new();
        for phrase in phrases {
            out.push_str(&self.render_chords(phrase.chords())?);
            out.push_str(LINE_END);
            out.push_str(LINE_END);
        }
        Ok(out)
    }
}

/// Render a chord list with a tuning, `max_chords_per_line` chords per block
pub fn print_chords(
    chords: &[Chord],
    tuning: &Tuning,
    max_chords_per_line: usize,
) -> Result<String, FretsError> {
    TabRenderer::new(tuning.clone(), max_chords_per_line)?.render_chords(chords)
}

/// Render a list of phrases, each laid out on its own
pub fn print_phrases(
    phrases: &[Phrase],
    tuning: &Tuning,
    max_chords_per_line: usize,
) -> Result<String, FretsError> {
    TabRenderer::new(tuning.clone(), max_chords_per_line)?.render_phrases(phrases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::TuningMode;

    fn standard() -> Tuning {
        Tuning::new(TuningMode::Standard)
    }

    fn six(flags: ChordFlags, frets: [Fret; 6]) -> Chord {
        Chord::with_frets(flags, 6, frets.to_vec()).unwrap()
    }

    #[test]
    fn test_fret_tokens() {
        assert_eq!(fret_token(-1), "----");
        assert_eq!(fret_token(-2), "---x");
        assert_eq!(fret_token(-3), "p---");
        assert_eq!(fret_token(-4), "h---");
        assert_eq!(fret_token(-5), "\\---");
        assert_eq!(fret_token(-6), "/---");
        assert_eq!(fret_token(-7), "b---");
        assert_eq!(fret_token(-8), "b|2--");
        assert_eq!(fret_token(-9), "b|4--");
        assert_eq!(fret_token(0), "---0");
        assert_eq!(fret_token(3), "---3");
        assert_eq!(fret_token(12), "--12");
        assert_eq!(fret_token(24), "--24");
    }

    #[test]
    fn test_flag_tokens() {
        assert_eq!(flag_token(ChordFlags::None), "    ");
        assert_eq!(flag_token(ChordFlags::PalmMute), "  PM");
        assert_eq!(flag_token(ChordFlags::Harmonic), "   H");
    }

    #[test]
    fn test_single_chord_layout() {
        let d = six(ChordFlags::None, [-1, 0, 0, 2, 3, 2]);
        let tab = print_chords(&[d], &standard(), 1).unwrap();
        assert_eq!(
            tab,
            "E[----]\r\nA[---0]\r\nD[---0]\r\nG[---2]\r\nB[---3]\r\nE[---2]\r\n      \r\n\r\n"
        );
    }

    #[test]
    fn test_short_line_is_padded() {
        let chords = vec![
            six(ChordFlags::None, [0, 2, 2, 1, 0, 0]),
            six(ChordFlags::PalmMute, [3, 2, 0, 0, 0, 3]),
            six(ChordFlags::Harmonic, [12, 12, 12, -2, -2, -2]),
        ];
        let tab = print_chords(&chords, &standard(), 5).unwrap();
        let lines: Vec<&str> = tab.split("\r\n").collect();

        assert_eq!(lines[0], "E[---0---3--12--------]");
        assert_eq!(lines[3], "G[---1---0---x--------]");
        assert_eq!(lines[6], "        PM   H        ");
        assert_eq!(lines[7], "");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_wraps_into_uniform_lines() {
        let chords: Vec<Chord> = (0..5)
            .map(|i| six(ChordFlags::None, [i; 6]))
            .collect();
        let tab = print_chords(&chords, &standard(), 2).unwrap();
        let blocks: Vec<&str> = tab.split("\r\n\r\n").filter(|b| !b.is_empty()).collect();

        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].starts_with("E[---0---1]"));
        assert!(blocks[1].starts_with("E[---2---3]"));
        assert!(blocks[2].starts_with("E[---4----]"));
    }

    #[test]
    fn test_full_last_line_has_no_padding() {
        let chords = vec![six(ChordFlags::None, [5; 6]), six(ChordFlags::None, [7; 6])];
        let tab = print_chords(&chords, &standard(), 2).unwrap();
        assert!(tab.starts_with("E[---5---7]\r\n"));
        assert_eq!(tab.matches("E[").count(), 2);
    }

    #[test]
    fn test_labels_right_aligned_to_longest_name() {
        let tuning = Tuning::new(TuningMode::B6String);
        let chord = six(ChordFlags::None, [0; 6]);
        let tab = print_chords(&[chord], &tuning, 1).unwrap();
        let lines: Vec<&str> = tab.split("\r\n").collect();

        assert_eq!(lines[0], " B[---0]");
        assert_eq!(lines[4], "F#[---0]");
        assert_eq!(lines[6], "       ");
    }

    #[test]
    fn test_bends_keep_wide_tokens() {
        let chord = six(ChordFlags::None, [-8, -9, -7, -1, -1, -1]);
        let tab = print_chords(&[chord], &standard(), 1).unwrap();
        assert!(tab.starts_with("E[b|2--]\r\nA[b|4--]\r\nD[b---]\r\n"));
    }

    #[test]
    fn test_empty_chord_list() {
        assert_eq!(print_chords(&[], &standard(), 4).unwrap(), "");
    }

    #[test]
    fn test_zero_line_width_rejected() {
        assert_eq!(
            print_chords(&[], &standard(), 0),
            Err(FretsError::InvalidLineWidth)
        );
    }

    #[test]
    fn test_mismatched_string_count() {
        let seven = Chord::new(7);
        assert_eq!(
            print_chords(&[seven], &standard(), 4),
            Err(FretsError::MismatchedStringCount { expected: 6, actual: 7 })
        );
    }

    #[test]
    fn test_phrases_are_separated() {
        let first: Phrase = vec![six(ChordFlags::None, [0; 6])].into();
        let second: Phrase = vec![six(ChordFlags::None, [2; 6])].into();
        let tuning = standard();

        let tab = print_phrases(&[first.clone(), second.clone()], &tuning, 1).unwrap();
        let one = print_chords(first.chords(), &tuning, 1).unwrap();
        let two = print_chords(second.chords(), &tuning, 1).unwrap();

        assert_eq!(tab, format!("{}\r\n\r\n{}\r\n\r\n", one, two));
    }
}

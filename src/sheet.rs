//! # Tab Sheets
//!
//! A tab sheet is the text document the `frets` binary renders: optional YAML
//! front matter with render settings, followed by one chord per line.
//!
//! ## Format
//! ```text
//! ---
//! title: Intro
//! guitar: six-string
//! tuning: drop-d-6-string
//! chords-per-line: 4
//! ---
//! # lines starting with '#' are comments
//! [0,2,2,1,0,0]
//! [0,2,2,-2,-2,-2](PM)
//! E minor
//! G major (H)
//!
//! C major
//! ```
//!
//! - Chords are written in chord text form (`[..]` plus an optional flag) or as
//!   a shape: `<family> [type] [(PM)|(H)]`, the type defaulting to major
//! - A blank line closes the current phrase
//! - Every front matter key is optional; the guitar defaults to the tuning's
//!   string count, or seven strings when neither is given
//!
//! ## Example
//! ```rust
//! use frets::sheet::parse_sheet;
//!
//! let sheet = parse_sheet("---\nguitar: six-string\n---\nE minor\nA minor\n\nC\n")?;
//! assert_eq!(sheet.phrases.len(), 2);
//! assert_eq!(sheet.phrases[0].len(), 2);
//! # Ok::<(), frets::FretsError>(())
//! ```

use crate::chord::{Chord, ChordFlags};
use crate::chord_table::{ChordFamily, ChordType};
use crate::error::FretsError;
use crate::guitar::{Guitar, GuitarMode};
use crate::phrase::Phrase;
use crate::tuning::TuningMode;
use serde::Deserialize;
use tracing::debug;

/// Chords per tab line when the sheet does not say
pub const DEFAULT_CHORDS_PER_LINE: usize = 4;

/// Raw front matter for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawSheetConfig {
    pub title: Option<String>,
    pub guitar: Option<String>,
    pub tuning: Option<String>,
    pub chords_per_line: Option<usize>,
}

/// Validated render settings of a sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    pub title: Option<String>,
    pub guitar: GuitarMode,
    pub tuning: TuningMode,
    pub chords_per_line: usize,
}

impl Default for SheetConfig {
    fn default() -> Self {
        let guitar = GuitarMode::SevenString;
        Self {
            title: None,
            guitar,
            tuning: guitar.default_tuning(),
            chords_per_line: DEFAULT_CHORDS_PER_LINE,
        }
    }
}

impl SheetConfig {
    /// Parse and validate YAML front matter content
    pub fn from_yaml(content: &str) -> Result<Self, FretsError> {
        let raw: RawSheetConfig = if content.trim().is_empty() {
            RawSheetConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| FretsError::ConfigError(e.to_string()))?
        };
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSheetConfig) -> Result<Self, FretsError> {
        let tuning = raw
            .tuning
            .as_deref()
            .map(str::parse::<TuningMode>)
            .transpose()
            .map_err(|e| FretsError::ConfigError(e.to_string()))?;

        let guitar = match (raw.guitar.as_deref(), tuning) {
            (Some(name), _) => name
                .parse::<GuitarMode>()
                .map_err(|e| FretsError::ConfigError(e.to_string()))?,
            (None, Some(tuning)) => GuitarMode::from_string_count(tuning.string_count())?,
            (None, None) => GuitarMode::SevenString,
        };

        let tuning = tuning.unwrap_or_else(|| guitar.default_tuning());
        if tuning.string_count() != guitar.string_count() {
            return Err(FretsError::ConfigError(format!(
                "tuning '{}' has {} strings but the guitar is {}",
                tuning,
                tuning.string_count(),
                guitar
            )));
        }

        let chords_per_line = raw.chords_per_line.unwrap_or(DEFAULT_CHORDS_PER_LINE);
        if chords_per_line == 0 {
            return Err(FretsError::ConfigError(
                "chords-per-line must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            title: raw.title,
            guitar,
            tuning,
            chords_per_line,
        })
    }
}

/// A parsed tab sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub config: SheetConfig,
    pub phrases: Vec<Phrase>,
}

impl Sheet {
    pub fn guitar(&self) -> Result<Guitar, FretsError> {
        Guitar::with_tuning(self.config.guitar, self.config.tuning)
    }

    /// Render every phrase as tablature, preceded by the title if there is one
    pub fn render(&self) -> Result<String, FretsError> {
        let guitar = self.guitar()?;
        let mut out = String::new();
        if let Some(title) = &self.config.title {
            out.push_str(title);
            out.push_str("\r\n\r\n");
        }
        out.push_str(&guitar.print_phrases(&self.phrases, self.config.chords_per_line)?);
        Ok(out)
    }
}

/// Split leading `---` front matter from the body.
/// Returns (front matter, body lines with their 1-based line numbers).
fn split_front_matter(source: &str) -> (Option<String>, Vec<(usize, &str)>) {
    let lines: Vec<(usize, &str)> = source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .collect();

    let first = lines.iter().position(|(_, line)| !line.trim().is_empty());
    let start = match first {
        Some(i) if lines[i].1.trim() == "---" => i,
        _ => return (None, lines),
    };

    let end = lines[start + 1..]
        .iter()
        .position(|(_, line)| line.trim() == "---")
        .map(|offset| start + 1 + offset);

    match end {
        Some(end) => {
            let content: Vec<&str> = lines[start + 1..end].iter().map(|(_, l)| *l).collect();
            (Some(content.join("\n")), lines[end + 1..].to_vec())
        }
        None => (None, lines),
    }
}

/// Parse one body line as a chord for a guitar of `string_count` strings
fn parse_chord_line(line: &str, string_count: usize) -> Result<Chord, FretsError> {
    if line.starts_with('[') {
        let chord: Chord = line.parse()?;
        if chord.string_count() != string_count {
            return Err(FretsError::MismatchedStringCount {
                expected: string_count,
                actual: chord.string_count(),
            });
        }
        return Ok(chord);
    }

    let (shape, flags) = match (line.rfind('('), line.ends_with(')')) {
        (Some(open), true) => (
            &line[..open],
            ChordFlags::from_token(line[open + 1..line.len() - 1].trim()),
        ),
        _ => (line, ChordFlags::None),
    };

    let mut words = shape.split_whitespace();
    let family: ChordFamily = words
        .next()
        .ok_or_else(|| FretsError::ParseError("empty chord shape".to_string()))?
        .parse()?;
    let chord_type: ChordType = match words.next() {
        Some(word) => word.parse()?,
        None => ChordType::Major,
    };
    if let Some(extra) = words.next() {
        return Err(FretsError::ParseError(format!("unexpected '{}' after chord type", extra)));
    }

    Chord::from_shape(flags, string_count, family, chord_type)
}

/// Parse a tab sheet.
///
/// # Errors
/// [`FretsError::ConfigError`] for bad front matter and
/// [`FretsError::SheetError`] (with the 1-based source line) for bad chords.
pub fn parse_sheet(source: &str) -> Result<Sheet, FretsError> {
    let (front_matter, body) = split_front_matter(source);
    let config = match front_matter {
        Some(content) => SheetConfig::from_yaml(&content)?,
        None => SheetConfig::default(),
    };
    let string_count = config.guitar.string_count();

    let mut phrases = Vec::new();
    let mut current = Phrase::new();

    for (line_number, line) in body {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                phrases.push(std::mem::take(&mut current));
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let chord = parse_chord_line(line, string_count).map_err(|e| FretsError::SheetError {
            line: line_number,
            message: e.to_string(),
        })?;
        current.push(chord);
    }
    if !current.is_empty() {
        phrases.push(current);
    }

    debug!(
        phrases = phrases.len(),
        guitar = %config.guitar,
        tuning = %config.tuning,
        "parsed tab sheet"
    );
    Ok(Sheet { config, phrases })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_front_matter() {
        let sheet = parse_sheet("[0,0,2,2,1,0,0]\n").unwrap();
        assert_eq!(sheet.config, SheetConfig::default());
        assert_eq!(sheet.phrases.len(), 1);
    }

    #[test]
    fn test_front_matter() {
        let source = r#"---
title: Riff
tuning: drop-d-6-string
chords-per-line: 2
---
[0,0,0,-1,-1,-1](PM)
"#;
        let sheet = parse_sheet(source).unwrap();
        assert_eq!(sheet.config.title.as_deref(), Some("Riff"));
        assert_eq!(sheet.config.guitar, GuitarMode::SixString);
        assert_eq!(sheet.config.tuning, TuningMode::DropD6String);
        assert_eq!(sheet.config.chords_per_line, 2);
        assert_eq!(sheet.phrases[0].get(0).unwrap().flags(), ChordFlags::PalmMute);
    }

    #[test]
    fn test_blank_lines_split_phrases() {
        let source = "---\nguitar: six-string\n---\nE minor\nA minor\n\n\n# chorus\nC\nG major (H)\n";
        let sheet = parse_sheet(source).unwrap();
        assert_eq!(sheet.phrases.len(), 2);
        assert_eq!(sheet.phrases[0].get(0).unwrap().frets(), &[0, 2, 2, 0, 0, 0]);
        assert_eq!(sheet.phrases[1].get(0).unwrap().frets(), &[3, 3, 2, 0, 1, 0]);
        assert_eq!(sheet.phrases[1].get(-1).unwrap().flags(), ChordFlags::Harmonic);
    }

    #[test]
    fn test_bad_chord_reports_line() {
        let source = "---\nguitar: six-string\n---\nE minor\nH major\n";
        assert_eq!(
            parse_sheet(source).unwrap_err(),
            FretsError::SheetError {
                line: 5,
                message: "Chord parse error: unknown chord family 'H'".to_string(),
            }
        );
    }

    #[test]
    fn test_wrong_string_count_reports_line() {
        let source = "---\nguitar: six-string\n---\n[0,0,0]\n";
        assert!(matches!(
            parse_sheet(source),
            Err(FretsError::SheetError { line: 4, .. })
        ));
    }

    #[test]
    fn test_config_errors() {
        assert!(matches!(
            SheetConfig::from_yaml("tuning: open-g"),
            Err(FretsError::ConfigError(_))
        ));
        assert!(matches!(
            SheetConfig::from_yaml("guitar: six-string\ntuning: standard-7-string"),
            Err(FretsError::ConfigError(_))
        ));
        assert!(matches!(
            SheetConfig::from_yaml("chords-per-line: 0"),
            Err(FretsError::ConfigError(_))
        ));
        assert!(matches!(
            SheetConfig::from_yaml("colour: red"),
            Err(FretsError::ConfigError(_))
        ));
    }

    #[test]
    fn test_render_with_title() {
        let source = "---\ntitle: Test\nguitar: six-string\nchords-per-line: 1\n---\nD\n";
        let tab = parse_sheet(source).unwrap().render().unwrap();
        assert!(tab.starts_with("Test\r\n\r\nE[----]\r\nA[---0]\r\n"));
        assert!(tab.ends_with("      \r\n\r\n\r\n\r\n"));
    }
}

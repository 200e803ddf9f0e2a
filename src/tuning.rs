//! # Tunings
//!
//! Open-string names for every supported tuning, lowest-pitched string first.
//! The names double as row labels in rendered tablature.

use crate::error::FretsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named tuning for a 6, 7 or 8 string guitar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TuningMode {
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "standard-6-string")]
    Standard6String,
    #[serde(rename = "standard-7-string")]
    Standard7String,
    #[serde(rename = "standard-8-string")]
    Standard8String,

    #[serde(rename = "a-6-string")]
    A6String,
    #[serde(rename = "b-6-string")]
    B6String,
    #[serde(rename = "c-6-string")]
    C6String,
    #[serde(rename = "d-6-string")]
    D6String,
    #[serde(rename = "drop-a-6-string")]
    DropA6String,
    #[serde(rename = "drop-c-6-string")]
    DropC6String,
    #[serde(rename = "drop-d-6-string")]
    DropD6String,

    #[serde(rename = "a-7-string")]
    A7String,
    #[serde(rename = "c-7-string")]
    C7String,
    #[serde(rename = "c-sharp-7-string")]
    CSharp7String,
    #[serde(rename = "d-7-string")]
    D7String,
    #[serde(rename = "drop-a-7-string")]
    DropA7String,
    #[serde(rename = "drop-g-7-string")]
    DropG7String,
    #[serde(rename = "drop-g-sharp-7-string")]
    DropGSharp7String,
    #[serde(rename = "drop-f-sharp-7-string")]
    DropFSharp7String,

    #[serde(rename = "a-8-string")]
    A8String,
    #[serde(rename = "f-8-string")]
    F8String,
    #[serde(rename = "drop-d-sharp-8-string")]
    DropDSharp8String,
    #[serde(rename = "drop-e-8-string")]
    DropE8String,
}

/// (mode, name, open strings low to high)
static TUNINGS: [(TuningMode, &str, &[&str]); 23] = [
    (TuningMode::Standard, "standard", &["e", "a", "d", "g", "b", "e"]),
    (TuningMode::Standard6String, "standard-6-string", &["e", "a", "d", "g", "b", "e"]),
    (TuningMode::Standard7String, "standard-7-string", &["b", "e", "a", "d", "g", "b", "e"]),
    (TuningMode::Standard8String, "standard-8-string", &["f#", "b", "e", "a", "d", "g", "b", "e"]),
    (TuningMode::A6String, "a-6-string", &["a", "d", "g", "c", "e", "a"]),
    (TuningMode::B6String, "b-6-string", &["b", "e", "a", "d", "f#", "b"]),
    (TuningMode::C6String, "c-6-string", &["c", "f", "a#", "d#", "g", "c"]),
    (TuningMode::D6String, "d-6-string", &["d", "g", "c", "f", "a", "d"]),
    (TuningMode::DropA6String, "drop-a-6-string", &["a", "e", "a", "d", "f#", "b"]),
    (TuningMode::DropC6String, "drop-c-6-string", &["c", "g", "c", "f", "a", "d"]),
    (TuningMode::DropD6String, "drop-d-6-string", &["d", "a", "d", "g", "b", "e"]),
    (TuningMode::A7String, "a-7-string", &["a", "d", "g", "c", "f", "a", "d"]),
    (TuningMode::C7String, "c-7-string", &["c", "f", "a#", "d#", "g#", "c", "f"]),
    (TuningMode::CSharp7String, "c-sharp-7-string", &["a#", "d#", "g#", "c#", "f#", "a#", "d#"]),
    (TuningMode::D7String, "d-7-string", &["d", "g", "c", "f", "a#", "d", "g"]),
    (TuningMode::DropA7String, "drop-a-7-string", &["a", "e", "a", "d", "f#", "b", "e"]),
    (TuningMode::DropG7String, "drop-g-7-string", &["g", "d", "g", "c", "f", "a", "d"]),
    (TuningMode::DropGSharp7String, "drop-g-sharp-7-string", &["g#", "d#", "g#", "c#", "f#", "a#", "d#"]),
    (TuningMode::DropFSharp7String, "drop-f-sharp-7-string", &["f#", "c#", "f#", "b", "e", "g#", "c#"]),
    (TuningMode::A8String, "a-8-string", &["a", "d", "g", "c", "f", "a", "d", "g"]),
    // 'ь' marks a flat in these two tables
    (TuningMode::F8String, "f-8-string", &["fь", "bь", "eь", "aь", "dь", "gь", "bь", "eь"]),
    (TuningMode::DropDSharp8String, "drop-d-sharp-8-string", &["eь", "bь", "eь", "aь", "dь", "gь", "bь", "eь"]),
    (TuningMode::DropE8String, "drop-e-8-string", &["e", "b", "e", "a", "d", "g", "b", "e"]),
];

impl TuningMode {
    pub const ALL: [TuningMode; 23] = [
        TuningMode::Standard,
        TuningMode::Standard6String,
        TuningMode::Standard7String,
        TuningMode::Standard8String,
        TuningMode::A6String,
        TuningMode::B6String,
        TuningMode::C6String,
        TuningMode::D6String,
        TuningMode::DropA6String,
        TuningMode::DropC6String,
        TuningMode::DropD6String,
        TuningMode::A7String,
        TuningMode::C7String,
        TuningMode::CSharp7String,
        TuningMode::D7String,
        TuningMode::DropA7String,
        TuningMode::DropG7String,
        TuningMode::DropGSharp7String,
        TuningMode::DropFSharp7String,
        TuningMode::A8String,
        TuningMode::F8String,
        TuningMode::DropDSharp8String,
        TuningMode::DropE8String,
    ];

    fn entry(self) -> &'static (TuningMode, &'static str, &'static [&'static str]) {
        &TUNINGS[self as usize]
    }

    /// Kebab-case name, identical to the serde representation
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    pub fn string_count(self) -> usize {
        self.entry().2.len()
    }
}

impl fmt::Display for TuningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TuningMode {
    type Err = FretsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TUNINGS
            .iter()
            .find(|(_, name, _)| *name == wanted)
            .map(|(mode, _, _)| *mode)
            .ok_or_else(|| FretsError::UnsupportedMode(format!("unknown tuning '{}'", s)))
    }
}

/// Open-string names of a tuning mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning {
    mode: TuningMode,
    string_names: &'static [&'static str],
}

impl Tuning {
    pub fn new(mode: TuningMode) -> Self {
        Self {
            mode,
            string_names: mode.entry().2,
        }
    }

    pub fn mode(&self) -> TuningMode {
        self.mode
    }

    pub fn string_names(&self) -> &[&'static str] {
        self.string_names
    }

    pub fn string_count(&self) -> usize {
        self.string_names.len()
    }

    /// Name of the string at a zero-based index (0 = lowest string)
    pub fn string_at(&self, index: usize) -> Result<&'static str, FretsError> {
        self.string_names
            .get(index)
            .copied()
            .ok_or(FretsError::IndexOutOfRange {
                index: index as isize,
                len: self.string_names.len(),
            })
    }

    /// Longest string name in characters, used to align tab labels
    pub fn longest_name_length(&self) -> usize {
        self.string_names
            .iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl From<TuningMode> for Tuning {
    fn from(mode: TuningMode) -> Self {
        Self::new(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_follows_declaration_order() {
        for (i, (mode, _, _)) in TUNINGS.iter().enumerate() {
            assert_eq!(*mode as usize, i);
            assert_eq!(TuningMode::ALL[i], *mode);
        }
    }

    #[test]
    fn test_string_counts_match_mode_names() {
        for mode in TuningMode::ALL {
            let expected = if mode.name().ends_with("7-string") {
                7
            } else if mode.name().ends_with("8-string") {
                8
            } else {
                6
            };
            assert_eq!(Tuning::new(mode).string_count(), expected, "{}", mode);
        }
    }

    #[test]
    fn test_standard_tunings() {
        let six = Tuning::new(TuningMode::Standard);
        assert_eq!(six.string_names(), &["e", "a", "d", "g", "b", "e"]);
        assert_eq!(six.string_at(0).unwrap(), "e");
        assert_eq!(six.string_at(3).unwrap(), "g");
        assert!(six.string_at(6).is_err());

        let eight = Tuning::new(TuningMode::Standard8String);
        assert_eq!(eight.string_at(0).unwrap(), "f#");
        assert_eq!(eight.string_count(), 8);
    }

    #[test]
    fn test_longest_name_length() {
        assert_eq!(Tuning::new(TuningMode::Standard).longest_name_length(), 1);
        assert_eq!(Tuning::new(TuningMode::DropD6String).longest_name_length(), 1);
        assert_eq!(Tuning::new(TuningMode::B6String).longest_name_length(), 2);
        assert_eq!(Tuning::new(TuningMode::F8String).longest_name_length(), 2);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("drop-d-6-string".parse::<TuningMode>().unwrap(), TuningMode::DropD6String);
        assert_eq!("Standard".parse::<TuningMode>().unwrap(), TuningMode::Standard);
        assert!(matches!(
            "open-g".parse::<TuningMode>(),
            Err(FretsError::UnsupportedMode(_))
        ));
        for mode in TuningMode::ALL {
            assert_eq!(mode.to_string().parse::<TuningMode>().unwrap(), mode);
        }
    }
}

//! Canonical chord shapes
//!
//! Fingerings for every (family, type) pair, written for the six highest
//! strings of the instrument. Shapes are empirical guitar convention and are
//! stored as data, indexed by chord type and then by pitch class
//! (enharmonic families such as C# and Db share one shape).

use crate::chord::Fret;
use crate::error::FretsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of strings a shape template covers
pub const SHAPE_STRINGS: usize = 6;

/// Root of a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordFamily {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "G#")]
    GSharp,
    #[serde(rename = "A#")]
    ASharp,
    #[serde(rename = "Db")]
    DFlat,
    #[serde(rename = "Eb")]
    EFlat,
    #[serde(rename = "Gb")]
    GFlat,
    #[serde(rename = "Ab")]
    AFlat,
    #[serde(rename = "Bb")]
    BFlat,
}

impl ChordFamily {
    pub const ALL: [ChordFamily; 17] = [
        ChordFamily::C,
        ChordFamily::D,
        ChordFamily::E,
        ChordFamily::F,
        ChordFamily::G,
        ChordFamily::A,
        ChordFamily::B,
        ChordFamily::CSharp,
        ChordFamily::DSharp,
        ChordFamily::FSharp,
        ChordFamily::GSharp,
        ChordFamily::ASharp,
        ChordFamily::DFlat,
        ChordFamily::EFlat,
        ChordFamily::GFlat,
        ChordFamily::AFlat,
        ChordFamily::BFlat,
    ];

    /// Semitones above C (0-11)
    pub fn pitch_class(self) -> usize {
        match self {
            ChordFamily::C => 0,
            ChordFamily::CSharp | ChordFamily::DFlat => 1,
            ChordFamily::D => 2,
            ChordFamily::DSharp | ChordFamily::EFlat => 3,
            ChordFamily::E => 4,
            ChordFamily::F => 5,
            ChordFamily::FSharp | ChordFamily::GFlat => 6,
            ChordFamily::G => 7,
            ChordFamily::GSharp | ChordFamily::AFlat => 8,
            ChordFamily::A => 9,
            ChordFamily::ASharp | ChordFamily::BFlat => 10,
            ChordFamily::B => 11,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChordFamily::C => "C",
            ChordFamily::D => "D",
            ChordFamily::E => "E",
            ChordFamily::F => "F",
            ChordFamily::G => "G",
            ChordFamily::A => "A",
            ChordFamily::B => "B",
            ChordFamily::CSharp => "C#",
            ChordFamily::DSharp => "D#",
            ChordFamily::FSharp => "F#",
            ChordFamily::GSharp => "G#",
            ChordFamily::ASharp => "A#",
            ChordFamily::DFlat => "Db",
            ChordFamily::EFlat => "Eb",
            ChordFamily::GFlat => "Gb",
            ChordFamily::AFlat => "Ab",
            ChordFamily::BFlat => "Bb",
        }
    }
}

impl fmt::Display for ChordFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChordFamily {
    type Err = FretsError;

    /// Parse a root such as `"C"`, `"f#"` or `"Bb"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let letter = chars.next().map(|c| c.to_ascii_uppercase());
        let accidental: String = chars.collect();

        Self::ALL
            .into_iter()
            .find(|family| {
                let mut name = family.name().chars();
                name.next() == letter && name.as_str() == accidental
            })
            .ok_or_else(|| FretsError::ParseError(format!("unknown chord family '{}'", s)))
    }
}

/// Harmonic quality of a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChordType {
    Major,
    Minor,
    Suspended4th,
    Augmented5th,
    Diminished5th,
    Major6th,
    Minor6th,
    Suspended7th,
    Dominant7th,
    Augmented7th,
    SeventhFlat5,
    Major7th,
    MajorMinor7th,
    Minor7th,
    AugmentedMajor7th,
    HalfDiminished7th,
    Diminished7th,
    Major9th,
    Diminished9th,
}

/// (type, long name, chord symbol suffix)
const TYPE_NAMES: [(ChordType, &str, &str); 19] = [
    (ChordType::Major, "major", "maj"),
    (ChordType::Minor, "minor", "m"),
    (ChordType::Suspended4th, "suspended4th", "sus4"),
    (ChordType::Augmented5th, "augmented5th", "aug"),
    (ChordType::Diminished5th, "diminished5th", "dim"),
    (ChordType::Major6th, "major6th", "6"),
    (ChordType::Minor6th, "minor6th", "m6"),
    (ChordType::Suspended7th, "suspended7th", "7sus4"),
    (ChordType::Dominant7th, "dominant7th", "7"),
    (ChordType::Augmented7th, "augmented7th", "aug7"),
    (ChordType::SeventhFlat5, "seventh-flat5", "7b5"),
    (ChordType::Major7th, "major7th", "maj7"),
    (ChordType::MajorMinor7th, "major-minor7th", "mmaj7"),
    (ChordType::Minor7th, "minor7th", "m7"),
    (ChordType::AugmentedMajor7th, "augmented-major7th", "augmaj7"),
    (ChordType::HalfDiminished7th, "half-diminished7th", "m7b5"),
    (ChordType::Diminished7th, "diminished7th", "dim7"),
    (ChordType::Major9th, "major9th", "maj9"),
    (ChordType::Diminished9th, "diminished9th", "dim9"),
];

impl ChordType {
    pub const ALL: [ChordType; 19] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Suspended4th,
        ChordType::Augmented5th,
        ChordType::Diminished5th,
        ChordType::Major6th,
        ChordType::Minor6th,
        ChordType::Suspended7th,
        ChordType::Dominant7th,
        ChordType::Augmented7th,
        ChordType::SeventhFlat5,
        ChordType::Major7th,
        ChordType::MajorMinor7th,
        ChordType::Minor7th,
        ChordType::AugmentedMajor7th,
        ChordType::HalfDiminished7th,
        ChordType::Diminished7th,
        ChordType::Major9th,
        ChordType::Diminished9th,
    ];

    /// Long name, identical to the serde representation
    pub fn name(self) -> &'static str {
        TYPE_NAMES[self as usize].1
    }

    /// Chord symbol suffix (`"m7"`, `"sus4"`, ...)
    pub fn symbol(self) -> &'static str {
        TYPE_NAMES[self as usize].2
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChordType {
    type Err = FretsError;

    /// Accepts the long name (any case) or the exact chord symbol suffix
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        TYPE_NAMES
            .iter()
            .find(|(_, name, symbol)| *name == lower || *symbol == trimmed)
            .map(|(chord_type, _, _)| *chord_type)
            .ok_or_else(|| FretsError::ParseError(format!("unknown chord type '{}'", s)))
    }
}

/// A six-string fingering template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordShape {
    /// Value given to every string before the template is applied
    pub fill: Fret,
    /// Frets for the six highest strings, lowest of the six first
    pub frets: [Fret; SHAPE_STRINGS],
}

const fn shape(fill: Fret, frets: [Fret; SHAPE_STRINGS]) -> ChordShape {
    ChordShape { fill, frets }
}

/// Shape for a (family, type) pair
pub fn lookup(family: ChordFamily, chord_type: ChordType) -> &'static ChordShape {
    &SHAPES[chord_type as usize][family.pitch_class()]
}

// Rows follow `ChordType` declaration order, columns run C..B by pitch class.
static SHAPES: [[ChordShape; 12]; 19] = [
    // Major
    [
        shape(0, [3, 3, 2, 0, 1, 0]), // C
        shape(1, [1, 4, 3, 1, 2, 1]), // C#/Db
        shape(-1, [-1, 0, 0, 2, 3, 2]), // D
        shape(-1, [-1, 1, 1, 3, 4, 3]), // D#/Eb
        shape(0, [0, 2, 2, 1, 0, 0]), // E
        shape(1, [1, 3, 3, 2, 1, 1]), // F
        shape(2, [2, 4, 4, 3, 2, 2]), // F#/Gb
        shape(0, [3, 2, 0, 0, 0, 3]), // G
        shape(0, [4, 3, 1, 1, 1, 4]), // G#/Ab
        shape(0, [0, 0, 2, 2, 2, 0]), // A
        shape(1, [1, 1, 3, 3, 3, 1]), // A#/Bb
        shape(2, [2, 2, 4, 4, 4, 2]), // B
    ],
    // Minor
    [
        shape(-1, [-1, 3, 1, 0, 4, 3]), // C
        shape(0, [0, -1, 2, 1, 2, 4]), // C#/Db
        shape(-1, [-1, 0, 0, 2, 3, 1]), // D
        shape(-1, [-1, 1, 1, 3, 4, 2]), // D#/Eb
        shape(0, [0, 2, 2, 0, 0, 0]), // E
        shape(1, [1, 3, 3, 1, 1, 1]), // F
        shape(2, [2, 4, 4, 2, 2, 2]), // F#/Gb
        shape(-1, [-1, 1, 0, 3, 3, 3]), // G
        shape(-1, [-1, 2, 1, 4, 4, 4]), // G#/Ab
        shape(0, [0, 0, 2, 2, 1, 0]), // A
        shape(1, [1, 1, 3, 3, 3, 1]), // A#/Bb
        shape(2, [2, 2, 4, 4, 3, 2]), // B
    ],
    // Suspended4th
    [
        shape(0, [3, 3, 3, 0, 1, 1]), // C
        shape(4, [4, 4, 6, 6, 7, 4]), // C#/Db
        shape(-1, [-1, 0, 0, 2, 2, 3]), // D
        shape(-1, [-1, 1, 1, 1, 4, 4]), // D#/Eb
        shape(0, [0, 2, 2, 2, 0, 0]), // E
        shape(1, [1, 1, 3, 3, 1, 1]), // F
        shape(2, [2, 2, 4, 4, 2, 2]), // F#/Gb
        shape(0, [3, 3, 0, 0, 1, 3]), // G
        shape(4, [4, 4, 6, 6, 4, 4]), // G#/Ab
        shape(0, [0, 0, 2, 2, 3, 0]), // A
        shape(1, [1, 1, 1, 3, 4, 1]), // A#/Bb
        shape(2, [2, 2, 4, 4, 5, 2]), // B
    ],
    // Augmented5th
    [
        shape(0, [0, 3, 2, 1, 1, 0]), // C
        shape(-1, [-1, 0, 3, 2, 2, 1]), // C#/Db
        shape(-1, [2, -1, 4, 3, 3, 2]), // D
        shape(0, [3, 2, 1, 0, 0, 3]), // D#/Eb
        shape(0, [0, -1, 2, 1, 1, 0]), // E
        shape(1, [1, -1, 3, 2, 2, 1]), // F
        shape(2, [2, -1, 4, 3, 3, 2]), // F#/Gb
        shape(0, [3, 2, 1, 0, 0, 3]), // G
        shape(0, [0, 3, 2, 1, 1, 4]), // G#/Ab
        shape(0, [1, 0, 3, 2, 2, 1]), // A
        shape(2, [2, -1, 4, 3, 3, 2]), // A#/Bb
        shape(3, [3, -1, 5, 4, 4, 3]), // B
    ],
    // Diminished5th
    [
        shape(-1, [-1, -1, 4, 5, 4, 2]), // C
        shape(0, [0, -1, 2, 0, 2, 3]), // C#/Db
        shape(-1, [1, -1, 3, 1, 3, 1]), // D
        shape(-1, [2, -1, 4, 2, 4, 2]), // D#/Eb
        shape(-1, [3, -1, 5, 3, 5, 3]), // E
        shape(0, [1, 2, 3, 1, 0, 1]), // F
        shape(0, [2, 0, 4, 2, 1, 2]), // F#/Gb
        shape(0, [3, 4, 0, 3, 2, 3]), // G
        shape(0, [4, 5, 0, 4, 3, 4]), // G#/Ab
        shape(0, [5, 6, 7, 5, 4, 5]), // A
        shape(0, [0, 1, 2, 3, 2, 0]), // A#/Bb
        shape(-1, [1, -1, 3, 4, 3, 1]), // B
    ],
    // Major6th
    [
        shape(0, [0, 3, 2, 2, 1, 0]), // C
        shape(1, [1, 1, 3, 1, 2, 1]), // C#/Db
        shape(-1, [-1, 0, 0, 2, 0, 2]), // D
        shape(-1, [-1, 1, 1, 3, 1, 3]), // D#/Eb
        shape(0, [0, 2, 2, 1, 2, 0]), // E
        shape(-1, [-1, 3, 3, 5, 3, 5]), // F
        shape(-1, [-1, 4, 4, 6, 4, 6]), // F#/Gb
        shape(0, [3, 2, 0, 0, 0, 0]), // G
        shape(1, [4, 3, 1, 1, 1, 1]), // G#/Ab
        shape(0, [0, 0, 2, 2, 2, 2]), // A
        shape(1, [1, 1, 3, 3, 3, 3]), // A#/Bb
        shape(2, [2, 2, 4, 4, 4, 4]), // B
    ],
    // Minor6th
    [
        shape(-1, [-1, 3, 1, 2, 1, 3]), // C
        shape(0, [0, 4, 2, 3, 2, 4]), // C#/Db
        shape(-1, [-1, 0, 0, 2, 0, 1]), // D
        shape(-1, [-1, 1, 1, 3, 1, 2]), // D#/Eb
        shape(0, [0, 2, 2, 0, 2, 0]), // E
        shape(1, [1, 3, 3, 1, 3, 1]), // F
        shape(-1, [-1, 4, 4, 6, 4, 5]), // F#/Gb
        shape(0, [0, 1, 0, 0, 3, 0]), // G
        shape(-1, [-1, -1, 1, 1, 0, 1]), // G#/Ab
        shape(0, [2, 0, 2, 2, 1, 2]), // A
        shape(-1, [1, 1, 3, 3, 3, 3]), // A#/Bb
        shape(-1, [-1, 2, 0, 1, 3, 2]), // B
    ],
    // Suspended7th
    [
        shape(1, [1, 1, 3, 3, 1, 1]), // C
        shape(0, [2, 2, 4, 4, 2, 2]), // C#/Db
        shape(-1, [-1, 0, 0, 2, 1, 3]), // D
        shape(-1, [-1, 1, 1, 1, 2, 4]), // D#/Eb
        shape(0, [0, 2, 0, 2, 0, 0]), // E
        shape(1, [1, 3, 1, 3, 1, 1]), // F
        shape(2, [2, 4, 2, 4, 2, 2]), // F#/Gb
        shape(0, [3, 3, 0, 0, 1, 1]), // G
        shape(4, [4, 4, 4, 6, 4, 4]), // G#/Ab
        shape(0, [0, 0, 2, 0, 3, 0]), // A
        shape(1, [1, 1, 1, 1, 3, 1]), // A#/Bb
        shape(2, [2, 2, 2, 2, 5, 2]), // B
    ],
    // Dominant7th
    [
        shape(0, [0, 3, 2, 3, 1, 0]), // C
        shape(1, [1, 4, 3, 1, 2, 1]), // C#/Db
        shape(-1, [-1, 0, 0, 2, 1, 2]), // D
        shape(-1, [-1, 1, 1, 3, 2, 3]), // D#/Eb
        shape(0, [0, 2, 2, 1, 3, 0]), // E
        shape(1, [1, 3, 1, 2, 1, 1]), // F
        shape(2, [2, 4, 2, 3, 2, 2]), // F#/Gb
        shape(0, [3, 2, 0, 0, 0, 1]), // G
        shape(0, [4, 3, 1, 1, 1, 2]), // G#/Ab
        shape(0, [0, 0, 2, 0, 2, 0]), // A
        shape(1, [1, 1, 3, 1, 3, 1]), // A#/Bb
        shape(2, [2, 2, 4, 2, 4, 2]), // B
    ],
    // Augmented7th
    [
        shape(-1, [-1, 1, 2, 3, 1, 4]), // C
        shape(-1, [-1, 2, 3, 4, 2, 5]), // C#/Db
        shape(-1, [-1, -1, 0, 3, 1, 2]), // D
        shape(-1, [-1, -1, 1, 4, 2, 3]), // D#/Eb
        shape(0, [0, 2, 0, 1, 1, 0]), // E
        shape(1, [1, 3, 1, 2, 2, 1]), // F
        shape(2, [2, 4, 2, 3, 3, 2]), // F#/Gb
        shape(0, [3, 2, 1, 0, 0, 1]), // G
        shape(4, [4, 4, 4, 6, 4, 4]), // G#/Ab
        shape(0, [1, 4, 3, 0, 2, 1]), // A
        shape(-1, [-1, 3, 2, 1, 1, 2]), // A#/Bb
        shape(-1, [-1, 2, 1, 2, 0, 3]), // B
    ],
    // SeventhFlat5
    [
        shape(-1, [-1, 1, 2, 3, 1, 2]), // C
        shape(-1, [-1, 2, 3, 4, 2, 3]), // C#/Db
        shape(-1, [-1, -1, 0, 1, 1, 2]), // D
        shape(-1, [-1, 0, 1, 2, 2, 3]), // D#/Eb
        shape(-1, [-1, -1, 2, 3, 3, 4]), // E
        shape(0, [1, 0, 1, 2, 0, 1]), // F
        shape(-1, [-1, -1, 2, 3, 1, 2]), // F#/Gb
        shape(-1, [-1, -1, 3, 4, 2, 3]), // G
        shape(-1, [-1, -1, 0, 1, 1, 2]), // G#/Ab
        shape(-1, [-1, 0, 1, 0, 2, 3]), // A
        shape(0, [0, 1, 2, 1, 3, 4]), // A#/Bb
        shape(-1, [-1, 2, 1, 2, 0, 1]), // B
    ],
    // Major7th
    [
        shape(0, [0, 3, 2, 0, 0, 0]), // C
        shape(1, [1, 4, 3, 1, 1, 1]), // C#/Db
        shape(-1, [-1, 0, 0, 2, 2, 2]), // D
        shape(-1, [-1, 1, 1, 3, 3, 3]), // D#/Eb
        shape(0, [0, 2, 1, 1, 0, 0]), // E
        shape(1, [1, 3, 2, 2, 1, 1]), // F
        shape(2, [2, 4, 3, 3, 2, 2]), // F#/Gb
        shape(0, [3, 2, 0, 0, 0, 2]), // G
        shape(-1, [-1, 3, 1, 1, 1, 3]), // G#/Ab
        shape(0, [0, 0, 2, 1, 2, 0]), // A
        shape(1, [1, 1, 3, 2, 3, 1]), // A#/Bb
        shape(2, [2, 2, 4, 3, 4, 2]), // B
    ],
    // MajorMinor7th
    [
        shape(-1, [-1, 2, 1, 0, 0, 3]), // C
        shape(0, [0, 3, 2, 1, 1, 4]), // C#/Db
        shape(-1, [-1, 0, 0, 2, 2, 2]), // D
        shape(-1, [-1, 1, 1, 3, 3, 2]), // D#/Eb
        shape(0, [0, 2, 1, 0, 0, 0]), // E
        shape(1, [1, 3, 2, 1, 1, 1]), // F
        shape(2, [2, 4, 3, 2, 2, 2]), // F#/Gb
        shape(3, [3, 5, 4, 3, 3, 3]), // G
        shape(-1, [-1, -1, 1, 1, 0, 3]), // G#/Ab
        shape(0, [0, 0, 2, 1, 1, 0]), // A
        shape(1, [1, 1, 3, 2, 2, 1]), // A#/Bb
        shape(2, [2, 2, 4, 3, 3, 2]), // B
    ],
    // Minor7th
    [
        shape(-1, [-1, 1, 1, 3, 1, 3]), // C
        shape(0, [0, 2, 2, 4, 2, 4]), // C#/Db
        shape(-1, [-1, 0, 0, 2, 1, 1]), // D
        shape(-1, [-1, 1, 1, 3, 2, 2]), // D#/Eb
        shape(0, [0, 2, 0, 0, 0, 0]), // E
        shape(1, [1, 3, 1, 1, 1, 1]), // F
        shape(2, [2, 4, 2, 2, 2, 2]), // F#/Gb
        shape(3, [3, 5, 3, 3, 3, 3]), // G
        shape(0, [0, 0, 2, 2, 1, 3]), // G#/Ab
        shape(0, [0, 0, 2, 0, 1, 0]), // A
        shape(1, [1, 1, 3, 1, 2, 1]), // A#/Bb
        shape(-1, [-1, 2, 0, 2, 0, 2]), // B
    ],
    // AugmentedMajor7th
    [
        shape(0, [0, 3, 2, 1, 0, 0]), // C
        shape(1, [1, 4, 3, 2, 1, 1]), // C#/Db
        shape(2, [2, 5, 4, 3, 2, 2]), // D
        shape(-1, [-1, 2, 1, 0, 3, 3]), // D#/Eb
        shape(0, [0, -1, 1, 1, 1, 0]), // E
        shape(0, [0, 0, 2, 2, 2, 1]), // F
        shape(-1, [-1, -1, 3, 3, 3, 2]), // F#/Gb
        shape(0, [3, 2, 1, 0, 0, 3]), // G
        shape(0, [0, 3, 2, 1, 1, 3]), // G#/Ab
        shape(-1, [-1, 0, -1, 1, 2, 1]), // A
        shape(-1, [-1, 1, 0, 2, 3, 2]), // A#/Bb
        shape(-1, [-1, 2, -1, 3, 4, 3]), // B
    ],
    // HalfDiminished7th
    [
        shape(-1, [-1, 1, 1, 3, 1, 2]), // C
        shape(0, [0, 2, 2, 4, 2, 3]), // C#/Db
        shape(0, [1, -1, 0, 1, 1, 1]), // D
        shape(-1, [2, -1, 1, 2, 2, 2]), // D#/Eb
        shape(0, [0, 1, 0, 0, 3, 0]), // E
        shape(1, [1, 2, 1, 1, 4, 1]), // F
        shape(2, [2, 3, 2, 2, 5, 2]), // F#/Gb
        shape(3, [3, 4, 3, 3, 6, 3]), // G
        shape(0, [2, 2, 0, 1, 0, 2]), // G#/Ab
        shape(-1, [-1, 0, 1, 0, 1, 3]), // A
        shape(1, [1, 1, 2, 1, 2, 4]), // A#/Bb
        shape(0, [1, 0, 0, 2, 0, 1]), // B
    ],
    // Diminished7th
    [
        shape(-1, [-1, -1, 1, 2, 1, 2]), // C
        shape(-1, [-1, -1, 2, 3, 2, 3]), // C#/Db
        shape(-1, [-1, -1, 0, 1, 0, 1]), // D
        shape(-1, [-1, 0, 1, 2, 1, 2]), // D#/Eb
        shape(0, [0, 1, 2, 0, 2, 0]), // E
        shape(1, [1, 2, 3, 1, 3, 1]), // F
        shape(2, [2, 3, 4, 2, 4, 2]), // F#/Gb
        shape(0, [0, 1, 2, 0, 2, 0]), // G
        shape(-1, [-1, -1, 0, 1, 0, 1]), // G#/Ab
        shape(-1, [-1, -1, 1, 2, 1, 2]), // A
        shape(-1, [-1, -1, 2, 3, 2, 3]), // A#/Bb
        shape(-1, [-1, -1, 0, 1, 0, 1]), // B
    ],
    // Major9th
    [
        shape(0, [0, 3, 2, 3, 3, 0]), // C
        shape(1, [1, 2, 1, 1, 2, 1]), // C#/Db
        shape(0, [0, 0, 0, 2, 1, 2]), // D
        shape(1, [1, 1, 1, 3, 2, 3]), // D#/Eb
        shape(0, [0, 2, 0, 1, 0, 2]), // E
        shape(1, [1, 3, 1, 2, 1, 3]), // F
        shape(2, [2, 4, 2, 3, 2, 4]), // F#/Gb
        shape(0, [0, 0, 0, 0, 0, 1]), // G
        shape(-1, [-1, 1, 1, 1, 1, 2]), // G#/Ab
        shape(-1, [-1, 2, 2, 2, 2, 3]), // A
        shape(-1, [-1, 1, 0, 1, 1, 1]), // A#/Bb
        shape(-1, [-1, 2, 1, 2, 2, 2]), // B
    ],
    // Diminished9th
    [
        shape(-1, [-1, 3, 2, 3, 2, 3]), // C
        shape(-1, [-1, 4, 3, 4, 3, 4]), // C#/Db
        shape(0, [0, 0, 1, 2, 1, 2]), // D
        shape(0, [0, 1, 1, 0, 2, 0]), // D#/Eb
        shape(0, [0, 2, 0, 1, 0, 1]), // E
        shape(1, [1, 3, 1, 2, 1, 2]), // F
        shape(2, [2, 4, 2, 3, 2, 3]), // F#/Gb
        shape(-1, [-1, 2, 3, 1, 0, 3]), // G
        shape(0, [2, 0, 1, 1, 1, 2]), // G#/Ab
        shape(-1, [2, -1, 5, 3, 2, 5]), // A
        shape(0, [1, 1, 0, 1, 0, 1]), // A#/Bb
        shape(-1, [-1, 2, 1, 2, 1, 2]), // B
    ],
];

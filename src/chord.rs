//! # Chord Model
//!
//! A chord is one fret value per string plus a performance flag.
//!
//! ## Fret Values
//! - `0..=24` - fret number (0 = open string)
//! - `-1` - not fretted; rendered as a dash run in tablature
//! - `-2..=-9` - playing technique sentinels, see [`SpecialString`]
//!
//! ## String Order
//! Index 0 is the lowest-pitched string, matching the order of
//! [`Tuning`](crate::Tuning) string names. Every accessor also accepts
//! negative indices counting back from the highest string (`-1` = last
//! string), which is how the chord shape table addresses the top six strings
//! regardless of the instrument's string count.
//!
//! ## Text Form
//! ```text
//! [3,3,2,0,1,0]       no flag
//! [0,2,2,0,0,0](PM)   palm mute
//! [-1,-1,12,12](H)    harmonic
//! ```
//!
//! ## Example
//! ```rust
//! use frets::{Chord, ChordFamily, ChordFlags, ChordType};
//!
//! let chord = Chord::from_shape(ChordFlags::None, 6, ChordFamily::C, ChordType::Major)?;
//! assert_eq!(chord.frets(), &[3, 3, 2, 0, 1, 0]);
//! assert_eq!(chord.to_string(), "[3,3,2,0,1,0]");
//!
//! let parsed: Chord = "[3,3,2,0,1,0]".parse()?;
//! assert_eq!(parsed, chord);
//! # Ok::<(), frets::FretsError>(())
//! ```

use crate::chord_table::{self, ChordFamily, ChordType, SHAPE_STRINGS};
use crate::error::FretsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single string's value within a chord
pub type Fret = i32;

/// Lowest valid fret value (the last sentinel code)
pub const MIN_FRET: Fret = -9;
/// Highest valid fret value
pub const MAX_FRET: Fret = 24;
/// Value of a string that is not fretted
pub const UNFRETTED: Fret = -1;
/// String count used when none is given
pub const DEFAULT_STRING_COUNT: usize = 7;

/// Resolve a signed index against a container length.
///
/// Non-negative indices count from the start, negative ones from the end:
/// `-1` is the last element, `-len` the first.
///
/// # Example
/// ```
/// use frets::normalize_index;
///
/// assert_eq!(normalize_index(0, 6), Ok(0));
/// assert_eq!(normalize_index(-1, 6), Ok(5));
/// assert!(normalize_index(-7, 6).is_err());
/// ```
pub fn normalize_index(index: isize, len: usize) -> Result<usize, FretsError> {
    let resolved = if index >= 0 {
        index
    } else {
        len as isize + index
    };

    if resolved < 0 || resolved as usize >= len {
        return Err(FretsError::IndexOutOfRange { index, len });
    }
    Ok(resolved as usize)
}

/// Playing technique sentinels stored in place of a fret number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialString {
    NotPlayed,
    Pull,
    HammerDown,
    SlideDown,
    SlideUp,
    FullBend,
    HalfBend,
    QuarterBend,
}

impl SpecialString {
    pub const ALL: [SpecialString; 8] = [
        SpecialString::NotPlayed,
        SpecialString::Pull,
        SpecialString::HammerDown,
        SpecialString::SlideDown,
        SpecialString::SlideUp,
        SpecialString::FullBend,
        SpecialString::HalfBend,
        SpecialString::QuarterBend,
    ];

    /// The fret value encoding this technique
    pub fn value(self) -> Fret {
        match self {
            SpecialString::NotPlayed => -2,
            SpecialString::Pull => -3,
            SpecialString::HammerDown => -4,
            SpecialString::SlideDown => -5,
            SpecialString::SlideUp => -6,
            SpecialString::FullBend => -7,
            SpecialString::HalfBend => -8,
            SpecialString::QuarterBend => -9,
        }
    }

    /// Decode a fret value; `None` for ordinary frets and `-1`
    pub fn from_value(value: Fret) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }
}

/// Performance flag attached to a whole chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChordFlags {
    #[default]
    None,
    PalmMute,
    Harmonic,
}

impl ChordFlags {
    /// Suffix used in the chord text form (`"(PM)"`, `"(H)"` or empty)
    pub fn suffix(self) -> &'static str {
        match self {
            ChordFlags::None => "",
            ChordFlags::PalmMute => "(PM)",
            ChordFlags::Harmonic => "(H)",
        }
    }

    /// Reads a flag token with its parentheses already stripped.
    /// Unknown tokens are treated as no flag.
    pub fn from_token(token: &str) -> Self {
        match token {
            "H" => ChordFlags::Harmonic,
            "PM" => ChordFlags::PalmMute,
            _ => ChordFlags::None,
        }
    }
}

/// One fret value per string plus a performance flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    flags: ChordFlags,
    frets: Vec<Fret>,
}

impl Default for Chord {
    fn default() -> Self {
        Self::new(DEFAULT_STRING_COUNT)
    }
}

impl Chord {
    /// Create a chord with every string unfretted (`-1`) and no flag
    pub fn new(string_count: usize) -> Self {
        Self {
            flags: ChordFlags::None,
            frets: vec![UNFRETTED; string_count],
        }
    }

    /// Create a chord from explicit fret values, lowest string first.
    ///
    /// # Errors
    /// [`FretsError::InvalidArity`] when `frets.len() != string_count`.
    pub fn with_frets(
        flags: ChordFlags,
        string_count: usize,
        frets: Vec<Fret>,
    ) -> Result<Self, FretsError> {
        if frets.len() != string_count {
            return Err(FretsError::InvalidArity {
                expected: string_count,
                actual: frets.len(),
            });
        }
        Ok(Self { flags, frets })
    }

    /// Create a chord from the canonical shape table.
    ///
    /// All strings start at the shape's fill value, then the six-string
    /// template is written onto the highest six strings. On seven and eight
    /// string instruments the extra low strings keep the fill value.
    ///
    /// # Example
    /// ```
    /// use frets::{Chord, ChordFamily, ChordFlags, ChordType};
    ///
    /// let d = Chord::from_shape(ChordFlags::None, 7, ChordFamily::D, ChordType::Major)?;
    /// assert_eq!(d.frets(), &[-1, -1, 0, 0, 2, 3, 2]);
    /// # Ok::<(), frets::FretsError>(())
    /// ```
    ///
    /// # Errors
    /// [`FretsError::InvalidArity`] when the chord has fewer than six strings.
    pub fn from_shape(
        flags: ChordFlags,
        string_count: usize,
        family: ChordFamily,
        chord_type: ChordType,
    ) -> Result<Self, FretsError> {
        if string_count < SHAPE_STRINGS {
            return Err(FretsError::InvalidArity {
                expected: SHAPE_STRINGS,
                actual: string_count,
            });
        }

        let shape = chord_table::lookup(family, chord_type);
        let mut frets = vec![shape.fill; string_count];
        let offset = string_count - SHAPE_STRINGS;
        frets[offset..].copy_from_slice(&shape.frets);

        Ok(Self { flags, frets })
    }

    pub fn flags(&self) -> ChordFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: ChordFlags) {
        self.flags = flags;
    }

    pub fn string_count(&self) -> usize {
        self.frets.len()
    }

    pub fn frets(&self) -> &[Fret] {
        &self.frets
    }

    /// Replace all fret values at once.
    ///
    /// # Errors
    /// [`FretsError::InvalidArity`] when the length differs from the string count.
    pub fn set_frets(&mut self, frets: Vec<Fret>) -> Result<(), FretsError> {
        if frets.len() != self.frets.len() {
            return Err(FretsError::InvalidArity {
                expected: self.frets.len(),
                actual: frets.len(),
            });
        }
        self.frets = frets;
        Ok(())
    }

    /// Fret value at a signed string index (`-1` = highest string)
    pub fn get(&self, index: isize) -> Result<Fret, FretsError> {
        let i = normalize_index(index, self.frets.len())?;
        Ok(self.frets[i])
    }

    /// Set the fret value at a signed string index (`-1` = highest string)
    pub fn set(&mut self, index: isize, value: Fret) -> Result<(), FretsError> {
        let i = normalize_index(index, self.frets.len())?;
        self.frets[i] = value;
        Ok(())
    }

    /// True iff `value` lies within `-9..=24`
    pub fn is_valid_fret(value: Fret) -> bool {
        (MIN_FRET..=MAX_FRET).contains(&value)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.frets.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]{}", values.join(","), self.flags.suffix())
    }
}

impl FromStr for Chord {
    type Err = FretsError;

    /// Parse the text form produced by `Display`.
    ///
    /// Only bracket and number errors are fatal; an unrecognized flag
    /// suffix yields [`ChordFlags::None`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let close = s
            .find(']')
            .ok_or_else(|| FretsError::ParseError(format!("missing ']' in '{}'", s)))?;

        let head = s[..close].trim();
        let body = head
            .strip_prefix('[')
            .ok_or_else(|| FretsError::ParseError(format!("missing '[' in '{}'", s)))?;
        if body.contains('[') {
            return Err(FretsError::ParseError(format!("unbalanced '[' in '{}'", s)));
        }

        let tail = s[close + 1..].trim();
        if tail.contains('[') || tail.contains(']') {
            return Err(FretsError::ParseError(format!(
                "unexpected bracket after chord in '{}'",
                s
            )));
        }

        let frets = body
            .split(',')
            .map(|field| {
                let field = field.trim();
                field.parse::<Fret>().map_err(|_| {
                    FretsError::ParseError(format!("'{}' is not a fret number", field))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let flags = ChordFlags::from_token(tail.trim_matches(|c| c == '(' || c == ')'));

        Ok(Self { flags, frets })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chord_is_unfretted() {
        let chord = Chord::new(6);
        assert_eq!(chord.frets(), &[-1; 6]);
        assert_eq!(chord.flags(), ChordFlags::None);
        assert_eq!(Chord::default().string_count(), 7);
    }

    #[test]
    fn test_with_frets_identity() {
        for n in 1..=8 {
            let frets: Vec<Fret> = (0..n as Fret).collect();
            let chord = Chord::with_frets(ChordFlags::Harmonic, n, frets.clone()).unwrap();
            assert_eq!(chord.frets(), frets.as_slice());
            assert_eq!(chord.string_count(), n);
        }
    }

    #[test]
    fn test_with_frets_wrong_length() {
        let err = Chord::with_frets(ChordFlags::None, 6, vec![0, 2, 2]).unwrap_err();
        assert_eq!(err, FretsError::InvalidArity { expected: 6, actual: 3 });
    }

    #[test]
    fn test_set_frets_wrong_length() {
        let mut chord = Chord::new(6);
        assert!(chord.set_frets(vec![0; 7]).is_err());
        chord.set_frets(vec![0, 2, 2, 1, 0, 0]).unwrap();
        assert_eq!(chord.frets(), &[0, 2, 2, 1, 0, 0]);
    }

    #[test]
    fn test_negative_index_equivalence() {
        let chord = Chord::with_frets(ChordFlags::None, 7, vec![10, 11, 12, 13, 14, 15, 16]).unwrap();
        let n = chord.string_count() as isize;
        for i in 1..=n {
            assert_eq!(chord.get(i - 1).unwrap(), chord.get(-(n - i + 1)).unwrap());
        }
        assert_eq!(chord.get(-1).unwrap(), 16);
        assert_eq!(chord.get(-7).unwrap(), 10);
    }

    #[test]
    fn test_index_out_of_range() {
        let mut chord = Chord::new(6);
        assert_eq!(
            chord.get(6),
            Err(FretsError::IndexOutOfRange { index: 6, len: 6 })
        );
        assert!(chord.get(-7).is_err());
        assert!(chord.set(-7, 3).is_err());
        chord.set(-2, 3).unwrap();
        assert_eq!(chord.frets(), &[-1, -1, -1, -1, 3, -1]);
    }

    #[test]
    fn test_is_valid_fret_bounds() {
        assert!(Chord::is_valid_fret(24));
        assert!(Chord::is_valid_fret(-9));
        assert!(Chord::is_valid_fret(0));
        assert!(!Chord::is_valid_fret(25));
        assert!(!Chord::is_valid_fret(-10));
    }

    #[test]
    fn test_special_string_values() {
        assert_eq!(SpecialString::NotPlayed.value(), -2);
        assert_eq!(SpecialString::QuarterBend.value(), -9);
        assert_eq!(SpecialString::from_value(-5), Some(SpecialString::SlideDown));
        assert_eq!(SpecialString::from_value(-1), None);
        assert_eq!(SpecialString::from_value(3), None);
    }

    #[test]
    fn test_display() {
        let chord = Chord::with_frets(ChordFlags::None, 6, vec![-1, 0, 0, 2, 3, 2]).unwrap();
        assert_eq!(chord.to_string(), "[-1,0,0,2,3,2]");

        let pm = Chord::with_frets(ChordFlags::PalmMute, 6, vec![0, 2, 2, -2, -2, -2]).unwrap();
        assert_eq!(pm.to_string(), "[0,2,2,-2,-2,-2](PM)");

        let h = Chord::with_frets(ChordFlags::Harmonic, 3, vec![12, 12, 12]).unwrap();
        assert_eq!(h.to_string(), "[12,12,12](H)");
    }

    #[test]
    fn test_parse_round_trip() {
        let chords = [
            Chord::with_frets(ChordFlags::None, 6, vec![3, 3, 2, 0, 1, 0]).unwrap(),
            Chord::with_frets(ChordFlags::PalmMute, 7, vec![-9, -8, -7, -6, -5, -4, -3]).unwrap(),
            Chord::with_frets(ChordFlags::Harmonic, 8, vec![24, 0, -1, -2, 5, 7, 12, 19]).unwrap(),
        ];
        for chord in chords {
            let parsed: Chord = chord.to_string().parse().unwrap();
            assert_eq!(parsed, chord);
        }
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let chord: Chord = "  [ 0, 2 ,2,1, 0,0 ] (PM) ".parse().unwrap();
        assert_eq!(chord.frets(), &[0, 2, 2, 1, 0, 0]);
        assert_eq!(chord.flags(), ChordFlags::PalmMute);
    }

    #[test]
    fn test_parse_unknown_flag_is_none() {
        let chord: Chord = "[0,2,2,1,0,0](XYZ)".parse().unwrap();
        assert_eq!(chord.flags(), ChordFlags::None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("[0,2,2".parse::<Chord>(), Err(FretsError::ParseError(_))));
        assert!(matches!("0,2,2]".parse::<Chord>(), Err(FretsError::ParseError(_))));
        assert!(matches!("[[0,2]".parse::<Chord>(), Err(FretsError::ParseError(_))));
        assert!(matches!("[0,2]]".parse::<Chord>(), Err(FretsError::ParseError(_))));
        assert!(matches!("[0,a,2]".parse::<Chord>(), Err(FretsError::ParseError(_))));
        assert!(matches!("[]".parse::<Chord>(), Err(FretsError::ParseError(_))));
    }

    #[test]
    fn test_serde_representation() {
        let chord = Chord::with_frets(ChordFlags::PalmMute, 3, vec![0, -2, 5]).unwrap();
        let yaml = serde_yaml::to_string(&chord).unwrap();
        assert!(yaml.contains("palm-mute"));

        let back: Chord = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, chord);
    }

    #[test]
    fn test_from_shape_too_few_strings() {
        let err = Chord::from_shape(ChordFlags::None, 4, ChordFamily::C, ChordType::Major).unwrap_err();
        assert_eq!(err, FretsError::InvalidArity { expected: 6, actual: 4 });
    }

    #[test]
    fn test_normalize_index() {
        assert_eq!(normalize_index(3, 4), Ok(3));
        assert_eq!(normalize_index(-4, 4), Ok(0));
        assert!(normalize_index(4, 4).is_err());
        assert!(normalize_index(0, 0).is_err());
    }
}

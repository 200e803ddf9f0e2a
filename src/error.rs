//! # Error Types
//!
//! This module defines all error types for the frets library.
//!
//! ## Error Types
//! - `InvalidArity` - A fret array does not match the chord's string count
//! - `IndexOutOfRange` - A string or chord index falls outside its container
//! - `UnsupportedMode` - Unknown guitar or tuning mode name
//! - `ParseError` - Malformed chord text
//! - `MismatchedStringCount` - Chord and tuning disagree on the number of strings
//! - `InvalidFret` - A fret value outside `-9..=24`
//! - `InvalidLineWidth` - Zero chords per tab line
//! - `ConfigError` - Invalid YAML front matter in a tab sheet
//! - `SheetError` - A chord line in a tab sheet failed, with its line number
//!
//! ## Usage
//! ```rust
//! use frets::{Chord, FretsError};
//!
//! match "[0,2,2".parse::<Chord>() {
//!     Ok(chord) => println!("{}", chord),
//!     Err(FretsError::ParseError(message)) => eprintln!("bad chord: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FretsError {
    /// A fret array's length differs from the declared string count.
    ///
    /// # Example
    /// ```
    /// # use frets::FretsError;
    /// let err = FretsError::InvalidArity { expected: 6, actual: 5 };
    /// assert_eq!(err.to_string(), "Expected 6 fret values, got 5");
    /// ```
    #[error("Expected {expected} fret values, got {actual}")]
    InvalidArity { expected: usize, actual: usize },

    /// An index (after negative-index resolution) is outside the container.
    #[error("Index {index} is out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// A guitar or tuning mode has no table entry.
    #[error("Unsupported mode: {0}")]
    UnsupportedMode(String),

    /// Chord text is malformed.
    ///
    /// # Example
    /// ```
    /// # use frets::FretsError;
    /// let err = FretsError::ParseError("missing ']'".to_string());
    /// assert_eq!(err.to_string(), "Chord parse error: missing ']'");
    /// ```
    #[error("Chord parse error: {0}")]
    ParseError(String),

    /// A chord's arity disagrees with the active tuning's string count.
    #[error("Chord has {actual} strings but the tuning has {expected}")]
    MismatchedStringCount { expected: usize, actual: usize },

    #[error("Fret value {0} is outside -9..=24")]
    InvalidFret(i32),

    #[error("At least one chord per line is required")]
    InvalidLineWidth,

    /// Invalid YAML front matter in a tab sheet.
    #[error("Invalid sheet configuration: {0}")]
    ConfigError(String),

    /// A body line of a tab sheet could not be turned into a chord.
    #[error("Sheet error at line {line}: {message}")]
    SheetError { line: usize, message: String },
}

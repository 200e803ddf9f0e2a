pub mod chord;
pub mod chord_table;
pub mod error;
pub mod fretboard;
pub mod guitar;
pub mod phrase;
pub mod sheet;
pub mod tab;
pub mod tuning;

pub use chord::*;
pub use chord_table::{ChordFamily, ChordShape, ChordType};
pub use error::*;
pub use fretboard::Fretboard;
pub use guitar::{Guitar, GuitarMode};
pub use phrase::Phrase;
pub use sheet::{parse_sheet, Sheet, SheetConfig};
pub use tab::{print_chords, print_phrases, TabRenderer};
pub use tuning::{Tuning, TuningMode};

/// Render a tab sheet to tablature text.
/// This is the main entry point for the binary.
pub fn render_sheet(source: &str) -> Result<String, FretsError> {
    parse_sheet(source)?.render()
}

//! Phrases: chords in playing order.

use crate::chord::{normalize_index, Chord};
use crate::error::FretsError;
use serde::{Deserialize, Serialize};

/// An ordered passage of chords (a measure or a riff).
///
/// Chords are only ever appended; positions are dense and zero-based.
/// Like [`Chord`], indexing accepts negative positions (`-1` = last chord).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    chords: Vec<Chord>,
}

impl Phrase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chord; its position is the previous length
    pub fn push(&mut self, chord: Chord) {
        self.chords.push(chord);
    }

    pub fn get(&self, index: isize) -> Result<&Chord, FretsError> {
        let i = normalize_index(index, self.chords.len())?;
        Ok(&self.chords[i])
    }

    pub fn get_mut(&mut self, index: isize) -> Result<&mut Chord, FretsError> {
        let i = normalize_index(index, self.chords.len())?;
        Ok(&mut self.chords[i])
    }

    /// Replace the chord at a signed position
    pub fn set(&mut self, index: isize, chord: Chord) -> Result<(), FretsError> {
        let i = normalize_index(index, self.chords.len())?;
        self.chords[i] = chord;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chord> {
        self.chords.iter()
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    /// Copy the chords out in order
    pub fn to_vec(&self) -> Vec<Chord> {
        self.chords.clone()
    }
}

impl From<Vec<Chord>> for Phrase {
    fn from(chords: Vec<Chord>) -> Self {
        Self { chords }
    }
}

impl FromIterator<Chord> for Phrase {
    fn from_iter<I: IntoIterator<Item = Chord>>(iter: I) -> Self {
        Self {
            chords: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Phrase {
    type Item = &'a Chord;
    type IntoIter = std::slice::Iter<'a, Chord>;

    fn into_iter(self) -> Self::IntoIter {
        self.chords.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::ChordFlags;

    fn chord(root: i32) -> Chord {
        Chord::with_frets(ChordFlags::None, 6, vec![root; 6]).unwrap()
    }

    #[test]
    fn test_push_keeps_order() {
        let mut phrase = Phrase::new();
        assert!(phrase.is_empty());
        phrase.push(chord(0));
        phrase.push(chord(3));
        phrase.push(chord(5));

        assert_eq!(phrase.len(), 3);
        assert_eq!(phrase.get(0).unwrap(), &chord(0));
        assert_eq!(phrase.get(2).unwrap(), &chord(5));
        assert_eq!(phrase.to_vec(), vec![chord(0), chord(3), chord(5)]);
    }

    #[test]
    fn test_negative_index() {
        let phrase: Phrase = vec![chord(0), chord(3), chord(5)].into();
        assert_eq!(phrase.get(-1).unwrap(), &chord(5));
        assert_eq!(phrase.get(-3).unwrap(), &chord(0));
        assert!(phrase.get(-4).is_err());
        assert!(phrase.get(3).is_err());
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut phrase: Phrase = vec![chord(0), chord(3)].into_iter().collect();
        phrase.set(-1, chord(7)).unwrap();
        assert_eq!(phrase.to_vec(), vec![chord(0), chord(7)]);
        assert_eq!(
            phrase.set(2, chord(9)),
            Err(FretsError::IndexOutOfRange { index: 2, len: 2 })
        );

        phrase.get_mut(0).unwrap().set(-1, 12).unwrap();
        assert_eq!(phrase.get(0).unwrap().get(-1).unwrap(), 12);
    }
}

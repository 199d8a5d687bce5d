use std::error::Error;
use std::fmt;

use smallvec::SmallVec;

/// Number of letters in the dictionary alphabet (`a` to `z`).
pub const ALPHABET_SIZE: usize = 26;

/// A letter, stored as its index into the alphabet (`0` is `a`, `25` is `z`).
pub type Letter = u8;

/// A validated, non-empty word as a sequence of letter indices.
pub type Word = SmallVec<[Letter; 32]>;

/// Converts an ASCII byte into a letter index, if it belongs to the alphabet.
#[inline]
pub fn letter_index(byte: u8) -> Option<Letter> {
    byte.is_ascii_lowercase().then(|| byte - b'a')
}

/// Converts a letter index back into its character.
#[inline]
pub fn letter_char(letter: Letter) -> char {
    debug_assert!((letter as usize) < ALPHABET_SIZE);
    char::from(b'a' + letter)
}

/// Renders a sequence of letter indices as text.
pub fn letters_to_string(letters: &[Letter]) -> String {
    letters.iter().map(|&l| letter_char(l)).collect()
}

/// Trait for types that can be turned into a dictionary word.
///
/// Implemented for common string and byte types so that
/// [`Builder::add_word`](super::builder::Builder::add_word) and
/// [`find_concatenated_words`](super::builder::find_concatenated_words) accept
/// them directly. Only lowercase ASCII letters are accepted.
pub trait IntoWord {
    /// Validates this word and collects it into a letter buffer.
    fn collect_word(self) -> Result<Word, WordError>;
}

fn collect_bytes(bytes: &[u8]) -> Result<Word, WordError> {
    if bytes.is_empty() {
        return Err(WordError::Empty);
    }
    bytes
        .iter()
        .enumerate()
        .map(|(position, &byte)| {
            letter_index(byte).ok_or_else(|| WordError::InvalidLetter {
                word: String::from_utf8_lossy(bytes).into_owned(),
                position,
                byte,
            })
        })
        .collect()
}

impl IntoWord for &str {
    fn collect_word(self) -> Result<Word, WordError> {
        collect_bytes(self.as_bytes())
    }
}

impl IntoWord for &&str {
    fn collect_word(self) -> Result<Word, WordError> {
        collect_bytes(self.as_bytes())
    }
}

impl IntoWord for String {
    fn collect_word(self) -> Result<Word, WordError> {
        collect_bytes(self.as_bytes())
    }
}

impl IntoWord for &String {
    fn collect_word(self) -> Result<Word, WordError> {
        collect_bytes(self.as_bytes())
    }
}

impl IntoWord for &[u8] {
    fn collect_word(self) -> Result<Word, WordError> {
        collect_bytes(self)
    }
}

/// Errors for words that cannot be put in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The word has no letters.
    Empty,
    /// The word contains a byte outside `a..=z`.
    InvalidLetter {
        /// The offending word, lossily decoded.
        word: String,
        /// Byte offset of the first invalid byte.
        position: usize,
        /// The invalid byte.
        byte: u8,
    },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordError::Empty => write!(f, "EmptyWord - words must have at least one letter"),
            WordError::InvalidLetter {
                word,
                position,
                byte,
            } => write!(
                f,
                "InvalidLetter - {word:?} has byte {byte:#04x} at {position}, expected a..=z"
            ),
        }
    }
}

impl Error for WordError {}

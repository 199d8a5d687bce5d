use std::error::Error;
use std::fmt;
#[cfg(feature = "fs")]
use std::fs::File;
#[cfg(feature = "fs")]
use std::io::{BufRead, BufReader};

use tracing::trace;

use super::matcher::Matcher;
use super::tracker::{CandidateTracker, Report};
use super::tree::Trie;
use super::word::{IntoWord, WordError};

/// Builds the dictionary one word at a time, then finds its concatenated words.
///
/// Adding words and verifying candidates are separate phases: [`finish`]
/// consumes the builder, so no word can be added once verification starts.
///
/// [`finish`]: Builder::finish
///
/// # Examples
///
/// ```
/// use libconcat::trie::builder::Builder;
///
/// let mut builder = Builder::new();
/// for word in ["cat", "dog", "catdog"] {
///     builder.add_word(word).unwrap();
/// }
/// let report = builder.finish();
/// assert_eq!(report.longest(), Some("catdog"));
/// assert_eq!(report.second_longest(), None);
/// assert_eq!(report.total(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    trie: Trie,
    tracker: CandidateTracker,
}

impl Builder {
    /// Creates a builder with an empty dictionary.
    pub fn new() -> Self {
        Builder::default()
    }

    /// Adds a word to the dictionary and files any break candidates it uncovers.
    ///
    /// Words may come in any order and are not deduplicated: a word given twice
    /// is counted twice if it is a concatenation.
    ///
    /// # Errors
    ///
    /// Returns a [`WordError`] if the word is empty or holds anything but
    /// `a..=z`. The builder is left unchanged in that case.
    pub fn add_word(&mut self, word: impl IntoWord) -> Result<(), WordError> {
        let insertion = self.trie.insert(word)?;
        trace!(
            id = insertion.id,
            len = insertion.word.len(),
            missing = insertion.missing.len(),
            extended = insertion.extended.len(),
            "inserted word"
        );
        self.tracker.track(insertion);
        Ok(())
    }

    /// The dictionary built so far.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// The break candidates found so far.
    pub fn tracker(&self) -> &CandidateTracker {
        &self.tracker
    }

    /// Verifies every break candidate against the finished dictionary.
    pub fn finish(self) -> Report {
        let Builder { trie, tracker } = self;
        tracker.verify(&mut Matcher::new(&trie))
    }
}

/// Finds the concatenated words among `words`.
///
/// A word is concatenated if it is made of two or more words of the same list,
/// repeats allowed.
///
/// # Examples
///
/// ```
/// use libconcat::trie::builder::find_concatenated_words;
///
/// let report = find_concatenated_words(["a", "aa", "aaa"]).unwrap();
/// assert_eq!(report.longest(), Some("aaa"));
/// assert_eq!(report.second_longest(), Some("aa"));
/// assert_eq!(report.total(), 2);
/// ```
pub fn find_concatenated_words<W>(words: impl IntoIterator<Item = W>) -> Result<Report, WordError>
where
    W: IntoWord,
{
    let mut builder = Builder::new();
    for word in words {
        builder.add_word(word)?;
    }
    Ok(builder.finish())
}

/// A word that failed validation while reading a word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number in the input.
    pub line: usize,
    /// What was wrong with the word.
    pub error: WordError,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

impl Error for LineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

/// Finds the concatenated words of a word list read from `reader`.
///
/// One word per line. Trailing whitespace, including `\r\n` line endings, is
/// trimmed. Empty lines and lines starting with '#' are skipped.
#[cfg(feature = "fs")]
pub fn find_concatenated_words_from_reader(
    mut reader: impl BufRead,
) -> Result<Report, Box<dyn Error>> {
    let mut builder = Builder::new();

    // read_line into one buffer instead of lines(), so a single String is
    // reused for every line.
    let mut buf = String::with_capacity(80);
    let mut line = 0;
    loop {
        let bytes_read = reader.read_line(&mut buf);
        match bytes_read {
            Ok(0) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        line += 1;
        let word = buf.trim_end();
        if !word.is_empty() && !is_comment(word) {
            builder
                .add_word(word)
                .map_err(|error| LineError { line, error })?;
        }
        buf.clear();
    }
    Ok(builder.finish())
}

/// Finds the concatenated words of a word list file.
///
/// See [`find_concatenated_words_from_reader`] for the file format.
///
/// # Examples
///
/// ```no_run
/// use libconcat::trie::builder::find_concatenated_words_from_file;
///
/// let report = find_concatenated_words_from_file("words.txt").unwrap();
/// println!("{report}");
/// ```
#[cfg(feature = "fs")]
pub fn find_concatenated_words_from_file(filename: &str) -> Result<Report, Box<dyn Error>> {
    let file = File::open(filename)?;
    find_concatenated_words_from_reader(BufReader::new(file))
}

/// Returns true if this line is a comment.
#[cfg(feature = "fs")]
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

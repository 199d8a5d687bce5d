//! # libconcat
//!
//! Finds the [concatenated words](https://leetcode.com/problems/concatenated-words/)
//! of a word list: the words made of two or more other words of the same list,
//! the same word any number of times included. The two longest such words and
//! their total count are reported.
//!
//! ## How it works
//!
//! Words go into a [prefix tree](trie::Trie) one at a time. Whenever a word's
//! path runs through the end of another word, the rest of the word is kept as a
//! *break candidate*. Whether a candidate really splits into words can only be
//! known once every word is in, so candidates are verified afterwards by a
//! [matcher](trie::Matcher) that walks the tree and may restart at the root at
//! every word boundary.
//!
//! ## Quick Start
//!
//! ```
//! use libconcat::trie::find_concatenated_words;
//!
//! let report =
//!     find_concatenated_words(["cat", "cats", "catsdog", "dog", "dogcatsdog"]).unwrap();
//! assert_eq!(report.longest(), Some("dogcatsdog"));
//! assert_eq!(report.second_longest(), Some("catsdog"));
//! assert_eq!(report.total(), 2);
//! ```
//!
//! Words are added in two phases with a [`Builder`](trie::Builder): the matcher
//! is only available once the builder is consumed, so no query ever sees a
//! partial dictionary.
//!
//! ```
//! use libconcat::trie::Builder;
//!
//! let mut builder = Builder::new();
//! for word in ["dogcat", "dog", "cat"] {
//!     builder.add_word(word).unwrap();
//! }
//! assert_eq!(builder.tracker().len(), 1);
//! let report = builder.finish();
//! assert_eq!(report.confirmed(), ["dogcat"]);
//! ```
//!
//! ## Features
//!
//! - **`fs`** (default): reading word lists from files and readers with
//!   [`find_concatenated_words_from_file`](trie::find_concatenated_words_from_file).

#![warn(missing_docs)]

/// The prefix tree, word matcher, and candidate tracking.
pub mod trie;

pub use trie::{find_concatenated_words, Builder, Report, Trie, WordError};

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scenario_reports() {
        let cases: [(&[&str], Option<&str>, Option<&str>, usize); 5] = [
            (&[], None, None, 0),
            (&["hello"], None, None, 0),
            (&["cat", "dog", "catdog"], Some("catdog"), None, 1),
            (&["a", "aa", "aaa"], Some("aaa"), Some("aa"), 2),
            (
                &["cat", "cats", "catsdog", "dog", "dogcatsdog"],
                Some("dogcatsdog"),
                Some("catsdog"),
                2,
            ),
        ];
        for (words, longest, second, total) in cases {
            let report = find_concatenated_words(words).unwrap();
            assert_eq!(report.longest(), longest, "{words:?}");
            assert_eq!(report.second_longest(), second, "{words:?}");
            assert_eq!(report.total(), total, "{words:?}");
        }
    }

    #[test]
    fn unsorted_input_finds_the_same_words() {
        let report = find_concatenated_words(["dogcatsdog", "catsdog", "dog", "cats", "cat"]).unwrap();
        assert_eq!(report.longest(), Some("dogcatsdog"));
        assert_eq!(report.second_longest(), Some("catsdog"));
        assert_eq!(report.total(), 2);
    }

    #[test]
    fn matcher_is_idempotent() {
        let mut trie = Trie::new();
        for word in ["ab", "abc", "cab"] {
            trie.insert(word).unwrap();
        }
        let mut matcher = trie::Matcher::new(&trie);
        for text in ["abcab", "abab", "cabc", "abca"] {
            let first = matcher.matches_str(text);
            assert_eq!(matcher.matches_str(text), first, "{text}");
        }
    }
}

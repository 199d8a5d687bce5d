/// Dictionary building, verification, and the one-call entry points.
pub mod builder;
/// Segmentation of text into dictionary words.
pub mod matcher;
/// Prefix-tree nodes.
pub mod node;
/// Break-candidate bookkeeping and the longest-word ranking.
pub mod tracker;
/// The prefix tree and word insertion.
pub mod tree;
/// Word validation and the letter alphabet.
pub mod word;

pub use builder::{find_concatenated_words, Builder, LineError};
#[cfg(feature = "fs")]
pub use builder::{find_concatenated_words_from_file, find_concatenated_words_from_reader};
pub use matcher::{matches, Matcher};
pub use node::{TrieNode, WordId};
pub use tracker::{CandidateTracker, PendingRecord, Report};
pub use tree::{Extension, Insertion, MissingSuffix, Trie};
pub use word::{IntoWord, Letter, Word, WordError, ALPHABET_SIZE};

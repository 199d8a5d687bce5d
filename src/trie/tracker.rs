use std::fmt;

use tracing::{debug, debug_span, trace};

use super::matcher::Matcher;
use super::node::WordId;
use super::tree::{Insertion, MissingSuffix};
use super::word::letters_to_string;

/// A word with break candidates still waiting to be verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRecord {
    word: String,
    missing: Vec<MissingSuffix>,
}

impl PendingRecord {
    /// The word the candidates belong to.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The candidates, in the order they were found.
    pub fn missing(&self) -> &[MissingSuffix] {
        &self.missing
    }
}

/// Collects break candidates while the dictionary is built, and verifies them
/// once it is complete.
#[derive(Debug, Default)]
pub struct CandidateTracker {
    pending: Vec<PendingRecord>,
    // Index into `pending` for each word id that has a record.
    by_word: Vec<Option<usize>>,
}

impl CandidateTracker {
    /// Creates a tracker with no pending records.
    pub fn new() -> Self {
        CandidateTracker::default()
    }

    /// Files the candidates found by one insertion.
    ///
    /// A record is created for a word the first time a candidate turns up for
    /// it, whether on its own insertion or on the later insertion of a prefix.
    pub fn track(&mut self, insertion: Insertion) {
        let Insertion {
            id,
            word,
            missing,
            extended,
        } = insertion;

        for extension in extended {
            let record = self.record_mut(extension.id, || {
                let mut text = letters_to_string(&word);
                text.push_str(&extension.suffix.to_string());
                text
            });
            record.missing.push(extension.suffix);
        }
        if !missing.is_empty() {
            self.record_mut(id, || letters_to_string(&word))
                .missing
                .extend(missing);
        }
    }

    fn record_mut(&mut self, id: WordId, word: impl FnOnce() -> String) -> &mut PendingRecord {
        if id >= self.by_word.len() {
            self.by_word.resize(id + 1, None);
        }
        let index = match self.by_word[id] {
            Some(index) => index,
            None => {
                self.pending.push(PendingRecord {
                    word: word(),
                    missing: Vec::new(),
                });
                let index = self.pending.len() - 1;
                self.by_word[id] = Some(index);
                index
            }
        };
        &mut self.pending[index]
    }

    /// Number of words with at least one candidate.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True if no candidates were found.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns the pending records in the order they were created.
    pub fn pending(&self) -> &[PendingRecord] {
        &self.pending
    }

    /// Verifies every pending record against the finished dictionary.
    ///
    /// Records are visited newest first. A word is confirmed by the first of its
    /// candidates that the matcher accepts and is counted once no matter how
    /// many of its candidates would match. All records are dropped afterwards.
    pub fn verify(self, matcher: &mut Matcher<'_>) -> Report {
        let _span = debug_span!("verify", pending = self.pending.len()).entered();
        let mut report = Report::default();
        for record in self.pending.into_iter().rev() {
            if record.missing.iter().any(|suffix| matcher.matches(suffix)) {
                debug!(word = %record.word, len = record.word.len(), "confirmed concatenated word");
                report.confirm(record.word);
            } else {
                trace!(word = %record.word, candidates = record.missing.len(), "no candidate matched");
            }
        }
        debug!(
            total = report.total,
            longest = ?report.longest,
            second_longest = ?report.second_longest,
            "verification finished"
        );
        report
    }
}

/// The outcome of a search: the two longest concatenated words and how many
/// there are.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    longest: Option<String>,
    second_longest: Option<String>,
    total: usize,
    confirmed: Vec<String>,
}

impl Report {
    /// The longest concatenated word, or None if there is none.
    pub fn longest(&self) -> Option<&str> {
        self.longest.as_deref()
    }

    /// The second-longest concatenated word, or None.
    ///
    /// A word takes a slot only when it is strictly longer than the current
    /// holder, so among equally long words the first one confirmed stays.
    pub fn second_longest(&self) -> Option<&str> {
        self.second_longest.as_deref()
    }

    /// Total number of confirmed concatenated words.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Every confirmed word, in the order it was confirmed.
    pub fn confirmed(&self) -> &[String] {
        &self.confirmed
    }

    fn confirm(&mut self, word: String) {
        let len = word.len();
        if len > slot_len(&self.longest) {
            self.second_longest = self.longest.replace(word.clone());
        } else if len > slot_len(&self.second_longest) {
            self.second_longest = Some(word.clone());
        }
        self.total += 1;
        self.confirmed.push(word);
    }
}

fn slot_len(slot: &Option<String>) -> usize {
    slot.as_ref().map_or(0, String::len)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Longest concatenated word is : {}",
            self.longest().unwrap_or("NULL")
        )?;
        writeln!(
            f,
            "2nd longest concatenated word is : {}",
            self.second_longest().unwrap_or("NULL")
        )?;
        write!(f, "There are {} concatenated words in the file.", self.total)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trie::tree::Trie;

    fn tracked(words: &[&str]) -> (Trie, CandidateTracker) {
        let mut trie = Trie::new();
        let mut tracker = CandidateTracker::new();
        for word in words {
            tracker.track(trie.insert(word).unwrap());
        }
        (trie, tracker)
    }

    #[test]
    fn records_only_words_with_candidates() {
        let (_, tracker) = tracked(&["cat", "dog", "catdog"]);
        assert_eq!(tracker.len(), 1);
        let record = &tracker.pending()[0];
        assert_eq!(record.word(), "catdog");
        assert_eq!(record.missing()[0].to_string(), "dog");
    }

    #[test]
    fn later_prefix_reuses_existing_record() {
        let (_, tracker) = tracked(&["ab", "abcd", "abc"]);
        let words: Vec<_> = tracker.pending().iter().map(PendingRecord::word).collect();
        assert_eq!(words, ["abcd", "abc"]);
        let missing: Vec<_> = tracker.pending()[0]
            .missing()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(missing, ["cd", "d"]);
    }

    #[test]
    fn later_prefix_creates_record_with_full_word() {
        let (_, tracker) = tracked(&["sunflower", "sun"]);
        assert_eq!(tracker.pending()[0].word(), "sunflower");
        assert_eq!(tracker.pending()[0].missing()[0].to_string(), "flower");
    }

    #[test]
    fn records_found_by_id_in_any_order() {
        let (_, tracker) = tracked(&["b", "xyzw", "bc", "xy", "xyz"]);
        let words: Vec<_> = tracker.pending().iter().map(PendingRecord::word).collect();
        assert_eq!(words, ["bc", "xyzw", "xyz"]);
        let missing: Vec<_> = tracker.pending()[1]
            .missing()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(missing, ["zw", "w"]);
    }

    #[test]
    fn unmatched_candidates_are_not_counted() {
        let (trie, tracker) = tracked(&["cat", "catfish"]);
        assert!(!tracker.is_empty());
        let report = tracker.verify(&mut Matcher::new(&trie));
        assert_eq!(report, Report::default());
    }

    #[test]
    fn word_counted_once_with_many_matching_candidates() {
        let (trie, tracker) = tracked(&["a", "aa", "aaa", "aaaa"]);
        let report = tracker.verify(&mut Matcher::new(&trie));
        assert_eq!(report.total(), 3);
        assert_eq!(report.confirmed(), ["aaaa", "aaa", "aa"]);
    }

    #[test]
    fn ties_keep_first_holder() {
        let mut report = Report::default();
        report.confirm("abcd".into());
        report.confirm("wxyz".into());
        report.confirm("ab".into());
        report.confirm("yz".into());
        assert_eq!(report.longest(), Some("abcd"));
        assert_eq!(report.second_longest(), Some("ab"));
        assert_eq!(report.total(), 4);
    }

    #[test]
    fn longer_word_demotes_longest() {
        let mut report = Report::default();
        report.confirm("abc".into());
        report.confirm("abcdef".into());
        assert_eq!(report.longest(), Some("abcdef"));
        assert_eq!(report.second_longest(), Some("abc"));
    }

    #[test]
    fn equal_to_longest_fills_empty_second_slot() {
        let mut report = Report::default();
        report.confirm("abcdef".into());
        assert_eq!(report.second_longest(), None);
        report.confirm("abcdef".into());
        assert_eq!(report.second_longest(), Some("abcdef"));
    }

    #[test]
    fn display_matches_tool_output() {
        let mut report = Report::default();
        assert_eq!(
            report.to_string(),
            "Longest concatenated word is : NULL\n\
             2nd longest concatenated word is : NULL\n\
             There are 0 concatenated words in the file."
        );
        report.confirm("catdog".into());
        assert!(report
            .to_string()
            .starts_with("Longest concatenated word is : catdog\n"));
    }
}

use super::tree::Trie;
use super::word::{IntoWord, Letter};

/// Decides whether text can be split into dictionary words.
///
/// A matcher borrows a finished [`Trie`]; the borrow keeps the dictionary from
/// changing while queries are answered. Its scratch buffer is reused across
/// calls to [`matches`](Matcher::matches).
///
/// # Examples
///
/// ```
/// use libconcat::trie::{Matcher, Trie};
///
/// let mut trie = Trie::new();
/// for word in ["cat", "cats", "dog"] {
///     trie.insert(word).unwrap();
/// }
/// let mut matcher = Matcher::new(&trie);
/// assert!(matcher.matches_str("catsdogcat"));
/// assert!(!matcher.matches_str("catsdo"));
/// ```
#[derive(Debug)]
pub struct Matcher<'t> {
    trie: &'t Trie,
    // segmentable[i]: text[i..] splits into words, restarting at the root at i.
    segmentable: Vec<bool>,
}

impl<'t> Matcher<'t> {
    /// Creates a matcher over a complete dictionary.
    pub fn new(trie: &'t Trie) -> Self {
        Matcher {
            trie,
            segmentable: Vec::new(),
        }
    }

    /// Returns true if `text` is a sequence of one or more dictionary words.
    ///
    /// At every node that ends a word the search may either keep descending or
    /// close the word and start the rest of the text again from the root. The
    /// same word may be used any number of times. Empty text never matches
    /// since the root does not end a word.
    ///
    /// Restart offsets are solved from the end of the text backwards, so each
    /// offset is walked at most once and no recursion is involved.
    pub fn matches(&mut self, text: &[Letter]) -> bool {
        let len = text.len();
        if len == 0 {
            return false;
        }
        self.segmentable.clear();
        self.segmentable.resize(len + 1, false);
        self.segmentable[len] = true;

        let root = self.trie.root();
        for start in (0..len).rev() {
            let mut node = root;
            for (end, &letter) in (start + 1..).zip(&text[start..]) {
                match node.get(letter) {
                    Some(child) => node = child,
                    None => break,
                }
                if node.is_word() && self.segmentable[end] {
                    self.segmentable[start] = true;
                    break;
                }
            }
        }
        self.segmentable[0]
    }

    /// Like [`matches`](Matcher::matches), for text that may not be a valid word.
    ///
    /// Text that is empty or holds anything but `a..=z` never matches.
    pub fn matches_str(&mut self, text: &str) -> bool {
        text.collect_word()
            .is_ok_and(|letters| self.matches(&letters))
    }
}

/// Returns true if `text` can be split into one or more words of `trie`.
///
/// Shorthand for a one-off [`Matcher`].
pub fn matches(trie: &Trie, text: &[Letter]) -> bool {
    Matcher::new(trie).matches(text)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trie::node::TrieNode;
    use itertools::Itertools;

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word).unwrap();
        }
        trie
    }

    // Direct search: descend, or close the word and restart at the root.
    fn naive(root: &TrieNode, node: Option<&TrieNode>, text: &[Letter]) -> bool {
        let Some(node) = node else {
            return false;
        };
        if text.is_empty() {
            return node.is_word();
        }
        naive(root, node.get(text[0]), &text[1..])
            || (node.is_word() && naive(root, Some(root), text))
    }

    #[test]
    fn single_word_matches() {
        let trie = trie_of(&["hello"]);
        let mut m = Matcher::new(&trie);
        assert!(m.matches_str("hello"));
        assert!(!m.matches_str("hell"));
        assert!(!m.matches_str("helloo"));
    }

    #[test]
    fn repeated_word_matches() {
        let trie = trie_of(&["ab"]);
        let mut m = Matcher::new(&trie);
        assert!(m.matches_str("ababab"));
        assert!(!m.matches_str("ababa"));
    }

    #[test]
    fn needs_backtracking() {
        // Taking the longest word first ("cats") leaves "anddog", which fails.
        let trie = trie_of(&["cat", "cats", "sand", "dog"]);
        let mut m = Matcher::new(&trie);
        assert!(m.matches_str("catsanddog"));
        assert!(m.matches_str("catsdog"));
        assert!(!m.matches_str("catsandog"));
        assert!(!m.matches_str("catsanddo"));
    }

    #[test]
    fn empty_and_invalid_text_never_match() {
        let trie = trie_of(&["a"]);
        let mut m = Matcher::new(&trie);
        assert!(!m.matches(&[]));
        assert!(!m.matches_str(""));
        assert!(!m.matches_str("a a"));
        assert!(!m.matches_str("A"));
    }

    #[test]
    fn empty_dictionary_matches_nothing() {
        let trie = Trie::new();
        assert!(!Matcher::new(&trie).matches_str("a"));
    }

    #[test]
    fn adversarial_text_is_fast() {
        let trie = trie_of(&["a", "aa", "aaa", "aaaa", "aaaaa"]);
        let mut text = vec![0; 5000];
        assert!(matches(&trie, &text));
        text.push(1);
        assert!(!matches(&trie, &text));
    }

    #[test]
    fn agrees_with_direct_search() {
        let trie = trie_of(&["a", "ab", "bab", "bba", "aab"]);
        let root = trie.root();
        let mut m = Matcher::new(&trie);
        for len in 1..=7 {
            for text in (0..len).map(|_| [0u8, 1]).multi_cartesian_product() {
                let expected = naive(root, Some(root), &text);
                assert_eq!(m.matches(&text), expected, "{text:?}");
                assert_eq!(m.matches(&text), expected, "second run {text:?}");
            }
        }
    }
}

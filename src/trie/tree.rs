use std::fmt;
use std::ops::Deref;

use super::node::{TrieNode, WordId};
use super::word::{letters_to_string, IntoWord, Letter, Word, WordError};

/// The unconsumed tail of a word, taken where the word passes the end of
/// another dictionary word.
///
/// A missing suffix is a break candidate: if it can be segmented into
/// dictionary words once the dictionary is complete, the word it came from is
/// a concatenation.
#[derive(Clone, PartialEq, Eq)]
pub struct MissingSuffix(Word);

impl MissingSuffix {
    pub(crate) fn new(letters: &[Letter]) -> Self {
        debug_assert!(!letters.is_empty());
        MissingSuffix(Word::from_slice(letters))
    }
}

impl Deref for MissingSuffix {
    type Target = [Letter];

    fn deref(&self) -> &[Letter] {
        &self.0
    }
}

impl fmt::Debug for MissingSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MissingSuffix({:?})", letters_to_string(&self.0))
    }
}

impl fmt::Display for MissingSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&letters_to_string(&self.0))
    }
}

/// A break candidate for a word inserted earlier, found because the new word
/// ends on that earlier word's path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extension {
    /// The earlier word the candidate belongs to.
    pub id: WordId,
    /// Letters of the earlier word past the end of the new word.
    pub suffix: MissingSuffix,
}

/// The outcome of inserting one word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Insertion {
    /// Id given to the inserted word.
    pub id: WordId,
    /// The inserted word.
    pub word: Word,
    /// Break candidates of the inserted word, in the order they were passed.
    pub missing: Vec<MissingSuffix>,
    /// Break candidates of earlier words that extend the inserted word.
    pub extended: Vec<Extension>,
}

/// A prefix tree over lowercase words.
///
/// Words are inserted one at a time with [`insert`](Trie::insert). Each
/// insertion reports the break candidates it uncovered, both for the new word
/// and for words already in the tree that it is a prefix of, so the candidate
/// set does not depend on insertion order.
///
/// # Examples
///
/// ```
/// use libconcat::trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("cat").unwrap();
/// let insertion = trie.insert("catdog").unwrap();
/// assert_eq!(insertion.missing[0].to_string(), "dog");
/// assert!(trie.contains("catdog"));
/// assert!(!trie.contains("ca"));
/// ```
#[derive(Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Trie::default()
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Returns the number of words inserted so far, duplicates included.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns the number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children().map(|(_, child)| child));
        }
        count
    }

    /// Returns `true` if the given word was inserted.
    ///
    /// Invalid words are never members.
    pub fn contains(&self, word: impl IntoWord) -> bool {
        word.collect_word().is_ok_and(|word| {
            word.iter()
                .try_fold(&self.root, |node, &letter| node.get(letter))
                .is_some_and(TrieNode::is_word)
        })
    }

    /// Inserts a word and returns the break candidates it uncovered.
    ///
    /// Walking down the tree, every node that already ends a word while letters
    /// remain contributes the remaining tail to [`Insertion::missing`]. If the
    /// word's last node did not end a word before, every word stored below it
    /// contributes its tail past that node to [`Insertion::extended`].
    ///
    /// # Errors
    ///
    /// Returns a [`WordError`] if the word is empty or contains anything but
    /// `a..=z`. The tree is left unchanged in that case.
    pub fn insert(&mut self, word: impl IntoWord) -> Result<Insertion, WordError> {
        let word = word.collect_word()?;
        let id = self.word_count;
        self.word_count += 1;

        let mut missing = Vec::new();
        let mut node = &mut self.root;
        for (offset, &letter) in word.iter().enumerate() {
            if node.is_word() {
                missing.push(MissingSuffix::new(&word[offset..]));
            }
            node = node.child_or_insert(letter);
        }

        let extended = if node.add_word(id) {
            collect_extensions(node)
        } else {
            Vec::new()
        };

        Ok(Insertion {
            id,
            word,
            missing,
            extended,
        })
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("word_count", &self.word_count)
            .field("node_count", &self.node_count())
            .finish()
    }
}

// Preorder walk below `node`, children in letter order. Each stack entry
// carries its depth so `path` can be cut back to the entry's parent.
fn collect_extensions(node: &TrieNode) -> Vec<Extension> {
    let mut out = Vec::new();
    let mut path = Word::new();
    let mut stack: Vec<_> = node.children().rev().map(|(ch, n)| (ch, n, 0)).collect();
    while let Some((letter, child, depth)) = stack.pop() {
        path.truncate(depth);
        path.push(letter);
        out.extend(child.word_ids().iter().map(|&id| Extension {
            id,
            suffix: MissingSuffix::new(&path),
        }));
        stack.extend(child.children().rev().map(|(ch, n)| (ch, n, depth + 1)));
    }
    out
}

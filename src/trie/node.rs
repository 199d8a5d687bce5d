use std::fmt;
use std::mem;

use smallvec::SmallVec;

use super::word::{Letter, ALPHABET_SIZE};

/// Identifies an inserted word by its position in the input.
pub type WordId = usize;

/// A node in the prefix tree.
///
/// Children are kept sorted by letter and owned directly by their parent, so
/// a whole subtree is released when its root is dropped. Dropping walks the
/// subtree with an explicit stack, so arbitrarily long words are fine.
#[derive(Default)]
pub struct TrieNode {
    children: Vec<(Letter, TrieNode)>,
    // Every input word ending here. More than one entry only for duplicate input lines.
    words: SmallVec<[WordId; 1]>,
}

impl TrieNode {
    /// Creates an empty node that terminates no word.
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Returns the child along `letter`'s edge, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: Letter) -> Option<&TrieNode> {
        // Linear scan unrolled by 2; most nodes have only a few children.
        let chunks = self.children.chunks_exact(2);
        let remainder = chunks.remainder();
        for chunk in chunks {
            if chunk[0].0 == letter {
                return Some(&chunk[0].1);
            }
            if chunk[1].0 == letter {
                return Some(&chunk[1].1);
            }
        }
        remainder
            .iter()
            .find(|(ch, _)| *ch == letter)
            .map(|(_, node)| node)
    }

    /// True if some inserted word ends exactly at this node.
    #[inline]
    pub fn is_word(&self) -> bool {
        !self.words.is_empty()
    }

    /// Ids of the words ending at this node, in insertion order.
    #[inline]
    pub fn word_ids(&self) -> &[WordId] {
        &self.words
    }

    /// Records that word `id` ends here.
    ///
    /// Returns true if this node did not terminate any word before.
    pub(crate) fn add_word(&mut self, id: WordId) -> bool {
        let first = self.words.is_empty();
        self.words.push(id);
        first
    }

    /// Returns the child along `letter`'s edge, creating an empty one if needed.
    pub(crate) fn child_or_insert(&mut self, letter: Letter) -> &mut TrieNode {
        debug_assert!((letter as usize) < ALPHABET_SIZE);
        let pos = match self.children.binary_search_by_key(&letter, |(ch, _)| *ch) {
            Ok(pos) => pos,
            Err(pos) => {
                self.children.insert(pos, (letter, TrieNode::new()));
                pos
            }
        };
        &mut self.children[pos].1
    }

    /// Returns an iterator over all children of this node, in letter order.
    #[inline]
    pub fn children(&self) -> ChildIter<'_> {
        ChildIter {
            inner: self.children.iter(),
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack = mem::take(&mut self.children);
        while let Some((_, mut node)) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("words", &self.words)
            .field("child_count", &self.child_count())
            .finish()
    }
}

/// An iterator over the children of a [`TrieNode`].
#[derive(Clone)]
pub struct ChildIter<'t> {
    inner: std::slice::Iter<'t, (Letter, TrieNode)>,
}

impl<'t> Iterator for ChildIter<'t> {
    type Item = (Letter, &'t TrieNode);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(ch, node)| (*ch, node))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for ChildIter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(ch, node)| (*ch, node))
    }
}

impl ExactSizeIterator for ChildIter<'_> {}

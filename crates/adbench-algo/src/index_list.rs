//! Circular singly-linked list of indices, stored as an array of "next" links.
//!
//! Elements `0..len` are the real entries and index `len` is a sentinel head. Removing an
//! element only rewrites the link of its predecessor, and hands back an [`Unlinked`] token that
//! restores it exactly.
use std::fmt;

/// Token returned by [`IndexList::unlink_after`], holding the link that was overwritten.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use = "an unlinked element must be restored to keep the list intact"]
pub struct Unlinked {
    prev: usize,
    saved: usize,
}

impl Unlinked {
    /// The element that was removed from the list.
    pub fn removed(&self) -> usize {
        self.saved
    }
}

/// Circular index list with a sentinel head.
///
/// # Example
///
/// ```
/// use adbench_algo::IndexList;
///
/// let mut list = IndexList::new(3);
/// assert_eq!(vec![0, 1, 2], list.iter().collect::<Vec<_>>());
///
/// let token = list.unlink_after(0);
/// assert_eq!(1, token.removed());
/// assert_eq!(vec![0, 2], list.iter().collect::<Vec<_>>());
///
/// list.restore(token);
/// assert_eq!(IndexList::new(3), list);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct IndexList {
    next: Vec<usize>,
}

impl IndexList {
    /// Creates the list `0, 1, .., len - 1` with all elements active.
    pub fn new(len: usize) -> Self {
        let mut next: Vec<usize> = (1..=len).collect();
        next.push(0);
        Self { next }
    }

    /// Number of real elements, active or not.
    pub fn len(&self) -> usize {
        self.next.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the sentinel head.
    pub fn head(&self) -> usize {
        self.len()
    }

    /// First active element, or the sentinel when no element is active.
    pub fn first(&self) -> usize {
        self.next[self.head()]
    }

    /// Element following `index` in the list.
    pub fn next(&self, index: usize) -> usize {
        self.next[index]
    }

    /// Removes the element following `prev` from the list.
    ///
    /// `prev` is either the sentinel or an active element, and must not be the last active one.
    pub fn unlink_after(&mut self, prev: usize) -> Unlinked {
        let saved = self.next[prev];
        debug_assert_ne!(saved, self.head(), "Cannot unlink the sentinel head");
        self.next[prev] = self.next[saved];
        Unlinked { prev, saved }
    }

    /// Puts back an element removed by [`unlink_after`](Self::unlink_after).
    ///
    /// Tokens must be restored in the reverse order they were obtained.
    pub fn restore(&mut self, token: Unlinked) {
        debug_assert_eq!(self.next[token.prev], self.next[token.saved]);
        self.next[token.prev] = token.saved;
    }

    /// Iterates over active elements, starting from the sentinel.
    pub fn iter(&self) -> impl '_ + Iterator<Item = usize> {
        let head = self.head();
        let mut current = head;
        std::iter::from_fn(move || {
            current = self.next[current];
            (current != head).then_some(current)
        })
    }

    /// Raw links, sentinel last.
    pub fn as_slice(&self) -> &[usize] {
        &self.next
    }
}

impl fmt::Debug for IndexList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

//! Lazy sequence helpers used across the graph and the IDE layer.
//!
//! Everything here is a thin adapter over [`Iterator`]: nothing is materialized
//! until the caller consumes the sequence, except [`SeqExt::group_by_key`] which
//! has to see every element before it can yield a group.

use std::hash::Hash;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashSet};

/// Extension methods for iterators.
pub trait SeqExt: Iterator + Sized {
    /// Yield each distinct element once, in first-seen order.
    fn distinct(self) -> Distinct<Self>
    where
        Self::Item: Clone + Eq + Hash,
    {
        Distinct {
            inner: self,
            seen: FxHashSet::default(),
        }
    }

    /// Group elements by key. Groups are ordered by the first occurrence of their key
    /// and elements keep their relative order inside a group.
    fn group_by_key<K, F>(self, mut key: F) -> IndexMap<K, Vec<Self::Item>, FxBuildHasher>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        let mut groups: IndexMap<K, Vec<Self::Item>, FxBuildHasher> = IndexMap::default();
        for item in self {
            groups.entry(key(&item)).or_default().push(item);
        }
        groups
    }
}

impl<I: Iterator> SeqExt for I {}

/// Iterator returned by [`SeqExt::distinct`].
pub struct Distinct<I: Iterator> {
    inner: I,
    seen: FxHashSet<I::Item>,
}

impl<I> Iterator for Distinct<I>
where
    I: Iterator,
    I::Item: Clone + Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.inner.next()?;
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
    }
}

/// Depth-first pre-order walk over a tree described by a child function.
///
/// Children are visited in the order the child function returns them.
pub fn traverse<T, F>(roots: impl IntoIterator<Item = T>, children: F) -> Traverse<T, F>
where
    F: FnMut(&T) -> Vec<T>,
{
    let mut stack: Vec<T> = roots.into_iter().collect();
    stack.reverse();
    Traverse { stack, children }
}

/// Iterator returned by [`traverse`].
pub struct Traverse<T, F> {
    stack: Vec<T>,
    children: F,
}

impl<T, F> Iterator for Traverse<T, F>
where
    F: FnMut(&T) -> Vec<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.stack.pop()?;
        let start = self.stack.len();
        self.stack.extend((self.children)(&node));
        self.stack[start..].reverse();
        Some(node)
    }
}

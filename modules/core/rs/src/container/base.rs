use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt::{self, Debug};
use std::ops::Index;

use crate::cursor::{BidirectionalCursor, Cursor};

use super::Container;

/// Bidirectional cursor over an indexable sequence (slices, arrays, `Vec`, `VecDeque`).
#[derive(Debug)]
pub struct IndexCursor<'a, S: ?Sized> {
    seq: &'a S,
    pos: usize,
}

impl<'a, S: ?Sized> IndexCursor<'a, S> {
    pub fn new(seq: &'a S, pos: usize) -> Self {
        Self { seq, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<S: ?Sized> Clone for IndexCursor<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for IndexCursor<'_, S> {}

impl<S: ?Sized> PartialEq for IndexCursor<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.seq, other.seq) && self.pos == other.pos
    }
}

impl<S: ?Sized> Eq for IndexCursor<'_, S> {}

impl<'a, S> Cursor for IndexCursor<'a, S>
where
    S: Index<usize> + ?Sized,
    S::Output: 'a,
{
    type Item = &'a S::Output;

    #[inline(always)]
    fn get(&self) -> Self::Item {
        &self.seq[self.pos]
    }

    #[inline(always)]
    fn advance(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }
}

impl<'a, S> BidirectionalCursor for IndexCursor<'a, S>
where
    S: Index<usize> + ?Sized,
    S::Output: 'a,
{
    #[inline(always)]
    fn retreat(&mut self) -> &mut Self {
        self.pos -= 1;
        self
    }
}

/// Forward-only cursor over a cloneable std iterator.
///
/// Positions are counted from the start of the sequence and only positions are compared, so two
/// cursors are comparable only if they came from the same container. The end cursor carries no
/// iterator at all.
#[derive(Clone)]
pub struct IterCursor<I> {
    iter: Option<I>,
    pos: usize,
}

impl<I> IterCursor<I> {
    pub fn begin(iter: I) -> Self {
        Self {
            iter: Some(iter),
            pos: 0,
        }
    }

    pub fn end(len: usize) -> Self {
        Self { iter: None, pos: len }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<I> Debug for IterCursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterCursor").field("pos", &self.pos).finish()
    }
}

impl<I> PartialEq for IterCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<I> Eq for IterCursor<I> {}

impl<I: Iterator + Clone> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn get(&self) -> Self::Item {
        match self.iter.clone().and_then(|mut iter| iter.next()) {
            Some(item) => item,
            None => panic!("Cursor at position {} is past the end of its sequence", self.pos),
        }
    }

    fn advance(&mut self) -> &mut Self {
        if let Some(iter) = self.iter.as_mut() {
            iter.next();
        }
        self.pos += 1;
        self
    }
}

macro_rules! impl_indexed_container {
    () => {};
    ([$($generics:tt)*] $Base:ty, $($tail:tt)*) => {
        impl<'a, $($generics)*> Container for &'a $Base {
            type Cursor = IndexCursor<'a, $Base>;

            fn begin(&self) -> Self::Cursor {
                IndexCursor::new(*self, 0)
            }

            fn end(&self) -> Self::Cursor {
                IndexCursor::new(*self, (**self).len())
            }
        }

        impl_indexed_container!($($tail)*);
    };
}

impl_indexed_container!(
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
);

macro_rules! impl_iterated_container {
    () => {};
    ([$($generics:tt)*] $Base:ty => $Iter:ty, $($tail:tt)*) => {
        impl<'a, $($generics)*> Container for &'a $Base {
            type Cursor = IterCursor<$Iter>;

            fn begin(&self) -> Self::Cursor {
                IterCursor::begin((*self).iter())
            }

            fn end(&self) -> Self::Cursor {
                IterCursor::end((**self).len())
            }
        }

        impl_iterated_container!($($tail)*);
    };
}

impl_iterated_container!(
    [T] LinkedList<T> => std::collections::linked_list::Iter<'a, T>,
    [T] BTreeSet<T> => std::collections::btree_set::Iter<'a, T>,
    [K, V] BTreeMap<K, V> => std::collections::btree_map::Iter<'a, K, V>,
    [T, S] HashSet<T, S> => std::collections::hash_set::Iter<'a, T>,
    [K, V, S] HashMap<K, V, S> => std::collections::hash_map::Iter<'a, K, V>,
);

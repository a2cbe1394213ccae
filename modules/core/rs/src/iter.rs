use std::iter::FusedIterator;

use derive_getters::Dissolve;

use crate::cursor::{BidirectionalCursor, Cursor};

/// A `[front, back)` cursor pair driven through the std iteration protocol.
///
/// Both ends move towards each other, so mixing `next` and `next_back` never yields an element
/// twice. Backward iteration is available only for bidirectional cursors.
#[derive(Clone, Debug, PartialEq, Eq, Dissolve)]
pub struct Iter<C> {
    front: C,
    back: C,
}

impl<C: Cursor> Iter<C> {
    pub fn new(front: C, back: C) -> Self {
        Self { front, back }
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get();
        self.front.advance();
        Some(item)
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for Iter<C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        Some(self.back.retreat().get())
    }
}

impl<C: Cursor> FusedIterator for Iter<C> {}

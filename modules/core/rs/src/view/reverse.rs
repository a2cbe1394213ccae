use derive_getters::Dissolve;

use crate::container::Container;
use crate::cursor::{BidirectionalCursor, Cursor};

/// The base traversed back to front.
///
/// Requires a bidirectional base; composing it over a forward-only one doesn't compile:
///
/// ```compile_fail
/// use std::collections::BTreeSet;
///
/// let set = BTreeSet::from([1, 2, 3]);
/// let _ = lazyview_core_rs::reverse(&set);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Dissolve)]
pub struct Reverse<C> {
    begin: C,
    end: C,
}

pub fn reverse<D>(base: D) -> Reverse<D::Cursor>
where
    D: Container<Cursor: BidirectionalCursor>,
{
    log::trace!("Constructing a reverse view");
    Reverse {
        begin: base.begin(),
        end: base.end(),
    }
}

impl<C: BidirectionalCursor> Container for Reverse<C> {
    type Cursor = ReverseCursor<C>;

    fn begin(&self) -> Self::Cursor {
        ReverseCursor {
            it: self.end.clone(),
        }
    }

    fn end(&self) -> Self::Cursor {
        ReverseCursor {
            it: self.begin.clone(),
        }
    }
}

/// Cursor of a [`Reverse`] view. Sits one position past the element it yields, so that the
/// reversed range stays half-open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReverseCursor<C> {
    it: C,
}

impl<C: BidirectionalCursor> Cursor for ReverseCursor<C> {
    type Item = C::Item;

    fn get(&self) -> Self::Item {
        let mut it = self.it.clone();
        it.retreat().get()
    }

    fn advance(&mut self) -> &mut Self {
        self.it.retreat();
        self
    }
}

impl<C: BidirectionalCursor> BidirectionalCursor for ReverseCursor<C> {
    fn retreat(&mut self) -> &mut Self {
        self.it.advance();
        self
    }
}

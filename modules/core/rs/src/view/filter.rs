use derive_getters::Dissolve;
use impl_tools::autoimpl;

use crate::container::Container;
use crate::cursor::{BidirectionalCursor, Cursor};

/// Elements of the base that satisfy a predicate, in base order.
#[autoimpl(Clone where C: trait, P: trait)]
#[autoimpl(Debug ignore self.pred where C: trait)]
#[derive(Dissolve)]
pub struct Filter<C, P> {
    begin: C,
    end: C,
    pred: P,
}

/// Lazily keep the elements of `base` for which `pred` holds.
///
/// The predicate is evaluated while the view is traversed, never at construction, and again on
/// every pass over the view.
pub fn filter<D, P>(base: D, pred: P) -> Filter<D::Cursor, P>
where
    D: Container,
    P: Fn(&<D::Cursor as Cursor>::Item) -> bool + Clone,
{
    log::trace!("Constructing a filter view");
    Filter {
        begin: base.begin(),
        end: base.end(),
        pred,
    }
}

impl<C, P> Filter<C, P> {
    pub fn pred(&self) -> &P {
        &self.pred
    }
}

impl<C, P> Container for Filter<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool + Clone,
{
    type Cursor = FilterCursor<C, P>;

    fn begin(&self) -> Self::Cursor {
        let mut it = self.begin.clone();
        while it != self.end && !(self.pred)(&it.get()) {
            it.advance();
        }
        FilterCursor {
            it,
            pred: self.pred.clone(),
            begin: self.begin.clone(),
            end: self.end.clone(),
        }
    }

    fn end(&self) -> Self::Cursor {
        FilterCursor {
            it: self.end.clone(),
            pred: self.pred.clone(),
            begin: self.begin.clone(),
            end: self.end.clone(),
        }
    }
}

/// Cursor of a [`Filter`] view. Carries the scan bounds of the view it came from; the bounds take
/// part in equality, the predicate doesn't.
#[autoimpl(Clone where C: trait, P: trait)]
#[autoimpl(Debug ignore self.pred where C: trait)]
pub struct FilterCursor<C, P> {
    it: C,
    pred: P,
    begin: C,
    end: C,
}

impl<C: PartialEq, P> PartialEq for FilterCursor<C, P> {
    fn eq(&self, other: &Self) -> bool {
        self.it == other.it && self.begin == other.begin && self.end == other.end
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool + Clone,
{
    type Item = C::Item;

    fn get(&self) -> Self::Item {
        self.it.get()
    }

    fn advance(&mut self) -> &mut Self {
        self.it.advance();
        while self.it != self.end && !(self.pred)(&self.it.get()) {
            self.it.advance();
        }
        self
    }
}

impl<C, P> BidirectionalCursor for FilterCursor<C, P>
where
    C: BidirectionalCursor,
    P: Fn(&C::Item) -> bool + Clone,
{
    fn retreat(&mut self) -> &mut Self {
        self.it.retreat();
        while self.it != self.begin && !(self.pred)(&self.it.get()) {
            self.it.retreat();
        }
        self
    }
}

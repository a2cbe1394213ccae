use derive_getters::Dissolve;
use impl_tools::autoimpl;

use crate::container::Container;
use crate::cursor::{BidirectionalCursor, Cursor};

/// The base with a mapping applied to every element.
///
/// The mapping runs on every dereference; results are not memoized.
#[autoimpl(Clone where C: trait, F: trait)]
#[autoimpl(Debug ignore self.map where C: trait)]
#[derive(Dissolve)]
pub struct Transform<C, F> {
    begin: C,
    end: C,
    map: F,
}

pub fn transform<D, F, R>(base: D, map: F) -> Transform<D::Cursor, F>
where
    D: Container,
    F: Fn(<D::Cursor as Cursor>::Item) -> R + Clone,
{
    log::trace!("Constructing a transform view");
    Transform {
        begin: base.begin(),
        end: base.end(),
        map,
    }
}

impl<C, F> Transform<C, F> {
    pub fn map(&self) -> &F {
        &self.map
    }
}

impl<C, F, R> Container for Transform<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> R + Clone,
{
    type Cursor = TransformCursor<C, F>;

    fn begin(&self) -> Self::Cursor {
        TransformCursor {
            it: self.begin.clone(),
            map: self.map.clone(),
        }
    }

    fn end(&self) -> Self::Cursor {
        TransformCursor {
            it: self.end.clone(),
            map: self.map.clone(),
        }
    }
}

#[autoimpl(Clone where C: trait, F: trait)]
#[autoimpl(Debug ignore self.map where C: trait)]
pub struct TransformCursor<C, F> {
    it: C,
    map: F,
}

impl<C: PartialEq, F> PartialEq for TransformCursor<C, F> {
    fn eq(&self, other: &Self) -> bool {
        self.it == other.it
    }
}

impl<C, F, R> Cursor for TransformCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> R + Clone,
{
    type Item = R;

    #[inline(always)]
    fn get(&self) -> R {
        (self.map)(self.it.get())
    }

    #[inline(always)]
    fn advance(&mut self) -> &mut Self {
        self.it.advance();
        self
    }
}

impl<C, F, R> BidirectionalCursor for TransformCursor<C, F>
where
    C: BidirectionalCursor,
    F: Fn(C::Item) -> R + Clone,
{
    #[inline(always)]
    fn retreat(&mut self) -> &mut Self {
        self.it.retreat();
        self
    }
}

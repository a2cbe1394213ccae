use crate::container::{AssociativeContainer, Container};
use crate::cursor::{BidirectionalCursor, Cursor};
use crate::view::{self, Drop, Filter, Keys, Reverse, Take, Transform, Values};

use super::args::{
    DropArgs, FilterArgs, KeysArgs, ReverseArgs, TakeArgs, TransformArgs, ValuesArgs,
};

/// Deferred construction of a view: the arguments of an adapter, waiting for the sequence it will
/// be applied to.
///
/// An adapter only implements `Adapter<D>` for the bases it can view, so applying it to an
/// unsuitable sequence fails to compile rather than at iteration time.
pub trait Adapter<D> {
    type Output;

    fn apply(self, base: D) -> Self::Output;
}

impl<D, P> Adapter<D> for FilterArgs<P>
where
    D: Container,
    P: Fn(&<D::Cursor as Cursor>::Item) -> bool + Clone,
{
    type Output = Filter<D::Cursor, P>;

    fn apply(self, base: D) -> Self::Output {
        view::filter(base, self.pred)
    }
}

impl<D: Container> Adapter<D> for TakeArgs {
    type Output = Take<D::Cursor>;

    fn apply(self, base: D) -> Self::Output {
        view::take(base, self.count)
    }
}

impl<D: Container> Adapter<D> for DropArgs {
    type Output = Drop<D::Cursor>;

    fn apply(self, base: D) -> Self::Output {
        view::drop(base, self.count)
    }
}

impl<D, F, R> Adapter<D> for TransformArgs<F>
where
    D: Container,
    F: Fn(<D::Cursor as Cursor>::Item) -> R + Clone,
{
    type Output = Transform<D::Cursor, F>;

    fn apply(self, base: D) -> Self::Output {
        view::transform(base, self.map)
    }
}

impl<D: AssociativeContainer> Adapter<D> for KeysArgs {
    type Output = Keys<D::Cursor>;

    fn apply(self, base: D) -> Self::Output {
        view::keys(base)
    }
}

impl<D: AssociativeContainer> Adapter<D> for ValuesArgs {
    type Output = Values<D::Cursor>;

    fn apply(self, base: D) -> Self::Output {
        view::values(base)
    }
}

impl<D> Adapter<D> for ReverseArgs
where
    D: Container<Cursor: BidirectionalCursor>,
{
    type Output = Reverse<D::Cursor>;

    fn apply(self, base: D) -> Self::Output {
        view::reverse(base)
    }
}

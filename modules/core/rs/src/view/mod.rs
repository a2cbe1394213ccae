pub use all::{all, All};
pub use drop::{drop, Drop};
pub use filter::{filter, Filter, FilterCursor};
pub use project::{keys, values, Keys, KeysCursor, Values, ValuesCursor};
pub use reverse::{reverse, Reverse, ReverseCursor};
pub use take::{take, Take};
pub use transform::{transform, Transform, TransformCursor};

use crate::container::Container;
use crate::cursor::Cursor;
use crate::iter::Iter;

mod all;
mod drop;
mod filter;
mod project;
mod reverse;
mod take;
mod transform;

// Views are containers by value and by reference, and iterate like std collections do.
macro_rules! impl_view {
    () => {};
    ([$($generics:ident),*] $View:ty, $($tail:tt)*) => {
        impl<'v, $($generics),*> Container for &'v $View
        where
            $View: Container,
        {
            type Cursor = <$View as Container>::Cursor;

            #[inline(always)]
            fn begin(&self) -> Self::Cursor {
                (**self).begin()
            }

            #[inline(always)]
            fn end(&self) -> Self::Cursor {
                (**self).end()
            }
        }

        impl<$($generics),*> IntoIterator for $View
        where
            $View: Container,
        {
            type Item = <<$View as Container>::Cursor as Cursor>::Item;
            type IntoIter = Iter<<$View as Container>::Cursor>;

            fn into_iter(self) -> Self::IntoIter {
                Container::iter(&self)
            }
        }

        impl<'v, $($generics),*> IntoIterator for &'v $View
        where
            $View: Container,
        {
            type Item = <<$View as Container>::Cursor as Cursor>::Item;
            type IntoIter = Iter<<$View as Container>::Cursor>;

            fn into_iter(self) -> Self::IntoIter {
                Container::iter(self)
            }
        }

        impl_view!($($tail)*);
    };
}

impl_view!(
    [C] All<C>,
    [C, P] Filter<C, P>,
    [C] Take<C>,
    [C] Drop<C>,
    [C, F] Transform<C, F>,
    [C] Keys<C>,
    [C] Values<C>,
    [C] Reverse<C>,
);

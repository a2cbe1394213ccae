use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::ops::BitOr;

use crate::view::{All, Drop, Filter, Keys, Reverse, Take, Transform, Values};

use super::adapter::Adapter;
use super::args::{
    DropArgs, FilterArgs, KeysArgs, ReverseArgs, TakeArgs, TransformArgs, ValuesArgs,
};

// `|` has to be spelled out per argument type: a blanket `impl<A: Adapter<..>> BitOr<A>` would
// leave `A` uncovered for the std collections on the left.
macro_rules! impl_pipe {
    () => {};
    (@args [$($generics:tt)*] $Lhs:ty, $Args:ty) => {
        impl<$($generics)*> BitOr<$Args> for $Lhs
        where
            $Args: Adapter<$Lhs>,
        {
            type Output = <$Args as Adapter<$Lhs>>::Output;

            #[inline(always)]
            fn bitor(self, args: $Args) -> Self::Output {
                args.apply(self)
            }
        }
    };
    ([$($generics:tt)*] $Lhs:ty, $($tail:tt)*) => {
        impl_pipe!(@args [$($generics)*] $Lhs, TakeArgs);
        impl_pipe!(@args [$($generics)*] $Lhs, DropArgs);
        impl_pipe!(@args [$($generics)*] $Lhs, KeysArgs);
        impl_pipe!(@args [$($generics)*] $Lhs, ValuesArgs);
        impl_pipe!(@args [$($generics)*] $Lhs, ReverseArgs);
        impl_pipe!(@args [$($generics)*, Pred] $Lhs, FilterArgs<Pred>);
        impl_pipe!(@args [$($generics)*, Map] $Lhs, TransformArgs<Map>);

        impl_pipe!($($tail)*);
    };
}

impl_pipe!(
    ['a, T] &'a [T],
    ['a, T, const N: usize] &'a [T; N],
    ['a, T] &'a Vec<T>,
    ['a, T] &'a VecDeque<T>,
    ['a, T] &'a LinkedList<T>,
    ['a, T] &'a BTreeSet<T>,
    ['a, K, V] &'a BTreeMap<K, V>,
    ['a, T, S] &'a HashSet<T, S>,
    ['a, K, V, S] &'a HashMap<K, V, S>,
    [C] All<C>,
    [C, P] Filter<C, P>,
    [C] Take<C>,
    [C] Drop<C>,
    [C, F] Transform<C, F>,
    [C] Keys<C>,
    [C] Values<C>,
    [C] Reverse<C>,
    ['v, C] &'v All<C>,
    ['v, C, P] &'v Filter<C, P>,
    ['v, C] &'v Take<C>,
    ['v, C] &'v Drop<C>,
    ['v, C, F] &'v Transform<C, F>,
    ['v, C] &'v Keys<C>,
    ['v, C] &'v Values<C>,
    ['v, C] &'v Reverse<C>,
);

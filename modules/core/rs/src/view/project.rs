use derive_getters::Dissolve;

use crate::container::{AssociativeContainer, Container};
use crate::cursor::{BidirectionalCursor, Cursor, Pair};

macro_rules! define_projection {
    ($(#[$docs:meta])* $View:ident, $ViewCursor:ident, $factory:ident, $Component:ident, $project:ident) => {
        $(#[$docs])*
        #[derive(Clone, Debug, PartialEq, Eq, Dissolve)]
        pub struct $View<C> {
            begin: C,
            end: C,
        }

        pub fn $factory<D: AssociativeContainer>(base: D) -> $View<D::Cursor> {
            log::trace!("Constructing a {} view", stringify!($factory));
            $View {
                begin: base.begin(),
                end: base.end(),
            }
        }

        impl<C> Container for $View<C>
        where
            C: Cursor<Item: Pair>,
        {
            type Cursor = $ViewCursor<C>;

            fn begin(&self) -> Self::Cursor {
                $ViewCursor {
                    it: self.begin.clone(),
                }
            }

            fn end(&self) -> Self::Cursor {
                $ViewCursor {
                    it: self.end.clone(),
                }
            }
        }

        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $ViewCursor<C> {
            it: C,
        }

        impl<C> Cursor for $ViewCursor<C>
        where
            C: Cursor<Item: Pair>,
        {
            type Item = <C::Item as Pair>::$Component;

            #[inline(always)]
            fn get(&self) -> Self::Item {
                self.it.get().$project()
            }

            #[inline(always)]
            fn advance(&mut self) -> &mut Self {
                self.it.advance();
                self
            }
        }

        impl<C> BidirectionalCursor for $ViewCursor<C>
        where
            C: BidirectionalCursor<Item: Pair>,
        {
            #[inline(always)]
            fn retreat(&mut self) -> &mut Self {
                self.it.retreat();
                self
            }
        }
    };
}

define_projection!(
    /// The first component of every key/value element of the base.
    Keys,
    KeysCursor,
    keys,
    First,
    into_first
);

define_projection!(
    /// The second component of every key/value element of the base.
    Values,
    ValuesCursor,
    values,
    Second,
    into_second
);

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_vec_of_pairs() {
        let pairs = vec![(1, "one"), (2, "two"), (3, "three")];
        assert_eq!(keys(&pairs).iter().copied().collect_vec(), [1, 2, 3]);
        assert_eq!(
            values(&pairs).iter().copied().collect_vec(),
            ["one", "two", "three"]
        );
        assert_eq!(
            values(&pairs).iter().rev().copied().collect_vec(),
            ["three", "two", "one"]
        );
    }

    #[test]
    fn test_map() {
        let map = BTreeMap::from([("b", 2), ("a", 1)]);
        assert_eq!(keys(&map).iter().copied().collect_vec(), ["a", "b"]);
        assert_eq!(values(&map).iter().copied().collect_vec(), [1, 2]);
    }

    #[test]
    fn test_keys_and_values_reconstruct_pairs() {
        let map = HashMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
        let (map_keys, map_values) = (keys(&map), values(&map));
        assert_eq!(map_keys.len(), map.len());
        assert_eq!(map_values.len(), map.len());

        for (key, value) in map_keys.iter().zip_eq(map_values.iter()) {
            assert_eq!(map.get(key), Some(value));
        }
    }

    #[test]
    fn test_empty() {
        let pairs: Vec<(i32, i32)> = Vec::new();
        assert!(keys(&pairs).is_empty());
        assert!(values(&pairs).is_empty());
    }
}

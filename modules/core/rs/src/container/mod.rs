pub use base::{IndexCursor, IterCursor};

use eyre::{ensure, Result};

use crate::cursor::{Cursor, Pair};
use crate::iter::Iter;
use crate::pipe::Adapter;

mod base;

/// A sequence that can be viewed: anything that hands out a `[begin, end)` pair of cursors.
///
/// Implemented for shared references to std collections and for every view (by value and by
/// reference). Views keep the cursors they were built from, so a view is only as long-lived as the
/// borrow of the collection underneath it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a viewable container",
    label = "expected a reference to a collection or a view",
    note = "std collections are viewed through shared references, e.g. `&vec`"
)]
pub trait Container {
    type Cursor: Cursor;

    fn begin(&self) -> Self::Cursor;

    fn end(&self) -> Self::Cursor;

    /// Iterate over the `[begin, end)` range with the std iteration protocol.
    fn iter(&self) -> Iter<Self::Cursor> {
        Iter::new(self.begin(), self.end())
    }

    /// Number of elements, counted by walking the range.
    fn len(&self) -> usize {
        let (mut cursor, end) = (self.begin(), self.end());
        let mut len = 0;
        while cursor != end {
            cursor.advance();
            len += 1;
        }
        len
    }

    fn is_empty(&self) -> bool {
        self.begin() == self.end()
    }

    /// Checked positional access. Walks `index` steps from `begin` and fails instead of stepping
    /// past `end`.
    fn at(&self, index: usize) -> Result<<Self::Cursor as Cursor>::Item> {
        let (mut cursor, end) = (self.begin(), self.end());
        let steps = cursor.advance_up_to(index, &end);
        ensure!(
            steps == index && cursor != end,
            "Index {index} is out of range for a view of length {steps}"
        );
        Ok(cursor.get())
    }

    /// Apply a deferred adapter, the method-chaining counterpart of the `|` operator.
    fn pipe<A: Adapter<Self>>(self, args: A) -> A::Output
    where
        Self: Sized,
    {
        args.apply(self)
    }
}

/// A container whose elements are key/value pairs.
pub trait AssociativeContainer: Container<Cursor: Cursor<Item: Pair>> {}

impl<D> AssociativeContainer for D where D: Container<Cursor: Cursor<Item: Pair>> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure<D: Container>(base: D) -> (usize, bool) {
        (base.len(), base.is_empty())
    }

    #[test]
    fn test_len_and_is_empty() {
        let data = vec![1, 2, 3];
        assert_eq!(measure(&data), (3, false));

        let set = std::collections::BTreeSet::from(["x"]);
        assert_eq!(measure(&set), (1, false));

        let empty: Vec<i32> = Vec::new();
        assert_eq!(measure(&empty), (0, true));
    }

    #[test]
    fn test_checked_access() -> Result<()> {
        let data = [10, 20, 30];
        let view = &data;
        assert_eq!(*view.at(0)?, 10);
        assert_eq!(*view.at(2)?, 30);

        let err = view.at(3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Index 3 is out of range for a view of length 3"
        );
        assert!(view.at(100).is_err());
        Ok(())
    }

    #[test]
    fn test_associative_capability() {
        fn assert_associative<D: AssociativeContainer>(_: D) {}

        let pairs = vec![(1, 'a'), (2, 'b')];
        assert_associative(&pairs);

        let map = std::collections::BTreeMap::from([(1, 'a')]);
        assert_associative(&map);
    }
}

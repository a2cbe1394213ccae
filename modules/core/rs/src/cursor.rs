/// A position inside a sequence.
///
/// Cursors come in `[begin, end)` pairs handed out by a [`Container`](crate::Container). A cursor
/// equal to its `end` must not be dereferenced; stepping a cursor outside of its pair is a contract
/// violation that is not checked on every step. Dereferencing such a cursor panics, it never reads
/// out of bounds.
pub trait Cursor: Clone + PartialEq {
    type Item;

    /// Element at the current position.
    fn get(&self) -> Self::Item;

    /// Step one position forward (pre-increment).
    fn advance(&mut self) -> &mut Self;

    /// Step one position forward, returning the cursor as it was before the step (post-increment).
    fn fetch_advance(&mut self) -> Self {
        let copy = self.clone();
        self.advance();
        copy
    }

    /// Step forward at most `steps` times, stopping early at `end`. Returns the number of steps
    /// actually taken.
    fn advance_up_to(&mut self, steps: usize, end: &Self) -> usize {
        let mut taken = 0;
        while taken < steps && self != end {
            self.advance();
            taken += 1;
        }
        taken
    }
}

/// A cursor that can also step backwards.
#[diagnostic::on_unimplemented(
    message = "`{Self}` can't step backwards",
    label = "a bidirectional cursor is required here",
    note = "forward-only sequences (maps, sets, lists) can't be reversed"
)]
pub trait BidirectionalCursor: Cursor {
    /// Step one position backward (pre-decrement).
    fn retreat(&mut self) -> &mut Self;

    /// Step one position backward, returning the cursor as it was before the step (post-decrement).
    fn fetch_retreat(&mut self) -> Self {
        let copy = self.clone();
        self.retreat();
        copy
    }
}

/// Two-component key/value element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a key/value pair",
    label = "elements of an associative container must be pairs"
)]
pub trait Pair {
    type First;
    type Second;

    fn into_first(self) -> Self::First;
    fn into_second(self) -> Self::Second;
}

impl<A, B> Pair for (A, B) {
    type First = A;
    type Second = B;

    #[inline(always)]
    fn into_first(self) -> A {
        self.0
    }

    #[inline(always)]
    fn into_second(self) -> B {
        self.1
    }
}

impl<'a, A, B> Pair for &'a (A, B) {
    type First = &'a A;
    type Second = &'a B;

    #[inline(always)]
    fn into_first(self) -> &'a A {
        &self.0
    }

    #[inline(always)]
    fn into_second(self) -> &'a B {
        &self.1
    }
}

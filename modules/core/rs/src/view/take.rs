use derive_getters::{Dissolve, Getters};

use crate::container::Container;
use crate::cursor::Cursor;

/// The first `count` elements of the base, or all of them if the base is shorter.
#[derive(Clone, Debug, PartialEq, Eq, Getters, Dissolve)]
pub struct Take<C> {
    #[getter(skip)]
    begin: C,
    #[getter(skip)]
    end: C,
    count: usize,
}

pub fn take<D: Container>(base: D, count: usize) -> Take<D::Cursor> {
    log::trace!("Constructing a take view with count {count}");
    Take {
        begin: base.begin(),
        end: base.end(),
        count,
    }
}

impl<C: Cursor> Container for Take<C> {
    type Cursor = C;

    fn begin(&self) -> C {
        self.begin.clone()
    }

    fn end(&self) -> C {
        let mut it = self.begin.clone();
        it.advance_up_to(self.count, &self.end);
        it
    }
}

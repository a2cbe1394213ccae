use derive_getters::{Dissolve, Getters};

use crate::container::Container;
use crate::cursor::Cursor;

/// The elements of the base that follow its first `count` ones.
#[derive(Clone, Debug, PartialEq, Eq, Getters, Dissolve)]
pub struct Drop<C> {
    #[getter(skip)]
    begin: C,
    #[getter(skip)]
    end: C,
    count: usize,
}

pub fn drop<D: Container>(base: D, count: usize) -> Drop<D::Cursor> {
    log::trace!("Constructing a drop view with count {count}");
    Drop {
        begin: base.begin(),
        end: base.end(),
        count,
    }
}

impl<C: Cursor> Container for Drop<C> {
    type Cursor = C;

    fn begin(&self) -> C {
        let mut it = self.begin.clone();
        it.advance_up_to(self.count, &self.end);
        it
    }

    fn end(&self) -> C {
        self.end.clone()
    }
}

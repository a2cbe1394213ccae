use derive_getters::Dissolve;

use crate::container::Container;
use crate::cursor::Cursor;

/// The whole base, unchanged. Lets any [`Container`] enter a `|` pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Dissolve)]
pub struct All<C> {
    begin: C,
    end: C,
}

pub fn all<D: Container>(base: D) -> All<D::Cursor> {
    log::trace!("Constructing an identity view");
    All {
        begin: base.begin(),
        end: base.end(),
    }
}

impl<C: Cursor> Container for All<C> {
    type Cursor = C;

    fn begin(&self) -> C {
        self.begin.clone()
    }

    fn end(&self) -> C {
        self.end.clone()
    }
}

//! Lazy, non-owning views over sequences.
//!
//! A view wraps the `[begin, end)` cursors of a base sequence and changes how they move or what
//! they yield. Views never copy the base, and they are containers themselves, so they nest:
//!
//! ```
//! use lazyview_core_rs::{pipe, Container};
//!
//! let data = vec![3, 2, 4];
//! let view = &data
//!     | pipe::take(3)
//!     | pipe::transform(|x: &i32| (*x, *x))
//!     | pipe::reverse();
//!
//! for (first, second) in &view {
//!     println!("{first} {second}");
//! }
//! assert_eq!(view.iter().collect::<Vec<_>>(), [(4, 4), (2, 2), (3, 3)]);
//! ```
//!
//! Keys and values need a sequence of pairs:
//!
//! ```compile_fail
//! let data = vec![1, 2, 3];
//! let _ = lazyview_core_rs::keys(&data);
//! ```

pub use container::{AssociativeContainer, Container, IndexCursor, IterCursor};
pub use cursor::{BidirectionalCursor, Cursor, Pair};
pub use iter::Iter;
pub use view::{
    all, drop, filter, keys, reverse, take, transform, values, All, Drop, Filter, FilterCursor,
    Keys, KeysCursor, Reverse, ReverseCursor, Take, Transform, TransformCursor, Values,
    ValuesCursor,
};

mod container;
mod cursor;
mod iter;
pub mod pipe;
pub mod view;

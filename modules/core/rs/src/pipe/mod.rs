//! Left-to-right view composition.
//!
//! The functions here capture an adapter's arguments without knowing the sequence yet; `|` (or
//! [`Container::pipe`](crate::Container::pipe)) then applies them to the sequence on the left:
//!
//! ```
//! use lazyview_core_rs::{pipe, Container};
//!
//! let data = vec![1, 2, 3, 4, 5, 6];
//! let view = &data
//!     | pipe::filter(|x: &&i32| **x % 2 == 0)
//!     | pipe::transform(|x: &i32| x * 10)
//!     | pipe::reverse();
//! assert_eq!(view.iter().collect::<Vec<_>>(), [60, 40, 20]);
//! ```
//!
//! Each stage consumes the view on its left, so nothing is materialized between stages.

pub use adapter::Adapter;
pub use args::{DropArgs, FilterArgs, KeysArgs, ReverseArgs, TakeArgs, TransformArgs, ValuesArgs};

mod adapter;
mod args;
mod ops;

pub fn filter<P>(pred: P) -> FilterArgs<P> {
    FilterArgs::new(pred)
}

pub fn take(count: usize) -> TakeArgs {
    TakeArgs::new(count)
}

pub fn drop(count: usize) -> DropArgs {
    DropArgs::new(count)
}

pub fn transform<F>(map: F) -> TransformArgs<F> {
    TransformArgs::new(map)
}

pub fn keys() -> KeysArgs {
    KeysArgs
}

pub fn values() -> ValuesArgs {
    ValuesArgs
}

pub fn reverse() -> ReverseArgs {
    ReverseArgs
}

use derive_more::Constructor;
use impl_tools::autoimpl;

#[autoimpl(Clone, Copy where P: trait)]
#[autoimpl(Debug ignore self.pred)]
#[derive(Constructor)]
pub struct FilterArgs<P> {
    pub(crate) pred: P,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Constructor)]
pub struct TakeArgs {
    pub(crate) count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Constructor)]
pub struct DropArgs {
    pub(crate) count: usize,
}

#[autoimpl(Clone, Copy where F: trait)]
#[autoimpl(Debug ignore self.map)]
#[derive(Constructor)]
pub struct TransformArgs<F> {
    pub(crate) map: F,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeysArgs;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValuesArgs;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReverseArgs;

impl TakeArgs {
    pub fn count(&self) -> usize {
        self.count
    }
}

impl DropArgs {
    pub fn count(&self) -> usize {
        self.count
    }
}

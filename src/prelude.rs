//! Crate prelude.

// The actual prelude.
pub use crate::{keys::Keys, set::KeySet, Key};

// Convenient imports within the crate.
pub(crate) use crate::KeyVec;
pub(crate) use derive_more::IntoIterator;
pub(crate) use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
    hash::Hash,
};

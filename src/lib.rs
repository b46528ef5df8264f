//! # Key sets
//!
//! This crate models sets of opaque, comparable keys drawn from an unbounded
//! universe, without ever materializing that universe. A [`KeySet`] is always
//! one of four representations: every key, no key, exactly some finite
//! collection of keys, or every key except a finite collection. The algebra
//! is closed: [`remove`](KeySet::remove), [`intersect`](KeySet::intersect),
//! and [`invert`](KeySet::invert) map these four representations back into
//! themselves, so authorization and filtering rules of the form "everything",
//! "nothing", "only these", or "everything but these" compose freely.
//!
//! ```
//! use keyset::prelude::*;
//!
//! let granted: KeySet<&str> = KeySet::all();
//! let effective = granted.remove(&KeySet::some(["billing.write"]));
//!
//! assert!(effective.contains(&"audit.read"));
//! assert!(!effective.contains(&"billing.write"));
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod keys;
pub mod prelude;
pub mod set;

use prelude::*;

/// Small vector backing a key collection.
type KeyVec<K> = smallvec::SmallVec<[K; 4]>;

/// The contract a key type must uphold: keys are opaque values that can be
/// cloned, compared under a total order, hashed, and rendered in diagnostics.
/// The algebra never interprets a key beyond these operations.
///
/// The trait is blanket-implemented, so any conforming type is a key.
pub trait Key: Clone + Debug + Ord + Hash {}

impl<K: Clone + Debug + Ord + Hash> Key for K {}

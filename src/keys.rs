//! Sorted key collections [`Keys`].

use crate::prelude::*;

/// The finite collection of keys behind [`KeySet::Some`] and
/// [`KeySet::AllExceptSome`].
///
/// ## Invariants
///
/// The backing vector is always sorted, holds no duplicate keys, and is never
/// empty. The sole constructor [`Keys::new`] and every operation uphold this,
/// which is what makes each [`KeySet`] canonical by construction: the
/// degenerate forms "some of nothing" and "all except nothing" cannot be
/// represented at all.
///
/// Keeping the keys sorted also makes the derived comparison lexicographic
/// over the key sequence, which is the tie-breaking order between two sets of
/// the same variant.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, IntoIterator)]
pub struct Keys<K>(#[into_iterator(owned, ref)] KeyVec<K>);

// -------------------- Basic traits -------------------- //

/// Writes the keys in roster notation, e.g. `{"a", "b"}`.
impl<K: Debug> Debug for Keys<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.0.iter();
        if let Some(key) = iter.next() {
            write!(f, "{key:?}")?;
        }
        for key in iter {
            write!(f, ", {key:?}")?;
        }
        f.write_char('}')
    }
}

/// Displays the keys in roster notation, e.g. `{a, b}`.
impl<K: Display> Display for Keys<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.0.iter();
        if let Some(key) = iter.next() {
            write!(f, "{key}")?;
        }
        for key in iter {
            write!(f, ", {key}")?;
        }
        f.write_char('}')
    }
}

// -------------------- Construction -------------------- //

impl<K: Key> Keys<K> {
    /// Sorts and deduplicates the given keys. Duplicates collapse silently.
    ///
    /// Returns `None` when no key remains: a [`Keys`] value never exists
    /// without at least one key.
    pub fn new<I: IntoIterator<Item = K>>(keys: I) -> Option<Self> {
        let mut vec: KeyVec<K> = keys.into_iter().collect();
        vec.sort_unstable();
        vec.dedup();
        Self::from_sorted(vec)
    }

    /// Wraps a vector that is already sorted and deduplicated, or `None` if
    /// it is empty.
    fn from_sorted(vec: KeyVec<K>) -> Option<Self> {
        if vec.is_empty() {
            None
        } else {
            Some(Self(vec))
        }
    }

    // -------------------- Basic methods -------------------- //

    /// The keys as a sorted slice.
    pub fn as_slice(&self) -> &[K] {
        &self.0
    }

    /// Number of keys, at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the keys in order.
    pub fn iter(&self) -> std::slice::Iter<K> {
        self.0.iter()
    }

    /// Membership k ∈ x.
    pub fn contains(&self, key: &K) -> bool {
        self.0.binary_search(key).is_ok()
    }

    // -------------------- Operations -------------------- //

    /// Union x ∪ y.
    ///
    /// Merges two sorted sequences; never empty.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut out = KeyVec::with_capacity(self.len() + other.len());
        let (mut lhs, mut rhs) = (self.as_slice(), other.as_slice());

        while let (Some(a), Some(b)) = (lhs.first(), rhs.first()) {
            match a.cmp(b) {
                Ordering::Less => {
                    out.push(a.clone());
                    lhs = &lhs[1..];
                }
                Ordering::Equal => {
                    out.push(a.clone());
                    lhs = &lhs[1..];
                    rhs = &rhs[1..];
                }
                Ordering::Greater => {
                    out.push(b.clone());
                    rhs = &rhs[1..];
                }
            }
        }

        out.extend(lhs.iter().cloned());
        out.extend(rhs.iter().cloned());
        Self(out)
    }

    /// Difference x ∖ y, or `None` when no key remains.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Option<Self> {
        let mut out = KeyVec::new();
        let (mut lhs, mut rhs) = (self.as_slice(), other.as_slice());

        while let (Some(a), Some(b)) = (lhs.first(), rhs.first()) {
            match a.cmp(b) {
                Ordering::Less => {
                    out.push(a.clone());
                    lhs = &lhs[1..];
                }
                Ordering::Equal => {
                    lhs = &lhs[1..];
                    rhs = &rhs[1..];
                }
                Ordering::Greater => rhs = &rhs[1..],
            }
        }

        out.extend(lhs.iter().cloned());
        Self::from_sorted(out)
    }

    /// Intersection x ∩ y, or `None` when the collections are disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let mut out = KeyVec::new();
        let (mut lhs, mut rhs) = (self.as_slice(), other.as_slice());

        while let (Some(a), Some(b)) = (lhs.first(), rhs.first()) {
            match a.cmp(b) {
                Ordering::Less => lhs = &lhs[1..],
                Ordering::Equal => {
                    out.push(a.clone());
                    lhs = &lhs[1..];
                    rhs = &rhs[1..];
                }
                Ordering::Greater => rhs = &rhs[1..],
            }
        }

        Self::from_sorted(out)
    }
}

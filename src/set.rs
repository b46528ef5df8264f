//! Key sets [`KeySet`].

use crate::prelude::*;

/// A set of keys drawn from an unbounded universe 𝒰, kept in one of four
/// canonical representations.
///
/// Rather than enumerating keys, a [`KeySet`] is always "nothing", "exactly
/// these", "everything except these", or "everything". The algebra is closed:
/// [`remove`](Self::remove), [`intersect`](Self::intersect), and
/// [`invert`](Self::invert) map any operands back into the same four
/// representations, so no operation ever needs to materialize 𝒰.
///
/// Values are immutable: every operation returns a new, independent set.
///
/// ## Invariants
///
/// [`Some`](Self::Some) and [`AllExceptSome`](Self::AllExceptSome) always
/// hold at least one key. [`Keys`] cannot be built empty, so the degenerate
/// forms "some of nothing" and "all except nothing" are unrepresentable.
/// Build sets through the factories [`some`](Self::some) and
/// [`all_except_some`](Self::all_except_some), which collapse empty input to
/// [`None`](Self::None) and [`All`](Self::All) respectively.
///
/// The variants are declared in comparison rank order, so the derived total
/// order sorts `None < Some < AllExceptSome < All`; two sets of the same
/// payload-bearing variant compare lexicographically over their sorted keys.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeySet<K> {
    /// No key at all, Ø.
    None,
    /// Exactly the keys held.
    Some(Keys<K>),
    /// Every key in the universe except the ones held.
    AllExceptSome(Keys<K>),
    /// Every key in the universe, 𝒰.
    All,
}

// -------------------- Basic traits -------------------- //

/// The default key set is Ø.
impl<K> Default for KeySet<K> {
    fn default() -> Self {
        Self::None
    }
}

/// Collects keys into [`KeySet::some`].
impl<K: Key> FromIterator<K> for KeySet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::some(iter)
    }
}

/// Displays a key set in roster notation: Ø as `{}`, the universe as `𝒰`,
/// an exception list as `𝒰 ∖ {…}`.
impl<K: Display> Display for KeySet<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::None => f.write_str("{}"),
            Self::Some(keys) => write!(f, "{keys}"),
            Self::AllExceptSome(keys) => write!(f, "𝒰 ∖ {keys}"),
            Self::All => f.write_str("𝒰"),
        }
    }
}

// -------------------- Factories -------------------- //

impl<K: Key> KeySet<K> {
    /// The set of every key, 𝒰.
    pub const fn all() -> Self {
        Self::All
    }

    /// The empty set Ø.
    pub const fn none() -> Self {
        Self::None
    }

    /// The set of exactly the given keys.
    ///
    /// Duplicates collapse silently; an empty collection collapses to
    /// [`None`](Self::None).
    pub fn some<I: IntoIterator<Item = K>>(keys: I) -> Self {
        Self::some_or_none(Keys::new(keys))
    }

    /// The set of every key except the given ones.
    ///
    /// Duplicates collapse silently; an empty collection collapses to
    /// [`All`](Self::All).
    pub fn all_except_some<I: IntoIterator<Item = K>>(keys: I) -> Self {
        Keys::new(keys).map_or(Self::All, Self::AllExceptSome)
    }

    /// Wraps keys as [`Some`](Self::Some), collapsing Ø to
    /// [`None`](Self::None).
    fn some_or_none(keys: Option<Keys<K>>) -> Self {
        keys.map_or(Self::None, Self::Some)
    }

    // -------------------- Operations -------------------- //

    /// Set difference x ∖ y: the keys of `self` that `other` does not have.
    ///
    /// Removing an [`AllExceptSome`](Self::AllExceptSome) set is usually a
    /// sign the caller meant [`intersect`](Self::intersect); the result is
    /// still computed, and an advisory line goes to the [`log`] sink.
    #[must_use]
    pub fn remove(&self, other: &Self) -> Self {
        if let Self::AllExceptSome(other_keys) = other {
            log::warn!(
                "removing an all-except-some key set is probably a mistake. \
                 this: {}, removing keys: {other_keys:?}",
                self.variant()
            );
        }

        match (self, other) {
            // Removing everything leaves nothing.
            (_, Self::All) => Self::None,
            // Removing nothing changes nothing.
            (this, Self::None) => this.clone(),
            // Nothing stays nothing.
            (Self::None, _) => Self::None,
            (Self::All, Self::Some(other_keys)) => Self::AllExceptSome(other_keys.clone()),
            // Removing all but the excepted keys keeps exactly those.
            (Self::All, Self::AllExceptSome(other_keys)) => Self::Some(other_keys.clone()),
            (Self::Some(keys), Self::Some(other_keys)) => {
                Self::some_or_none(keys.difference(other_keys))
            }
            // Only the keys the removal excepted survive.
            (Self::Some(keys), Self::AllExceptSome(other_keys)) => {
                Self::some_or_none(keys.intersection(other_keys))
            }
            (Self::AllExceptSome(keys), Self::Some(other_keys)) => {
                Self::AllExceptSome(keys.union(other_keys))
            }
            // What `other` excepted, minus what `self` was already excepting.
            (Self::AllExceptSome(keys), Self::AllExceptSome(other_keys)) => {
                Self::some_or_none(other_keys.difference(keys))
            }
        }
    }

    /// Set intersection x ∩ y.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        match (self, other) {
            // Ø is absorbing.
            (Self::None, _) | (_, Self::None) => Self::None,
            // 𝒰 is the identity.
            (this, Self::All) => this.clone(),
            (Self::All, other) => other.clone(),
            (Self::Some(keys), Self::Some(other_keys)) => {
                Self::some_or_none(keys.intersection(other_keys))
            }
            (Self::Some(keys), Self::AllExceptSome(other_keys)) => {
                Self::some_or_none(keys.difference(other_keys))
            }
            (Self::AllExceptSome(keys), Self::Some(other_keys)) => {
                Self::some_or_none(other_keys.difference(keys))
            }
            // Both exception lists apply.
            (Self::AllExceptSome(keys), Self::AllExceptSome(other_keys)) => {
                Self::AllExceptSome(keys.union(other_keys))
            }
        }
    }

    /// Set union x ∪ y.
    ///
    /// The algebra is closed under the core operations, so union comes for
    /// free by De Morgan: `(xᶜ ∩ yᶜ)ᶜ`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.invert().intersect(&other.invert()).invert()
    }

    /// Complement xᶜ within the universe.
    ///
    /// An involution: inverting twice gives the starting set back.
    #[must_use]
    pub fn invert(&self) -> Self {
        match self {
            Self::None => Self::All,
            Self::Some(keys) => Self::AllExceptSome(keys.clone()),
            Self::AllExceptSome(keys) => Self::Some(keys.clone()),
            Self::All => Self::None,
        }
    }

    // -------------------- Queries -------------------- //

    /// Membership k ∈ x, without enumerating the universe.
    pub fn contains(&self, key: &K) -> bool {
        match self {
            Self::None => false,
            Self::Some(keys) => keys.contains(key),
            Self::AllExceptSome(keys) => !keys.contains(key),
            Self::All => true,
        }
    }

    /// Whether this set is the whole universe.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether this set is empty.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The keys a [`Some`](Self::Some) or [`AllExceptSome`](Self::AllExceptSome)
    /// set holds; `None` for the payload-free variants.
    pub fn keys(&self) -> Option<&Keys<K>> {
        match self {
            Self::Some(keys) | Self::AllExceptSome(keys) => Some(keys),
            Self::None | Self::All => None,
        }
    }

    /// Short variant name, used in diagnostics.
    fn variant(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Some(_) => "some",
            Self::AllExceptSome(_) => "all-except-some",
            Self::All => "all",
        }
    }
}

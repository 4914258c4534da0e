//! Common ID Types
//!
//! Type-safe sequential ID wrappers for domain entities.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::num::NonZeroU64;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generic typed ID wrapper around a positive integer.
///
/// IDs are issued by whichever store owns the entity, starting at 1.
/// On the wire they are plain JSON numbers.
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type QuoteId = Id<markers::Quote>;
///
/// let id = QuoteId::from_signed(42).unwrap();
/// assert_eq!(id.get(), 42);
/// assert!(QuoteId::from_signed(0).is_none());
/// assert!(QuoteId::from_signed(-3).is_none());
/// ```
pub struct Id<T> {
    value: NonZeroU64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// The first ID a store hands out
    pub const FIRST: Self = Self {
        value: NonZeroU64::MIN,
        _marker: PhantomData,
    };

    /// Create from a raw value; `None` for zero
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(|value| Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Create from a signed value, as parsed from a URL; `None` unless positive
    pub fn from_signed(value: i64) -> Option<Self> {
        u64::try_from(value).ok().and_then(Self::new)
    }

    pub fn get(&self) -> u64 {
        self.value.get()
    }

    /// The ID following this one; `None` once `u64::MAX` has been issued
    pub fn next(&self) -> Option<Self> {
        self.value.checked_add(1).map(|value| Self {
            value,
            _marker: PhantomData,
        })
    }
}

// Manual impls so that `T` (a marker) needs no bounds.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.get())
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = NonZeroU64::deserialize(deserializer)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Quote IDs
    pub struct Quote;
}

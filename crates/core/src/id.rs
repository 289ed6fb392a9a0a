//! Strongly-typed sequential identifiers used across the domain.

use core::marker::PhantomData;
use core::num::NonZeroU64;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a backing file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(NonZeroU64);

/// Identifier of a zone (a named section of a file).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(NonZeroU64);

/// Identifier of a host record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(NonZeroU64);

/// Identifiers issued by an [`IdAllocator`].
///
/// The zero value is reserved for "unassigned" and is unrepresentable.
pub trait SequentialId: Copy + Eq + core::hash::Hash + core::fmt::Debug {
    fn from_raw(raw: NonZeroU64) -> Self;

    fn get(self) -> u64;
}

macro_rules! impl_sequential_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Build an identifier from its numeric value.
            ///
            /// Returns `None` for zero, which never names an indexed entity.
            pub fn new(raw: u64) -> Option<Self> {
                NonZeroU64::new(raw).map(Self)
            }
        }

        impl SequentialId for $t {
            fn from_raw(raw: NonZeroU64) -> Self {
                Self(raw)
            }

            fn get(self) -> u64 {
                self.0.get()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0.get()
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = u64::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Self::new(raw).ok_or_else(|| {
                    DomainError::invalid_id(format!("{}: zero is unassigned", $name))
                })
            }
        }
    };
}

impl_sequential_newtype!(FileId, "FileId");
impl_sequential_newtype!(ZoneId, "ZoneId");
impl_sequential_newtype!(RecordId, "RecordId");

/// Issues strictly increasing identifiers for one entity type.
///
/// Starts at 1 for every fresh allocator and never hands out a value twice,
/// even after the entity that held it has been removed.
#[derive(Debug)]
pub struct IdAllocator<T> {
    last: u64,
    _marker: PhantomData<T>,
}

impl<T: SequentialId> IdAllocator<T> {
    pub fn new() -> Self {
        Self {
            last: 0,
            _marker: PhantomData,
        }
    }

    /// Advance the counter and return the next identifier.
    pub fn next(&mut self) -> T {
        self.last += 1;
        match NonZeroU64::new(self.last) {
            Some(raw) => T::from_raw(raw),
            // Only reachable after u64::MAX allocations.
            None => unreachable!("identifier space exhausted"),
        }
    }
}

impl<T: SequentialId> Default for IdAllocator<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_is_not_an_identifier() {
        assert!(FileId::new(0).is_none());
        assert!("0".parse::<ZoneId>().is_err());
        assert_eq!("7".parse::<RecordId>().unwrap().get(), 7);
    }

    #[test]
    fn parse_failure_names_the_type() {
        let err = "abc".parse::<FileId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(msg) if msg.starts_with("FileId")));
    }

    #[test]
    fn allocator_starts_at_one() {
        let mut ids = IdAllocator::<FileId>::new();
        assert_eq!(ids.next().get(), 1);
        assert_eq!(ids.next().get(), 2);
    }

    proptest! {
        /// Property: N consecutive calls yield exactly 1..=N.
        #[test]
        fn allocator_is_strictly_sequential(n in 1usize..500) {
            let mut ids = IdAllocator::<RecordId>::new();
            let issued: Vec<u64> = (0..n).map(|_| ids.next().get()).collect();
            let expected: Vec<u64> = (1..=n as u64).collect();
            prop_assert_eq!(issued, expected);
        }
    }
}

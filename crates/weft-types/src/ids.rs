//! Strongly-typed handles for simulation entities.
//!
//! Points and links live in a shared arena; these newtypes keep
//! point slots, link slots and external proxy handles from mixing.

use serde::{Deserialize, Serialize};

/// Slot of a point in the cloth arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub u32);

/// Slot of a link in the cloth arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LinkId(pub u32);

/// Opaque handle to an externally owned visual proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProxyHandle(pub u64);

impl PointId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl LinkId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for PointId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for LinkId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u64> for ProxyHandle {
    fn from(val: u64) -> Self {
        Self(val)
    }
}

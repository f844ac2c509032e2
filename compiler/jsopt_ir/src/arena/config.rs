//! Arena sizing and allocation strategy.

use super::error::ArenaError;
use crate::Node;

/// Default hard ceiling: 16 Mi records, a 256 MiB virtual reservation.
pub const MAX_NODES: u32 = 1 << 24;

/// Smallest usable capacity: the null slot plus one record.
pub const MIN_CAPACITY: u32 = 2;

/// Default initial capacity for the doubling strategy.
const DEFAULT_CAPACITY: u32 = 1024;

/// How the arena obtains its backing memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Reserve address space for `max_nodes` records up front. Pages are
    /// committed lazily, and neither indices nor the base address ever move.
    #[default]
    Reserve,
    /// Start at `capacity` records and double on overflow, reallocating and
    /// copying. Indices survive growth; references into the buffer do not.
    Double,
}

/// Configuration for a [`NodeArena`](super::NodeArena).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Allocation strategy.
    pub strategy: Strategy,
    /// Initial capacity in records (doubling strategy only).
    pub capacity: u32,
    /// Hard ceiling in records, including the null slot.
    pub max_nodes: u32,
    /// Try 2 MiB pages before regular pages (reservation strategy, Linux only).
    pub huge_pages: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Reserve,
            capacity: DEFAULT_CAPACITY,
            max_nodes: MAX_NODES,
            huge_pages: true,
        }
    }
}

impl ArenaConfig {
    /// Reservation strategy with default limits.
    pub fn reserved() -> Self {
        Self::default()
    }

    /// Doubling strategy starting at `capacity` records.
    pub fn growable(capacity: u32) -> Self {
        Self {
            strategy: Strategy::Double,
            capacity,
            ..Self::default()
        }
    }

    /// Set the allocation strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the initial capacity hint.
    #[must_use]
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the hard ceiling.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: u32) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Enable or disable the huge-page attempt.
    #[must_use]
    pub fn with_huge_pages(mut self, huge_pages: bool) -> Self {
        self.huge_pages = huge_pages;
        self
    }

    /// Check that the ceiling holds at least one record and is addressable.
    pub fn validate(&self) -> Result<(), ArenaError> {
        let addressable = (self.max_nodes as usize)
            .checked_mul(size_of::<Node>())
            .is_some_and(|bytes| isize::try_from(bytes).is_ok());
        if self.max_nodes < MIN_CAPACITY || !addressable {
            return Err(ArenaError::InvalidConfig {
                max_nodes: self.max_nodes,
            });
        }
        Ok(())
    }

    /// Capacity the arena starts with under this configuration.
    ///
    /// The reservation strategy covers the whole ceiling at once; the doubling
    /// strategy starts at the hint, clamped into `[MIN_CAPACITY, max_nodes]`.
    pub fn initial_capacity(&self) -> u32 {
        match self.strategy {
            Strategy::Reserve => self.max_nodes,
            Strategy::Double => self.capacity.max(MIN_CAPACITY).min(self.max_nodes),
        }
    }
}

//! Category labels, split routing and sequence number allocation
//!
//! Sequence numbers are the only state shared between source images. Each
//! category owns one counter for the whole run; numbers are strictly
//! increasing and never handed out twice.

use crate::io::configuration::{EMPTY_DIR, ROBOT_DIR, TRAINING_DIR, VALIDATION_DIR};
use std::fmt;
use std::num::NonZeroU64;

/// Classification label of an output record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Background tile without a robot
    Empty,
    /// Augmented robot variant
    Robot,
}

impl Category {
    /// Both categories in output-tree order
    pub const ALL: [Self; 2] = [Self::Empty, Self::Robot];

    /// Directory name used in the output tree
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Empty => EMPTY_DIR,
            Self::Robot => ROBOT_DIR,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Robot => 1,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Dataset partition of an output record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Split {
    /// Training partition
    Training,
    /// Validation partition
    Validation,
}

impl Split {
    /// Both splits in output-tree order
    pub const ALL: [Self; 2] = [Self::Training, Self::Validation];

    /// Directory name used in the output tree
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Training => TRAINING_DIR,
            Self::Validation => VALIDATION_DIR,
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Decides which split a record is written to
///
/// Disabled by default, in which case every record is a Training record.
/// With `validation_every = n`, a record whose routing counter is divisible
/// by `n` goes to Validation. Background tiles route on their own sequence
/// number; robot variants route on the index of their source image so all
/// variants of one photograph land in the same split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitPolicy {
    validation_every: Option<NonZeroU64>,
}

impl SplitPolicy {
    /// Policy that sends everything to Training
    pub const fn training_only() -> Self {
        Self {
            validation_every: None,
        }
    }

    /// Policy that sends every `n`-th record to Validation
    pub const fn every(n: NonZeroU64) -> Self {
        Self {
            validation_every: Some(n),
        }
    }

    /// Build a policy from an optional raw period; zero disables routing
    pub fn from_period(period: Option<u64>) -> Self {
        Self {
            validation_every: period.and_then(NonZeroU64::new),
        }
    }

    /// Configured validation period, if any
    pub const fn validation_every(&self) -> Option<NonZeroU64> {
        self.validation_every
    }

    /// Split for a record with the given routing counter
    pub fn split_for(&self, counter: u64) -> Split {
        match self.validation_every {
            Some(n) if counter % n.get() == 0 => Split::Validation,
            _ => Split::Training,
        }
    }
}

/// Allocates strictly increasing sequence numbers per category
#[derive(Debug, Clone, Default)]
pub struct SequentialLabeler {
    next: [u64; 2],
}

impl SequentialLabeler {
    /// Create a labeler with every category starting at zero
    pub const fn new() -> Self {
        Self { next: [0; 2] }
    }

    /// Take the next sequence number for `category`
    pub fn allocate(&mut self, category: Category) -> u64 {
        let slot = self.slot_mut(category);
        let number = *slot;
        *slot += 1;
        number
    }

    /// Number that the next allocation for `category` would return
    ///
    /// Also the count of numbers already handed out for that category.
    pub fn peek(&self, category: Category) -> u64 {
        self.next.get(category.index()).copied().unwrap_or(0)
    }

    fn slot_mut(&mut self, category: Category) -> &mut u64 {
        let [empty, robot] = &mut self.next;
        match category {
            Category::Empty => empty,
            Category::Robot => robot,
        }
    }
}

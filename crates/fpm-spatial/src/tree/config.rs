// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Construction parameters for the spatial trees.

use core::num::NonZeroUsize;

use thiserror::Error;

/// Deepest region level a tree may use.
///
/// Location ids pack one 4-bit code per level into a `u32`, which leaves room
/// for exactly eight levels.
pub const MAX_TREE_DEPTH: u8 = 8;

/// Invalid tree construction parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_depth` is above [`MAX_TREE_DEPTH`].
    #[error("max depth {requested} exceeds the limit of {limit}")]
    MaxDepthExceeded {
        /// Depth passed by the caller.
        requested: u8,
        /// Largest accepted depth.
        limit: u8,
    },
    /// A bucket capacity of zero would force a split on every insertion.
    #[error("bucket capacity must be at least 1")]
    ZeroBucketCapacity,
}

/// Tree settings.
///
/// `bucket_capacity` is the number of entries an unsplit region holds before
/// the next insertion splits it. `None` means the fan-out of the tree
/// (4 for a quadtree, 8 for an octree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig {
    /// Deepest leaf level. Regions split only while their corners stay
    /// above it; with `0` the root never splits and leaves sit at depth 1.
    pub max_depth: u8,
    /// Entries per region before a split; `None` selects the fan-out.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bucket_capacity: Option<NonZeroUsize>,
}

impl TreeConfig {
    /// Settings with the given depth and the default bucket capacity.
    pub const fn new(max_depth: u8) -> Self {
        Self {
            max_depth,
            bucket_capacity: None,
        }
    }

    /// Overrides the bucket capacity.
    ///
    /// # Errors
    /// [`ConfigError::ZeroBucketCapacity`] when `capacity` is zero.
    pub fn with_bucket_capacity(mut self, capacity: usize) -> Result<Self, ConfigError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(ConfigError::ZeroBucketCapacity)?;
        self.bucket_capacity = Some(capacity);
        Ok(self)
    }

    /// Checks every parameter.
    ///
    /// # Errors
    /// [`ConfigError::MaxDepthExceeded`] for `max_depth > MAX_TREE_DEPTH`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth > MAX_TREE_DEPTH {
            return Err(ConfigError::MaxDepthExceeded {
                requested: self.max_depth,
                limit: MAX_TREE_DEPTH,
            });
        }
        Ok(())
    }

    /// Bucket capacity with the default resolved against `fanout`.
    pub(crate) fn resolved_capacity(&self, fanout: usize) -> usize {
        self.bucket_capacity.map_or(fanout, NonZeroUsize::get)
    }
}

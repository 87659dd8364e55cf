//! Frame placement.
//!
//! Each archive holds frames `0.png, 1.png, 2.png, ...`. Consecutive frames
//! form a pair, and every pair becomes one species variant:
//!
//! ```text
//! variant    = idx / 2 + 1 + 4 * stage_multiplier
//! pair_index = idx % 2
//! ```
//!
//! With eight frames per archive, the four stages map onto variants
//! `1..=16` without collisions.

use std::path::PathBuf;

use super::stage::{LifeStage, VARIANTS_PER_STAGE};

/// Where a single frame lands in the output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FramePlacement {
    /// Species variant number, starting at 1.
    pub variant: u32,

    /// Position within the pair, 0 or 1.
    pub pair_index: u32,
}

impl FramePlacement {
    /// Compute the placement of frame `index` for a stage.
    ///
    /// ```
    /// use assetbind::redistribute::{FramePlacement, LifeStage};
    ///
    /// let placement = FramePlacement::for_frame(3, LifeStage::Middle);
    /// assert_eq!(placement.variant, 6);
    /// assert_eq!(placement.pair_index, 1);
    /// ```
    pub fn for_frame(index: u32, stage: LifeStage) -> Self {
        Self {
            variant: index / 2 + 1 + VARIANTS_PER_STAGE * stage.multiplier(),
            pair_index: index % 2,
        }
    }

    /// Path relative to the output root: `<class>/species_<variant>/<pair>.png`.
    pub fn relative_path(&self, class: &str) -> PathBuf {
        PathBuf::from(class)
            .join(format!("species_{}", self.variant))
            .join(format!("{}.png", self.pair_index))
    }

    /// Whether the variant falls inside the stage's own block.
    pub fn within_stage(&self, stage: LifeStage) -> bool {
        let (first, last) = stage.variant_range();
        (first..=last).contains(&self.variant)
    }
}

/// Number of missing indices listed in a gap description.
const LISTED_GAPS: usize = 8;

/// Describe why a set of frame indices is not exactly `0..n`.
///
/// Returns `None` for a contiguous set. Indices are expected sorted and
/// distinct. Work is bounded by the number of indices, not their values.
pub fn contiguity_gap(indices: &[u32]) -> Option<String> {
    let mut listed = Vec::new();
    let mut missing: u64 = 0;
    let mut expected: u64 = 0;

    for &index in indices {
        let index = u64::from(index);
        if index > expected {
            missing += index - expected;
            let room = LISTED_GAPS - listed.len();
            listed.extend((expected..index).take(room));
        }
        expected = expected.max(index + 1);
    }

    match missing {
        0 => None,
        n if n <= LISTED_GAPS as u64 => Some(format!("missing frames {:?}", listed)),
        n => Some(format!("missing {} frames, first {:?}", n, listed)),
    }
}

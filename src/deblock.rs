// Copyright (c) 2018-2022, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use crate::context::FRAME_LF_COUNT;

/// Running loop filter level deltas signalled at superblock granularity.
///
/// Slots are ordered Y-vertical, Y-horizontal, U, V.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DeblockDeltas {
  /// Delta used when a single delta covers every edge type.
  pub from_base: i8,
  pub per_edge: [i8; FRAME_LF_COUNT],
}

impl DeblockDeltas {
  /// Number of per-edge slots in use: the two chroma slots only exist
  /// when chroma is coded.
  #[inline]
  pub const fn slot_count(num_planes: usize) -> usize {
    if num_planes > 1 {
      FRAME_LF_COUNT
    } else {
      FRAME_LF_COUNT - 2
    }
  }

  /// Clear the base delta and the slots in use for `num_planes` planes.
  /// Returns how many per-edge slots were cleared.
  pub fn reset(&mut self, num_planes: usize) -> usize {
    self.from_base = 0;
    let count = Self::slot_count(num_planes);
    for delta in &mut self.per_edge[..count] {
      *delta = 0;
    }
    count
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn dirty() -> DeblockDeltas {
    DeblockDeltas { from_base: 5, per_edge: [1, -2, 3, -4] }
  }

  #[test]
  fn reset_all_slots_with_chroma() {
    let mut d = dirty();
    assert_eq!(d.reset(3), FRAME_LF_COUNT);
    assert_eq!(d, DeblockDeltas::default());
  }

  #[test]
  fn reset_luma_slots_for_monochrome() {
    let mut d = dirty();
    assert_eq!(d.reset(1), FRAME_LF_COUNT - 2);
    assert_eq!(d.from_base, 0);
    assert_eq!(d.per_edge, [0, 0, 3, -4]);
  }
}

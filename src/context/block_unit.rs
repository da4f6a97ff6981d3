// Copyright (c) 2017-2022, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use crate::partition::RefType::*;
use crate::partition::*;
use crate::predict::PredictionMode;
use crate::stats::GRADIENT_HIST_BINS;

/// Mode info of one coded block.
///
/// `gradient_hist` and `recon_var` are scratch outputs of the
/// reconstruction statistics; they are only meaningful between the analysis
/// of this block and the mode decision that reads them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Block {
  pub mode: PredictionMode,
  pub ref_frames: [RefType; 2],
  pub use_intrabc: bool,
  pub gradient_hist: [u64; GRADIENT_HIST_BINS],
  pub recon_var: i64,
}

impl Block {
  /// Intra block copy counts as inter: it predicts from a (current frame)
  /// reference with a vector.
  #[inline]
  pub fn is_inter(&self) -> bool {
    self.use_intrabc || self.ref_frames[0] > INTRA_FRAME
  }

  #[inline]
  pub const fn is_intrabc(&self) -> bool {
    self.use_intrabc
  }
}

impl Default for Block {
  fn default() -> Block {
    Block {
      mode: PredictionMode::DC_PRED,
      ref_frames: [INTRA_FRAME, NONE_FRAME],
      use_intrabc: false,
      gradient_hist: [0; GRADIENT_HIST_BINS],
      recon_var: 0,
    }
  }
}

#[inline]
fn neighbor_block_mode(neighbor: Option<&Block>) -> PredictionMode {
  match neighbor {
    None => PredictionMode::DC_PRED,
    Some(b) => {
      debug_assert!(
        !b.is_inter() || b.is_intrabc(),
        "intra mode context read from an inter block"
      );
      b.mode
    }
  }
}

/// Intra mode of the block to the left, for mode coding contexts.
///
/// `None` (frame or tile edge, or not yet coded) reads as `DC_PRED`.
/// The neighbor must be intra or intra block copy.
#[inline]
pub fn left_block_mode(left: Option<&Block>) -> PredictionMode {
  neighbor_block_mode(left)
}

/// Intra mode of the block above. Same rules as [`left_block_mode`].
#[inline]
pub fn above_block_mode(above: Option<&Block>) -> PredictionMode {
  neighbor_block_mode(above)
}

/// Keyframe luma mode CDF selector: `(above_ctx, left_ctx)`.
pub fn kf_intra_mode_context(
  above: Option<&Block>, left: Option<&Block>,
) -> (usize, usize) {
  (
    above_block_mode(above).intra_mode_context(),
    left_block_mode(left).intra_mode_context(),
  )
}

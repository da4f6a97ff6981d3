// Copyright (c) 2017-2022, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use crate::serialize::{Deserialize, Serialize};

use num_derive::FromPrimitive;

pub const INTRA_MODES: usize = 13;

/// Prediction modes as ordered in the bitstream. Intra modes come first,
/// so `mode < NEARESTMV` is a cheap intra test.
#[derive(
  Copy,
  Clone,
  Debug,
  Default,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  FromPrimitive,
  Serialize,
  Deserialize,
)]
pub enum PredictionMode {
  #[default]
  DC_PRED, // Average of above and left pixels
  V_PRED,      // Vertical
  H_PRED,      // Horizontal
  D45_PRED,    // Directional 45  degree
  D135_PRED,   // Directional 135 degree
  D113_PRED,   // Directional 113 degree
  D157_PRED,   // Directional 157 degree
  D203_PRED,   // Directional 203 degree
  D67_PRED,    // Directional 67  degree
  SMOOTH_PRED, // Combination of horizontal and vertical interpolation
  SMOOTH_V_PRED,
  SMOOTH_H_PRED,
  PAETH_PRED,
  UV_CFL_PRED,
  NEARESTMV,
  NEAR0MV,
  NEAR1MV,
  NEAR2MV,
  GLOBALMV,
  NEWMV,
  // Compound ref compound modes
  NEAREST_NEARESTMV,
  NEAR_NEAR0MV,
  NEAR_NEAR1MV,
  NEAR_NEAR2MV,
  NEAREST_NEWMV,
  NEW_NEARESTMV,
  NEAR_NEW0MV,
  NEAR_NEW1MV,
  NEAR_NEW2MV,
  NEW_NEAR0MV,
  NEW_NEAR1MV,
  NEW_NEAR2MV,
  GLOBAL_GLOBALMV,
  NEW_NEWMV,
}

// Maps a luma intra mode to one of the five keyframe mode context classes.
static intra_mode_context: [usize; INTRA_MODES] =
  [0, 1, 2, 3, 4, 4, 4, 4, 3, 0, 1, 2, 0];

impl PredictionMode {
  #[inline]
  pub fn is_intra(self) -> bool {
    self < PredictionMode::NEARESTMV
  }

  /// Keyframe y-mode context class of this mode.
  ///
  /// # Panics
  ///
  /// - If `self` is not one of the 13 luma intra modes.
  #[inline]
  pub fn intra_mode_context(self) -> usize {
    intra_mode_context[self as usize]
  }
}

// Copyright (c) 2019-2024, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

//! Statistics of the reconstructed luma of a prediction block, consumed by
//! intra mode decision.
//!
//! Both encoder and decoder derive these, so every step is integer
//! arithmetic with a fixed evaluation order.

use crate::context::{Block, BlockDescriptor};
use crate::frame::{PlaneRegion, ReconRegion};
use crate::partition::BlockSize;
use crate::util::{CastFromPrimitive, Pixel};

use thiserror::Error;

/// Number of gradient direction classes.
///
/// Eight accumulators are kept because the angle table can select class 7
/// (gradients with matching signs and `|dx| / |dy|` in `[0.25, 0.75)`).
pub const GRADIENT_HIST_BINS: usize = 8;

/// Gradient direction class, indexed by sign class (0 when `dx` and `dy`
/// have the same sign), integer part of `|dx| / |dy|` (saturated at 6) and
/// its fractional part in sixteenths (saturated at 15).
#[rustfmt::skip]
static GRADIENT_TO_ANGLE_BIN: [[[u8; 16]; 7]; 2] = [
  [
    [6, 6, 6, 6, 7, 7, 7, 7, 7, 7, 7, 7, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    [2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
  ],
  [
    [6, 6, 6, 6, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 4],
    [4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 3, 3, 3],
    [3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3],
    [3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3],
    [3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3],
    [3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    [2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
  ],
];

/// Errors raised when block statistics cannot be computed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum StatsError {
  /// No reconstruction view is attached to the plane.
  #[error("no reconstruction attached to plane {plane}")]
  MissingRecon {
    /// Plane index.
    plane: usize,
  },
  /// The sample width of a reconstruction view contradicts the bit depth.
  #[error("reconstruction sample width does not match bit depth {bit_depth}")]
  BitDepthMismatch {
    /// Bit depth the descriptor was configured with.
    bit_depth: usize,
  },
}

/// Number of rows (or columns) of a block that lie inside the picture.
///
/// `edge` is the distance to the bottom (or right) picture edge in 1/8 pel,
/// negative when the block overhangs it.
#[inline]
pub const fn clipped_extent(nominal: usize, edge: i32) -> usize {
  if edge >= 0 {
    nominal
  } else {
    let visible = nominal as i32 + (edge >> 3);
    if visible > 0 {
      visible as usize
    } else {
      0
    }
  }
}

#[inline(always)]
fn angle_bin(dx: i32, dy: i32) -> usize {
  if dy == 0 {
    return 2;
  }
  let sn = ((dx > 0) ^ (dy > 0)) as usize;
  let dx = dx.abs();
  let dy = dy.abs();
  let remd = (dx % dy) * 16 / dy;
  let quot = dx / dy;
  GRADIENT_TO_ANGLE_BIN[sn][quot.min(6) as usize][remd.min(15) as usize]
    as usize
}

/// Accumulate the gradient energy `dx² + dy²` of every sample with both a
/// left and an above neighbor inside the `rows`x`cols` top-left area of
/// `dst`, binned by gradient direction.
///
/// # Panics
///
/// - If `rows` or `cols` exceed the dimensions of `dst`.
pub fn gradient_hist<T: Pixel>(
  dst: &PlaneRegion<'_, T>, rows: usize, cols: usize,
  hist: &mut [u64; GRADIENT_HIST_BINS],
) {
  for r in 1..rows {
    let above = &dst[r - 1][..cols];
    let cur = &dst[r][..cols];
    for c in 1..cols {
      let p = i32::cast_from(cur[c]);
      let dx = p - i32::cast_from(cur[c - 1]);
      let dy = p - i32::cast_from(above[c]);
      let energy = dx * dx + dy * dy;
      hist[angle_bin(dx, dy)] += energy as u64;
    }
  }
}

/// Population variance of the `w`x`h` top-left area of `dst`, rounded
/// toward zero and never negative. An empty area has variance 0.
///
/// # Panics
///
/// - If `w` or `h` exceed the dimensions of `dst`.
pub fn variance<T: Pixel>(dst: &PlaneRegion<'_, T>, w: usize, h: usize) -> i64 {
  let mut sum: i64 = 0;
  let mut sum_square: i64 = 0;
  for r in 0..h {
    for &px in &dst[r][..w] {
      let v = i64::cast_from(px);
      sum += v;
      sum_square += v * v;
    }
  }
  let n = (w * h) as i64;
  if n == 0 {
    return 0;
  }
  let var = (n * sum_square - sum * sum) / n / n;
  var.max(0)
}

impl BlockDescriptor<'_> {
  /// Visible `(rows, cols)` of a `bsize` block at the current position.
  #[inline]
  pub fn visible_extent(&self, bsize: BlockSize) -> (usize, usize) {
    (
      clipped_extent(bsize.height(), self.mb_to_bottom_edge),
      clipped_extent(bsize.width(), self.mb_to_right_edge),
    )
  }

  fn luma_recon(&self) -> Result<&ReconRegion<'_>, StatsError> {
    self.planes[0].dst.as_ref().ok_or(StatsError::MissingRecon { plane: 0 })
  }

  /// Fill `mbmi.gradient_hist` from the reconstructed luma of the current
  /// block.
  ///
  /// # Errors
  ///
  /// - Returns `StatsError::MissingRecon` if no luma reconstruction is
  ///   attached.
  pub fn get_gradient_hist(
    &self, mbmi: &mut Block, bsize: BlockSize,
  ) -> Result<(), StatsError> {
    let dst = self.luma_recon()?;
    let (rows, cols) = self.visible_extent(bsize);
    if rows < bsize.height() || cols < bsize.width() {
      trace!("gradient histogram of {} clipped to {}x{}", bsize, cols, rows);
    }

    mbmi.gradient_hist = [0; GRADIENT_HIST_BINS];
    match dst {
      ReconRegion::Narrow(r) => {
        gradient_hist(r, rows, cols, &mut mbmi.gradient_hist)
      }
      ReconRegion::Wide(r) => {
        gradient_hist(r, rows, cols, &mut mbmi.gradient_hist)
      }
    }
    Ok(())
  }

  /// Fill `mbmi.recon_var` from the reconstructed luma of the current block.
  ///
  /// # Errors
  ///
  /// - Returns `StatsError::MissingRecon` if no luma reconstruction is
  ///   attached.
  pub fn get_recon_var(
    &self, mbmi: &mut Block, bsize: BlockSize,
  ) -> Result<(), StatsError> {
    let dst = self.luma_recon()?;
    let (rows, cols) = self.visible_extent(bsize);
    mbmi.recon_var = match dst {
      ReconRegion::Narrow(r) => variance(r, cols, rows),
      ReconRegion::Wide(r) => variance(r, cols, rows),
    };
    Ok(())
  }
}

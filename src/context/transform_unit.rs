// Copyright (c) 2017-2022, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use super::*;

use crate::partition::{BlockSize, InvalidBlockSize};
use crate::transform::TxSize;

use arrayvec::ArrayVec;

/// Split a run of `tx_units` context units into `(ones, zeros)`.
///
/// Units past `max_units` (counted from the start of the plane block, the
/// run starting at `offset`) lie outside the picture and are never marked
/// as having residual.
#[inline]
pub const fn edge_context_counts(
  has_eob: bool, edge_overhang: bool, tx_units: usize, max_units: usize,
  offset: usize,
) -> (usize, usize) {
  if !has_eob {
    (0, tx_units)
  } else if edge_overhang {
    let visible = max_units.saturating_sub(offset);
    let ones = if visible < tx_units { visible } else { tx_units };
    (ones, tx_units - ones)
  } else {
    (tx_units, 0)
  }
}

/// Whether the block at (`mi_row`, `mi_col`) carries the chroma of its
/// subsampled area.
///
/// With subsampling, a 4-sample wide (or high) luma block shares its chroma
/// with its left (or above) neighbor, and only the odd-positioned block of
/// the pair codes it.
#[inline]
pub const fn is_chroma_reference(
  mi_row: usize, mi_col: usize, bsize: BlockSize, ss_x: usize, ss_y: usize,
) -> bool {
  let bw = bsize.width_mi();
  let bh = bsize.height_mi();
  ((mi_row & 1) == 1 || (bh & 1) == 0 || ss_y == 0)
    && ((mi_col & 1) == 1 || (bw & 1) == 0 || ss_x == 0)
}

impl BlockDescriptor<'_> {
  /// Width of `plane_bsize` inside the picture, in context units.
  #[inline]
  pub fn max_block_wide(&self, plane_bsize: BlockSize, plane: usize) -> usize {
    let mut max_blocks_wide = plane_bsize.width() as i32;
    if self.mb_to_right_edge < 0 {
      let xdec = self.planes[plane].subsampling_x;
      max_blocks_wide += self.mb_to_right_edge >> (3 + xdec);
    }
    (max_blocks_wide.max(0) as usize) >> MI_SIZE_LOG2
  }

  /// Height of `plane_bsize` inside the picture, in context units.
  #[inline]
  pub fn max_block_high(&self, plane_bsize: BlockSize, plane: usize) -> usize {
    let mut max_blocks_high = plane_bsize.height() as i32;
    if self.mb_to_bottom_edge < 0 {
      let ydec = self.planes[plane].subsampling_y;
      max_blocks_high += self.mb_to_bottom_edge >> (3 + ydec);
    }
    (max_blocks_high.max(0) as usize) >> MI_SIZE_LOG2
  }

  /// Record whether the transform block at (`aoff`, `loff`) context units
  /// inside the current block of `plane` has coded coefficients.
  ///
  /// # Panics
  ///
  /// - If the transform block extends past the tile (above) or the
  ///   superblock (left) context.
  pub fn set_contexts(
    &mut self, plane: usize, plane_bsize: BlockSize, tx_size: TxSize,
    has_eob: bool, aoff: usize, loff: usize,
  ) {
    let txs_wide = tx_size.width_mi();
    let txs_high = tx_size.height_mi();

    let (above_ones, above_zeros) = edge_context_counts(
      has_eob,
      self.mb_to_right_edge < 0,
      txs_wide,
      self.max_block_wide(plane_bsize, plane),
      aoff,
    );
    let (left_ones, left_zeros) = edge_context_counts(
      has_eob,
      self.mb_to_bottom_edge < 0,
      txs_high,
      self.max_block_high(plane_bsize, plane),
      loff,
    );

    if has_eob && (above_zeros > 0 || left_zeros > 0) {
      trace!(
        "plane {} {} at ({}, {}) clipped: above {}/{} left {}/{}",
        plane,
        tx_size,
        aoff,
        loff,
        above_ones,
        txs_wide,
        left_ones,
        txs_high
      );
    }

    let pd = &mut self.planes[plane];
    let (ones, zeros) =
      pd.above_context_mut()[aoff..][..txs_wide].split_at_mut(above_ones);
    ones.fill(1);
    zeros.fill(0);
    let (ones, zeros) =
      pd.left_context_mut()[loff..][..txs_high].split_at_mut(left_ones);
    ones.fill(1);
    zeros.fill(0);
  }

  /// Clear the contexts covered by a skipped `bsize` block at
  /// (`mi_row`, `mi_col`). Chroma planes are only cleared when the block is
  /// their chroma reference.
  ///
  /// Returns the indices of the planes that were cleared.
  ///
  /// # Errors
  ///
  /// - Returns `InvalidBlockSize` if `bsize` has no subsampled counterpart
  ///   for a cleared chroma plane.
  pub fn reset_skip_context(
    &mut self, mi_row: usize, mi_col: usize, bsize: BlockSize,
    num_planes: usize,
  ) -> Result<ArrayVec<usize, MAX_PLANES>, InvalidBlockSize> {
    debug_assert!((1..=MAX_PLANES).contains(&num_planes));

    let chroma_ref = is_chroma_reference(
      mi_row,
      mi_col,
      bsize,
      self.planes[1].subsampling_x,
      self.planes[1].subsampling_y,
    );
    let nplanes = 1 + (num_planes - 1) * chroma_ref as usize;

    let plane_bsizes = self.planes[..nplanes]
      .iter()
      .map(|pd| bsize.subsampled_size(pd.subsampling_x, pd.subsampling_y))
      .collect::<Result<ArrayVec<_, MAX_PLANES>, _>>()?;

    let mut cleared = ArrayVec::new();
    for (pli, (pd, plane_bsize)) in
      self.planes.iter_mut().zip(plane_bsizes).enumerate()
    {
      let xdec = pd.subsampling_x;
      let ydec = pd.subsampling_y;
      let above_start = mi_col >> xdec;
      let left_start = (mi_row & MAX_MIB_MASK) >> ydec;
      pd.above_context[above_start..][..plane_bsize.width_mi()].fill(0);
      pd.left_context[left_start..][..plane_bsize.height_mi()].fill(0);
      cleared.push(pli);
    }

    trace!(
      "skip at ({}, {}) {}: cleared planes {:?}",
      mi_row,
      mi_col,
      bsize,
      cleared.as_slice()
    );

    Ok(cleared)
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::color::ChromaSampling;
  use crate::config::BlockdConfig;
  use crate::partition::BlockSize::*;
  use crate::transform::TxSize::*;

  use pretty_assertions::assert_eq;

  fn descriptor(width: usize, height: usize) -> BlockDescriptor<'static> {
    let cfg = BlockdConfig { width, height, ..Default::default() };
    BlockDescriptor::new(&cfg).unwrap()
  }

  #[test]
  fn counts() {
    assert_eq!(edge_context_counts(false, true, 4, 2, 0), (0, 4));
    assert_eq!(edge_context_counts(false, false, 4, 8, 0), (0, 4));
    assert_eq!(edge_context_counts(true, false, 4, 0, 0), (4, 0));
    assert_eq!(edge_context_counts(true, true, 4, 6, 0), (4, 0));
    assert_eq!(edge_context_counts(true, true, 4, 6, 4), (2, 2));
    assert_eq!(edge_context_counts(true, true, 4, 6, 8), (0, 4));
  }

  #[test]
  fn chroma_reference_420() {
    // 4x4 luma blocks: only the bottom-right of each 2x2 quad
    assert!(!is_chroma_reference(0, 0, BLOCK_4X4, 1, 1));
    assert!(!is_chroma_reference(0, 1, BLOCK_4X4, 1, 1));
    assert!(!is_chroma_reference(1, 0, BLOCK_4X4, 1, 1));
    assert!(is_chroma_reference(1, 1, BLOCK_4X4, 1, 1));
    // 4x8 pairs horizontally
    assert!(!is_chroma_reference(0, 0, BLOCK_4X8, 1, 1));
    assert!(is_chroma_reference(0, 1, BLOCK_4X8, 1, 1));
    // 8x4 pairs vertically
    assert!(!is_chroma_reference(2, 2, BLOCK_8X4, 1, 1));
    assert!(is_chroma_reference(3, 2, BLOCK_8X4, 1, 1));
    assert!(is_chroma_reference(0, 0, BLOCK_8X8, 1, 1));
    // no subsampling, every block is a reference
    assert!(is_chroma_reference(0, 0, BLOCK_4X4, 0, 0));
    // 4:2:2 only pairs horizontally
    assert!(is_chroma_reference(0, 1, BLOCK_4X4, 1, 0));
    assert!(!is_chroma_reference(1, 0, BLOCK_4X4, 1, 0));
  }

  #[test]
  fn no_eob_clears_full_run() {
    let mut xd = descriptor(24, 24);
    xd.planes[0].above_context.fill(1);
    xd.planes[0].left_context = [1; MAX_MIB_SIZE];
    xd.set_mi_row_col(4, 4, BLOCK_16X16);
    assert!(xd.mb_to_right_edge < 0);

    xd.set_contexts(0, BLOCK_16X16, TX_16X16, false, 0, 0);
    assert_eq!(&xd.above_context(0)[..4], &[0, 0, 0, 0]);
    assert_eq!(&xd.left_context(0)[..4], &[0, 0, 0, 0]);
    assert_eq!(xd.planes[0].above_context[3], 1);
    assert_eq!(xd.planes[0].left_context[8], 1);
  }

  #[test]
  fn eob_inside_picture_sets_full_run() {
    let mut xd = descriptor(64, 64);
    xd.set_mi_row_col(0, 0, BLOCK_32X32);
    xd.set_contexts(0, BLOCK_32X32, TX_16X8, true, 4, 2);
    assert_eq!(&xd.above_context(0)[..9], &[0, 0, 0, 0, 1, 1, 1, 1, 0]);
    assert_eq!(&xd.left_context(0)[..5], &[0, 0, 1, 1, 0]);
  }

  #[test]
  fn right_edge_truncates_partially() {
    // mi_cols = 6: a 16x16 block at mi_col 4 has 8 visible columns
    let mut xd = descriptor(24, 64);
    xd.set_mi_row_col(0, 4, BLOCK_16X16);
    assert_eq!(xd.max_block_wide(BLOCK_16X16, 0), 2);
    assert_eq!(xd.max_block_high(BLOCK_16X16, 0), 4);

    xd.planes[0].above_context.fill(1);
    xd.set_contexts(0, BLOCK_16X16, TX_16X16, true, 0, 0);
    assert_eq!(&xd.above_context(0)[..4], &[1, 1, 0, 0]);
    assert_eq!(&xd.left_context(0)[..4], &[1, 1, 1, 1]);
  }

  #[test]
  fn right_edge_truncates_to_zero() {
    let mut xd = descriptor(24, 64);
    xd.set_mi_row_col(0, 4, BLOCK_16X16);
    xd.set_contexts(0, BLOCK_16X16, TX_4X4, true, 3, 0);
    assert_eq!(xd.above_context(0)[3], 0);
    assert_eq!(xd.left_context(0)[0], 1);
  }

  #[test]
  fn bottom_edge_truncates_chroma() {
    // mi_rows = 6: a 32x32 block at the origin has 24 visible rows, 12 in
    // 4:2:0 chroma
    let mut xd = descriptor(64, 24);
    xd.set_mi_row_col(0, 0, BLOCK_32X32);
    assert_eq!(xd.mb_to_bottom_edge, -(2 * 4 * 8));
    assert_eq!(xd.max_block_high(BLOCK_16X16, 1), 3);
    xd.set_contexts(1, BLOCK_16X16, TX_16X16, true, 0, 0);
    assert_eq!(&xd.left_context(1)[..4], &[1, 1, 1, 0]);
    assert_eq!(&xd.above_context(1)[..4], &[1, 1, 1, 1]);
  }

  #[test]
  fn max_block_floors_at_zero() {
    let mut xd = descriptor(24, 24);
    xd.mb_to_right_edge = -(64 * 8);
    assert_eq!(xd.max_block_wide(BLOCK_16X16, 0), 0);
  }

  fn dirty(xd: &mut BlockDescriptor<'_>) {
    for pd in &mut xd.planes {
      pd.above_context.fill(1);
      pd.left_context = [1; MAX_MIB_SIZE];
    }
  }

  #[test]
  fn skip_reset_luma_only_off_reference() {
    let mut xd = descriptor(64, 64);
    dirty(&mut xd);
    xd.set_mi_row_col(2, 2, BLOCK_4X4);
    let cleared = xd.reset_skip_context(2, 2, BLOCK_4X4, 3).unwrap();
    assert_eq!(cleared.as_slice(), &[0]);
    assert_eq!(&xd.planes[0].above_context[..4], &[1, 1, 0, 1]);
    assert_eq!(&xd.planes[0].left_context[..4], &[1, 1, 0, 1]);
    assert!(xd.planes[1].above_context.iter().all(|&c| c == 1));
    assert!(xd.planes[2].left_context.iter().all(|&c| c == 1));
  }

  #[test]
  fn skip_reset_all_planes_on_reference() {
    let mut xd = descriptor(64, 64);
    dirty(&mut xd);
    xd.set_mi_row_col(4, 8, BLOCK_16X16);
    let cleared = xd.reset_skip_context(4, 8, BLOCK_16X16, 3).unwrap();
    assert_eq!(cleared.as_slice(), &[0, 1, 2]);
    assert_eq!(&xd.planes[0].above_context[7..13], &[1, 0, 0, 0, 0, 1]);
    assert_eq!(&xd.planes[0].left_context[3..9], &[1, 0, 0, 0, 0, 1]);
    for pd in &xd.planes[1..] {
      assert_eq!(&pd.above_context[3..7], &[1, 0, 0, 1]);
      assert_eq!(&pd.left_context[1..5], &[1, 0, 0, 1]);
    }
  }

  #[test]
  fn skip_reset_monochrome() {
    let cfg = BlockdConfig {
      chroma_sampling: ChromaSampling::Cs400,
      ..Default::default()
    };
    let mut xd = BlockDescriptor::new(&cfg).unwrap();
    dirty(&mut xd);
    let cleared = xd.reset_skip_context(0, 0, BLOCK_8X8, 1).unwrap();
    assert_eq!(cleared.as_slice(), &[0]);
  }

  #[test]
  fn skip_reset_invalid_422_size() {
    let cfg = BlockdConfig {
      chroma_sampling: ChromaSampling::Cs422,
      ..Default::default()
    };
    let mut xd = BlockDescriptor::new(&cfg).unwrap();
    dirty(&mut xd);
    assert_eq!(
      xd.reset_skip_context(0, 1, BLOCK_4X8, 3),
      Err(InvalidBlockSize)
    );
    // nothing is cleared when any plane size is invalid
    for pd in &xd.planes {
      assert!(pd.above_context.iter().all(|&c| c == 1));
      assert!(pd.left_context.iter().all(|&c| c == 1));
    }
  }
}

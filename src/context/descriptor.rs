// Copyright (c) 2017-2023, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use super::*;

use crate::config::{BlockdConfig, InvalidConfig};
use crate::deblock::DeblockDeltas;
use crate::frame::ReconRegion;
use crate::lrf::{RestorationDefault, SgrprojInfo, WienerInfo};
use crate::partition::BlockSize;
use crate::stats::StatsError;
use crate::util::PixelType;

/// Per-plane view of the block being coded.
#[derive(Clone, Debug, Default)]
pub struct PlaneDescriptor<'a> {
  pub subsampling_x: usize,
  pub subsampling_y: usize,
  pub plane_type: PlaneType,
  /// Reconstructed samples of the current block, top-left aligned.
  pub dst: Option<ReconRegion<'a>>,
  pub(crate) above_context: Vec<u8>,
  pub(crate) left_context: [u8; MAX_MIB_SIZE],
  pub(crate) above_base: usize,
  pub(crate) left_base: usize,
}

impl PlaneDescriptor<'_> {
  fn with_width(above_units: usize) -> Self {
    PlaneDescriptor { above_context: vec![0; above_units], ..Default::default() }
  }

  /// Above "has residual" flags, starting at the current block.
  #[inline]
  pub fn above_context(&self) -> &[u8] {
    &self.above_context[self.above_base..]
  }

  /// Left "has residual" flags, starting at the current block.
  #[inline]
  pub fn left_context(&self) -> &[u8] {
    &self.left_context[self.left_base..]
  }

  #[inline]
  pub(crate) fn above_context_mut(&mut self) -> &mut [u8] {
    &mut self.above_context[self.above_base..]
  }

  #[inline]
  pub(crate) fn left_context_mut(&mut self) -> &mut [u8] {
    &mut self.left_context[self.left_base..]
  }
}

/// State of the coding block currently visited within a tile.
///
/// One descriptor is kept per tile worker and repositioned with
/// [`set_mi_row_col`](BlockDescriptor::set_mi_row_col) for every block.
#[derive(Clone, Debug)]
pub struct BlockDescriptor<'a> {
  /// Distance from the right edge of the block to the right edge of the
  /// picture, in 1/8 pel. Negative when the block overhangs the picture.
  pub mb_to_right_edge: i32,
  /// Same as `mb_to_right_edge` for the bottom edge.
  pub mb_to_bottom_edge: i32,
  pub mi_rows: usize,
  pub mi_cols: usize,
  pub mi_row: usize,
  pub mi_col: usize,
  pub bit_depth: usize,
  pub num_planes: usize,
  pub planes: [PlaneDescriptor<'a>; MAX_PLANES],
  pub delta_lf: DeblockDeltas,
  pub wiener_info: [WienerInfo; MAX_PLANES],
  pub sgrproj_info: [SgrprojInfo; MAX_PLANES],
}

impl<'a> BlockDescriptor<'a> {
  /// Builds a descriptor positioned on the top-left 4x4 block of the
  /// picture described by `cfg`.
  ///
  /// # Errors
  ///
  /// - Returns `InvalidConfig` if `cfg` fails validation.
  pub fn new(cfg: &BlockdConfig) -> Result<Self, InvalidConfig> {
    cfg.validate()?;

    let above_units = cfg.aligned_mi_cols();
    let num_planes = cfg.num_planes();
    let (ss_x, ss_y) = cfg.chroma_sampling.get_decimation().unwrap_or((1, 1));

    let mut xd = BlockDescriptor {
      mb_to_right_edge: 0,
      mb_to_bottom_edge: 0,
      mi_rows: cfg.mi_rows(),
      mi_cols: cfg.mi_cols(),
      mi_row: 0,
      mi_col: 0,
      bit_depth: cfg.bit_depth,
      num_planes,
      planes: [
        PlaneDescriptor::with_width(above_units),
        PlaneDescriptor::with_width(above_units),
        PlaneDescriptor::with_width(above_units),
      ],
      delta_lf: DeblockDeltas::default(),
      wiener_info: [WienerInfo::default(); MAX_PLANES],
      sgrproj_info: [SgrprojInfo::default(); MAX_PLANES],
    };
    xd.setup_block_planes(ss_x, ss_y, num_planes);
    xd.reset_loop_restoration(num_planes);
    xd.set_mi_row_col(0, 0, BlockSize::BLOCK_4X4);

    debug!(
      "block descriptor: {}x{} mi units ({} above context units), {} planes, \
       subsampling ({}, {}), {}-bit",
      xd.mi_cols, xd.mi_rows, above_units, num_planes, ss_x, ss_y, xd.bit_depth
    );

    Ok(xd)
  }

  /// Assigns subsampling and plane type to every plane slot. Slots past
  /// `num_planes` get the `(1, 1)` inactive marker.
  pub fn setup_block_planes(
    &mut self, ss_x: usize, ss_y: usize, num_planes: usize,
  ) {
    debug_assert!((1..=MAX_PLANES).contains(&num_planes));
    debug_assert!(ss_x <= 1 && ss_y <= 1);

    for (pli, pd) in self.planes.iter_mut().enumerate() {
      pd.plane_type = PlaneType::from_plane(pli);
      (pd.subsampling_x, pd.subsampling_y) = if pli == 0 {
        (0, 0)
      } else if pli < num_planes {
        (ss_x, ss_y)
      } else {
        (1, 1)
      };
    }
  }

  /// Moves the descriptor to the `bsize` block at (`mi_row`, `mi_col`),
  /// updating the picture edge distances and the context bases of every
  /// plane.
  pub fn set_mi_row_col(
    &mut self, mi_row: usize, mi_col: usize, bsize: BlockSize,
  ) {
    debug_assert!(mi_row < self.mi_rows && mi_col < self.mi_cols);

    self.mi_row = mi_row;
    self.mi_col = mi_col;

    let to_edge = |mi_end: usize, mi_pos: usize, mi_len: usize| -> i32 {
      ((mi_end as i32 - mi_len as i32 - mi_pos as i32) * MI_SIZE as i32) * 8
    };
    self.mb_to_right_edge = to_edge(self.mi_cols, mi_col, bsize.width_mi());
    self.mb_to_bottom_edge = to_edge(self.mi_rows, mi_row, bsize.height_mi());

    for pd in &mut self.planes {
      pd.above_base = mi_col >> pd.subsampling_x;
      pd.left_base = (mi_row & MAX_MIB_MASK) >> pd.subsampling_y;
    }
  }

  /// Clears the above contexts of all planes, at the start of a tile.
  pub fn reset_above_context(&mut self) {
    for pd in &mut self.planes[..self.num_planes] {
      pd.above_context.fill(0);
    }
  }

  /// Clears the left contexts of all planes, at the start of a superblock
  /// row.
  pub fn reset_left_context(&mut self) {
    for pd in &mut self.planes[..self.num_planes] {
      pd.left_context = [0; MAX_MIB_SIZE];
    }
  }

  /// Clears the loop filter deltas. Returns the number of per-edge deltas
  /// that were cleared.
  pub fn reset_loop_filter_delta(&mut self, num_planes: usize) -> usize {
    self.delta_lf.reset(num_planes)
  }

  /// Resets the reference restoration parameters of the first `num_planes`
  /// planes.
  pub fn reset_loop_restoration(&mut self, num_planes: usize) {
    for pli in 0..num_planes {
      self.wiener_info[pli].set_default();
      self.sgrproj_info[pli].set_default();
    }
  }

  /// Attaches the reconstructed samples of the current block in `plane`.
  ///
  /// # Errors
  ///
  /// - Returns `StatsError::BitDepthMismatch` if the sample width of
  ///   `region` does not match the descriptor's bit depth.
  pub fn set_recon(
    &mut self, plane: usize, region: ReconRegion<'a>,
  ) -> Result<(), StatsError> {
    if region.pixel_type() != PixelType::from_bit_depth(self.bit_depth) {
      return Err(StatsError::BitDepthMismatch { bit_depth: self.bit_depth });
    }
    self.planes[plane].dst = Some(region);
    Ok(())
  }

  #[inline]
  pub fn recon(&self, plane: usize) -> Option<&ReconRegion<'a>> {
    self.planes[plane].dst.as_ref()
  }

  #[inline]
  pub fn above_context(&self, plane: usize) -> &[u8] {
    self.planes[plane].above_context()
  }

  #[inline]
  pub fn left_context(&self, plane: usize) -> &[u8] {
    self.planes[plane].left_context()
  }
}

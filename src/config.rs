// Copyright (c) 2020-2022, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use thiserror::Error;

use crate::color::ChromaSampling;
use crate::context::{MAX_MIB_SIZE_LOG2, MI_SIZE_LOG2};
use crate::serialize::{Deserialize, Serialize};
use crate::util::PixelType;

/// Enumeration of possible invalid configuration errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum InvalidConfig {
  /// The width is invalid.
  #[error("invalid width {0} (expected >= 16, <= 65535)")]
  InvalidWidth(usize),
  /// The height is invalid.
  #[error("invalid height {0} (expected >= 16, <= 65535)")]
  InvalidHeight(usize),
  /// The bit depth is invalid.
  #[error("invalid bit depth {0} (expected 8, 10 or 12)")]
  InvalidBitDepth(usize),
}

/// Geometry and sample format of the picture a block descriptor walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockdConfig {
  /// Width of the luma plane in pixels.
  pub width: usize,
  /// Height of the luma plane in pixels.
  pub height: usize,
  /// Bit depth of the reconstructed samples.
  pub bit_depth: usize,
  /// Chroma subsampling.
  pub chroma_sampling: ChromaSampling,
}

impl Default for BlockdConfig {
  fn default() -> Self {
    BlockdConfig {
      width: 640,
      height: 480,
      bit_depth: 8,
      chroma_sampling: ChromaSampling::Cs420,
    }
  }
}

impl BlockdConfig {
  /// Validates the configuration.
  ///
  /// # Errors
  ///
  /// - Returns `InvalidConfig` if the dimensions or bit depth are out of
  ///   range.
  pub fn validate(&self) -> Result<(), InvalidConfig> {
    use InvalidConfig::*;

    if self.width < 16 || self.width > u16::MAX as usize {
      return Err(InvalidWidth(self.width));
    }
    if self.height < 16 || self.height > u16::MAX as usize {
      return Err(InvalidHeight(self.height));
    }
    match self.bit_depth {
      8 | 10 | 12 => {}
      _ => return Err(InvalidBitDepth(self.bit_depth)),
    }

    Ok(())
  }

  /// Picture width in mode-info units, after aligning to 8 pixels.
  #[inline]
  pub const fn mi_cols(&self) -> usize {
    ((self.width + 7) & !7) >> MI_SIZE_LOG2
  }

  /// Picture height in mode-info units, after aligning to 8 pixels.
  #[inline]
  pub const fn mi_rows(&self) -> usize {
    ((self.height + 7) & !7) >> MI_SIZE_LOG2
  }

  /// Mode-info columns rounded up to whole superblocks; the length of a
  /// luma above context row.
  #[inline]
  pub const fn aligned_mi_cols(&self) -> usize {
    let mask = (1 << MAX_MIB_SIZE_LOG2) - 1;
    (self.mi_cols() + mask) & !mask
  }

  #[inline]
  pub const fn num_planes(&self) -> usize {
    self.chroma_sampling.num_planes()
  }

  #[inline]
  pub const fn pixel_type(&self) -> PixelType {
    PixelType::from_bit_depth(self.bit_depth)
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use interpolate_name::interpolate_test;

  #[test]
  fn default_is_valid() {
    let cfg = BlockdConfig::default();
    assert_eq!(cfg.validate(), Ok(()));
    assert_eq!(cfg.mi_cols(), 160);
    assert_eq!(cfg.mi_rows(), 120);
    assert_eq!(cfg.aligned_mi_cols(), 160);
    assert_eq!(cfg.num_planes(), 3);
  }

  #[test]
  fn rejects_bad_dimensions() {
    let cfg = BlockdConfig { width: 15, ..Default::default() };
    assert_eq!(cfg.validate(), Err(InvalidConfig::InvalidWidth(15)));
    let cfg = BlockdConfig { height: 65536, ..Default::default() };
    assert_eq!(cfg.validate(), Err(InvalidConfig::InvalidHeight(65536)));
    let cfg = BlockdConfig { width: 65535, height: 16, ..Default::default() };
    assert_eq!(cfg.validate(), Ok(()));
  }

  #[interpolate_test(bd_0, 0)]
  #[interpolate_test(bd_9, 9)]
  #[interpolate_test(bd_16, 16)]
  fn rejects_bad_bit_depth(bit_depth: usize) {
    let cfg = BlockdConfig { bit_depth, ..Default::default() };
    assert_eq!(cfg.validate(), Err(InvalidConfig::InvalidBitDepth(bit_depth)));
  }

  #[test]
  fn mi_dimensions_align_to_eight_pixels() {
    let cfg = BlockdConfig { width: 21, height: 17, ..Default::default() };
    assert_eq!(cfg.mi_cols(), 6);
    assert_eq!(cfg.mi_rows(), 6);
    assert_eq!(cfg.aligned_mi_cols(), 32);
  }

  #[test]
  fn error_messages() {
    assert_eq!(
      InvalidConfig::InvalidBitDepth(9).to_string(),
      "invalid bit depth 9 (expected 8, 10 or 12)"
    );
  }
}

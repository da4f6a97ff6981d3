// Copyright (c) 2018-2022, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use crate::serialize::{Deserialize, Serialize};

use num_derive::FromPrimitive;

/// Chroma subsampling format
#[derive(
  Copy, Clone, Debug, Default, PartialEq, Eq, FromPrimitive, Serialize, Deserialize,
)]
#[repr(C)]
pub enum ChromaSampling {
  /// Both vertically and horizontally subsampled.
  #[default]
  Cs420,
  /// Horizontally subsampled.
  Cs422,
  /// Not subsampled.
  Cs444,
  /// Monochrome.
  Cs400,
}

impl ChromaSampling {
  /// Provides the amount to right shift the luma plane dimensions to get the
  ///  chroma plane dimensions.
  /// Only values 0 or 1 are ever returned.
  /// Cs400 returns None, as there are no chroma planes.
  pub const fn get_decimation(self) -> Option<(usize, usize)> {
    use self::ChromaSampling::*;
    match self {
      Cs420 => Some((1, 1)),
      Cs422 => Some((1, 0)),
      Cs444 => Some((0, 0)),
      Cs400 => None,
    }
  }

  /// Number of coded planes: 1 for monochrome, 3 otherwise.
  #[inline]
  pub const fn num_planes(self) -> usize {
    match self {
      ChromaSampling::Cs400 => 1,
      _ => 3,
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use num_traits::FromPrimitive;

  #[test]
  fn decimation_and_planes() {
    assert_eq!(ChromaSampling::Cs420.get_decimation(), Some((1, 1)));
    assert_eq!(ChromaSampling::Cs422.get_decimation(), Some((1, 0)));
    assert_eq!(ChromaSampling::Cs444.get_decimation(), Some((0, 0)));
    assert_eq!(ChromaSampling::Cs400.get_decimation(), None);
    assert_eq!(ChromaSampling::Cs400.num_planes(), 1);
    assert_eq!(ChromaSampling::Cs422.num_planes(), 3);
  }

  #[test]
  fn from_repr() {
    assert_eq!(ChromaSampling::from_u32(3), Some(ChromaSampling::Cs400));
    assert_eq!(ChromaSampling::from_u32(4), None);
  }
}

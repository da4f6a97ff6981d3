// Copyright (c) 2017-2023, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

//! Block coding state shared between encoder and decoder.

use crate::serialize::{Deserialize, Serialize};

pub const MAX_PLANES: usize = 3;

pub const FRAME_LF_COUNT: usize = 4;

/// Log2 of the mode-info unit (and entropy context unit) size in pixels.
pub const MI_SIZE_LOG2: usize = 2;
pub const MI_SIZE: usize = 1 << MI_SIZE_LOG2;

/// Largest superblock (128x128) in mode-info units.
pub const MAX_MIB_SIZE_LOG2: usize = 7 - MI_SIZE_LOG2;
pub const MAX_MIB_SIZE: usize = 1 << MAX_MIB_SIZE_LOG2;
pub const MAX_MIB_MASK: usize = MAX_MIB_SIZE - 1;

/// Plane class used to select coefficient CDFs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaneType {
  #[default]
  Y,
  UV,
}

impl PlaneType {
  #[inline]
  pub const fn from_plane(pli: usize) -> PlaneType {
    if pli == 0 {
      PlaneType::Y
    } else {
      PlaneType::UV
    }
  }
}

mod block_unit;
pub use block_unit::*;

mod descriptor;
pub use descriptor::*;

mod transform_unit;
pub use transform_unit::*;

// Copyright (c) 2017-2022, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

//! Loop restoration filter parameters, as far as block coding needs them.
//!
//! Only the reference ("previous unit") parameters are kept here. They seed
//! the delta coding of the first restoration unit of every superblock and
//! must be reset to their mid values before it.

use crate::serialize::{Deserialize, Serialize};

pub const WIENER_WIN: usize = 7;
pub const WIENER_HALFWIN: usize = WIENER_WIN >> 1;

pub const WIENER_TAPS_MIN: [i8; 3] = [-5, -23, -17];
pub const WIENER_TAPS_MID: [i8; 3] = [3, -7, 15];
pub const WIENER_TAPS_MAX: [i8; 3] = [10, 8, 46];

pub const SGRPROJ_XQD_MIN: [i8; 2] = [-96, -32];
pub const SGRPROJ_XQD_MID: [i8; 2] = [-32, 31];
pub const SGRPROJ_XQD_MAX: [i8; 2] = [31, 95];

/// Seam to the restoration filter: reset a parameter record to the value
/// the bitstream assumes before the first coded unit.
pub trait RestorationDefault {
  fn set_default(&mut self);
}

/// Symmetric 7-tap Wiener kernels for the vertical and horizontal passes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WienerInfo {
  pub vfilter: [i16; WIENER_WIN],
  pub hfilter: [i16; WIENER_WIN],
}

impl WienerInfo {
  const fn default_kernel() -> [i16; WIENER_WIN] {
    let t0 = WIENER_TAPS_MID[0] as i16;
    let t1 = WIENER_TAPS_MID[1] as i16;
    let t2 = WIENER_TAPS_MID[2] as i16;
    // The taps of a kernel sum to zero in this representation; the implied
    // unit gain lives outside the stored coefficients.
    [t0, t1, t2, -2 * (t0 + t1 + t2), t2, t1, t0]
  }
}

impl Default for WienerInfo {
  fn default() -> Self {
    let kernel = Self::default_kernel();
    WienerInfo { vfilter: kernel, hfilter: kernel }
  }
}

impl RestorationDefault for WienerInfo {
  fn set_default(&mut self) {
    let kernel = Self::default_kernel();
    self.vfilter = kernel;
    self.hfilter = kernel;
  }
}

/// Self-guided projection parameters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SgrprojInfo {
  /// Index into the SGR parameter set table.
  pub ep: u8,
  pub xqd: [i8; 2],
}

impl RestorationDefault for SgrprojInfo {
  // ep is not predicted, so it keeps whatever was last coded
  fn set_default(&mut self) {
    self.xqd = SGRPROJ_XQD_MID;
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn wiener_default_kernel() {
    let mut info =
      WienerInfo { vfilter: [1; WIENER_WIN], hfilter: [-1; WIENER_WIN] };
    info.set_default();
    assert_eq!(info.vfilter, [3, -7, 15, -22, 15, -7, 3]);
    assert_eq!(info.hfilter, info.vfilter);
    assert_eq!(info, WienerInfo::default());
    assert_eq!(info.vfilter[WIENER_HALFWIN], -22);
  }

  #[test]
  fn mid_taps_are_within_range() {
    for i in 0..3 {
      assert!(WIENER_TAPS_MIN[i] <= WIENER_TAPS_MID[i]);
      assert!(WIENER_TAPS_MID[i] <= WIENER_TAPS_MAX[i]);
    }
    for i in 0..2 {
      let mid = (SGRPROJ_XQD_MIN[i] as i32 + SGRPROJ_XQD_MAX[i] as i32) / 2;
      assert_eq!(mid, SGRPROJ_XQD_MID[i] as i32);
    }
  }

  #[test]
  fn sgrproj_default_keeps_ep() {
    let mut info = SgrprojInfo { ep: 9, xqd: [0, 0] };
    info.set_default();
    assert_eq!(info, SgrprojInfo { ep: 9, xqd: [-32, 31] });
  }
}

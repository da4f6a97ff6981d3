// Copyright (c) 2017-2024, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

//! Per-block coding context and reconstruction statistics.
//!
//! This crate holds the state an AV1 encoder and decoder must keep in lock
//! step while walking the blocks of a tile: the above/left "has residual"
//! entropy contexts, the neighbor intra modes used for mode coding, the
//! loop filter delta and loop restoration defaults, and two statistics
//! (a gradient-direction histogram and a variance) computed from the
//! reconstructed luma of each prediction block.
//!
//! Everything is driven through a [`BlockDescriptor`], built once per tile
//! from a validated [`BlockdConfig`].

#![deny(bare_trait_objects)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_ptr_alignment)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::too_many_arguments)]
#![warn(clippy::expl_impl_clone_on_copy)]
#![warn(clippy::linkedlist)]
#![warn(clippy::mutex_integer)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::path_buf_push_overwrite)]
#![warn(clippy::range_plus_one)]

#[macro_use]
extern crate log;

mod serialize {
  cfg_if::cfg_if! {
    if #[cfg(feature="serialize")] {
      pub use serde::*;
    } else {
      pub use noop_proc_macro::{Deserialize, Serialize};
    }
  }
}

pub mod color;
pub mod config;
pub mod context;
pub mod deblock;
pub mod frame;
pub mod lrf;
pub mod partition;
pub mod predict;
pub mod stats;
pub mod transform;
pub mod util;

pub use crate::color::ChromaSampling;
pub use crate::config::{BlockdConfig, InvalidConfig};
pub use crate::context::{Block, BlockDescriptor, PlaneDescriptor};
pub use crate::frame::{PlaneRegion, ReconRegion};
pub use crate::stats::StatsError;

/// Commonly used types and traits.
pub mod prelude {
  pub use crate::color::ChromaSampling;
  pub use crate::config::*;
  pub use crate::context::*;
  pub use crate::frame::*;
  pub use crate::partition::BlockSize;
  pub use crate::partition::RefType;
  pub use crate::predict::PredictionMode;
  pub use crate::stats::*;
  pub use crate::transform::TxSize;
  pub use crate::util::{CastFromPrimitive, Pixel, PixelType};
}

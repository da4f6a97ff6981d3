// Copyright (c) 2017-2019, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use num_traits::{AsPrimitive, PrimInt};
use std::fmt::{Debug, Display};

/// Trait for casting between primitive types.
pub trait CastFromPrimitive<T>: Copy + 'static {
  /// Casts the given value into `Self`.
  fn cast_from(v: T) -> Self;
}

macro_rules! impl_cast_from_primitive {
  ( $T:ty => $U:ty ) => {
    impl CastFromPrimitive<$U> for $T {
      #[inline(always)]
      fn cast_from(v: $U) -> Self { v as Self }
    }
  };
  ( $T:ty => { $( $U:ty ),* } ) => {
    $( impl_cast_from_primitive!($T => $U); )*
  };
}

// casts to { i32, i64, u64 } are implemented separately using Pixel, so that
// the compiler understands that CastFromPrimitive<T: Pixel> always holds
impl_cast_from_primitive!(u8 => { u32, usize, u16 });
impl_cast_from_primitive!(u16 => { u32, usize, u16 });

/// Sample storage width of a reconstruction buffer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum PixelType {
  /// 8 bits per pixel, stored in a `u8`.
  U8,
  /// 10 or 12 bits per pixel, stored in a `u16`.
  U16,
}

impl PixelType {
  /// Storage type implied by a sequence bit depth.
  #[inline]
  pub const fn from_bit_depth(bit_depth: usize) -> PixelType {
    if bit_depth > 8 {
      PixelType::U16
    } else {
      PixelType::U8
    }
  }
}

/// A type that can be used as a pixel type.
pub trait Pixel:
  PrimInt
  + CastFromPrimitive<u16>
  + Into<u32>
  + Into<i32>
  + AsPrimitive<i32>
  + AsPrimitive<i64>
  + AsPrimitive<u64>
  + Debug
  + Display
  + Send
  + Sync
  + 'static
{
  /// Returns a [`PixelType`] variant corresponding to this type.
  fn type_enum() -> PixelType;
}

impl Pixel for u8 {
  #[inline(always)]
  fn type_enum() -> PixelType {
    PixelType::U8
  }
}

impl Pixel for u16 {
  #[inline(always)]
  fn type_enum() -> PixelType {
    PixelType::U16
  }
}

macro_rules! impl_cast_from_pixel_to_primitive {
  ( $T:ty ) => {
    impl<T: Pixel> CastFromPrimitive<T> for $T {
      #[inline(always)]
      fn cast_from(v: T) -> Self {
        v.as_()
      }
    }
  };
}

impl_cast_from_pixel_to_primitive!(i32);
impl_cast_from_pixel_to_primitive!(i64);
impl_cast_from_pixel_to_primitive!(u64);

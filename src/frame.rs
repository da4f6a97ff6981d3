// Copyright (c) 2019-2022, The rav1e contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

//! Borrowed views over reconstructed pixels.

use crate::util::{Pixel, PixelType};

use std::iter::FusedIterator;
use std::ops::Index;

/// Read-only rectangular view into a row-major pixel buffer.
///
/// Row `y` starts at `data[y * stride]` and has `width` valid samples.
#[derive(Clone, Copy, Debug)]
pub struct PlaneRegion<'a, T: Pixel> {
  data: &'a [T],
  stride: usize,
  width: usize,
  height: usize,
}

impl<'a, T: Pixel> PlaneRegion<'a, T> {
  /// # Panics
  ///
  /// - If `width` exceeds `stride`.
  /// - If `data` is too short to hold `height` rows of `stride` samples
  ///   (the last row only needs `width`).
  #[inline]
  pub fn new(data: &'a [T], stride: usize, width: usize, height: usize) -> Self {
    assert!(width <= stride);
    if height > 0 {
      assert!(data.len() >= (height - 1) * stride + width);
    }
    PlaneRegion { data, stride, width, height }
  }

  #[inline(always)]
  pub const fn stride(&self) -> usize {
    self.stride
  }

  #[inline(always)]
  pub const fn width(&self) -> usize {
    self.width
  }

  #[inline(always)]
  pub const fn height(&self) -> usize {
    self.height
  }

  /// Return a view of the `width`x`height` rectangle whose top-left
  /// sample is at (`x`, `y`) in this region.
  ///
  /// # Panics
  ///
  /// - If the rectangle is not included in this region.
  pub fn subregion(
    &self, x: usize, y: usize, width: usize, height: usize,
  ) -> PlaneRegion<'a, T> {
    assert!(x + width <= self.width);
    assert!(y + height <= self.height);
    let origin = y * self.stride + x;
    let data = if height > 0 { &self.data[origin..] } else { &[] };
    PlaneRegion { data, stride: self.stride, width, height }
  }

  #[inline]
  pub fn rows_iter(&self) -> RowsIter<'a, T> {
    RowsIter { region: *self, row: 0 }
  }
}

impl<T: Pixel> Index<usize> for PlaneRegion<'_, T> {
  type Output = [T];

  #[inline(always)]
  fn index(&self, index: usize) -> &Self::Output {
    assert!(index < self.height);
    &self.data[index * self.stride..][..self.width]
  }
}

/// Iterator over plane region rows
pub struct RowsIter<'a, T: Pixel> {
  region: PlaneRegion<'a, T>,
  row: usize,
}

impl<'a, T: Pixel> Iterator for RowsIter<'a, T> {
  type Item = &'a [T];

  #[inline(always)]
  fn next(&mut self) -> Option<Self::Item> {
    if self.row < self.region.height {
      let data: &'a [T] = self.region.data;
      let row = &data[self.row * self.region.stride..][..self.region.width];
      self.row += 1;
      Some(row)
    } else {
      None
    }
  }

  #[inline(always)]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.region.height - self.row;
    (remaining, Some(remaining))
  }
}

impl<T: Pixel> ExactSizeIterator for RowsIter<'_, T> {}
impl<T: Pixel> FusedIterator for RowsIter<'_, T> {}

/// Reconstructed samples of one plane, tagged with their storage width.
///
/// 8-bit content is carried as `u8`, 10 and 12-bit content as `u16`. Both
/// variants go through the same arithmetic.
#[derive(Clone, Copy, Debug)]
pub enum ReconRegion<'a> {
  Narrow(PlaneRegion<'a, u8>),
  Wide(PlaneRegion<'a, u16>),
}

impl ReconRegion<'_> {
  #[inline]
  pub const fn pixel_type(&self) -> PixelType {
    match self {
      ReconRegion::Narrow(_) => PixelType::U8,
      ReconRegion::Wide(_) => PixelType::U16,
    }
  }

  #[inline]
  pub const fn width(&self) -> usize {
    match self {
      ReconRegion::Narrow(r) => r.width(),
      ReconRegion::Wide(r) => r.width(),
    }
  }

  #[inline]
  pub const fn height(&self) -> usize {
    match self {
      ReconRegion::Narrow(r) => r.height(),
      ReconRegion::Wide(r) => r.height(),
    }
  }
}

impl<'a> From<PlaneRegion<'a, u8>> for ReconRegion<'a> {
  fn from(region: PlaneRegion<'a, u8>) -> Self {
    ReconRegion::Narrow(region)
  }
}

impl<'a> From<PlaneRegion<'a, u16>> for ReconRegion<'a> {
  fn from(region: PlaneRegion<'a, u16>) -> Self {
    ReconRegion::Wide(region)
  }
}

// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use super::InterpolatorBuilder;
use super::Scale;
use super::scale::line;
use crate::sequence::XyData;

/// Linear, log-x, log-y or log-log interpolation over xy-values.
///
/// Looking up a y-value always extrapolates off the nearest end segment.
/// Looking up an x-value searches the y-values for a bracketing segment in
/// the configured direction and returns `0.0` when there is none.
///
/// # Examples
///
/// ```
/// use interval_data::interpolate::Interpolator;
///
/// let xs = [0.0, 1.0, 2.0];
/// let linear = Interpolator::builder().build();
/// assert_eq!(linear.find_y(&xs, &[0.0, 10.0, 20.0], 1.5), 15.0);
/// assert_eq!(linear.find_y(&xs, &[0.0, 10.0, 20.0], -1.0), -10.0);
///
/// let exceedance = Interpolator::builder().decreasing().build();
/// assert_eq!(exceedance.find_x(&xs, &[1.0, 0.5, 0.0], 0.75), 0.5);
/// assert_eq!(exceedance.find_x(&xs, &[1.0, 0.5, 0.0], 2.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpolator {
    scale: Scale,
    increasing: bool,
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::new(Scale::Linear, true)
    }
}

impl Interpolator {
    pub(super) fn new(scale: Scale, increasing: bool) -> Self {
        Self { scale, increasing }
    }

    /// Returns a builder for a linear interpolator over increasing y-values.
    pub fn builder() -> InterpolatorBuilder {
        InterpolatorBuilder::default()
    }

    /// Returns the axis transform.
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Returns true if x-value lookups search increasing y-values.
    pub fn is_increasing(&self) -> bool {
        self.increasing
    }

    /// Returns the x-value at `y` on the line through `(x1, y1)` and `(x2, y2)`.
    pub fn segment_x(x1: f64, y1: f64, x2: f64, y2: f64, y: f64) -> f64 {
        line(y1, x1, y2, x2, y)
    }

    /// Returns the y-value at `x` on the line through `(x1, y1)` and `(x2, y2)`.
    pub fn segment_y(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
        line(x1, y1, x2, y2, x)
    }

    /// Returns the interpolated x-value at `y`, or `0.0` if `y` is outside
    /// the range of `ys`.
    ///
    /// # Panics
    ///
    /// Panics if `xs` and `ys` differ in length or have fewer than two values.
    pub fn find_x(&self, xs: &[f64], ys: &[f64], y: f64) -> f64 {
        check_lengths(xs, ys);
        match linear_index(ys, y, self.increasing) {
            Some(i) => self.scale.x_at(xs[i], ys[i], xs[i + 1], ys[i + 1], y),
            None => 0.0,
        }
    }

    /// Returns the interpolated, or extrapolated, y-value at `x`.
    ///
    /// # Panics
    ///
    /// Panics if `xs` and `ys` differ in length or have fewer than two values.
    pub fn find_y(&self, xs: &[f64], ys: &[f64], x: f64) -> f64 {
        check_lengths(xs, ys);
        self.segment_at(xs, ys, x)
    }

    /// Returns the y-values at each of `targets`.
    ///
    /// # Panics
    ///
    /// Panics if `xs` and `ys` differ in length or have fewer than two values.
    pub fn find_y_all(&self, xs: &[f64], ys: &[f64], targets: &[f64]) -> Vec<f64> {
        check_lengths(xs, ys);
        targets.iter().map(|x| self.segment_at(xs, ys, *x)).collect()
    }

    /// Same as [`Interpolator::find_x`] over the points of `sequence`.
    pub fn find_x_in(&self, sequence: &impl XyData, y: f64) -> f64 {
        self.find_x(sequence.xs(), sequence.ys(), y)
    }

    /// Same as [`Interpolator::find_y`] over the points of `sequence`.
    pub fn find_y_in(&self, sequence: &impl XyData, x: f64) -> f64 {
        self.find_y(sequence.xs(), sequence.ys(), x)
    }

    fn segment_at(&self, xs: &[f64], ys: &[f64], x: f64) -> f64 {
        let i = binary_index(xs, x);
        self.scale.y_at(xs[i], ys[i], xs[i + 1], ys[i + 1], x)
    }
}

fn check_lengths(xs: &[f64], ys: &[f64]) {
    assert!(
        xs.len() == ys.len() && xs.len() > 1,
        "interpolation requires equally sized xs and ys with at least 2 values, got [{}] and [{}]",
        xs.len(),
        ys.len()
    );
}

/// Index of the lower end of the segment bracketing `target`, clamped to
/// `[0, len - 2]`.
fn binary_index(values: &[f64], target: f64) -> usize {
    values
        .partition_point(|v| *v <= target)
        .saturating_sub(1)
        .min(values.len() - 2)
}

/// Index of the first segment whose y-values bracket `target`, scanning
/// segment ends in the direction given by `increasing`.
fn linear_index(values: &[f64], target: f64, increasing: bool) -> Option<usize> {
    values.windows(2).position(|pair| {
        let (lo, hi) = if increasing {
            (pair[0], pair[1])
        } else {
            (pair[1], pair[0])
        };
        target >= lo && target <= hi
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_index_clamps() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(binary_index(&xs, -5.0), 0);
        assert_eq!(binary_index(&xs, 0.0), 0);
        assert_eq!(binary_index(&xs, 1.0), 1);
        assert_eq!(binary_index(&xs, 2.5), 2);
        assert_eq!(binary_index(&xs, 3.0), 2);
        assert_eq!(binary_index(&xs, 9.0), 2);
    }

    #[test]
    fn test_linear_index_direction() {
        let falling = [1.0, 0.5, 0.0];
        assert_eq!(linear_index(&falling, 0.75, false), Some(0));
        assert_eq!(linear_index(&falling, 0.25, false), Some(1));
        assert_eq!(linear_index(&falling, 0.75, true), None);
        assert_eq!(linear_index(&falling, 1.5, false), None);
    }

    #[test]
    #[should_panic(expected = "at least 2 values")]
    fn test_single_point_panics() {
        Interpolator::default().find_y(&[1.0], &[1.0], 1.0);
    }
}

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

//! Sequences of xy-value pairs that are iterable ascending in x.
//!
//! An [`XySequence`] owns its y-values and shares its x-values. Once created,
//! the x-values of a sequence never change, and copies made with
//! [`XySequence::copy_of`] or [`XySequence::empty_copy_of`] reuse the same
//! x-value allocation. Element-wise operations between two sequences require
//! the same x-values; sequences sharing an allocation pass that check
//! without comparing values.
//!
//! Interval containers hand out [`XyView`]s, immutable views over a slice of
//! their backing data keyed by one of their key arrays.
//!
//! # Usage
//!
//! ```rust
//! use interval_data::sequence::{XyData, XySequence};
//!
//! let mut seq = XySequence::create(&[1.0, 2.0, 3.0], Some(&[0.1, 0.2, 0.4])).unwrap();
//! let other = XySequence::copy_of(&seq);
//! seq.add_sequence(&other).unwrap().multiply(10.0).unwrap();
//! assert_eq!(seq.ys(), &[2.0, 4.0, 8.0]);
//!
//! let frozen = XySequence::create_immutable(&[1.0, 2.0], &[0.5, 0.5]).unwrap();
//! assert!(frozen.clone().complement().is_err());
//! ```

mod owned;
mod point;
mod view;

use std::sync::Arc;

pub use self::owned::XySequence;
pub use self::point::Points;
pub use self::point::PointsMut;
pub use self::point::XyPoint;
pub use self::point::XyPointMut;
pub use self::view::XyView;
use crate::error::Error;

mod private {
    pub trait Sealed {}
}

/// Read access shared by [`XySequence`] and [`XyView`].
///
/// This trait is sealed; it is implemented only by the sequence types of this
/// crate.
pub trait XyData: private::Sealed {
    /// Returns the x-values.
    fn xs(&self) -> &[f64];

    /// Returns the y-values.
    fn ys(&self) -> &[f64];

    /// Returns the shared x-value allocation.
    fn x_domain(&self) -> &Arc<[f64]>;

    /// Returns the number of points.
    fn len(&self) -> usize {
        self.xs().len()
    }

    /// Returns true if there are no points.
    fn is_empty(&self) -> bool {
        self.xs().is_empty()
    }

    /// Returns the x-value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
    /// if `index >= len()`.
    fn x(&self, index: usize) -> Result<f64, Error> {
        Error::check_index(index, self.len(), "x-value").map(|i| self.xs()[i])
    }

    /// Returns the y-value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
    /// if `index >= len()`.
    fn y(&self, index: usize) -> Result<f64, Error> {
        Error::check_index(index, self.len(), "y-value").map(|i| self.ys()[i])
    }

    /// Returns an iterator over the points, ascending in x.
    fn points(&self) -> Points<'_> {
        Points::new(self.xs(), self.ys())
    }
}

/// Checks that `that` spans the same x-values as `this`.
pub(crate) fn check_same_xs(this: &Arc<[f64]>, that: &Arc<[f64]>) -> Result<(), Error> {
    if crate::keys::same_keys(this, that) {
        Ok(())
    } else {
        Err(Error::invalid_argument("x-values of sequences do not match")
            .with_context("this", this.len())
            .with_context("that", that.len()))
    }
}

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

use std::fmt;
use std::sync::Arc;

use super::PointsMut;
use super::XyData;
use super::check_same_xs;
use super::private::Sealed;
use crate::common::check_monotonic;
use crate::error::Error;

/// An x-monotonic sequence of xy-value pairs.
///
/// Sequences are either mutable or immutable. Every mutating operation on an
/// immutable sequence fails with
/// [`ErrorKind::UnsupportedOperation`](crate::error::ErrorKind::UnsupportedOperation).
/// Mutating operations return `&mut Self` so that they can be chained with `?`.
///
/// # Examples
///
/// ```
/// use interval_data::sequence::{XyData, XySequence};
///
/// # fn main() -> Result<(), interval_data::error::Error> {
/// let mut seq = XySequence::create(&[0.0, 1.0, 2.0], None)?;
/// seq.add(0.25)?.complement()?;
/// assert_eq!(seq.ys(), &[0.75, 0.75, 0.75]);
/// for mut point in seq.points_mut()? {
///     let y = point.x() * point.y();
///     point.set(y);
/// }
/// assert_eq!(seq.ys(), &[0.0, 0.75, 1.5]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct XySequence {
    xs: Arc<[f64]>,
    ys: Vec<f64>,
    mutable: bool,
}

impl XySequence {
    /// Creates a mutable sequence. Missing `ys` are initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
    /// if `xs` has fewer than two values, if `ys` is supplied with a different
    /// length, or if `xs` does not increase strictly.
    pub fn create(xs: &[f64], ys: Option<&[f64]>) -> Result<Self, Error> {
        let ys = match ys {
            Some(ys) => ys.to_vec(),
            None => vec![0.0; xs.len()],
        };
        Self::validated(Arc::from(xs), ys, true)
    }

    /// Creates an immutable sequence.
    ///
    /// # Errors
    ///
    /// Fails for the same reasons as [`XySequence::create`].
    pub fn create_immutable(xs: &[f64], ys: &[f64]) -> Result<Self, Error> {
        Self::validated(Arc::from(xs), ys.to_vec(), false)
    }

    /// Creates a mutable copy of `sequence` that shares its x-values.
    pub fn copy_of(sequence: &impl XyData) -> Self {
        Self::from_parts(sequence.x_domain().clone(), sequence.ys().to_vec(), true)
    }

    /// Creates a mutable sequence with the x-values of `sequence` and all
    /// y-values zero.
    pub fn empty_copy_of(sequence: &impl XyData) -> Self {
        Self::from_parts(
            sequence.x_domain().clone(),
            vec![0.0; sequence.len()],
            true,
        )
    }

    /// Creates an immutable copy of `sequence` that shares its x-values.
    pub fn immutable_copy_of(sequence: &impl XyData) -> Self {
        Self::from_parts(sequence.x_domain().clone(), sequence.ys().to_vec(), false)
    }

    fn validated(xs: Arc<[f64]>, ys: Vec<f64>, mutable: bool) -> Result<Self, Error> {
        if xs.len() < 2 {
            return Err(Error::invalid_argument(format!(
                "x-values must have more than one value, got [{}]",
                xs.len()
            )));
        }
        if xs.len() != ys.len() {
            return Err(Error::invalid_argument(format!(
                "x-values and y-values are different sizes: [{}] != [{}]",
                xs.len(),
                ys.len()
            )));
        }
        check_monotonic(&xs, "x-values")?;
        Ok(Self::from_parts(xs, ys, mutable))
    }

    /// Wraps already validated keys, such as those of a container dimension.
    pub(crate) fn from_parts(xs: Arc<[f64]>, ys: Vec<f64>, mutable: bool) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        Self { xs, ys, mutable }
    }

    /// Returns true if this sequence supports mutating operations.
    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    fn check_mutable(&self, operation: &'static str) -> Result<(), Error> {
        if self.mutable {
            Ok(())
        } else {
            Err(Error::unsupported(operation))
        }
    }

    fn mutate(
        &mut self,
        operation: &'static str,
        f: impl FnMut(&mut f64),
    ) -> Result<&mut Self, Error> {
        self.check_mutable(operation)?;
        self.ys.iter_mut().for_each(f);
        Ok(self)
    }

    fn combine(
        &mut self,
        operation: &'static str,
        other: &impl XyData,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<&mut Self, Error> {
        self.check_mutable(operation)?;
        check_same_xs(&self.xs, other.x_domain())?;
        for (y, that) in self.ys.iter_mut().zip(other.ys()) {
            *y = f(*y, *that);
        }
        Ok(self)
    }

    /// Sets the y-value at `index`.
    ///
    /// # Errors
    ///
    /// Fails with `UnsupportedOperation` if immutable and with
    /// `IndexOutOfRange` if `index >= len()`.
    pub fn set(&mut self, index: usize, y: f64) -> Result<&mut Self, Error> {
        self.check_mutable("set")?;
        let index = Error::check_index(index, self.ys.len(), "y-value")?;
        self.ys[index] = y;
        Ok(self)
    }

    /// Adds `term` to every y-value.
    pub fn add(&mut self, term: f64) -> Result<&mut Self, Error> {
        self.mutate("add", |y| *y += term)
    }

    /// Adds the y-values of `other`, which must have the same x-values.
    pub fn add_sequence(&mut self, other: &impl XyData) -> Result<&mut Self, Error> {
        self.combine("add", other, |a, b| a + b)
    }

    /// Multiplies every y-value by `scale`.
    pub fn multiply(&mut self, scale: f64) -> Result<&mut Self, Error> {
        self.mutate("multiply", |y| *y *= scale)
    }

    /// Multiplies by the y-values of `other`, which must have the same x-values.
    pub fn multiply_sequence(&mut self, other: &impl XyData) -> Result<&mut Self, Error> {
        self.combine("multiply", other, |a, b| a * b)
    }

    /// Sets every y-value to `1 - y`.
    ///
    /// The y-values are assumed to be probabilities; values outside `[0, 1]`
    /// are not rejected.
    pub fn complement(&mut self) -> Result<&mut Self, Error> {
        self.mutate("complement", |y| *y = 1.0 - *y)
    }

    /// Sets every y-value to zero.
    pub fn clear(&mut self) -> Result<&mut Self, Error> {
        self.mutate("clear", |y| *y = 0.0)
    }

    /// Replaces every y-value with `function(y)`.
    pub fn transform(&mut self, mut function: impl FnMut(f64) -> f64) -> Result<&mut Self, Error> {
        self.mutate("transform", |y| *y = function(*y))
    }

    /// Returns an iterator over writable points.
    ///
    /// # Errors
    ///
    /// Fails with `UnsupportedOperation` if immutable.
    pub fn points_mut(&mut self) -> Result<PointsMut<'_>, Error> {
        self.check_mutable("points_mut")?;
        Ok(PointsMut::new(&self.xs, &mut self.ys))
    }
}

impl Sealed for XySequence {}

impl XyData for XySequence {
    fn xs(&self) -> &[f64] {
        &self.xs
    }

    fn ys(&self) -> &[f64] {
        &self.ys
    }

    fn x_domain(&self) -> &Arc<[f64]> {
        &self.xs
    }
}

/// Sequences are equal when their points are equal, regardless of mutability.
impl PartialEq for XySequence {
    fn eq(&self, other: &Self) -> bool {
        self.xs[..] == other.xs[..] && self.ys == other.ys
    }
}

impl fmt::Display for XySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XySequence:")?;
        for point in self.points() {
            write!(f, "\n{point}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_copies_share_xs() {
        let seq = XySequence::create(&[1.0, 2.0], Some(&[3.0, 4.0])).unwrap();
        let copy = XySequence::copy_of(&seq);
        let empty = XySequence::empty_copy_of(&seq);
        let frozen = XySequence::immutable_copy_of(&seq);
        assert!(Arc::ptr_eq(&seq.xs, &copy.xs));
        assert!(Arc::ptr_eq(&seq.xs, &empty.xs));
        assert!(Arc::ptr_eq(&seq.xs, &frozen.xs));
        assert_eq!(empty.ys, vec![0.0, 0.0]);
        assert!(!frozen.is_mutable());
    }

    #[test]
    fn test_immutable_rejects_every_mutation() {
        let mut seq = XySequence::create_immutable(&[1.0, 2.0], &[0.5, 0.5]).unwrap();
        let other = XySequence::copy_of(&seq);
        let results = [
            seq.set(0, 1.0).map(|_| ()),
            seq.add(1.0).map(|_| ()),
            seq.add_sequence(&other).map(|_| ()),
            seq.multiply(1.0).map(|_| ()),
            seq.multiply_sequence(&other).map(|_| ()),
            seq.complement().map(|_| ()),
            seq.clear().map(|_| ()),
            seq.transform(|y| y).map(|_| ()),
            seq.points_mut().map(|_| ()),
        ];
        for result in results {
            assert_eq!(result.unwrap_err().kind(), ErrorKind::UnsupportedOperation);
        }
        assert_eq!(seq.ys, vec![0.5, 0.5]);
    }

    #[test]
    fn test_display() {
        let seq = XySequence::create(&[1.0, 2.5], Some(&[0.0, 1.0])).unwrap();
        assert_eq!(seq.to_string(), "XySequence:\n[1, 0]\n[2.5, 1]");
    }
}

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
use std::iter::Zip;
use std::slice::Iter;
use std::slice::IterMut;

/// An immutable xy-value pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyPoint {
    x: f64,
    y: f64,
}

impl XyPoint {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-value.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y-value.
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for XyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// A point whose y-value writes through to the sequence it was taken from.
#[derive(Debug)]
pub struct XyPointMut<'a> {
    x: f64,
    y: &'a mut f64,
}

impl XyPointMut<'_> {
    /// Returns the x-value.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y-value.
    pub fn y(&self) -> f64 {
        *self.y
    }

    /// Sets the y-value in the backing sequence.
    pub fn set(&mut self, y: f64) {
        *self.y = y;
    }
}

/// Iterator over the points of a sequence.
#[derive(Debug, Clone)]
pub struct Points<'a> {
    inner: Zip<Iter<'a, f64>, Iter<'a, f64>>,
}

impl<'a> Points<'a> {
    pub(crate) fn new(xs: &'a [f64], ys: &'a [f64]) -> Self {
        Self {
            inner: xs.iter().zip(ys.iter()),
        }
    }
}

impl Iterator for Points<'_> {
    type Item = XyPoint;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(x, y)| XyPoint::new(*x, *y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Points<'_> {}

/// Iterator over the writable points of a mutable sequence.
#[derive(Debug)]
pub struct PointsMut<'a> {
    inner: Zip<Iter<'a, f64>, IterMut<'a, f64>>,
}

impl<'a> PointsMut<'a> {
    pub(crate) fn new(xs: &'a [f64], ys: &'a mut [f64]) -> Self {
        Self {
            inner: xs.iter().zip(ys.iter_mut()),
        }
    }
}

impl<'a> Iterator for PointsMut<'a> {
    type Item = XyPointMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(x, y)| XyPointMut { x: *x, y })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for PointsMut<'_> {}

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

use super::IntervalArrayBuilder;
use crate::common::grid_line;
use crate::common::key_cell;
use crate::common::max_index;
use crate::common::min_index;
use crate::common::value_cell;
use crate::error::Error;
use crate::keys::Bins;
use crate::sequence::XyView;

/// An immutable, one-dimensional array of values binned by row.
///
/// Arrays are created with an [`IntervalArrayBuilder`].
///
/// # Examples
///
/// ```
/// use interval_data::array::IntervalArray;
///
/// let mut builder = IntervalArray::builder();
/// builder.rows(0.0, 10.0, 2.0).unwrap().add(3.0, 5.0).unwrap();
/// let array = builder.build().unwrap();
///
/// assert_eq!(array.rows(), &[1.0, 3.0, 5.0, 7.0, 9.0]);
/// assert_eq!(array.get(3.0).unwrap(), 5.0);
/// assert_eq!(array.get_at(1).unwrap(), 5.0);
/// assert_eq!(array.sum(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalArray {
    pub(crate) rows: Bins,
    pub(crate) data: Box<[f64]>,
}

impl IntervalArray {
    /// Returns a new, empty builder.
    pub fn builder() -> IntervalArrayBuilder {
        IntervalArrayBuilder::default()
    }

    /// Returns the value of the bin that contains `row`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
    /// if `row` is outside the row bins.
    pub fn get(&self, row: f64) -> Result<f64, Error> {
        self.rows.index_of(row).map(|i| self.data[i])
    }

    /// Returns the value of the bin at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
    /// if `index >= len()`.
    pub fn get_at(&self, index: usize) -> Result<f64, Error> {
        Error::check_index(index, self.data.len(), "row").map(|i| self.data[i])
    }

    /// Returns the lower edge of the lowermost row bin.
    pub fn row_min(&self) -> f64 {
        self.rows.min()
    }

    /// Returns the upper edge of the uppermost row bin as supplied.
    pub fn row_max(&self) -> f64 {
        self.rows.max()
    }

    /// Returns the row bin width.
    pub fn row_delta(&self) -> f64 {
        self.rows.delta()
    }

    /// Returns the row keys (bin centers).
    pub fn rows(&self) -> &[f64] {
        self.rows.keys()
    }

    /// Returns the row bin specification.
    pub fn row_bins(&self) -> &Bins {
        &self.rows
    }

    /// Returns the number of bins.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; an array has at least one bin.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a view of the values keyed by row.
    pub fn values(&self) -> XyView<'_> {
        XyView::new(self.rows.shared_keys(), &self.data)
    }

    /// Returns the sum of all bins.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Returns the index of the bin with the smallest value.
    pub fn min_index(&self) -> usize {
        min_index(&self.data)
    }

    /// Returns the index of the bin with the largest value.
    pub fn max_index(&self) -> usize {
        max_index(&self.data)
    }
}

impl fmt::Display for IntervalArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", grid_line(self.rows(), key_cell))?;
        writeln!(f, "{}", grid_line(&self.data, value_cell))
    }
}

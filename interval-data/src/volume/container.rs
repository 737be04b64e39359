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

use super::IntervalVolumeBuilder;
use crate::error::Error;
use crate::keys::Bins;
use crate::sequence::XyView;
use crate::storage::Storage;
use crate::table::IntervalTable;

/// An immutable, three-dimensional volume of values binned by row, column
/// and level.
///
/// Volumes are created with an [`IntervalVolumeBuilder`]. In volume terms a
/// column is the sequence of values at a fixed `(row, column)` pair, keyed by
/// level.
///
/// # Examples
///
/// ```
/// use interval_data::sequence::XyData;
/// use interval_data::volume::IntervalVolumeBuilder;
///
/// # fn main() -> Result<(), interval_data::error::Error> {
/// let mut builder = IntervalVolumeBuilder::create();
/// builder
///     .rows(0.0, 2.0, 1.0)?
///     .columns(0.0, 2.0, 1.0)?
///     .levels(0.0, 3.0, 1.0)?;
/// builder.add_column(1.5, 0.5, &[1.0, 2.0, 3.0])?;
/// let volume = builder.build()?;
///
/// assert_eq!(volume.get(1.0, 0.0, 2.9)?, 3.0);
/// assert_eq!(volume.column(1.0, 0.0)?.ys(), &[1.0, 2.0, 3.0]);
/// assert_eq!(volume.collapse().get_at(1, 0)?, 6.0);
/// assert_eq!(volume.max_index(), (1, 0, 2));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalVolume {
    pub(crate) rows: Bins,
    pub(crate) columns: Bins,
    pub(crate) levels: Bins,
    pub(crate) storage: Storage,
}

impl IntervalVolume {
    /// Returns a new, empty builder.
    pub fn builder() -> IntervalVolumeBuilder {
        IntervalVolumeBuilder::create()
    }

    fn flat(&self, row: usize, column: usize, level: usize) -> usize {
        (row * self.columns.len() + column) * self.levels.len() + level
    }

    pub(crate) fn cells(&self) -> usize {
        self.rows.len() * self.columns.len() * self.levels.len()
    }

    /// Returns the value of the cell that contains `(row, column, level)`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
    /// if any value is outside its bins.
    pub fn get(&self, row: f64, column: f64, level: f64) -> Result<f64, Error> {
        let row = self.rows.index_of(row)?;
        let column = self.columns.index_of(column)?;
        let level = self.levels.index_of(level)?;
        Ok(self.storage.get(self.flat(row, column, level)))
    }

    /// Returns the value of the cell at `(row, column, level)` indices.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
    /// if any index is out of bounds.
    pub fn get_at(&self, row: usize, column: usize, level: usize) -> Result<f64, Error> {
        let row = Error::check_index(row, self.rows.len(), "row")?;
        let column = Error::check_index(column, self.columns.len(), "column")?;
        let level = Error::check_index(level, self.levels.len(), "level")?;
        Ok(self.storage.get(self.flat(row, column, level)))
    }

    /// Returns a view of the levels at the `(row, column)` cell that contains
    /// the supplied values.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
    /// if either value is outside its bins.
    pub fn column(&self, row: f64, column: f64) -> Result<XyView<'_>, Error> {
        let row = self.rows.index_of(row)?;
        let column = self.columns.index_of(column)?;
        Ok(self.column_view(row, column))
    }

    /// Returns a view of the levels at `(row, column)` indices.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
    /// if either index is out of bounds.
    pub fn column_at(&self, row: usize, column: usize) -> Result<XyView<'_>, Error> {
        let row = Error::check_index(row, self.rows.len(), "row")?;
        let column = Error::check_index(column, self.columns.len(), "column")?;
        Ok(self.column_view(row, column))
    }

    fn column_view(&self, row: usize, column: usize) -> XyView<'_> {
        let start = self.flat(row, column, 0);
        XyView::new(
            self.levels.shared_keys(),
            self.storage.run(start, self.levels.len()),
        )
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

    /// Returns the row keys.
    pub fn rows(&self) -> &[f64] {
        self.rows.keys()
    }

    /// Returns the row bin specification.
    pub fn row_bins(&self) -> &Bins {
        &self.rows
    }

    /// Returns the lower edge of the lowermost column bin.
    pub fn column_min(&self) -> f64 {
        self.columns.min()
    }

    /// Returns the upper edge of the uppermost column bin as supplied.
    pub fn column_max(&self) -> f64 {
        self.columns.max()
    }

    /// Returns the column bin width.
    pub fn column_delta(&self) -> f64 {
        self.columns.delta()
    }

    /// Returns the column keys.
    pub fn columns(&self) -> &[f64] {
        self.columns.keys()
    }

    /// Returns the column bin specification.
    pub fn column_bins(&self) -> &Bins {
        &self.columns
    }

    /// Returns the lower edge of the lowermost level bin.
    pub fn level_min(&self) -> f64 {
        self.levels.min()
    }

    /// Returns the upper edge of the uppermost level bin as supplied.
    pub fn level_max(&self) -> f64 {
        self.levels.max()
    }

    /// Returns the level bin width.
    pub fn level_delta(&self) -> f64 {
        self.levels.delta()
    }

    /// Returns the level keys.
    pub fn levels(&self) -> &[f64] {
        self.levels.keys()
    }

    /// Returns the level bin specification.
    pub fn level_bins(&self) -> &Bins {
        &self.levels
    }

    /// Returns true if every cell shares one value.
    pub fn is_singular(&self) -> bool {
        self.storage.is_singular()
    }

    /// Returns the sum of all cells.
    pub fn sum(&self) -> f64 {
        self.storage.sum(self.cells())
    }

    /// Sums the levels of each column into a table over the same rows and
    /// columns. A singular volume collapses to a singular table.
    pub fn collapse(&self) -> IntervalTable {
        let levels = self.levels.len();
        let storage = match &self.storage {
            Storage::Singular { value, .. } => {
                Storage::singular(value * levels as f64, self.columns.len())
            }
            dense => Storage::Dense(dense.collapse(self.cells(), levels).into_boxed_slice()),
        };
        IntervalTable {
            rows: self.rows.clone(),
            columns: self.columns.clone(),
            storage,
        }
    }

    /// Returns the `(row, column, level)` indices of the smallest cell, first
    /// encountered in row-major order on ties.
    pub fn min_index(&self) -> (usize, usize, usize) {
        self.unflatten(self.storage.min_index())
    }

    /// Returns the `(row, column, level)` indices of the largest cell, first
    /// encountered in row-major order on ties.
    pub fn max_index(&self) -> (usize, usize, usize) {
        self.unflatten(self.storage.max_index())
    }

    fn unflatten(&self, index: usize) -> (usize, usize, usize) {
        let levels = self.levels.len();
        let columns = self.columns.len();
        let level = index % levels;
        let column = (index / levels) % columns;
        let row = index / (levels * columns);
        (row, column, level)
    }
}

/// Nested lists of levels, one block of columns per row.
impl fmt::Display for IntervalVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows.len() {
            if row > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for column in 0..self.columns.len() {
                if column > 0 {
                    write!(f, ",\n  ")?;
                }
                let start = self.flat(row, column, 0);
                write!(f, "{:?}", self.storage.run(start, self.levels.len()))?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

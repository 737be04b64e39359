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

use super::IntervalTableBuilder;
use crate::array::IntervalArray;
use crate::common::grid_line;
use crate::common::key_cell;
use crate::common::value_cell;
use crate::error::Error;
use crate::keys::Bins;
use crate::sequence::XyData;
use crate::sequence::XyView;
use crate::storage::Storage;

/// An immutable, two-dimensional table of values binned by row and column.
///
/// Tables are created with an [`IntervalTableBuilder`]. A table is either
/// dense, with one value per cell, or singular, with one value shared by
/// every cell.
///
/// # Examples
///
/// ```
/// use interval_data::sequence::XyData;
/// use interval_data::table::IntervalTableBuilder;
///
/// # fn main() -> Result<(), interval_data::error::Error> {
/// let mut builder = IntervalTableBuilder::create();
/// builder.rows(0.0, 3.0, 1.0)?.columns(10.0, 20.0, 5.0)?;
/// builder.set(1.2, 17.0, 4.0)?.add_at(0, 0, 1.0)?;
/// let table = builder.build()?;
///
/// assert_eq!(table.get(1.9, 15.0)?, 4.0);
/// assert_eq!(table.get_at(0, 0)?, 1.0);
/// assert_eq!(table.row(1.0)?.ys(), &[0.0, 4.0]);
/// assert_eq!(table.collapse().values().ys(), &[1.0, 4.0, 0.0]);
/// assert_eq!(table.max_index(), (1, 1));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTable {
    pub(crate) rows: Bins,
    pub(crate) columns: Bins,
    pub(crate) storage: Storage,
}

impl IntervalTable {
    /// Returns a new, empty builder.
    pub fn builder() -> IntervalTableBuilder {
        IntervalTableBuilder::create()
    }

    fn flat(&self, row: usize, column: usize) -> usize {
        row * self.columns.len() + column
    }

    /// Returns the value of the cell that contains `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
    /// if either value is outside its bins.
    pub fn get(&self, row: f64, column: f64) -> Result<f64, Error> {
        let row = self.rows.index_of(row)?;
        let column = self.columns.index_of(column)?;
        Ok(self.storage.get(self.flat(row, column)))
    }

    /// Returns the value of the cell at `(row, column)` indices.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
    /// if either index is out of bounds.
    pub fn get_at(&self, row: usize, column: usize) -> Result<f64, Error> {
        let row = Error::check_index(row, self.rows.len(), "row")?;
        let column = Error::check_index(column, self.columns.len(), "column")?;
        Ok(self.storage.get(self.flat(row, column)))
    }

    /// Returns a view of the row that contains `row`, keyed by column.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
    /// if `row` is outside the row bins.
    pub fn row(&self, row: f64) -> Result<XyView<'_>, Error> {
        let index = self.rows.index_of(row)?;
        Ok(self.row_view(index))
    }

    /// Returns a view of the row at `index`, keyed by column.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
    /// if `index` is out of bounds.
    pub fn row_at(&self, index: usize) -> Result<XyView<'_>, Error> {
        let index = Error::check_index(index, self.rows.len(), "row")?;
        Ok(self.row_view(index))
    }

    fn row_view(&self, index: usize) -> XyView<'_> {
        let len = self.columns.len();
        XyView::new(
            self.columns.shared_keys(),
            self.storage.run(index * len, len),
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

    /// Returns true if every cell shares one value.
    pub fn is_singular(&self) -> bool {
        self.storage.is_singular()
    }

    /// Returns the sum of all cells.
    pub fn sum(&self) -> f64 {
        self.storage.sum(self.rows.len() * self.columns.len())
    }

    /// Sums each row into an array over the same row bins.
    pub fn collapse(&self) -> IntervalArray {
        let cells = self.rows.len() * self.columns.len();
        IntervalArray {
            rows: self.rows.clone(),
            data: self
                .storage
                .collapse(cells, self.columns.len())
                .into_boxed_slice(),
        }
    }

    /// Returns the `(row, column)` indices of the smallest cell, first
    /// encountered in row-major order on ties.
    pub fn min_index(&self) -> (usize, usize) {
        self.unflatten(self.storage.min_index())
    }

    /// Returns the `(row, column)` indices of the largest cell, first
    /// encountered in row-major order on ties.
    pub fn max_index(&self) -> (usize, usize) {
        self.unflatten(self.storage.max_index())
    }

    fn unflatten(&self, index: usize) -> (usize, usize) {
        let columns = self.columns.len();
        (index / columns, index % columns)
    }

    /// Bilinear interpolation between the four cells whose keys surround
    /// `(row, column)`.
    ///
    /// Outside the outermost keys the nearest edge value is used; this method
    /// never extrapolates and never fails.
    pub fn interpolate(&self, row: f64, column: f64) -> f64 {
        let (r0, r1, row_fraction) = bracket(self.rows.keys(), row);
        let (c0, c1, column_fraction) = bracket(self.columns.keys(), column);
        let upper = lerp(
            self.storage.get(self.flat(r0, c0)),
            self.storage.get(self.flat(r0, c1)),
            column_fraction,
        );
        let lower = lerp(
            self.storage.get(self.flat(r1, c0)),
            self.storage.get(self.flat(r1, c1)),
            column_fraction,
        );
        lerp(upper, lower, row_fraction)
    }
}

fn lerp(a: f64, b: f64, fraction: f64) -> f64 {
    a + fraction * (b - a)
}

/// Indices of the keys bracketing `value` and the clamped fraction of the way
/// from the first to the second.
fn bracket(keys: &[f64], value: f64) -> (usize, usize, f64) {
    if keys.len() < 2 {
        return (0, 0, 0.0);
    }
    let i = keys
        .partition_point(|k| *k <= value)
        .saturating_sub(1)
        .min(keys.len() - 2);
    let (lo, hi) = (keys[i], keys[i + 1]);
    let fraction = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
    (i, i + 1, fraction)
}

impl fmt::Display for IntervalTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:11}{}", "", grid_line(self.columns(), key_cell))?;
        for (i, row) in self.rows().iter().enumerate() {
            let values = self.row_view(i);
            writeln!(
                f,
                "[{}] {}",
                key_cell(*row),
                grid_line(values.ys(), value_cell)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket() {
        let keys = [0.5, 1.5, 2.5];
        assert_eq!(bracket(&keys, 1.0), (0, 1, 0.5));
        assert_eq!(bracket(&keys, 0.0), (0, 1, 0.0));
        assert_eq!(bracket(&keys, 2.5), (1, 2, 1.0));
        assert_eq!(bracket(&keys, 9.0), (1, 2, 1.0));
        assert_eq!(bracket(&[0.5], 9.0), (0, 0, 0.0));
    }
}

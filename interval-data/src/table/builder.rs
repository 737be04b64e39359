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

use super::IntervalTable;
use crate::common::check_run;
use crate::common::unchecked_add;
use crate::error::Error;
use crate::error::ErrorKind;
use crate::keys::Bins;
use crate::keys::specified;
use crate::sequence::XyData;
use crate::storage::Storage;

/// A single-use builder of [`IntervalTable`]s.
///
/// Rows and columns may be defined in either order; the backing data is
/// allocated once both are known. The `build*` methods consume the builder:
///
/// ```compile_fail
/// use interval_data::table::IntervalTableBuilder;
///
/// let mut builder = IntervalTableBuilder::create();
/// builder.rows(0.0, 1.0, 0.5).unwrap().columns(0.0, 1.0, 0.5).unwrap();
/// let first = builder.build().unwrap();
/// let second = builder.build().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct IntervalTableBuilder {
    rows: Option<Bins>,
    columns: Option<Bins>,
    data: Option<Vec<f64>>,
}

impl IntervalTableBuilder {
    /// Creates an empty builder.
    pub fn create() -> Self {
        Self::default()
    }

    /// Creates a builder with the same rows and columns as `model` and all
    /// values zero. A singular model yields a dense builder.
    pub fn from_model(model: &IntervalTable) -> Self {
        let cells = model.rows.len() * model.columns.len();
        Self::initialized(model, vec![0.0; cells])
    }

    /// Creates a builder with the same rows, columns and values as `table`.
    /// A singular table is expanded to one value per cell.
    pub fn copy_of(table: &IntervalTable) -> Self {
        let cells = table.rows.len() * table.columns.len();
        Self::initialized(table, table.storage.to_dense(cells))
    }

    fn initialized(table: &IntervalTable, data: Vec<f64>) -> Self {
        Self {
            rows: Some(table.rows.clone()),
            columns: Some(table.columns.clone()),
            data: Some(data),
        }
    }

    /// Defines the row bins.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if the bins are invalid and with
    /// `IllegalState` if the data have already been allocated.
    pub fn rows(&mut self, min: f64, max: f64, delta: f64) -> Result<&mut Self, Error> {
        self.check_uninitialized()?;
        self.rows = Some(Bins::new(min, max, delta)?);
        self.init();
        Ok(self)
    }

    /// Defines the column bins.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if the bins are invalid and with
    /// `IllegalState` if the data have already been allocated.
    pub fn columns(&mut self, min: f64, max: f64, delta: f64) -> Result<&mut Self, Error> {
        self.check_uninitialized()?;
        self.columns = Some(Bins::new(min, max, delta)?);
        self.init();
        Ok(self)
    }

    fn check_uninitialized(&self) -> Result<(), Error> {
        match self.data {
            Some(_) => Err(Error::already_initialized()),
            None => Ok(()),
        }
    }

    fn init(&mut self) {
        if let (Some(rows), Some(columns)) = (&self.rows, &self.columns) {
            tracing::trace!(
                rows = rows.len(),
                columns = columns.len(),
                "allocating table data"
            );
            self.data = Some(vec![0.0; rows.len() * columns.len()]);
        }
    }

    fn row_bins(&self) -> Result<&Bins, Error> {
        specified(&self.rows, "Row")
    }

    fn column_bins(&self) -> Result<&Bins, Error> {
        specified(&self.columns, "Column")
    }

    /// Returns the index of the row bin that contains `row`.
    ///
    /// # Errors
    ///
    /// Fails with `IllegalState` if the rows are undefined and with
    /// `IndexOutOfRange` if `row` is outside the bins.
    pub fn row_index(&self, row: f64) -> Result<usize, Error> {
        self.row_bins()?.index_of(row)
    }

    /// Returns the index of the column bin that contains `column`.
    ///
    /// # Errors
    ///
    /// Fails with `IllegalState` if the columns are undefined and with
    /// `IndexOutOfRange` if `column` is outside the bins.
    pub fn column_index(&self, column: f64) -> Result<usize, Error> {
        self.column_bins()?.index_of(column)
    }

    fn data_mut(&mut self) -> Result<&mut [f64], Error> {
        match self.data.as_deref_mut() {
            Some(data) => Ok(data),
            None if self.rows.is_none() => Err(Error::unspecified("Row")),
            None => Err(Error::unspecified("Column")),
        }
    }

    /// Returns the flat index of a checked `(row, column)` pair.
    fn flat(&self, row: usize, column: usize) -> Result<usize, Error> {
        let rows = self.row_bins()?.len();
        let columns = self.column_bins()?.len();
        let row = Error::check_index(row, rows, "row")?;
        let column = Error::check_index(column, columns, "column")?;
        Ok(row * columns + column)
    }

    /// Sets the value of the cell that contains `(row, column)`.
    pub fn set(&mut self, row: f64, column: f64, value: f64) -> Result<&mut Self, Error> {
        let row = self.row_index(row)?;
        let column = self.column_index(column)?;
        self.set_at(row, column, value)
    }

    /// Sets the value of the cell at `(row, column)` indices.
    pub fn set_at(&mut self, row: usize, column: usize, value: f64) -> Result<&mut Self, Error> {
        let index = self.flat(row, column)?;
        self.data_mut()?[index] = value;
        Ok(self)
    }

    /// Adds to the value of the cell that contains `(row, column)`.
    pub fn add(&mut self, row: f64, column: f64, value: f64) -> Result<&mut Self, Error> {
        let row = self.row_index(row)?;
        let column = self.column_index(column)?;
        self.add_at(row, column, value)
    }

    /// Adds to the value of the cell at `(row, column)` indices.
    pub fn add_at(&mut self, row: usize, column: usize, value: f64) -> Result<&mut Self, Error> {
        let index = self.flat(row, column)?;
        self.data_mut()?[index] += value;
        Ok(self)
    }

    /// Adds `values` to the row that contains `row`, starting at the first
    /// column.
    ///
    /// # Errors
    ///
    /// Fails with `IndexOutOfRange` if there are more values than columns.
    pub fn add_row(&mut self, row: f64, values: &[f64]) -> Result<&mut Self, Error> {
        let row = self.row_index(row)?;
        self.add_run(row, 0, values)
    }

    /// Adds the y-values of `sequence` to the row that contains `row`,
    /// starting at the first column. The x-values are ignored.
    pub fn add_row_sequence(&mut self, row: f64, sequence: &impl XyData) -> Result<&mut Self, Error> {
        self.add_row(row, sequence.ys())
    }

    /// Adds `values` to the row that contains `row`, starting at the column
    /// that contains `column`.
    ///
    /// # Errors
    ///
    /// Fails with `IndexOutOfRange` if the values overrun the last column.
    pub fn add_from(&mut self, row: f64, column: f64, values: &[f64]) -> Result<&mut Self, Error> {
        let row = self.row_index(row)?;
        let column = self.column_index(column)?;
        self.add_run(row, column, values)
    }

    fn add_run(&mut self, row: usize, column: usize, values: &[f64]) -> Result<&mut Self, Error> {
        let columns = self.column_bins()?.len();
        check_run(column, values.len(), columns, "row")?;
        let start = self.flat(row, column)?;
        unchecked_add(&mut self.data_mut()?[start..start + values.len()], values);
        Ok(self)
    }

    /// Adds the values of `table` cell by cell. A singular table adds its
    /// value to every cell.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if `table` has different rows or columns.
    pub fn add_table(&mut self, table: &IntervalTable) -> Result<&mut Self, Error> {
        self.row_bins()?.check_same_domain(&table.rows, "Row")?;
        self.column_bins()?.check_same_domain(&table.columns, "Column")?;
        table.storage.add_into(self.data_mut()?);
        Ok(self)
    }

    /// Multiplies all values by `scale`.
    pub fn multiply(&mut self, scale: f64) -> Result<&mut Self, Error> {
        self.data_mut()?.iter_mut().for_each(|v| *v *= scale);
        Ok(self)
    }

    /// Builds the table, handing over the backing data.
    ///
    /// # Errors
    ///
    /// Fails with `IllegalState` if the rows or columns are undefined.
    pub fn build(self) -> Result<IntervalTable, Error> {
        match self {
            Self {
                rows: Some(rows),
                columns: Some(columns),
                data: Some(data),
            } => {
                let storage = Storage::Dense(data.into_boxed_slice());
                tracing::trace!(
                    rows = rows.len(),
                    columns = columns.len(),
                    backing = storage.kind(),
                    "building interval table"
                );
                Ok(IntervalTable {
                    rows,
                    columns,
                    storage,
                })
            }
            Self { rows: None, .. } => Err(Error::unspecified("Row")),
            Self { .. } => Err(Error::unspecified("Column")),
        }
    }

    /// Builds a singular table in which every cell is `value`. Values set or
    /// added earlier are discarded.
    ///
    /// # Errors
    ///
    /// Fails with `IllegalState` if the rows or columns are undefined.
    pub fn build_singular(self, value: f64) -> Result<IntervalTable, Error> {
        let rows = specified(&self.rows, "Row")?.clone();
        let columns = specified(&self.columns, "Column")?.clone();
        let storage = Storage::singular(value, columns.len());
        tracing::trace!(
            rows = rows.len(),
            columns = columns.len(),
            backing = storage.kind(),
            "building interval table"
        );
        Ok(IntervalTable {
            rows,
            columns,
            storage,
        })
    }

    /// Overwrites every cell with `loader(row, column)`, in row-major order,
    /// before building.
    pub fn build_with(
        self,
        mut loader: impl FnMut(f64, f64) -> f64,
    ) -> Result<IntervalTable, Error> {
        self.try_build_with(|row, column| Ok::<_, std::convert::Infallible>(loader(row, column)))
    }

    /// Overwrites every cell with `loader(row, column)`, in row-major order,
    /// before building, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Fails with `ComputeFailed` if `loader` fails, carrying its error as the
    /// source.
    pub fn try_build_with<E>(
        mut self,
        mut loader: impl FnMut(f64, f64) -> Result<f64, E>,
    ) -> Result<IntervalTable, Error>
    where
        E: Into<anyhow::Error>,
    {
        let rows = self.row_bins()?.clone();
        let columns = self.column_bins()?.clone();
        let data = self.data_mut()?;
        let cells = data.chunks_exact_mut(columns.len());
        for (run, row) in cells.zip(rows.keys()) {
            for (value, column) in run.iter_mut().zip(columns.keys()) {
                *value = loader(*row, *column).map_err(|err| {
                    Error::new(ErrorKind::ComputeFailed, "loader failed")
                        .with_context("row", row)
                        .with_context("column", column)
                        .set_source(err)
                })?;
            }
        }
        self.build()
    }
}

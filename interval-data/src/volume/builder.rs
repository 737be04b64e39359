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

use super::IntervalVolume;
use crate::common::check_run;
use crate::common::unchecked_add;
use crate::error::Error;
use crate::error::ErrorKind;
use crate::keys::Bins;
use crate::keys::specified;
use crate::sequence::XyData;
use crate::storage::Storage;

/// A single-use builder of [`IntervalVolume`]s.
///
/// The backing data is allocated once rows, columns and levels are all
/// defined. The `build*` methods consume the builder:
///
/// ```compile_fail
/// use interval_data::volume::IntervalVolumeBuilder;
///
/// let mut builder = IntervalVolumeBuilder::create();
/// builder
///     .rows(0.0, 1.0, 0.5).unwrap()
///     .columns(0.0, 1.0, 0.5).unwrap()
///     .levels(0.0, 1.0, 0.5).unwrap();
/// let volume = builder.build_singular(1.0).unwrap();
/// builder.add_at(0, 0, 0, 1.0).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct IntervalVolumeBuilder {
    rows: Option<Bins>,
    columns: Option<Bins>,
    levels: Option<Bins>,
    data: Option<Vec<f64>>,
}

impl IntervalVolumeBuilder {
    /// Creates an empty builder.
    pub fn create() -> Self {
        Self::default()
    }

    /// Creates a builder with the same bins as `model` and all values zero.
    /// A singular model yields a dense builder.
    pub fn from_model(model: &IntervalVolume) -> Self {
        Self::initialized(model, vec![0.0; model.cells()])
    }

    /// Creates a builder with the same bins and values as `volume`. A
    /// singular volume is expanded to one value per cell.
    pub fn copy_of(volume: &IntervalVolume) -> Self {
        Self::initialized(volume, volume.storage.to_dense(volume.cells()))
    }

    fn initialized(volume: &IntervalVolume, data: Vec<f64>) -> Self {
        Self {
            rows: Some(volume.rows.clone()),
            columns: Some(volume.columns.clone()),
            levels: Some(volume.levels.clone()),
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

    /// Defines the level bins.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if the bins are invalid and with
    /// `IllegalState` if the data have already been allocated.
    pub fn levels(&mut self, min: f64, max: f64, delta: f64) -> Result<&mut Self, Error> {
        self.check_uninitialized()?;
        self.levels = Some(Bins::new(min, max, delta)?);
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
        if let (Some(rows), Some(columns), Some(levels)) = (&self.rows, &self.columns, &self.levels)
        {
            tracing::trace!(
                rows = rows.len(),
                columns = columns.len(),
                levels = levels.len(),
                "allocating volume data"
            );
            self.data = Some(vec![0.0; rows.len() * columns.len() * levels.len()]);
        }
    }

    fn row_bins(&self) -> Result<&Bins, Error> {
        specified(&self.rows, "Row")
    }

    fn column_bins(&self) -> Result<&Bins, Error> {
        specified(&self.columns, "Column")
    }

    fn level_bins(&self) -> Result<&Bins, Error> {
        specified(&self.levels, "Level")
    }

    /// Returns the index of the row bin that contains `row`.
    pub fn row_index(&self, row: f64) -> Result<usize, Error> {
        self.row_bins()?.index_of(row)
    }

    /// Returns the index of the column bin that contains `column`.
    pub fn column_index(&self, column: f64) -> Result<usize, Error> {
        self.column_bins()?.index_of(column)
    }

    /// Returns the index of the level bin that contains `level`.
    pub fn level_index(&self, level: f64) -> Result<usize, Error> {
        self.level_bins()?.index_of(level)
    }

    fn data_mut(&mut self) -> Result<&mut [f64], Error> {
        match self.data.as_deref_mut() {
            Some(data) => Ok(data),
            None if self.rows.is_none() => Err(Error::unspecified("Row")),
            None if self.columns.is_none() => Err(Error::unspecified("Column")),
            None => Err(Error::unspecified("Level")),
        }
    }

    fn flat(&self, row: usize, column: usize, level: usize) -> Result<usize, Error> {
        let rows = self.row_bins()?.len();
        let columns = self.column_bins()?.len();
        let levels = self.level_bins()?.len();
        let row = Error::check_index(row, rows, "row")?;
        let column = Error::check_index(column, columns, "column")?;
        let level = Error::check_index(level, levels, "level")?;
        Ok((row * columns + column) * levels + level)
    }

    fn indices(&self, row: f64, column: f64, level: f64) -> Result<(usize, usize, usize), Error> {
        Ok((
            self.row_index(row)?,
            self.column_index(column)?,
            self.level_index(level)?,
        ))
    }

    /// Sets the value of the cell that contains `(row, column, level)`.
    pub fn set(&mut self, row: f64, column: f64, level: f64, value: f64) -> Result<&mut Self, Error> {
        let (row, column, level) = self.indices(row, column, level)?;
        self.set_at(row, column, level, value)
    }

    /// Sets the value of the cell at `(row, column, level)` indices.
    pub fn set_at(
        &mut self,
        row: usize,
        column: usize,
        level: usize,
        value: f64,
    ) -> Result<&mut Self, Error> {
        let index = self.flat(row, column, level)?;
        self.data_mut()?[index] = value;
        Ok(self)
    }

    /// Adds to the value of the cell that contains `(row, column, level)`.
    pub fn add(&mut self, row: f64, column: f64, level: f64, value: f64) -> Result<&mut Self, Error> {
        let (row, column, level) = self.indices(row, column, level)?;
        self.add_at(row, column, level, value)
    }

    /// Adds to the value of the cell at `(row, column, level)` indices.
    pub fn add_at(
        &mut self,
        row: usize,
        column: usize,
        level: usize,
        value: f64,
    ) -> Result<&mut Self, Error> {
        let index = self.flat(row, column, level)?;
        self.data_mut()?[index] += value;
        Ok(self)
    }

    /// Adds `values` to the column that contains `(row, column)`, starting at
    /// the first level.
    ///
    /// # Errors
    ///
    /// Fails with `IndexOutOfRange` if there are more values than levels.
    pub fn add_column(&mut self, row: f64, column: f64, values: &[f64]) -> Result<&mut Self, Error> {
        let row = self.row_index(row)?;
        let column = self.column_index(column)?;
        self.add_run(row, column, 0, values)
    }

    /// Adds the y-values of `sequence` to the column that contains
    /// `(row, column)`, starting at the first level.
    pub fn add_column_sequence(
        &mut self,
        row: f64,
        column: f64,
        sequence: &impl XyData,
    ) -> Result<&mut Self, Error> {
        self.add_column(row, column, sequence.ys())
    }

    /// Adds `values` to the column that contains `(row, column)`, starting at
    /// the level that contains `level`.
    ///
    /// # Errors
    ///
    /// Fails with `IndexOutOfRange` if the values overrun the last level.
    pub fn add_from(
        &mut self,
        row: f64,
        column: f64,
        level: f64,
        values: &[f64],
    ) -> Result<&mut Self, Error> {
        let (row, column, level) = self.indices(row, column, level)?;
        self.add_run(row, column, level, values)
    }

    fn add_run(
        &mut self,
        row: usize,
        column: usize,
        level: usize,
        values: &[f64],
    ) -> Result<&mut Self, Error> {
        let levels = self.level_bins()?.len();
        check_run(level, values.len(), levels, "column")?;
        let start = self.flat(row, column, level)?;
        unchecked_add(&mut self.data_mut()?[start..start + values.len()], values);
        Ok(self)
    }

    /// Adds the values of `volume` cell by cell. A singular volume adds its
    /// value to every cell.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if `volume` has different bins.
    pub fn add_volume(&mut self, volume: &IntervalVolume) -> Result<&mut Self, Error> {
        self.row_bins()?.check_same_domain(&volume.rows, "Row")?;
        self.column_bins()?.check_same_domain(&volume.columns, "Column")?;
        self.level_bins()?.check_same_domain(&volume.levels, "Level")?;
        volume.storage.add_into(self.data_mut()?);
        Ok(self)
    }

    /// Multiplies all values by `scale`.
    pub fn multiply(&mut self, scale: f64) -> Result<&mut Self, Error> {
        self.data_mut()?.iter_mut().for_each(|v| *v *= scale);
        Ok(self)
    }

    /// Builds the volume, handing over the backing data.
    ///
    /// # Errors
    ///
    /// Fails with `IllegalState` if any dimension is undefined.
    pub fn build(self) -> Result<IntervalVolume, Error> {
        match self {
            Self {
                rows: Some(rows),
                columns: Some(columns),
                levels: Some(levels),
                data: Some(data),
            } => {
                let storage = Storage::Dense(data.into_boxed_slice());
                tracing::trace!(
                    rows = rows.len(),
                    columns = columns.len(),
                    levels = levels.len(),
                    backing = storage.kind(),
                    "building interval volume"
                );
                Ok(IntervalVolume {
                    rows,
                    columns,
                    levels,
                    storage,
                })
            }
            Self { rows: None, .. } => Err(Error::unspecified("Row")),
            Self { columns: None, .. } => Err(Error::unspecified("Column")),
            Self { .. } => Err(Error::unspecified("Level")),
        }
    }

    /// Builds a singular volume in which every cell is `value`. Values set or
    /// added earlier are discarded.
    ///
    /// # Errors
    ///
    /// Fails with `IllegalState` if any dimension is undefined.
    pub fn build_singular(self, value: f64) -> Result<IntervalVolume, Error> {
        let rows = self.row_bins()?.clone();
        let columns = self.column_bins()?.clone();
        let levels = self.level_bins()?.clone();
        let storage = Storage::singular(value, levels.len());
        tracing::trace!(
            rows = rows.len(),
            columns = columns.len(),
            levels = levels.len(),
            backing = storage.kind(),
            "building interval volume"
        );
        Ok(IntervalVolume {
            rows,
            columns,
            levels,
            storage,
        })
    }

    /// Overwrites every cell with `loader(row, column, level)`, in row-major
    /// order, before building.
    pub fn build_with(
        self,
        mut loader: impl FnMut(f64, f64, f64) -> f64,
    ) -> Result<IntervalVolume, Error> {
        self.try_build_with(|row, column, level| {
            Ok::<_, std::convert::Infallible>(loader(row, column, level))
        })
    }

    /// Overwrites every cell with `loader(row, column, level)`, in row-major
    /// order, before building, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Fails with `ComputeFailed` if `loader` fails, carrying its error as the
    /// source.
    pub fn try_build_with<E>(
        mut self,
        mut loader: impl FnMut(f64, f64, f64) -> Result<f64, E>,
    ) -> Result<IntervalVolume, Error>
    where
        E: Into<anyhow::Error>,
    {
        let rows = self.row_bins()?.clone();
        let columns = self.column_bins()?.clone();
        let levels = self.level_bins()?.clone();
        let data = self.data_mut()?;
        let mut runs = data.chunks_exact_mut(levels.len());
        for row in rows.keys() {
            for column in columns.keys() {
                let Some(run) = runs.next() else {
                    break;
                };
                for (value, level) in run.iter_mut().zip(levels.keys()) {
                    *value = loader(*row, *column, *level).map_err(|err| {
                        Error::new(ErrorKind::ComputeFailed, "loader failed")
                            .with_context("row", row)
                            .with_context("column", column)
                            .with_context("level", level)
                            .set_source(err)
                    })?;
                }
            }
        }
        self.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unspecified_level() {
        let mut builder = IntervalVolumeBuilder::create();
        builder.rows(0.0, 1.0, 0.5).unwrap().columns(0.0, 1.0, 0.5).unwrap();
        let err = builder.multiply(2.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalState);
        assert_eq!(err.message(), "Level data have not yet been fully specified");
        builder.levels(0.0, 1.0, 0.25).unwrap();
        assert_eq!(builder.data.as_ref().map(Vec::len), Some(16));
        let err = builder.levels(0.0, 1.0, 0.5).unwrap_err();
        assert_eq!(err.message(), "Builder has already been initialized");
    }

    #[test]
    fn test_build_names_missing_dimension() {
        let mut builder = IntervalVolumeBuilder::create();
        builder.rows(0.0, 1.0, 0.5).unwrap();
        let err = builder.build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalState);
        assert_eq!(err.message(), "Column data have not yet been fully specified");

        let mut builder = IntervalVolumeBuilder::create();
        builder.rows(0.0, 1.0, 0.5).unwrap().columns(0.0, 1.0, 0.5).unwrap();
        let err = builder.build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalState);
        assert_eq!(err.message(), "Level data have not yet been fully specified");

        let mut builder = IntervalVolumeBuilder::create();
        builder.levels(0.0, 1.0, 0.5).unwrap();
        let err = builder.build().unwrap_err();
        assert_eq!(err.message(), "Row data have not yet been fully specified");
    }

    #[test]
    fn test_flat_order() {
        let mut builder = IntervalVolumeBuilder::create();
        builder
            .rows(0.0, 2.0, 1.0)
            .unwrap()
            .columns(0.0, 3.0, 1.0)
            .unwrap()
            .levels(0.0, 4.0, 1.0)
            .unwrap();
        assert_eq!(builder.flat(0, 0, 3).unwrap(), 3);
        assert_eq!(builder.flat(0, 1, 0).unwrap(), 4);
        assert_eq!(builder.flat(1, 0, 0).unwrap(), 12);
        assert!(builder.flat(0, 3, 0).is_err());
    }
}

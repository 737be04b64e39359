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

use super::IntervalArray;
use crate::common::check_run;
use crate::common::unchecked_add;
use crate::error::Error;
use crate::error::ErrorKind;
use crate::keys::Bins;
use crate::keys::specified;
use crate::sequence::XyData;

/// A single-use builder of [`IntervalArray`]s.
///
/// Values may be set or accumulated once the rows have been defined. The
/// `build*` methods consume the builder, so a builder can never be used to
/// modify an array it has produced:
///
/// ```compile_fail
/// use interval_data::array::IntervalArray;
///
/// let mut builder = IntervalArray::builder();
/// builder.rows(0.0, 1.0, 0.5).unwrap();
/// let array = builder.build().unwrap();
/// builder.set_at(0, 1.0).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct IntervalArrayBuilder {
    rows: Option<Bins>,
    data: Option<Vec<f64>>,
}

impl IntervalArrayBuilder {
    /// Creates a builder with rows already defined.
    ///
    /// # Errors
    ///
    /// Fails if the row bins are invalid.
    pub fn with_rows(min: f64, max: f64, delta: f64) -> Result<Self, Error> {
        let mut builder = Self::default();
        builder.rows(min, max, delta)?;
        Ok(builder)
    }

    /// Creates a builder with the same rows as `model` and all values zero.
    pub fn from_model(model: &IntervalArray) -> Self {
        Self::initialized(model.rows.clone(), vec![0.0; model.len()])
    }

    /// Creates a builder with the same rows and values as `array`.
    pub fn copy_of(array: &IntervalArray) -> Self {
        Self::initialized(array.rows.clone(), array.data.to_vec())
    }

    fn initialized(rows: Bins, data: Vec<f64>) -> Self {
        Self {
            rows: Some(rows),
            data: Some(data),
        }
    }

    /// Defines the row bins.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if the bins are invalid and with
    /// `IllegalState` if the rows have already been defined.
    pub fn rows(&mut self, min: f64, max: f64, delta: f64) -> Result<&mut Self, Error> {
        if self.data.is_some() {
            return Err(Error::already_initialized());
        }
        let rows = Bins::new(min, max, delta)?;
        tracing::trace!(rows = rows.len(), "allocating array data");
        self.data = Some(vec![0.0; rows.len()]);
        self.rows = Some(rows);
        Ok(self)
    }

    /// Returns the index of the row bin that contains `row`.
    ///
    /// # Errors
    ///
    /// Fails with `IllegalState` if the rows are undefined and with
    /// `IndexOutOfRange` if `row` is outside the bins.
    pub fn row_index(&self, row: f64) -> Result<usize, Error> {
        specified(&self.rows, "Row")?.index_of(row)
    }

    fn data_mut(&mut self) -> Result<&mut [f64], Error> {
        self.data.as_deref_mut().ok_or_else(|| Error::unspecified("Row"))
    }

    fn cell_mut(&mut self, index: usize) -> Result<&mut f64, Error> {
        let data = self.data_mut()?;
        let index = Error::check_index(index, data.len(), "row")?;
        Ok(&mut data[index])
    }

    /// Sets the value of the bin that contains `row`.
    pub fn set(&mut self, row: f64, value: f64) -> Result<&mut Self, Error> {
        let index = self.row_index(row)?;
        self.set_at(index, value)
    }

    /// Sets the value of the bin at `index`.
    pub fn set_at(&mut self, index: usize, value: f64) -> Result<&mut Self, Error> {
        *self.cell_mut(index)? = value;
        Ok(self)
    }

    /// Adds to the value of the bin that contains `row`.
    pub fn add(&mut self, row: f64, value: f64) -> Result<&mut Self, Error> {
        let index = self.row_index(row)?;
        self.add_at(index, value)
    }

    /// Adds to the value of the bin at `index`.
    pub fn add_at(&mut self, index: usize, value: f64) -> Result<&mut Self, Error> {
        *self.cell_mut(index)? += value;
        Ok(self)
    }

    /// Adds `values` to consecutive bins starting with the first.
    ///
    /// # Errors
    ///
    /// Fails with `IndexOutOfRange` if there are more values than bins.
    pub fn add_all(&mut self, values: &[f64]) -> Result<&mut Self, Error> {
        let data = self.data_mut()?;
        check_run(0, values.len(), data.len(), "rows")?;
        unchecked_add(data, values);
        Ok(self)
    }

    /// Adds `values` to consecutive bins starting with the bin containing `row`.
    ///
    /// # Errors
    ///
    /// Fails with `IndexOutOfRange` if `row` is outside the bins or the values
    /// run past the last bin.
    pub fn add_from(&mut self, row: f64, values: &[f64]) -> Result<&mut Self, Error> {
        let index = self.row_index(row)?;
        let data = self.data_mut()?;
        check_run(index, values.len(), data.len(), "rows")?;
        unchecked_add(&mut data[index..index + values.len()], values);
        Ok(self)
    }

    /// Adds the y-values of `sequence` to consecutive bins starting with the
    /// first. The x-values are ignored.
    pub fn add_sequence(&mut self, sequence: &impl XyData) -> Result<&mut Self, Error> {
        self.add_all(sequence.ys())
    }

    /// Adds each y-value of `sequence` to the bin that contains its x-value.
    ///
    /// # Errors
    ///
    /// Fails with `IndexOutOfRange` if any x-value is outside the bins, in
    /// which case no values are added.
    pub fn add_each(&mut self, sequence: &impl XyData) -> Result<&mut Self, Error> {
        let indices = sequence
            .xs()
            .iter()
            .map(|x| self.row_index(*x))
            .collect::<Result<Vec<_>, _>>()?;
        let data = self.data_mut()?;
        for (index, y) in indices.into_iter().zip(sequence.ys()) {
            data[index] += y;
        }
        Ok(self)
    }

    /// Adds the values of `array` bin by bin.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if `array` has different rows.
    pub fn add_array(&mut self, array: &IntervalArray) -> Result<&mut Self, Error> {
        specified(&self.rows, "Row")?.check_same_domain(&array.rows, "Row")?;
        unchecked_add(self.data_mut()?, &array.data);
        Ok(self)
    }

    /// Multiplies all values by `scale`.
    pub fn multiply(&mut self, scale: f64) -> Result<&mut Self, Error> {
        self.data_mut()?.iter_mut().for_each(|v| *v *= scale);
        Ok(self)
    }

    /// Builds the array, handing over the backing data.
    ///
    /// # Errors
    ///
    /// Fails with `IllegalState` if the rows are undefined.
    pub fn build(self) -> Result<IntervalArray, Error> {
        let Self { rows, data } = self;
        match (rows, data) {
            (Some(rows), Some(data)) => {
                tracing::trace!(rows = rows.len(), "building interval array");
                Ok(IntervalArray {
                    rows,
                    data: data.into_boxed_slice(),
                })
            }
            _ => Err(Error::unspecified("Row")),
        }
    }

    /// Overwrites every bin with `loader(row)` before building.
    pub fn build_with(self, mut loader: impl FnMut(f64) -> f64) -> Result<IntervalArray, Error> {
        self.try_build_with(|row| Ok::<_, std::convert::Infallible>(loader(row)))
    }

    /// Overwrites every bin with `loader(row)` before building, stopping at the
    /// first failure.
    ///
    /// # Errors
    ///
    /// Fails with `ComputeFailed` if `loader` fails, carrying its error as the
    /// source.
    pub fn try_build_with<E>(
        mut self,
        mut loader: impl FnMut(f64) -> Result<f64, E>,
    ) -> Result<IntervalArray, Error>
    where
        E: Into<anyhow::Error>,
    {
        let rows = specified(&self.rows, "Row")?.clone();
        let data = self.data_mut()?;
        for (value, row) in data.iter_mut().zip(rows.keys()) {
            *value = loader(*row).map_err(|err| {
                Error::new(ErrorKind::ComputeFailed, "loader failed")
                    .with_context("row", row)
                    .set_source(err)
            })?;
        }
        self.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_defined_once() {
        let mut builder = IntervalArray::builder();
        builder.rows(0.0, 1.0, 0.5).unwrap();
        let err = builder.rows(0.0, 2.0, 0.5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalState);
        assert_eq!(builder.data.as_deref(), Some(&[0.0, 0.0][..]));
    }

    #[test]
    fn test_mutation_before_rows() {
        let mut builder = IntervalArray::builder();
        assert_eq!(builder.set_at(0, 1.0).unwrap_err().kind(), ErrorKind::IllegalState);
        assert_eq!(builder.add(0.5, 1.0).unwrap_err().kind(), ErrorKind::IllegalState);
        assert_eq!(builder.multiply(2.0).unwrap_err().kind(), ErrorKind::IllegalState);
        assert_eq!(builder.build().unwrap_err().kind(), ErrorKind::IllegalState);
    }
}

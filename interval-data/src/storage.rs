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

use crate::common::collapse;
use crate::common::max_index;
use crate::common::min_index;
use crate::common::unchecked_add;

/// Backing values of a table or volume in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Storage {
    /// One value per cell.
    Dense(Box<[f64]>),
    /// One value for every cell. `fill` is a run of the innermost dimension
    /// holding `value`, handed out as the data of every row or column view.
    Singular { value: f64, fill: Box<[f64]> },
}

impl Storage {
    pub(crate) fn singular(value: f64, inner: usize) -> Self {
        Storage::Singular {
            value,
            fill: vec![value; inner].into_boxed_slice(),
        }
    }

    pub(crate) fn is_singular(&self) -> bool {
        matches!(self, Storage::Singular { .. })
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Storage::Dense(_) => "dense",
            Storage::Singular { .. } => "singular",
        }
    }

    pub(crate) fn get(&self, index: usize) -> f64 {
        match self {
            Storage::Dense(data) => data[index],
            Storage::Singular { value, .. } => *value,
        }
    }

    /// Returns the innermost run of `len` values starting at the flat `start`.
    pub(crate) fn run(&self, start: usize, len: usize) -> &[f64] {
        match self {
            Storage::Dense(data) => &data[start..start + len],
            Storage::Singular { fill, .. } => &fill[..len],
        }
    }

    pub(crate) fn sum(&self, cells: usize) -> f64 {
        match self {
            Storage::Dense(data) => data.iter().sum(),
            Storage::Singular { value, .. } => value * cells as f64,
        }
    }

    /// Flat index of the smallest cell, first encountered on ties.
    pub(crate) fn min_index(&self) -> usize {
        match self {
            Storage::Dense(data) => min_index(data),
            Storage::Singular { .. } => 0,
        }
    }

    /// Flat index of the largest cell, first encountered on ties.
    pub(crate) fn max_index(&self) -> usize {
        match self {
            Storage::Dense(data) => max_index(data),
            Storage::Singular { .. } => 0,
        }
    }

    /// Sums runs of `inner` values, yielding `cells / inner` totals.
    pub(crate) fn collapse(&self, cells: usize, inner: usize) -> Vec<f64> {
        match self {
            Storage::Dense(data) => collapse(data, inner),
            Storage::Singular { value, .. } => vec![value * inner as f64; cells / inner],
        }
    }

    /// Adds every cell into `target`, which has the same shape.
    pub(crate) fn add_into(&self, target: &mut [f64]) {
        match self {
            Storage::Dense(data) => unchecked_add(target, data),
            Storage::Singular { value, .. } => target.iter_mut().for_each(|t| *t += value),
        }
    }

    pub(crate) fn to_dense(&self, cells: usize) -> Vec<f64> {
        match self {
            Storage::Dense(data) => data.to_vec(),
            Storage::Singular { value, .. } => vec![*value; cells],
        }
    }
}

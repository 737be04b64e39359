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

//! Bin keys and index resolution for interval containers.
//!
//! A dimension of an interval container is described by a `(min, max, Δ)`
//! triple. Values are mapped to bins using bin edges, while the only
//! coordinates ever exposed are bin centers, the keys. Keys are rounded to
//! [`KEY_SCALE`] decimal places so that `5.0 + 0.1 + 0.1` and `5.2` resolve
//! to the same key.
//!
//! # Usage
//!
//! ```rust
//! use interval_data::keys::{Bins, index_of, keys};
//!
//! assert_eq!(keys(5.0, 8.0, 1.0).unwrap(), vec![5.5, 6.5, 7.5]);
//! assert_eq!(index_of(5.0, 1.0, 6.99, 3).unwrap(), 1);
//!
//! let bins = Bins::new(0.0, 10.0, 2.0).unwrap();
//! assert_eq!(bins.keys(), &[1.0, 3.0, 5.0, 7.0, 9.0]);
//! assert_eq!(bins.index_of(3.0).unwrap(), 1);
//! assert!(bins.index_of(10.0).is_err());
//! ```

mod bins;
mod fingerprint;

use std::sync::Arc;

pub use self::bins::Bins;
use crate::common::check_delta;
use crate::common::round;
use crate::error::Error;

/// Number of decimal places keys are rounded to.
pub const KEY_SCALE: u32 = 4;

/// Relative tolerance within which `(max - min) / Δ` counts as a whole number
/// of bins.
const SIZE_TOLERANCE: f64 = 1e-9;

/// Creates the keys (bin centers) for a `(min, max, Δ)` triple.
///
/// Keys are `min + Δ/2 + i·Δ` rounded to [`KEY_SCALE`] decimal places. There
/// are `(max - min) / Δ` keys, rounded half-up, so the last bin ends at the
/// multiple of `Δ` nearest to `max`.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
/// if the triple fails [`check_delta`] or `Δ` is too fine for the key
/// precision to keep every rounded key inside its own bin.
pub fn keys(min: f64, max: f64, delta: f64) -> Result<Vec<f64>, Error> {
    check_delta(min, max, delta)?;
    let size = size(min, max, delta);
    let keys = key_array(min, delta, size);
    for (i, key) in keys.iter().enumerate() {
        if index_of(min, delta, *key, size).ok() != Some(i) {
            return Err(Error::invalid_argument(format!(
                "Δ [{delta}] is too fine for keys with {KEY_SCALE} decimal places"
            ))
            .with_context("index", i)
            .with_context("key", key));
        }
    }
    Ok(keys)
}

/// Computes the index of the bin containing `value`.
///
/// The index is `floor((value - min) / Δ)` and must fall in `[0, size)`.
///
/// # Errors
///
/// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
/// if `value` lies outside the bins or is `NaN`.
pub fn index_of(min: f64, delta: f64, value: f64, size: usize) -> Result<usize, Error> {
    let index = ((value - min) / delta).floor();
    if index >= 0.0 && index < size as f64 {
        Ok(index as usize)
    } else {
        Err(Error::index_out_of_range(format!(
            "value [{value}] is outside bins [{min}, {}) of width Δ [{delta}]",
            min + size as f64 * delta
        ))
        .with_context("value", value)
        .with_context("size", size))
    }
}

/// Returns true if two key arrays describe the same domain. The same
/// allocation is accepted immediately, otherwise the values are compared.
pub(crate) fn same_keys(a: &Arc<[f64]>, b: &Arc<[f64]>) -> bool {
    if Arc::ptr_eq(a, b) {
        return true;
    }
    tracing::debug!(len = a.len(), "key arrays are distinct; comparing values");
    a[..] == b[..]
}

/// Returns the bins of a builder dimension that must already be defined.
pub(crate) fn specified<'a>(
    bins: &'a Option<Bins>,
    dimension: &'static str,
) -> Result<&'a Bins, Error> {
    bins.as_ref().ok_or_else(|| Error::unspecified(dimension))
}

fn size(min: f64, max: f64, delta: f64) -> usize {
    let bins = (max - min) / delta;
    (bins + SIZE_TOLERANCE * bins.max(1.0)).round() as usize
}

fn key_array(min: f64, delta: f64, size: usize) -> Vec<f64> {
    let half = delta / 2.0;
    (0..size)
        // adding 0.0 turns a rounded -0.0 into 0.0
        .map(|i| round(min + half + i as f64 * delta, KEY_SCALE) + 0.0)
        .collect()
}

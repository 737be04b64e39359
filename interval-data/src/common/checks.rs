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

use std::cmp::Ordering;

use crate::error::Error;

/// Checks that a value is finite.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
/// if `value` is `NaN` or infinite.
pub fn check_finite(value: f64, label: &'static str) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::invalid_argument(format!(
            "Non-finite {label} value: {value}"
        )))
    }
}

/// Checks a bin discretization.
///
/// Returns `Δ` for use inline if `min`, `max` and `Δ` are finite, `max > min`,
/// `Δ > 0` and `Δ <= max - min`.
///
/// # Examples
///
/// ```
/// use interval_data::common::check_delta;
///
/// assert_eq!(check_delta(0.0, 10.0, 2.0).unwrap(), 2.0);
/// assert!(check_delta(0.0, 10.0, 12.0).is_err());
/// assert!(check_delta(5.0, 5.0, 1.0).is_err());
/// ```
pub fn check_delta(min: f64, max: f64, delta: f64) -> Result<f64, Error> {
    check_finite(min, "min")?;
    check_finite(max, "max")?;
    check_finite(delta, "Δ")?;
    if max <= min {
        return Err(Error::invalid_argument(format!(
            "min [{min}] >= max [{max}]"
        )));
    }
    if delta <= 0.0 {
        return Err(Error::invalid_argument(format!("Invalid Δ [{delta}]")));
    }
    if delta > max - min {
        return Err(Error::invalid_argument(format!(
            "Δ [{delta}] > max - min [{}]",
            max - min
        ))
        .with_context("min", min)
        .with_context("max", max));
    }
    Ok(delta)
}

/// Checks that `values` increase strictly (no repeats).
pub(crate) fn check_monotonic(values: &[f64], label: &'static str) -> Result<(), Error> {
    for (i, pair) in values.windows(2).enumerate() {
        // NaN compares as None and fails too
        if pair[1].partial_cmp(&pair[0]) != Some(Ordering::Greater) {
            return Err(Error::invalid_argument(format!(
                "{label} do not increase monotonically"
            ))
            .with_context("index", i + 1)
            .with_context("value", pair[1]));
        }
    }
    Ok(())
}

/// Checks that a run of `len` values starting at `start` fits in `size`.
pub(crate) fn check_run(
    start: usize,
    len: usize,
    size: usize,
    dimension: &'static str,
) -> Result<(), Error> {
    if len == 0 || start + len <= size {
        return Ok(());
    }
    Err(Error::index_out_of_range(format!(
        "Supplied values overrun end of {dimension}"
    ))
    .with_context("start", start)
    .with_context("values", len)
    .with_context("size", size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_check_delta_rejects_bad_specs() {
        for (min, max, delta) in [
            (0.0, 10.0, 0.0),
            (0.0, 10.0, -1.0),
            (10.0, 0.0, 1.0),
            (0.0, 0.0, 1.0),
            (0.0, 1.0, 1.5),
            (f64::NAN, 1.0, 0.1),
            (0.0, f64::INFINITY, 0.1),
            (0.0, 1.0, f64::NAN),
        ] {
            let err = check_delta(min, max, delta).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{min} {max} {delta}");
        }
    }

    #[test]
    fn test_check_delta_full_width() {
        assert_eq!(check_delta(0.0, 1.0, 1.0).unwrap(), 1.0);
    }

    #[test]
    fn test_check_monotonic() {
        assert!(check_monotonic(&[0.0, 1.0, 2.0], "x-values").is_ok());
        assert!(check_monotonic(&[0.0, 1.0, 1.0], "x-values").is_err());
        assert!(check_monotonic(&[0.0, 2.0, 1.0], "x-values").is_err());
        assert!(check_monotonic(&[0.0, f64::NAN], "x-values").is_err());
    }

    #[test]
    fn test_check_run() {
        assert!(check_run(0, 5, 5, "row").is_ok());
        assert!(check_run(3, 2, 5, "row").is_ok());
        assert!(check_run(7, 0, 5, "row").is_ok());
        let err = check_run(3, 3, 5, "row").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(err.message(), "Supplied values overrun end of row");
    }
}

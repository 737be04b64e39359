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

/// Rounds `value` to `scale` decimal places, halves rounding away from zero.
///
/// # Examples
///
/// ```
/// use interval_data::common::round;
///
/// assert_eq!(round(1.23456, 4), 1.2346);
/// assert_eq!(round(0.30000000000000004, 4), 0.3);
/// assert_eq!(round(-2.5, 0), -3.0);
/// ```
pub fn round(value: f64, scale: u32) -> f64 {
    let factor = 10f64.powi(scale as i32);
    (value * factor).round() / factor
}

/// Rounds each of `values` in place to `scale` decimal places.
pub fn clean(scale: u32, values: &mut [f64]) -> &mut [f64] {
    for value in values.iter_mut() {
        *value = round(*value, scale);
    }
    values
}

/// Adds `other` to `data` elementwise without checking lengths beyond the
/// shorter of the two.
pub(crate) fn unchecked_add(data: &mut [f64], other: &[f64]) {
    for (d, o) in data.iter_mut().zip(other) {
        *d += o;
    }
}

/// Sums consecutive runs of `inner` values of a row-major `data` slice.
pub(crate) fn collapse(data: &[f64], inner: usize) -> Vec<f64> {
    data.chunks_exact(inner).map(|run| run.iter().sum()).collect()
}

/// Index of the smallest value, first encountered on ties.
pub(crate) fn min_index(data: &[f64]) -> usize {
    let mut index = 0;
    for (i, value) in data.iter().enumerate().skip(1) {
        if *value < data[index] {
            index = i;
        }
    }
    index
}

/// Index of the largest value, first encountered on ties.
pub(crate) fn max_index(data: &[f64]) -> usize {
    let mut index = 0;
    for (i, value) in data.iter().enumerate().skip(1) {
        if *value > data[index] {
            index = i;
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean() {
        let mut values = [0.1 + 0.2, 7.000049999, 1.23456];
        clean(4, &mut values);
        assert_eq!(values, [0.3, 7.0, 1.2346]);
    }

    #[test]
    fn test_collapse() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(collapse(&data, 3), vec![6.0, 15.0]);
        assert_eq!(collapse(&data, 2), vec![3.0, 7.0, 11.0]);
    }

    #[test]
    fn test_min_max_index_ties() {
        let data = [3.0, 1.0, 5.0, 1.0, 5.0];
        assert_eq!(min_index(&data), 1);
        assert_eq!(max_index(&data), 2);
        assert_eq!(min_index(&[2.0]), 0);
    }
}

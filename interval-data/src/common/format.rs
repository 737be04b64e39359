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

/// Formats a key as fixed point with two decimals, right aligned to eight
/// characters.
pub(crate) fn key_cell(value: f64) -> String {
    format!("{value:8.2}")
}

/// Formats a value in scientific notation with two decimals and a signed,
/// two digit exponent. Zero is written as `0.0` so that empty cells stand out.
pub(crate) fn value_cell(value: f64) -> String {
    if value == 0.0 {
        return format!("{:>8}", "0.0");
    }
    let formatted = format!("{value:.2e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exponent.abs())
            }
            Err(_) => formatted,
        },
        // inf and NaN
        None => format!("{formatted:>8}"),
    }
}

/// Writes `values` as a bracketed, comma separated list of formatted cells.
pub(crate) fn grid_line(values: &[f64], cell: fn(f64) -> String) -> String {
    let cells = values.iter().map(|v| cell(*v)).collect::<Vec<_>>();
    format!("[{}]", cells.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_cell() {
        assert_eq!(value_cell(0.0), "     0.0");
        assert_eq!(value_cell(5.0), "5.00e+00");
        assert_eq!(value_cell(0.000123), "1.23e-04");
        assert_eq!(value_cell(-2.5e12), "-2.50e+12");
        assert_eq!(value_cell(f64::INFINITY), "     inf");
    }

    #[test]
    fn test_grid_line() {
        assert_eq!(grid_line(&[1.0, -3.25], key_cell), "[    1.00,    -3.25]");
        assert_eq!(grid_line(&[0.0, 5.0], value_cell), "[     0.0, 5.00e+00]");
    }
}

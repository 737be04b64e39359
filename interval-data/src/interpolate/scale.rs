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

/// Linear interpolation between `(x1, y1)` and `(x2, y2)` evaluated at `x`.
pub(super) fn line(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
}

/// The axis transform applied around a linear interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Linear in both x and y.
    Linear,
    /// Natural log of x, linear y.
    LogX,
    /// Linear x, natural log of y.
    LogY,
    /// Natural log of both x and y.
    LogXLogY,
}

impl Scale {
    pub(super) fn from_flags(log_x: bool, log_y: bool) -> Self {
        match (log_x, log_y) {
            (false, false) => Scale::Linear,
            (true, false) => Scale::LogX,
            (false, true) => Scale::LogY,
            (true, true) => Scale::LogXLogY,
        }
    }

    /// Interpolates the y-value at `x` on the segment `(x1, y1)`-`(x2, y2)`.
    pub(super) fn y_at(self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
        match self {
            Scale::Linear => line(x1, y1, x2, y2, x),
            Scale::LogX => line(x1.ln(), y1, x2.ln(), y2, x.ln()),
            Scale::LogY => line(x1, y1.ln(), x2, y2.ln(), x).exp(),
            Scale::LogXLogY => line(x1.ln(), y1.ln(), x2.ln(), y2.ln(), x.ln()).exp(),
        }
    }

    /// Interpolates the x-value at `y` on the segment `(x1, y1)`-`(x2, y2)`.
    pub(super) fn x_at(self, x1: f64, y1: f64, x2: f64, y2: f64, y: f64) -> f64 {
        match self {
            Scale::Linear => line(y1, x1, y2, x2, y),
            Scale::LogX => line(y1, x1.ln(), y2, x2.ln(), y).exp(),
            Scale::LogY => line(y1.ln(), x1, y2.ln(), x2, y.ln()),
            Scale::LogXLogY => line(y1.ln(), x1.ln(), y2.ln(), x2.ln(), y.ln()).exp(),
        }
    }
}

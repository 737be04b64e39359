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

use super::Interpolator;
use super::Scale;

/// Builder for configuring an [`Interpolator`].
///
/// # Examples
///
/// ```
/// use interval_data::interpolate::{Interpolator, Scale};
///
/// let interpolator = Interpolator::builder().log_x().log_y().build();
/// assert_eq!(interpolator.scale(), Scale::LogXLogY);
/// assert!(interpolator.is_increasing());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InterpolatorBuilder {
    log_x: bool,
    log_y: bool,
    decreasing: bool,
}

impl InterpolatorBuilder {
    /// Interpolates in natural-log space along x.
    pub fn log_x(mut self) -> Self {
        self.log_x = true;
        self
    }

    /// Interpolates in natural-log space along y.
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    /// Searches y-values in decreasing order when looking up x-values, as for
    /// exceedance curves.
    pub fn decreasing(mut self) -> Self {
        self.decreasing = true;
        self
    }

    /// Builds the interpolator.
    pub fn build(self) -> Interpolator {
        Interpolator::new(Scale::from_flags(self.log_x, self.log_y), !self.decreasing)
    }
}

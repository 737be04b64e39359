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

//! Interpolation over xy-values.
//!
//! An [`Interpolator`] combines one of four [`Scale`] strategies with a search
//! direction for x-value lookups. Interpolators are immutable, `Copy`, and
//! hold no data; the same instance can be used on any number of sequences.
//!
//! # Usage
//!
//! ```rust
//! use interval_data::interpolate::Interpolator;
//! use interval_data::sequence::XySequence;
//!
//! let hazard = XySequence::create(&[0.01, 0.1, 1.0], Some(&[1e-2, 1e-3, 1e-5])).unwrap();
//! let interpolator = Interpolator::builder().log_x().log_y().decreasing().build();
//!
//! let y = interpolator.find_y_in(&hazard, 0.1);
//! assert!((y - 1e-3).abs() < 1e-15);
//! let x = interpolator.find_x_in(&hazard, 1e-4);
//! assert!((x - 10f64.powf(-0.5)).abs() < 1e-12);
//! ```

mod builder;
mod interpolator;
mod scale;

pub use self::builder::InterpolatorBuilder;
pub use self::interpolator::Interpolator;
pub use self::scale::Scale;

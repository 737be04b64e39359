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

//! Three-dimensional interval volumes.
//!
//! An [`IntervalVolume`] holds one value per `(row, column, level)` cell.
//! Levels are the innermost dimension; collapsing a volume sums the levels of
//! each `(row, column)` pair into an [`IntervalTable`](crate::table::IntervalTable).
//!
//! # Usage
//!
//! ```rust
//! use interval_data::volume::IntervalVolumeBuilder;
//!
//! # fn main() -> Result<(), interval_data::error::Error> {
//! let mut builder = IntervalVolumeBuilder::create();
//! builder
//!     .rows(0.0, 2.0, 1.0)?
//!     .columns(0.0, 2.0, 1.0)?
//!     .levels(0.0, 2.0, 1.0)?;
//! let model = builder.build_singular(0.25)?;
//! assert_eq!(model.sum(), 2.0);
//!
//! let mut builder = IntervalVolumeBuilder::from_model(&model);
//! builder.add_volume(&model)?.add(0.1, 0.1, 1.9, 1.0)?;
//! let volume = builder.build()?;
//! assert_eq!(volume.get_at(0, 0, 1)?, 1.25);
//! assert_eq!(volume.collapse().get_at(0, 0)?, 1.5);
//! # Ok(())
//! # }
//! ```

mod builder;
mod container;

pub use self::builder::IntervalVolumeBuilder;
pub use self::container::IntervalVolume;

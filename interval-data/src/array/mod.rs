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

//! One-dimensional interval arrays.
//!
//! An [`IntervalArray`] holds one value per row bin. Values are addressed
//! either by a row value, which resolves to the bin containing it, or by bin
//! index. Only bin centers are exposed as row keys.
//!
//! Arrays are immutable. An [`IntervalArrayBuilder`] defines the rows,
//! accumulates values, and hands its data over to the array it builds.
//! Builders created with [`IntervalArrayBuilder::from_model`] reuse the row
//! keys of an existing array, so arrays built from one model can be summed
//! with [`IntervalArrayBuilder::add_array`] without comparing keys.
//!
//! # Usage
//!
//! ```rust
//! use interval_data::array::{IntervalArray, IntervalArrayBuilder};
//!
//! # fn main() -> Result<(), interval_data::error::Error> {
//! let model = IntervalArrayBuilder::with_rows(5.0, 8.0, 0.5)?.build()?;
//!
//! let mut total = IntervalArrayBuilder::from_model(&model);
//! for magnitude in [5.1, 6.3, 6.4, 7.9] {
//!     let mut builder = IntervalArrayBuilder::from_model(&model);
//!     builder.add(magnitude, 1.0)?;
//!     total.add_array(&builder.build()?)?;
//! }
//! let total = total.build()?;
//! assert_eq!(total.get(6.25)?, 2.0);
//! assert_eq!(total.max_index(), 2);
//! # Ok(())
//! # }
//! ```

mod builder;
mod container;

pub use self::builder::IntervalArrayBuilder;
pub use self::container::IntervalArray;

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

//! Two-dimensional interval tables.
//!
//! An [`IntervalTable`] holds one value per `(row, column)` cell. Rows are
//! the outer dimension: a row is a sequence of values keyed by column, and
//! collapsing a table sums each row into an
//! [`IntervalArray`](crate::array::IntervalArray).
//!
//! Tables built with [`IntervalTableBuilder::build_singular`] store a single
//! value for every cell. They answer every query a dense table does, and can
//! be added to a builder like any other table, but use memory proportional
//! to one row only.
//!
//! # Usage
//!
//! ```rust
//! use interval_data::table::IntervalTableBuilder;
//!
//! # fn main() -> Result<(), interval_data::error::Error> {
//! let mut builder = IntervalTableBuilder::create();
//! builder.rows(0.0, 2.0, 1.0)?.columns(0.0, 2.0, 1.0)?;
//! let table = builder.build_with(|row, column| row * 10.0 + column)?;
//! assert_eq!(table.get_at(1, 0)?, 15.5);
//! assert_eq!(table.interpolate(1.0, 1.0), 11.0);
//!
//! let uniform = IntervalTableBuilder::from_model(&table).build_singular(0.5)?;
//! let mut total = IntervalTableBuilder::copy_of(&table);
//! total.add_table(&uniform)?;
//! assert_eq!(total.build()?.sum(), table.sum() + 2.0);
//! # Ok(())
//! # }
//! ```

mod builder;
mod container;

pub use self::builder::IntervalTableBuilder;
pub use self::container::IntervalTable;

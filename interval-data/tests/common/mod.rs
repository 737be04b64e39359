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

#![allow(dead_code)]

use googletest::assert_that;
use googletest::prelude::near;
use interval_data::table::IntervalTable;
use interval_data::table::IntervalTableBuilder;

/// Rows `[0, 3)` and columns `[0, 4)`, both with unit bins.
pub fn unit_table_builder() -> IntervalTableBuilder {
    let mut builder = IntervalTableBuilder::create();
    builder
        .rows(0.0, 3.0, 1.0)
        .unwrap()
        .columns(0.0, 4.0, 1.0)
        .unwrap();
    builder
}

/// A unit table whose cells hold `row_key * column_key`.
pub fn product_table() -> IntervalTable {
    unit_table_builder()
        .build_with(|row, column| row * column)
        .unwrap()
}

pub fn assert_all_near(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "lengths differ");
    for (a, e) in actual.iter().zip(expected) {
        assert_that!(*a, near(*e, tolerance));
    }
}

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

mod common;

use common::assert_all_near;
use googletest::assert_that;
use googletest::prelude::eq;
use googletest::prelude::near;
use interval_data::interpolate::Interpolator;
use interval_data::interpolate::Scale;
use interval_data::sequence::XySequence;

const XS: [f64; 3] = [0.0, 1.0, 2.0];

#[test]
fn test_find_y_interpolates_and_extrapolates() {
    let interpolator = Interpolator::builder().build();
    let ys = [0.0, 10.0, 20.0];
    assert_that!(interpolator.find_y(&XS, &ys, 1.5), eq(15.0));
    assert_that!(interpolator.find_y(&XS, &ys, 1.0), eq(10.0));
    assert_that!(interpolator.find_y(&XS, &ys, -1.0), eq(-10.0));
    assert_that!(interpolator.find_y(&XS, &ys, 3.0), eq(30.0));
    assert_all_near(
        &interpolator.find_y_all(&XS, &ys, &[-0.5, 0.25, 2.5]),
        &[-5.0, 2.5, 25.0],
        1e-12,
    );
}

#[test]
fn test_find_x_never_extrapolates() {
    let interpolator = Interpolator::builder().decreasing().build();
    assert!(!interpolator.is_increasing());
    let ys = [1.0, 0.5, 0.0];
    assert_that!(interpolator.find_x(&XS, &ys, 0.75), eq(0.5));
    assert_that!(interpolator.find_x(&XS, &ys, 0.25), eq(1.5));
    assert_that!(interpolator.find_x(&XS, &ys, 2.0), eq(0.0));
    assert_that!(interpolator.find_x(&XS, &ys, -0.1), eq(0.0));

    let increasing = Interpolator::builder().build();
    assert_that!(increasing.find_x(&XS, &[0.0, 0.5, 1.0], 0.75), eq(1.5));
    assert_that!(increasing.find_x(&XS, &[0.0, 0.5, 1.0], 1.5), eq(0.0));
}

#[test]
fn test_log_strategies() {
    let xs = [1.0, 10.0, 100.0];
    let ys = [1.0, 0.1, 0.01];

    let log_x = Interpolator::builder().log_x().build();
    assert_eq!(log_x.scale(), Scale::LogX);
    assert_that!(log_x.find_y(&xs, &[0.0, 1.0, 2.0], 10f64.sqrt()), near(0.5, 1e-12));

    let log_y = Interpolator::builder().log_y().build();
    assert_eq!(log_y.scale(), Scale::LogY);
    assert_that!(log_y.find_y(&[0.0, 1.0, 2.0], &ys, 0.5), near(10f64.powf(-0.5), 1e-12));

    let log_log = Interpolator::builder().log_x().log_y().decreasing().build();
    assert_eq!(log_log.scale(), Scale::LogXLogY);
    assert_that!(log_log.find_y(&xs, &ys, 31.622776601683793), near(10f64.powf(-1.5), 1e-12));
    assert_that!(log_log.find_x(&xs, &ys, 0.05), near(20.0, 1e-9));
    assert_that!(log_log.find_x(&xs, &ys, 2.0), eq(0.0));
}

#[test]
fn test_sequence_forms() {
    let seq = XySequence::create(&XS, Some(&[1.0, 0.5, 0.0])).unwrap();
    let interpolator = Interpolator::builder().decreasing().build();
    assert_that!(interpolator.find_y_in(&seq, 0.5), eq(0.75));
    assert_that!(interpolator.find_x_in(&seq, 0.75), eq(0.5));
}

#[test]
fn test_segment_forms() {
    assert_that!(Interpolator::segment_y(0.0, 0.0, 2.0, 4.0, 1.0), eq(2.0));
    assert_that!(Interpolator::segment_x(0.0, 0.0, 2.0, 4.0, 1.0), eq(0.5));
    assert_eq!(Interpolator::default(), Interpolator::builder().build());
}

#[test]
#[should_panic(expected = "at least 2 values")]
fn test_mismatched_lengths() {
    Interpolator::default().find_x(&XS, &[1.0, 0.5], 0.75);
}

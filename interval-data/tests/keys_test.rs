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
use googletest::prelude::contains_substring;
use googletest::prelude::near;
use interval_data::common::check_delta;
use interval_data::common::clean;
use interval_data::common::round;
use interval_data::error::ErrorKind;
use interval_data::keys::Bins;
use interval_data::keys::KEY_SCALE;
use interval_data::keys::index_of;
use interval_data::keys::keys;

const SPECS: [(f64, f64, f64); 9] = [
    (0.0, 10.0, 2.0),
    (5.0, 8.0, 0.1),
    (4.65, 8.05, 0.1),
    (-2.0, 2.0, 0.25),
    (0.0, 1.0, 0.001),
    (10.0, 1010.0, 50.0),
    (0.0, 10.0, 3.0),
    (0.0, 1.0, 0.3),
    (5.0, 8.0, 0.7),
];

#[test]
fn test_key_generation_round_trips() {
    for (min, max, delta) in SPECS {
        let keys = keys(min, max, delta).unwrap();
        assert_eq!(keys.len(), ((max - min) / delta).round() as usize);
        assert_that!(keys[0], near(min + delta / 2.0, 1e-4));
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(index_of(min, delta, *key, keys.len()).unwrap(), i);
        }
    }
}

#[test]
fn test_keys_are_rounded() {
    let keys = keys(5.0, 8.0, 0.1).unwrap();
    assert_eq!(keys[2], 5.25);
    assert_eq!(keys[29], 7.95);
    for key in &keys {
        assert_eq!(*key, round(*key, KEY_SCALE));
    }
}

#[test]
fn test_uneven_range_rounds_key_count() {
    let ks = keys(0.0, 10.0, 3.0).unwrap();
    assert_eq!(ks, vec![1.5, 4.5, 7.5]);
    assert_eq!(index_of(0.0, 3.0, 8.9, ks.len()).unwrap(), 2);
    let err = index_of(0.0, 3.0, 9.5, ks.len()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);

    assert_eq!(keys(0.0, 1.0, 0.3).unwrap(), vec![0.15, 0.45, 0.75]);
    assert_eq!(keys(5.0, 8.0, 0.7).unwrap(), vec![5.35, 6.05, 6.75, 7.45]);
    assert_eq!(keys(0.0, 1.0, 0.4).unwrap().len(), 3);
}

#[test]
fn test_rounded_keys_stay_in_their_bins() {
    // 0.00036 rounds to 0.0004, which lies in bin 5 of 5
    let err = keys(0.0, 0.0004, 0.00008).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_that!(err.message(), contains_substring("too fine"));
    assert!(Bins::new(0.0, 0.0004, 0.00008).is_err());
    assert!(keys(0.0, 0.001, 0.0002).is_ok());
}

#[test]
fn test_invalid_discretizations() {
    let cases = [
        (0.0, 10.0, 0.0, "Invalid Δ"),
        (0.0, 10.0, 11.0, "Δ [11] > max - min [10]"),
        (3.0, 3.0, 1.0, "min [3] >= max [3]"),
        (5.0, 3.0, 1.0, "min [5] >= max [3]"),
        (f64::NAN, 3.0, 1.0, "Non-finite min value"),
        (0.0, f64::INFINITY, 1.0, "Non-finite max value"),
    ];
    for (min, max, delta, message) in cases {
        let err = keys(min, max, delta).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_that!(err.message(), contains_substring(message));
        assert!(Bins::new(min, max, delta).is_err());
    }
    assert_eq!(check_delta(0.0, 1.0, 1.0).unwrap(), 1.0);
}

#[test]
fn test_index_of_is_strict() {
    let bins = Bins::new(0.0, 10.0, 2.0).unwrap();
    assert_eq!(bins.index_of(0.0).unwrap(), 0);
    assert_eq!(bins.index_of(9.99).unwrap(), 4);
    for value in [-0.01, 10.0, 25.0] {
        let err = bins.index_of(value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
        assert_that!(err.message(), contains_substring("is outside bins [0, 10)"));
    }
}

#[test]
fn test_bins_domain_identity() {
    let a = Bins::new(5.0, 8.0, 0.1).unwrap();
    let b = Bins::new(5.0, 8.0, 0.1).unwrap();
    let c = Bins::new(5.0, 8.0, 0.2).unwrap();
    assert!(a.same_domain(&a.clone()));
    assert!(a.same_domain(&b));
    assert_eq!(a, b);
    assert!(!a.same_domain(&c));
    assert_ne!(a.fingerprint(), c.fingerprint());
    assert_eq!(a.len(), 30);
    assert_eq!(a.min(), 5.0);
    assert_eq!(a.max(), 8.0);
    assert_eq!(a.delta(), 0.1);
}

#[test]
fn test_clean() {
    let mut values = [0.1 + 0.2, 1.0 / 3.0, 2.0 / 3.0];
    clean(2, &mut values);
    assert_all_near(&values, &[0.3, 0.33, 0.67], 1e-12);
    assert_eq!(values, [0.3, 0.33, 0.67]);
}

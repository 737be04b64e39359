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

use googletest::assert_that;
use googletest::prelude::contains_substring;
use googletest::prelude::near;
use interval_data::array::IntervalArray;
use interval_data::array::IntervalArrayBuilder;
use interval_data::error::ErrorKind;
use interval_data::sequence::XyData;
use interval_data::sequence::XySequence;

#[test]
fn test_single_add() {
    let mut builder = IntervalArrayBuilder::with_rows(0.0, 10.0, 2.0).unwrap();
    builder.add(3.0, 5.0).unwrap();
    let array = builder.build().unwrap();

    assert_eq!(array.len(), 5);
    assert_eq!(array.rows(), &[1.0, 3.0, 5.0, 7.0, 9.0]);
    assert_eq!(array.get(3.0).unwrap(), 5.0);
    assert_eq!(array.get_at(1).unwrap(), 5.0);
    for i in [0, 2, 3, 4] {
        assert_eq!(array.get_at(i).unwrap(), 0.0);
    }
    assert_eq!(array.sum(), 5.0);
    assert_eq!(array.row_min(), 0.0);
    assert_eq!(array.row_max(), 10.0);
    assert_eq!(array.row_delta(), 2.0);
}

#[test]
fn test_strict_bounds() {
    let array = IntervalArrayBuilder::with_rows(0.0, 10.0, 2.0)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(array.get(10.0).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(array.get(-1.0).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(array.get_at(5).unwrap_err().kind(), ErrorKind::IndexOutOfRange);

    let mut builder = IntervalArrayBuilder::from_model(&array);
    assert_eq!(builder.set(12.0, 1.0).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(builder.add_at(7, 1.0).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
}

#[test]
fn test_bulk_adds_accumulate() {
    let mut builder = IntervalArrayBuilder::with_rows(0.0, 5.0, 1.0).unwrap();
    builder
        .set_at(0, 10.0)
        .unwrap()
        .add_all(&[1.0, 2.0, 3.0])
        .unwrap()
        .add_all(&[1.0, 1.0, 1.0, 1.0, 1.0])
        .unwrap();
    let err = builder.add_all(&[0.0; 6]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert_that!(err.message(), contains_substring("overrun end of rows"));

    let seq = XySequence::create(&[100.0, 200.0], Some(&[0.5, 0.5])).unwrap();
    builder.add_sequence(&seq).unwrap();
    let array = builder.build().unwrap();
    assert_eq!(array.values().ys(), &[12.5, 3.5, 4.0, 1.0, 1.0]);
}

#[test]
fn test_add_from_row() {
    let mut builder = IntervalArrayBuilder::with_rows(0.0, 10.0, 2.0).unwrap();
    builder
        .add_from(4.5, &[1.0, 2.0])
        .unwrap()
        .add_from(6.0, &[1.0, 1.0])
        .unwrap();
    let err = builder.add_from(7.9, &[1.0, 1.0, 1.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert_that!(err.message(), contains_substring("overrun end of rows"));
    let err = builder.add_from(10.0, &[1.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);

    let array = builder.build().unwrap();
    assert_eq!(array.values().ys(), &[0.0, 0.0, 1.0, 3.0, 1.0]);
}

#[test]
fn test_add_each() {
    let mut builder = IntervalArrayBuilder::with_rows(5.0, 7.0, 0.5).unwrap();
    let seq = XySequence::create(&[5.1, 5.2, 6.9], Some(&[1.0, 2.0, 4.0])).unwrap();
    builder.add_each(&seq).unwrap();

    let outside = XySequence::create(&[5.1, 7.1], Some(&[1.0, 1.0])).unwrap();
    assert!(builder.add_each(&outside).is_err());

    let array = builder.build().unwrap();
    assert_eq!(array.values().ys(), &[3.0, 0.0, 0.0, 4.0]);
}

#[test]
fn test_add_array_validates_rows() {
    let model = IntervalArrayBuilder::with_rows(0.0, 1.0, 0.1)
        .unwrap()
        .build()
        .unwrap();
    let twin = IntervalArrayBuilder::with_rows(0.0, 1.0, 0.1)
        .unwrap()
        .build_with(|row| row * 2.0)
        .unwrap();
    let other = IntervalArrayBuilder::with_rows(0.0, 1.1, 0.1)
        .unwrap()
        .build()
        .unwrap();

    let mut builder = IntervalArrayBuilder::from_model(&model);
    builder.add_array(&twin).unwrap().add_array(&twin).unwrap();
    let err = builder.add_array(&other).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_that!(err.message(), contains_substring("Row keys do not match"));

    let total = builder.build().unwrap();
    assert_that!(total.get_at(9).unwrap(), near(3.8, 1e-12));
    assert_that!(total.sum(), near(20.0, 1e-12));
}

#[test]
fn test_copy_multiply_and_extremes() {
    let array = IntervalArrayBuilder::with_rows(0.0, 4.0, 1.0)
        .unwrap()
        .build_with(|row| (row - 2.0).abs())
        .unwrap();
    assert_eq!(array.values().ys(), &[1.5, 0.5, 0.5, 1.5]);
    assert_eq!(array.min_index(), 1);
    assert_eq!(array.max_index(), 0);

    let mut builder = IntervalArrayBuilder::copy_of(&array);
    builder.multiply(2.0).unwrap();
    let doubled = builder.build().unwrap();
    assert_eq!(doubled.values().ys(), &[3.0, 1.0, 1.0, 3.0]);
    assert_eq!(array.sum(), 4.0);
}

#[test]
fn test_builder_state() {
    let mut builder = IntervalArray::builder();
    let err = builder.add(1.0, 1.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalState);
    assert_that!(err.message(), contains_substring("Row data have not yet been fully specified"));

    builder.rows(0.0, 2.0, 1.0).unwrap();
    let err = builder.rows(0.0, 3.0, 1.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalState);
    assert_that!(err.message(), contains_substring("already been initialized"));

    let err = IntervalArray::builder().rows(0.0, 1.0, 2.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_try_build_with() {
    let err = IntervalArrayBuilder::with_rows(0.0, 3.0, 1.0)
        .unwrap()
        .try_build_with(|row| {
            if row > 1.0 {
                Err(std::io::Error::other("no data"))
            } else {
                Ok(row)
            }
        })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ComputeFailed);
    assert_that!(err.to_string(), contains_substring("row: 1.5"));
    assert!(std::error::Error::source(&err).is_some());

    let array = IntervalArrayBuilder::with_rows(0.0, 3.0, 1.0)
        .unwrap()
        .try_build_with(|row| Ok::<_, std::io::Error>(row + 1.0))
        .unwrap();
    assert_eq!(array.values().ys(), &[1.5, 2.5, 3.5]);
}

#[test]
fn test_display() {
    let mut builder = IntervalArrayBuilder::with_rows(0.0, 2.0, 1.0).unwrap();
    builder.set_at(1, 250.0).unwrap();
    let array = builder.build().unwrap();
    assert_eq!(
        array.to_string(),
        "[    0.50,     1.50]\n[     0.0, 2.50e+02]\n"
    );
}

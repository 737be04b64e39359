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

//! Interval-indexed containers of binned numeric data.
//!
//! This crate provides one-, two- and three-dimensional containers whose
//! dimensions are divided into bins of equal width. Each dimension is
//! described by a minimum, a maximum and a bin width Δ; a value is resolved
//! to the bin whose edges contain it, while the only coordinates the
//! containers expose are the bin centers, or keys.
//!
//! - [`array::IntervalArray`], [`table::IntervalTable`] and
//!   [`volume::IntervalVolume`] are immutable containers, each created by a
//!   single-use builder.
//! - [`sequence::XySequence`] is an x-monotonic sequence of xy-value pairs
//!   supporting element-wise arithmetic between sequences with the same
//!   x-values. Containers hand out borrowed [`sequence::XyView`]s of their
//!   rows and columns.
//! - [`interpolate::Interpolator`] performs linear or log-scaled
//!   interpolation over xy-values.
//! - [`keys`] holds the key generation and index resolution rules shared by
//!   every container.
//!
//! All fallible operations return [`error::Error`]. The crate emits
//! [`tracing`] events but never installs a subscriber.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod array;
pub mod common;
pub mod error;
pub mod interpolate;
pub mod keys;
pub mod sequence;
pub mod table;
pub mod volume;

mod storage;

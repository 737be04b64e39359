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

//! Shared numeric helpers for keys, sequences and containers.

mod checks;
mod format;
mod math;

pub use self::checks::check_delta;
pub use self::checks::check_finite;
pub(crate) use self::checks::check_monotonic;
pub(crate) use self::checks::check_run;
pub(crate) use self::format::grid_line;
pub(crate) use self::format::key_cell;
pub(crate) use self::format::value_cell;
pub use self::math::clean;
pub(crate) use self::math::collapse;
pub(crate) use self::math::max_index;
pub(crate) use self::math::min_index;
pub use self::math::round;
pub(crate) use self::math::unchecked_add;

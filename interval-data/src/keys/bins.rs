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

use std::fmt;
use std::sync::Arc;

use super::fingerprint::fingerprint;
use super::index_of;
use super::keys;
use crate::error::Error;

/// A validated bin specification for one dimension of an interval container.
///
/// `Bins` retains the keys computed at construction and shares them between
/// builders, containers and sequence views; cloning a `Bins` never
/// regenerates or copies keys.
#[derive(Clone)]
pub struct Bins {
    min: f64,
    max: f64,
    delta: f64,
    keys: Arc<[f64]>,
    fingerprint: u64,
}

impl Bins {
    /// Creates a bin specification.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
    /// if `min`, `max` and `delta` do not describe at least one bin.
    pub fn new(min: f64, max: f64, delta: f64) -> Result<Self, Error> {
        let keys = keys(min, max, delta)?;
        let fingerprint = fingerprint(&keys);
        Ok(Self {
            min,
            max,
            delta,
            keys: Arc::from(keys),
            fingerprint,
        })
    }

    /// Returns the lower edge of the lowermost bin.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper edge of the uppermost bin as supplied.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the bin width.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Returns the keys (bin centers).
    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    pub(crate) fn shared_keys(&self) -> &Arc<[f64]> {
        &self.keys
    }

    /// Returns the number of bins.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; a bin specification has at least one bin.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the fingerprint of the keys.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Returns the index of the bin containing `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange)
    /// if `value` is outside `[min, min + len·Δ)`.
    pub fn index_of(&self, value: f64) -> Result<usize, Error> {
        index_of(self.min, self.delta, value, self.keys.len())
    }

    /// Returns true if `other` has the same keys.
    ///
    /// Bins cloned from one another share their keys and are accepted without
    /// looking at the values. Differing fingerprints reject immediately; only
    /// distinct allocations with equal fingerprints are compared elementwise.
    pub fn same_domain(&self, other: &Bins) -> bool {
        if Arc::ptr_eq(&self.keys, &other.keys) {
            return true;
        }
        if self.fingerprint != other.fingerprint {
            tracing::debug!(
                this = self.fingerprint,
                that = other.fingerprint,
                "key fingerprints differ"
            );
            return false;
        }
        tracing::debug!(len = self.keys.len(), "comparing keys elementwise");
        self.keys[..] == other.keys[..]
    }

    pub(crate) fn check_same_domain(&self, other: &Bins, dimension: &'static str) -> Result<(), Error> {
        if self.same_domain(other) {
            Ok(())
        } else {
            Err(Error::invalid_argument(format!("{dimension} keys do not match"))
                .with_context("this", format!("{self:?}"))
                .with_context("that", format!("{other:?}")))
        }
    }
}

impl PartialEq for Bins {
    fn eq(&self, other: &Self) -> bool {
        self.same_domain(other)
    }
}

impl fmt::Debug for Bins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bins")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("delta", &self.delta)
            .field("len", &self.keys.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_keys() {
        let bins = Bins::new(0.0, 1.0, 0.1).unwrap();
        let copy = bins.clone();
        assert!(Arc::ptr_eq(bins.shared_keys(), copy.shared_keys()));
        assert!(bins.same_domain(&copy));
    }

    #[test]
    fn test_independent_equal_bins() {
        let a = Bins::new(0.0, 1.0, 0.1).unwrap();
        let b = Bins::new(0.0, 1.0, 0.1).unwrap();
        assert!(!Arc::ptr_eq(a.shared_keys(), b.shared_keys()));
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert!(a.same_domain(&b));
    }

    #[test]
    fn test_different_bins() {
        let a = Bins::new(0.0, 1.0, 0.1).unwrap();
        let b = Bins::new(0.0, 1.0, 0.2).unwrap();
        let c = Bins::new(0.1, 1.1, 0.1).unwrap();
        assert!(!a.same_domain(&b));
        assert!(!a.same_domain(&c));
        let err = a.check_same_domain(&c, "Row").unwrap_err();
        assert_eq!(err.message(), "Row keys do not match");
    }
}

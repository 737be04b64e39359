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

use super::XyData;
use super::XySequence;
use super::private::Sealed;

/// An immutable view over a slice of container data keyed by one of the
/// container's key arrays.
///
/// Views borrow from the container that produced them, so no data is copied
/// until [`XyView::to_sequence`] is called.
#[derive(Debug, Clone, Copy)]
pub struct XyView<'a> {
    xs: &'a Arc<[f64]>,
    ys: &'a [f64],
}

impl<'a> XyView<'a> {
    pub(crate) fn new(xs: &'a Arc<[f64]>, ys: &'a [f64]) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        Self { xs, ys }
    }

    /// Copies the y-values into a new mutable sequence. The x-values stay
    /// shared with the container.
    pub fn to_sequence(&self) -> XySequence {
        XySequence::copy_of(self)
    }

    /// Copies the y-values into a new immutable sequence.
    pub fn to_immutable(&self) -> XySequence {
        XySequence::immutable_copy_of(self)
    }
}

impl Sealed for XyView<'_> {}

impl XyData for XyView<'_> {
    fn xs(&self) -> &[f64] {
        self.xs
    }

    fn ys(&self) -> &[f64] {
        self.ys
    }

    fn x_domain(&self) -> &Arc<[f64]> {
        self.xs
    }
}

impl PartialEq for XyView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.xs[..] == other.xs[..] && self.ys == other.ys
    }
}

impl PartialEq<XySequence> for XyView<'_> {
    fn eq(&self, other: &XySequence) -> bool {
        self.xs() == other.xs() && self.ys() == other.ys()
    }
}

impl fmt::Display for XyView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XyView:")?;
        for point in self.points() {
            write!(f, "\n{point}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_sequence_shares_keys() {
        let keys: Arc<[f64]> = Arc::from(vec![0.5, 1.5, 2.5]);
        let data = [1.0, 2.0, 3.0];
        let view = XyView::new(&keys, &data);
        let mut seq = view.to_sequence();
        assert!(Arc::ptr_eq(seq.x_domain(), &keys));
        seq.add_sequence(&view).unwrap();
        assert_eq!(seq.ys(), &[2.0, 4.0, 6.0]);
        assert_eq!(data, [1.0, 2.0, 3.0]);
        assert!(!view.to_immutable().is_mutable());
    }
}

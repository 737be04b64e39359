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

const FINGERPRINT_SEED: u32 = 9001;

/// Hashes the length and bit patterns of `values` with 128-bit murmur3,
/// folded to 64 bits.
pub(super) fn fingerprint(values: &[f64]) -> u64 {
    let mut bytes = Vec::with_capacity(8 * (values.len() + 1));
    bytes.extend_from_slice(&(values.len() as u64).to_le_bytes());
    for value in values {
        bytes.extend_from_slice(&value.to_bits().to_le_bytes());
    }
    let (h1, h2) = mur3::murmurhash3_x64_128(&bytes, FINGERPRINT_SEED);
    h1 ^ h2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable_and_sensitive() {
        let a = fingerprint(&[0.5, 1.5, 2.5]);
        assert_eq!(a, fingerprint(&[0.5, 1.5, 2.5]));
        assert_ne!(a, fingerprint(&[0.5, 1.5, 2.6]));
        assert_ne!(a, fingerprint(&[0.5, 1.5]));
    }
}

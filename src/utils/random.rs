// Copyright 2025 Fondazione LINKS

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use bls12_381_plus::{G2Projective, Scalar};
use group::Group;
use rand::{CryptoRng, RngCore};

/// Samples a uniformly random scalar in Zr.
///
/// 48 uniform bytes are reduced modulo the group order so that the bias of a
/// direct 32-byte reduction is avoided.
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
    let mut buf = [0u8; 48];
    rng.fill_bytes(&mut buf);
    Scalar::from_okm(&buf)
}

/// Samples a random G2 element, used as the per-system generator.
pub fn random_g2<R: RngCore + CryptoRng>(rng: &mut R) -> G2Projective {
    G2Projective::random(rng)
}

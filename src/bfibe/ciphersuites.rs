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

use digest::HashMarker;
use elliptic_curve::hash2curve::{ExpandMsg, ExpandMsgXmd, ExpandMsgXof};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sha2::Sha256;
use sha3::Shake256;

/// Configuration of the bilinear group instantiation.
///
/// The pairing is the asymmetric BLS12-381 map `e: G1 x G2 -> GT`. Identity
/// hash points and extracted keys live in G1; the generator, the authority
/// value `g^x` and the first ciphertext component live in G2. The ciphersuite
/// fixes the hash primitive behind the two protocol hashes and the domain
/// separation tags that keep them independent.
pub trait IbeCiphersuite:
    Clone + Eq + core::fmt::Debug + Serialize + DeserializeOwned + 'static
{
    /// Identifier of the suite, stored alongside published parameters.
    const ID: &'static [u8];
    /// Domain separation tag of the identity hash (`H1: bytes -> G1`).
    const IDENTITY_DST: &'static [u8];
    /// Domain separation tag of the mask derivation (`H2: GT -> keystream`).
    const MASK_DST: &'static [u8];
    type HashAlg: HashMarker;
    type Expander: ExpandMsg<'static>;
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Bls12381Shake256 {}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Bls12381Sha256 {}

impl IbeCiphersuite for Bls12381Shake256 {
    const ID: &'static [u8] = b"BFIBE_BLS12381G1_XOF:SHAKE-256_SSWU_RO_";
    const IDENTITY_DST: &'static [u8] = b"BFIBE_BLS12381G1_XOF:SHAKE-256_SSWU_RO_H2G_";
    const MASK_DST: &'static [u8] = b"BFIBE_BLS12381G1_XOF:SHAKE-256_SSWU_RO_H2M_";
    type HashAlg = Shake256;
    type Expander = ExpandMsgXof<Self::HashAlg>;
}

impl IbeCiphersuite for Bls12381Sha256 {
    const ID: &'static [u8] = b"BFIBE_BLS12381G1_XMD:SHA-256_SSWU_RO_";
    const IDENTITY_DST: &'static [u8] = b"BFIBE_BLS12381G1_XMD:SHA-256_SSWU_RO_H2G_";
    const MASK_DST: &'static [u8] = b"BFIBE_BLS12381G1_XMD:SHA-256_SSWU_RO_H2M_";
    type HashAlg = Sha256;
    type Expander = ExpandMsgXmd<Self::HashAlg>;
}

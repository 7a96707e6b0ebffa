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

use std::path::Path;

use bls12_381_plus::{pairing, G2Affine, G2Projective};
use elliptic_curve::group::Curve;
use elliptic_curve::hash2curve::ExpandMsg;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use super::ciphersuites::IbeCiphersuite;
use super::keys::{BFIbePublicKey, BFIbeUserSecretKey};
use crate::errors::Error;
use crate::records::PropertySet;
use crate::utils::random::random_scalar;
use crate::utils::util::{g2_from_bytes, hash_to_point, keystream};

/// Ciphertext bound to one identity: `c1 = g^r`, `c2 = m XOR H2(gID)`.
///
/// `c2` has exactly the length of the plaintext; the scheme reveals message
/// length by design. It also carries no integrity tag: decrypting with a key
/// extracted for a different identity, or after `c1`/`c2` have been tampered
/// with, yields plausible-looking garbage with no detectable error.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BFIbeCiphertext {
    pub c1: G2Projective,
    pub c2: Vec<u8>,
}

impl BFIbeCiphertext {
    /// Encrypt: produces a ciphertext for an identity under the published
    /// parameters.
    ///
    /// # Description
    /// Computes `Q_id = H1(identity)`, samples a fresh ephemeral `r <- Zr`,
    /// and returns `c1 = g^r` together with the message masked by the
    /// keystream of `gID = e(Q_id, g^x)^r`. Probabilistic: two calls with the
    /// same inputs differ in `c1` with overwhelming probability.
    ///
    /// # Inputs:
    /// * `pk` (REQUIRED), the published parameters `{g, g^x}`.
    /// * `identity` (REQUIRED), the recipient identity octet string.
    /// * `message` (REQUIRED), the plaintext, any length.
    /// * `rng` (REQUIRED), a cryptographically secure random generator.
    ///
    /// # Output:
    /// * [`BFIbeCiphertext`]
    pub fn encrypt<CS, R>(
        pk: &BFIbePublicKey,
        identity: &[u8],
        message: &[u8],
        rng: &mut R,
    ) -> Self
    where
        CS: IbeCiphersuite,
        CS::Expander: for<'a> ExpandMsg<'a>,
        R: RngCore + CryptoRng,
    {
        let Q_id = hash_to_point::<CS>(identity);
        // fresh per call; reusing r across encryptions would let anyone who
        // recovers one gID relate the ciphertexts
        let r = random_scalar(rng);
        // c1 = g^r
        let c1 = pk.g * r;
        // gID = e(Q_id, g^x)^r
        let g_id = pairing(&Q_id.to_affine(), &pk.g_x.to_affine()) * r;
        let mask = keystream::<CS>(&g_id, message.len());
        let c2 = message.iter().zip(mask.iter()).map(|(m, k)| m ^ k).collect();

        Self { c1, c2 }
    }

    /// Decrypt: recovers the plaintext with an extracted key.
    ///
    /// # Description
    /// Computes `gID = e(sk_id, c1)`, which by bilinearity equals
    /// `e(Q_id, g^x)^r` when the key was extracted for the identity this
    /// ciphertext was produced for, and unmasks `c2`. Always returns bytes:
    /// a mismatched key is not detected here.
    ///
    /// # Inputs:
    /// * `usk` (REQUIRED), the recipient decryption key `sk_id`.
    ///
    /// # Output:
    /// * the plaintext, of length `c2.len()`
    pub fn decrypt<CS>(&self, usk: &BFIbeUserSecretKey) -> Vec<u8>
    where
        CS: IbeCiphersuite,
        CS::Expander: for<'a> ExpandMsg<'a>,
    {
        // gID = e(sk_id, c1) = e(Q_id^x, g^r)
        let g_id = pairing(&usk.0.to_affine(), &self.c1.to_affine());
        let mask = keystream::<CS>(&g_id, self.c2.len());
        self.c2.iter().zip(mask.iter()).map(|(c, k)| c ^ k).collect()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(G2Affine::COMPRESSED_BYTES + self.c2.len());
        bytes.extend_from_slice(&self.c1.to_affine().to_compressed());
        bytes.extend_from_slice(&self.c2);
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < G2Affine::COMPRESSED_BYTES {
            return Err(Error::MalformedElement("ciphertext length".to_owned()));
        }
        let c1 = g2_from_bytes(&bytes[..G2Affine::COMPRESSED_BYTES])?;
        let c2 = bytes[G2Affine::COMPRESSED_BYTES..].to_vec();
        Ok(Self { c1, c2 })
    }

    pub fn to_properties(&self) -> PropertySet {
        let mut props = PropertySet::new();
        props.set_bytes("C1", &self.c1.to_affine().to_compressed());
        props.set_bytes("C2", &self.c2);
        props
    }

    pub fn from_properties(props: &PropertySet) -> Result<Self, Error> {
        let c1 = g2_from_bytes(&props.get_bytes("C1")?)?;
        let c2 = props.get_bytes("C2")?;
        Ok(Self { c1, c2 })
    }

    pub fn store(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.to_properties().store(path)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::from_properties(&PropertySet::load(path)?)
    }
}

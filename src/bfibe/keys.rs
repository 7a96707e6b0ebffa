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

use bls12_381_plus::{G1Affine, G1Projective, G2Affine, G2Projective, Scalar};
use elliptic_curve::group::Curve;
use elliptic_curve::hash2curve::ExpandMsg;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use super::ciphersuites::IbeCiphersuite;
use crate::errors::Error;
use crate::keys::key::{PrivateKey, PublicKey};
use crate::keys::pair::KeyPair;
use crate::records::PropertySet;
use crate::schemes::algorithms::BFIbe;
use crate::utils::random::{random_g2, random_scalar};
use crate::utils::util::{g1_from_bytes, g2_from_bytes, hash_to_point, scalar_from_bytes, ScalarExt};

/// Master secret of the authority, the scalar `x`.
///
/// Compromise of this value makes every extracted key forgeable; it is
/// created once by setup and never mutated afterwards.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BFIbeSecretKey(pub Scalar);

/// Published parameters `{g, g^x}`, read by anyone encrypting.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BFIbePublicKey {
    pub g: G2Projective,
    pub g_x: G2Projective,
}

/// Decryption key of a single identity, `sk_id = H1(id)^x`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BFIbeUserSecretKey(pub G1Projective);

impl BFIbeSecretKey {
    //in BE order
    pub fn to_bytes(&self) -> [u8; Scalar::BYTES] {
        self.0.to_bytes_be()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Ok(Self(scalar_from_bytes(bytes)?))
    }

    pub fn encode(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Extract: derives the decryption key of an identity.
    ///
    /// # Description
    /// Computes `Q_id = H1(identity)` and `sk_id = Q_id^x`. Deterministic:
    /// extracting twice for the same identity yields the same key, across
    /// calls and across process restarts.
    ///
    /// # Inputs:
    /// * `identity` (REQUIRED), the identity octet string the key is bound to.
    ///
    /// # Output:
    /// * [`BFIbeUserSecretKey`]
    pub fn extract<CS>(&self, identity: &[u8]) -> BFIbeUserSecretKey
    where
        CS: IbeCiphersuite,
        CS::Expander: for<'a> ExpandMsg<'a>,
    {
        let Q_id = hash_to_point::<CS>(identity);
        // sk_id = Q_id^x
        BFIbeUserSecretKey(Q_id * self.0)
    }

    pub fn to_properties(&self) -> PropertySet {
        let mut props = PropertySet::new();
        props.set_bytes("x", &self.to_bytes());
        props
    }

    pub fn from_properties(props: &PropertySet) -> Result<Self, Error> {
        Self::from_bytes(&props.get_bytes("x")?)
    }

    pub fn store(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.to_properties().store(path)
    }

    /// Loads the master secret record; an unreadable file surfaces
    /// [`Error::KeyUnavailable`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let props = PropertySet::load(path).map_err(|e| match e {
            Error::Io(msg) => Error::KeyUnavailable(msg),
            other => other,
        })?;
        Self::from_properties(&props)
    }
}

impl BFIbePublicKey {
    pub const LENGTH: usize = 2 * G2Affine::COMPRESSED_BYTES;

    pub fn to_bytes(&self) -> [u8; Self::LENGTH] {
        let mut bytes = [0u8; Self::LENGTH];
        bytes[..G2Affine::COMPRESSED_BYTES]
            .copy_from_slice(&self.g.to_affine().to_compressed());
        bytes[G2Affine::COMPRESSED_BYTES..]
            .copy_from_slice(&self.g_x.to_affine().to_compressed());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != Self::LENGTH {
            return Err(Error::MalformedElement("public key length".to_owned()));
        }
        let g = g2_from_bytes(&bytes[..G2Affine::COMPRESSED_BYTES])?;
        let g_x = g2_from_bytes(&bytes[G2Affine::COMPRESSED_BYTES..])?;
        Ok(Self { g, g_x })
    }

    pub fn encode(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// The record also names the pairing instantiation it was produced
    /// under, so parameters cannot silently be reused across suites.
    pub fn to_properties<CS: IbeCiphersuite>(&self) -> PropertySet {
        let mut props = PropertySet::new();
        props.set_text("suite", &String::from_utf8_lossy(CS::ID));
        props.set_bytes("g", &self.g.to_affine().to_compressed());
        props.set_bytes("g_x", &self.g_x.to_affine().to_compressed());
        props
    }

    pub fn from_properties<CS: IbeCiphersuite>(props: &PropertySet) -> Result<Self, Error> {
        let suite = props.get_text("suite")?;
        if suite.as_bytes() != CS::ID {
            return Err(Error::InvalidParameters(suite.to_owned()));
        }
        let g = g2_from_bytes(&props.get_bytes("g")?)?;
        let g_x = g2_from_bytes(&props.get_bytes("g_x")?)?;
        Ok(Self { g, g_x })
    }

    pub fn store<CS: IbeCiphersuite>(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.to_properties::<CS>().store(path)
    }

    pub fn load<CS: IbeCiphersuite>(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::from_properties::<CS>(&PropertySet::load(path)?)
    }
}

impl BFIbeUserSecretKey {
    pub fn to_bytes(&self) -> [u8; G1Affine::COMPRESSED_BYTES] {
        self.0.to_affine().to_compressed()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Ok(Self(g1_from_bytes(bytes)?))
    }

    pub fn encode(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn to_properties(&self) -> PropertySet {
        let mut props = PropertySet::new();
        props.set_bytes("sk", &self.to_bytes());
        props
    }

    pub fn from_properties(props: &PropertySet) -> Result<Self, Error> {
        Self::from_bytes(&props.get_bytes("sk")?)
    }

    pub fn store(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.to_properties().store(path)
    }

    /// Loads a private key record; an unreadable file surfaces
    /// [`Error::KeyUnavailable`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let props = PropertySet::load(path).map_err(|e| match e {
            Error::Io(msg) => Error::KeyUnavailable(msg),
            other => other,
        })?;
        Self::from_properties(&props)
    }
}

impl PublicKey for BFIbePublicKey {
    type Output = [u8; Self::LENGTH];

    fn to_bytes(&self) -> Self::Output {
        self.to_bytes()
    }

    fn encode(&self) -> String {
        self.encode()
    }
}

impl PrivateKey for BFIbeSecretKey {
    type Output = [u8; Scalar::BYTES];

    fn to_bytes(&self) -> Self::Output {
        self.to_bytes()
    }

    fn encode(&self) -> String {
        self.encode()
    }
}

impl PrivateKey for BFIbeUserSecretKey {
    type Output = [u8; G1Affine::COMPRESSED_BYTES];

    fn to_bytes(&self) -> Self::Output {
        self.to_bytes()
    }

    fn encode(&self) -> String {
        self.encode()
    }
}

impl<CS: IbeCiphersuite> KeyPair<BFIbe<CS>> {
    /// Setup: creates the master secret and the published parameters.
    ///
    /// # Description
    /// Samples `x <- Zr` and a random generator `g` of G2, computes `g^x`.
    /// Always succeeds given a cryptographically secure source of
    /// randomness; the sampling is the only side effect.
    ///
    /// # Inputs:
    /// * `rng` (REQUIRED), a cryptographically secure random generator.
    ///
    /// # Output:
    /// * [`KeyPair`] holding `{g, g^x}` and `{x}`
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let x = random_scalar(rng);
        let g = random_g2(rng);
        // g^x
        let g_x = g * x;
        Self {
            public: BFIbePublicKey { g, g_x },
            private: BFIbeSecretKey(x),
        }
    }
}

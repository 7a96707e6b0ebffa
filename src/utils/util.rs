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

use bls12_381_plus::{G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar};
use elliptic_curve::hash2curve::{ExpandMsg, Expander};
use group::GroupEncoding;

use crate::bfibe::ciphersuites::IbeCiphersuite;
use crate::errors::Error;

/// Length of one keystream segment.
///
/// Must stay within the expand_message output bound of every suite expander
/// (255 * 32 bytes for XMD over SHA-256, 65535 bytes for XOF).
pub(crate) const KEYSTREAM_SEGMENT_LEN: usize = 4096;

/// H1: maps an identity octet string to a point of G1.
///
/// Deterministic hash-to-curve (RFC 9380) under the suite identity tag, so an
/// identity never has a known discrete-log relation to the generator.
pub fn hash_to_point<CS>(identity: &[u8]) -> G1Projective
where
    CS: IbeCiphersuite,
    CS::Expander: for<'a> ExpandMsg<'a>,
{
    G1Projective::hash::<CS::Expander>(identity, CS::IDENTITY_DST)
}

/// H2: derives a `len`-byte mask from a target group element.
///
/// The stream is produced in indexed segments,
/// `expand_message(bytes(gID) || I2OSP(segment, 8), MASK_DST, segment_len)`,
/// so a long message never sees the same digest bytes twice. The mask is a
/// pure function of `(gID, len)`.
pub fn keystream<CS>(shared: &Gt, len: usize) -> Vec<u8>
where
    CS: IbeCiphersuite,
    CS::Expander: for<'a> ExpandMsg<'a>,
{
    let shared_bytes = shared.to_bytes();
    let mut mask = vec![0u8; len];

    for (segment, chunk) in mask.chunks_mut(KEYSTREAM_SEGMENT_LEN).enumerate() {
        let counter = i2osp(segment, 8);
        CS::Expander::expand_message(
            &[shared_bytes.as_ref(), &counter],
            &[CS::MASK_DST],
            chunk.len(),
        )
        .unwrap()
        .fill_bytes(chunk);
    }

    mask
}

pub fn i2osp(value: usize, len: usize) -> Vec<u8> {
    let bytes = (value as u64).to_be_bytes();
    bytes[core::mem::size_of::<u64>() - len..].to_vec()
}

pub fn scalar_from_bytes(bytes: &[u8]) -> Result<Scalar, Error> {
    let bytes: [u8; Scalar::BYTES] = bytes
        .try_into()
        .map_err(|_| Error::MalformedElement("scalar length".to_owned()))?;
    Option::<Scalar>::from(Scalar::from_be_bytes(&bytes))
        .ok_or_else(|| Error::MalformedElement("scalar encoding".to_owned()))
}

pub fn g1_from_bytes(bytes: &[u8]) -> Result<G1Projective, Error> {
    let bytes: [u8; G1Affine::COMPRESSED_BYTES] = bytes
        .try_into()
        .map_err(|_| Error::MalformedElement("G1 length".to_owned()))?;
    Option::<G1Affine>::from(G1Affine::from_compressed(&bytes))
        .map(G1Projective::from)
        .ok_or_else(|| Error::MalformedElement("G1 encoding".to_owned()))
}

pub fn g2_from_bytes(bytes: &[u8]) -> Result<G2Projective, Error> {
    let bytes: [u8; G2Affine::COMPRESSED_BYTES] = bytes
        .try_into()
        .map_err(|_| Error::MalformedElement("G2 length".to_owned()))?;
    Option::<G2Affine>::from(G2Affine::from_compressed(&bytes))
        .map(G2Projective::from)
        .ok_or_else(|| Error::MalformedElement("G2 encoding".to_owned()))
}

pub trait ScalarExt {
    fn to_bytes_be(&self) -> [u8; Scalar::BYTES];
}

impl ScalarExt for Scalar {
    //in BE order
    fn to_bytes_be(&self) -> [u8; Scalar::BYTES] {
        self.to_be_bytes()
    }
}

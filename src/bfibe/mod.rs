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

//! The [Boneh-Franklin Identity-Based Encryption scheme](https://crypto.stanford.edu/~dabo/papers/bfibe.pdf)
//! lets a sender encrypt to any recipient knowing only a public identity
//! string (an email address, a device name), with no prior key exchange. A
//! trusted authority holds a master secret `x` and publishes `{g, g^x}`; on
//! request it derives the decryption key `sk_id = H1(id)^x` for an identity.
//! Encryption picks a fresh ephemeral `r`, sends `c1 = g^r` and masks the
//! message with a keystream derived from `gID = e(H1(id), g^x)^r`; decryption
//! recomputes the same `gID` as `e(sk_id, c1)` by bilinearity.
//! Key characteristics:
//! - **BasicIdent variant**: IND-ID-CPA, confidentiality only. There is no
//!   integrity tag, so a wrong key or a tampered ciphertext produces garbage
//!   silently instead of an error.
//! - **Length revealing**: the masked component has exactly the length of the
//!   plaintext; hiding message length is out of scope.
//! - **Probabilistic**: the ephemeral `r` is sampled per call, so encrypting
//!   the same message twice yields different ciphertexts.

/// Module for ciphersuites
pub mod ciphersuites;
/// Module for ciphertexts
pub mod ciphertext;
/// Module for keys
pub mod keys;

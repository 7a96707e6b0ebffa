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

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::bfibe::ciphersuites::{Bls12381Sha256, Bls12381Shake256, IbeCiphersuite};
use crate::bfibe::keys::{BFIbePublicKey, BFIbeSecretKey};
use crate::keys::key::{PrivateKey, PublicKey};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BFIbe<CS: IbeCiphersuite>(PhantomData<CS>);

pub type IbeBls12381Sha256 = BFIbe<Bls12381Sha256>;
pub type IbeBls12381Shake256 = BFIbe<Bls12381Shake256>;

pub trait Scheme: Eq + 'static + Sized + Serialize + DeserializeOwned {
    type Ciphersuite: IbeCiphersuite;
    type PrivKey: PrivateKey;
    type PubKey: PublicKey;
}

impl<CS: IbeCiphersuite> Scheme for BFIbe<CS> {
    type Ciphersuite = CS;
    type PrivKey = BFIbeSecretKey;
    type PubKey = BFIbePublicKey;
}

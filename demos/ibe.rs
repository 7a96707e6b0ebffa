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

mod ibe_demo {
    use std::path::Path;

    use elliptic_curve::hash2curve::ExpandMsg;
    use identium::{
        bfibe::{
            ciphersuites::IbeCiphersuite,
            ciphertext::BFIbeCiphertext,
            keys::{BFIbePublicKey, BFIbeSecretKey, BFIbeUserSecretKey},
        },
        errors::Error,
        keys::pair::KeyPair,
        schemes::algorithms::{BFIbe, Scheme},
    };

    pub(crate) fn ibe_main<S: Scheme>(dir: &Path) -> Result<(), Error>
    where
        S::Ciphersuite: IbeCiphersuite,
        <S::Ciphersuite as IbeCiphersuite>::Expander: for<'a> ExpandMsg<'a>,
    {
        const ID: &str = "alice@example.com";
        const MESSAGE: &str = "Hello, identity-based encryption!";

        let msk_file = dir.join("msk.properties");
        let pk_file = dir.join("pk.properties");
        let sk_file = dir.join("sk.properties");
        let ct_file = dir.join("ct.properties");

        let mut rng = rand::thread_rng();

        log::info!(
            "Suite: {}",
            String::from_utf8_lossy(<S::Ciphersuite as IbeCiphersuite>::ID)
        );

        log::info!("Setup...");
        let keypair = KeyPair::<BFIbe<S::Ciphersuite>>::generate(&mut rng);
        keypair.private_key().store(&msk_file)?;
        keypair.public_key().store::<S::Ciphersuite>(&pk_file)?;
        log::info!("PK: {}", keypair.public_key().encode());

        log::info!("Extract for {ID:?}...");
        let msk = BFIbeSecretKey::load(&msk_file)?;
        let usk = msk.extract::<S::Ciphersuite>(ID.as_bytes());
        usk.store(&sk_file)?;
        log::info!("SK_id: {}", usk.encode());

        log::info!("Encrypt...");
        let pk = BFIbePublicKey::load::<S::Ciphersuite>(&pk_file)?;
        let ct = BFIbeCiphertext::encrypt::<S::Ciphersuite, _>(
            &pk,
            ID.as_bytes(),
            MESSAGE.as_bytes(),
            &mut rng,
        );
        ct.store(&ct_file)?;
        log::info!("Ciphertext: {}", hex::encode(ct.to_bytes()));

        log::info!("Decrypt...");
        let usk = BFIbeUserSecretKey::load(&sk_file)?;
        let ct = BFIbeCiphertext::load(&ct_file)?;
        let plaintext = ct.decrypt::<S::Ciphersuite>(&usk);

        assert_eq!(plaintext, MESSAGE.as_bytes(), "Decryption FAILED!");
        log::info!("Recovered: {}", String::from_utf8_lossy(&plaintext));

        Ok(())
    }
}

fn main() {
    env_logger::init();

    use identium::schemes::algorithms::{IbeBls12381Sha256, IbeBls12381Shake256};

    let dir = std::env::temp_dir().join("identium-ibe-demo");
    std::fs::create_dir_all(&dir).expect("Unable to create demo directory");

    let suite = std::env::args().nth(1).unwrap_or_else(|| "all".to_owned());
    match suite.as_str() {
        "sha256" => ibe_demo::ibe_main::<IbeBls12381Sha256>(&dir).unwrap(),
        "shake256" => ibe_demo::ibe_main::<IbeBls12381Shake256>(&dir).unwrap(),
        "all" => {
            ibe_demo::ibe_main::<IbeBls12381Sha256>(&dir).unwrap();
            ibe_demo::ibe_main::<IbeBls12381Shake256>(&dir).unwrap();
        }
        other => {
            log::error!("Unknown suite {other:?} (expected sha256, shake256 or all)");
            std::process::exit(1);
        }
    }
}

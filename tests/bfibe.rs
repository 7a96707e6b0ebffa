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

#[cfg(test)]
mod bfibe_tests {

    use std::fs;
    use std::path::PathBuf;

    use elliptic_curve::hash2curve::ExpandMsg;
    use identium::bfibe::ciphersuites::{Bls12381Sha256, Bls12381Shake256, IbeCiphersuite};
    use identium::bfibe::ciphertext::BFIbeCiphertext;
    use identium::bfibe::keys::{BFIbePublicKey, BFIbeSecretKey, BFIbeUserSecretKey};
    use identium::errors::Error;
    use identium::keys::pair::KeyPair;
    use identium::records::PropertySet;
    use identium::schemes::algorithms::{BFIbe, IbeBls12381Sha256, IbeBls12381Shake256, Scheme};

    const ID: &[u8] = b"alice@example.com";
    const MESSAGE: &[u8] = b"Hello, identity-based encryption!";

    fn workdir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("identium-tests").join(name);
        fs::create_dir_all(&dir).expect("Unable to create test directory");
        dir
    }

    fn persisted_flow<S: Scheme>(name: &str)
    where
        S::Ciphersuite: IbeCiphersuite,
        <S::Ciphersuite as IbeCiphersuite>::Expander: for<'a> ExpandMsg<'a>,
    {
        let dir = workdir(name);
        let msk_file = dir.join("msk.properties");
        let pk_file = dir.join("pk.properties");
        let sk_file = dir.join("sk.properties");
        let ct_file = dir.join("ct.properties");

        let mut rng = rand::thread_rng();

        // setup, persisted
        let keypair = KeyPair::<BFIbe<S::Ciphersuite>>::generate(&mut rng);
        keypair.private_key().store(&msk_file).unwrap();
        keypair
            .public_key()
            .store::<S::Ciphersuite>(&pk_file)
            .unwrap();

        // extract from the reloaded master secret
        let msk = BFIbeSecretKey::load(&msk_file).unwrap();
        assert_eq!(&msk, keypair.private_key());
        let usk = msk.extract::<S::Ciphersuite>(ID);
        usk.store(&sk_file).unwrap();

        // encrypt under the reloaded parameters
        let pk = BFIbePublicKey::load::<S::Ciphersuite>(&pk_file).unwrap();
        assert_eq!(&pk, keypair.public_key());
        let ct = BFIbeCiphertext::encrypt::<S::Ciphersuite, _>(&pk, ID, MESSAGE, &mut rng);
        ct.store(&ct_file).unwrap();

        // decrypt from the persisted records only
        let usk = BFIbeUserSecretKey::load(&sk_file).unwrap();
        let ct = BFIbeCiphertext::load(&ct_file).unwrap();
        assert_eq!(ct.decrypt::<S::Ciphersuite>(&usk), MESSAGE);
    }

    #[test]
    fn persisted_flow_sha256() {
        persisted_flow::<IbeBls12381Sha256>("persisted-sha256");
    }

    #[test]
    fn persisted_flow_shake256() {
        persisted_flow::<IbeBls12381Shake256>("persisted-shake256");
    }

    #[test]
    fn master_secret_file_missing() {
        let dir = workdir("missing-msk");
        let err = BFIbeSecretKey::load(dir.join("does-not-exist.properties")).unwrap_err();
        assert!(matches!(err, Error::KeyUnavailable(_)));

        let err = BFIbeUserSecretKey::load(dir.join("does-not-exist.properties")).unwrap_err();
        assert!(matches!(err, Error::KeyUnavailable(_)));
    }

    #[test]
    fn ciphertext_file_missing() {
        let dir = workdir("missing-ct");
        let err = BFIbeCiphertext::load(dir.join("does-not-exist.properties")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn record_field_missing() {
        let dir = workdir("missing-field");
        let file = dir.join("msk.properties");
        fs::write(&file, "y=00ff\n").unwrap();

        let err = BFIbeSecretKey::load(&file).unwrap_err();
        assert!(matches!(err, Error::MissingField(_)));
    }

    #[test]
    fn record_field_corrupted() {
        let dir = workdir("corrupted-field");

        // not valid hex
        let file = dir.join("sk.properties");
        fs::write(&file, "sk=zz00\n").unwrap();
        let err = BFIbeUserSecretKey::load(&file).unwrap_err();
        assert!(matches!(err, Error::MalformedElement(_)));

        // valid hex, truncated point encoding
        let mut rng = rand::thread_rng();
        let keypair = KeyPair::<IbeBls12381Sha256>::generate(&mut rng);
        let usk = keypair.private_key().extract::<Bls12381Sha256>(ID);
        let encoded = usk.encode();
        let truncated = &encoded[..encoded.len() - 2];
        fs::write(&file, format!("sk={truncated}\n")).unwrap();
        let err = BFIbeUserSecretKey::load(&file).unwrap_err();
        assert!(matches!(err, Error::MalformedElement(_)));
    }

    #[test]
    fn record_line_without_separator() {
        let err = PropertySet::parse("x 00ff\n").unwrap_err();
        assert!(matches!(err, Error::MalformedElement(_)));
    }

    #[test]
    fn record_comments_and_blank_lines_are_ignored() {
        let props = PropertySet::parse("# stored parameters\n\nx=00ff\n").unwrap();
        assert_eq!(props.get_bytes("x").unwrap(), vec![0x00, 0xff]);
    }

    #[test]
    fn parameters_record_bound_to_suite() {
        let dir = workdir("suite-mismatch");
        let pk_file = dir.join("pk.properties");

        let mut rng = rand::thread_rng();
        let keypair = KeyPair::<IbeBls12381Sha256>::generate(&mut rng);
        keypair.public_key().store::<Bls12381Sha256>(&pk_file).unwrap();

        let err = BFIbePublicKey::load::<Bls12381Shake256>(&pk_file).unwrap_err();
        assert!(matches!(err, Error::InvalidParameters(_)));
    }
}

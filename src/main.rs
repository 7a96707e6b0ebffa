use std::time::Instant;

use identium::bfibe::ciphersuites::Bls12381Sha256;
use identium::bfibe::ciphertext::BFIbeCiphertext;
use identium::keys::pair::KeyPair;
use identium::schemes::algorithms::IbeBls12381Sha256;

fn main() {
    let mut rng = rand::thread_rng();
    let id = b"alice@example.com";

    let start = Instant::now();
    let keypair = KeyPair::<IbeBls12381Sha256>::generate(&mut rng);
    println!("Setup {:.2?}", start.elapsed());

    let start = Instant::now();
    let usk = keypair.private_key().extract::<Bls12381Sha256>(id);
    println!("Extract {:.2?}", start.elapsed());

    let start = Instant::now();
    let ct = BFIbeCiphertext::encrypt::<Bls12381Sha256, _>(keypair.public_key(), id, b"hello", &mut rng);
    println!("Encrypt {:.2?}", start.elapsed());

    let start = Instant::now();
    let plaintext = ct.decrypt::<Bls12381Sha256>(&usk);
    println!("Decrypt {:.2?}", start.elapsed());

    println!("{}", String::from_utf8_lossy(&plaintext));
}

//! RSA key pair generation
use crate::Error;

const RSA_KEY_BITS: usize = 2048;

/// Generate a fresh 2048 bit RSA key pair usable for certificate signing.
pub fn new_rsa_key_pair() -> Result<rcgen::KeyPair, Error> {
    use rsa::pkcs8::EncodePrivateKey;

    let mut rng = rand::thread_rng();
    let private_key = rsa::RsaPrivateKey::new(&mut rng, RSA_KEY_BITS)?;

    // rcgen can not generate RSA keys itself, hand it the PKCS#8 encoding
    let pkcs8_der = private_key.to_pkcs8_der()?;
    let key_pair = rcgen::KeyPair::try_from(pkcs8_der.as_bytes())?;

    Ok(key_pair)
}

mod ca;
mod greeting;
mod handler;
mod keys;
mod leaf;
mod log_level;
mod output;

// re-exports
pub use ca::certificate_authority_certificate;
pub use greeting::greeting_handler;
pub use handler::{handle, try_handle, CertificateResponse, CustomResourceEvent};
pub use keys::new_rsa_key_pair;
pub use leaf::server_certificate;
pub use log_level::init_logging;
pub use output::write_pem;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    KeyGenError(#[from] rsa::Error),
    #[error(transparent)]
    KeyEncodeError(#[from] rsa::pkcs8::Error),
    #[error(transparent)]
    CertificateError(#[from] rcgen::Error),
    #[error(transparent)]
    CrtDerParseError(#[from] x509_parser::nom::Err<x509_parser::error::X509Error>),
    #[error("CA key does not match the public key in the CA certificate")]
    CaKeyMismatch,
}

/// Leaf certificate with its private key, plus the CA certificate that
/// signed it. All fields are PEM encoded.
pub struct CertificateBundle {
    certificate: String,
    private_key: String,
    ca_certificate: String,
}

impl CertificateBundle {
    pub fn certificate_pem<'a>(&'a self) -> &'a str {
        self.certificate.as_str()
    }

    pub fn private_key_pem<'a>(&'a self) -> &'a str {
        self.private_key.as_str()
    }

    pub fn ca_certificate_pem<'a>(&'a self) -> &'a str {
        self.ca_certificate.as_str()
    }
}

/// Generate a fresh CA and a server certificate signed by it.
///
/// New key pairs are created on every call, nothing is reused across
/// invocations.
pub fn generate_certificates() -> Result<CertificateBundle, Error> {
    let ca_key = keys::new_rsa_key_pair()?;
    let ca_certificate = ca::certificate_authority_certificate(&ca_key)?;

    let server_key = keys::new_rsa_key_pair()?;
    let server_certificate = leaf::server_certificate(&server_key, &ca_key, &ca_certificate)?;

    Ok(CertificateBundle {
        certificate: server_certificate.pem(),
        private_key: server_key.serialize_pem(),
        ca_certificate: ca_certificate.pem(),
    })
}

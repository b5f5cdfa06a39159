//! Server (leaf) certificate signed by the local CA
use crate::Error;

const NINE_YEARS_IN_DAYS: i64 = 9 * 365;

const SERVER_COMMON_NAME: &str = "example.com";
const SERVER_ALT_NAME: &str = "*.example.com";

/// Build a server certificate for `example.com` signed by the CA key.
///
/// The CA key must belong to the CA certificate, otherwise the issued
/// certificate would carry an authority key identifier nothing can
/// verify. That consistency is checked up front.
pub fn server_certificate(
    server_key: &rcgen::KeyPair,
    ca_key: &rcgen::KeyPair,
    ca_certificate: &rcgen::Certificate,
) -> Result<rcgen::Certificate, Error> {
    use rcgen::{ExtendedKeyUsagePurpose, IsCa, KeyUsagePurpose};

    check_ca_key_matches(ca_key, ca_certificate)?;

    let mut params = rcgen::CertificateParams::new(vec![SERVER_ALT_NAME.to_string()])?;
    params.serial_number = Some(crate::ca::random_serial_number());
    params.distinguished_name = crate::ca::distinguished_name(SERVER_COMMON_NAME);

    params.is_ca = IsCa::ExplicitNoCa;
    params.key_usages.push(KeyUsagePurpose::DigitalSignature);
    params
        .extended_key_usages
        .push(ExtendedKeyUsagePurpose::ServerAuth);
    params.use_authority_key_identifier_extension = true;

    let now = time::OffsetDateTime::now_utc();
    params.not_before = now;
    params.not_after = now + time::Duration::days(NINE_YEARS_IN_DAYS);

    let certificate = params.signed_by(server_key, ca_certificate, ca_key)?;
    Ok(certificate)
}

/// Compare the CA key against the SubjectPublicKeyInfo embedded in the
/// CA certificate.
fn check_ca_key_matches(
    ca_key: &rcgen::KeyPair,
    ca_certificate: &rcgen::Certificate,
) -> Result<(), Error> {
    use x509_parser::prelude::FromDer;

    let (_rem, parsed) = x509_parser::certificate::X509Certificate::from_der(ca_certificate.der())?;

    if parsed.public_key().raw == ca_key.public_key_der() {
        Ok(())
    } else {
        Err(Error::CaKeyMismatch)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn rejects_foreign_ca_key() {
        let ca_key = crate::new_rsa_key_pair().unwrap();
        let ca_cert = crate::certificate_authority_certificate(&ca_key).unwrap();

        let other_key = crate::new_rsa_key_pair().unwrap();
        let server_key = crate::new_rsa_key_pair().unwrap();

        let result = super::server_certificate(&server_key, &other_key, &ca_cert);
        assert!(matches!(result, Err(crate::Error::CaKeyMismatch)));
    }
}

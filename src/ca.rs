//! Self-signed certificate authority
use crate::Error;

const TEN_YEARS_IN_DAYS: i64 = 10 * 365;

// Serial numbers are drawn from 0..100000, like typical throw-away CAs
const SERIAL_NUMBER_RANGE: u64 = 100_000;

const CA_COMMON_NAME: &str = "My own Root CA";

/// Build a self-signed, CA capable certificate for the given key.
///
/// Issuer and subject are identical, basic constraints carry `CA:TRUE`
/// and the key usages allow certificate and CRL signing.
pub fn certificate_authority_certificate(
    ca_key: &rcgen::KeyPair,
) -> Result<rcgen::Certificate, Error> {
    use rcgen::{BasicConstraints, IsCa, KeyUsagePurpose};

    let mut params = rcgen::CertificateParams::new(Vec::default())?;
    params.serial_number = Some(random_serial_number());
    params.distinguished_name = distinguished_name(CA_COMMON_NAME);

    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    params.key_usages.push(KeyUsagePurpose::KeyCertSign);
    params.key_usages.push(KeyUsagePurpose::CrlSign);

    let now = time::OffsetDateTime::now_utc();
    params.not_before = now;
    params.not_after = now + time::Duration::days(TEN_YEARS_IN_DAYS);

    let certificate = params.self_signed(ca_key)?;
    Ok(certificate)
}

/// Fixed distinguished name shared by the CA and the leaf certificate,
/// only the common name differs.
pub(crate) fn distinguished_name(common_name: &str) -> rcgen::DistinguishedName {
    use rcgen::DnType;

    let mut dn = rcgen::DistinguishedName::new();
    dn.push(DnType::CountryName, "US");
    dn.push(DnType::StateOrProvinceName, "California");
    dn.push(DnType::LocalityName, "San Francisco");
    dn.push(DnType::OrganizationName, "MyOrganization");
    dn.push(DnType::OrganizationalUnitName, "MyOrganizationalUnit");
    dn.push(DnType::CommonName, common_name);
    dn
}

pub(crate) fn random_serial_number() -> rcgen::SerialNumber {
    use rand::Rng;

    let serial = rand::thread_rng().gen_range(0..SERIAL_NUMBER_RANGE);
    serial.to_be_bytes().to_vec().into()
}

//! Chain properties of the generated CA and server certificate

#[test]
fn chain_properties() {
    use x509_parser::extensions::GeneralName;

    let bundle = self_signed_cert_lambda::generate_certificates().unwrap();

    let (_rem, ca_pem) =
        x509_parser::pem::parse_x509_pem(bundle.ca_certificate_pem().as_bytes()).unwrap();
    let ca = ca_pem.parse_x509().unwrap();

    let (_rem, crt_pem) =
        x509_parser::pem::parse_x509_pem(bundle.certificate_pem().as_bytes()).unwrap();
    let leaf = crt_pem.parse_x509().unwrap();

    // CA is self-signed and CA capable
    assert_eq!(ca.issuer().to_string(), ca.subject().to_string());
    let ca_constraints = ca.basic_constraints().unwrap().unwrap();
    assert!(ca_constraints.value.ca);
    let ca_key_usage = ca.key_usage().unwrap().unwrap();
    assert!(ca_key_usage.value.key_cert_sign());
    assert!(ca_key_usage.value.crl_sign());

    // leaf is issued by the CA
    assert_eq!(leaf.issuer().to_string(), ca.subject().to_string());
    let leaf_constraints = leaf.basic_constraints().unwrap().unwrap();
    assert!(!leaf_constraints.value.ca);
    let leaf_key_usage = leaf.key_usage().unwrap().unwrap();
    assert!(leaf_key_usage.value.digital_signature());
    let leaf_eku = leaf.extended_key_usage().unwrap().unwrap();
    assert!(leaf_eku.value.server_auth);

    // subject CN and wildcard SAN
    let leaf_cn = leaf.subject().iter_common_name().next().unwrap();
    assert_eq!(leaf_cn.as_str().unwrap(), "example.com");

    let san = leaf.subject_alternative_name().unwrap().unwrap();
    let dns_names = san
        .value
        .general_names
        .iter()
        .filter_map(|name| match name {
            GeneralName::DNSName(dns_name) => Some(*dns_name),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(dns_names.as_slice(), ["*.example.com"]);
}

#[test]
fn authority_key_identifier_points_at_ca() {
    use x509_parser::extensions::ParsedExtension;

    let bundle = self_signed_cert_lambda::generate_certificates().unwrap();

    let (_rem, ca_pem) =
        x509_parser::pem::parse_x509_pem(bundle.ca_certificate_pem().as_bytes()).unwrap();
    let ca = ca_pem.parse_x509().unwrap();

    let (_rem, crt_pem) =
        x509_parser::pem::parse_x509_pem(bundle.certificate_pem().as_bytes()).unwrap();
    let leaf = crt_pem.parse_x509().unwrap();

    let ca_ski = ca
        .extensions()
        .iter()
        .find_map(|ext| match ext.parsed_extension() {
            ParsedExtension::SubjectKeyIdentifier(ski) => Some(ski.0),
            _ => None,
        })
        .unwrap();

    let leaf_aki = leaf
        .extensions()
        .iter()
        .find_map(|ext| match ext.parsed_extension() {
            ParsedExtension::AuthorityKeyIdentifier(aki) => aki.key_identifier.as_ref(),
            _ => None,
        })
        .unwrap();

    assert_eq!(leaf_aki.0, ca_ski);
}

#[test]
fn validity_windows() {
    let bundle = self_signed_cert_lambda::generate_certificates().unwrap();

    let (_rem, ca_pem) =
        x509_parser::pem::parse_x509_pem(bundle.ca_certificate_pem().as_bytes()).unwrap();
    let ca = ca_pem.parse_x509().unwrap();

    let (_rem, crt_pem) =
        x509_parser::pem::parse_x509_pem(bundle.certificate_pem().as_bytes()).unwrap();
    let leaf = crt_pem.parse_x509().unwrap();

    let ca_validity = ca.validity();
    assert_eq!(
        ca_validity.not_after.timestamp() - ca_validity.not_before.timestamp(),
        10 * 365 * 24 * 60 * 60
    );

    let leaf_validity = leaf.validity();
    assert_eq!(
        leaf_validity.not_after.timestamp() - leaf_validity.not_before.timestamp(),
        9 * 365 * 24 * 60 * 60
    );
}

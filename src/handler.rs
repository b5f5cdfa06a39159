//! Custom resource entry point
use crate::Error;

/// CloudFormation custom resource event, reduced to the fields this
/// handler cares about. `RequestType` is looked up safely so a missing
/// field turns into a no-op instead of an error.
#[derive(serde::Deserialize, Debug)]
pub struct CustomResourceEvent {
    #[serde(rename = "RequestType", default)]
    request_type: Option<String>,
    #[serde(rename = "ResourceProperties", default)]
    resource_properties: serde_json::Map<String, serde_json::Value>,
}

impl CustomResourceEvent {
    /// Certificates are generated on stack Create and Update only.
    pub fn is_provisioning(&self) -> bool {
        matches!(self.request_type.as_deref(), Some("Create") | Some("Update"))
    }
}

/// Result mapping returned to CloudFormation, both fields are base64
/// encoded PEM.
#[derive(serde::Serialize, Debug)]
pub struct CertificateResponse {
    certificate: String,
    #[serde(rename = "privateKey")]
    private_key: String,
}

impl CertificateResponse {
    fn from_bundle(bundle: &crate::CertificateBundle) -> Self {
        use base64::engine::Engine;
        let b64 = base64::engine::general_purpose::STANDARD;

        Self {
            certificate: b64.encode(bundle.certificate_pem()),
            private_key: b64.encode(bundle.private_key_pem()),
        }
    }
}

/// Lambda facing handler: never fails, logs and swallows errors and
/// returns `{}` in their place.
pub fn handle(event: &serde_json::Value) -> serde_json::Value {
    match try_handle(event) {
        Ok(response) => response,
        Err(e) => {
            log::error!("certificate generation failed: {}", e);
            serde_json::Value::Object(serde_json::Map::new())
        }
    }
}

/// Same as [`handle`], but keeps the error so callers can decide on
/// suppression themselves.
pub fn try_handle(event: &serde_json::Value) -> Result<serde_json::Value, Error> {
    log::info!("event: {}", event);

    let event = serde_json::from_value::<CustomResourceEvent>(event.clone())?;
    if !event.is_provisioning() {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }

    if !event.resource_properties.is_empty() {
        log::debug!("resource properties: {:?}", event.resource_properties);
    }

    let bundle = crate::generate_certificates()?;
    let response = CertificateResponse::from_bundle(&bundle);
    Ok(serde_json::to_value(response)?)
}

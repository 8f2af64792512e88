use crate::interfaces::StoreClient;
use crate::store::error::{Result, StoreError};
use crate::store::models::{
    BucketRef, FetchedObject, ObjectSummary, Protocol, S3Config, S3StorageClient, TransportConfig,
};
use aws_config::retry::RetryConfig;
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{
    BehaviorVersion, Region, RequestChecksumCalculation, ResponseChecksumValidation,
};
use std::path::Path;
use tracing::debug;

/// Region sent in signatures; RGW accepts any value for a single-zone setup
pub const DEFAULT_REGION: &str = "us-west-2";

impl S3StorageClient {
    /// Create a client for the configured endpoint.
    ///
    /// No request is sent here; credentials are only exercised by the first call.
    pub fn connect(config: &S3Config) -> Result<Self> {
        let sdk_config = sdk_config(config)?.build();
        Self::from_conf(sdk_config)
    }

    /// Wrap an already-built SDK configuration
    pub fn from_conf(sdk_config: aws_sdk_s3::Config) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Connection(format!("Failed to create runtime: {e}")))?;

        Ok(Self {
            client: Client::from_conf(sdk_config),
            runtime,
        })
    }
}

/// SDK configuration builder for `config`, without an HTTP client override
pub fn sdk_config(config: &S3Config) -> Result<aws_sdk_s3::config::Builder> {
    let endpoint = effective_endpoint(&config.endpoint, &config.transport)?;

    debug!(
        endpoint = %endpoint,
        region = DEFAULT_REGION,
        key_id = %format!("{}****", config.access_key.chars().take(4).collect::<String>()),
        "creating S3-compatible client"
    );

    let credentials = Credentials::new(
        config.access_key.clone(),
        config.secret_key.clone(),
        None, // No session token
        None, // No expiry
        "CephStaticCredentials",
    );

    // Checksums only when an operation demands them, so the SHA-256 of the body
    // is what gets signed; RGW rejects the streaming checksum trailer.
    Ok(aws_sdk_s3::Config::builder()
        .region(Region::new(DEFAULT_REGION))
        .endpoint_url(endpoint)
        .credentials_provider(credentials)
        .force_path_style(true)
        .retry_config(RetryConfig::disabled())
        .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
        .response_checksum_validation(ResponseChecksumValidation::WhenRequired)
        .behavior_version(BehaviorVersion::latest()))
}

/// Endpoint URL actually dialed for `endpoint` under `transport`.
///
/// `Protocol::Http` rewrites any `https://` endpoint to plain HTTP. Disabling
/// certificate checks is not offered for HTTPS; use HTTP for such endpoints.
pub fn effective_endpoint(endpoint: &str, transport: &TransportConfig) -> Result<String> {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(StoreError::Config("Endpoint URL is required".to_string()));
    }

    let (scheme, rest) = match trimmed.split_once("://") {
        Some((scheme, rest)) => (Some(scheme.to_ascii_lowercase()), rest),
        None => (None, trimmed),
    };
    if rest.is_empty() {
        return Err(StoreError::Config(format!(
            "Endpoint URL '{endpoint}' has no host"
        )));
    }
    if let Some(other) = scheme.as_deref().filter(|s| *s != "http" && *s != "https") {
        return Err(StoreError::Config(format!(
            "Unsupported endpoint scheme '{other}'"
        )));
    }

    match transport.protocol {
        Protocol::Http => Ok(format!("http://{rest}")),
        Protocol::Https if !transport.verify_tls => Err(StoreError::Config(
            "Certificate verification cannot be disabled for HTTPS; use the HTTP transport"
                .to_string(),
        )),
        Protocol::Https if scheme.as_deref() == Some("http") => Ok(format!("http://{rest}")),
        Protocol::Https => Ok(format!("https://{rest}")),
    }
}

impl StoreClient for S3StorageClient {
    fn list_buckets(&self) -> Result<Vec<BucketRef>> {
        S3StorageClient::list_buckets(self)
    }

    fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectSummary>> {
        S3StorageClient::list_objects(self, bucket)
    }

    fn get_object_to_path(&self, bucket: &str, key: &str, dest: &Path) -> Result<FetchedObject> {
        self.download_to_path(bucket, key, dest)
    }

    fn put_object_from_path(&self, bucket: &str, key: &str, src: &Path) -> Result<Option<String>> {
        self.upload_file(src, bucket, key)
    }
}

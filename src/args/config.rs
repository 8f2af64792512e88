use ini::Ini;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::types::Args;
use crate::store::models::{Protocol, S3Config, TransportConfig};

/// Section of the INI file holding the connection settings
pub const CONFIG_SECTION: &str = "ceph";

/// Connection settings gathered from one source; any may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigValues {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub endpoint: Option<String>,
    pub root_bucket: Option<String>,
    pub protocol: Option<Protocol>,
}

impl ConfigValues {
    /// Values from `overrides` win over `self`
    #[must_use]
    pub fn merge(self, overrides: ConfigValues) -> ConfigValues {
        ConfigValues {
            access_key: overrides.access_key.or(self.access_key),
            secret_key: overrides.secret_key.or(self.secret_key),
            endpoint: overrides.endpoint.or(self.endpoint),
            root_bucket: overrides.root_bucket.or(self.root_bucket),
            protocol: overrides.protocol.or(self.protocol),
        }
    }
}

/// Load the `[ceph]` section of an INI file
///
/// # Errors
///
/// Returns an error if the file cannot be parsed, the section is missing, or
/// `protocol` holds something other than `http` or `https`.
pub fn load_ini(path: &Path) -> Result<ConfigValues, String> {
    let conf = Ini::load_from_file(path)
        .map_err(|e| format!("Failed to read config '{}': {}", path.display(), e))?;

    let section = conf.section(Some(CONFIG_SECTION)).ok_or_else(|| {
        format!(
            "Config '{}' has no [{}] section",
            path.display(),
            CONFIG_SECTION
        )
    })?;

    let owned = |key: &str| section.get(key).map(|v| v.trim().to_string());

    Ok(ConfigValues {
        access_key: owned("access_key"),
        secret_key: owned("secret_key"),
        endpoint: owned("endpoint"),
        root_bucket: owned("root_bucket"),
        protocol: section.get("protocol").map(parse_protocol).transpose()?,
    })
}

fn parse_protocol(raw: &str) -> Result<Protocol, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "http" => Ok(Protocol::Http),
        "https" => Ok(Protocol::Https),
        other => Err(format!(
            "invalid protocol '{other}', expected one of: http, https"
        )),
    }
}

/// Helper function to read a value from a file, trimming whitespace and newlines
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_value_from_file(file_path: &Path) -> Result<String, String> {
    let mut value = String::new();
    File::open(file_path)
        .map_err(|e| format!("Failed to open file '{}': {}", file_path.display(), e))?
        .read_to_string(&mut value)
        .map_err(|e| format!("Failed to read file '{}': {}", file_path.display(), e))?;

    Ok(value.trim().to_string())
}

fn values_from_args(args: &Args) -> Result<ConfigValues, String> {
    // File-based secrets take priority over the direct flags
    let access_key = match &args.access_key_filepath {
        Some(path) => Some(read_value_from_file(path)?),
        None => args.access_key.clone(),
    };
    let secret_key = match &args.secret_key_filepath {
        Some(path) => Some(read_value_from_file(path)?),
        None => args.secret_key.clone(),
    };

    Ok(ConfigValues {
        access_key,
        secret_key,
        endpoint: args.endpoint.clone(),
        root_bucket: args.root_bucket.clone(),
        protocol: args.https.then_some(Protocol::Https),
    })
}

/// Build the connection config from `--config` and the command line flags
///
/// # Errors
///
/// Returns an error naming the first required setting that no source provides.
pub fn resolve_config(args: &Args) -> Result<S3Config, String> {
    let from_file = match &args.config {
        Some(path) => load_ini(path)?,
        None => ConfigValues::default(),
    };
    let values = from_file.merge(values_from_args(args)?);

    let require = |value: Option<String>, name: &str| {
        value.filter(|v| !v.trim().is_empty()).ok_or_else(|| {
            format!("Missing required setting '{name}' (command line or [{CONFIG_SECTION}] section)")
        })
    };

    let transport = match values.protocol {
        Some(Protocol::Https) => TransportConfig::https(),
        _ => TransportConfig::default(),
    };

    Ok(S3Config::new(
        require(values.access_key, "access_key")?,
        require(values.secret_key, "secret_key")?,
        require(values.endpoint, "endpoint")?,
        require(values.root_bucket, "root_bucket")?,
    )
    .with_transport(transport))
}

use super::types::Args;

/// Validate the args
///
/// # Errors
///
/// Returns an error if a value given on the command line is blank, or if
/// neither `--config` nor the full set of connection flags is supplied.
pub fn validate(args: &Args) -> Result<(), String> {
    let direct = [
        ("--endpoint", &args.endpoint),
        ("--root-bucket", &args.root_bucket),
        ("--access-key", &args.access_key),
        ("--secret-key", &args.secret_key),
    ];
    for (flag, value) in direct {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(format!("{flag} must not be empty"));
        }
    }

    if args.config.is_none() {
        let mut missing = Vec::new();
        if args.endpoint.is_none() {
            missing.push("--endpoint");
        }
        if args.root_bucket.is_none() {
            missing.push("--root-bucket");
        }
        if args.access_key.is_none() && args.access_key_filepath.is_none() {
            missing.push("--access-key or --access-key-filepath");
        }
        if args.secret_key.is_none() && args.secret_key_filepath.is_none() {
            missing.push("--secret-key or --secret-key-filepath");
        }
        if !missing.is_empty() {
            return Err(format!(
                "Without --config these are required: {}",
                missing.join(", ")
            ));
        }
    }

    Ok(())
}

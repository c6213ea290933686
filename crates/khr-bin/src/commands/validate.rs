// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `validate` command.

use khr_config::{AuthorityConfig, ConfigLoader};
use tracing::debug;

use crate::cli::{OutputFormat, ValidateArgs};
use crate::error::{BinError, BinResult};

/// Loads and validates a configuration file and prints a summary.
pub fn validate(args: &ValidateArgs) -> BinResult<()> {
    let config = ConfigLoader::new().load(&args.config)?;
    let warnings = collect_warnings(&config);
    debug!(warnings = warnings.len(), "Configuration checked");

    match args.format {
        OutputFormat::Text => {
            println!("Configuration is valid: {}", args.config.display());
            println!();
            println!("Summary:");
            println!("  Session lifetime: {}", humanize(config.session_lifetime));
            println!("  Secret lifetime:  {}", humanize(config.secret_lifetime));
            println!("  Salt length:      {}", config.salt_length);
            println!("  Admin identity:   {}", config.admin.identity);

            if !warnings.is_empty() {
                println!();
                println!("Warnings:");
                for warning in &warnings {
                    println!("  - {}", warning);
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "valid": true,
                "config_path": args.config.display().to_string(),
                "summary": {
                    "session_lifetime_secs": config.session_lifetime.as_secs(),
                    "secret_lifetime_secs": config.secret_lifetime.as_secs(),
                    "salt_length": config.salt_length,
                    "admin_identity": config.admin.identity,
                    "admin_builtin": config.admin.is_builtin(),
                },
                "warnings": warnings,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    if args.strict && !warnings.is_empty() {
        return Err(BinError::Warnings(warnings.len()));
    }

    Ok(())
}

/// Returns operator-facing warnings for a valid configuration.
pub fn collect_warnings(config: &AuthorityConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.admin.is_builtin() {
        warnings.push("Administrator uses the compiled-in credentials".to_string());
    }
    if config.session_lifetime > config.secret_lifetime {
        warnings.push(format!(
            "Session lifetime ({}) exceeds secret lifetime ({}); sessions end at rotation",
            humanize(config.session_lifetime),
            humanize(config.secret_lifetime)
        ));
    }
    if config.salt_length < khr_core::digest::DEFAULT_SALT_LENGTH {
        warnings.push(format!(
            "Salt length {} is shorter than the default {}",
            config.salt_length,
            khr_core::digest::DEFAULT_SALT_LENGTH
        ));
    }

    warnings
}

fn humanize(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    match secs {
        s if s % 86_400 == 0 => format!("{}d", s / 86_400),
        s if s % 3_600 == 0 => format!("{}h", s / 3_600),
        s if s % 60 == 0 => format!("{}m", s / 60),
        s => format!("{}s", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use khr_config::AdminConfig;
    use khr_core::SaltedHash;
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Duration;

    fn custom_admin() -> AdminConfig {
        let salted = SaltedHash::with_salt("koality-admin", "ADMIN");
        AdminConfig::new(salted.salt, salted.hash)
    }

    #[test]
    fn test_default_config_warns_about_builtin_admin() {
        let warnings = collect_warnings(&AuthorityConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("compiled-in"));
    }

    #[test]
    fn test_lifetime_warning() {
        let config = AuthorityConfig::default()
            .with_admin(custom_admin())
            .with_session_lifetime(Duration::from_secs(2 * 86_400));
        let warnings = collect_warnings(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("2d"));
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize(Duration::from_secs(1800)), "30m");
        assert_eq!(humanize(Duration::from_secs(86_400)), "1d");
        assert_eq!(humanize(Duration::from_secs(7_200)), "2h");
        assert_eq!(humanize(Duration::from_secs(61)), "61s");
    }

    #[test]
    fn test_validate_strict_fails_on_warnings() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "session_lifetime = \"15m\"").unwrap();

        let args = ValidateArgs {
            config: file.path().to_path_buf(),
            format: OutputFormat::Json,
            strict: true,
        };
        assert!(matches!(validate(&args), Err(BinError::Warnings(1))));

        let args = ValidateArgs { strict: false, ..args };
        assert!(validate(&args).is_ok());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            config: PathBuf::from("/nonexistent/khr-session.toml"),
            format: OutputFormat::Text,
            strict: false,
        };
        assert!(matches!(validate(&args), Err(BinError::Config(_))));
    }
}

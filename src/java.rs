use std::process::Command;

use tracing::info;

use crate::error::{InstallerError, InstallerResult};

/// Minimum Java major version the Hytale server runs on.
pub const REQUIRED_JAVA_MAJOR: u32 = 25;

/// Probes the system Java runtime and verifies its major version.
///
/// Runs before any download so a missing or outdated runtime fails fast.
pub fn check_java() -> InstallerResult<u32> {
    let output = Command::new("java")
        .arg("-version")
        .output()
        .map_err(|source| {
            InstallerError::Environment(format!(
                "Java runtime not invokable (is Java on the PATH?): {source}"
            ))
        })?;

    // Java historically prints the version banner on stderr.
    let banner = format!(
        "{}\n{}",
        String::from_utf8_lossy(&output.stderr),
        String::from_utf8_lossy(&output.stdout)
    );

    let major = parse_major(&banner).ok_or_else(|| {
        InstallerError::Environment(
            "Could not parse a Java version from `java -version` output".to_string(),
        )
    })?;

    if major < REQUIRED_JAVA_MAJOR {
        return Err(InstallerError::Environment(format!(
            "Java {major} found, but {REQUIRED_JAVA_MAJOR}+ is required"
        )));
    }

    info!("Java {} detected", major);
    Ok(major)
}

/// Extracts the major version from a `java -version` banner, looking for the
/// digits after `version "`. Legacy `1.x` strings map to `x`.
fn parse_major(banner: &str) -> Option<u32> {
    let marker = "version \"";
    let rest = &banner[banner.find(marker)? + marker.len()..];
    let version = &rest[..rest.find('"').unwrap_or(rest.len())];

    let mut parts = version.split(['.', '_', '+', '-']);
    let major: u32 = parts.next()?.parse().ok()?;
    if major == 1 {
        parts.next()?.parse().ok()
    } else {
        Some(major)
    }
}

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::app_constants::{
    EXIT_OK, EXIT_RESOURCE_MISMATCH, HELLO_WORLD_TEXT, RESOURCE_FILE_NAME, RESOURCE_PATH_ENV,
};

/// Resource text compiled into the binary at build time.
const EMBEDDED_RESOURCE: &str = include_str!("../resources/hello_world.txt");

pub fn verify_resource_bytes(actual: &[u8]) -> Result<(), String> {
    if actual == HELLO_WORLD_TEXT.as_bytes() {
        return Ok(());
    }

    Err(format!(
        "resource content mismatch: expected {:?} ({} bytes), found {} byte(s)",
        HELLO_WORLD_TEXT,
        HELLO_WORLD_TEXT.len(),
        actual.len()
    ))
}

/// Checks the copy embedded into the binary against the expected literal.
pub fn verify_embedded_resource() -> Result<(), String> {
    verify_resource_bytes(EMBEDDED_RESOURCE.as_bytes())
}

/// Reads the bundled on-disk copy and compares its bytes.
pub fn verify_bundled_resource(path: &Path) -> Result<(), String> {
    let bytes = fs::read(path)
        .map_err(|error| format!("failed to read bundled resource {}: {error}", path.display()))?;
    verify_resource_bytes(&bytes)
}

/// Where the packaged bundle lays the resource out. An environment override
/// wins, then the `resources/` directory next to the executable, then the
/// dev tree as a last resort.
pub fn bundled_resource_path() -> PathBuf {
    if let Ok(value) = env::var(RESOURCE_PATH_ENV) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let candidate = exe_dir.join("resources").join(RESOURCE_FILE_NAME);
            if candidate.is_file() {
                return candidate;
            }
        }
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join(RESOURCE_FILE_NAME)
}

/// Headless self-check over the embedded copy. Returns the process exit
/// code; failures are reported on stderr.
pub fn run_embedded_self_check() -> i32 {
    match verify_embedded_resource() {
        Ok(()) => EXIT_OK,
        Err(reason) => {
            eprintln!("embedded resource self-check failed: {reason}");
            EXIT_RESOURCE_MISMATCH
        }
    }
}

/// Headless self-check over the bundled on-disk copy.
pub fn run_bundled_self_check() -> i32 {
    let path = bundled_resource_path();
    match verify_bundled_resource(&path) {
        Ok(()) => EXIT_OK,
        Err(reason) => {
            eprintln!("bundled resource self-check failed: {reason}");
            EXIT_RESOURCE_MISMATCH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_resource_matches_expected_text() {
        assert!(verify_embedded_resource().is_ok());
    }

    #[test]
    fn verify_resource_bytes_rejects_corruption() {
        assert!(verify_resource_bytes(b"hello world").is_ok());
        assert!(verify_resource_bytes(b"HELLO WORLD").is_err());
        assert!(verify_resource_bytes(b"hello worl").is_err());
        assert!(verify_resource_bytes(b"hello world\n").is_err());
        assert!(verify_resource_bytes(b"").is_err());
    }

    #[test]
    fn verify_bundled_resource_reports_missing_file() {
        let missing = std::path::Path::new("does/not/exist").join(RESOURCE_FILE_NAME);
        let error = verify_bundled_resource(&missing).expect_err("missing file must fail");
        assert!(error.contains("failed to read bundled resource"));
    }
}

//! Compile-time configuration shared across the shell and its probes.

/// Text the click handler writes to the label and to standard output, and
/// the exact content the bundled resource must carry.
pub const HELLO_WORLD_TEXT: &str = "hello world";

/// File name of the bundled resource, both in the dev tree (`resources/`)
/// and in the packaged layout next to the executable.
pub const RESOURCE_FILE_NAME: &str = "hello_world.txt";

/// Environment override for the on-disk resource path used by the
/// packaging probe. Useful when a test run stages the bundle elsewhere.
pub const RESOURCE_PATH_ENV: &str = "EDITOR_DIALOG_RESOURCE";

/// Label of the dialog window declared in `tauri.conf.json`.
pub const MAIN_WINDOW_LABEL: &str = "main";

/// Successful process exit.
pub const EXIT_OK: i32 = 0;

/// Sentinel exit for a resource that is missing or does not match
/// [`HELLO_WORLD_TEXT`]. Negative on purpose; Unix surfaces it as 255.
pub const EXIT_RESOURCE_MISMATCH: i32 = -1;

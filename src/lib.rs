//! Editor dialog test shell: a single dialog window with one label and one
//! button, plus headless probes used to validate packaging and
//! embedded-resource loading during test runs.

mod app_runtime;
mod dialog_commands;

pub mod app_constants;
pub mod dialog_state;
pub mod resource_check;
pub mod startup_mode;

pub use dialog_state::{DialogSnapshot, DialogState};
pub use startup_mode::StartupMode;

/// Primary entry: with no extra arguments, run the embedded-resource
/// self-check and exit without showing a window; otherwise show the dialog
/// and block on the event loop.
pub fn run() {
    match startup_mode::startup_mode_from_env() {
        StartupMode::HeadlessCheck => {
            std::process::exit(resource_check::run_embedded_self_check())
        }
        StartupMode::Windowed => app_runtime::run(),
    }
}

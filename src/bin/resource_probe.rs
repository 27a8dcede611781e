//! Headless packaging probe: verifies the bundled on-disk resource copy.
//! Used by test runs to validate the bundler's resource layout.

fn main() {
    std::process::exit(editor_dialog_desktop::resource_check::run_bundled_self_check());
}

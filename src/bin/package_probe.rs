//! Headless build probe: confirms the binary was assembled with its
//! embedded resource and reports the package it was built from.

fn main() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    std::process::exit(editor_dialog_desktop::resource_check::run_embedded_self_check());
}

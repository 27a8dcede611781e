use tauri::{RunEvent, WindowEvent};

use crate::{app_constants::MAIN_WINDOW_LABEL, dialog_state::DialogState};

/// Builds the dialog and runs the blocking event loop until the window
/// closes. Tauri exits the process with the loop's result.
pub fn run() {
    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .manage(DialogState::default())
        .invoke_handler(tauri::generate_handler![
            crate::dialog_commands::dialog_label_text,
            crate::dialog_commands::dialog_hello_world,
        ])
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            // Closing the dialog ends the loop; nothing is intercepted.
            if let WindowEvent::CloseRequested { .. } = event {
                log::info!("dialog close requested; shutting down");
            }
        })
        .setup(|_app| {
            log::info!("dialog window ready");
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app_handle, event| {
            if let RunEvent::Exit = event {
                log::info!("event loop exited");
            }
        });
}

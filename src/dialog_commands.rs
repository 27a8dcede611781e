use tauri::{AppHandle, Manager};

use crate::dialog_state::{DialogSnapshot, DialogState};

#[tauri::command]
pub(crate) fn dialog_label_text(app_handle: AppHandle) -> DialogSnapshot {
    let state = app_handle.state::<DialogState>();
    state.snapshot()
}

#[tauri::command]
pub(crate) fn dialog_hello_world(app_handle: AppHandle) -> DialogSnapshot {
    let state = app_handle.state::<DialogState>();
    let label_text = state.apply_click();
    // The fixture's observable side effect: exactly one line per click.
    println!("{label_text}");
    DialogSnapshot { label_text }
}

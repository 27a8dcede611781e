use std::sync::Mutex;

use serde::Serialize;

use crate::app_constants::HELLO_WORLD_TEXT;

/// Managed state of the dialog. The label starts empty and only ever
/// transitions to [`HELLO_WORLD_TEXT`]; the transition is idempotent.
#[derive(Debug, Default)]
pub struct DialogState {
    label_text: Mutex<String>,
}

/// Wire form of the dialog state handed to the frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogSnapshot {
    pub label_text: String,
}

impl DialogState {
    /// Current label text. A poisoned lock degrades to the empty string.
    pub fn label_text(&self) -> String {
        self.label_text
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Applies the button-click transition and returns the new label text.
    pub fn apply_click(&self) -> String {
        match self.label_text.lock() {
            Ok(mut guard) => {
                *guard = HELLO_WORLD_TEXT.to_string();
                guard.clone()
            }
            Err(_) => HELLO_WORLD_TEXT.to_string(),
        }
    }

    pub fn snapshot(&self) -> DialogSnapshot {
        DialogSnapshot {
            label_text: self.label_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DialogState;
    use crate::app_constants::HELLO_WORLD_TEXT;

    #[test]
    fn label_text_starts_empty() {
        let state = DialogState::default();
        assert_eq!(state.label_text(), "");
    }

    #[test]
    fn apply_click_sets_hello_world() {
        let state = DialogState::default();
        assert_eq!(state.apply_click(), HELLO_WORLD_TEXT);
        assert_eq!(state.label_text(), HELLO_WORLD_TEXT);
    }

    #[test]
    fn apply_click_is_idempotent() {
        let state = DialogState::default();
        state.apply_click();
        state.apply_click();
        assert_eq!(state.label_text(), HELLO_WORLD_TEXT);
    }
}

/// Blocking user-input collaborator (confirmation and text prompts)
///
/// A cancelled prompt returns `None`; callers treat that as "do nothing".
pub trait Dialog {
    /// Ask a yes/no question
    fn confirm(&mut self, message: &str) -> bool;

    /// Ask for text, pre-filled with `default`
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;
}

/// Dialog whose answers are known up front
///
/// Used by request handlers, where the client already answered the dialog
/// before sending the request.
#[derive(Debug, Clone, Default)]
pub struct PresetDialog {
    pub confirmed: bool,
    pub response: Option<String>,
}

impl PresetDialog {
    pub fn confirmed(confirmed: bool) -> Self {
        Self {
            confirmed,
            response: None,
        }
    }

    pub fn responding(response: Option<String>) -> Self {
        Self {
            confirmed: response.is_some(),
            response,
        }
    }
}

impl Dialog for PresetDialog {
    fn confirm(&mut self, _message: &str) -> bool {
        self.confirmed
    }

    fn prompt(&mut self, _message: &str, _default: &str) -> Option<String> {
        self.response.take()
    }
}

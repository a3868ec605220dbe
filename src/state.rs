use crate::dialog::{DeleteDialog, DeleteRequest, FormState, ModalForm};
use crate::gates::{ApiError, AppConfig, GateList, QualityGate};

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub gates: GateList,
    pub delete_dialog: Option<DeleteDialog<FormState>>,
    pub message: Option<Message>,
    pub is_loading: bool,
}

#[derive(Clone, Debug)]
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: AppConfig::new(),
            gates: GateList::new(),
            delete_dialog: None,
            message: None,
            is_loading: false,
        }
    }

    pub fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn open_delete_dialog(&mut self, gate: QualityGate) {
        if self.delete_dialog.is_some() {
            return;
        }
        self.clear_message();
        self.delete_dialog = Some(DeleteDialog::for_gate(FormState::new(), gate));
    }

    pub fn cancel_delete_dialog(&mut self) {
        if let Some(dialog) = self.delete_dialog.as_mut()
            && dialog.cancel()
        {
            self.delete_dialog = None;
        }
    }

    pub fn submit_delete_dialog(&mut self) -> Option<DeleteRequest> {
        self.delete_dialog.as_mut()?.submit()
    }

    /// Applies a delete outcome to the open dialog. A dialog that closed
    /// itself is dropped along with its gate.
    pub fn complete_delete(&mut self, outcome: Result<(), ApiError>) {
        let Some(dialog) = self.delete_dialog.as_mut() else {
            return;
        };
        if !dialog.complete(outcome) || dialog.form().is_open() {
            return;
        }

        let gate = dialog.gate().clone();
        self.delete_dialog = None;
        self.gates.remove(gate.id);
        self.set_message(Message::success(format!(
            "Quality gate \"{}\" deleted",
            gate.name
        )));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

use crate::gates::ValidationMessage;

/// Shared behavior of modal dialogs that wrap a single form.
pub trait ModalForm {
    /// Base submission handling. Returns `false` when the submission must be
    /// ignored, e.g. because the form is disabled or already closed.
    fn on_form_submit(&mut self) -> bool;
    fn disable_form(&mut self);
    fn enable_form(&mut self);
    fn show_errors(&mut self, errors: &[ValidationMessage], warnings: &[ValidationMessage]);
    fn close(&mut self);
    fn is_enabled(&self) -> bool;
    fn is_open(&self) -> bool;
}

#[derive(Clone, PartialEq, Debug)]
pub struct FormState {
    pub open: bool,
    pub enabled: bool,
    pub errors: Vec<ValidationMessage>,
    pub warnings: Vec<ValidationMessage>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            open: true,
            enabled: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_messages(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalForm for FormState {
    fn on_form_submit(&mut self) -> bool {
        self.open && self.enabled
    }

    fn disable_form(&mut self) {
        self.enabled = false;
    }

    fn enable_form(&mut self) {
        self.enabled = true;
    }

    fn show_errors(&mut self, errors: &[ValidationMessage], warnings: &[ValidationMessage]) {
        self.errors = errors.to_vec();
        self.warnings = warnings.to_vec();
    }

    fn close(&mut self) {
        self.open = false;
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

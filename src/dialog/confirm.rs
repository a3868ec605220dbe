use crate::dialog::modal_form::ModalForm;
use tracing::{debug, warn};

/// What a confirmation dialog does once the user confirms.
pub trait ConfirmAction {
    type Request;
    type Error;

    /// Builds the request to send for one confirmed submission.
    fn request(&self) -> Self::Request;

    fn on_success<F: ModalForm>(&self, form: &mut F) {
        form.close();
    }

    fn on_failure<F: ModalForm>(&self, form: &mut F, error: &Self::Error);
}

/// A modal form driven by a [`ConfirmAction`].
///
/// `submit` runs synchronously and hands out at most one request until the
/// matching `complete` call; the outcome of that request is applied once.
#[derive(Clone, PartialEq, Debug)]
pub struct ConfirmDialog<F, A> {
    form: F,
    action: A,
    pending: bool,
}

impl<F: ModalForm, A: ConfirmAction> ConfirmDialog<F, A> {
    pub fn new(form: F, action: A) -> Self {
        Self {
            form,
            action,
            pending: false,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    #[allow(dead_code)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn submit(&mut self) -> Option<A::Request> {
        if self.pending || !self.form.on_form_submit() {
            debug!("submission ignored");
            return None;
        }

        self.form.disable_form();
        self.pending = true;
        Some(self.action.request())
    }

    /// Applies the outcome of the outstanding request. Returns `false` if no
    /// request was outstanding.
    pub fn complete(&mut self, outcome: Result<(), A::Error>) -> bool {
        if !self.pending {
            warn!("completion received without an outstanding request");
            return false;
        }
        self.pending = false;

        match outcome {
            Ok(()) => self.action.on_success(&mut self.form),
            Err(e) => self.action.on_failure(&mut self.form, &e),
        }
        true
    }

    /// Closes the dialog unless a request is still outstanding.
    pub fn cancel(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.form.close();
        true
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::gates::ValidationMessage;

    #[derive(Clone, PartialEq, Debug)]
    pub(crate) enum Call {
        Submit,
        Disable,
        Enable,
        ShowErrors(Vec<ValidationMessage>, Vec<ValidationMessage>),
        Close,
    }

    /// Form double that records every call made on it.
    #[derive(Clone, Debug)]
    pub(crate) struct RecordingForm {
        pub calls: Vec<Call>,
        enabled: bool,
        open: bool,
    }

    impl RecordingForm {
        pub fn new() -> Self {
            Self {
                calls: Vec::new(),
                enabled: true,
                open: true,
            }
        }

        pub fn count(&self, call: &Call) -> usize {
            self.calls.iter().filter(|c| *c == call).count()
        }

        pub fn shown_errors(&self) -> Vec<&Call> {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::ShowErrors(..)))
                .collect()
        }
    }

    impl ModalForm for RecordingForm {
        fn on_form_submit(&mut self) -> bool {
            self.calls.push(Call::Submit);
            self.enabled && self.open
        }

        fn disable_form(&mut self) {
            self.calls.push(Call::Disable);
            self.enabled = false;
        }

        fn enable_form(&mut self) {
            self.calls.push(Call::Enable);
            self.enabled = true;
        }

        fn show_errors(&mut self, errors: &[ValidationMessage], warnings: &[ValidationMessage]) {
            self.calls
                .push(Call::ShowErrors(errors.to_vec(), warnings.to_vec()));
        }

        fn close(&mut self) {
            self.calls.push(Call::Close);
            self.open = false;
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn is_open(&self) -> bool {
            self.open
        }
    }

    struct Rename;

    impl ConfirmAction for Rename {
        type Request = &'static str;
        type Error = String;

        fn request(&self) -> &'static str {
            "rename"
        }

        fn on_failure<F: ModalForm>(&self, form: &mut F, _error: &String) {
            form.enable_form();
        }
    }

    #[test]
    fn test_submit_disables_before_request() {
        let mut dialog = ConfirmDialog::new(RecordingForm::new(), Rename);

        assert_eq!(dialog.submit(), Some("rename"));
        assert_eq!(dialog.form().calls, vec![Call::Submit, Call::Disable]);
        assert!(dialog.is_pending());
    }

    #[test]
    fn test_second_submit_is_ignored_while_pending() {
        let mut dialog = ConfirmDialog::new(RecordingForm::new(), Rename);

        assert!(dialog.submit().is_some());
        assert!(dialog.submit().is_none());
        assert_eq!(dialog.form().count(&Call::Disable), 1);
    }

    #[test]
    fn test_complete_without_request_is_ignored() {
        let mut dialog = ConfirmDialog::new(RecordingForm::new(), Rename);

        assert!(!dialog.complete(Ok(())));
        assert!(dialog.form().calls.is_empty());
    }

    #[test]
    fn test_outcome_applied_once() {
        let mut dialog = ConfirmDialog::new(RecordingForm::new(), Rename);
        dialog.submit();

        assert!(dialog.complete(Ok(())));
        assert!(!dialog.complete(Err("late".to_string())));
        assert_eq!(dialog.form().count(&Call::Close), 1);
        assert_eq!(dialog.form().count(&Call::Enable), 0);
    }

    #[test]
    fn test_failure_allows_resubmission() {
        let mut dialog = ConfirmDialog::new(RecordingForm::new(), Rename);
        dialog.submit();
        dialog.complete(Err("nope".to_string()));

        assert!(dialog.form().is_enabled());
        assert!(dialog.submit().is_some());
    }

    #[test]
    fn test_cancel_blocked_while_pending() {
        let mut dialog = ConfirmDialog::new(RecordingForm::new(), Rename);
        dialog.submit();
        assert!(!dialog.cancel());
        assert!(dialog.form().is_open());

        dialog.complete(Err("nope".to_string()));
        assert!(dialog.cancel());
        assert!(!dialog.form().is_open());
    }
}

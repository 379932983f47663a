use std::{cell::RefCell, future::Future, time::Duration};

use serde::Serialize;
use thiserror::Error;

use crate::notification::Notification;

/// How long [`SimulatedSubmitter`] pretends the network takes.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("All contact fields are required")]
    Validation,
    /// Dropped by [`submit_form`]; never turned into a notification.
    #[error("A submission is already in flight")]
    InFlight,
    #[error("Couldn't deliver message: {0}")]
    Submission(String),
}

impl From<&ContactError> for Notification {
    fn from(err: &ContactError) -> Self {
        match err {
            ContactError::Validation => Notification::missing_fields(),
            // submit_form drops InFlight before converting
            ContactError::InFlight | ContactError::Submission(_) => Notification::send_failed(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FieldChanged(Field, String),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed,
}

/// What gets handed to the delivery service. Serializes to
/// `{"name": .., "email": .., "message": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Local state of the contact form.
///
/// The form is `Idle` whenever `is_submitting` is false. Text fields are
/// never absent, only empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    is_submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.apply(Action::FieldChanged(field, value.into()));
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::FieldChanged(field, value) => {
                let slot = match field {
                    Field::Name => &mut self.name,
                    Field::Email => &mut self.email,
                    Field::Message => &mut self.message,
                };
                *slot = value;
            }
            Action::SubmitStarted => self.is_submitting = true,
            Action::SubmitSucceeded => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.is_submitting = false;
            }
            Action::SubmitFailed => self.is_submitting = false,
        }
    }

    /// Only emptiness is checked; whitespace counts as content.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::Validation);
        }
        Ok(())
    }

    /// Moves `Idle` to `Submitting` and returns the payload to send.
    /// Leaves the state untouched on error.
    pub fn start_submit(&mut self) -> Result<ContactMessage, ContactError> {
        if self.is_submitting {
            return Err(ContactError::InFlight);
        }
        if let Err(err) = self.validate() {
            log::warn!("contact form rejected: {err}");
            return Err(err);
        }
        self.apply(Action::SubmitStarted);
        log::info!("contact form submitting");
        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Returns to `Idle` whatever the outcome. Fields are cleared only on success.
    pub fn finish_submit(&mut self, outcome: Result<(), ContactError>) -> Notification {
        match outcome {
            Ok(()) => {
                self.apply(Action::SubmitSucceeded);
                log::info!("contact message sent");
                Notification::sent()
            }
            Err(err) => {
                self.apply(Action::SubmitFailed);
                log::error!("contact message failed: {err}");
                Notification::from(&err)
            }
        }
    }
}

/// The outbound delivery call. No retries happen behind this seam.
pub trait Submitter {
    fn submit(&self, message: ContactMessage)
        -> impl Future<Output = Result<(), ContactError>>;
}

/// Stand-in for a real delivery endpoint: waits, then reports success.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    pub delay: Duration,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self {
            delay: SUBMIT_DELAY,
        }
    }
}

impl Submitter for SimulatedSubmitter {
    async fn submit(&self, message: ContactMessage) -> Result<(), ContactError> {
        log::debug!("simulating delivery of message from {}", message.email);
        sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Single-owner container for a [`ContactForm`]. Returns `None` when the
/// state is gone (e.g. the owning view was disposed) or already borrowed.
pub trait FormHandle {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

impl FormHandle for RefCell<ContactForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        let mut form = self.try_borrow_mut().ok()?;
        Some(f(&mut form))
    }
}

/// Runs one submission end to end and returns the notification to show.
///
/// Validation failures return without awaiting anything. A submit while
/// another is in flight is ignored and yields `None`.
pub async fn submit_form<H, S>(form: &H, submitter: &S) -> Option<Notification>
where
    H: FormHandle,
    S: Submitter,
{
    let message = match form.with_form(ContactForm::start_submit)? {
        Ok(message) => message,
        Err(ContactError::InFlight) => return None,
        Err(err) => return Some(Notification::from(&err)),
    };
    let outcome = submitter.submit(message).await;
    form.with_form(|f| f.finish_submit(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Variant;
    use std::{cell::Cell, rc::Rc};

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, name);
        form.set_field(Field::Email, email);
        form.set_field(Field::Message, message);
        form
    }

    struct CountingSubmitter {
        calls: Cell<usize>,
        fail: bool,
    }

    impl CountingSubmitter {
        fn ok() -> Self {
            Self {
                calls: Cell::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: Cell::new(0),
                fail: true,
            }
        }
    }

    impl Submitter for CountingSubmitter {
        async fn submit(&self, _message: ContactMessage) -> Result<(), ContactError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(ContactError::Submission("relay unreachable".to_string()))
            } else {
                Ok(())
            }
        }
    }

    // Looks at the shared form while the call is in progress.
    struct ProbeSubmitter {
        form: Rc<RefCell<ContactForm>>,
        saw_submitting: Cell<Option<bool>>,
        fail: bool,
    }

    impl Submitter for ProbeSubmitter {
        async fn submit(&self, _message: ContactMessage) -> Result<(), ContactError> {
            self.saw_submitting
                .set(Some(self.form.borrow().is_submitting()));
            if self.fail {
                Err(ContactError::Submission("boom".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_new_form_is_empty_and_idle() {
        let form = ContactForm::new();
        assert_eq!(form.name(), "");
        assert_eq!(form.email(), "");
        assert_eq!(form.message(), "");
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_field_changes_do_not_validate() {
        let mut form = ContactForm::new();
        form.set_field(Field::Email, "not an email");
        assert_eq!(form.get(Field::Email), "not an email");
        form.apply(Action::FieldChanged(Field::Email, String::new()));
        assert_eq!(form.email(), "");
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_any_empty_field_skips_the_call() {
        let cases = [
            ("", "a@x.com", "Hi"),
            ("Ana", "", "Hi"),
            ("Ana", "a@x.com", ""),
            ("", "", ""),
        ];
        for (name, email, message) in cases {
            let form = RefCell::new(filled(name, email, message));
            let submitter = CountingSubmitter::ok();

            let note = submit_form(&form, &submitter)
                .await
                .expect("validation should produce a notification");

            assert_eq!(submitter.calls.get(), 0);
            assert_eq!(note, Notification::missing_fields());
            assert!(note.is_error());
            assert_eq!(*form.borrow(), filled(name, email, message));
        }
    }

    #[test]
    fn test_whitespace_counts_as_content() {
        let mut form = filled(" ", "\t", "\n");
        assert!(form.validate().is_ok());
        assert!(form.start_submit().is_ok());
        assert!(form.is_submitting());
    }

    #[test]
    fn test_start_submit_builds_payload() {
        let mut form = filled("Ana", "ana@x.com", "Hi");
        let message = form.start_submit().unwrap();
        assert_eq!(
            message,
            ContactMessage {
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
                message: "Hi".to_string(),
            }
        );
        assert!(form.is_submitting());
        // fields stay visible while sending
        assert_eq!(form.name(), "Ana");
    }

    #[test]
    fn test_second_start_is_refused_while_in_flight() {
        let mut form = filled("Ana", "ana@x.com", "Hi");
        form.start_submit().unwrap();
        assert_eq!(form.start_submit(), Err(ContactError::InFlight));
        assert!(form.is_submitting());
    }

    #[tokio::test]
    async fn test_success_sends_once_and_clears() {
        let form = Rc::new(RefCell::new(filled("Ana", "ana@x.com", "Hi")));
        let submitter = ProbeSubmitter {
            form: form.clone(),
            saw_submitting: Cell::new(None),
            fail: false,
        };

        let note = submit_form(&*form, &submitter).await.unwrap();

        assert_eq!(submitter.saw_submitting.get(), Some(true));
        assert_eq!(note, Notification::sent());
        assert_eq!(note.variant, Variant::Default);
        assert_eq!(*form.borrow(), ContactForm::new());
    }

    #[tokio::test]
    async fn test_failure_keeps_fields_and_returns_to_idle() {
        let form = Rc::new(RefCell::new(filled("Ana", "ana@x.com", "Hi")));
        let submitter = ProbeSubmitter {
            form: form.clone(),
            saw_submitting: Cell::new(None),
            fail: true,
        };

        let note = submit_form(&*form, &submitter).await.unwrap();

        assert_eq!(submitter.saw_submitting.get(), Some(true));
        assert_eq!(note, Notification::send_failed());
        let form = form.borrow();
        assert!(!form.is_submitting());
        assert_eq!(form.name(), "Ana");
        assert_eq!(form.email(), "ana@x.com");
        assert_eq!(form.message(), "Hi");
    }

    #[tokio::test]
    async fn test_failing_submitter_called_exactly_once() {
        let form = RefCell::new(filled("Ana", "ana@x.com", "Hi"));
        let submitter = CountingSubmitter::failing();
        submit_form(&form, &submitter).await;
        assert_eq!(submitter.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_in_flight_submit_is_ignored() {
        let mut inner = filled("Ana", "ana@x.com", "Hi");
        inner.start_submit().unwrap();
        let form = RefCell::new(inner);
        let submitter = CountingSubmitter::ok();

        assert_eq!(submit_form(&form, &submitter).await, None);
        assert_eq!(submitter.calls.get(), 0);
        assert!(form.borrow().is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submission_end_to_end() {
        let form = RefCell::new(filled("Ana", "ana@x.com", "Hi"));
        let started = tokio::time::Instant::now();

        let note = submit_form(&form, &SimulatedSubmitter::default())
            .await
            .unwrap();

        assert!(started.elapsed() >= SUBMIT_DELAY);
        assert_eq!(note, Notification::sent());
        assert_eq!(*form.borrow(), ContactForm::new());
    }

    #[tokio::test(start_paused = true)]
    async fn test_validation_failure_has_no_delay() {
        let form = RefCell::new(filled("", "a@x.com", "Hi"));
        let started = tokio::time::Instant::now();

        let note = submit_form(&form, &SimulatedSubmitter::default())
            .await
            .unwrap();

        assert_eq!(started.elapsed(), Duration::ZERO);
        assert!(note.is_error());
        assert_eq!(*form.borrow(), filled("", "a@x.com", "Hi"));
    }

    #[test]
    fn test_payload_json_shape() {
        let message = ContactMessage {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            message: "Hi".to_string(),
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "name": "Ana", "email": "ana@x.com", "message": "Hi" })
        );
    }

    #[test]
    fn test_error_notifications() {
        assert_eq!(
            Notification::from(&ContactError::Validation),
            Notification::missing_fields()
        );
        assert_eq!(
            Notification::from(&ContactError::Submission("x".to_string())),
            Notification::send_failed()
        );
    }
}

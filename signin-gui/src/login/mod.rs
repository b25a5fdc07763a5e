//! The sign-in form state machine.
//!
//! Edits overwrite a field and hide its error without checking the new
//! value. A submit checks every field, and only when all pass hands the
//! credentials to the [`Authenticator`]. While that attempt runs the form is
//! [`SubmissionStatus::Submitting`] and further submits are ignored.
pub mod message;
pub mod validation;
pub mod view;

use std::sync::Arc;

use iced::Task;
use tracing::{debug, info, warn};

use crate::auth::{AuthError, Authenticator, Credentials};

pub use message::{Message, ViewMessage};
pub use validation::{validate, Field, FieldError, FormFields, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

/// Result of the last completed login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Succeeded,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct LoginForm {
    fields: FormFields,
    errors: ValidationErrors,
    status: SubmissionStatus,
    show_password: bool,
    remember_me: bool,
    last_outcome: Option<LoginOutcome>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    pub fn last_outcome(&self) -> Option<&LoginOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn update(
        &mut self,
        authenticator: Arc<dyn Authenticator + Sync + Send>,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::View(ViewMessage::EmailEdited(value)) => {
                self.edit(Field::Email, value);
            }
            Message::View(ViewMessage::PasswordEdited(value)) => {
                self.edit(Field::Password, value);
            }
            Message::View(ViewMessage::ShowPassword(show)) => {
                self.show_password = show;
            }
            Message::View(ViewMessage::RememberMe(remember)) => {
                self.remember_me = remember;
            }
            Message::View(ViewMessage::Submit) => {
                return self.submit(authenticator);
            }
            Message::LoginCompleted(res) => {
                self.complete(res);
            }
        }
        Task::none()
    }

    /// Sets the field value and drops its stored error, if any.
    /// The new value is not checked until the next submit.
    pub fn edit(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        if let Some(e) = self.errors.clear(field) {
            debug!("Cleared error of field {:?}: {}", field, e);
        }
    }

    pub fn submit(&mut self, authenticator: Arc<dyn Authenticator + Sync + Send>) -> Task<Message> {
        if self.is_submitting() {
            debug!("Submit ignored, a login attempt is already running");
            return Task::none();
        }

        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            debug!("Submit aborted, invalid fields: {:?}", self.errors);
            return Task::none();
        }

        self.status = SubmissionStatus::Submitting;
        self.last_outcome = None;
        let credentials = Credentials::new(
            self.fields.email.clone(),
            self.fields.password.clone(),
            self.remember_me,
        );
        info!("Signing in as {}", credentials.email);
        Task::perform(
            async move { authenticator.login(credentials).await },
            Message::LoginCompleted,
        )
    }

    fn complete(&mut self, res: Result<(), AuthError>) {
        if !self.is_submitting() {
            warn!("Received a login result while no attempt was running");
        }
        self.status = SubmissionStatus::Idle;
        self.last_outcome = Some(match res {
            Ok(()) => {
                info!("Login attempt completed");
                LoginOutcome::Succeeded
            }
            Err(e) => {
                warn!("Login attempt failed: {}", e);
                LoginOutcome::Failed(e.to_string())
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::{SimulatedAuthenticator, DEFAULT_LOGIN_DELAY},
        utils::sandbox::Sandbox,
    };
    use async_trait::async_trait;
    use iced::futures::StreamExt;
    use iced_runtime::{task, Action};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::Instant;

    #[derive(Debug, Default)]
    struct Recorder {
        calls: AtomicUsize,
        reject: Option<AuthError>,
    }

    #[async_trait]
    impl Authenticator for Recorder {
        async fn login(&self, _credentials: Credentials) -> Result<(), AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reject {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn simulated() -> Arc<dyn Authenticator + Sync + Send> {
        Arc::new(SimulatedAuthenticator::new(Duration::from_millis(10)))
    }

    fn form_with(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new();
        form.edit(Field::Email, email.to_string());
        form.edit(Field::Password, password.to_string());
        form
    }

    /// Awaits the task and returns the messages it produced.
    async fn run(cmd: Task<Message>) -> Vec<Message> {
        let mut messages = Vec::new();
        if let Some(mut stream) = task::into_stream(cmd) {
            while let Some(action) = stream.next().await {
                if let Action::Output(msg) = action {
                    messages.push(msg);
                }
            }
        }
        messages
    }

    #[test]
    fn test_new_form() {
        let form = LoginForm::new();
        assert_eq!(form.fields(), &FormFields::default());
        assert!(form.errors().is_empty());
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(!form.show_password());
        assert!(!form.remember_me());
        assert!(form.last_outcome().is_none());
    }

    #[tokio::test]
    async fn test_submit_empty_form() {
        let recorder = Arc::new(Recorder::default());
        let mut form = LoginForm::new();
        let cmd = form.update(recorder.clone(), ViewMessage::Submit.into());

        assert!(task::into_stream(cmd).is_none());
        assert_eq!(form.errors().message(Field::Email), Some("Email is required"));
        assert_eq!(
            form.errors().message(Field::Password),
            Some("Password is required")
        );
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(recorder.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_bad_email() {
        let recorder = Arc::new(Recorder::default());
        let mut form = form_with("bademail", "secret1");
        let cmd = form.update(recorder.clone(), ViewMessage::Submit.into());

        assert!(task::into_stream(cmd).is_none());
        assert_eq!(
            form.errors().message(Field::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(form.errors().get(Field::Password), None);
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(recorder.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_valid_form() {
        let authenticator: Arc<dyn Authenticator + Sync + Send> =
            Arc::new(SimulatedAuthenticator::default());
        let mut form = form_with("user@example.com", "secret1");
        assert_eq!(form.status(), SubmissionStatus::Idle);

        let start = Instant::now();
        let cmd = form.update(authenticator.clone(), ViewMessage::Submit.into());
        assert!(form.errors().is_empty());
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert!(form.last_outcome().is_none());

        let messages = run(cmd).await;
        assert!(start.elapsed() >= DEFAULT_LOGIN_DELAY);
        assert_eq!(messages.len(), 1);
        // Still submitting until the result is handled.
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        for msg in messages {
            assert!(matches!(msg, Message::LoginCompleted(Ok(()))));
            let _cmd = form.update(authenticator.clone(), msg);
        }
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.last_outcome(), Some(&LoginOutcome::Succeeded));
        // Fields are kept.
        assert_eq!(form.fields().email, "user@example.com");
        assert_eq!(form.fields().password, "secret1");
    }

    #[tokio::test]
    async fn test_submit_while_submitting_is_ignored() {
        let recorder = Arc::new(Recorder::default());
        let mut form = form_with("user@example.com", "secret1");

        let first = form.update(recorder.clone(), ViewMessage::Submit.into());
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        // Even with fields made invalid meanwhile, nothing changes.
        form.edit(Field::Password, "abc".to_string());
        let second = form.update(recorder.clone(), ViewMessage::Submit.into());
        assert!(task::into_stream(second).is_none());
        assert!(form.errors().is_empty());
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        let messages = run(first).await;
        assert_eq!(messages.len(), 1);
        assert_eq!(recorder.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_login() {
        let recorder = Arc::new(Recorder {
            calls: AtomicUsize::new(0),
            reject: Some(AuthError::Rejected("unknown account".to_string())),
        });
        let sandbox = Sandbox::new(form_with("user@example.com", "secret1"))
            .update(recorder.clone(), ViewMessage::Submit.into())
            .await;

        let form = sandbox.state();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(
            form.last_outcome(),
            Some(&LoginOutcome::Failed(
                "Credentials rejected: unknown account".to_string()
            ))
        );
        assert!(form.errors().is_empty());
        assert_eq!(recorder.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unavailable_service() {
        let recorder = Arc::new(Recorder {
            calls: AtomicUsize::new(0),
            reject: Some(AuthError::Unavailable("timeout".to_string())),
        });
        let sandbox = Sandbox::new(form_with("user@example.com", "secret1"))
            .update(recorder, ViewMessage::Submit.into())
            .await;

        let form = sandbox.state();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(
            form.last_outcome(),
            Some(&LoginOutcome::Failed(
                "Authentication service unavailable: timeout".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_new_attempt_clears_outcome() {
        let authenticator = simulated();
        let sandbox = Sandbox::new(form_with("user@example.com", "secret1"))
            .update(authenticator.clone(), ViewMessage::Submit.into())
            .await;
        assert_eq!(sandbox.state().last_outcome(), Some(&LoginOutcome::Succeeded));

        let mut form = sandbox.into_state();
        let _cmd = form.update(authenticator, ViewMessage::Submit.into());
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert!(form.last_outcome().is_none());
    }

    #[test]
    fn test_edit_clears_error() {
        let authenticator = simulated();
        let mut form = form_with("bademail", "abc");
        let _cmd = form.update(authenticator.clone(), ViewMessage::Submit.into());
        assert_eq!(form.errors().get(Field::Email), Some(FieldError::InvalidFormat));
        assert_eq!(form.errors().get(Field::Password), Some(FieldError::TooShort));

        // Still invalid, the error is hidden anyway.
        let _cmd = form.update(
            authenticator.clone(),
            ViewMessage::EmailEdited("stillbad".to_string()).into(),
        );
        assert_eq!(form.fields().email, "stillbad");
        assert_eq!(form.errors().get(Field::Email), None);
        // The other field keeps its error.
        assert_eq!(form.errors().get(Field::Password), Some(FieldError::TooShort));

        let _cmd = form.update(
            authenticator.clone(),
            ViewMessage::PasswordEdited("".to_string()).into(),
        );
        assert!(form.errors().is_empty());

        // Until the next submit.
        let _cmd = form.update(authenticator, ViewMessage::Submit.into());
        assert_eq!(form.errors().get(Field::Email), Some(FieldError::InvalidFormat));
        assert_eq!(
            form.errors().get(Field::Password),
            Some(FieldError::MissingField(Field::Password))
        );
    }

    #[test]
    fn test_errors_are_recomputed_on_submit() {
        let authenticator = simulated();
        let mut form = LoginForm::new();
        let _cmd = form.update(authenticator.clone(), ViewMessage::Submit.into());
        assert!(form.errors().get(Field::Email).is_some());
        assert!(form.errors().get(Field::Password).is_some());

        form.edit(Field::Email, "a@b.c".to_string());
        let _cmd = form.update(authenticator, ViewMessage::Submit.into());
        assert_eq!(form.errors().get(Field::Email), None);
        assert_eq!(
            form.errors().get(Field::Password),
            Some(FieldError::MissingField(Field::Password))
        );
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_toggles_do_not_touch_fields() {
        let authenticator = simulated();
        let mut form = form_with("bademail", "abc");
        let _cmd = form.update(authenticator.clone(), ViewMessage::Submit.into());
        let errors = form.errors().clone();
        let fields = form.fields().clone();

        let _cmd = form.update(authenticator.clone(), ViewMessage::ShowPassword(true).into());
        assert!(form.show_password());
        let _cmd = form.update(authenticator.clone(), ViewMessage::RememberMe(true).into());
        assert!(form.remember_me());
        let _cmd = form.update(authenticator, ViewMessage::ShowPassword(false).into());
        assert!(!form.show_password());

        assert_eq!(form.errors(), &errors);
        assert_eq!(form.fields(), &fields);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }
}

use crate::auth::AuthError;

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    // result of the login attempt started by a valid submit.
    LoginCompleted(Result<(), AuthError>),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    EmailEdited(String),
    PasswordEdited(String),
    ShowPassword(bool),
    RememberMe(bool),
    Submit,
}

impl From<ViewMessage> for Message {
    fn from(msg: ViewMessage) -> Self {
        Self::View(msg)
    }
}

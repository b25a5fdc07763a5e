use std::sync::Arc;

use iced::futures::StreamExt;
use iced_runtime::{task, Action};

use crate::{
    auth::Authenticator,
    login::{LoginForm, Message},
};

/// Runs a [`LoginForm`] update to completion: the messages produced by the
/// returned task are fed back to the form until no task is left.
pub struct Sandbox {
    state: LoginForm,
}

impl Sandbox {
    pub fn new(state: LoginForm) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &LoginForm {
        &self.state
    }

    pub fn into_state(self) -> LoginForm {
        self.state
    }

    pub async fn update(
        mut self,
        authenticator: Arc<dyn Authenticator + Sync + Send>,
        message: Message,
    ) -> Self {
        let mut pending = vec![self.state.update(authenticator.clone(), message)];
        while let Some(cmd) = pending.pop() {
            if let Some(mut stream) = task::into_stream(cmd) {
                while let Some(action) = stream.next().await {
                    if let Action::Output(msg) = action {
                        pending.push(self.state.update(authenticator.clone(), msg));
                    }
                }
            }
        }

        self
    }
}

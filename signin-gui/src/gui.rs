use std::sync::Arc;

use iced::{
    event::{self, Event},
    keyboard,
    widget::{focus_next, focus_previous, text_input},
    Subscription, Task,
};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

use signin_ui::widget::Element;

use crate::{
    auth::{Authenticator, SimulatedAuthenticator},
    config::Config,
    dir::SigninDirectory,
    login::{self, view::login_view, LoginForm},
    logger::setup_logger,
    VERSION,
};

pub struct GUI {
    config: Config,
    form: LoginForm,
    authenticator: Arc<dyn Authenticator + Sync + Send>,
}

#[derive(Debug)]
pub enum Key {
    Tab(bool),
}

#[derive(Debug)]
pub enum Message {
    CtrlC,
    Login(login::Message),
    KeyPressed(Key),
    Event(iced::Event),
}

impl From<login::Message> for Message {
    fn from(value: login::Message) -> Self {
        Self::Login(value)
    }
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

impl GUI {
    pub fn title(&self) -> String {
        format!("Sign in v{}", VERSION)
    }

    pub fn new(
        (datadir, config, log_level): (SigninDirectory, Config, Option<LevelFilter>),
    ) -> (GUI, Task<Message>) {
        // LOG_LEVEL wins over the config file.
        let log_level = log_level
            .or_else(|| config.log_level().ok().flatten())
            .unwrap_or(LevelFilter::INFO);
        if let Err(e) = setup_logger(log_level, &datadir) {
            eprintln!("Error while setting up the logger: {}", e);
        }
        info!("Using data directory {}", datadir.path().display());

        let authenticator = Arc::new(SimulatedAuthenticator::new(config.login_delay()));
        (
            Self::with_authenticator(config, authenticator),
            Task::batch(vec![
                Task::perform(ctrl_c(), |_| Message::CtrlC),
                text_input::focus(text_input::Id::new(login::view::EMAIL_INPUT_ID)),
            ]),
        )
    }

    fn with_authenticator(
        config: Config,
        authenticator: Arc<dyn Authenticator + Sync + Send>,
    ) -> Self {
        Self {
            config,
            form: LoginForm::new(),
            authenticator,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CtrlC
            | Message::Event(iced::Event::Window(iced::window::Event::CloseRequested)) => {
                info!("Closing window");
                iced::window::get_latest().and_then(iced::window::close)
            }
            Message::KeyPressed(Key::Tab(shift)) => {
                log::debug!("Tab pressed!");
                if shift {
                    focus_previous()
                } else {
                    focus_next()
                }
            }
            Message::Login(msg) => self
                .form
                .update(self.authenticator.clone(), msg)
                .map(Message::Login),
            Message::Event(_) => Task::none(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, status, _| match (&event, status) {
            (
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Tab),
                    modifiers,
                    ..
                }),
                event::Status::Ignored,
            ) => Some(Message::KeyPressed(Key::Tab(modifiers.shift()))),
            (
                iced::Event::Window(iced::window::Event::CloseRequested),
                event::Status::Ignored,
            ) => Some(Message::Event(event)),
            _ => None,
        })
    }

    pub fn view(&self) -> Element<'_, Message> {
        login_view(&self.form, &self.config.panel)
            .map(|msg| Message::Login(login::Message::View(msg)))
    }

    pub fn scale_factor(&self) -> f64 {
        1.0
    }
}

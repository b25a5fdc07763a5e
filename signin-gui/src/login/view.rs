use iced::{
    widget::{row, Space},
    Alignment, Length,
};

use signin_ui::{
    component::{button, checkbox, form, notification, text},
    theme,
    widget::*,
};

use super::{Field, LoginForm, LoginOutcome, ViewMessage};
use crate::config::PanelConfig;

pub const EMAIL_INPUT_ID: &str = "login_email";
pub const PASSWORD_INPUT_ID: &str = "login_password";

pub fn login_view<'a>(state: &'a LoginForm, panel: &'a PanelConfig) -> Element<'a, ViewMessage> {
    let content = Row::new()
        .push(
            Container::new(form_view(state))
                .padding(40)
                .width(Length::FillPortion(1))
                .style(theme::card::form),
        )
        .push(
            Container::new(panel_view(panel))
                .padding(40)
                .width(Length::FillPortion(1))
                .height(Length::Fill)
                .center_y(Length::Fill)
                .style(theme::card::panel),
        )
        .height(Length::Shrink);

    Container::new(Container::new(content).max_width(960.0))
        .padding(20)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(theme::container::background)
        .into()
}

fn form_view(state: &LoginForm) -> Element<'_, ViewMessage> {
    let can_submit = !state.is_submitting();
    let fields = state.fields();
    let errors = state.errors();

    let header = Column::new()
        .push(text::h2("Welcome Back"))
        .push(text::p1_regular("Sign in to your account to continue").style(theme::text::secondary))
        .spacing(8)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    let email = Column::new()
        .push(text::p2_medium("Email Address").style(theme::text::secondary))
        .push(
            form::Form::new(
                "Enter your email",
                &form::Value::with_warning(&fields.email, errors.message(Field::Email)),
                ViewMessage::EmailEdited,
            )
            .id(EMAIL_INPUT_ID)
            .on_submit_maybe(can_submit.then_some(ViewMessage::Submit))
            .size(16)
            .padding(12),
        )
        .spacing(8);

    let password = Column::new()
        .push(text::p2_medium("Password").style(theme::text::secondary))
        .push(
            row![
                form::Form::new(
                    "Enter your password",
                    &form::Value::with_warning(&fields.password, errors.message(Field::Password)),
                    ViewMessage::PasswordEdited,
                )
                .secure(!state.show_password())
                .id(PASSWORD_INPUT_ID)
                .on_submit_maybe(can_submit.then_some(ViewMessage::Submit))
                .size(16)
                .padding(12),
                button::transparent(if state.show_password() { "Hide" } else { "Show" })
                    .on_press(ViewMessage::ShowPassword(!state.show_password())),
            ]
            .spacing(5)
            .align_y(Alignment::Start),
        )
        .spacing(8);

    let options = Row::new()
        .push(checkbox("Remember me", state.remember_me(), ViewMessage::RememberMe))
        .push(Space::with_width(Length::Fill))
        // No recovery flow exists yet, the link stays inert.
        .push(button::link("Forgot password?"))
        .align_y(Alignment::Center);

    let submit = if can_submit {
        button::primary(None, "Sign In").on_press(ViewMessage::Submit)
    } else {
        button::primary(None, "Signing in...")
    }
    .width(Length::Fill);

    let outcome = state.last_outcome().map(|outcome| match outcome {
        LoginOutcome::Succeeded => notification::success("Signed in successfully"),
        LoginOutcome::Failed(reason) => notification::error("Sign in failed", reason),
    });

    Column::new()
        .push(header)
        .push(Space::with_height(16))
        .push(email)
        .push(password)
        .push(options)
        .push(submit)
        .push_maybe(outcome)
        .spacing(24)
        .max_width(420.0)
        .into()
}

fn panel_view(panel: &PanelConfig) -> Element<'_, ViewMessage> {
    Column::new()
        .push(
            Container::new(text::h1("✓"))
                .width(Length::Fixed(96.0))
                .height(Length::Fixed(96.0))
                .center_x(Length::Fixed(96.0))
                .center_y(Length::Fixed(96.0))
                .style(theme::card::badge),
        )
        .push(text::h2(&panel.title))
        .push(
            text::h3(&panel.tagline)
                .style(theme::text::secondary)
                .align_x(Alignment::Center),
        )
        .push(
            panel
                .details
                .iter()
                .fold(Column::new().spacing(12), |col, line| {
                    col.push(
                        row![
                            Container::new(text::caption("✓"))
                                .padding([2, 6])
                                .style(theme::card::badge),
                            text::p2_regular(line),
                        ]
                        .spacing(12)
                        .align_y(Alignment::Center),
                    )
                }),
        )
        .spacing(24)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
}

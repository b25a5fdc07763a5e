use iced::Length;

use crate::{component::text, theme, widget::*};

pub fn success<'a, T: 'a>(message: &'a str) -> Container<'a, T> {
    Container::new(text::p2_medium(message))
        .padding(10)
        .width(Length::Fill)
        .style(theme::notification::success)
}

pub fn error<'a, T: 'a>(title: &'static str, message: &'a str) -> Container<'a, T> {
    Container::new(
        Column::new()
            .push(text::p2_medium(title))
            .push(text::caption(message))
            .spacing(2),
    )
    .padding(10)
    .width(Length::Fill)
    .style(theme::notification::error)
}

use iced::widget::container::Style;
use iced::{Background, Border};

use super::Theme;

pub fn success(theme: &Theme) -> Style {
    let palette = &theme.colors.notifications.success;
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: palette.border.unwrap_or(palette.background),
        },
        ..Default::default()
    }
}

pub fn error(theme: &Theme) -> Style {
    let palette = &theme.colors.notifications.error;
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: palette.border.unwrap_or(palette.background),
        },
        ..Default::default()
    }
}

use iced::widget::container::Style;
use iced::{Background, Border};

use super::palette::ContainerPalette;
use super::Theme;

fn card(palette: &ContainerPalette, radius: f32) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: if let Some(color) = palette.border {
            Border {
                radius: radius.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                radius: radius.into(),
                ..Default::default()
            }
        },
        ..Default::default()
    }
}

pub fn form(theme: &Theme) -> Style {
    card(&theme.colors.cards.form, 24.0)
}

pub fn panel(theme: &Theme) -> Style {
    card(&theme.colors.cards.panel, 24.0)
}

/// Round badge, used for the decorative marks of the side panel.
pub fn badge(theme: &Theme) -> Style {
    card(&theme.colors.cards.badge, 100.0)
}

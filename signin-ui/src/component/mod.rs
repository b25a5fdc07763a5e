pub mod button;
pub mod form;
pub mod notification;
pub mod text;

use crate::{theme, widget::*};

/// Checkbox with a label, styled for dark backgrounds.
pub fn checkbox<'a, Message: 'a, F>(
    label: &'a str,
    checked: bool,
    on_toggle: F,
) -> CheckBox<'a, Message>
where
    F: 'a + Fn(bool) -> Message,
{
    CheckBox::new(label, checked)
        .on_toggle(on_toggle)
        .size(16)
        .text_size(text::P2_SIZE)
        .style(theme::checkbox::primary)
}

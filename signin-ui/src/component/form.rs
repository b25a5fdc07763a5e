use iced::Length;

use crate::{component::text, theme, widget::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value<T> {
    pub value: T,
    pub warning: Option<&'static str>,
    pub valid: bool,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: "".to_string(),
            warning: None,
            valid: true,
        }
    }
}

impl Value<String> {
    /// A value flagged invalid when a warning is given.
    pub fn with_warning(value: &str, warning: Option<&'static str>) -> Self {
        Self {
            value: value.to_string(),
            warning,
            valid: warning.is_none(),
        }
    }
}

pub struct Form<'a, Message> {
    input: TextInput<'a, Message>,
    warning: Option<&'a str>,
    valid: bool,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            input: TextInput::new(placeholder, &value.value).on_input(on_change),
            warning: value.warning,
            valid: value.valid,
        }
    }

    /// Masks the value of the [`Form`], for secrets like passwords.
    pub fn secure(mut self, is_secure: bool) -> Self {
        self.input = self.input.secure(is_secure);
        self
    }

    /// Sets the message produced when the user presses Enter, if any.
    pub fn on_submit_maybe(mut self, message: Option<Message>) -> Self {
        self.input = self.input.on_submit_maybe(message);
        self
    }

    /// Sets the widget id of the [`Form`] input, used to move the focus.
    pub fn id(mut self, id: &'static str) -> Self {
        self.input = self.input.id(iced::widget::text_input::Id::new(id));
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    /// Sets the [`Form`] with a text size
    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .push(if !form.valid {
                    form.input.style(theme::text_input::invalid)
                } else {
                    form.input
                })
                .push_maybe(if !form.valid {
                    form.warning
                        .map(|message| text::p2_regular(message).style(theme::text::error))
                } else {
                    None
                })
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_with_warning_is_invalid() {
        let value = Value::with_warning("foo", Some("Please enter a valid email address"));
        assert!(!value.valid);
        assert_eq!(value.value, "foo");
        assert_eq!(value.warning, Some("Please enter a valid email address"));

        let value = Value::with_warning("user@example.com", None);
        assert!(value.valid);
        assert_eq!(value, Value {
            value: "user@example.com".to_string(),
            warning: None,
            valid: true,
        });
    }

    #[test]
    fn default_value_is_empty_and_valid() {
        let value = Value::<String>::default();
        assert!(value.value.is_empty());
        assert!(value.valid);
        assert!(value.warning.is_none());
    }
}

use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
    pub checkboxes: Checkboxes,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub transparent: Button,
    pub link: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub form: ContainerPalette,
    pub panel: ContainerPalette,
    pub badge: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub focused: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Checkboxes {
    pub icon: iced::Color,
    pub text: iced::Color,
    pub background: iced::Color,
    pub checked: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::SLATE_900,
            },
            text: Text {
                primary: color::WHITE,
                secondary: color::GREY_2,
                error: color::LIGHT_RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::PURPLE_500,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::PURPLE_600,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::PURPLE_700,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::PURPLE_700,
                        text: color::GREY_1,
                        border: None,
                    }),
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_3,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::PURPLE_400,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::PURPLE_300,
                        border: None,
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::PURPLE_400,
                        border: None,
                    }),
                },
            },
            cards: Cards {
                form: ContainerPalette {
                    background: color::WHITE_10,
                    text: None,
                    border: Some(color::WHITE_20),
                },
                panel: ContainerPalette {
                    background: color::PURPLE_600,
                    text: Some(color::WHITE),
                    border: None,
                },
                badge: ContainerPalette {
                    background: color::WHITE_20,
                    text: Some(color::WHITE),
                    border: None,
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::TRANSPARENT_GREEN,
                    text: Some(color::GREEN),
                    border: Some(color::GREEN),
                },
                error: ContainerPalette {
                    background: color::TRANSPARENT_RED,
                    text: Some(color::LIGHT_RED),
                    border: Some(color::RED),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE_05,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::PURPLE_500,
                        border: Some(color::WHITE_20),
                    },
                    focused: TextInputPalette {
                        background: color::WHITE_05,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::PURPLE_500,
                        border: Some(color::PURPLE_500),
                    },
                    disabled: TextInputPalette {
                        background: color::TRANSPARENT,
                        icon: color::GREY_4,
                        placeholder: color::GREY_4,
                        value: color::GREY_3,
                        selection: color::PURPLE_500,
                        border: Some(color::WHITE_10),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE_05,
                        icon: color::RED,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::PURPLE_500,
                        border: Some(color::RED),
                    },
                    focused: TextInputPalette {
                        background: color::WHITE_05,
                        icon: color::RED,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::PURPLE_500,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::TRANSPARENT,
                        icon: color::RED,
                        placeholder: color::GREY_4,
                        value: color::GREY_3,
                        selection: color::PURPLE_500,
                        border: Some(color::RED),
                    },
                },
            },
            checkboxes: Checkboxes {
                icon: color::WHITE,
                text: color::GREY_2,
                background: color::WHITE_10,
                checked: color::PURPLE_500,
                border: Some(color::WHITE_20),
            },
        }
    }
}

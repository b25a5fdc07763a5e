use iced::Color;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;
pub const SLATE_900: Color = Color::from_rgb(
    0x0F as f32 / 255.0,
    0x17 as f32 / 255.0,
    0x2A as f32 / 255.0,
);
pub const PURPLE_700: Color = Color::from_rgb(
    0x7E as f32 / 255.0,
    0x22 as f32 / 255.0,
    0xCE as f32 / 255.0,
);
pub const PURPLE_600: Color = Color::from_rgb(
    0x93 as f32 / 255.0,
    0x33 as f32 / 255.0,
    0xEA as f32 / 255.0,
);
pub const PURPLE_500: Color = Color::from_rgb(
    0xA8 as f32 / 255.0,
    0x55 as f32 / 255.0,
    0xF7 as f32 / 255.0,
);
pub const PURPLE_400: Color = Color::from_rgb(
    0xC0 as f32 / 255.0,
    0x84 as f32 / 255.0,
    0xFC as f32 / 255.0,
);
pub const PURPLE_300: Color = Color::from_rgb(
    0xD8 as f32 / 255.0,
    0xB4 as f32 / 255.0,
    0xFE as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x4B as f32 / 255.0,
    0x55 as f32 / 255.0,
    0x63 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x9C as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0xAF as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xD1 as f32 / 255.0,
    0xD5 as f32 / 255.0,
    0xDB as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xE5 as f32 / 255.0,
    0xE7 as f32 / 255.0,
    0xEB as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xEF as f32 / 255.0,
    0x44 as f32 / 255.0,
    0x44 as f32 / 255.0,
);
pub const LIGHT_RED: Color = Color::from_rgb(
    0xF8 as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
);
pub const GREEN: Color = Color::from_rgb(
    0x22 as f32 / 255.0,
    0xC5 as f32 / 255.0,
    0x5E as f32 / 255.0,
);
pub const WHITE_05: Color = Color::from_rgba(
    0xFF as f32 / 255.0,
    0xFF as f32 / 255.0,
    0xFF as f32 / 255.0,
    0.05,
);
pub const WHITE_10: Color = Color::from_rgba(
    0xFF as f32 / 255.0,
    0xFF as f32 / 255.0,
    0xFF as f32 / 255.0,
    0.1,
);
pub const WHITE_20: Color = Color::from_rgba(
    0xFF as f32 / 255.0,
    0xFF as f32 / 255.0,
    0xFF as f32 / 255.0,
    0.2,
);
pub const TRANSPARENT_RED: Color = Color::from_rgba(
    0xEF as f32 / 255.0,
    0x44 as f32 / 255.0,
    0x44 as f32 / 255.0,
    0.15,
);
pub const TRANSPARENT_GREEN: Color = Color::from_rgba(
    0x22 as f32 / 255.0,
    0xC5 as f32 / 255.0,
    0x5E as f32 / 255.0,
    0.15,
);

use iced::Color;

pub const BLACK: Color = iced::Color::BLACK;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;

// Dark theme base, the deep navy of the portal.
pub const NAVY: Color = Color::from_rgb(
    0x0A as f32 / 255.0,
    0x0F as f32 / 255.0,
    0x27 as f32 / 255.0,
);
pub const NAVY_LIGHT: Color = Color::from_rgb(
    0x13 as f32 / 255.0,
    0x1A as f32 / 255.0,
    0x3A as f32 / 255.0,
);
pub const NAVY_BORDER: Color = Color::from_rgb(
    0x2A as f32 / 255.0,
    0x33 as f32 / 255.0,
    0x5C as f32 / 255.0,
);

// Primary accent.
pub const INDIGO: Color = Color::from_rgb(
    0x1A as f32 / 255.0,
    0x23 as f32 / 255.0,
    0x7E as f32 / 255.0,
);
pub const INDIGO_LIGHT: Color = Color::from_rgb(
    0x3F as f32 / 255.0,
    0x51 as f32 / 255.0,
    0xB5 as f32 / 255.0,
);
pub const INDIGO_PALE: Color = Color::from_rgb(
    0x9F as f32 / 255.0,
    0xA8 as f32 / 255.0,
    0xDA as f32 / 255.0,
);

pub const GREY_3: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
);

pub const GREEN: Color = Color::from_rgb(
    0x2E as f32 / 255.0,
    0xCC as f32 / 255.0,
    0x71 as f32 / 255.0,
);
pub const DARK_GREEN: Color = Color::from_rgb(
    0x27 as f32 / 255.0,
    0xAE as f32 / 255.0,
    0x60 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xE7 as f32 / 255.0,
    0x4C as f32 / 255.0,
    0x3C as f32 / 255.0,
);
pub const DARK_RED: Color = Color::from_rgb(
    0xC0 as f32 / 255.0,
    0x39 as f32 / 255.0,
    0x2B as f32 / 255.0,
);
pub const BLUE: Color = Color::from_rgb(
    0x34 as f32 / 255.0,
    0x98 as f32 / 255.0,
    0xDB as f32 / 255.0,
);
pub const DARK_BLUE: Color = Color::from_rgb(
    0x29 as f32 / 255.0,
    0x80 as f32 / 255.0,
    0xB9 as f32 / 255.0,
);
pub const AMBER: Color = Color::from_rgb(
    0xF3 as f32 / 255.0,
    0x9C as f32 / 255.0,
    0x12 as f32 / 255.0,
);

// Light theme set.
pub const LIGHT_BG: Color = Color::from_rgb(
    0xF5 as f32 / 255.0,
    0xF6 as f32 / 255.0,
    0xFA as f32 / 255.0,
);
pub const LIGHT_FG: Color = Color::from_rgb(
    0xFF as f32 / 255.0,
    0xFF as f32 / 255.0,
    0xFF as f32 / 255.0,
);
pub const LIGHT_BORDER: Color = Color::from_rgb(
    0xC5 as f32 / 255.0,
    0xCA as f32 / 255.0,
    0xE9 as f32 / 255.0,
);
pub const DARK_TEXT: Color = Color::from_rgb(
    0x1A as f32 / 255.0,
    0x1A as f32 / 255.0,
    0x2E as f32 / 255.0,
);
pub const DARK_TEXT_SECONDARY: Color = Color::from_rgb(
    0x5C as f32 / 255.0,
    0x5C as f32 / 255.0,
    0x70 as f32 / 255.0,
);

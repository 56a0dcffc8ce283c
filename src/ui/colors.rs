use iced::{Color, color};

pub const BACKGROUND: Color = color!(0xF5F0EB);
pub const SURFACE: Color = color!(0xFFFFFF);

pub const PRIMARY: Color = color!(0x7CA982);
pub const PRIMARY_DARK: Color = color!(0x5E8A64);
pub const ACCENT: Color = color!(0x9B8EC4);

pub const TEXT_PRIMARY: Color = color!(0x2E3339);
pub const TEXT_SECONDARY: Color = color!(0x6B7280);
pub const TEXT_TERTIARY: Color = color!(0x9CA3AF);
pub const TEXT_INVERSE: Color = color!(0xFFFFFF);

pub const BORDER: Color = color!(0xD6CFC7);
pub const BORDER_LIGHT: Color = color!(0xE8E2DB);

pub const SUCCESS: Color = color!(0x81B29A);
pub const WARNING: Color = color!(0xE6C07B);
pub const ERROR: Color = color!(0xD4817B);

pub const DISABLED: Color = color!(0xC9C3BC);

pub mod colors;
pub mod controls;
pub mod icons;
pub mod styles;

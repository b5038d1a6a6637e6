//! RGBA colors and the default viewer palette.

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Packs the color as `0xAARRGGBB`, the layout of an ARGB8888 texture.
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

// Viewer palette
pub const BACKGROUND: Color = Color::rgb(0, 0, 0);
pub const WIREFRAME: Color = Color::rgb(0, 0, 255);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_as_argb() {
        assert_eq!(Color::rgba(0x11, 0x22, 0x33, 0x44).to_argb(), 0x44112233);
        assert_eq!(BACKGROUND.to_argb(), 0xFF000000);
        assert_eq!(WIREFRAME.to_argb(), 0xFF0000FF);
    }
}

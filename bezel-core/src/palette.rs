#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bgra([u8; 4]);

impl Bgra {
    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self([blue, green, red, alpha])
    }

    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba(red, green, blue, 255)
    }

    pub const fn b(&self) -> u8 {
        self.0[0]
    }

    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    pub const fn r(&self) -> u8 {
        self.0[2]
    }

    pub const fn a(&self) -> u8 {
        self.0[3]
    }
}

impl AsRef<[u8]> for Bgra {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Colors of the watch, handed to the canvas on every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Bgra,
    pub silver: Bgra,
    /// Inner bezel ring, one shade below the outer one for depth.
    pub dark_silver: Bgra,
    pub metallic_blue: Bgra,
    pub dark_gray: Bgra,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Bgra::from_rgb(0, 0, 0),
            silver: Bgra::from_rgb(192, 192, 192),
            dark_silver: Bgra::from_rgb(128, 128, 128),
            metallic_blue: Bgra::from_rgb(151, 157, 206),
            dark_gray: Bgra::from_rgb(64, 64, 64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bgra_stores_channels_in_memory_order() {
        let color = Bgra::from_rgba(1, 2, 3, 4);
        assert_eq!(color.as_ref(), &[3, 2, 1, 4]);
        assert_eq!((color.r(), color.g(), color.b(), color.a()), (1, 2, 3, 4));
    }

    #[test]
    fn palette_colors_are_opaque() {
        let palette = Palette::default();
        for color in [
            palette.background,
            palette.silver,
            palette.dark_silver,
            palette.metallic_blue,
            palette.dark_gray,
        ] {
            assert_eq!(color.a(), 255);
        }
    }
}

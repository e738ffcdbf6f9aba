//! Packed 32-bit RGBA colour

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

const RED_SHIFT: u32 = 24;
const GREEN_SHIFT: u32 = 16;
const BLUE_SHIFT: u32 = 8;
const ALPHA_SHIFT: u32 = 0;

/// RGBA colour packed as `(red << 24) | (green << 16) | (blue << 8) | alpha`
///
/// Equality is exact on the packed value. The default is opaque black.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Colour(u32);

impl Colour {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self(
            (red as u32) << RED_SHIFT
                | (green as u32) << GREEN_SHIFT
                | (blue as u32) << BLUE_SHIFT
                | (alpha as u32) << ALPHA_SHIFT,
        )
    }

    /// Wrap an already packed `0xRRGGBBAA` value
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self(packed)
    }

    /// The packed `0xRRGGBBAA` value
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn red(self) -> u8 {
        self.channel(RED_SHIFT)
    }

    #[inline]
    pub const fn green(self) -> u8 {
        self.channel(GREEN_SHIFT)
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.channel(BLUE_SHIFT)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        self.channel(ALPHA_SHIFT)
    }

    #[inline]
    pub fn set_red(&mut self, red: u8) {
        self.set_channel(RED_SHIFT, red);
    }

    #[inline]
    pub fn set_green(&mut self, green: u8) {
        self.set_channel(GREEN_SHIFT, green);
    }

    #[inline]
    pub fn set_blue(&mut self, blue: u8) {
        self.set_channel(BLUE_SHIFT, blue);
    }

    #[inline]
    pub fn set_alpha(&mut self, alpha: u8) {
        self.set_channel(ALPHA_SHIFT, alpha);
    }

    /// Channels in `[red, green, blue, alpha]` order
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    #[inline]
    const fn channel(self, shift: u32) -> u8 {
        // Truncation keeps only the target byte
        (self.0 >> shift) as u8
    }

    #[inline]
    fn set_channel(&mut self, shift: u32, value: u8) {
        self.0 = (self.0 & !(0xFF << shift)) | (value as u32) << shift;
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 4]> for Colour {
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl From<Colour> for [u8; 4] {
    fn from(colour: Colour) -> Self {
        colour.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_black() {
        let c = Colour::default();
        assert_eq!(c.red(), 0);
        assert_eq!(c.green(), 0);
        assert_eq!(c.blue(), 0);
        assert_eq!(c.alpha(), 255);
        assert_eq!(c.packed(), 0x0000_00FF);
    }

    #[test]
    fn test_packing_layout() {
        let c = Colour::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.packed(), 0x1234_5678);
        assert_eq!(c.to_bytes(), [0x12, 0x34, 0x56, 0x78]);
        assert_eq!(Colour::from_packed(0x1234_5678), c);
    }

    #[test]
    fn test_getters() {
        let c = Colour::new(10, 20, 30, 40);
        assert_eq!(c.red(), 10);
        assert_eq!(c.green(), 20);
        assert_eq!(c.blue(), 30);
        assert_eq!(c.alpha(), 40);
    }

    #[test]
    fn test_setters_isolate_channels() {
        let mut c = Colour::new(10, 20, 30, 40);

        c.set_green(200);
        assert_eq!(c.to_bytes(), [10, 200, 30, 40]);

        c.set_red(255);
        assert_eq!(c.to_bytes(), [255, 200, 30, 40]);

        c.set_blue(0);
        assert_eq!(c.to_bytes(), [255, 200, 0, 40]);

        c.set_alpha(1);
        assert_eq!(c.to_bytes(), [255, 200, 0, 1]);
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let mut c = Colour::from_packed(u32::MAX);
        c.set_blue(0x0F);
        assert_eq!(c.packed(), 0xFFFF_0FFF);
    }

    #[test]
    fn test_exact_equality() {
        assert_eq!(Colour::new(1, 2, 3, 4), Colour::from([1, 2, 3, 4]));
        assert_ne!(Colour::new(1, 2, 3, 4), Colour::new(1, 2, 3, 5));
        assert_ne!(Colour::BLACK, Colour::WHITE);
    }
}

//! Named color palette for MiniMessage markup.
//!
//! Only the sixteen fixed palette colors are recognized; there are no hex or
//! RGB color tags.

use std::fmt;

/// A palette color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl Color {
    /// Every palette color, in legacy code order (`0` through `f`).
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::DarkBlue,
        Color::DarkGreen,
        Color::DarkAqua,
        Color::DarkRed,
        Color::DarkPurple,
        Color::Gold,
        Color::Gray,
        Color::DarkGray,
        Color::Blue,
        Color::Green,
        Color::Aqua,
        Color::Red,
        Color::LightPurple,
        Color::Yellow,
        Color::White,
    ];

    /// Look up a palette color by its tag name, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use minimessage::Color;
    ///
    /// assert_eq!(Color::from_name("dark_red"), Some(Color::DarkRed));
    /// assert_eq!(Color::from_name("GOLD"), Some(Color::Gold));
    /// assert_eq!(Color::from_name("orange"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }

    /// The tag name of this color, e.g. `dark_red`.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::DarkBlue => "dark_blue",
            Color::DarkGreen => "dark_green",
            Color::DarkAqua => "dark_aqua",
            Color::DarkRed => "dark_red",
            Color::DarkPurple => "dark_purple",
            Color::Gold => "gold",
            Color::Gray => "gray",
            Color::DarkGray => "dark_gray",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Aqua => "aqua",
            Color::Red => "red",
            Color::LightPurple => "light_purple",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }

    /// RGB components of this color.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0x00, 0x00, 0x00),
            Color::DarkBlue => (0x00, 0x00, 0xaa),
            Color::DarkGreen => (0x00, 0xaa, 0x00),
            Color::DarkAqua => (0x00, 0xaa, 0xaa),
            Color::DarkRed => (0xaa, 0x00, 0x00),
            Color::DarkPurple => (0xaa, 0x00, 0xaa),
            Color::Gold => (0xff, 0xaa, 0x00),
            Color::Gray => (0xaa, 0xaa, 0xaa),
            Color::DarkGray => (0x55, 0x55, 0x55),
            Color::Blue => (0x55, 0x55, 0xff),
            Color::Green => (0x55, 0xff, 0x55),
            Color::Aqua => (0x55, 0xff, 0xff),
            Color::Red => (0xff, 0x55, 0x55),
            Color::LightPurple => (0xff, 0x55, 0xff),
            Color::Yellow => (0xff, 0xff, 0x55),
            Color::White => (0xff, 0xff, 0xff),
        }
    }

    /// Single-character legacy formatting code (`0`-`9`, `a`-`f`).
    pub fn legacy_code(self) -> char {
        // ALL is ordered by code, so the index is the hex digit.
        let index = Self::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default();
        char::from_digit(index as u32, 16).unwrap_or('f')
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

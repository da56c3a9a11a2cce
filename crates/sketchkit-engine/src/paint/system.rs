use super::{Color, ColorMode};

/// Named platform palette (light appearance values).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SystemColor {
    Red,
    Blue,
    Pink,
    Teal,
    Green,
    Gray,
    Gray2,
    Gray3,
    Gray4,
    Gray5,
    Gray6,
    Orange,
    Yellow,
    Purple,
    Indigo,
}

impl SystemColor {
    pub const ALL: [SystemColor; 15] = [
        SystemColor::Red,
        SystemColor::Blue,
        SystemColor::Pink,
        SystemColor::Teal,
        SystemColor::Green,
        SystemColor::Gray,
        SystemColor::Gray2,
        SystemColor::Gray3,
        SystemColor::Gray4,
        SystemColor::Gray5,
        SystemColor::Gray6,
        SystemColor::Orange,
        SystemColor::Yellow,
        SystemColor::Purple,
        SystemColor::Indigo,
    ];

    /// 8-bit RGB components.
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            SystemColor::Red => [255, 59, 48],
            SystemColor::Blue => [0, 122, 255],
            SystemColor::Pink => [255, 45, 85],
            SystemColor::Teal => [90, 200, 250],
            SystemColor::Green => [52, 199, 89],
            SystemColor::Gray => [142, 142, 147],
            SystemColor::Gray2 => [174, 174, 178],
            SystemColor::Gray3 => [199, 199, 204],
            SystemColor::Gray4 => [209, 209, 214],
            SystemColor::Gray5 => [229, 229, 234],
            SystemColor::Gray6 => [242, 242, 247],
            SystemColor::Orange => [255, 149, 0],
            SystemColor::Yellow => [255, 204, 0],
            SystemColor::Purple => [175, 82, 222],
            SystemColor::Indigo => [88, 86, 214],
        }
    }
}

impl From<SystemColor> for Color {
    fn from(c: SystemColor) -> Color {
        let [r, g, b] = c.rgb();
        Color::new(f64::from(r), f64::from(g), f64::from(b), 255.0, ColorMode::Rgb)
    }
}

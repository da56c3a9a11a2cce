use std::fmt;

use super::Rgba;

/// Interpretation of the three primary components of a color.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ColorMode {
    /// red/green/blue in `0..=255`, alpha in `0..=255`.
    #[default]
    Rgb,
    /// hue in `0..=360`, saturation/brightness in `0..=100`, alpha in `0..=100`.
    Hsb,
}

impl ColorMode {
    /// Upper bound of the alpha channel in this mode.
    #[inline]
    pub const fn alpha_max(self) -> f64 {
        match self {
            ColorMode::Rgb => 255.0,
            ColorMode::Hsb => 100.0,
        }
    }
}

/// Sketch color with both RGB and HSB views populated at all times.
///
/// The components given at construction are clamped to the ranges of `mode`, and
/// the other space is derived from them once. Setters clamp and re-derive as well, so
/// the two views never disagree. Alpha is stored on the scale of `mode`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    hue: f64,
    saturation: f64,
    brightness: f64,
    alpha: f64,
    mode: ColorMode,
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Color::gray(0.0)
    }
}

impl Color {
    /// Builds a color from three components plus alpha interpreted under `mode`.
    pub fn new(v1: f64, v2: f64, v3: f64, alpha: f64, mode: ColorMode) -> Self {
        let mut c = Color {
            red: 0.0,
            green: 0.0,
            blue: 0.0,
            hue: 0.0,
            saturation: 0.0,
            brightness: 0.0,
            alpha,
            mode,
        };
        match mode {
            ColorMode::Rgb => {
                c.red = v1;
                c.green = v2;
                c.blue = v3;
                c.clamp();
                c.derive_hsb();
            }
            ColorMode::Hsb => {
                c.hue = v1;
                c.saturation = v2;
                c.brightness = v3;
                c.clamp();
                c.derive_rgb();
            }
        }
        c
    }

    #[inline]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 255.0, ColorMode::Rgb)
    }

    #[inline]
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(r, g, b, a, ColorMode::Rgb)
    }

    #[inline]
    pub fn hsb(h: f64, s: f64, b: f64) -> Self {
        Self::new(h, s, b, 100.0, ColorMode::Hsb)
    }

    #[inline]
    pub fn hsba(h: f64, s: f64, b: f64, a: f64) -> Self {
        Self::new(h, s, b, a, ColorMode::Hsb)
    }

    /// Gray level in RGB range, whatever the active color mode.
    #[inline]
    pub fn gray(v: f64) -> Self {
        Self::new(v, v, v, 255.0, ColorMode::Rgb)
    }

    /// Gray level plus alpha, both in RGB range.
    #[inline]
    pub fn gray_alpha(v: f64, a: f64) -> Self {
        Self::new(v, v, v, a, ColorMode::Rgb)
    }

    /// Fully transparent color in `mode`, as used by `no_fill`/`no_stroke`.
    #[inline]
    pub fn transparent(mode: ColorMode) -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, mode)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn red(&self) -> f64 {
        self.red
    }

    #[inline]
    pub fn green(&self) -> f64 {
        self.green
    }

    #[inline]
    pub fn blue(&self) -> f64 {
        self.blue
    }

    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    #[inline]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    #[inline]
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Alpha on the scale of [`Color::mode`].
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[inline]
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.alpha <= 0.0
    }

    // ── setters ───────────────────────────────────────────────────────────

    pub fn set_red(&mut self, v: f64) {
        self.red = v.clamp(0.0, 255.0);
        self.derive_hsb();
    }

    pub fn set_green(&mut self, v: f64) {
        self.green = v.clamp(0.0, 255.0);
        self.derive_hsb();
    }

    pub fn set_blue(&mut self, v: f64) {
        self.blue = v.clamp(0.0, 255.0);
        self.derive_hsb();
    }

    pub fn set_hue(&mut self, v: f64) {
        self.hue = v.clamp(0.0, 360.0);
        self.derive_rgb();
    }

    pub fn set_saturation(&mut self, v: f64) {
        self.saturation = v.clamp(0.0, 100.0);
        self.derive_rgb();
    }

    pub fn set_brightness(&mut self, v: f64) {
        self.brightness = v.clamp(0.0, 100.0);
        self.derive_rgb();
    }

    pub fn set_alpha(&mut self, v: f64) {
        self.alpha = v.clamp(0.0, self.mode.alpha_max());
    }

    // ── conversions ───────────────────────────────────────────────────────

    /// `[red, green, blue, alpha]`.
    #[inline]
    pub fn to_array_rgb(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// `[hue, saturation, brightness, alpha]`.
    #[inline]
    pub fn to_array_hsb(&self) -> [f64; 4] {
        [self.hue, self.saturation, self.brightness, self.alpha]
    }

    /// Normalized color for a drawing surface. Alpha is divided by the mode's range.
    pub fn to_rgba(&self) -> Rgba {
        Rgba::new(
            (self.red / 255.0) as f32,
            (self.green / 255.0) as f32,
            (self.blue / 255.0) as f32,
            (self.alpha / self.mode.alpha_max()) as f32,
        )
    }

    /// Clamps the components that define this color (those of its mode).
    fn clamp(&mut self) {
        match self.mode {
            ColorMode::Rgb => {
                self.red = self.red.clamp(0.0, 255.0);
                self.green = self.green.clamp(0.0, 255.0);
                self.blue = self.blue.clamp(0.0, 255.0);
            }
            ColorMode::Hsb => {
                self.hue = self.hue.clamp(0.0, 360.0);
                self.saturation = self.saturation.clamp(0.0, 100.0);
                self.brightness = self.brightness.clamp(0.0, 100.0);
            }
        }
        self.alpha = self.alpha.clamp(0.0, self.mode.alpha_max());
    }

    fn derive_hsb(&mut self) {
        let (r, g, b) = (self.red / 255.0, self.green / 255.0, self.blue / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        self.hue = hue;
        self.saturation = if max > 0.0 { delta / max * 100.0 } else { 0.0 };
        self.brightness = max * 100.0;
    }

    fn derive_rgb(&mut self) {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let s = self.saturation / 100.0;
        let v = self.brightness / 100.0;

        let c = v * s;
        let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        self.red = (r + m) * 255.0;
        self.green = (g + m) * 255.0;
        self.blue = (b + m) * 255.0;
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba: ({}, {}, {}, {}), hsba: ({}, {}, {}, {})",
            self.red,
            self.green,
            self.blue,
            self.alpha,
            self.hue,
            self.saturation,
            self.brightness,
            self.alpha,
        )
    }
}

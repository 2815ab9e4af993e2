//! Colors and brushes
//!
//! Host bridges hand colors over as numbers packed `0xAARRGGBB`, sometimes
//! as a signed 32-bit value and sometimes as a decimal string. The decoding
//! helpers here accept all of those shapes.

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Color from a packed `0xAARRGGBB` value
    pub fn from_argb(argb: u32) -> Self {
        let a = ((argb >> 24) & 0xFF) as f32 / 255.0;
        Self::from_hex(argb).with_alpha(a)
    }

    /// Decode a numeric color code
    ///
    /// Integral values in `i32::MIN..=u32::MAX` are accepted; negative values
    /// are the signed form of the same 32 bits.
    pub fn from_code(code: f64) -> Option<Self> {
        if !code.is_finite() || code.fract() != 0.0 {
            return None;
        }
        if code < i32::MIN as f64 || code > u32::MAX as f64 {
            return None;
        }
        let bits = if code < 0.0 {
            code as i32 as u32
        } else {
            code as u32
        };
        Some(Self::from_argb(bits))
    }

    /// Parse a textual color code
    ///
    /// Accepts decimal codes (`"4294901760"`, `"-65536"`), `0x`-prefixed
    /// `AARRGGBB` hex and `#RRGGBB` / `#AARRGGBB`.
    pub fn parse_code(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(hex) = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
        {
            return parse_hex_digits(hex).map(Self::from_argb);
        }
        if let Some(hex) = text.strip_prefix('#') {
            let value = parse_hex_digits(hex)?;
            return match hex.len() {
                6 => Some(Self::from_hex(value)),
                8 => Some(Self::from_argb(value)),
                _ => None,
            };
        }
        text.parse::<f64>().ok().and_then(Self::from_code)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Components quantized to 8 bits
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }
}

// `from_str_radix` tolerates a leading sign, which is not a color digit
fn parse_hex_digits(hex: &str) -> Option<u32> {
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Paint used for fills and strokes
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
}

impl Brush {
    /// Solid color of this brush
    pub fn color(&self) -> Color {
        match self {
            Brush::Solid(color) => *color,
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

use palette::{IntoColor, LinSrgb, Oklab, Srgb};

/// Color space a [`Color`]'s channels are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    /// Gamma-encoded sRGB.
    #[default]
    Srgb,
    /// Linear-light sRGB primaries.
    LinearSrgb,
}

/// An RGBA color with float channels in `0.0..=1.0`.
///
/// The color space travels with the channels so that operations which act
/// on raw channel values (such as inversion) can preserve it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
    pub space: ColorSpace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub const fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
            space: ColorSpace::Srgb,
        }
    }

    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create a color from linear-light sRGB channels.
    pub const fn linear(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
            space: ColorSpace::LinearSrgb,
        }
    }

    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Channel-wise comparison within `epsilon`. Color spaces must match.
    pub fn approx_eq(&self, other: &Color, epsilon: f32) -> bool {
        self.space == other.space
            && (self.red - other.red).abs() <= epsilon
            && (self.green - other.green).abs() <= epsilon
            && (self.blue - other.blue).abs() <= epsilon
            && (self.alpha - other.alpha).abs() <= epsilon
    }

    /// Convert to 8-bit gamma-encoded sRGB, ignoring alpha.
    pub fn to_rgb8(&self) -> Rgb {
        let srgb = self.to_srgb();
        let (r, g, b) = Srgb::new(
            srgb.red.clamp(0.0, 1.0),
            srgb.green.clamp(0.0, 1.0),
            srgb.blue.clamp(0.0, 1.0),
        )
        .into_format::<u8>()
        .into_components();
        Rgb::new(r, g, b)
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let Rgb { r, g, b } = self.to_rgb8();
        if self.alpha >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Interpolate between two colors in Oklab.
    ///
    /// Alpha is interpolated linearly. The result is expressed in `to`'s
    /// color space so a finished transition lands exactly on its target space.
    pub fn lerp(from: &Color, to: &Color, t: f32) -> Color {
        if t <= 0.0 {
            return *from;
        }
        if t >= 1.0 {
            return *to;
        }

        let a = from.to_oklab();
        let b = to.to_oklab();
        let mixed = Oklab::new(
            a.l + (b.l - a.l) * t,
            a.a + (b.a - a.a) * t,
            a.b + (b.b - a.b) * t,
        );
        let alpha = from.alpha + (to.alpha - from.alpha) * t;

        Color::from_oklab(mixed, alpha, to.space)
    }

    fn to_srgb(self) -> Srgb {
        match self.space {
            ColorSpace::Srgb => Srgb::new(self.red, self.green, self.blue),
            ColorSpace::LinearSrgb => {
                Srgb::from_linear(LinSrgb::new(self.red, self.green, self.blue))
            }
        }
    }

    fn to_oklab(self) -> Oklab {
        match self.space {
            ColorSpace::Srgb => Srgb::new(self.red, self.green, self.blue).into_color(),
            ColorSpace::LinearSrgb => LinSrgb::new(self.red, self.green, self.blue).into_color(),
        }
    }

    fn from_oklab(lab: Oklab, alpha: f32, space: ColorSpace) -> Color {
        let (red, green, blue) = match space {
            ColorSpace::Srgb => {
                let c: Srgb = lab.into_color();
                (c.red, c.green, c.blue)
            }
            ColorSpace::LinearSrgb => {
                let c: LinSrgb = lab.into_color();
                (c.red, c.green, c.blue)
            }
        };
        Color {
            red: red.clamp(0.0, 1.0),
            green: green.clamp(0.0, 1.0),
            blue: blue.clamp(0.0, 1.0),
            alpha,
            space,
        }
    }
}

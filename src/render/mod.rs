//! Device-space drawing primitives.
//!
//! These types are backend-agnostic. Layers record [`RenderCommand`]s into a
//! [`Graphics`] handle and render backends (such as the GPUI backend) consume
//! them through a [`PathSink`].

mod sink;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::ColorParseError;
use crate::geom::ScreenPoint;

pub use sink::{PathSink, replay};

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
///
/// Colors are built from packed `0xRRGGBB` integers (`From<u32>`) or parsed
/// from strings such as `"0xff0000"` or `"#ff0000"` (`FromStr`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "String")]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Unpack an opaque `0xRRGGBB` value. Bits above 24 are ignored.
    pub fn from_rgb_hex(rgb: u32) -> Self {
        Self::from_rgba_hex((rgb << 8) | 0xFF)
    }

    /// Unpack a `0xRRGGBBAA` value.
    pub fn from_rgba_hex(rgba: u32) -> Self {
        let channel = |shift: u32| ((rgba >> shift) & 0xFF) as f32 / 255.0;
        Self::new(channel(24), channel(16), channel(8), channel(0))
    }

    /// Pack into a `0xRRGGBBAA` value, rounding each channel.
    pub fn to_rgba_hex(self) -> u32 {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 24) | (channel(self.g) << 16) | (channel(self.b) << 8) | channel(self.a)
    }
}

impl From<u32> for Color {
    fn from(rgb: u32) -> Self {
        Self::from_rgb_hex(rgb)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .or_else(|| trimmed.strip_prefix('#'))
            .unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(s.to_string()));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::Digit(s.to_string()))?;
        match digits.len() {
            6 => Ok(Self::from_rgb_hex(value)),
            8 => Ok(Self::from_rgba_hex(value)),
            len => Err(ColorParseError::Length(len)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.to_rgba_hex())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Packed(u32),
    Text(String),
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match ColorRepr::deserialize(deserializer)? {
            ColorRepr::Packed(rgb) => Ok(Self::from_rgb_hex(rgb)),
            ColorRepr::Text(text) => text.parse().map_err(de::Error::custom),
        }
    }
}

/// Line stroke styling.
///
/// The width is expressed in device pixels. A zero width strokes nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 0.0,
        }
    }
}

/// A single device-space drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Set the stroke used by following path commands.
    LineStyle(LineStyle),
    /// Start a new sub-path.
    MoveTo(ScreenPoint),
    /// Extend the current sub-path.
    LineTo(ScreenPoint),
    /// Start filling shapes with a color.
    BeginFill(Color),
    /// Add a circle.
    Circle {
        /// Circle center.
        center: ScreenPoint,
        /// Radius in pixels.
        radius: f32,
    },
    /// Stop filling shapes.
    EndFill,
}

/// Drawable handle owned by a layer.
///
/// Commands accumulate in call order until [`Graphics::clear`]. Callers may
/// draw on a handle directly in device coordinates; the plot helpers map
/// user coordinates before recording.
#[derive(Debug, Default, Clone)]
pub struct Graphics {
    commands: Vec<RenderCommand>,
}

impl Graphics {
    /// Create an empty handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke style.
    pub fn line_style(&mut self, width: f32, color: Color) -> &mut Self {
        self.push(RenderCommand::LineStyle(LineStyle { color, width }))
    }

    /// Start a new sub-path at `point`.
    pub fn move_to(&mut self, point: ScreenPoint) -> &mut Self {
        self.push(RenderCommand::MoveTo(point))
    }

    /// Extend the current sub-path to `point`.
    pub fn line_to(&mut self, point: ScreenPoint) -> &mut Self {
        self.push(RenderCommand::LineTo(point))
    }

    /// Begin filling with `color`.
    pub fn begin_fill(&mut self, color: Color) -> &mut Self {
        self.push(RenderCommand::BeginFill(color))
    }

    /// Add a circle of `radius` pixels.
    pub fn draw_circle(&mut self, center: ScreenPoint, radius: f32) -> &mut Self {
        self.push(RenderCommand::Circle { center, radius })
    }

    /// End the current fill.
    pub fn end_fill(&mut self) -> &mut Self {
        self.push(RenderCommand::EndFill)
    }

    /// Erase every recorded command.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Access all recorded commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Check whether nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forward every recorded command to `sink`.
    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        replay(&self.commands, sink);
    }

    fn push(&mut self, command: RenderCommand) -> &mut Self {
        self.commands.push(command);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_hex_strings() {
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!("0xff0000".parse::<Color>(), Ok(red));
        assert_eq!("#FF0000".parse::<Color>(), Ok(red));
        assert_eq!("ff0000".parse::<Color>(), Ok(red));
        assert_eq!(Color::from(0xff0000), red);
    }

    #[test]
    fn eight_digits_carry_alpha() {
        let color: Color = "#00000080".parse().unwrap();
        assert!((color.a - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.to_rgba_hex(), 0x0000_0080);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!("0x".parse::<Color>(), Err(ColorParseError::Empty));
        assert_eq!("#fff".parse::<Color>(), Err(ColorParseError::Length(3)));
        assert!(matches!("0xgg0000".parse::<Color>(), Err(ColorParseError::Digit(_))));
        assert!(matches!("+ff0000".parse::<Color>(), Err(ColorParseError::Digit(_))));
    }

    #[test]
    fn serde_accepts_numbers_and_strings() {
        let from_number: Color = serde_json::from_str("16711680").unwrap();
        let from_text: Color = serde_json::from_str(r#""0xff0000""#).unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(serde_json::to_string(&from_text).unwrap(), r##""#ff0000ff""##);
    }

    #[test]
    fn graphics_records_in_call_order_and_clears() {
        let mut graphics = Graphics::new();
        graphics
            .line_style(2.0, Color::WHITE)
            .move_to(ScreenPoint::new(0.0, 0.0))
            .line_to(ScreenPoint::new(4.0, 4.0));
        assert_eq!(graphics.commands().len(), 3);
        assert_eq!(
            graphics.commands()[2],
            RenderCommand::LineTo(ScreenPoint::new(4.0, 4.0))
        );
        graphics.clear();
        assert!(graphics.is_empty());
    }
}

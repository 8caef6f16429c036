//! Core types for blockterm.
//!
//! Everything a block is configured with lives here: colors and text
//! attributes, padding, heading and body text, and the [`BlockSpec`] that
//! bundles them for [`BlockGraph::add_block`](crate::engine::BlockGraph::add_block).

use std::str::FromStr;

use crate::engine::{BlockId, LockId};
use crate::error::Error;

// =============================================================================
// Color
// =============================================================================

/// Foreground colors understood by the color spec format.
///
/// The first eight are the standard palette (SGR 30-37), the rest are the
/// bright variants (SGR 90-96).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Grey,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    DarkGrey,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
}

impl Color {
    /// SGR parameter selecting this color as foreground.
    pub const fn sgr(self) -> u8 {
        match self {
            Self::Black | Self::Grey => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::DarkGrey => 90,
            Self::LightRed => 91,
            Self::LightGreen => 92,
            Self::LightYellow => 93,
            Self::LightBlue => 94,
            Self::LightMagenta => 95,
            Self::LightCyan => 96,
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let color = match name {
            "black" => Self::Black,
            "grey" | "gray" => Self::Grey,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            "dark_grey" | "dark_gray" => Self::DarkGrey,
            "light_red" => Self::LightRed,
            "light_green" => Self::LightGreen,
            "light_yellow" => Self::LightYellow,
            "light_blue" => Self::LightBlue,
            "light_magenta" => Self::LightMagenta,
            "light_cyan" => Self::LightCyan,
            other => return Err(Error::UnknownColor(other.to_string())),
        };
        Ok(color)
    }
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

impl FromStr for Attr {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let attr = match name {
            "bold" => Self::BOLD,
            "dark" | "dim" => Self::DIM,
            "italic" => Self::ITALIC,
            "underline" => Self::UNDERLINE,
            "blink" => Self::BLINK,
            "reverse" => Self::INVERSE,
            "concealed" => Self::HIDDEN,
            "strike" => Self::STRIKETHROUGH,
            other => return Err(Error::UnknownAttribute(other.to_string())),
        };
        Ok(attr)
    }
}

// =============================================================================
// ColorSpec
// =============================================================================

/// How a piece of text gets colored.
///
/// Parsed from `"name#attr#attr"`, e.g. `"blue#bold"` or `"red#bold#underline"`.
/// `"none"` (or an empty string) disables colorization, attributes included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSpec {
    pub color: Option<Color>,
    pub attrs: Attr,
}

impl ColorSpec {
    /// No colorization at all.
    pub const NONE: Self = Self {
        color: None,
        attrs: Attr::NONE,
    };

    pub const fn new(color: Color, attrs: Attr) -> Self {
        Self {
            color: Some(color),
            attrs,
        }
    }

    #[inline]
    pub const fn is_none(&self) -> bool {
        self.color.is_none()
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        Self::new(color, Attr::NONE)
    }
}

impl FromStr for ColorSpec {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let mut parts = spec.split('#');
        let name = parts.next().unwrap_or_default();
        if name.is_empty() || name == "none" {
            return Ok(Self::NONE);
        }

        let color = name.parse::<Color>()?;
        let attrs = parts
            .filter(|part| !part.is_empty())
            .try_fold(Attr::NONE, |acc, part| Ok::<_, Error>(acc | part.parse::<Attr>()?))?;

        Ok(Self::new(color, attrs))
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Inner spacing of a block, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Padding {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Same order as CSS: top, right, bottom, left.
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[inline]
    pub const fn horizontal(&self) -> usize {
        self.left + self.right
    }
}

/// Subsequent-line indent of the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Fixed(usize),
    /// Indent by the heading width, modulo the block width.
    Auto,
}

impl Default for Indent {
    fn default() -> Self {
        Self::Fixed(0)
    }
}

impl From<usize> for Indent {
    fn from(value: usize) -> Self {
        Self::Fixed(value)
    }
}

// =============================================================================
// Heading / Body
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Heading {
    pub text: String,
    pub color: ColorSpec,
    /// Start the body on a fresh line instead of continuing the last
    /// heading line.
    pub break_after: bool,
}

impl Heading {
    pub fn new(text: impl Into<String>, color: ColorSpec, break_after: bool) -> Self {
        Self {
            text: text.into(),
            color,
            break_after,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Body {
    pub text: String,
    pub color: ColorSpec,
    pub indent: Indent,
}

impl Body {
    pub fn new(text: impl Into<String>, color: ColorSpec, indent: Indent) -> Self {
        Self {
            text: text.into(),
            color,
            indent,
        }
    }
}

// =============================================================================
// BlockSpec
// =============================================================================

/// Everything needed to add a block to a [`BlockGraph`](crate::engine::BlockGraph).
///
/// The link fields mirror what can be attached later through the mutation
/// API; leaving them at their defaults gives a free-standing block whose
/// print lock starts closed and has no master.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpec {
    pub width: usize,
    pub padding: Padding,
    pub heading: Heading,
    pub body: Body,
    pub right: Option<BlockId>,
    pub bottom: Option<BlockId>,
    pub initially_open: bool,
    pub print_master: Option<LockId>,
    pub vanish_master: Option<LockId>,
}

impl BlockSpec {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn heading(mut self, heading: Heading) -> Self {
        self.heading = heading;
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn right(mut self, right: BlockId) -> Self {
        self.right = Some(right);
        self
    }

    pub fn bottom(mut self, bottom: BlockId) -> Self {
        self.bottom = Some(bottom);
        self
    }

    pub fn initially_open(mut self, open: bool) -> Self {
        self.initially_open = open;
        self
    }

    /// Register the block's print lock under `master` on creation.
    pub fn print_master(mut self, master: LockId) -> Self {
        self.print_master = Some(master);
        self
    }

    /// Give the block a vanish lock registered under `master`.
    pub fn vanish_master(mut self, master: LockId) -> Self {
        self.vanish_master = Some(master);
        self
    }
}

impl Default for BlockSpec {
    fn default() -> Self {
        Self {
            width: 90,
            padding: Padding::ZERO,
            heading: Heading::default(),
            body: Body::default(),
            right: None,
            bottom: None,
            initially_open: false,
            print_master: None,
            vanish_master: None,
        }
    }
}

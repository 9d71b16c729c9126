//! The Space Kit color palette.
//!
//! Colors are organized by [`ColorFamily`] and [`Shade`]. Every family is
//! also exposed as a module of constants so defaults can be written the way
//! designers name them:
//!
//! ```rust
//! use spacekit::palette::{self, ColorFamily, Shade};
//!
//! assert_eq!(palette::silver::LIGHT.as_str(), "#f4f6f8");
//! assert_eq!(
//!     palette::lookup(ColorFamily::Silver, Shade::Light),
//!     Some(palette::silver::LIGHT),
//! );
//! ```
//!
//! Not every family carries every shade; [`lookup`] returns `None` for the
//! gaps.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use cssparser::{ParseError, Parser, ParserInput, Token};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Errors from parsing a color value or a palette token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// A `family.shade` token named a shade the family doesn't carry.
    #[error("color family '{family}' has no shade '{shade}'")]
    UnknownShade { family: ColorFamily, shade: String },
    /// An empty string was given where a color was expected.
    #[error("empty color value")]
    Empty,
    /// A literal that is not exactly one CSS color value.
    #[error("'{0}' is not a single CSS color value")]
    InvalidLiteral(String),
}

/// An opaque CSS color value.
///
/// The resolver never computes colors; it only moves these values around.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(Cow<'static, str>);

impl Color {
    /// Fully transparent.
    pub const TRANSPARENT: Color = Color::from_static("transparent");

    /// Wraps a static color literal without validation.
    pub const fn from_static(value: &'static str) -> Self {
        Color(Cow::Borrowed(value))
    }

    /// Parses either a palette token (`"indigo.dark"`) or a literal CSS color.
    ///
    /// A token is recognized when the part before the first `.` names a
    /// [`ColorFamily`]. Anything else must be a single CSS component value
    /// (`"#fff"`, `"transparent"`, `"rgba(0, 0, 0, 0.5)"`) and is kept
    /// verbatim; values that would end a declaration or a rule are rejected.
    pub fn parse(value: &str) -> Result<Self, PaletteError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(PaletteError::Empty);
        }

        if let Some((family, shade)) = value.split_once('.') {
            if let Ok(family) = family.parse::<ColorFamily>() {
                return shade
                    .parse::<Shade>()
                    .ok()
                    .and_then(|shade| lookup(family, shade))
                    .ok_or_else(|| PaletteError::UnknownShade {
                        family,
                        shade: shade.to_string(),
                    });
            }
        }

        if !is_single_value(value) {
            return Err(PaletteError::InvalidLiteral(value.to_string()));
        }
        Ok(Color(Cow::Owned(value.to_string())))
    }

    /// Returns the CSS text of this color.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0.into_owned()
    }
}

fn is_single_value(value: &str) -> bool {
    if value.contains(|c| matches!(c, ';' | '{' | '}' | '<' | '>' | '!' | '\n' | '\r')) {
        return false;
    }
    // The tokenizer closes unbalanced blocks at end of input.
    if value.matches('(').count() != value.matches(')').count() {
        return false;
    }
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    single_component(&mut parser).is_ok()
}

fn single_component<'i>(parser: &mut Parser<'i, '_>) -> Result<(), ParseError<'i, ()>> {
    match parser.next()?.clone() {
        Token::Ident(_) | Token::Hash(_) | Token::IDHash(_) => {}
        Token::Function(_) => parser.parse_nested_block(|block| function_arguments(block))?,
        token => return Err(parser.new_unexpected_token_error(token)),
    }
    parser.expect_exhausted()?;
    Ok(())
}

fn function_arguments<'i>(parser: &mut Parser<'i, '_>) -> Result<(), ParseError<'i, ()>> {
    while !parser.is_exhausted() {
        match parser.next()?.clone() {
            Token::Number { .. }
            | Token::Percentage { .. }
            | Token::Dimension { .. }
            | Token::Ident(_)
            | Token::Comma
            | Token::Delim('/') => {}
            Token::Function(_) => parser.parse_nested_block(|block| function_arguments(block))?,
            token => return Err(parser.new_unexpected_token_error(token)),
        }
    }
    Ok(())
}

macro_rules! names {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All variants, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The lowercase name used in palette tokens.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(()),
                }
            }
        }
    };
}

names!(
    /// A named hue in the palette.
    ColorFamily {
        Black => "black",
        Grey => "grey",
        Silver => "silver",
        White => "white",
        Blue => "blue",
        Indigo => "indigo",
        Green => "green",
        Red => "red",
        Orange => "orange",
        Yellow => "yellow",
        Teal => "teal",
        Pink => "pink",
        Purple => "purple",
    }
);

names!(
    /// Lightness step within a family, darkest first.
    Shade {
        Darkest => "darkest",
        Darker => "darker",
        Dark => "dark",
        Base => "base",
        Light => "light",
        Lighter => "lighter",
        Lightest => "lightest",
    }
);

macro_rules! families {
    ($($module:ident : $family:ident { $($constant:ident / $shade:ident = $hex:literal),+ $(,)? })+) => {
        $(
            #[doc = concat!("Shades of the `", stringify!($module), "` family.")]
            pub mod $module {
                use super::Color;
                $(pub const $constant: Color = Color::from_static($hex);)+
            }
        )+

        static PALETTE: Lazy<HashMap<(ColorFamily, Shade), Color>> = Lazy::new(|| {
            let mut table = HashMap::new();
            $($(table.insert((ColorFamily::$family, Shade::$shade), $module::$constant);)+)+
            table
        });
    };
}

families! {
    black: Black {
        DARKER / Darker = "#0a0c0f",
        BASE / Base = "#12151a",
        LIGHT / Light = "#1e2229",
    }
    grey: Grey {
        DARKER / Darker = "#2f353f",
        DARK / Dark = "#424855",
        BASE / Base = "#5a6270",
        LIGHT / Light = "#777f8e",
        LIGHTER / Lighter = "#959da9",
    }
    silver: Silver {
        DARKER / Darker = "#cad0d8",
        DARK / Dark = "#dee2e7",
        BASE / Base = "#ebeef0",
        LIGHT / Light = "#f4f6f8",
        LIGHTER / Lighter = "#fcfdff",
    }
    white: White {
        BASE / Base = "#ffffff",
    }
    blue: Blue {
        DARKEST / Darkest = "#0f274a",
        DARKER / Darker = "#0e3977",
        DARK / Dark = "#1656a8",
        BASE / Base = "#2075d6",
        LIGHT / Light = "#74b0f4",
        LIGHTER / Lighter = "#bbdbff",
        LIGHTEST / Lightest = "#f0f7ff",
    }
    indigo: Indigo {
        DARKEST / Darkest = "#1b1551",
        DARKER / Darker = "#311c87",
        DARK / Dark = "#3f20ba",
        BASE / Base = "#7156d9",
        LIGHT / Light = "#9c8ae4",
        LIGHTER / Lighter = "#d9cfff",
        LIGHTEST / Lightest = "#f2f0ff",
    }
    green: Green {
        DARKEST / Darkest = "#0a3f2d",
        DARKER / Darker = "#0e5a42",
        DARK / Dark = "#1c8448",
        BASE / Base = "#36ad8a",
        LIGHT / Light = "#7ed3b1",
        LIGHTER / Lighter = "#bee7d6",
        LIGHTEST / Lightest = "#e9f7f1",
    }
    red: Red {
        DARKER / Darker = "#6d1a1a",
        DARK / Dark = "#9c2323",
        BASE / Base = "#d13b3b",
        LIGHT / Light = "#f25c54",
        LIGHTER / Lighter = "#ffc4c2",
        LIGHTEST / Lightest = "#fff0f0",
    }
    orange: Orange {
        DARK / Dark = "#b4530a",
        BASE / Base = "#f18f01",
        LIGHT / Light = "#ffb84d",
    }
    yellow: Yellow {
        DARK / Dark = "#a88b00",
        BASE / Base = "#f4d03f",
        LIGHT / Light = "#ffe58a",
    }
    teal: Teal {
        DARK / Dark = "#0f6f73",
        BASE / Base = "#17a2a6",
        LIGHT / Light = "#6fd6d9",
    }
    pink: Pink {
        DARK / Dark = "#a3215f",
        BASE / Base = "#e04391",
        LIGHT / Light = "#f590c2",
    }
    purple: Purple {
        DARK / Dark = "#5b2a86",
        BASE / Base = "#8a4fc4",
        LIGHT / Light = "#b98ee6",
    }
}

/// Looks up the color for a family and shade.
pub fn lookup(family: ColorFamily, shade: Shade) -> Option<Color> {
    PALETTE.get(&(family, shade)).cloned()
}

//! Deserializer for the Color type.

use std::fmt;
use std::str::FromStr;

use csscolorparser::{Color as CssColor, ParseColorError as CssColorParseError};
use serde::de::{self, Deserialize, Visitor};
use thiserror::Error;

use super::super::Color;


const FIELDS: &[&str] = &["r", "g", "b"];
const EXPECTING_MSG: &str = "hex color string or array/map of RGB values";


impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: de::Deserializer<'de>
    {
        deserializer.deserialize_any(ColorVisitor)
    }
}

struct ColorVisitor;
impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", EXPECTING_MSG)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let color = Color::from_str(v).map_err(|e| {
            warn!("Failed to parse color `{}`: {}", v, e);
            E::custom(e)
        })?;
        Ok(color)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where A: de::SeqAccess<'de>
    {
        // Preemptively check for length.
        if let Some(size) = seq.size_hint() {
            if size != FIELDS.len() {
                return Err(de::Error::invalid_length(size, &"3"));
            }
        }

        let mut channels = Vec::with_capacity(FIELDS.len());
        while let Some(elem) = seq.next_element::<u8>()? {
            channels.push(elem);
            if channels.len() > FIELDS.len() {
                return Err(de::Error::invalid_length(channels.len(), &"3"));
            }
        }
        match channels[..] {
            [r, g, b] => Ok(Color(r, g, b)),
            _ => Err(de::Error::invalid_length(channels.len(), &"3")),
        }
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where A: de::MapAccess<'de>
    {
        let (mut r, mut g, mut b) = (None, None, None);
        while let Some(key) = map.next_key::<String>()? {
            let key = key.trim().to_lowercase();
            let (name, channel) = match key.as_str() {
                "r" | "red" => ("r", &mut r),
                "g" | "green" => ("g", &mut g),
                "b" | "blue" => ("b", &mut b),
                key => return Err(de::Error::unknown_field(key, FIELDS)),
            };
            if channel.is_some() {
                return Err(de::Error::duplicate_field(name));
            }
            *channel = Some(map.next_value::<u8>()?);
        }

        let r = r.ok_or_else(|| de::Error::missing_field("r"))?;
        let g = g.ok_or_else(|| de::Error::missing_field("g"))?;
        let b = b.ok_or_else(|| de::Error::missing_field("b"))?;
        Ok(Color(r, g, b))
    }
}


impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse a hex color, like the ones produced by HTML color pickers.
    ///
    /// Besides the CSS `#rrggbb` and `#rgb`, the `0x` and `$` prefixes
    /// are accepted for the full 24-bit form.
    fn from_str(v: &str) -> Result<Self, Self::Err> {
        // Replace all other possible hex prefixes with the standard CSS one.
        let mut s = v.trim().to_lowercase();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        for &prefix in ["#", "0x", "$"].iter() {
            if let Some(digits) = s.strip_prefix(prefix) {
                // If a prefix other than the standard CSS one is used,
                // the color has to be a full 24-bit hex number.
                if prefix != "#" && digits.len() != 6 {
                    return Err(ColorParseError::Prefix(prefix));
                }
                s = digits.to_owned();
                break;
            }
        }
        // Only hex notation is accepted, so the CSS prefix is always (re)added.
        let digit_count = s.len();
        let css_color: CssColor = format!("#{}", s).parse()?;

        // #rgba and #rrggbb[aa] forms carry an alpha channel.
        if css_color.a != 1.0 || digit_count == 4 || digit_count == 8 {
            return Err(ColorParseError::Alpha(css_color.a));
        }

        let [r, g, b, _] = css_color.to_rgba8();
        Ok(Color(r, g, b))
    }
}


/// Error that may occur while parsing a `Color`.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ColorParseError {
    /// Empty color string.
    #[error("empty color")]
    Empty,
    /// Non-CSS hex prefix used with something else than 6 hex digits.
    #[error("`{0}` prefix requires a 24-bit hex color")]
    Prefix(&'static str),
    /// Malformed hex color.
    #[error("invalid color: {0}")]
    Css(#[from] CssColorParseError),
    /// Color with an alpha channel.
    #[error("color transparency is not supported (alpha = {0})")]
    Alpha(f32),
}

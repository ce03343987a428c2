//! Deserializer for the FontChoice type.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Unexpected, Visitor};
use thiserror::Error;

use super::super::FontChoice;


const VARIANTS: &[&str] = &["Impact", "Arial", "Comic Sans"];


impl<'de> Deserialize<'de> for FontChoice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: de::Deserializer<'de>
    {
        deserializer.deserialize_str(FontChoiceVisitor)
    }
}

struct FontChoiceVisitor;
impl<'de> Visitor<'de> for FontChoiceVisitor {
    type Value = FontChoice;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "one of: {}", VARIANTS.join(", "))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        FontChoice::from_str(v).map_err(|_| {
            warn!("Unknown font `{}`", v);
            E::invalid_value(Unexpected::Str(v), &self)
        })
    }
}


impl FromStr for FontChoice {
    type Err = FontChoiceParseError;

    /// Parse the font name, ignoring case, whitespace, underscores, and dashes.
    fn from_str(v: &str) -> Result<Self, Self::Err> {
        let key: String = v.chars()
            .filter(|c| !(c.is_whitespace() || *c == '_' || *c == '-'))
            .flat_map(char::to_lowercase)
            .collect();
        FontChoice::all().iter().cloned()
            .find(|f| {
                let name: String = f.name().split_whitespace().collect();
                name.to_lowercase() == key || f.resource_name() == key
            })
            .ok_or_else(|| FontChoiceParseError(v.to_owned()))
    }
}


/// Error for when a font name doesn't match any of the available fonts.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown font `{0}` (expected one of: Impact, Arial, Comic Sans)")]
pub struct FontChoiceParseError(pub String);

//! Deserializer for the Meme type.

use std::fmt;

use serde::de::{self, Deserialize, Visitor};

use super::super::{Color, FontChoice, Meme, Side, Style};


/// Publicly mentioned fields of Meme.
const FIELDS: &[&str] = &["top", "bottom", "top_text", "bottom_text"];

const EXPECTING_MSG: &str = "representation of a meme";


impl<'de> Deserialize<'de> for Meme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: de::Deserializer<'de>
    {
        deserializer.deserialize_map(MemeVisitor)
    }
}

struct MemeVisitor;
impl<'de> Visitor<'de> for MemeVisitor {
    type Value = Meme;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", EXPECTING_MSG)
    }

    fn visit_map<V>(self, mut map: V) -> Result<Self::Value, V::Error>
        where V: de::MapAccess<'de>
    {
        let mut top: Option<PartialStyle> = None;
        let mut bottom: Option<PartialStyle> = None;
        let mut top_text: Option<String> = None;
        let mut bottom_text: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            let key = key.trim().to_lowercase();
            match key.as_str() {
                "top" | "bottom" => {
                    let slot = if key == "top" { &mut top } else { &mut bottom };
                    if slot.is_some() {
                        return Err(de::Error::duplicate_field(static_field(&key)));
                    }
                    let caption: CaptionRepr = map.next_value()?;
                    trace!("Meme::{} = {:?}", key, caption);
                    *slot = Some(caption.into());
                }
                // Simplified way of defining just the caption texts.
                "top_text" | "bottom_text" => {
                    let slot = if key == "top_text" { &mut top_text } else { &mut bottom_text };
                    if slot.is_some() {
                        return Err(de::Error::duplicate_field(static_field(&key)));
                    }
                    let text: String = map.next_value()?;
                    trace!("Meme::{} = {:?}", key, text);
                    *slot = Some(text);
                }
                key => return Err(de::Error::unknown_field(key, FIELDS)),
            }
        }

        let top = merge_text::<V::Error>(Side::Top, top, top_text)?;
        let bottom = merge_text::<V::Error>(Side::Bottom, bottom, bottom_text)?;
        Ok(Meme::new(top.complete(Style::top()), bottom.complete(Style::bottom())))
    }
}

fn static_field(key: &str) -> &'static str {
    FIELDS.iter().cloned().find(|&f| f == key).unwrap_or("?")
}

/// Combine the caption given in full with the shorthand `<side>_text` field.
fn merge_text<E: de::Error>(side: Side,
                            caption: Option<PartialStyle>,
                            text: Option<String>) -> Result<PartialStyle, E> {
    let mut caption = caption.unwrap_or_default();
    if let Some(text) = text {
        if caption.text.is_some() {
            return Err(E::custom(format_args!(
                "{} caption text given twice (`{}.text` and `{}_text`)", side, side, side)));
        }
        caption.text = Some(text);
    }
    Ok(caption)
}


/// Caption representation: either the full style or just the text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CaptionRepr {
    Text(String),
    Style(PartialStyle),
}

impl From<CaptionRepr> for PartialStyle {
    fn from(input: CaptionRepr) -> Self {
        match input {
            CaptionRepr::Text(text) => PartialStyle{text: Some(text), ..Default::default()},
            CaptionRepr::Style(style) => style,
        }
    }
}

/// Style where any of the fields may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialStyle {
    text: Option<String>,
    #[serde(alias = "size")]
    font_size: Option<u32>,
    color: Option<Color>,
    font: Option<FontChoice>,
    #[serde(alias = "x")]
    x_offset: Option<i32>,
    #[serde(alias = "y")]
    y_offset: Option<i32>,
}

impl PartialStyle {
    /// Fill the missing fields from given base style.
    fn complete(self, base: Style) -> Style {
        Style{
            text: self.text.unwrap_or(base.text),
            font_size: self.font_size.unwrap_or(base.font_size),
            color: self.color.unwrap_or(base.color),
            font: self.font.unwrap_or(base.font),
            x_offset: self.x_offset.unwrap_or(base.x_offset),
            y_offset: self.y_offset.unwrap_or(base.y_offset),
        }
    }
}

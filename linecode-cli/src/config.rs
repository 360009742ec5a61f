use std::{
    borrow::Cow,
    path::Path,
};

use linecode::Scheme;
use palette::Srgb;
use ratatui::style::Color;
use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

use crate::Error;

const DEFAULT_REDRAW_INTERVAL: u64 = 100;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scheme used when none is given on the command line.
    pub default_scheme: Scheme,

    /// Reject input characters other than `0` and `1`.
    pub strict: bool,

    /// Redraw interval of the viewer in milliseconds.
    pub redraw_interval: u64,

    pub style: Style,
}

impl Config {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        tracing::debug!(path = %path.as_ref().display(), "Loading config from file");
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        tracing::debug!(path = %path.as_ref().display(), "Writing config to file");
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_scheme: Scheme::default(),
            strict: false,
            redraw_interval: DEFAULT_REDRAW_INTERVAL,
            style: Style::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    #[serde(serialize_with = "serialize_color", deserialize_with = "deserialize_color")]
    pub line_color: Srgb<u8>,
}

impl Style {
    pub fn line_color(&self) -> Color {
        Color::from(self.line_color)
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_color: Srgb::new(0x00, 0x00, 0xff),
        }
    }
}

fn serialize_color<S>(color: &Srgb<u8>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!(
        "#{:02x}{:02x}{:02x}",
        color.red, color.green, color.blue
    ))
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Srgb<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Cow<'de, str> = Deserialize::deserialize(deserializer)?;
    parse_color(&s).map_err(serde::de::Error::custom)
}

fn parse_color(s: &str) -> Result<Srgb<u8>, String> {
    let Some(hex) = s.strip_prefix('#')
    else {
        return Err("Expected color to start with '#'".to_owned());
    };
    if hex.len() != 6 || !hex.is_ascii() {
        return Err("Expected color to be 7 characters long".to_owned());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
    Ok(Srgb::new(channel(0)?, channel(2)?, channel(4)?))
}

use once_cell::sync::Lazy;
use regex::Regex;
use std::num::ParseFloatError;
use std::str::FromStr;

static PARSER: Lazy<Regex> = Lazy::new(|| {
    regex::RegexBuilder::new(r"([0-9.]+)\s*(GB|MB|KB)")
        .case_insensitive(true)
        .build()
        .unwrap()
});
// leading float, `1.2.3` reads as `1.2`
static NUMBER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]*(?:\.[0-9]*)?").unwrap());

const KIBI: f64 = 1024.0;

#[derive(Debug, Clone)]
pub enum ParseSizeError {
    InvalidFormat,
    InvalidUnit(String),
    InvalidNumber(ParseFloatError),
}

/// A human readable size as displayed by index pages, using binary multiples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Size {
    Kilo(f64),
    Mega(f64),
    Giga(f64),
}

impl Size {
    pub fn as_bytes(&self) -> u64 {
        let value = match self {
            Self::Kilo(inner) => inner * KIBI,
            Self::Mega(inner) => inner * KIBI * KIBI,
            Self::Giga(inner) => inner * KIBI * KIBI * KIBI,
        };
        value.round() as u64
    }
}

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let found = PARSER
            .captures(input)
            .ok_or(ParseSizeError::InvalidFormat)?;
        let number = found.get(1).ok_or(ParseSizeError::InvalidFormat)?.as_str();
        let value = NUMBER_PREFIX
            .find(number)
            .map_or("", |m| m.as_str())
            .parse::<f64>()
            .map_err(ParseSizeError::InvalidNumber)?;
        let unit = found.get(2).ok_or(ParseSizeError::InvalidFormat)?.as_str();
        match unit.to_ascii_uppercase().as_str() {
            "KB" => Ok(Self::Kilo(value)),
            "MB" => Ok(Self::Mega(value)),
            "GB" => Ok(Self::Giga(value)),
            _ => Err(ParseSizeError::InvalidUnit(unit.to_owned())),
        }
    }
}

/// Converts a displayed size into bytes, `0` when it cannot be understood.
pub fn parse_bytes(input: &str) -> u64 {
    input
        .parse::<Size>()
        .map(|size| size.as_bytes())
        .unwrap_or(0)
}

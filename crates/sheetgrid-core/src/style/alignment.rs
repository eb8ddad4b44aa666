//! Text alignment types

use crate::cell::looks_numeric;
use std::fmt;
use std::str::FromStr;

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

impl HorizontalAlignment {
    /// Alignment a cell gets when it has no explicit override
    ///
    /// Numeric-looking text is right-aligned, everything else left-aligned.
    pub fn infer(value: &str) -> Self {
        if looks_numeric(value) {
            HorizontalAlignment::Right
        } else {
            HorizontalAlignment::Left
        }
    }

    /// Lowercase name (`"left"`, `"center"`, `"right"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
        }
    }
}

impl fmt::Display for HorizontalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HorizontalAlignment {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(HorizontalAlignment::Left),
            "center" => Ok(HorizontalAlignment::Center),
            "right" => Ok(HorizontalAlignment::Right),
            other => Err(crate::Error::other(format!("unknown alignment '{}'", other))),
        }
    }
}

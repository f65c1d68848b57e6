//! Transform family classification.

use serde::Serialize;

/// Family of an *aces-dev* CTL transform, derived from the directory the
/// transform sits under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformFamily {
    /// Colorspace conversion transforms (`csc`).
    Csc,
    /// Input device transforms (`idt`).
    Input,
    /// Look modification transforms (`lmt`).
    Look,
    /// Output device transforms (`odt`).
    Output,
    /// The reference rendering transform (`rrt`).
    Rrt,
    /// Library and utility transforms (`lib`, `utilities`).
    Utility,
}

impl TransformFamily {
    /// Parse a family from a directory name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csc" | "acescsc" => Some(Self::Csc),
            "idt" | "input" | "input_transform" => Some(Self::Input),
            "lmt" | "look" => Some(Self::Look),
            "odt" | "output" | "output_transform" => Some(Self::Output),
            "rrt" => Some(Self::Rrt),
            "lib" | "utility" | "utilities" => Some(Self::Utility),
            _ => None,
        }
    }

    /// Canonical directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csc => "csc",
            Self::Input => "input",
            Self::Look => "look",
            Self::Output => "output",
            Self::Rrt => "rrt",
            Self::Utility => "utility",
        }
    }
}

impl std::fmt::Display for TransformFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Sequence in which the three elemental rotations are composed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum RotationOrder {
    #[default]
    XYZ,
    YZX,
    ZXY,
    XZY,
    YXZ,
    ZYX,
}

impl RotationOrder {
    /// Every supported order.
    pub const ALL: [RotationOrder; 6] = [
        RotationOrder::XYZ,
        RotationOrder::YZX,
        RotationOrder::ZXY,
        RotationOrder::XZY,
        RotationOrder::YXZ,
        RotationOrder::ZYX,
    ];

    /// Returns the canonical upper-case name, e.g. `"XYZ"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RotationOrder::XYZ => "XYZ",
            RotationOrder::YZX => "YZX",
            RotationOrder::ZXY => "ZXY",
            RotationOrder::XZY => "XZY",
            RotationOrder::YXZ => "YXZ",
            RotationOrder::ZYX => "ZYX",
        }
    }
}

impl fmt::Display for RotationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotationOrder {
    type Err = ParseError;

    /// Parses an order name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotationOrder::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::RotationOrder(s.to_owned()))
    }
}

// SPDX-FileCopyrightText: 2026 Cardwall contributors
// SPDX-License-Identifier: MIT

use std::borrow::Cow;
use std::fmt;

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A card's importance level, serialized as the integer `0..=4`.
///
/// The level fixes the card's footprint on the 4-column grid. Level 0 is
/// engine-internal (the full-width site-info card); article payloads carry
/// levels 1–4. Any other integer is rejected at the model boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Importance {
    /// 4 columns × 2 rows.
    Banner,
    /// 2 columns × 2 rows.
    Feature,
    /// 2 columns × 1 row.
    Wide,
    /// 1 column × 2 rows.
    Tall,
    /// 1 column × 1 row. The default for payloads that omit the field.
    #[default]
    Mini,
}

impl Importance {
    pub fn level(self) -> u8 {
        match self {
            Self::Banner => 0,
            Self::Feature => 1,
            Self::Wide => 2,
            Self::Tall => 3,
            Self::Mini => 4,
        }
    }

    pub fn footprint(self) -> Footprint {
        match self {
            Self::Banner => Footprint::new(4, 2),
            Self::Feature => Footprint::new(2, 2),
            Self::Wide => Footprint::new(2, 1),
            Self::Tall => Footprint::new(1, 2),
            Self::Mini => Footprint::new(1, 1),
        }
    }
}

impl TryFrom<u8> for Importance {
    type Error = ImportanceError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Self::Banner),
            1 => Ok(Self::Feature),
            2 => Ok(Self::Wide),
            3 => Ok(Self::Tall),
            4 => Ok(Self::Mini),
            other => Err(ImportanceError::OutOfRange { level: other }),
        }
    }
}

impl From<Importance> for u8 {
    fn from(importance: Importance) -> Self {
        importance.level()
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

impl Serialize for Importance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.level())
    }
}

impl<'de> Deserialize<'de> for Importance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let level = u8::deserialize(deserializer)?;
        Self::try_from(level).map_err(D::Error::custom)
    }
}

impl JsonSchema for Importance {
    fn schema_name() -> Cow<'static, str> {
        "Importance".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "integer",
            "minimum": 0,
            "maximum": 4,
        })
    }
}

/// A card's `(colSpan, rowSpan)` pair on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Footprint {
    col_span: u32,
    row_span: u32,
}

impl Footprint {
    pub fn new(col_span: u32, row_span: u32) -> Self {
        Self { col_span, row_span }
    }

    pub fn col_span(self) -> u32 {
        self.col_span
    }

    pub fn row_span(self) -> u32 {
        self.row_span
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportanceError {
    OutOfRange { level: u8 },
}

impl fmt::Display for ImportanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { level } => {
                write!(f, "importance level {level} is outside the supported range 0..=4")
            }
        }
    }
}

impl std::error::Error for ImportanceError {}

#[cfg(test)]
mod tests {
    use super::{Footprint, Importance, ImportanceError};

    #[test]
    fn levels_map_to_the_fixed_footprint_table() {
        let expected = [
            (Importance::Banner, 0, Footprint::new(4, 2)),
            (Importance::Feature, 1, Footprint::new(2, 2)),
            (Importance::Wide, 2, Footprint::new(2, 1)),
            (Importance::Tall, 3, Footprint::new(1, 2)),
            (Importance::Mini, 4, Footprint::new(1, 1)),
        ];
        for (importance, level, footprint) in expected {
            assert_eq!(importance.level(), level);
            assert_eq!(importance.footprint(), footprint);
            assert_eq!(Importance::try_from(level), Ok(importance));
        }
    }

    #[test]
    fn out_of_range_levels_are_rejected() {
        assert_eq!(Importance::try_from(5), Err(ImportanceError::OutOfRange { level: 5 }));
        assert_eq!(Importance::try_from(255), Err(ImportanceError::OutOfRange { level: 255 }));
    }

    #[test]
    fn default_importance_is_mini() {
        assert_eq!(Importance::default(), Importance::Mini);
    }

    #[test]
    fn serializes_as_a_bare_integer() {
        let json = serde_json::to_string(&Importance::Tall).expect("serialize");
        assert_eq!(json, "3");

        let parsed: Importance = serde_json::from_str("1").expect("deserialize");
        assert_eq!(parsed, Importance::Feature);
    }

    #[test]
    fn deserialization_fails_fast_on_invalid_levels() {
        let err = serde_json::from_str::<Importance>("7").expect_err("expected rejection");
        assert!(err.to_string().contains("outside the supported range"));
    }
}

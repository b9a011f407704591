use std::fmt::{Display, Formatter};
use std::ops::Index;

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::PredictionError;

/// Columns of the classifier input, in training order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum FeatureColumn {
    #[strum(serialize = "footfall")]
    #[serde(rename = "footfall")]
    Footfall,
    #[strum(serialize = "tempMode")]
    #[serde(rename = "tempMode")]
    TempMode,
    #[strum(serialize = "AQ")]
    #[serde(rename = "AQ")]
    Aq,
    #[strum(serialize = "USS")]
    #[serde(rename = "USS")]
    Uss,
    #[strum(serialize = "CS")]
    #[serde(rename = "CS")]
    Cs,
    #[strum(serialize = "VOC")]
    #[serde(rename = "VOC")]
    Voc,
    #[strum(serialize = "RP")]
    #[serde(rename = "RP")]
    Rp,
    #[strum(serialize = "IP")]
    #[serde(rename = "IP")]
    Ip,
    #[strum(serialize = "Temperature")]
    #[serde(rename = "Temperature")]
    Temperature,
    #[strum(serialize = "temp_diff")]
    #[serde(rename = "temp_diff")]
    TempDiff,
    #[strum(serialize = "RP_Avg")]
    #[serde(rename = "RP_Avg")]
    RpAvg,
}

pub const FEATURE_COUNT: usize = 11;

/// Canonical column order. Reordering this silently corrupts predictions.
pub const FEATURE_SCHEMA: [FeatureColumn; FEATURE_COUNT] = [
    FeatureColumn::Footfall,
    FeatureColumn::TempMode,
    FeatureColumn::Aq,
    FeatureColumn::Uss,
    FeatureColumn::Cs,
    FeatureColumn::Voc,
    FeatureColumn::Rp,
    FeatureColumn::Ip,
    FeatureColumn::Temperature,
    FeatureColumn::TempDiff,
    FeatureColumn::RpAvg,
];

impl FeatureColumn {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn position(self) -> usize {
        self as usize
    }

    pub fn names() -> Vec<&'static str> {
        Self::iter().map(Self::name).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    /// Forwarded verbatim from the form; interpreted by the classifier.
    Raw(String),
}

impl FeatureValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(x) => Some(*x),
            FeatureValue::Raw(_) => None,
        }
    }

    /// Numeric coercion performed by a model's input layer.
    pub fn coerce(&self, column: FeatureColumn) -> Result<f64, PredictionError> {
        let invalid = |value: String| PredictionError::InvalidInput { column, value };
        match self {
            FeatureValue::Number(x) if x.is_finite() => Ok(*x),
            FeatureValue::Number(x) => Err(invalid(x.to_string())),
            FeatureValue::Raw(s) => match s.trim().parse::<f64>() {
                Ok(x) if x.is_finite() => Ok(x),
                _ => Err(invalid(s.clone())),
            },
        }
    }
}

impl Display for FeatureValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureValue::Number(x) => write!(f, "{x}"),
            FeatureValue::Raw(s) => write!(f, "{s:?}"),
        }
    }
}

/// A single classifier input row laid out per [`FEATURE_SCHEMA`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    values: [FeatureValue; FEATURE_COUNT],
}

impl FeatureVector {
    pub(crate) fn from_values(values: [FeatureValue; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[FeatureValue] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureColumn, &FeatureValue)> {
        FEATURE_SCHEMA.iter().copied().zip(self.values.iter())
    }

    pub fn temp_diff(&self) -> f64 {
        // The builder always stores a number here.
        self[FeatureColumn::TempDiff].as_number().unwrap_or(f64::NAN)
    }

    pub fn to_numeric(&self) -> Result<[f64; FEATURE_COUNT], PredictionError> {
        let mut row = [0.0; FEATURE_COUNT];
        for (slot, (column, value)) in row.iter_mut().zip(self.iter()) {
            *slot = value.coerce(column)?;
        }
        Ok(row)
    }
}

impl Index<FeatureColumn> for FeatureVector {
    type Output = FeatureValue;

    fn index(&self, column: FeatureColumn) -> &FeatureValue {
        &self.values[column.position()]
    }
}

impl Display for FeatureVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.iter().map(|(c, v)| format!("{c}={v}")).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_order_is_training_order() {
        assert_eq!(
            FeatureColumn::names(),
            vec![
                "footfall",
                "tempMode",
                "AQ",
                "USS",
                "CS",
                "VOC",
                "RP",
                "IP",
                "Temperature",
                "temp_diff",
                "RP_Avg",
            ]
        );
        for (i, c) in FEATURE_SCHEMA.iter().enumerate() {
            assert_eq!(c.position(), i);
        }
    }

    #[test]
    fn coerce_accepts_padded_numbers() {
        let v = FeatureValue::Raw(" 12.5 ".into());
        assert_eq!(v.coerce(FeatureColumn::Aq), Ok(12.5));
    }

    #[test]
    fn coerce_rejects_text_and_non_finite() {
        let err = FeatureValue::Raw("high".into())
            .coerce(FeatureColumn::Voc)
            .unwrap_err();
        assert_eq!(
            err,
            PredictionError::InvalidInput {
                column: FeatureColumn::Voc,
                value: "high".into()
            }
        );
        assert!(FeatureValue::Raw("inf".into()).coerce(FeatureColumn::Rp).is_err());
        assert!(
            FeatureValue::Number(f64::NAN)
                .coerce(FeatureColumn::TempDiff)
                .is_err()
        );
    }

    #[test]
    fn serializes_as_flat_row() {
        let mut values: [FeatureValue; FEATURE_COUNT] =
            std::array::from_fn(|i| FeatureValue::Number(i as f64));
        values[0] = FeatureValue::Raw("7".into());
        let fv = FeatureVector::from_values(values);
        let json = serde_json::to_value(&fv).unwrap();
        assert_eq!(json["values"][0], "7");
        assert_eq!(json["values"][10], 10.0);
    }
}

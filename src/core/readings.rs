use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

use crate::error::ValidationError;

/// The ten readings an operator enters, in form order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    EnumMessage,
    IntoStaticStr,
)]
pub enum InputField {
    #[strum(serialize = "footfall", message = "Foot fall")]
    Footfall,
    #[strum(serialize = "tempMode", message = "Temperature Mode")]
    TempMode,
    #[strum(serialize = "airQuality", message = "Air Quality")]
    AirQuality,
    #[strum(serialize = "ultraSonicSensor", message = "UltraSonic Sensor reading")]
    UltraSonicSensor,
    #[strum(serialize = "electricalCurrentReading", message = "Electric Current")]
    ElectricalCurrentReading,
    #[strum(serialize = "VOC", message = "Volatile Organic Compound Levels")]
    Voc,
    #[strum(serialize = "RPM", message = "Rotations Per Minute")]
    Rpm,
    #[strum(serialize = "InputPressure", message = "Input Pressure")]
    InputPressure,
    #[strum(serialize = "Temperature", message = "Temperature")]
    Temperature,
    #[strum(serialize = "AverageRPM_Diff", message = "Average RPM Difference")]
    AverageRpmDiff,
}

impl InputField {
    pub const COUNT: usize = 10;

    /// Identifier used by the form layer, e.g. `"tempMode"`.
    pub fn identifier(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        self.get_message().unwrap_or_else(|| self.identifier())
    }
}

/// One submission's worth of untyped readings.
///
/// Every field is present; an empty string is a present-but-blank entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReadingSet {
    pub footfall: String,
    pub temp_mode: String,
    pub air_quality: String,
    pub ultra_sonic_sensor: String,
    pub electrical_current_reading: String,
    #[serde(rename = "VOC")]
    pub voc: String,
    #[serde(rename = "RPM")]
    pub rpm: String,
    #[serde(rename = "InputPressure")]
    pub input_pressure: String,
    #[serde(rename = "Temperature")]
    pub temperature: String,
    #[serde(rename = "AverageRPM_Diff")]
    pub average_rpm_diff: String,
}

impl RawReadingSet {
    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::Footfall => &self.footfall,
            InputField::TempMode => &self.temp_mode,
            InputField::AirQuality => &self.air_quality,
            InputField::UltraSonicSensor => &self.ultra_sonic_sensor,
            InputField::ElectricalCurrentReading => &self.electrical_current_reading,
            InputField::Voc => &self.voc,
            InputField::Rpm => &self.rpm,
            InputField::InputPressure => &self.input_pressure,
            InputField::Temperature => &self.temperature,
            InputField::AverageRpmDiff => &self.average_rpm_diff,
        }
    }

    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        let slot = match field {
            InputField::Footfall => &mut self.footfall,
            InputField::TempMode => &mut self.temp_mode,
            InputField::AirQuality => &mut self.air_quality,
            InputField::UltraSonicSensor => &mut self.ultra_sonic_sensor,
            InputField::ElectricalCurrentReading => &mut self.electrical_current_reading,
            InputField::Voc => &mut self.voc,
            InputField::Rpm => &mut self.rpm,
            InputField::InputPressure => &mut self.input_pressure,
            InputField::Temperature => &mut self.temperature,
            InputField::AverageRpmDiff => &mut self.average_rpm_diff,
        };
        *slot = value.into();
    }

    /// Builds a reading set from `identifier -> value` pairs.
    ///
    /// All ten identifiers must be present and no others are accepted.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, ValidationError> {
        if let Some(unknown) = map.keys().find(|k| InputField::from_str(k).is_err()) {
            return Err(ValidationError::UnknownField(unknown.clone()));
        }

        let mut readings = RawReadingSet::default();
        for field in InputField::iter() {
            let value = map
                .get(field.identifier())
                .ok_or(ValidationError::MissingField(field))?;
            readings.set(field, value.as_str());
        }
        Ok(readings)
    }

    /// Builds a reading set from values given in form order.
    pub fn from_ordered<I, S>(values: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = values.into_iter();
        let mut readings = RawReadingSet::default();
        for field in InputField::iter() {
            let value = values.next().ok_or(ValidationError::MissingField(field))?;
            readings.set(field, value);
        }
        if let Some(extra) = values.next() {
            return Err(ValidationError::UnknownField(extra.into()));
        }
        Ok(readings)
    }
}

use crate::core::RawReadingSet;

/// A plausible, fully numeric submission.
pub fn sample_readings() -> RawReadingSet {
    RawReadingSet {
        footfall: "190".into(),
        temp_mode: "3".into(),
        air_quality: "3".into(),
        ultra_sonic_sensor: "1".into(),
        electrical_current_reading: "3".into(),
        voc: "1".into(),
        rpm: "20".into(),
        input_pressure: "4".into(),
        temperature: "1".into(),
        average_rpm_diff: "2".into(),
    }
}

pub fn readings_with(temperature: &str, temp_mode: &str) -> RawReadingSet {
    RawReadingSet {
        temperature: temperature.into(),
        temp_mode: temp_mode.into(),
        ..sample_readings()
    }
}

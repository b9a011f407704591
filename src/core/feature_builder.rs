use crate::core::features::{FeatureValue, FeatureVector};
use crate::core::readings::{InputField, RawReadingSet};
use crate::error::ValidationError;

fn parse_finite(raw: &RawReadingSet, field: InputField) -> Result<f64, ValidationError> {
    let text = raw.get(field);
    match text.trim().parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(ValidationError::NonNumeric {
            field,
            value: text.to_string(),
        }),
    }
}

/// Turns one form submission into a classifier row.
///
/// Only `Temperature` and `tempMode` are parsed here since `temp_diff` depends
/// on them. The other eight readings are passed through untouched and left
/// for the model's input layer to interpret.
pub fn build(raw: &RawReadingSet) -> Result<FeatureVector, ValidationError> {
    let temperature = parse_finite(raw, InputField::Temperature)?;
    let temp_mode = parse_finite(raw, InputField::TempMode)?;
    let temp_diff = temperature - temp_mode;

    let passthrough = |field: InputField| FeatureValue::Raw(raw.get(field).to_string());

    Ok(FeatureVector::from_values([
        passthrough(InputField::Footfall),
        FeatureValue::Number(temp_mode),
        passthrough(InputField::AirQuality),
        passthrough(InputField::UltraSonicSensor),
        passthrough(InputField::ElectricalCurrentReading),
        passthrough(InputField::Voc),
        passthrough(InputField::Rpm),
        passthrough(InputField::InputPressure),
        FeatureValue::Number(temperature),
        FeatureValue::Number(temp_diff),
        passthrough(InputField::AverageRpmDiff),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::FeatureColumn;
    use crate::testing::dummies::{readings_with, sample_readings};
    use rand::Rng;

    #[test]
    fn temp_diff_is_temperature_minus_mode() {
        let raw = readings_with("25.5", "20.0");
        let fv = build(&raw).unwrap();
        assert_eq!(fv.temp_diff(), 5.5);
        assert_eq!(fv[FeatureColumn::Temperature], FeatureValue::Number(25.5));
        assert_eq!(fv[FeatureColumn::TempMode], FeatureValue::Number(20.0));
    }

    #[test]
    fn temp_diff_matches_subtraction_for_random_pairs() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let t: f64 = rng.random_range(-1.0e6..1.0e6);
            let m: f64 = rng.random_range(-1.0e6..1.0e6);
            let raw = readings_with(&t.to_string(), &m.to_string());
            let fv = build(&raw).unwrap();
            assert_eq!(fv.temp_diff(), t - m);
        }
    }

    #[test]
    fn negative_diff_when_mode_is_higher() {
        let fv = build(&readings_with("20.0", "25.5")).unwrap();
        assert_eq!(fv.temp_diff(), -5.5);
    }

    #[test]
    fn whitespace_around_numbers_is_tolerated() {
        let fv = build(&readings_with(" 30 ", "\t10\n")).unwrap();
        assert_eq!(fv.temp_diff(), 20.0);
    }

    #[test]
    fn empty_temperature_is_non_numeric() {
        let err = build(&readings_with("", "20.0")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonNumeric {
                field: InputField::Temperature,
                value: String::new(),
            }
        );
    }

    #[test]
    fn malformed_or_non_finite_mode_is_rejected() {
        for bad in ["abc", "1.2.3", "NaN", "inf", "-infinity"] {
            let err = build(&readings_with("20.0", bad)).unwrap_err();
            assert!(matches!(
                err,
                ValidationError::NonNumeric {
                    field: InputField::TempMode,
                    ..
                }
            ));
        }
    }

    #[test]
    fn other_fields_are_not_validated() {
        let mut raw = sample_readings();
        raw.voc = "not a number".into();
        raw.footfall = String::new();
        let fv = build(&raw).unwrap();
        assert_eq!(fv[FeatureColumn::Voc], FeatureValue::Raw("not a number".into()));
        assert_eq!(fv[FeatureColumn::Footfall], FeatureValue::Raw(String::new()));
    }

    #[test]
    fn every_column_holds_its_own_reading() {
        let raw = RawReadingSet::from_ordered([
            "101", "102", "103", "104", "105", "106", "107", "108", "109", "110",
        ])
        .unwrap();
        let fv = build(&raw).unwrap();

        let expected = [
            FeatureValue::Raw("101".into()),
            FeatureValue::Number(102.0),
            FeatureValue::Raw("103".into()),
            FeatureValue::Raw("104".into()),
            FeatureValue::Raw("105".into()),
            FeatureValue::Raw("106".into()),
            FeatureValue::Raw("107".into()),
            FeatureValue::Raw("108".into()),
            FeatureValue::Number(109.0),
            FeatureValue::Number(7.0),
            FeatureValue::Raw("110".into()),
        ];
        assert_eq!(fv.values(), &expected);
    }
}

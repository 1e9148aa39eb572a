//! Clinical feature vector for screening requests

use serde::{Deserialize, Deserializer, Serialize};

/// Number of clinical features the model consumes
pub const FEATURE_COUNT: usize = 8;

/// Wire-format feature names in model input order.
///
/// The order matches the column order the scaler and classifier were
/// fitted with and must never change independently of the artifacts.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "pregnancies",
    "glucose",
    "bloodPressure",
    "skinThickness",
    "insulin",
    "bmi",
    "diabetesPedigree",
    "age",
];

/// Ordered clinical inputs for one screening request.
///
/// Fields absent from the request body, or carrying a non-numeric value,
/// deserialize to `0.0` instead of rejecting the request. The intake form
/// always submits all eight fields; the default keeps the handler total
/// over partial payloads.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    #[serde(default, deserialize_with = "lenient_f32")]
    pub pregnancies: f32,

    #[serde(default, deserialize_with = "lenient_f32")]
    pub glucose: f32,

    #[serde(default, deserialize_with = "lenient_f32")]
    pub blood_pressure: f32,

    #[serde(default, deserialize_with = "lenient_f32")]
    pub skin_thickness: f32,

    #[serde(default, deserialize_with = "lenient_f32")]
    pub insulin: f32,

    #[serde(default, deserialize_with = "lenient_f32")]
    pub bmi: f32,

    #[serde(default, deserialize_with = "lenient_f32")]
    pub diabetes_pedigree: f32,

    #[serde(default, deserialize_with = "lenient_f32")]
    pub age: f32,
}

impl FeatureVector {
    /// Feature values in fixed model input order
    pub fn as_array(&self) -> [f32; FEATURE_COUNT] {
        [
            self.pregnancies,
            self.glucose,
            self.blood_pressure,
            self.skin_thickness,
            self.insulin,
            self.bmi,
            self.diabetes_pedigree,
            self.age,
        ]
    }

    /// Build a vector from values in fixed model input order
    pub fn from_array(values: [f32; FEATURE_COUNT]) -> Self {
        Self {
            pregnancies: values[0],
            glucose: values[1],
            blood_pressure: values[2],
            skin_thickness: values[3],
            insulin: values[4],
            bmi: values[5],
            diabetes_pedigree: values[6],
            age: values[7],
        }
    }
}

/// Deserialize a JSON value as `f32`, substituting `0.0` for anything
/// that is not a number (null, string, bool, nested structure).
fn lenient_f32<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().map(|v| v as f32).unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_object_defaults_every_feature_to_zero() {
        let features: FeatureVector = serde_json::from_str("{}").unwrap();
        assert_eq!(features.as_array(), [0.0; FEATURE_COUNT]);
    }

    #[test]
    fn camel_case_wire_names_map_to_fixed_positions() {
        let features: FeatureVector = serde_json::from_str(
            r#"{
                "pregnancies": 2,
                "glucose": 148,
                "bloodPressure": 72,
                "skinThickness": 35,
                "insulin": 94,
                "bmi": 33.6,
                "diabetesPedigree": 0.627,
                "age": 50
            }"#,
        )
        .unwrap();

        assert_eq!(
            features.as_array(),
            [2.0, 148.0, 72.0, 35.0, 94.0, 33.6, 0.627, 50.0]
        );
    }

    #[test]
    fn non_numeric_values_default_to_zero() {
        let features: FeatureVector = serde_json::from_str(
            r#"{"glucose": "high", "age": null, "bmi": true, "insulin": [7]}"#,
        )
        .unwrap();
        assert_eq!(features.as_array(), [0.0; FEATURE_COUNT]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let features: FeatureVector =
            serde_json::from_str(r#"{"glucose": 120, "patientId": "abc-123"}"#).unwrap();
        assert_eq!(features.glucose, 120.0);
    }

    #[test]
    fn array_round_trip_preserves_order() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        assert_eq!(FeatureVector::from_array(values).as_array(), values);
    }

    proptest! {
        /// Omitting a field is equivalent to supplying 0 for it.
        #[test]
        fn omission_equals_explicit_zero(
            values in proptest::array::uniform8(-1000.0f32..1000.0),
            mask in proptest::array::uniform8(proptest::bool::ANY),
        ) {
            let mut body = serde_json::Map::new();
            let mut expected = [0.0f32; FEATURE_COUNT];
            for i in 0..FEATURE_COUNT {
                if mask[i] {
                    body.insert(
                        FEATURE_NAMES[i].to_string(),
                        serde_json::json!(values[i]),
                    );
                    expected[i] = values[i] as f64 as f32;
                }
            }

            let parsed: FeatureVector =
                serde_json::from_value(serde_json::Value::Object(body)).unwrap();
            prop_assert_eq!(parsed.as_array(), expected);
        }
    }
}

// SPDX-License-Identifier: Apache-2.0

/// Base stat fields carry floating-point artifacts in source data but
/// the domain displays whole numbers. Whole-valued floats serialize as
/// JSON integers; anything else round-trips as-is.
pub mod whole_number {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
        if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer)
    }
}

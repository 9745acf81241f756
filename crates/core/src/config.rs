use crate::util::range::NumRange;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines a map gen process. Two maps generated with the
/// same config will always be identical.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MapConfig {
    /// RNG seed to use for all randomized processes during map gen.
    ///
    /// When deserializing a config, this field supports a few options:
    /// - If the value is an integer that fits into `u64`, use that value
    /// - If it's a string that can be parsed into a `u64`, use the parsed
    ///   value
    /// - If it's any other string, hash it and use the hash value
    ///
    /// Regardless of how the seed value is input, it will always be
    /// serialized as a number.
    #[serde(deserialize_with = "serde_seed::deserialize")]
    pub seed: u64,

    /// Width of the map, in cells.
    #[validate(range(min = 1, max = 10000))]
    pub width: u32,

    /// Height of the map, in cells.
    #[validate(range(min = 1, max = 10000))]
    pub height: u32,

    /// The number of lakes to *attempt* to place. Lakes whose center can't be
    /// positioned far enough away from every other lake are dropped, so the
    /// generated map may hold fewer lakes than this.
    pub lake_count: u32,

    /// Minimum Euclidean distance between the centers of any two lakes, in
    /// cells.
    #[validate(range(min = 0.0))]
    pub min_lake_distance: f64,

    /// Depth of the deepest possible water cell. Cell depths always land in
    /// `[0, max_depth]`.
    #[validate(range(min = 1))]
    pub max_depth: u32,

    /// Config for fields related to individual lake synthesis
    #[validate]
    pub lake: LakeConfig,
}

/// Configuration for the shape and depth profile of individual lakes.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_lake_ranges"))]
pub struct LakeConfig {
    /// Minimum number of vertices in a lake's contour polygon.
    #[validate(range(min = 3))]
    pub min_vertices: u32,
    /// Maximum number of vertices in a lake's contour polygon. More vertices
    /// make for a lumpier shoreline.
    pub max_vertices: u32,

    /// Minimum base radius of a lake, in cells. Each lake draws two base
    /// radii (one per axis) from this range, so lakes come out elliptical-ish
    /// rather than circular.
    #[validate(range(min = 1.0))]
    pub min_radius: f64,
    /// Maximum base radius of a lake, in cells.
    pub max_radius: f64,

    /// Fraction by which each contour vertex perturbs its base radii. 0.2
    /// means every vertex sits somewhere in ±20% of the base radius. This is
    /// what makes shorelines organic instead of perfect ellipses.
    #[validate(range(min = 0.0, max = 1.0))]
    pub radius_jitter: f64,

    /// Minimum steepness exponent for the depth falloff curve.
    #[validate(range(min = 0.0))]
    pub min_steepness: f64,
    /// Maximum steepness exponent. Each lake draws one exponent from this
    /// range; higher values bias depth towards a deep-only-in-the-center
    /// profile.
    pub max_steepness: f64,
}

impl LakeConfig {
    /// The range of per-vertex jitter factors applied to a base radius.
    pub fn jitter_range(&self) -> NumRange {
        NumRange::new(1.0 - self.radius_jitter, 1.0 + self.radius_jitter)
    }

    pub fn radius_range(&self) -> NumRange {
        NumRange::new(self.min_radius, self.max_radius)
    }

    pub fn steepness_range(&self) -> NumRange {
        NumRange::new(self.min_steepness, self.max_steepness)
    }
}

/// The min/max field pairs have to be checked against each other, which the
/// per-field validators can't express.
fn validate_lake_ranges(config: &LakeConfig) -> Result<(), ValidationError> {
    if config.min_vertices > config.max_vertices
        || config.min_radius > config.max_radius
        || config.min_steepness > config.max_steepness
    {
        return Err(ValidationError::new("inverted_range"));
    }
    Ok(())
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // Danger! This means the default will vary between calls!
            seed: rand::random(),

            width: 80,
            height: 40,
            lake_count: 5,
            min_lake_distance: 20.0,
            max_depth: 40,
            lake: LakeConfig::default(),
        }
    }
}

impl Default for LakeConfig {
    fn default() -> Self {
        Self {
            min_vertices: 8,
            max_vertices: 12,
            min_radius: 8.0,
            max_radius: 15.0,
            radius_jitter: 0.2,
            min_steepness: 1.8,
            max_steepness: 2.5,
        }
    }
}

/// The seed field has some fancy deserialization behavior implemented here.
/// See the `seed` field definition for a description.
mod serde_seed {
    use fnv::FnvHasher;
    use serde::{de::Visitor, Deserializer};
    use std::{
        convert::TryInto,
        fmt,
        hash::{Hash, Hasher},
    };

    struct SeedVisitor;

    impl<'de> Visitor<'de> for SeedVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or string")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            value
                .try_into()
                .map_err(|_| E::custom(format!("u64 out of range: {}", value)))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            match value.parse::<u64>() {
                Ok(seed) => Ok(seed),
                Err(_) => {
                    let mut hasher = FnvHasher::default();
                    value.hash(&mut hasher);
                    Ok(hasher.finish())
                }
            }
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        // We can deserialize from a few different types so we can't give a
        // type hint here
        deserializer.deserialize_any(SeedVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_from_string() {
        // Numeric strings parse directly, everything else gets hashed
        let config: MapConfig =
            serde_json::from_str(r#"{"seed": "12345"}"#).unwrap();
        assert_eq!(config.seed, 12345);

        let config: MapConfig =
            serde_json::from_str(r#"{"seed": "potato"}"#).unwrap();
        let config2: MapConfig =
            serde_json::from_str(r#"{"seed": "potato"}"#).unwrap();
        assert_eq!(config.seed, config2.seed);
    }

    #[test]
    fn test_inverted_lake_range_rejected() {
        let config = LakeConfig {
            min_radius: 15.0,
            max_radius: 8.0,
            ..LakeConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

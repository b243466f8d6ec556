// Build configuration: geometry tunables plus the world's buildable range.
//
// Loaded from JSON with every field optional; missing sections fall back
// to `GeometryConfig::default()` and `WorldBounds::default()`.
//
// See also: `voxel_mason_geom::config` for the nested structs.

use serde::{Deserialize, Serialize};
use voxel_mason_geom::{GeometryConfig, WorldBounds};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub geometry: GeometryConfig,
    pub bounds: WorldBounds,
}

impl BuildConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(BuildConfig::from_json("{}").unwrap(), BuildConfig::default());
    }

    #[test]
    fn nested_overrides_keep_sibling_defaults() {
        let config = BuildConfig::from_json(
            r#"{ "geometry": { "bezier": { "max_segments": 200 } }, "bounds": { "max_y": 255 } }"#,
        )
        .unwrap();
        assert_eq!(config.geometry.bezier.max_segments, 200);
        assert_eq!(config.geometry.bezier.min_segments, 50);
        assert_eq!(config.geometry.max_voxels, 2_000_000);
        assert_eq!(config.bounds.max_y, 255);
        assert_eq!(config.bounds.min_y, -64);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(BuildConfig::from_json(r#"{ "bounds": { "max_y": "high" } }"#).is_err());
    }
}

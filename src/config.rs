use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assets::color::parse_color;
use crate::foundation::error::{GoldfishError, GoldfishResult};

/// Color option pools loaded from `parameters.json`.
///
/// Values stay as the configured strings so metadata reports them verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraitPools {
    pub background_color: Vec<String>,
    pub body_color: Vec<String>,
    pub accent_color: Vec<String>,
}

impl TraitPools {
    /// Load and validate pools from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> GoldfishResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GoldfishError::config(format!("open parameters '{}': {e}", path.display()))
        })?;
        let pools: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            GoldfishError::config(format!("parse parameters '{}': {e}", path.display()))
        })?;
        pools.validate()?;
        Ok(pools)
    }

    pub fn from_json_str(s: &str) -> GoldfishResult<Self> {
        let pools: Self = serde_json::from_str(s)
            .map_err(|e| GoldfishError::config(format!("parse parameters: {e}")))?;
        pools.validate()?;
        Ok(pools)
    }

    /// Every pool must be non-empty and every entry must parse as a color.
    pub fn validate(&self) -> GoldfishResult<()> {
        for (name, pool) in self.named() {
            if pool.is_empty() {
                return Err(GoldfishError::config(format!("'{name}' pool is empty")));
            }
            for color in pool {
                parse_color(color)
                    .map_err(|e| GoldfishError::config(format!("'{name}': {e}")))?;
            }
        }
        Ok(())
    }

    fn named(&self) -> [(&'static str, &[String]); 3] {
        [
            ("background_color", self.background_color.as_slice()),
            ("body_color", self.body_color.as_slice()),
            ("accent_color", self.accent_color.as_slice()),
        ]
    }
}

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PresetError;
use crate::pattern::CurveParameters;

/// Named parameter presets, ordered by name.
///
/// Loaded from a JSON object mapping preset names to parameter objects:
///
/// ```json
/// {
///   "rose": { "xFunctionCode": 0, "yFunctionCode": 1, "deltaAngle": 0.5 },
///   "drift": { "loopVertexPeriod": 200, "paramsToAdjust": ["xPhase"], "adjustAmounts": [0.1] }
/// }
/// ```
///
/// Fields left out take their [`CurveParameters::default`] values. Every
/// preset is validated on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetBook {
    presets: BTreeMap<String, CurveParameters>,
}

impl PresetBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a preset book.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::Parse`] for malformed JSON, unknown parameter
    /// names or bad colors, and [`PresetError::Invalid`] for a preset that
    /// fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, PresetError> {
        let book: Self = serde_json::from_str(json)?;
        book.validated()
    }

    /// Reads and validates a preset book.
    ///
    /// # Errors
    ///
    /// Same as [`from_json_str`](Self::from_json_str); I/O failures are
    /// reported as [`PresetError::Parse`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PresetError> {
        let book: Self = serde_json::from_reader(reader)?;
        book.validated()
    }

    /// Adds or replaces a preset.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::Invalid`] if `params` fails validation.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        params: CurveParameters,
    ) -> Result<(), PresetError> {
        let name = name.into();
        params
            .validate()
            .map_err(|source| PresetError::Invalid {
                name: name.clone(),
                source,
            })?;
        self.presets.insert(name, params);
        Ok(())
    }

    /// Looks up a preset by name.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::NotFound`] if no preset has that name.
    pub fn get(&self, name: &str) -> Result<&CurveParameters, PresetError> {
        self.presets
            .get(name)
            .ok_or_else(|| PresetError::NotFound(name.to_owned()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Serializes the book as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::Parse`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, PresetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validated(self) -> Result<Self, PresetError> {
        for (name, params) in &self.presets {
            params.validate().map_err(|source| PresetError::Invalid {
                name: name.clone(),
                source,
            })?;
        }
        debug!(presets = self.presets.len(), "loaded preset book");
        Ok(self)
    }
}

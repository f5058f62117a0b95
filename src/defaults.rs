//! Per-block-type configuration defaults.
//!
//! The editor stores a JSON document keyed by block name whose values are
//! attribute objects, e.g. `{"kadence/rowlayout": {"topPadding": 25}}`.
//! Blocks that have never been saved (no `uniqueID`) start from these
//! values.

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, warn};
use serde_json::Value;

use crate::block::{Attributes, Block, UNIQUE_ID_KEY};
use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct BlockDefaults {
    by_block: BTreeMap<String, Attributes>,
}

impl BlockDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::ConfigError(format!("not valid JSON: {}", e)))?;
        let obj = value.as_object().ok_or_else(|| {
            Error::ConfigError("top level must be an object keyed by block name".into())
        })?;

        let mut defaults = BlockDefaults::new();
        for (name, entry) in obj {
            match entry.as_object() {
                Some(map) => {
                    defaults
                        .by_block
                        .insert(name.clone(), Attributes::from_json_object(map));
                }
                None => warn!("ignoring defaults for {}: not an object", name),
            }
        }
        Ok(defaults)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn defaults_for(&self, block_name: &str) -> Option<&Attributes> {
        self.by_block.get(block_name)
    }

    pub fn is_empty(&self) -> bool {
        self.by_block.is_empty()
    }

    /// Fill unset attributes of unsaved blocks in the tree. Set values and
    /// blocks with malformed attributes are left alone.
    pub fn apply(&self, block: &mut Block) {
        if let (Some(name), Some(attrs)) = (block.name.as_deref(), block.attributes.as_mut()) {
            let unsaved = attrs
                .get(UNIQUE_ID_KEY)
                .map_or(true, |id| id.to_string().is_empty());
            if unsaved {
                if let Some(defaults) = self.by_block.get(name) {
                    let mut filled = 0usize;
                    for (key, value) in defaults.iter() {
                        if !attrs.contains(key) {
                            attrs.insert(key.clone(), value.clone());
                            filled += 1;
                        }
                    }
                    debug!("filled {} default attributes on {}", filled, name);
                }
            }
        }
        for child in &mut block.children {
            self.apply(child);
        }
    }

    pub fn apply_all(&self, blocks: &mut [Block]) {
        for block in blocks {
            self.apply(block);
        }
    }
}

//! Block tree model and the tolerant parser for block-parser JSON.
//!
//! The block parser emits a list of nodes shaped like
//! `{"blockName": "...", "attrs": {...}, "innerBlocks": [...]}`. Nodes that do
//! not fit that shape are kept where possible (so their children can still be
//! walked) and dropped otherwise; nothing here aborts a whole document.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::{Map, Number, Value};

use crate::{Error, Result};

/// Block name of the row/layout container.
pub const ROW_BLOCK_NAME: &str = "kadence/rowlayout";
/// Block name of a column inside a row.
pub const COLUMN_BLOCK_NAME: &str = "kadence/column";
/// Attribute key holding a row's unique ID.
pub const UNIQUE_ID_KEY: &str = "uniqueID";

/// A scalar attribute value as stored by the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Number(Number),
    Text(String),
}

impl AttrValue {
    /// Numeric reading of the value. Strings that don't parse read as zero.
    pub fn as_f64(&self) -> f64 {
        match self {
            AttrValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            AttrValue::Number(n) => n.as_f64().unwrap_or(0.0),
            AttrValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        }
    }

    /// Convert a JSON value, ignoring anything that is not a scalar.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(AttrValue::Bool(*b)),
            Value::Number(n) => Some(AttrValue::Number(n.clone())),
            Value::String(s) => Some(AttrValue::Text(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `true` prints as 1 and `false` as nothing, matching how stored
            // flags have always been concatenated into CSS.
            AttrValue::Bool(true) => f.write_str("1"),
            AttrValue::Bool(false) => Ok(()),
            // Whole floats print without a trailing `.0`
            AttrValue::Number(n) if n.is_f64() => match n.as_f64() {
                Some(v) => write!(f, "{}", v),
                None => write!(f, "{}", n),
            },
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Number(Number::from(n))
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Number(Number::from(n))
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        match Number::from_f64(n) {
            Some(num) => AttrValue::Number(num),
            None => AttrValue::Text(n.to_string()),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

/// Sparse attribute mapping. A missing key means "not set".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    values: BTreeMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object. `null` and nested arrays/objects are
    /// treated as unset.
    pub fn from_json_object(map: &Map<String, Value>) -> Self {
        let mut attrs = Attributes::new();
        for (key, value) in map {
            match AttrValue::from_json(value) {
                Some(v) => {
                    attrs.values.insert(key.clone(), v);
                }
                None => debug!("ignoring non-scalar attribute {}", key),
            }
        }
        attrs
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// True when at least one of `keys` is set.
    pub fn any_of(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.contains(k))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
        self.values.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// What the compiler cares about for a given block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Row,
    Column,
    Other,
}

impl BlockKind {
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(ROW_BLOCK_NAME) => BlockKind::Row,
            Some(COLUMN_BLOCK_NAME) => BlockKind::Column,
            _ => BlockKind::Other,
        }
    }
}

/// A node of the parsed block tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Block type name; `None` for freeform content between blocks
    pub name: Option<String>,
    pub kind: BlockKind,
    /// `None` when the stored attributes were not a mapping
    pub attributes: Option<Attributes>,
    pub children: Vec<Block>,
}

impl Block {
    pub fn new(name: Option<&str>, attributes: Option<Attributes>) -> Self {
        Self {
            name: name.map(str::to_string),
            kind: BlockKind::from_name(name),
            attributes,
            children: Vec::new(),
        }
    }

    pub fn row(attributes: Attributes) -> Self {
        Self::new(Some(ROW_BLOCK_NAME), Some(attributes))
    }

    pub fn column(attributes: Attributes) -> Self {
        Self::new(Some(COLUMN_BLOCK_NAME), Some(attributes))
    }

    pub fn other(name: &str) -> Self {
        Self::new(Some(name), Some(Attributes::new()))
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.children = children;
        self
    }

    /// The row's unique ID, if the block carries one.
    pub fn unique_id(&self) -> Option<String> {
        self.attributes
            .as_ref()
            .and_then(|a| a.get(UNIQUE_ID_KEY))
            .map(|v| v.to_string())
    }

    /// Convert one parser node. Returns `None` only when the node is not an
    /// object at all. A node with non-mapping attributes or non-list inner
    /// blocks keeps no attributes, so it contributes no styles.
    pub fn from_value(value: &Value) -> Option<Block> {
        if !value.is_object() {
            warn!("skipping block node that is not an object");
            return None;
        }
        let raw = match RawBlock::deserialize(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping unreadable block node: {}", e);
                return None;
            }
        };

        let name = raw.name.as_ref().and_then(Value::as_str);
        let label = name.unwrap_or("<freeform>");

        let mut attributes = match &raw.attrs {
            Some(Value::Object(map)) => Some(Attributes::from_json_object(map)),
            // PHP encodes an empty attribute array as `[]`
            Some(Value::Array(items)) if items.is_empty() => Some(Attributes::new()),
            Some(_) => {
                warn!("block {} has non-mapping attributes; skipping its styles", label);
                None
            }
            None => {
                debug!("block {} has no attributes", label);
                None
            }
        };

        let children = match &raw.inner_blocks {
            Some(Value::Array(items)) => items.iter().filter_map(Block::from_value).collect(),
            None => Vec::new(),
            Some(_) => {
                warn!("block {} has non-list inner blocks; skipping its styles", label);
                attributes = None;
                Vec::new()
            }
        };

        Some(Block {
            name: name.map(str::to_string),
            kind: BlockKind::from_name(name),
            attributes,
            children,
        })
    }
}

/// One node as the block parser writes it. Absent and `null` fields both
/// read as `None`.
#[derive(Deserialize)]
struct RawBlock {
    #[serde(rename = "blockName", default)]
    name: Option<Value>,
    #[serde(default)]
    attrs: Option<Value>,
    #[serde(rename = "innerBlocks", default)]
    inner_blocks: Option<Value>,
}

/// Parse a block-parser JSON document (a list of top-level blocks).
pub fn parse_document(json: &str) -> Result<Vec<Block>> {
    let value: Value = serde_json::from_str(json)?;
    parse_document_value(&value)
}

/// Same as [`parse_document`] for an already-decoded JSON value.
pub fn parse_document_value(value: &Value) -> Result<Vec<Block>> {
    match value {
        Value::Array(items) => Ok(items.iter().filter_map(Block::from_value).collect()),
        other => Err(Error::DocumentError(format!(
            "expected a list of blocks, found {}",
            json_type_name(other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

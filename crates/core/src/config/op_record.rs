// SPDX-FileCopyrightText: 2025 Russ Fellows <russ.fellows@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

// crates/core/src/config/op_record.rs
use serde::{Deserialize, Serialize};
use anyhow::Result;
use std::path::Path;

use crate::dtype::DType;

/// One raw operator record as it appears in a benchmark config file.
///
/// A config file holds a JSON array of these; `config_id` indexes into it.
/// Shape entries may be `-1` where the config leaves a dimension symbolic;
/// the normalizer substitutes a concrete `unknown_dim` before deriving
/// anything from the shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpRecord {
    pub op: String,                     // operator name, e.g. "softmax_with_cross_entropy"
    pub logits_shape: Vec<i64>,
    pub logits_dtype: DType,
    pub label_shape: Vec<i64>,
    pub label_dtype: DType,
    pub axis: Option<i64>,              // softmax axis; defaults to the last dimension
    #[serde(default)]
    pub soft_label: bool,               // label is a class distribution, not an index
    #[serde(default = "default_ignore_index")]
    pub ignore_index: i64,              // sentinel label value excluded from the loss
    #[serde(default)]
    pub backward: bool,                 // request gradient computation
    #[serde(default = "default_true")]
    pub run_tf: bool,
    #[serde(default = "default_true")]
    pub run_torch: bool,
}

fn default_true() -> bool {
    true
}

fn default_ignore_index() -> i64 {
    -100
}

impl OpRecord {
    /// Parse a config file body (JSON array of records).
    pub fn from_json(json_str: &str) -> Result<Vec<Self>> {
        serde_json::from_str(json_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse operator JSON config: {}", e))
    }

    /// Parse a YAML config file body by converting to JSON first.
    pub fn from_yaml(yaml_str: &str) -> Result<Vec<Self>> {
        let yaml_value: serde_yaml::Value = serde_yaml::from_str(yaml_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse YAML: {}", e))?;

        let json_str = serde_json::to_string(&yaml_value)
            .map_err(|e| anyhow::anyhow!("Failed to convert YAML to JSON: {}", e))?;

        Self::from_json(&json_str)
    }

    /// Load all records from a config file, sniffing YAML by extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file {:?}: {}", path, e))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&text),
            _ => Self::from_json(&text),
        }
    }

    /// Load the single record selected by `config_id`.
    pub fn from_file_at<P: AsRef<Path>>(path: P, config_id: usize) -> Result<Self> {
        let records = Self::from_file(&path)?;
        let available = records.len();
        records.into_iter().nth(config_id).ok_or_else(|| {
            anyhow::anyhow!(
                "config_id {} out of range: {:?} holds {} record(s)",
                config_id,
                path.as_ref(),
                available
            )
        })
    }
}

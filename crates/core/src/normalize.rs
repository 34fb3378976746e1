// SPDX-FileCopyrightText: 2025 Russ Fellows <russ.fellows@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

// crates/core/src/normalize.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::config::OpRecord;
use crate::dtype::DType;
use crate::projection::Framework;

/// Substituted for every symbolic (`-1`) dimension when the caller does not
/// pick a value.
pub const DEFAULT_UNKNOWN_DIM: i64 = 16;

/// Declared valid value range for a generated input tensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSpec {
    pub name: String,
    pub range: [f64; 2],
}

/// A framework path disabled during normalization, with the reason.
///
/// Narrowing is data, not an error: the comparison scope shrinks and the
/// benchmark run goes on. A `tracing` warning is emitted at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityMismatch {
    pub framework: Framework,
    pub reason: String,
}

/// Fully-resolved operator configuration, shared by every framework adapter.
///
/// Built once from a raw [`OpRecord`], normalized in place, then read-only
/// for the rest of its life. Framework-specific variants are derived copies
/// (see the projection methods); mutating one never affects the base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpConfig {
    pub name: String,
    pub logits_shape: Vec<i64>,
    pub logits_dtype: DType,
    pub label_shape: Vec<i64>,
    pub label_dtype: DType,
    /// Softmax axis; `-1` is the canonical spelling for the last dimension.
    pub axis: i64,
    /// Always `logits_shape[axis]` at normalization time; computed once and
    /// never independently mutated.
    pub num_classes: i64,
    pub soft_label: bool,
    pub ignore_index: i64,
    pub backward: bool,
    pub run_tf: bool,
    pub run_torch: bool,
    pub feed_spec: Vec<FeedSpec>,
    pub disabled: Vec<CapabilityMismatch>,
}

impl OpConfig {
    /// Load the record at `config_id` from a config file and normalize it.
    pub fn from_file<P: AsRef<Path>>(path: P, config_id: usize, unknown_dim: i64) -> Result<Self> {
        let record = OpRecord::from_file_at(path, config_id)?;
        Self::from_record(record, unknown_dim)
    }

    /// Normalize a raw record into a resolved config.
    ///
    /// Errors only on malformed input (empty shapes, axis out of range).
    /// A framework that cannot represent the configuration is narrowed out
    /// via its run flag instead.
    pub fn from_record(record: OpRecord, unknown_dim: i64) -> Result<Self> {
        let logits_shape = substitute_unknown(record.logits_shape, unknown_dim);
        let label_shape = substitute_unknown(record.label_shape, unknown_dim);

        let logits_rank = logits_shape.len();
        if logits_rank == 0 {
            anyhow::bail!("logits_shape must not be empty");
        }

        // Canonicalize a last-dimension axis to -1 so downstream checks have
        // a single spelling for the default case.
        let axis = match record.axis {
            None => -1,
            Some(a) if a == logits_rank as i64 - 1 => -1,
            Some(a) => a,
        };

        let class_dim = resolve_axis(axis, logits_rank)?;
        let num_classes = logits_shape[class_dim];

        let feed_spec = vec![
            FeedSpec {
                name: "logits".to_string(),
                range: [0.0, 1.0],
            },
            FeedSpec {
                name: "label".to_string(),
                range: [0.0, num_classes as f64],
            },
        ];

        let mut config = OpConfig {
            name: record.op,
            logits_shape,
            logits_dtype: record.logits_dtype,
            label_shape,
            label_dtype: record.label_dtype,
            axis,
            num_classes,
            soft_label: record.soft_label,
            ignore_index: record.ignore_index,
            backward: record.backward,
            run_tf: record.run_tf,
            run_torch: record.run_torch,
            feed_spec,
            disabled: Vec::new(),
        };

        if config.label_dtype.is_float() || config.axis != -1 {
            config.disable(
                Framework::TensorFlow,
                "the TensorFlow adapter one-hot encodes integer labels along the last axis",
            );
        }

        if config.soft_label || config.axis != -1 {
            config.disable(
                Framework::PyTorch,
                "torch.nn.functional.cross_entropy supports hard labels on the last axis only",
            );
        } else {
            config.flatten_batch();
        }

        Ok(config)
    }

    /// Disable a framework's run flag and record why. No-op when the record
    /// already opted the framework out.
    fn disable(&mut self, framework: Framework, reason: &str) {
        let flag = match framework {
            Framework::TensorFlow => &mut self.run_tf,
            Framework::PyTorch => &mut self.run_torch,
            // The native path always runs; it is never narrowed.
            Framework::Paddle => return,
        };

        if *flag {
            *flag = false;
            warn!(framework = %framework, reason, "disabling framework path");
            self.disabled.push(CapabilityMismatch {
                framework,
                reason: reason.to_string(),
            });
        }
    }

    /// Collapse leading batch dimensions so logits is `[batch, num_classes]`
    /// and the label is `[batch, 1]`. Hard-label path only; applying it to an
    /// already-flat config leaves it unchanged.
    fn flatten_batch(&mut self) {
        let logits_rank = self.logits_shape.len();
        if logits_rank != 2 {
            let leading: i64 = self.logits_shape[..logits_rank - 1].iter().product();
            self.logits_shape = vec![leading, self.logits_shape[logits_rank - 1]];
        }

        // A trailing unit dim is index padding, not a batch dim.
        let label_rank = self.label_shape.len();
        let batch: i64 = if self.label_shape.last() == Some(&1) {
            self.label_shape[..label_rank - 1].iter().product()
        } else {
            self.label_shape.iter().product()
        };
        self.label_shape = vec![batch, 1];
    }
}

fn substitute_unknown(shape: Vec<i64>, unknown_dim: i64) -> Vec<i64> {
    shape
        .into_iter()
        .map(|dim| if dim < 0 { unknown_dim } else { dim })
        .collect()
}

fn resolve_axis(axis: i64, rank: usize) -> Result<usize> {
    let resolved = if axis < 0 { rank as i64 + axis } else { axis };
    if resolved < 0 || resolved >= rank as i64 {
        anyhow::bail!("axis {} out of range for logits rank {}", axis, rank);
    }
    Ok(resolved as usize)
}

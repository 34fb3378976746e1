// crates/core/src/projection.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::normalize::OpConfig;

/// The frameworks a benchmark config can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Framework {
    #[serde(rename = "paddle")]
    Paddle,
    #[serde(rename = "pytorch")]
    PyTorch,
    #[serde(rename = "tensorflow")]
    TensorFlow,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Paddle => "paddle",
            Framework::PyTorch => "pytorch",
            Framework::TensorFlow => "tensorflow",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Framework {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paddle" => Ok(Framework::Paddle),
            "pytorch" | "torch" => Ok(Framework::PyTorch),
            "tensorflow" | "tf" => Ok(Framework::TensorFlow),
            other => Err(anyhow::anyhow!(
                "Unknown framework '{}'. Use paddle, pytorch, or tensorflow",
                other
            )),
        }
    }
}

/// Framework projections.
///
/// Each projection is an independent copy of the base config with that
/// framework's reshape rules applied; the base and sibling projections are
/// never affected.
impl OpConfig {
    /// Native-framework projection: the config exactly as resolved.
    pub fn to_paddle(&self) -> OpConfig {
        self.clone()
    }

    /// PyTorch expects flat class-index labels, so a `[d0, .., dn, 1]` label
    /// collapses to `[d0 * .. * dn]`.
    pub fn to_pytorch(&self) -> OpConfig {
        let mut config = self.clone();
        if config.label_shape.last() == Some(&1) {
            let label_rank = config.label_shape.len();
            let flat: i64 = config.label_shape[..label_rank - 1].iter().product();
            config.label_shape = vec![flat];
        }
        config
    }

    /// TensorFlow builds one-hot encodings from shape-matching indices, so a
    /// trailing unit dim is stripped rather than folded.
    pub fn to_tensorflow(&self) -> OpConfig {
        let mut config = self.clone();
        if config.label_shape.last() == Some(&1) {
            config.label_shape.pop();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OpRecord;
    use crate::dtype::DType;

    fn base_config(label_shape: Vec<i64>) -> OpConfig {
        let record = OpRecord {
            op: "softmax_with_cross_entropy".to_string(),
            logits_shape: vec![32, 1000],
            logits_dtype: DType::Float32,
            label_shape,
            label_dtype: DType::Int64,
            axis: None,
            soft_label: true, // skip base flattening so the raw label shape survives
            ignore_index: -100,
            backward: false,
            run_tf: true,
            run_torch: true,
        };
        OpConfig::from_record(record, 16).unwrap()
    }

    #[test]
    fn test_to_pytorch_collapses_padded_label() {
        let config = base_config(vec![8, 4, 1]);
        let torch_config = config.to_pytorch();
        assert_eq!(torch_config.label_shape, vec![32]);
        // The base stays untouched.
        assert_eq!(config.label_shape, vec![8, 4, 1]);
    }

    #[test]
    fn test_to_tensorflow_strips_unit_axis() {
        let config = base_config(vec![8, 4, 1]);
        let tf_config = config.to_tensorflow();
        assert_eq!(tf_config.label_shape, vec![8, 4]);
        assert_eq!(config.label_shape, vec![8, 4, 1]);
    }

    #[test]
    fn test_projections_leave_non_padded_labels_alone() {
        let config = base_config(vec![32, 1000]);
        assert_eq!(config.to_pytorch().label_shape, vec![32, 1000]);
        assert_eq!(config.to_tensorflow().label_shape, vec![32, 1000]);
    }

    #[test]
    fn test_projections_are_isolated_copies() {
        let config = base_config(vec![8, 4, 1]);
        let mut torch_config = config.to_pytorch();
        let tf_config = config.to_tensorflow();

        torch_config.label_shape = vec![999];
        torch_config.num_classes = 7;

        assert_eq!(config.label_shape, vec![8, 4, 1]);
        assert_eq!(config.num_classes, 1000);
        assert_eq!(tf_config.label_shape, vec![8, 4]);
    }

    #[test]
    fn test_framework_round_trips() {
        assert_eq!("torch".parse::<Framework>().unwrap(), Framework::PyTorch);
        assert_eq!("tf".parse::<Framework>().unwrap(), Framework::TensorFlow);
        assert_eq!(Framework::Paddle.to_string(), "paddle");
        assert!("mxnet".parse::<Framework>().is_err());
    }
}

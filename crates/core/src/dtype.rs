use std::fmt;

use serde::{Deserialize, Serialize};

/// Element types a benchmark config can request. Tensor storage belongs to
/// the frameworks; the dtype is only carried through to the adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    Float16,
    Float32,
    Float64,
    Int32,
    Int64,
}

impl DType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DType::Float16 => "float16",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
        }
    }

    /// Floating-point label dtypes rule out adapters that expect class indices.
    pub fn is_float(&self) -> bool {
        matches!(self, DType::Float16 | DType::Float32 | DType::Float64)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_json_spellings() {
        let dtype: DType = serde_json::from_str("\"float32\"").unwrap();
        assert_eq!(dtype, DType::Float32);
        assert_eq!(serde_json::to_string(&DType::Int64).unwrap(), "\"int64\"");
    }

    #[test]
    fn test_is_float() {
        assert!(DType::Float16.is_float());
        assert!(DType::Float64.is_float());
        assert!(!DType::Int32.is_float());
        assert!(!DType::Int64.is_float());
    }
}

// crates/frameworks/src/plan.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use op_bench_core::{DType, Framework};

/// A tensor variable the framework runner allocates before invoking the
/// operator. Values are drawn from the config's feed spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarSpec {
    pub name: String,
    pub shape: Vec<i64>,
    pub dtype: DType,
    /// Excluded from gradient computation (labels, one-hot intermediates).
    pub stop_gradient: bool,
}

/// One operator invocation with its keyword attributes in call order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpCall {
    /// Fully-qualified function the runner calls, e.g.
    /// `torch.nn.functional.cross_entropy`.
    pub function: String,
    pub attrs: Vec<(String, Value)>,
}

impl OpCall {
    pub fn new(function: &str) -> Self {
        Self {
            function: function.to_string(),
            attrs: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: Value) -> Self {
        self.attrs.push((name.to_string(), value));
        self
    }
}

/// Everything a framework runner needs to construct and execute the
/// benchmark graph for one operator config.
///
/// The runner itself lives outside this workspace; a plan is handed over as
/// data and contains no framework handles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphPlan {
    pub framework: Framework,
    pub variables: Vec<VarSpec>,
    /// Invocations in execution order; the last one produces `result`.
    pub ops: Vec<OpCall>,
    pub feed_list: Vec<String>,
    pub fetch_list: Vec<String>,
    /// Variables to differentiate `result` against; empty unless the config
    /// requested a backward pass.
    pub gradient_targets: Vec<String>,
}

impl GraphPlan {
    /// Look up an attribute on the final (result-producing) op.
    pub fn result_attr(&self, name: &str) -> Option<&Value> {
        self.ops
            .last()
            .and_then(|op| op.attrs.iter().find(|(attr, _)| attr == name))
            .map(|(_, value)| value)
    }
}

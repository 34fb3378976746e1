use op_bench_core::{Framework, OpConfig};
use serde_json::json;

use crate::plan::{GraphPlan, OpCall, VarSpec};

/// PyTorch benchmark graph builder for op-bench
///
/// `torch.nn.functional.cross_entropy` fuses log-softmax and NLL over hard
/// labels on the last axis, which is why the normalizer narrows this path
/// for soft-label or non-default-axis configs before a plan is ever built.
pub struct PyTorchAdapter;

impl PyTorchAdapter {
    pub fn build_graph(config: &OpConfig) -> GraphPlan {
        // Framework projection: flat class-index labels.
        let config = config.to_pytorch();

        let variables = vec![
            VarSpec {
                name: "input".to_string(),
                shape: config.logits_shape.clone(),
                dtype: config.logits_dtype,
                stop_gradient: false,
            },
            VarSpec {
                name: "label".to_string(),
                shape: config.label_shape.clone(),
                dtype: config.label_dtype,
                stop_gradient: true,
            },
        ];

        let result = OpCall::new("torch.nn.functional.cross_entropy")
            .attr("weight", json!(null))
            .attr("ignore_index", json!(config.ignore_index))
            .attr("reduction", json!("none"));

        GraphPlan {
            framework: Framework::PyTorch,
            variables,
            ops: vec![result],
            feed_list: vec!["input".to_string(), "label".to_string()],
            fetch_list: vec!["result".to_string()],
            gradient_targets: if config.backward {
                vec!["input".to_string()]
            } else {
                Vec::new()
            },
        }
    }
}

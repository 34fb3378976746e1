use op_bench_core::{Framework, OpConfig};
use serde_json::json;

use crate::plan::{GraphPlan, OpCall, VarSpec};

/// TensorFlow benchmark graph builder for op-bench
///
/// TF's loss takes one-hot labels, so the plan carries an explicit
/// `tf.one_hot` step expanding the integer indices to `num_classes` before
/// the loss itself. The normalizer has already narrowed this path for
/// float-label or non-default-axis configs.
pub struct TensorFlowAdapter;

impl TensorFlowAdapter {
    pub fn build_graph(config: &OpConfig) -> GraphPlan {
        // Framework projection: label shape without the unit trailing axis.
        let config = config.to_tensorflow();

        let variables = vec![
            VarSpec {
                name: "logits".to_string(),
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

        let one_hot = OpCall::new("tf.one_hot")
            .attr("indices", json!("label"))
            .attr("depth", json!(config.num_classes));

        let result = OpCall::new("tf.compat.v1.losses.softmax_cross_entropy")
            .attr("reduction", json!("none"));

        GraphPlan {
            framework: Framework::TensorFlow,
            variables,
            ops: vec![one_hot, result],
            feed_list: vec!["logits".to_string(), "label".to_string()],
            fetch_list: vec!["result".to_string()],
            gradient_targets: if config.backward {
                vec!["logits".to_string()]
            } else {
                Vec::new()
            },
        }
    }
}

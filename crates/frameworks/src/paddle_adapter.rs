use op_bench_core::{Framework, OpConfig};
use serde_json::json;

use crate::plan::{GraphPlan, OpCall, VarSpec};

/// Native-framework benchmark graph.
///
/// The operator is invoked exactly as the config describes, soft labels and
/// non-default axes included, so this path is never narrowed out.
pub struct PaddleAdapter;

impl PaddleAdapter {
    pub fn build_graph(config: &OpConfig) -> GraphPlan {
        let config = config.to_paddle();

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

        let result = OpCall::new("paddle.nn.functional.softmax_with_cross_entropy")
            .attr("soft_label", json!(config.soft_label))
            .attr("ignore_index", json!(config.ignore_index))
            .attr("numeric_stable_mode", json!(true))
            .attr("return_softmax", json!(false))
            .attr("axis", json!(config.axis));

        GraphPlan {
            framework: Framework::Paddle,
            variables,
            ops: vec![result],
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

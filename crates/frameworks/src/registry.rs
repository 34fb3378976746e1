// crates/frameworks/src/registry.rs
use std::collections::BTreeMap;

use anyhow::Result;
use tracing::debug;

use op_bench_core::{Framework, OpConfig};

use crate::paddle_adapter::PaddleAdapter;
use crate::plan::GraphPlan;
use crate::pytorch_adapter::PyTorchAdapter;
use crate::tensorflow_adapter::TensorFlowAdapter;

/// A per-framework plan builder for one operator.
#[derive(Clone, Copy)]
pub struct PlanBuilder {
    pub framework: Framework,
    pub build: fn(&OpConfig) -> GraphPlan,
}

/// Explicit operator → builder mapping, assembled at startup.
///
/// There is no process-wide registration: the set of operators is exactly
/// what the constructor put in the map.
pub struct Registry {
    entries: BTreeMap<String, Vec<PlanBuilder>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registry holding every operator this crate ships adapters for.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for builder in [
            PlanBuilder {
                framework: Framework::Paddle,
                build: PaddleAdapter::build_graph,
            },
            PlanBuilder {
                framework: Framework::PyTorch,
                build: PyTorchAdapter::build_graph,
            },
            PlanBuilder {
                framework: Framework::TensorFlow,
                build: TensorFlowAdapter::build_graph,
            },
        ] {
            registry.register("softmax_with_cross_entropy", builder);
        }
        registry
    }

    pub fn register(&mut self, op: &str, builder: PlanBuilder) {
        self.entries.entry(op.to_string()).or_default().push(builder);
    }

    pub fn operators(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Build plans for every framework the config leaves enabled.
    pub fn plans_for(&self, config: &OpConfig) -> Result<Vec<GraphPlan>> {
        let builders = self.entries.get(&config.name).ok_or_else(|| {
            anyhow::anyhow!("No adapters registered for operator '{}'", config.name)
        })?;

        let plans: Vec<GraphPlan> = builders
            .iter()
            .filter(|builder| Self::enabled(config, builder.framework))
            .map(|builder| (builder.build)(config))
            .collect();

        debug!(
            op = %config.name,
            frameworks = plans.len(),
            "built benchmark plans"
        );
        Ok(plans)
    }

    fn enabled(config: &OpConfig, framework: Framework) -> bool {
        match framework {
            Framework::Paddle => true,
            Framework::PyTorch => config.run_torch,
            Framework::TensorFlow => config.run_tf,
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

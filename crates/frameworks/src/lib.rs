// SPDX-FileCopyrightText: 2025 Russ Fellows <russ.fellows@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod paddle_adapter;
pub mod plan;
pub mod pytorch_adapter;
pub mod registry;
pub mod tensorflow_adapter;


// Re-export main types
pub use paddle_adapter::PaddleAdapter;
pub use plan::{GraphPlan, OpCall, VarSpec};
pub use pytorch_adapter::PyTorchAdapter;
pub use registry::{PlanBuilder, Registry};
pub use tensorflow_adapter::TensorFlowAdapter;

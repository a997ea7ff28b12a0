pub mod explain_ctx;
pub mod explain_flow;

pub use explain_ctx::ExplainCtx;
pub use explain_flow::{split_chunks, ExplainFlow, NO_EXPLANATION};

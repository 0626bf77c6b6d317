mod evaluator;

pub use evaluator::{ArbitrationContext, IConsistencyEvaluator};

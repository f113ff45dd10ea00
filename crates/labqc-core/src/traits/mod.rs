//! Seams between the analyzer and its collaborators.

pub mod evaluator;
pub mod results_provider;

pub use evaluator::IRuleEvaluator;
pub use results_provider::IResultsProvider;

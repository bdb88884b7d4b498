pub mod catalog;
pub mod prompt;
pub mod reconcile;
pub mod sampler;
pub mod stats;

pub mod analysis;
pub mod market;
pub mod policy;
pub mod rules;
pub mod scorer;

pub use scorer::SuitabilityScorer;

pub mod classify;
pub mod normalize;
pub mod scorer;

pub use classify::TokenClassifier;
pub use scorer::LegibilityScorer;

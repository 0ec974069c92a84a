pub mod core;
pub mod export;
pub mod extract;
pub mod lexicon;
pub mod pipeline;
pub mod repair;
pub mod score;

pub use crate::core::model::{ClassificationResult, DocumentRecord};
pub use crate::lexicon::Lexicon;
pub use crate::repair::{RepairConfig, Repairer};
pub use crate::score::scorer::LegibilityScorer;

//! Recommendation models and the data they are fitted on

pub mod interactions;
pub mod popular;
pub mod registry;

pub use interactions::{load_interactions, read_interactions, Interaction, LoadError};
pub use popular::PopularRecommender;
pub use registry::{ModelRegistry, ModelRegistryBuilder, RankerError, Recommender};

/// Public name of the popularity model in `/recsys/reco/{model_name}/...`
pub const POPULAR_MODEL: &str = "popular";

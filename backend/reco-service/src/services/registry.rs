/// Model registry
///
/// Maps public model names to fitted, read-only recommenders. Built once
/// during startup and shared with request handlers through `AppState`.
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankerError {
    #[error("model has not been fitted")]
    NotFitted,
}

/// A model that can serve a ranked list of item ids.
pub trait Recommender: Send + Sync {
    fn recommend(&self, n: usize) -> Result<Vec<i64>, RankerError>;
}

#[derive(Default)]
pub struct ModelRegistryBuilder {
    models: BTreeMap<String, Arc<dyn Recommender>>,
}

impl ModelRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `model` under `name`, replacing any earlier registration.
    pub fn register<M>(mut self, name: impl Into<String>, model: M) -> Self
    where
        M: Recommender + 'static,
    {
        self.models.insert(name.into(), Arc::new(model));
        self
    }

    pub fn build(self) -> ModelRegistry {
        ModelRegistry {
            models: self.models,
        }
    }
}

/// Immutable name -> model mapping
#[derive(Clone, Default)]
pub struct ModelRegistry {
    models: BTreeMap<String, Arc<dyn Recommender>>,
}

impl ModelRegistry {
    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder::new()
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Recommender>> {
        self.models.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.models.keys().collect::<Vec<_>>())
            .finish()
    }
}

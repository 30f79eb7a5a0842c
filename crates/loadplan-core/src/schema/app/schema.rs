use super::{Builder, Model, ModelId};
use crate::{Error, Result};

use indexmap::IndexMap;

#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by ID
    pub fn model(&self, id: impl Into<ModelId>) -> Result<&Model> {
        let id = id.into();
        self.models
            .get(&id)
            .ok_or_else(|| Error::unknown_model(format!("{id:?}")))
    }

    /// Get a model by its declared name
    pub fn model_by_name(&self, name: &str) -> Result<&Model> {
        let name = super::Name::new(name);
        self.models
            .values()
            .find(|model| model.name == name)
            .ok_or_else(|| Error::unknown_model(format!("`{}`", name.upper_camel_case())))
    }
}

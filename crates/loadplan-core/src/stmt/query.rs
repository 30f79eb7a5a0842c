use super::{app, LoadOption, Result};

use std::collections::BTreeSet;

/// A query for records of one model, together with the loader directives
/// that control which of their columns and relations are fetched.
///
/// Queries are values: adding a directive returns a new query and leaves the
/// original untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Model the query selects
    root: app::ModelId,

    /// Loader directives in the order they were attached
    options: Vec<LoadOption>,
}

impl Query {
    pub fn select(root: impl Into<app::ModelId>) -> Self {
        Self {
            root: root.into(),
            options: vec![],
        }
    }

    /// The model the query's root entity is mapped to.
    pub fn root(&self) -> app::ModelId {
        self.root
    }

    pub fn options(&self) -> &[LoadOption] {
        &self.options
    }

    /// The attached directives, independent of attachment order.
    pub fn option_set(&self) -> BTreeSet<LoadOption> {
        self.options.iter().cloned().collect()
    }

    /// Returns a new query with `option` attached.
    ///
    /// Fails with an invalid load option error when `option` names a relation
    /// or column that `schema` does not define along the option's path.
    pub fn with_option(&self, schema: &app::Schema, option: LoadOption) -> Result<Query> {
        option.verify(schema, self.root)?;

        let mut query = self.clone();
        query.options.push(option);
        Ok(query)
    }

    /// Returns a new query with every option attached, failing on the first
    /// rejected option.
    pub fn with_options(
        &self,
        schema: &app::Schema,
        options: impl IntoIterator<Item = LoadOption>,
    ) -> Result<Query> {
        let mut query = self.clone();
        for option in options {
            option.verify(schema, query.root)?;
            query.options.push(option);
        }
        Ok(query)
    }
}

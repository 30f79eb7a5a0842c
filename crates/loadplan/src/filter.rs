//! A reusable projection for one serialization schema.

mod builder;
pub use builder::Builder;

use crate::{apply::Applicator, CyclePolicy, LoadPlan, NoLoadStyle, Planner};

use loadplan_core::{
    schema::{app, ser},
    stmt::{LoaderStrategy, Query},
    Error, Result,
};

/// Restricts queries to what one serialization schema serializes.
///
/// Build the filter once and apply it to every query whose results are
/// dumped through the schema. Each application plans afresh against the
/// metadata it is given.
#[derive(Debug, Clone)]
pub struct SchemaFilter {
    schema: ser::SchemaRef,
    loader: LoaderStrategy,
    cycle_policy: CyclePolicy,
    noload_style: NoLoadStyle,
}

impl SchemaFilter {
    /// A filter with the default configuration: relations keep the mapper's
    /// default loading.
    pub fn new(schema: impl Into<ser::SchemaRef>) -> Self {
        Self::builder(schema).build()
    }

    pub fn builder(schema: impl Into<ser::SchemaRef>) -> Builder {
        Builder::new(schema.into())
    }

    pub fn schema(&self) -> &ser::SchemaRef {
        &self.schema
    }

    pub fn loader(&self) -> LoaderStrategy {
        self.loader
    }

    /// Plan the filter's schema against `model`.
    pub fn plan(
        &self,
        app: &app::Schema,
        registry: &ser::Registry,
        model: app::ModelId,
    ) -> Result<LoadPlan> {
        Planner::builder(app, registry)
            .cycle_policy(self.cycle_policy)
            .build()
            .plan(self.schema.clone(), model)
    }

    /// Returns `query` with the filter's directives attached.
    ///
    /// When `model` is `None` the query's root model is planned against. An
    /// explicit `model` must be the query's root model.
    pub fn apply(
        &self,
        app: &app::Schema,
        registry: &ser::Registry,
        query: &Query,
        model: Option<app::ModelId>,
    ) -> Result<Query> {
        let model = match model {
            Some(model) if model != query.root() => {
                let planned = app.model(model)?;
                let root = app.model(query.root())?;
                return Err(Error::invalid_load_option(format!(
                    "plan for `{}` applied to a query rooted at `{}`",
                    planned.name.upper_camel_case(),
                    root.name.upper_camel_case(),
                )));
            }
            Some(model) => model,
            None => query.root(),
        };
        let plan = self.plan(app, registry, model)?;

        Applicator::new(app, self.loader)
            .noload_style(self.noload_style)
            .apply(query, &plan)
    }
}

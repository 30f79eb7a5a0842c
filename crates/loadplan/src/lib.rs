//! Derive the loader directives a query needs from the serialization schema
//! its results will be dumped through.
//!
//! Planning walks the schema's fields against the model's columns and
//! relations and produces a [`LoadPlan`] tree. Applying the plan attaches one
//! directive per column set and relation to the query, so that fetching the
//! root record loads exactly what the schema serializes and nothing else.

mod apply;
pub use apply::{apply, NoLoadStyle};

pub mod filter;
pub use filter::SchemaFilter;

mod plan;
pub use plan::LoadPlan;

pub mod planner;
pub use planner::{CyclePolicy, Planner};

pub use loadplan_core as core;
pub use loadplan_core::{Error, Result};

use loadplan_core::{
    schema::{app, ser},
    stmt,
};

/// Plan the loader directives for `schema` against `model` with the default
/// planner configuration.
pub fn plan(
    app: &app::Schema,
    registry: &ser::Registry,
    schema: impl Into<ser::SchemaRef>,
    model: impl Into<app::ModelId>,
) -> Result<LoadPlan> {
    Planner::new(app, registry).plan(schema, model)
}

/// Restrict `query` to what `schema` serializes.
///
/// When `model` is `None` the query's root model is used. With `eager`,
/// relations are fetched together with their parent; otherwise they keep the
/// mapper's default (lazy) loading.
pub fn project(
    app: &app::Schema,
    registry: &ser::Registry,
    query: &stmt::Query,
    schema: impl Into<ser::SchemaRef>,
    model: Option<app::ModelId>,
    eager: bool,
) -> Result<stmt::Query> {
    SchemaFilter::builder(schema)
        .eager(eager)
        .build()
        .apply(app, registry, query, model)
}

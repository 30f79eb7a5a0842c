//! Derive a [`LoadPlan`] from a serialization schema and a model.

mod builder;
pub use builder::Builder;

mod cx;
use cx::Cx;

use crate::LoadPlan;

use loadplan_core::{
    schema::{app, ser},
    Error, Result,
};

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

/// What the planner does when a schema nests back into a (schema, model)
/// pair that is already being planned on the current path.
///
/// Schemas are identified by name: two schema instances registered or built
/// under the same name count as the same schema, even when their fields
/// differ. Only the current path is considered, so the same pair on sibling
/// branches is planned again.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum CyclePolicy {
    /// Stop recursing. The relation is still loaded, without restricting
    /// what is loaded beneath it.
    #[default]
    Truncate,

    /// Fail with a cyclic schema error.
    Error,
}

/// Plans schemas against the models of one app schema.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    app: &'a app::Schema,
    registry: &'a ser::Registry,
    cycle_policy: CyclePolicy,
}

/// A (schema, model) pair on the path currently being planned.
#[derive(Debug)]
struct Visit {
    schema: String,
    model: app::ModelId,
    model_name: String,

    /// Relation followed from the parent visit
    via: Option<String>,
}

impl<'a> Planner<'a> {
    pub fn new(app: &'a app::Schema, registry: &'a ser::Registry) -> Self {
        Self {
            app,
            registry,
            cycle_policy: CyclePolicy::default(),
        }
    }

    pub fn builder(app: &'a app::Schema, registry: &'a ser::Registry) -> Builder<'a> {
        Builder::new(app, registry)
    }

    pub fn cycle_policy(&self) -> CyclePolicy {
        self.cycle_policy
    }

    /// Plan `schema` against `model`.
    pub fn plan(
        &self,
        schema: impl Into<ser::SchemaRef>,
        model: impl Into<app::ModelId>,
    ) -> Result<LoadPlan> {
        let schema = self.registry.instantiate(&schema.into())?;
        let model = self.app.model(model)?;

        self.plan_node(Cx::new(&schema, model), &mut vec![], None)
    }

    /// Plan `schema` against `model`, descending only into the listed
    /// relations at the root. Relations that are not listed are still loaded
    /// or suppressed as usual, but without a nested plan.
    pub fn plan_only(
        &self,
        schema: impl Into<ser::SchemaRef>,
        model: impl Into<app::ModelId>,
        relations: &[&str],
    ) -> Result<LoadPlan> {
        let schema = self.registry.instantiate(&schema.into())?;
        let model = self.app.model(model)?;
        let only: IndexSet<String> = relations.iter().map(|name| name.to_string()).collect();

        let cx = Cx {
            filter_only: Some(&only),
            ..Cx::new(&schema, model)
        };

        self.plan_node(cx, &mut vec![], None)
    }

    fn plan_node(&self, cx: Cx<'_>, path: &mut Vec<Visit>, via: Option<&str>) -> Result<LoadPlan> {
        let noload = cx.noload_link_field_names();
        let reload = cx.reload_field_names();
        let load_only = cx.load_only_field_names();

        debug!(
            "planning {} for {}; load_only={:?} noload={:?} reload={:?}",
            cx.schema.name,
            cx.model.name.upper_camel_case(),
            load_only,
            noload,
            reload,
        );

        for name in cx.unaccounted_for_field_names() {
            match cx.renamed_attr(name) {
                Some(renamed) => trace!("{}.{name} reads {renamed:?}", cx.schema.name),
                None => trace!("{}.{name} is not an attribute; ignoring", cx.schema.name),
            }
        }

        path.push(Visit {
            schema: cx.schema.name.clone(),
            model: cx.model.id,
            model_name: cx.model.name.upper_camel_case(),
            via: via.map(str::to_string),
        });

        let mut children = IndexMap::new();

        for name in cx.link_field_names() {
            if let Some(child) = self.plan_link(&cx, name, path)? {
                children.insert(name.to_string(), child);
            }
        }

        path.pop();

        Ok(LoadPlan {
            load_only: load_only.into_iter().map(str::to_string).collect(),
            noload: noload.into_iter().map(str::to_string).collect(),
            reload: reload.into_iter().map(str::to_string).collect(),
            children,
        })
    }

    /// Plan the target of the relation `name`, if the schema nests into it.
    fn plan_link(&self, cx: &Cx<'_>, name: &str, path: &mut Vec<Visit>) -> Result<Option<LoadPlan>> {
        let Some(next_schema) = cx.schema.field(name).and_then(ser::Field::nested_schema) else {
            trace!("{}.{name} is not nested; loading without a plan", cx.schema.name);
            return Ok(None);
        };

        let next_model = self.app.model(cx.model.relation_target(name)?)?;
        let next_schema = self.registry.instantiate(next_schema)?;

        let recurs = path
            .iter()
            .any(|visit| visit.schema == next_schema.name && visit.model == next_model.id);

        if recurs {
            match self.cycle_policy {
                CyclePolicy::Truncate => {
                    trace!(
                        "{}.{name} nests back into {}; truncating",
                        cx.schema.name,
                        next_schema.name
                    );
                    return Ok(None);
                }
                CyclePolicy::Error => {
                    return Err(Error::cyclic_schema(describe_cycle(
                        path,
                        name,
                        &next_schema.name,
                        &next_model.name.upper_camel_case(),
                    )));
                }
            }
        }

        self.plan_node(Cx::new(&next_schema, next_model), path, Some(name))
            .map(Some)
    }
}

fn describe_cycle(path: &[Visit], name: &str, schema: &str, model: &str) -> String {
    let mut out = String::new();

    for visit in path {
        if let Some(via) = &visit.via {
            out.push_str(&format!(" -> {via} -> "));
        }
        out.push_str(&format!("{}({})", visit.schema, visit.model_name));
    }

    out.push_str(&format!(" -> {name} -> {schema}({model})"));
    out
}

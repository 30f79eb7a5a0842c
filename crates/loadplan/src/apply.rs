use crate::LoadPlan;

use loadplan_core::{
    schema::app,
    stmt::{LoadOption, LoadPath, LoaderStrategy, Query},
    Result,
};

use log::debug;

/// How relations a plan suppresses are expressed on the query.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum NoLoadStyle {
    /// One `noload` directive per suppressed relation.
    #[default]
    PerRelation,

    /// One wildcard `noload` directive per entity. Relations the plan loads
    /// are named explicitly and take precedence over the wildcard.
    Wildcard,
}

/// Attach the directives of `plan` to a copy of `query`.
///
/// Relations the plan loads are fetched with `loader`; every nested plan is
/// scoped to the path of loader hops leading to it. Fails if `app` rejects a
/// directive, which happens when the plan was computed against different
/// metadata.
pub fn apply(
    app: &app::Schema,
    query: &Query,
    plan: &LoadPlan,
    loader: LoaderStrategy,
) -> Result<Query> {
    Applicator::new(app, loader).apply(query, plan)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Applicator<'a> {
    app: &'a app::Schema,
    loader: LoaderStrategy,
    noload_style: NoLoadStyle,
}

impl<'a> Applicator<'a> {
    pub(crate) fn new(app: &'a app::Schema, loader: LoaderStrategy) -> Self {
        Self {
            app,
            loader,
            noload_style: NoLoadStyle::default(),
        }
    }

    pub(crate) fn noload_style(self, noload_style: NoLoadStyle) -> Self {
        Self {
            noload_style,
            ..self
        }
    }

    pub(crate) fn apply(&self, query: &Query, plan: &LoadPlan) -> Result<Query> {
        let mut options = vec![];
        self.project(plan, &LoadPath::root(), &mut options);

        debug!(
            "attaching {} load options with {} to query for {:?}",
            options.len(),
            self.loader,
            query.root()
        );

        query.with_options(self.app, options)
    }

    fn project(&self, plan: &LoadPlan, prefix: &LoadPath, options: &mut Vec<LoadOption>) {
        options.push(LoadOption::load_only(prefix.clone(), &plan.load_only));

        match self.noload_style {
            NoLoadStyle::PerRelation => {
                for name in &plan.noload {
                    options.push(LoadOption::noload(prefix.clone(), name));
                }
            }
            NoLoadStyle::Wildcard => {
                options.push(LoadOption::noload_all(prefix.clone()));
            }
        }

        // Planned children are always reloaded; hand-built plans may nest
        // under other names.
        let names = plan.reload.iter().chain(
            plan.children
                .keys()
                .filter(|name| !plan.reload.contains(*name)),
        );

        for name in names {
            options.push(LoadOption::load(prefix.clone(), self.loader, name));

            if let Some(child) = plan.children.get(name) {
                self.project(child, &prefix.join(self.loader, name), options);
            }
        }
    }
}

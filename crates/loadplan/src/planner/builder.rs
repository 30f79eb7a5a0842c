use super::{CyclePolicy, Planner};

use loadplan_core::schema::{app, ser};

/// Configures a [`Planner`].
#[derive(Debug)]
pub struct Builder<'a> {
    app: &'a app::Schema,
    registry: &'a ser::Registry,
    cycle_policy: CyclePolicy,
}

impl<'a> Builder<'a> {
    pub(super) fn new(app: &'a app::Schema, registry: &'a ser::Registry) -> Self {
        Self {
            app,
            registry,
            cycle_policy: CyclePolicy::default(),
        }
    }

    /// Set how schemas that nest back into themselves are handled
    pub fn cycle_policy(&mut self, cycle_policy: CyclePolicy) -> &mut Self {
        self.cycle_policy = cycle_policy;
        self
    }

    pub fn build(&self) -> Planner<'a> {
        Planner {
            app: self.app,
            registry: self.registry,
            cycle_policy: self.cycle_policy,
        }
    }
}

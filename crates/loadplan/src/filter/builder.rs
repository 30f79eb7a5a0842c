use super::SchemaFilter;
use crate::{CyclePolicy, NoLoadStyle};

use loadplan_core::{schema::ser, stmt::LoaderStrategy};

/// Configures a [`SchemaFilter`].
#[derive(Debug, Clone)]
pub struct Builder {
    schema: ser::SchemaRef,
    eager: bool,
    cycle_policy: CyclePolicy,
    noload_style: NoLoadStyle,
}

impl Builder {
    pub(super) fn new(schema: ser::SchemaRef) -> Self {
        Self {
            schema,
            eager: false,
            cycle_policy: CyclePolicy::default(),
            noload_style: NoLoadStyle::default(),
        }
    }

    /// Fetch loaded relations together with their parent instead of keeping
    /// the mapper's default (lazy) loading.
    pub fn eager(&mut self, eager: bool) -> &mut Self {
        self.eager = eager;
        self
    }

    /// Set how schemas that nest back into themselves are handled
    pub fn cycle_policy(&mut self, cycle_policy: CyclePolicy) -> &mut Self {
        self.cycle_policy = cycle_policy;
        self
    }

    /// Set how suppressed relations are expressed on the query
    pub fn noload_style(&mut self, noload_style: NoLoadStyle) -> &mut Self {
        self.noload_style = noload_style;
        self
    }

    pub fn build(&self) -> SchemaFilter {
        SchemaFilter {
            schema: self.schema.clone(),
            loader: LoaderStrategy::from(self.eager),
            cycle_policy: self.cycle_policy,
            noload_style: self.noload_style,
        }
    }
}

use loadplan_core::schema::{app, ser};

use indexmap::IndexSet;

/// The inputs of one planning step.
///
/// Every derived name set is computed on demand from the schema and model;
/// nothing is cached on the context.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cx<'a> {
    pub(crate) schema: &'a ser::Schema,
    pub(crate) model: &'a app::Model,

    /// Restricts which relations are planned into. Does not affect which
    /// relations are loaded or suppressed.
    pub(crate) filter_only: Option<&'a IndexSet<String>>,
}

/// A schema field whose name is not a model attribute but whose source
/// attribute is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Renamed<'a> {
    Link(&'a str),
    Nonlink(&'a str),
}

impl<'a> Cx<'a> {
    pub(crate) fn new(schema: &'a ser::Schema, model: &'a app::Model) -> Self {
        Self {
            schema,
            model,
            filter_only: None,
        }
    }

    pub(crate) fn schema_field_names(&self) -> IndexSet<&'a str> {
        self.schema.field_names().collect()
    }

    pub(crate) fn class_link_field_names(&self) -> IndexSet<&'a str> {
        self.model.relation_names().collect()
    }

    pub(crate) fn class_nonlink_field_names(&self) -> IndexSet<&'a str> {
        self.model.column_names().collect()
    }

    /// Relations the schema names directly.
    pub(crate) fn link_field_names(&self) -> IndexSet<&'a str> {
        let class_links = self.class_link_field_names();

        self.schema_field_names()
            .into_iter()
            .filter(|name| class_links.contains(name))
            .filter(|name| match self.filter_only {
                Some(only) => only.contains(*name),
                None => true,
            })
            .collect()
    }

    /// Schema fields that are neither a column nor a relation of the model.
    pub(crate) fn unaccounted_for_field_names(&self) -> IndexSet<&'a str> {
        let nonlinks = self.class_nonlink_field_names();
        let links = self.class_link_field_names();

        self.schema_field_names()
            .into_iter()
            .filter(|name| !nonlinks.contains(name) && !links.contains(name))
            .collect()
    }

    /// Resolve an unaccounted-for field through its source attribute.
    pub(crate) fn renamed_attr(&self, name: &str) -> Option<Renamed<'a>> {
        let attribute = self.schema.field(name)?.attribute.as_deref()?;

        if self.model.is_relation(attribute) {
            Some(Renamed::Link(attribute))
        } else if self.model.is_column(attribute) {
            Some(Renamed::Nonlink(attribute))
        } else {
            None
        }
    }

    fn renamed_attr_fields(&self) -> impl Iterator<Item = Renamed<'a>> + '_ {
        self.unaccounted_for_field_names()
            .into_iter()
            .filter_map(|name| self.renamed_attr(name))
    }

    pub(crate) fn renamed_attr_link_fields(&self) -> IndexSet<&'a str> {
        self.renamed_attr_fields()
            .filter_map(|renamed| match renamed {
                Renamed::Link(name) => Some(name),
                Renamed::Nonlink(_) => None,
            })
            .collect()
    }

    pub(crate) fn renamed_attr_nonlink_fields(&self) -> IndexSet<&'a str> {
        self.renamed_attr_fields()
            .filter_map(|renamed| match renamed {
                Renamed::Nonlink(name) => Some(name),
                Renamed::Link(_) => None,
            })
            .collect()
    }

    /// Relations the schema reaches neither by name nor through a renamed
    /// field.
    pub(crate) fn noload_link_field_names(&self) -> IndexSet<&'a str> {
        let schema_fields = self.schema_field_names();
        let renamed = self.renamed_attr_link_fields();

        self.class_link_field_names()
            .into_iter()
            .filter(|name| !schema_fields.contains(name) && !renamed.contains(name))
            .collect()
    }

    pub(crate) fn reload_field_names(&self) -> IndexSet<&'a str> {
        let noload = self.noload_link_field_names();

        self.class_link_field_names()
            .into_iter()
            .filter(|name| !noload.contains(name))
            .collect()
    }

    pub(crate) fn load_only_field_names(&self) -> IndexSet<&'a str> {
        let schema_fields = self.schema_field_names();

        let mut names: IndexSet<_> = self
            .class_nonlink_field_names()
            .into_iter()
            .filter(|name| schema_fields.contains(name))
            .collect();

        names.extend(self.renamed_attr_nonlink_fields());
        names
    }
}

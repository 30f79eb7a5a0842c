use super::{app, Error, LoadPath, LoaderStrategy, Result};

use std::{collections::BTreeSet, fmt};

/// A loader directive scoped to a path from the query root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadOption {
    /// Entity the directive applies to
    pub path: LoadPath,

    pub directive: Directive,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Directive {
    /// Load only these columns of the entity; every other column is deferred.
    /// Primary key columns are always loaded.
    LoadOnly(BTreeSet<String>),

    /// Never load the selected relations of the entity.
    NoLoad(Selector),

    /// Load the named relation of the entity with the given strategy.
    Load(LoaderStrategy, String),
}

/// Relations a [`Directive::NoLoad`] applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Selector {
    Relation(String),

    /// Every relation that no more specific directive names.
    All,
}

impl LoadOption {
    pub fn load_only<I, S>(path: LoadPath, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path,
            directive: Directive::LoadOnly(names.into_iter().map(Into::into).collect()),
        }
    }

    pub fn noload(path: LoadPath, relation: &str) -> Self {
        Self {
            path,
            directive: Directive::NoLoad(Selector::Relation(relation.to_string())),
        }
    }

    pub fn noload_all(path: LoadPath) -> Self {
        Self {
            path,
            directive: Directive::NoLoad(Selector::All),
        }
    }

    pub fn load(path: LoadPath, strategy: LoaderStrategy, relation: &str) -> Self {
        Self {
            path,
            directive: Directive::Load(strategy, relation.to_string()),
        }
    }

    /// Check the option against `schema`, starting at the model `root`.
    ///
    /// Every hop must name a relation of the model reached so far, and the
    /// directive must name columns or relations of the model at the end of
    /// the path.
    pub fn verify(&self, schema: &app::Schema, root: app::ModelId) -> Result<()> {
        self.verify_impl(schema, root)
            .map_err(|err| err.context(Error::invalid_load_option(self.to_string())))
    }

    fn verify_impl(&self, schema: &app::Schema, root: app::ModelId) -> Result<()> {
        let mut model = schema.model(root)?;

        for hop in self.path.hops() {
            model = schema.model(model.relation_target(&hop.relation)?)?;
        }

        match &self.directive {
            Directive::LoadOnly(names) => {
                for name in names {
                    if !model.is_column(name) {
                        crate::bail!(
                            "`{}::{}` is not a column",
                            model.name.upper_camel_case(),
                            name
                        );
                    }
                }
            }
            Directive::NoLoad(Selector::Relation(name)) | Directive::Load(_, name) => {
                model.relation(name)?;
            }
            Directive::NoLoad(Selector::All) => {}
        }

        Ok(())
    }
}

impl fmt::Display for LoadOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.path.is_root() {
            write!(f, "{}.", self.path)?;
        }

        match &self.directive {
            Directive::LoadOnly(names) => {
                f.write_str("load_only(")?;
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(name)?;
                }
                f.write_str(")")
            }
            Directive::NoLoad(Selector::Relation(name)) => write!(f, "noload({name})"),
            Directive::NoLoad(Selector::All) => f.write_str("noload(*)"),
            Directive::Load(strategy, name) => write!(f, "{strategy}({name})"),
        }
    }
}

use super::LoaderStrategy;
use std::fmt;

/// The chain of loader hops from the query root to a related entity.
///
/// Directives scoped to a path apply to the entity reached by following each
/// hop's relation, loaded with the hop's strategy. The empty path is the
/// query root.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadPath {
    hops: Vec<Hop>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hop {
    pub strategy: LoaderStrategy,
    pub relation: String,
}

impl LoadPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Returns the path extended by one hop.
    pub fn join(&self, strategy: LoaderStrategy, relation: &str) -> Self {
        let mut hops = self.hops.clone();
        hops.push(Hop {
            strategy,
            relation: relation.to_string(),
        });
        Self { hops }
    }
}

impl<'a> FromIterator<(LoaderStrategy, &'a str)> for LoadPath {
    fn from_iter<T: IntoIterator<Item = (LoaderStrategy, &'a str)>>(iter: T) -> Self {
        let hops = iter
            .into_iter()
            .map(|(strategy, relation)| Hop {
                strategy,
                relation: relation.to_string(),
            })
            .collect();
        Self { hops }
    }
}

impl fmt::Display for LoadPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, hop) in self.hops.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{hop}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.strategy, self.relation)
    }
}

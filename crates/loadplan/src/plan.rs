use indexmap::{IndexMap, IndexSet};

/// Loader instructions for one (schema, model) pair.
///
/// Plans form a tree: each entry of `children` governs the target of one
/// relation. Equality ignores the order names were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadPlan {
    /// Columns to load. Every other column is deferred.
    pub load_only: IndexSet<String>,

    /// Relations that are never loaded.
    pub noload: IndexSet<String>,

    /// Relations that are loaded with the caller's loader strategy.
    pub reload: IndexSet<String>,

    /// Plans for the targets of relations the schema nests into.
    pub children: IndexMap<String, LoadPlan>,
}

impl LoadPlan {
    pub fn child(&self, relation: &str) -> Option<&LoadPlan> {
        self.children.get(relation)
    }

    /// Number of nodes on the longest path from this node to a leaf,
    /// including this node.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .values()
            .map(LoadPlan::depth)
            .max()
            .unwrap_or(0)
    }

    /// Visit every node in pre-order, together with the relation names
    /// leading to it from this node.
    pub fn walk(&self) -> impl Iterator<Item = (Vec<&str>, &LoadPlan)> + '_ {
        let mut stack = vec![(vec![], self)];

        std::iter::from_fn(move || {
            let (path, node) = stack.pop()?;

            for (name, child) in node.children.iter().rev() {
                let mut child_path = path.clone();
                child_path.push(name.as_str());
                stack.push((child_path, child));
            }

            Some((path, node))
        })
    }
}

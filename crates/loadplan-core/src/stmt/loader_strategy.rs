use std::fmt;

/// How a relation is fetched when it is loaded.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LoaderStrategy {
    /// Keep the mapper default: the relation is fetched when first accessed.
    #[default]
    Default,

    /// Fetch the relation together with its parent in a single combined query.
    Joined,
}

impl LoaderStrategy {
    pub fn is_eager(self) -> bool {
        matches!(self, Self::Joined)
    }
}

impl From<bool> for LoaderStrategy {
    /// `true` selects [`LoaderStrategy::Joined`].
    fn from(eager: bool) -> Self {
        if eager {
            Self::Joined
        } else {
            Self::Default
        }
    }
}

impl fmt::Display for LoaderStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("defaultload"),
            Self::Joined => f.write_str("joinedload"),
        }
    }
}

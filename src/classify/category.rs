//! Commit types and the fixed type-to-category table.

/// Recognized conventional commit types.
///
/// Maintenance types (`chore`, `ci`, `build`, `test`) are recognized so
/// they can be excluded; anything else falls through to [`Category::Other`]
/// downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Fix,
    Perf,
    Refactor,
    Style,
    Improve,
    Docs,
    Test,
    Build,
    Ci,
    Chore,
}

impl std::str::FromStr for CommitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feat" => Ok(Self::Feat),
            "fix" => Ok(Self::Fix),
            "perf" => Ok(Self::Perf),
            "refactor" => Ok(Self::Refactor),
            "style" => Ok(Self::Style),
            "improve" => Ok(Self::Improve),
            "docs" => Ok(Self::Docs),
            "test" => Ok(Self::Test),
            "build" => Ok(Self::Build),
            "ci" => Ok(Self::Ci),
            "chore" => Ok(Self::Chore),
            _ => Err(format!("Unknown commit type: {}", s)),
        }
    }
}

impl CommitType {
    /// Map a commit type to its changelog category.
    ///
    /// `None` marks maintenance-only types that are dropped from the
    /// changelog entirely.
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Feat => Some(Category::Features),
            Self::Fix => Some(Category::BugFixes),
            Self::Perf | Self::Refactor | Self::Style | Self::Improve => {
                Some(Category::Improvements)
            }
            Self::Docs => Some(Category::Documentation),
            Self::Test | Self::Build | Self::Ci | Self::Chore => None,
        }
    }

    /// Whether this type is excluded from the changelog.
    pub fn is_excluded(&self) -> bool {
        self.category().is_none()
    }
}

/// Type prefixes dropped even when the subject is not a well-formed
/// conventional commit (catches `ci:tweak pipeline` without the space).
pub const EXCLUDED_PREFIXES: [&str; 4] = ["chore", "ci", "build", "test"];

/// Changelog categories in rendering priority order.
///
/// The derived `Ord` follows declaration order, which is the order
/// sections appear in the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Features,
    BugFixes,
    Improvements,
    Documentation,
    Other,
}

impl Category {
    /// Get the display name for the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::BugFixes => "Bug Fixes",
            Self::Improvements => "Improvements",
            Self::Documentation => "Documentation",
            Self::Other => "Other",
        }
    }
}

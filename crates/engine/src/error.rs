use std::fmt;

/// A dangling reference found while resolving one grid set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// `extends` names a grid set that is not in the table.
    UnknownExtendsTarget { grid: String, target: String },
    /// A breakpoint sub-record carries `extends`, but the parent's `extends`
    /// target is missing or has no sub-record for that breakpoint.
    UnknownBreakpointExtendsTarget {
        grid: String,
        breakpoint: String,
        target: Option<String>,
    },
}

impl ResolveError {
    /// Name of the grid set whose resolution failed.
    pub fn grid(&self) -> &str {
        match self {
            Self::UnknownExtendsTarget { grid, .. } => grid,
            Self::UnknownBreakpointExtendsTarget { grid, .. } => grid,
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownExtendsTarget { grid, target } => {
                write!(f, "grid set '{grid}': extends unknown grid set '{target}'")
            }
            Self::UnknownBreakpointExtendsTarget {
                grid,
                breakpoint,
                target: Some(target),
            } => write!(
                f,
                "grid set '{grid}', breakpoint '{breakpoint}': grid set '{target}' has no '{breakpoint}' entry to extend"
            ),
            Self::UnknownBreakpointExtendsTarget {
                grid,
                breakpoint,
                target: None,
            } => write!(
                f,
                "grid set '{grid}', breakpoint '{breakpoint}': extends requires the grid set itself to extend another"
            ),
        }
    }
}

impl std::error::Error for ResolveError {}

#[derive(Debug)]
pub enum GridError {
    /// A theme value could not be read as the expected table.
    ThemeValue { key: String, message: String },
    /// Every grid set that failed to resolve during one pass.
    Unresolved(Vec<ResolveError>),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThemeValue { key, message } => {
                write!(f, "theme key '{key}': {message}")
            }
            Self::Unresolved(errors) => {
                write!(f, "{} grid set(s) failed to resolve", errors.len())?;
                for err in errors {
                    write!(f, "\n  - {err}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for GridError {}

impl From<Vec<ResolveError>> for GridError {
    fn from(errors: Vec<ResolveError>) -> Self {
        Self::Unresolved(errors)
    }
}

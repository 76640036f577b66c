//! Operator-supplied inputs, validated at the boundary.

use std::fmt;
use std::path::PathBuf;

use crate::domain::AppError;

/// Validated project name: non-empty after trimming.
///
/// No further restrictions are applied; any name the target filesystem
/// accepts is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Parse a raw project name, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("Project name cannot be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate the destination folder input and turn it into a path.
///
/// Only emptiness is rejected; the path does not have to exist yet.
pub fn destination_path(raw: &str) -> Result<PathBuf, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Destination path cannot be empty".to_string()));
    }
    Ok(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_name_is_trimmed() {
        let name = ProjectName::parse("  demo1  ").expect("name should parse");
        assert_eq!(name.as_str(), "demo1");
    }

    #[test]
    fn empty_project_name_is_rejected() {
        assert!(matches!(ProjectName::parse(""), Err(AppError::Validation(_))));
        assert!(matches!(ProjectName::parse("   \t"), Err(AppError::Validation(_))));
    }

    #[test]
    fn destination_path_is_trimmed() {
        let path = destination_path(" /tmp/work ").expect("path should parse");
        assert_eq!(path, PathBuf::from("/tmp/work"));
    }

    #[test]
    fn empty_destination_is_rejected() {
        assert!(matches!(destination_path("  "), Err(AppError::Validation(_))));
    }
}

//! Catalog errors.

use std::path::PathBuf;

use spacekit::table::TableError;
use spacekit::ConfigurationError;

/// Errors from loading or rendering a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The YAML description could not be parsed.
    #[error("invalid catalog description: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A button entry has a configuration the resolver rejects.
    #[error("section '{section}', group '{group}', entry {entry}: {source}")]
    InvalidEntry {
        section: String,
        group: String,
        entry: usize,
        #[source]
        source: ConfigurationError,
    },

    /// The page template failed to render.
    #[error("failed to render catalog page: {0}")]
    Template(#[from] minijinja::Error),

    /// The table demo failed to render.
    #[error(transparent)]
    Table(#[from] TableError),

    /// The page could not be written.
    #[error("failed to write catalog page '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_entry_display() {
        let err = CatalogError::InvalidEntry {
            section: "Icon only".into(),
            group: "Pairs".into(),
            entry: 2,
            source: ConfigurationError::FabRequiresIcon,
        };
        let msg = err.to_string();
        assert!(msg.contains("Icon only"));
        assert!(msg.contains("entry 2"));
        assert!(msg.ends_with("fab requires icon"));
    }
}

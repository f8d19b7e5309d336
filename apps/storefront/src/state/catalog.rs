//! # Catalog State
//!
//! Read-only reference data: menu, categories, payment methods, site
//! settings.
//!
//! Loaded once at startup and shared behind an `Arc`. It is never mutated
//! afterwards, so no lock is needed and every `MenuItem` a command borrows
//! stays stable for the whole customization interaction.

use std::path::Path;
use std::sync::Arc;

use inasal_core::{Catalog, CoreError};
use tracing::{debug, info, warn};

/// Errors while loading the catalog or an order request file.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid catalog {path}: {source}")]
    InvalidCatalog {
        path: String,
        #[source]
        source: CoreError,
    },
}

/// Shared catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    /// Wraps an already-built catalog.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Reads and parses a catalog JSON file, rejecting impossible prices.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StateError> {
        let path = path.as_ref();
        let path_display = path.display().to_string();
        debug!(path = %path_display, "Loading catalog");

        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StateError::Io {
                path: path_display.clone(),
                source,
            })?;

        let catalog = Catalog::from_json(&json).map_err(|source| StateError::Parse {
            path: path_display.clone(),
            source,
        })?;

        catalog.validate_prices().map_err(|source| {
            warn!(path = %path_display, error = %source, "Catalog rejected");
            StateError::InvalidCatalog {
                path: path_display.clone(),
                source,
            }
        })?;

        info!(
            path = %path_display,
            items = catalog.items.len(),
            categories = catalog.categories.len(),
            payment_methods = catalog.payment_methods.len(),
            "Catalog loaded"
        );

        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("inasal-{}-{}.json", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_load_catalog() {
        let path = temp_file("catalog-ok");
        tokio::fs::write(
            &path,
            r#"{ "items": [ { "id": "paa", "name": "Paa", "category": "inasal", "base_price_cents": 12000 } ] }"#,
        )
        .await
        .unwrap();

        let state = CatalogState::load(&path).await.unwrap();
        assert_eq!(state.catalog().items.len(), 1);
        assert_eq!(state.catalog().require_item("paa").unwrap().name, "Paa");

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = CatalogState::load(temp_file("does-not-exist"))
            .await
            .unwrap_err();
        assert!(matches!(err, StateError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_rejects_bad_prices() {
        let path = temp_file("catalog-bad-prices");
        tokio::fs::write(
            &path,
            r#"{ "items": [ { "id": "paa", "name": "Paa", "category": "inasal",
                 "base_price_cents": 10000, "discount_price_cents": 12000, "is_on_discount": true } ] }"#,
        )
        .await
        .unwrap();

        let err = CatalogState::load(&path).await.unwrap_err();
        assert!(matches!(err, StateError::InvalidCatalog { .. }));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_load_invalid_json() {
        let path = temp_file("catalog-bad");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let err = CatalogState::load(&path).await.unwrap_err();
        assert!(matches!(err, StateError::Parse { .. }));

        tokio::fs::remove_file(&path).await.unwrap();
    }
}

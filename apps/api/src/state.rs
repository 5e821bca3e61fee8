use std::sync::Arc;

use crate::career::catalog::CareerCatalog;
use crate::config::Config;
use crate::extraction::DocumentExtractor;
use crate::skills::vocabulary::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled skill patterns. Immutable after startup, shared without locking.
    pub vocabulary: Arc<SkillVocabulary>,
    pub catalog: Arc<CareerCatalog>,
    /// Pluggable document decoder. Default: PdfTextExtractor.
    pub extractor: Arc<dyn DocumentExtractor>,
}

impl AppState {
    /// Compiles the vocabulary from the catalog's skill list.
    pub fn new(
        config: Config,
        catalog: CareerCatalog,
        extractor: Arc<dyn DocumentExtractor>,
    ) -> Self {
        let vocabulary = SkillVocabulary::compile(&catalog.skills);
        AppState {
            config,
            vocabulary: Arc::new(vocabulary),
            catalog: Arc::new(catalog),
            extractor,
        }
    }
}

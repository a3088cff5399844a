use std::sync::Arc;

use crate::analysis::prompts::PromptPolicy;
use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup; nothing in it is mutated per request.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable PDF text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable generation backend. Default: GeminiClient.
    pub generator: Arc<dyn TextGenerator>,
    pub prompt_policy: PromptPolicy,
    pub config: Config,
}

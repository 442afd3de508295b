use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::composer::{compose_body, compose_prompt, compose_title};
use crate::context::ContextLoader;
use crate::image::ImageSynthesizer;
use crate::models::{CompanyContext, ComposedArticle, GenerationRequest};
use crate::normalize::normalize;
use crate::seed::compute_seed;
use crate::storage::{AssetPublisher, PLACEHOLDER_IMAGE_URL};

/// Number of input keywords echoed back in the response.
const ECHOED_KEYWORDS: usize = 5;

/// Orchestrates one generation request: load context → compute seed →
/// compose title and body → normalize length → compose image prompt →
/// synthesize image → publish → assemble the article.
///
/// Only validation (upstream, in the HTTP handler) aborts a request;
/// every failure here degrades to a default and the caller still gets a
/// complete article.
pub struct ArticlePipeline {
    loader: Arc<dyn ContextLoader>,
    publisher: AssetPublisher,
    synthesizer: ImageSynthesizer,
}

impl ArticlePipeline {
    pub fn new(
        loader: Arc<dyn ContextLoader>,
        publisher: AssetPublisher,
        synthesizer: ImageSynthesizer,
    ) -> Self {
        Self {
            loader,
            publisher,
            synthesizer,
        }
    }

    #[instrument(skip(self, req), fields(
        site_id = %req.site_id,
        keyword_count = req.keywords.len(),
        tone = ?req.tone,
        length = ?req.length,
    ))]
    pub async fn process(&self, req: GenerationRequest) -> ComposedArticle {
        let company = self
            .loader
            .load(&req.site_id)
            .await
            .unwrap_or_else(CompanyContext::default);

        let seed = compute_seed(&req.keywords);
        info!(seed, "Computed article seed");

        let title = compose_title(&req.keywords, req.tone, seed);
        let draft = compose_body(&req.keywords, &company, seed);
        let content = normalize(&draft, req.length.target());

        let image_prompt = compose_prompt(&req.keywords, &company);
        let image_url = self.publish_image(&image_prompt, seed).await;

        info!(
            title = %title,
            content_bytes = content.len(),
            "Article generation completed"
        );

        ComposedArticle {
            title,
            content,
            image_prompt,
            image_url,
            keywords: req.keywords.into_iter().take(ECHOED_KEYWORDS).collect(),
        }
    }

    /// Synthesize and publish the header image. Any failure degrades to
    /// the placeholder URL; the article text is never blocked by image
    /// problems.
    async fn publish_image(&self, prompt: &str, seed: u64) -> String {
        let bytes = match self.synthesizer.synthesize(prompt) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Image synthesis failed, using placeholder");
                return PLACEHOLDER_IMAGE_URL.to_string();
            }
        };

        // Time-based hint, unique enough to avoid accidental overwrite.
        let file_name = format!("article-{}-{seed}.svg", Utc::now().format("%Y%m%d_%H%M%S"));
        self.publisher.publish(bytes, &file_name).await
    }
}

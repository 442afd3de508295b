// article-generation-service/src/image/mod.rs

mod svg;

use chrono::Utc;
use handlebars::Handlebars;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::seed::pick;

/// Fallback image keyword when no prompt token survives filtering.
const FALLBACK_KEYWORD: &str = "entreprise";

/// Prompt tokens never used as the image keyword: the fixed words of the
/// prompt template plus common French filler.
const STOPWORDS: &[&str] = &[
    "illustration",
    "professionnelle",
    "professionnel",
    "représentant",
    "style",
    "épuré",
    "ambiance",
    "visuel",
    "article",
    "blog",
    "moderne",
    "entreprise",
    "une",
    "pour",
    "avec",
    "dans",
    "les",
    "des",
    "sur",
];

/// 800×400 SVG document shell. Fragments are raw-interpolated, visible
/// labels go through Handlebars escaping.
const SVG_TEMPLATE: &str = r##"<svg width="800" height="400" viewBox="0 0 800 400" xmlns="http://www.w3.org/2000/svg">{{{background}}}{{{shapes}}}{{{icon}}}<text x="400" y="290" text-anchor="middle" font-family="Arial, sans-serif" font-size="38" font-weight="bold" fill="#ffffff">{{keyword}}</text><text x="400" y="332" text-anchor="middle" font-family="Arial, sans-serif" font-size="18" fill="#ffffff" opacity="0.85">{{subtitle}}</text>{{{bottom}}}</svg>"##;

/// Builds the synthesized header image for an article.
pub struct ImageSynthesizer {
    handlebars: Handlebars<'static>,
}

impl ImageSynthesizer {
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_template_string("svg", SVG_TEMPLATE)?;
        Ok(Self { handlebars })
    }

    /// Synthesize the SVG image bytes for a prompt.
    ///
    /// The style variants are indexed by a fresh time-derived image seed;
    /// the two accent colors are drawn uniformly at random within the
    /// seed-chosen palette. That mix of determinism and genuine randomness
    /// is observable behavior (same prompt, same moment: same palette,
    /// different exact colors) and is kept on purpose.
    pub fn synthesize(&self, prompt: &str) -> Result<Vec<u8>> {
        let keyword = extract_keyword(prompt);

        let mut rng = rand::thread_rng();
        let image_seed =
            (Utc::now().timestamp_millis() + rng.gen_range(0..1000i64)).unsigned_abs();

        let palette = pick(image_seed, svg::PALETTES);
        let c1 = palette.choose(&mut rng).copied().unwrap_or("#333333");
        let c2 = palette.choose(&mut rng).copied().unwrap_or("#666666");

        debug!(keyword = %keyword, image_seed, "Synthesizing article image");

        let document = self.render(&keyword, image_seed, c1, c2)?;
        Ok(document.into_bytes())
    }

    /// Assemble the document for an explicit seed and color pair. Pure in
    /// its inputs.
    fn render(&self, keyword: &str, image_seed: u64, c1: &str, c2: &str) -> Result<String> {
        let initial: String = keyword
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default();

        let context = serde_json::json!({
            "background": svg::background(image_seed, c1, c2),
            "shapes": svg::shapes(image_seed, c1, c2),
            "icon": svg::icon(image_seed, c1, &initial),
            "bottom": svg::bottom(image_seed, c1, c2),
            "keyword": keyword,
            "subtitle": pick(image_seed, svg::SUBTITLE_OPTIONS),
        });

        Ok(self.handlebars.render("svg", &context)?)
    }
}

/// First prompt token that is neither short nor a stopword, punctuation
/// trimmed; falls back to a fixed literal.
fn extract_keyword(prompt: &str) -> String {
    prompt
        .split(' ')
        .map(|token| token.trim_matches(|c: char| ",.;:!?'\"".contains(c)))
        .find(|token| {
            token.chars().count() >= 4 && !STOPWORDS.contains(&token.to_lowercase().as_str())
        })
        .unwrap_or(FALLBACK_KEYWORD)
        .to_string()
}

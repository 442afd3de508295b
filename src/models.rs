// article-generation-service/src/models.rs

use serde::{Deserialize, Serialize};

/// Narrative tone of the generated article. Unrecognized values fall back
/// to `Professional` rather than failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Formal,
}

impl Tone {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("casual") => Tone::Casual,
            Some("formal") => Tone::Formal,
            _ => Tone::Professional,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleLength {
    Short,
    Medium,
    Long,
}

impl ArticleLength {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("short") => ArticleLength::Short,
            Some("long") => ArticleLength::Long,
            _ => ArticleLength::Medium,
        }
    }

    pub fn target(self) -> LengthTarget {
        match self {
            ArticleLength::Short => LengthTarget {
                min_words: 200,
                max_words: 400,
            },
            ArticleLength::Medium => LengthTarget {
                min_words: 800,
                max_words: 1200,
            },
            ArticleLength::Long => LengthTarget {
                min_words: 1200,
                max_words: 2000,
            },
        }
    }
}

/// Word-count bounds for the resolved length bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthTarget {
    pub min_words: usize,
    pub max_words: usize,
}

/// Validated generation request. `keywords` is non-empty; the first entry
/// is the main keyword, the next two are secondary.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub keywords: Vec<String>,
    pub site_id: String,
    pub tone: Tone,
    pub length: ArticleLength,
}

/// Optional business profile used to personalize the article. Any missing
/// field degrades to generic phrasing, never to an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyContext {
    pub name: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedArticle {
    pub title: String,
    pub content: String,
    pub image_prompt: String,
    pub image_url: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResponse {
    pub success: bool,
    pub article: ComposedArticle,
}

impl GenerationResponse {
    pub fn success(article: ComposedArticle) -> Self {
        Self {
            success: true,
            article,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tone_falls_back_to_professional() {
        assert_eq!(Tone::parse(Some("casual")), Tone::Casual);
        assert_eq!(Tone::parse(Some("formal")), Tone::Formal);
        assert_eq!(Tone::parse(Some("sarcastic")), Tone::Professional);
        assert_eq!(Tone::parse(None), Tone::Professional);
    }

    #[test]
    fn unknown_length_falls_back_to_medium() {
        assert_eq!(ArticleLength::parse(Some("short")), ArticleLength::Short);
        assert_eq!(ArticleLength::parse(Some("gigantic")), ArticleLength::Medium);
        assert_eq!(ArticleLength::parse(None), ArticleLength::Medium);
    }

    #[test]
    fn length_bucket_table_is_fixed() {
        assert_eq!(
            ArticleLength::Short.target(),
            LengthTarget { min_words: 200, max_words: 400 }
        );
        assert_eq!(
            ArticleLength::Medium.target(),
            LengthTarget { min_words: 800, max_words: 1200 }
        );
        assert_eq!(
            ArticleLength::Long.target(),
            LengthTarget { min_words: 1200, max_words: 2000 }
        );
    }
}

// article-generation-service/src/composer/prompt.rs

use crate::models::CompanyContext;

const GENERIC_COMPANY: &str = "une entreprise moderne";

/// Build the image-generation prompt: one fixed sentence interpolating the
/// main keyword and the company name (generic fallback when absent).
pub fn compose_prompt(keywords: &[String], company: &CompanyContext) -> String {
    let main = keywords.first().map(String::as_str).unwrap_or_default();
    let name = company.name.as_deref().unwrap_or(GENERIC_COMPANY);
    format!(
        "Illustration professionnelle représentant {main}, style épuré, ambiance {name}, visuel d'article de blog"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_keyword_and_company() {
        let company = CompanyContext {
            name: Some("Cabinet Durand".into()),
            ..Default::default()
        };
        let prompt = compose_prompt(&["comptabilité".into()], &company);
        assert!(prompt.contains("comptabilité"));
        assert!(prompt.contains("Cabinet Durand"));
    }

    #[test]
    fn prompt_falls_back_to_generic_company() {
        let prompt = compose_prompt(&["paie".into()], &CompanyContext::default());
        assert!(prompt.contains(GENERIC_COMPANY));
    }
}

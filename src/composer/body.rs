// article-generation-service/src/composer/body.rs

use crate::composer::{capitalize, fill, templates as t};
use crate::models::CompanyContext;
use crate::seed::pick;

/// Maximum number of dedicated keyword sections.
const MAX_KEYWORD_SECTIONS: usize = 3;

/// Assemble the article body HTML in fixed section order. Every variant
/// choice is `pick(seed, bucket)` against that bucket; missing company
/// fields omit the dependent clause entirely. Pure in (inputs, seed).
pub fn compose_body(keywords: &[String], company: &CompanyContext, seed: u64) -> String {
    let mut html = String::with_capacity(8 * 1024);
    let main = keywords.first().map(String::as_str).unwrap_or_default();

    // 1. Introduction
    html.push_str("<p>");
    html.push_str(&fill(pick(seed, t::INTROS), &[("keyword", main)]));
    if let (Some(name), Some(description)) = (&company.name, &company.description) {
        html.push(' ');
        html.push_str(&fill(
            t::INTRO_COMPANY,
            &[("name", name), ("description", description)],
        ));
    }
    html.push(' ');
    html.push_str(t::INTRO_CLOSING);
    html.push_str("</p>");

    // 2. Context paragraph
    html.push_str("<p>");
    html.push_str(pick(seed, t::CONTEXTS));
    html.push(' ');
    html.push_str(pick(seed, t::BENEFITS));
    html.push(' ');
    html.push_str(t::CONTEXT_CLOSING);
    html.push_str("</p>");

    // 3. One section per keyword, first three at most
    for keyword in keywords.iter().take(MAX_KEYWORD_SECTIONS) {
        push_keyword_section(&mut html, keyword, company, seed);
    }

    // 4. Analysis section with the two sub-scenarios
    html.push_str("<h2>");
    html.push_str(pick(seed, t::ANALYSIS_TITLES));
    html.push_str("</h2><p>");
    html.push_str(pick(seed, t::ANALYSIS_INTROS));
    html.push_str("</p><h3>");
    html.push_str(pick(seed, t::SCENARIO_PROGRESSIVE_TITLES));
    html.push_str("</h3><p>");
    html.push_str(pick(seed, t::SCENARIO_PROGRESSIVE_DESCRIPTIONS));
    html.push_str("</p><h3>");
    html.push_str(pick(seed, t::SCENARIO_COMPLETE_TITLES));
    html.push_str("</h3><p>");
    html.push_str(pick(seed, t::SCENARIO_COMPLETE_DESCRIPTIONS));
    html.push_str("</p>");

    // 5. Advice section
    html.push_str("<h2>");
    html.push_str(pick(seed, t::ADVICE_TITLES));
    html.push_str("</h2><p>");
    html.push_str(pick(seed, t::ADVICE_INTROS));
    html.push_str("</p><ol>");
    for item in pick(seed, t::ADVICE_SETS) {
        html.push_str("<li>");
        html.push_str(item);
        html.push_str("</li>");
    }
    html.push_str("</ol>");

    // 6. Challenges section
    html.push_str("<h2>");
    html.push_str(pick(seed, t::CHALLENGE_TITLES));
    html.push_str("</h2><p>");
    html.push_str(pick(seed, t::CHALLENGE_INTROS));
    html.push_str("</p><ul>");
    for item in pick(seed, t::CHALLENGE_SETS) {
        html.push_str("<li>");
        html.push_str(item);
        html.push_str("</li>");
    }
    html.push_str("</ul>");

    // 7. Conclusion
    html.push_str("<h2>");
    html.push_str(pick(seed, t::CONCLUSION_TITLES));
    html.push_str("</h2><p>");
    html.push_str(pick(seed, t::CONCLUSION_INTROS));
    if let Some(name) = &company.name {
        html.push(' ');
        match &company.city {
            Some(city) => html.push_str(&fill(
                t::CONCLUSION_CONTACT,
                &[("name", name), ("city", city)],
            )),
            None => html.push_str(&fill(t::CONCLUSION_CONTACT_NO_CITY, &[("name", name)])),
        }
    }
    html.push_str("</p><p>");
    html.push_str(pick(seed, t::PERSPECTIVES));
    html.push_str("</p><p>");
    html.push_str(pick(seed, t::CONCLUSION_BENEFITS));
    html.push_str("</p>");

    // 8. Call-to-action block
    html.push_str("<div class=\"cta\"><h2>");
    html.push_str(pick(seed, t::CTA_TITLES));
    html.push_str("</h2><p>");
    html.push_str(pick(seed, t::CTA_INTROS));
    html.push_str("</p>");
    if let Some(phone) = &company.phone {
        html.push_str("<p>");
        html.push_str(&fill(t::CTA_PHONE, &[("phone", phone)]));
        html.push_str("</p>");
    }
    if let Some(email) = &company.email {
        html.push_str("<p>");
        html.push_str(&fill(t::CTA_EMAIL, &[("email", email)]));
        html.push_str("</p>");
    }
    html.push_str("<p>");
    html.push_str(pick(seed, t::CTA_OFFERS));
    html.push_str("</p></div>");

    html
}

fn push_keyword_section(html: &mut String, keyword: &str, company: &CompanyContext, seed: u64) {
    let capitalized = capitalize(keyword);

    html.push_str("<h2>");
    html.push_str(&fill(pick(seed, t::SECTION_TITLES), &[("keyword", &capitalized)]));
    html.push_str("</h2><p>");
    html.push_str(&fill(pick(seed, t::SECTION_INTROS), &[("keyword", keyword)]));
    if let Some(name) = &company.name {
        html.push(' ');
        html.push_str(&fill(t::SECTION_COMPANY, &[("name", name)]));
    }
    html.push_str("</p><ul>");
    for item in pick(seed, t::SECTION_LISTS) {
        html.push_str("<li>");
        html.push_str(item);
        html.push_str("</li>");
    }
    html.push_str("</ul><p>");
    html.push_str(&fill(pick(seed, t::SECTION_DETAILS), &[("keyword", keyword)]));
    html.push_str("</p><p>");
    html.push_str(&fill(pick(seed, t::SECTION_IMPACTS), &[("keyword", keyword)]));
    html.push_str("</p>");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn full_company() -> CompanyContext {
        CompanyContext {
            name: Some("Cabinet Durand".into()),
            description: Some("expertise comptable et conseil".into()),
            city: Some("Lyon".into()),
            phone: Some("01 23 45 67 89".into()),
            email: Some("contact@durand.fr".into()),
        }
    }

    #[test]
    fn body_is_pure_in_seed_and_inputs() {
        let keywords = kw(&["comptabilité", "paie"]);
        let company = full_company();
        let a = compose_body(&keywords, &company, 98765);
        let b = compose_body(&keywords, &company, 98765);
        assert_eq!(a, b);
    }

    #[test]
    fn one_section_per_keyword_capped_at_three() {
        let company = CompanyContext::default();
        let one = compose_body(&kw(&["a"]), &company, 1);
        let five = compose_body(&kw(&["a", "b", "c", "d", "e"]), &company, 1);
        // 5 fixed <h2> slots (analysis, advice, challenges, conclusion,
        // CTA) plus one per keyword section.
        assert_eq!(one.matches("<h2>").count(), 6);
        assert_eq!(five.matches("<h2>").count(), 8);
    }

    #[test]
    fn missing_company_omits_dependent_clauses() {
        let body = compose_body(&kw(&["fiscalité"]), &CompanyContext::default(), 4);
        assert!(!body.contains("{name}"));
        assert!(!body.contains("{phone}"));
        assert!(!body.contains("{email}"));
        assert!(!body.contains("Appelez-nous"));
        assert!(!body.contains("Écrivez-nous"));
        assert!(!body.contains("se tient à votre disposition"));
    }

    #[test]
    fn full_company_personalizes_every_clause() {
        let body = compose_body(&kw(&["fiscalité"]), &full_company(), 4);
        assert!(body.contains("Cabinet Durand"));
        assert!(body.contains("Lyon"));
        assert!(body.contains("01 23 45 67 89"));
        assert!(body.contains("contact@durand.fr"));
    }

    #[test]
    fn company_without_city_uses_cityless_contact_clause() {
        let mut company = full_company();
        company.city = None;
        let body = compose_body(&kw(&["paie"]), &company, 11);
        assert!(body.contains("Cabinet Durand"));
        assert!(!body.contains("basée à"));
    }

    #[test]
    fn cta_block_is_present_and_closed() {
        let body = compose_body(&kw(&["paie"]), &CompanyContext::default(), 2);
        assert!(body.contains("<div class=\"cta\">"));
        assert!(body.ends_with("</div>"));
    }
}

// article-generation-service/src/composer/mod.rs

mod body;
mod prompt;
pub mod templates;
mod title;

pub use body::compose_body;
pub use prompt::compose_prompt;
pub use title::compose_title;

/// Substitute `{key}` placeholders in a template.
fn fill(template: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in pairs {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

/// Uppercase the first character, accents included.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

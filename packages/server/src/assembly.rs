//! Webpage assembly: placeholder substitution and object-storage keys.

pub const TITLE_PLACEHOLDER: &str = "{{TITLE}}";
pub const INTRODUCTION_PLACEHOLDER: &str = "{{INTRODUCTION}}";
pub const BODY_PLACEHOLDER: &str = "{{BODY}}";
pub const AVATAR_PLACEHOLDER: &str = "{{AVATAR}}";
pub const AUTHOR_NAME_PLACEHOLDER: &str = "{{AUTHOR_NAME}}";
pub const AUTHOR_BIO_PLACEHOLDER: &str = "{{AUTHOR_BIO}}";
pub const READING_TIME_PLACEHOLDER: &str = "{{READING_TIME}}";

/// Stored section text substituted into a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub title: String,
    pub introduction: String,
    pub body: String,
}

/// Replace the three content placeholders with section text.
///
/// The template is scanned once, left to right. Substituted section text is
/// copied verbatim and never scanned again, so placeholder tokens inside a
/// section survive as literal text. Author and reading-time placeholders are
/// left in place.
pub fn fill(template: &str, sections: &Sections) -> String {
    let substitutions = [
        (TITLE_PLACEHOLDER, sections.title.as_str()),
        (INTRODUCTION_PLACEHOLDER, sections.introduction.as_str()),
        (BODY_PLACEHOLDER, sections.body.as_str()),
    ];

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match substitutions
            .iter()
            .find(|(token, _)| tail.starts_with(token))
        {
            Some((token, text)) => {
                out.push_str(text);
                rest = &tail[token.len()..];
            }
            None => {
                out.push_str("{{");
                rest = &tail[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Object key for a published webpage.
pub fn webpage_key(user_id: i32, topic_id: i32) -> String {
    format!("webpages/{user_id}_{topic_id}.html")
}

/// Object key for a generated image.
pub fn image_key(seed: u32) -> String {
    format!("uploads/{}", image_file_name(seed))
}

pub fn image_file_name(seed: u32) -> String {
    format!("generated_image_{seed}.png")
}

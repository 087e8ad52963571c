use super::SectionKind;
use crate::assembly::{
    AUTHOR_BIO_PLACEHOLDER, AUTHOR_NAME_PLACEHOLDER, AVATAR_PLACEHOLDER, BODY_PLACEHOLDER,
    INTRODUCTION_PLACEHOLDER, READING_TIME_PLACEHOLDER, TITLE_PLACEHOLDER,
};

/// Render the instruction for a fixed blog section.
pub fn section_prompt(kind: SectionKind, topic: &str, instruction: &str) -> String {
    let instruction = instruction.trim();
    match kind {
        SectionKind::Title => format!(
            "System: You are a title-generating assistant that writes SEO-optimized blog titles. \
             Output only the title itself.\n\n\
             Human: Write a short, single-line title for a blog post about \"{topic}\". \
             Only the title is to be generated: no quotes, no markdown, no explanation.\
             {}",
            extra(instruction)
        ),
        SectionKind::Introduction => format!(
            "System: You are a content-generating assistant that only writes SEO-optimized \
             blog introductions. You may use HTML and inline CSS for better visuals, and the \
             whole introduction must be wrapped inside \
             <div class=\"introduction\"><!-- introduction content with html tags goes here --></div>. \
             Only the content is to be generated.\n\n\
             Human: Write an engaging introduction paragraph for a blog post about \"{topic}\".\
             {}",
            extra(instruction)
        ),
        SectionKind::Body => format!(
            "System: You are a content-generating assistant that strictly follows instructions. \
             Generate only the body content of a blog post about \"{topic}\", without a title \
             and without an introduction.\n\
             - Your response must only contain HTML content.\n\
             - Do not use <h1> headings; start section headings at <h2>.\n\
             - Wrap the content inside:\n\
             <div class=\"body\">\n    <!-- body content with html tags goes here -->\n</div>\
             {}",
            extra(instruction)
        ),
    }
}

/// Render the instruction for free-form generation or revision.
pub fn free_form_prompt(topic: &str, prior_content: Option<&str>, instruction: &str) -> String {
    let instruction = instruction.trim();
    match prior_content.map(str::trim).filter(|c| !c.is_empty()) {
        None => format!(
            "System: You are a content-generating assistant for a blog about \"{topic}\". \
             Return only the requested content, formatted as HTML where formatting helps. \
             Do not add explanations, preambles or commentary.\n\n\
             Human: {instruction}"
        ),
        Some(content) => format!(
            "System: You are an editing assistant for a blog about \"{topic}\". You revise \
             existing content according to the user's instruction. Return only the revised \
             content, keeping its HTML structure unless told otherwise. Do not add \
             explanations, preambles or commentary.\n\n\
             Human: Here is the current content:\n\
             <content>\n{content}\n</content>\n\n\
             Revise it according to this instruction: {instruction}"
        ),
    }
}

/// Render the instruction for a full-page HTML/CSS template with placeholder tokens.
pub fn template_prompt(instruction: &str) -> String {
    format!(
        "System: Generate a professional blog webpage template using only HTML and CSS that \
         resembles popular platforms like Medium or LinkedIn articles. The template must include \
         the following placeholders, which will be replaced with content blocks:\n\
         1. {TITLE_PLACEHOLDER}\n\
         2. {INTRODUCTION_PLACEHOLDER}\n\
         3. {BODY_PLACEHOLDER}\n\n\
         Design requirements:\n\
         - Clean typography with proper spacing and line height for readability.\n\
         - Proper visual hierarchy to guide readers through the content.\n\
         - A visually appealing webpage.\n\n\
         Additional elements to include:\n\
         - Author bio section with avatar placeholder (use {AVATAR_PLACEHOLDER}, {AUTHOR_NAME_PLACEHOLDER}, {AUTHOR_BIO_PLACEHOLDER}).\n\
         - Estimated reading time with placeholder (use {READING_TIME_PLACEHOLDER}).\n\n\
         Use only HTML and CSS (no JavaScript).\n\n\
         IMPORTANT: Your response must ONLY contain the complete HTML and CSS code. Any \
         explanations, descriptions or additional information must be included as HTML comments \
         using the format: <!-- Additional information from the model: explanation here -->\n\n\
         Human: {}\n\nAssistant: Webpage code",
        instruction.trim()
    )
}

fn extra(instruction: &str) -> String {
    if instruction.is_empty() {
        String::new()
    } else {
        format!("\n\nAdditional instructions: {instruction}")
    }
}

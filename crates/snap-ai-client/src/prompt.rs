//! Prompt construction for the metadata lookup.

/// Build the instruction sent to Gemini for a single link.
pub fn build_metadata_prompt(url: &str) -> String {
    format!(
        r#"Search the web for this YouTube or Instagram link and find its real metadata: {url}

Return the following as JSON:
1. The exact title of the video (title)
2. The channel or profile name (author)
3. The platform name (platform)
4. A short explanation, 10-15 words, of what the video is about (summary)"#
    )
}

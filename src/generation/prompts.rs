// Prompt builders for the generation service.
//
// The prompt is fixed: a system instruction constraining the assistant to
// evidence-based, citation-aware responses, and a user message embedding the
// caller's text.

/// System instruction sent with every generation request.
pub fn system() -> &'static str {
    "You are a helpful assistant that provides accurate, evidence-based \
     information about reproductive health and pregnancy options. Always cite \
     reliable sources and avoid misinformation."
}

/// User message embedding the content under analysis.
pub fn user(content: &str) -> String {
    format!(
        "Based on this content: '{content}', generate a fact-checked, \
         informative response that addresses any inaccuracies or provides \
         additional context."
    )
}

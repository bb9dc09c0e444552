// src/persona/resolver.rs
// Bot-type token -> persona document filename

/// Personas with hand-authored document names, in display order.
const KNOWN_PERSONAS: &[(&str, &str)] = &[
    ("agriculture", "Agricultural Decision Optimizer.json"),
    ("hospital", "General Hospital Patient Navigator.json"),
    ("cookie", "Online Cookie Shop Customer Support Chatbot.json"),
    ("school", "School IT Helper.json"),
    ("hotel", "Voice-Activated Hotel In-Room Assistant.json"),
];

/// Returns the document filename for a bot-type token.
///
/// Known tokens map to their authored document names; anything else is used
/// verbatim as the filename stem (`"<token>.json"`). No normalization happens
/// here. The config store decides whether the resulting name is safe to open.
pub fn resolve_filename(bot_type: &str) -> String {
    KNOWN_PERSONAS
        .iter()
        .find(|(token, _)| *token == bot_type)
        .map(|(_, filename)| (*filename).to_string())
        .unwrap_or_else(|| format!("{bot_type}.json"))
}

/// Tokens and document names of the built-in personas.
pub fn known_personas() -> &'static [(&'static str, &'static str)] {
    KNOWN_PERSONAS
}

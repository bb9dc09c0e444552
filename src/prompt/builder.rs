use crate::persona::PersonaConfig;

const PREAMBLE: &str = "You are a specialized assistant.";

/// Builds the system prompt for a persona.
///
/// The persona document is embedded verbatim as pretty-printed JSON (two-space
/// indent, original key order), followed by the fixed instructions block.
/// Output depends only on the document, so equal inputs give identical prompts.
pub fn build_system_prompt(config: &PersonaConfig) -> String {
    let mut prompt = String::new();

    // 1. Preamble
    prompt.push_str(PREAMBLE);
    prompt.push_str("\n\n");

    // 2. The persona document itself
    prompt.push_str("Configuration:\n");
    prompt.push_str(&format!("{config:#}"));
    prompt.push_str("\n\n");

    // 3. Directives
    prompt.push_str("Instructions:\n");
    prompt.push_str("- Stay within your primaryFunction.\n");
    prompt.push_str("- Respect constraints and escalation rules defined in the configuration.\n");

    prompt
}

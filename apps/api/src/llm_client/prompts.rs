// Shared prompt fragments.
// Each feature that calls the model defines its own prompts.rs alongside it.

/// Closing instruction for prompts whose answer is fed to the JSON-array parser.
/// Models do not always follow it, which is why the parser has fallbacks.
pub const RAW_JSON_ARRAY_ONLY: &str = "IMPORTANT: Return ONLY the raw JSON array without \
    markdown formatting, code blocks, or additional text.";

use adoptify::infrastructure::observability::sanitize_prompt;

#[test]
fn given_blank_prompt_when_sanitizing_then_empty_marker() {
    assert_eq!(sanitize_prompt("   \n"), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_unchanged() {
    assert_eq!(sanitize_prompt("  Meet Luna  "), "Meet Luna");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncated_with_length() {
    let prompt = "é".repeat(150);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.starts_with(&"é".repeat(100)));
    assert!(sanitized.ends_with("... (150 chars total)"));
}

#[test]
fn given_secrets_when_sanitizing_then_every_occurrence_is_redacted() {
    let sanitized =
        sanitize_prompt("auth Bearer abc123 then api_key=xyz&token=t0k and Bearer def456");

    assert_eq!(
        sanitized,
        "auth Bearer [REDACTED] then api_key=[REDACTED]&token=[REDACTED] and Bearer [REDACTED]"
    );
}

//! Input validation for the toolbar form fields.

/// Validates a server base URL for the roster endpoint.
pub fn validate_server_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("Server URL cannot be empty".to_string());
    }

    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| "Server URL must start with http:// or https://".to_string())?;

    if rest.is_empty() {
        return Err("Server URL is missing a host".to_string());
    }

    if url.contains(|c: char| c.is_whitespace() || c.is_control()) {
        return Err("Server URL contains invalid characters".to_string());
    }

    Ok(())
}

/// Validates the operator display name.
pub fn validate_display_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Display name cannot be empty".to_string());
    }

    if name.len() > 32 {
        return Err("Display name too long (max 32 characters)".to_string());
    }

    if name.contains(|c: char| c.is_control()) {
        return Err("Display name contains invalid characters".to_string());
    }

    Ok(())
}

/// Sanitizes a message by removing control characters and capping length.
pub fn sanitize_message(msg: &str) -> String {
    msg.chars()
        .filter(|&c| c != '\r' && c != '\n' && c != '\0')
        .take(500)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_server_url() {
        assert!(validate_server_url("http://127.0.0.1:5000").is_ok());
        assert!(validate_server_url("https://chat.example.com").is_ok());

        assert!(validate_server_url("").is_err());
        assert!(validate_server_url("127.0.0.1:5000").is_err()); // Missing scheme
        assert!(validate_server_url("http://").is_err()); // Missing host
        assert!(validate_server_url("http://bad host").is_err()); // Space
    }

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("alice").is_ok());
        assert!(validate_display_name("Bob 123").is_ok());

        assert!(validate_display_name("").is_err());
        assert!(validate_display_name("   ").is_err());
        assert!(validate_display_name(&"a".repeat(33)).is_err());
        assert!(validate_display_name("bad\nname").is_err());
    }

    #[test]
    fn test_sanitize_message() {
        assert_eq!(sanitize_message("Hello, world!"), "Hello, world!");
        assert_eq!(sanitize_message("Line1\nLine2"), "Line1Line2");
        assert_eq!(sanitize_message("CR\rLF"), "CRLF");
        assert_eq!(sanitize_message(&"x".repeat(600)), "x".repeat(500));
    }
}

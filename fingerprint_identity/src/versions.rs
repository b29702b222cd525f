use std::ops::RangeInclusive;

/// Chrome major versions a generated user-agent may report.
pub const CHROME_MAJOR_VERSIONS: RangeInclusive<u32> = 128..=138;

/// The WebKit and Safari token version Chrome has frozen on.
pub const WEBKIT_VERSION: &str = "537.36";

/// The reduced user-agent Chrome ships.
pub const USER_AGENT_TEMPLATE: &str =
    "Mozilla/5.0 ({os}) AppleWebKit/{webkit} (KHTML, like Gecko) Chrome/{chrome} Safari/{webkit}";

/// The GREASE brand Chrome lists next to its real brands.
pub const NOT_A_BRAND: &str = "Not.A/Brand";

/// The GREASE brand version.
pub const NOT_A_BRAND_VERSION: &str = "99";

/// Fill the user-agent template.
pub fn build_user_agent(os_token: &str, chrome_major: u32) -> String {
    USER_AGENT_TEMPLATE
        .replacen("{os}", os_token, 1)
        .replacen("{chrome}", &format!("{chrome_major}.0.0.0"), 1)
        .replace("{webkit}", WEBKIT_VERSION)
}

/// The full Chrome version embedded in a user-agent.
pub fn chrome_full_version(user_agent: &str) -> Option<&str> {
    user_agent
        .split_whitespace()
        .find_map(|s| s.strip_prefix("Chrome/"))
}

/// The major Chrome version embedded in a user-agent.
pub fn chrome_major_version(user_agent: &str) -> Option<&str> {
    chrome_full_version(user_agent).and_then(|v| v.split('.').next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_user_agent() {
        let ua = build_user_agent("X11; Linux x86_64", 131);
        assert_eq!(
            ua,
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
        );
        assert_eq!(chrome_full_version(&ua), Some("131.0.0.0"));
        assert_eq!(chrome_major_version(&ua), Some("131"));
    }

    #[test]
    fn test_chrome_version_missing() {
        assert_eq!(chrome_full_version("curl/8.0"), None);
        assert_eq!(chrome_major_version("curl/8.0"), None);
    }
}

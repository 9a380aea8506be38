use serde::{Deserialize, Serialize};

/// Per-user settings supplied by the external auth/session provider.
///
/// The workspace treats both values as opaque strings; validation and
/// storage belong to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub github_token: String,

    #[serde(default)]
    pub openai_api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = UserSettings::default();
        assert!(settings.github_token.is_empty());
        assert!(settings.openai_api_key.is_empty());
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = UserSettings {
            github_token: "ghp_abc".to_string(),
            openai_api_key: "sk-xyz".to_string(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: UserSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_payload() {
        // Provider responses may omit fields that were never set
        let json = r#"{"github_token": "ghp_abc"}"#;
        let settings: UserSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.github_token, "ghp_abc");
        assert!(settings.openai_api_key.is_empty());
    }
}

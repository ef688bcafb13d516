use serde::{Deserialize, Serialize};

/// One feedback entry as typed into the form and sent over the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl FeedbackSubmission {
    /// Empty and whitespace-only phones count as "no phone".
    pub fn normalized_phone(&self) -> Option<&str> {
        self.phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
    }
}

/// Uniform response shape for every endpoint outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResult {
    pub success: bool,
    pub message: String,
}

impl ApiResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FeedbackSubmission;

    #[test]
    fn test_normalized_phone() {
        let mut data = FeedbackSubmission {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
        };
        assert_eq!(data.normalized_phone(), None);

        data.phone = Some("".to_string());
        assert_eq!(data.normalized_phone(), None);

        data.phone = Some("   ".to_string());
        assert_eq!(data.normalized_phone(), None);

        data.phone = Some(" +15551234567 ".to_string());
        assert_eq!(data.normalized_phone(), Some("+15551234567"));
    }

    #[test]
    fn test_phone_omitted_on_wire() {
        let data = FeedbackSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
        };

        assert_eq!(
            serde_json::to_string(&data).unwrap(),
            r#"{"name":"Ada","email":"ada@example.com"}"#
        );
    }
}

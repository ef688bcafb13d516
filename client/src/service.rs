use feedback::payloads::{ApiResult, FeedbackSubmission};
use reqwest::Client;

/// Submits feedback to the endpoint. Every outcome comes back as an
/// [`ApiResult`]; transport failures and error statuses are folded into the
/// failure shape so the caller has one path for displaying anything.
pub async fn submit_feedback(client: &Client, endpoint: &str, data: &FeedbackSubmission) -> ApiResult {
    match try_submit(client, endpoint, data).await {
        Ok(result) => result,
        Err(e) => ApiResult::failure(e.to_string()),
    }
}

async fn try_submit(
    client: &Client,
    endpoint: &str,
    data: &FeedbackSubmission,
) -> Result<ApiResult, reqwest::Error> {
    let response = client.post(endpoint).json(data).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let message = match response.json::<ApiResult>().await {
            Ok(result) => result.message,
            Err(_) => format!("HTTP error! status: {status}"),
        };

        return Ok(ApiResult::failure(message));
    }

    response.json().await
}

#[cfg(test)]
mod tests {
    use super::submit_feedback;
    use feedback::payloads::FeedbackSubmission;

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        let client = reqwest::Client::new();
        let data = FeedbackSubmission {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
        };

        let result = submit_feedback(&client, "http://127.0.0.1:9/api/submit-feedback", &data).await;

        assert!(!result.success);
        assert!(!result.message.is_empty());
    }
}

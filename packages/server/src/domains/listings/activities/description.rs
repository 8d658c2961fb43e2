//! AI-written listing descriptions.
//!
//! One prompt, one completion, trimmed. Failures collapse into the two
//! user-facing `DescriptionError` kinds; the underlying cause is only logged.

use tracing::{debug, error};

use crate::domains::listings::errors::DescriptionError;
use crate::domains::listings::models::Category;
use crate::kernel::ServerDeps;

/// Any failure mentioning this is a credential problem, not a transient one.
/// Also matches Gemini's `API_KEY_INVALID` reason.
const CREDENTIAL_MARKER: &str = genai_client::API_KEY_VAR;

/// Build the description prompt for a listing.
pub fn build_description_prompt(title: &str, category: Category) -> String {
    format!(
        r#"Write a compelling, friendly, and honest product description for a listing on a second-hand marketplace called "EcoFinds".

The product is:
Title: {title}
Category: {category}

Instructions:
- Highlight key features and potential appeal to a buyer.
- Mention that it is a pre-loved/second-hand item.
- Keep the description between 40 and 80 words.
- Do not use markdown or formatting. Just plain text.
- End with a positive and inviting tone."#
    )
}

/// Generate a plain-text description for a listing.
///
/// Fails with `Configuration` before any network call when no credential is
/// available.
pub async fn generate_description(
    title: &str,
    category: Category,
    deps: &ServerDeps,
) -> Result<String, DescriptionError> {
    if !deps.ai.is_configured() {
        error!("API_KEY environment variable not set.");
        return Err(DescriptionError::Configuration);
    }

    let prompt = build_description_prompt(title, category);
    debug!(title, category = %category, "Generating listing description");

    match deps
        .ai
        .complete_with_model(&prompt, Some(deps.genai_model.as_str()))
        .await
    {
        Ok(text) => Ok(text.trim().to_string()),
        Err(e) => {
            error!(error = ?e, "Error generating description with Gemini");
            Err(classify_failure(&e))
        }
    }
}

fn classify_failure(err: &anyhow::Error) -> DescriptionError {
    if err
        .chain()
        .any(|cause| cause.to_string().contains(CREDENTIAL_MARKER))
    {
        DescriptionError::Configuration
    } else {
        DescriptionError::Generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::{MockAI, TestDependencies};

    #[test]
    fn prompt_embeds_title_and_category_verbatim() {
        let prompt = build_description_prompt("Vintage *Oak* Chair", Category::HomeGarden);

        assert!(prompt.contains("Title: Vintage *Oak* Chair\n"));
        assert!(prompt.contains("Category: HOME_GARDEN\n"));
        assert!(prompt.contains("between 40 and 80 words"));
        assert!(prompt.contains("Just plain text."));
        assert!(prompt.ends_with("End with a positive and inviting tone."));
    }

    #[tokio::test]
    async fn unconfigured_ai_is_never_called() {
        let test_deps = TestDependencies::new().mock_ai(MockAI::unconfigured());
        let deps = test_deps.to_deps();

        let err = generate_description("Desk lamp", Category::Electronics, &deps)
            .await
            .unwrap_err();

        assert_eq!(err, DescriptionError::Configuration);
        assert_eq!(err.to_string(), "AI functionality is not configured.");
        assert_eq!(test_deps.ai.call_count(), 0);
    }

    #[tokio::test]
    async fn response_is_trimmed() {
        let test_deps = TestDependencies::new()
            .mock_ai(MockAI::new().with_response("  Great chair, gently used.  "));
        let deps = test_deps.to_deps();

        let text = generate_description("Oak chair", Category::Furniture, &deps)
            .await
            .unwrap();

        assert_eq!(text, "Great chair, gently used.");
        assert!(test_deps.ai.was_called_with("Title: Oak chair"));
        assert_eq!(test_deps.ai.last_model().as_deref(), Some("gemini-2.5-flash"));
    }

    #[tokio::test]
    async fn inner_whitespace_is_preserved() {
        let test_deps = TestDependencies::new()
            .mock_ai(MockAI::new().with_response("\n\tLine one.\n\nLine two.\n"));
        let deps = test_deps.to_deps();

        let text = generate_description("Books", Category::Books, &deps)
            .await
            .unwrap();

        assert_eq!(text, "Line one.\n\nLine two.");
    }

    #[tokio::test]
    async fn any_failure_maps_to_generic_message() {
        for cause in [
            "connection reset by peer",
            "429 Too Many Requests",
            "Gemini API error (500): internal",
            "",
        ] {
            let test_deps = TestDependencies::new().mock_ai(MockAI::new().with_error(cause));
            let deps = test_deps.to_deps();

            let err = generate_description("Bike", Category::Sports, &deps)
                .await
                .unwrap_err();

            assert_eq!(err, DescriptionError::Generation, "cause: {cause:?}");
            assert_eq!(
                err.to_string(),
                "Failed to generate description. Please try again later."
            );
        }
    }

    #[tokio::test]
    async fn credential_failures_map_to_configuration() {
        let test_deps = TestDependencies::new().mock_ai(
            MockAI::new().with_error("Gemini API error (400): {\"reason\": \"API_KEY_INVALID\"}"),
        );
        let deps = test_deps.to_deps();

        let err = generate_description("Bike", Category::Sports, &deps)
            .await
            .unwrap_err();

        assert_eq!(err, DescriptionError::Configuration);
    }

    #[test]
    fn classification_looks_through_context() {
        let err = anyhow::anyhow!("API_KEY environment variable not set")
            .context("Failed to call Gemini API");
        assert_eq!(classify_failure(&err), DescriptionError::Configuration);

        let err = anyhow::anyhow!("timed out").context("Failed to call Gemini API");
        assert_eq!(classify_failure(&err), DescriptionError::Generation);
    }
}

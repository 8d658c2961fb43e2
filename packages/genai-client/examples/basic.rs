//! Basic Gemini client usage example

use genai_client::{GenAIClient, GenerateContentRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = GenAIClient::from_env()?;

    println!("=== generateContent ===");
    let response = client
        .generate_content(
            GenerateContentRequest::prompt("gemini-2.5-flash", "What is Rust in one sentence?")
                .temperature(0.7)
                .max_output_tokens(100),
        )
        .await?;

    println!("Response: {}", response.text);
    if let Some(usage) = response.usage {
        println!("Tokens used: {}", usage.total_token_count);
    }

    Ok(())
}

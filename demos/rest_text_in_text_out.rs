use dotenv::dotenv;
use generative_ai::v1beta::{
    GenerativeModel, ModelContent, request::GenerationConfig, rest::Client,
};
use tokio_stream::StreamExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::from_env()?;
    let model = GenerativeModel::new(client)
        .with_generation_config(GenerationConfig::new().with_max_output_tokens(64));

    let contents = vec![ModelContent::new("Hello")];

    let tokens = model.count_tokens(contents.clone()).await?;
    println!("prompt tokens: {}", tokens.total_tokens);

    let response = model.generate_content(contents.clone()).await?;
    println!("{}", response.text().unwrap_or_default());

    let mut stream = model.stream_generate_content(contents).await?;
    while let Some(chunk) = stream.next().await {
        print!("{}", chunk?.text().unwrap_or_default());
    }
    println!();
    Ok(())
}

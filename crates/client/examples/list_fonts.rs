//! List the public font catalog and today's quote.
//!
//! ```sh
//! FONTORY__API__BASE_URL=http://ceprj.gachon.ac.kr:60023 cargo run --example list_fonts
//! ```

use fontory_client::api::{FontsApi, QuotesApi};
use fontory_client::ApiClient;
use fontory_common::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fontory_client=debug".into()),
        )
        .init();

    let config = Config::load()?;
    let client = ApiClient::new(&config.api)?;

    match QuotesApi::new(&client).today().await {
        Ok(quote) => println!("오늘의 글귀: {}", quote.content),
        Err(e) => eprintln!("quote unavailable: {e}"),
    }

    let fonts = FontsApi::new(&client).list().await?;
    println!("{} fonts in the catalog", fonts.len());
    for font in fonts.iter().take(10) {
        println!(
            "  #{} {} — 좋아요 {} / 다운로드 {}",
            font.font_id, font.font_name, font.like_count, font.download_count
        );
    }

    Ok(())
}

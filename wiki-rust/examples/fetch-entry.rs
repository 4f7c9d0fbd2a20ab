use dotenvy::dotenv;
use hoyowiki::{HttpWikiBackendOptions, WikiService};
use std::collections::HashMap;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let wiki = args.next().unwrap_or_else(|| "hsr".to_string());
    let id = args.next().unwrap_or_default();

    let headers = std::env::var("HOYOWIKI_CSRF_TOKEN")
        .ok()
        .map(|token| HashMap::from([("X-CSRF-Token".to_string(), token)]));

    let service = WikiService::http(HttpWikiBackendOptions {
        base_url: std::env::var("HOYOWIKI_BASE_URL").ok(),
        headers,
        ..Default::default()
    });

    if !service.check_available().await {
        eprintln!("The hoyoverse backend plugin is not available");
        std::process::exit(1);
    }

    match service.fetch_and_format(&wiki, &id).await {
        Ok(text) => print!("{text}"),
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

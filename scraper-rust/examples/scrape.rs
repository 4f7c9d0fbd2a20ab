use dotenvy::dotenv;
use hoyowiki::{HttpWikiBackendOptions, WikiService};
use hoyowiki_scraper::{default_scrapers, register_all, ScraperRegistry, StaticPrompt};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let wiki = args.next().unwrap_or_default();
    let id = args.next().unwrap_or_default();

    let service = WikiService::http(HttpWikiBackendOptions {
        base_url: std::env::var("HOYOWIKI_BASE_URL").ok(),
        ..Default::default()
    });

    let mut registry = ScraperRegistry::new();
    register_all(&mut registry, default_scrapers(&service));

    let scraper = registry.get("mihoyo").expect("mihoyo scraper is registered");
    if !scraper.is_available().await {
        eprintln!("{} scraper is not available", scraper.name());
        return;
    }

    let outcome = scraper.scrape(&StaticPrompt::new(wiki, id)).await;
    if let Some(notice) = outcome.notice() {
        eprintln!("{notice}");
    }
    for file in outcome.into_files() {
        println!("== {} ({})\n{}", file.name, file.mime_type, file.content);
    }
}

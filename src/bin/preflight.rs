use restaurant_desk::infra::config;
use restaurant_desk::{ClientConfig, RestaurantClient, RestaurantStore};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Optional env vars:\n\
           RESTAURANT_API_URL (default {}), RESTAURANT_ROUTE_STYLE (legacy|path)\n",
        config::DEFAULT_API_URL
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    // Force-read config (nice error messages if invalid)
    let cfg = ClientConfig::from_env()?;

    println!("> Preflight:");
    println!("  {}={}", config::API_URL_VAR, cfg.base_url());
    println!("  {}={:?}", config::ROUTE_STYLE_VAR, cfg.route_style());

    let client = RestaurantClient::new(cfg);
    println!("  Collection: {}", client.collection_url()?);

    // Basic connectivity + body shape
    let records = client
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Listing restaurants failed: {}", e))?;
    println!("  Backend reachable, {} restaurant(s) listed.", records.len());
    if let Some(first) = records.first() {
        println!("  First record id: {}", first.id);
    }

    println!("> Preflight OK.");
    Ok(())
}

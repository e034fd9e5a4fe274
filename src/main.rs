use btcturk::core::config::ExchangeConfig;
use btcturk::{build_connector, AccountInfo, MarketDataSource};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // BTCTURK_API_KEY / BTCTURK_API_SECRET enable the private calls below
    #[cfg(feature = "env-file")]
    let config = ExchangeConfig::from_env_file("BTCTURK")?;
    #[cfg(not(feature = "env-file"))]
    let config = ExchangeConfig::from_env("BTCTURK")?;
    let authenticated = config.has_credentials();
    let btcturk = build_connector(config)?;

    let ticker = btcturk.get_pair(Some("BTC-TRY")).await?;
    info!("BTC-TRY ticker: {}", ticker);

    let book = btcturk.get_order_book("BTC-TRY", Some(5)).await?;
    info!("BTC-TRY order book: {}", book);

    if authenticated {
        match btcturk.get_account_balance().await {
            Ok(balances) => info!("Balances: {}", balances),
            Err(e) => error!("Error fetching balances: {}", e),
        }
    } else {
        info!("No credentials configured, skipping private endpoints");
    }

    // Example order (commented out for safety)
    /*
    let response = btcturk
        .submit_limit_order(
            "BTC-TRY",
            btcturk::OrderSide::Buy,
            "100000".parse()?,
            "0.01".parse()?,
        )
        .await?;
    info!("Order placed: {}", response);
    */

    Ok(())
}

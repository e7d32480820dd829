use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use shop_reports::catalog::Catalog;
use shop_reports::config::Config;
use shop_reports::config::DEFAULT_LOG_FILTER;
use shop_reports::config::LOG_ENV_VAR;
use shop_reports::events::EventSink;
use shop_reports::events::TracingSink;
use shop_reports::order::OrderSource;
use shop_reports::report::CUSTOMER_RANKING_FILE;
use shop_reports::report::ORDER_PRICES_FILE;
use shop_reports::report::PRODUCT_CUSTOMERS_FILE;
use shop_reports::report::customer_ranking;
use shop_reports::report::order_prices;
use shop_reports::report::product_customers;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::from_args(std::env::args_os().skip(1))?;
    std::fs::create_dir_all(&config.output_dir)?;
    std::fs::create_dir_all(&config.log_dir)?;
    init_tracing(&config.log_path(&chrono::Local::now()))?;

    let sink = TracingSink;
    sink.info("Start File Process");
    if let Err(error) = run(&config, &sink) {
        tracing::error!("file process aborted error={error:?}");
        return Err(error);
    }
    sink.info("End File Process");

    Ok(())
}

/// Reporters run one after the other, the first failure aborts the remaining ones.
fn run(config: &Config, sink: &dyn EventSink) -> color_eyre::Result<()> {
    let catalog = Catalog::load(&config.source_dir)?;
    let orders = OrderSource::load(&config.source_dir)?;

    order_prices::generate(&catalog, &orders, &config.output_path(ORDER_PRICES_FILE), sink)?;
    product_customers::generate(&catalog, &orders, &config.output_path(PRODUCT_CUSTOMERS_FILE), sink)?;
    customer_ranking::generate(&catalog, &orders, &config.output_path(CUSTOMER_RANKING_FILE), sink)?;

    Ok(())
}

fn init_tracing(log_path: &Path) -> color_eyre::Result<()> {
    let log_file = File::create(log_path)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();
    Ok(())
}

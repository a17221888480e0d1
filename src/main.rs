use anyhow::Context;
use diesel_migrations::MigrationHarness;
use dotenvy::dotenv;
use ganttboard::config::AppConfig;
use ganttboard::gantt::holidays::fetch_holidays;
use ganttboard::main_module::run_server;
use ganttboard::shared::state::AppState;
use ganttboard::shared::utils::create_conn;
use ganttboard::MIGRATIONS;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load()?;
    let pool = create_conn(&config.database.url)
        .with_context(|| format!("failed to open database at {}", config.database.url))?;

    {
        let pool = pool.clone();
        tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
            let mut conn = pool.get()?;
            conn.run_pending_migrations(MIGRATIONS)
                .map_err(|e| anyhow::anyhow!("migrations failed: {e}"))?;
            Ok(())
        })
        .await??;
    }

    // One-shot fetch; a failure just leaves the set empty.
    let client = reqwest::Client::new();
    let holidays = fetch_holidays(&client, &config.gantt.holiday_url).await;
    info!("loaded {} holidays", holidays.len());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| "invalid server address")?;

    let state = Arc::new(AppState {
        conn: pool,
        config,
        holidays,
    });

    run_server(state, addr).await
}

use anyhow::Context;
use calcpad_calculator::{CalcpadConfig, Calculator};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("calcpad_web=info,tower_http=info,warn")),
        )
        .with_target(false)
        .init();

    let config = CalcpadConfig::load().context("loading configuration")?;
    let calculator = Calculator::from_config(&config);

    let addr = calcpad_web::resolve_bind_addr(
        &config.web,
        env::var("CALCPAD_HOST").ok(),
        env::var("CALCPAD_PORT").ok(),
    );
    let listener =
        tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("binding {addr}"))?;
    info!(%addr, enabled = ?calculator.enabled(), "keypad listening");

    axum::serve(listener, calcpad_web::create_app(calculator)).await?;
    Ok(())
}

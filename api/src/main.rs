use std::sync::Arc;

use clap::Parser;
use foodboot_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};

fn init_logger(args: &LogArgs) {
    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(&args.filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(&args.filter)
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let state = state(args.clone()).await?;
    let router = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

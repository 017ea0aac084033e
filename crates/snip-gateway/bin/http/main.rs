mod cli;

use crate::cli::{StorageBackendArg, CLI};
use clap::Parser;
use snip_core::Shortener;
use snip_gateway::{telemetry, App, AppState, Timeouts};
use snip_generator::Sha1Generator;
use snip_shortener::ShortenerService;
use snip_storage::{DynamoDbRepository, DynamoDbSettings, InMemoryRepository};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::parse();
    telemetry::init(config.log_format.into());

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        table_name = %config.table_name,
        region = %config.region,
        domain_name = %config.domain_name,
        "starting gateway server"
    );

    let shortener: Arc<dyn Shortener> = match config.storage {
        StorageBackendArg::DynamoDb => {
            let settings = DynamoDbSettings::builder()
                .table_name(config.table_name.clone())
                .region(config.region.clone())
                .endpoint_url(config.dynamodb_endpoint_url.clone())
                .build();
            let repository = DynamoDbRepository::connect(settings).await;
            Arc::new(ShortenerService::new(repository, Sha1Generator::new()))
        }
        StorageBackendArg::InMemory => Arc::new(ShortenerService::new(
            InMemoryRepository::new(),
            Sha1Generator::new(),
        )),
    };

    let state = AppState::for_domain(shortener, &config.domain_name).with_timeouts(Timeouts {
        read: Duration::from_secs(config.read_timeout_secs),
        write: Duration::from_secs(config.write_timeout_secs),
    });

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway server listening");

    axum::serve(listener, App::router(state)).await?;

    Ok(())
}

use std::sync::Arc;

use auth::Authenticator;
use invoice_service::config::Config;
use invoice_service::domain::customer::service::CustomerService;
use invoice_service::domain::invoice::service::InvoiceService;
use invoice_service::domain::revenue::service::RevenueService;
use invoice_service::domain::user::service::UserService;
use invoice_service::inbound::http::router::create_router;
use invoice_service::inbound::http::router::AppState;
use invoice_service::outbound::repositories::PostgresCustomerRepository;
use invoice_service::outbound::repositories::PostgresInvoiceRepository;
use invoice_service::outbound::repositories::PostgresRevenueRepository;
use invoice_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "invoice_service=debug,auth=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "invoice-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        access_token_ttl_hours = config.jwt.access_token_ttl_hours,
        refresh_token_ttl_hours = config.jwt.refresh_token_ttl_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.lifetimes(),
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let invoice_repository = Arc::new(PostgresInvoiceRepository::new(pg_pool.clone()));
    let customer_repository = Arc::new(PostgresCustomerRepository::new(pg_pool.clone()));
    let revenue_repository = Arc::new(PostgresRevenueRepository::new(pg_pool));

    let state = AppState {
        user_service: Arc::new(UserService::new(
            user_repository,
            Arc::clone(&authenticator),
        )),
        invoice_service: Arc::new(InvoiceService::new(invoice_repository)),
        customer_service: Arc::new(CustomerService::new(customer_repository)),
        revenue_service: Arc::new(RevenueService::new(revenue_repository)),
        authenticator,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    tracing::info!("Server exited");
    Ok(())
}

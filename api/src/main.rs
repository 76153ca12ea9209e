//! Loan Management API Server
//!
//! Loan details, collateral pledges and loan applications for the loan
//! management microservice. Credentials are validated by the external
//! authorization service; storage and collateral records sit behind ports.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use sea_orm::Database;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    HttpAuthorizationClient, HttpCollateralClient, InMemoryCustomerLoanRepository,
    InMemoryLoanApplicationRepository, LocalCollateralRegistry, PostgresCustomerLoanRepository,
    PostgresLoanApplicationRepository,
};
use app::{LoanManagementService, RequestGate, RoutePolicy};
use config::{Config, RateLimit};
use domain::ports::{CollateralClient, LoanManagement};
use error::ConfigError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<RequestGate>,
}

/// Build the `/loan-management` router
///
/// Write routes get the per-peer rate limit when one is configured; that
/// limit keys on the peer address, so the server must be started with
/// connect info.
pub fn app_router(state: AppState, rate_limit: Option<RateLimit>) -> Result<Router, ConfigError> {
    let read_routes = Router::new()
        .route("/health-check", get(handlers::health_check))
        .route(
            "/getLoanDetails/:loanId/:customerId",
            get(handlers::get_loan_details),
        )
        .route(
            "/getLoanApplicationStatus",
            get(handlers::get_loan_application_status),
        )
        .route("/getAll", get(handlers::get_all_applications));

    let mut write_routes = Router::new()
        .route(
            "/saveRealEstateCollateral",
            post(handlers::save_real_estate_collateral),
        )
        .route(
            "/saveCashDepositCollateral",
            post(handlers::save_cash_deposit_collateral),
        )
        .route("/applyLoan", post(handlers::apply_loan))
        .route(
            "/approveLoanApplication/:applicationId",
            put(handlers::approve_loan_application),
        )
        .route(
            "/rejectLoanApplication/:applicationId",
            put(handlers::reject_loan_application),
        );

    if let Some(limit) = rate_limit {
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_millisecond(limit.replenish_ms)
                .burst_size(limit.burst)
                .finish()
                .ok_or_else(|| ConfigError::Invalid {
                    key: "RATE_LIMIT_BURST",
                    message: "rate limit period and burst must be non-zero".to_string(),
                })?,
        );
        write_routes = write_routes.layer(GovernorLayer {
            config: governor_config,
        });
    }

    Ok(Router::new()
        .nest("/loan-management", read_routes.merge(write_routes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Mount `app` under the configured context path, if any
pub fn with_context_path(app: Router, context_path: &str) -> Router {
    if context_path.is_empty() {
        app
    } else {
        Router::new().nest(context_path, app)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,loan_management_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Loan Management API...");

    // Load configuration
    let config = Config::from_env()?;

    // Create adapters
    let auth_client = Arc::new(HttpAuthorizationClient::new(
        config.auth_service_url.clone(),
        config.upstream_timeout,
    )?);
    tracing::info!(url = %config.auth_service_url, "Authorization service configured");

    let collateral: Arc<dyn CollateralClient> = match &config.collateral_service_url {
        Some(url) => {
            tracing::info!(url = %url, "Collateral service configured");
            Arc::new(HttpCollateralClient::new(
                url.clone(),
                config.upstream_timeout,
            )?)
        }
        None => {
            tracing::warn!("COLLATERAL_SERVICE_URL not set, recording collateral locally");
            Arc::new(LocalCollateralRegistry::new())
        }
    };

    // Create application services
    let loans: Arc<dyn LoanManagement> = match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let db = Database::connect(url).await?;
            tracing::info!("Database connected");
            Arc::new(LoanManagementService::new(
                Arc::new(PostgresCustomerLoanRepository::new(db.clone())),
                Arc::new(PostgresLoanApplicationRepository::new(db)),
                collateral,
            ))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory storage");
            Arc::new(LoanManagementService::new(
                Arc::new(InMemoryCustomerLoanRepository::new()),
                Arc::new(InMemoryLoanApplicationRepository::new()),
                collateral,
            ))
        }
    };

    let policy = RoutePolicy::with_gated(&config.gated_operations);
    tracing::info!(
        gated = ?policy.gated().map(|op| op.as_str()).collect::<Vec<_>>(),
        open = ?policy.open().map(|op| op.as_str()).collect::<Vec<_>>(),
        "Route policy"
    );

    // Create app state
    let state = AppState {
        gate: Arc::new(RequestGate::new(auth_client, loans, policy)),
    };

    let app = with_context_path(app_router(state, config.rate_limit)?, &config.context_path);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}{}", addr, config.context_path);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

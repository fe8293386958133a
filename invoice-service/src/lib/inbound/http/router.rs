use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login::login;
use super::handlers::auth::refresh::refresh;
use super::handlers::auth::register::register;
use super::handlers::customers::customer_count;
use super::handlers::customers::filtered_customers;
use super::handlers::customers::list_customers;
use super::handlers::health;
use super::handlers::invoices::create_invoice::create_invoice;
use super::handlers::invoices::delete_invoice::delete_invoice;
use super::handlers::invoices::get_invoice::get_invoice;
use super::handlers::invoices::list_invoices::filtered_invoices;
use super::handlers::invoices::list_invoices::latest_invoices;
use super::handlers::invoices::stats::invoice_count;
use super::handlers::invoices::stats::invoice_pages;
use super::handlers::invoices::stats::invoice_status_count;
use super::handlers::invoices::update_invoice::update_invoice;
use super::handlers::revenues::list_revenues;
use super::handlers::users::get_current_user::get_current_user;
use super::handlers::users::get_user_by_email::get_user_by_email;
use super::middleware::authenticate as auth_middleware;
use crate::domain::customer::ports::CustomerServicePort;
use crate::domain::invoice::ports::InvoiceServicePort;
use crate::domain::revenue::ports::RevenueServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub invoice_service: Arc<dyn InvoiceServicePort>,
    pub customer_service: Arc<dyn CustomerServicePort>,
    pub revenue_service: Arc<dyn RevenueServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(health))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh));

    let protected_routes = Router::new()
        .route("/user", get(get_current_user))
        .route("/user/email", get(get_user_by_email))
        .route("/invoices", post(create_invoice))
        .route("/invoices/latest", get(latest_invoices))
        .route("/invoices/filtered", get(filtered_invoices))
        .route("/invoices/count", get(invoice_count))
        .route("/invoices/status/count", get(invoice_status_count))
        .route("/invoices/pages", get(invoice_pages))
        .route(
            "/invoices/:invoice_id",
            get(get_invoice).patch(update_invoice).delete(delete_invoice),
        )
        .route("/revenues", get(list_revenues))
        .route("/customers", get(list_customers))
        .route("/customers/filtered", get(filtered_customers))
        .route("/customers/count", get(customer_count))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

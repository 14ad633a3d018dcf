use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    serve, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::application::auth_service::AuthService;
use crate::application::order_service::{OrderService, OrderUpdate};
use crate::errors::AppError;
use pedidos_types::domain::order::Order;
use pedidos_types::ports::order_repository::OrderRepository;
use pedidos_types::ports::user_repository::UserRepository;

#[derive(Clone)]
pub struct HttpServerConfig {
    pub port: String,
}

pub struct AppState<R: OrderRepository, U: UserRepository> {
    pub orders: OrderService<R>,
    pub auth: AuthService<U>,
}

pub struct HttpServer<R: OrderRepository, U: UserRepository> {
    state: Arc<AppState<R, U>>,
    config: HttpServerConfig,
}

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub cliente: String,
    pub endereco: String,
    pub produto: String,
    pub status: String,
}

#[derive(Deserialize, Default)]
pub struct UpdateOrderRequest {
    pub cliente: Option<String>,
    pub endereco: Option<String>,
    pub produto: Option<String>,
    pub status: Option<String>,
}

impl From<UpdateOrderRequest> for OrderUpdate {
    fn from(req: UpdateOrderRequest) -> Self {
        OrderUpdate {
            client: req.cliente,
            address: req.endereco,
            product: req.produto,
            status: req.status,
        }
    }
}

#[derive(Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

impl MessageBody {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

impl<R, U> HttpServer<R, U>
where
    R: OrderRepository,
    U: UserRepository,
{
    pub async fn new(
        orders: OrderService<R>,
        auth: AuthService<U>,
        config: HttpServerConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            state: Arc::new(AppState { orders, auth }),
            config,
        })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http_request",
                    %request_id,
                    method = %request.method(),
                    uri
                )
            })
            .on_request(
                |request: &axum::extract::Request<_>, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        method = %request.method(),
                        uri = %request.uri(),
                        "request"
                    );
                },
            )
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        status = %response.status(),
                        latency_ms = %latency.as_millis(),
                        "response"
                    );
                },
            );

        let state = self.state.clone();
        let app = Router::new()
            .route("/health", get(health))
            .route("/pedidos", get(list_orders::<R, U>))
            .route("/pedidos", post(create_order::<R, U>))
            .route("/pedidos/{id}", put(update_order::<R, U>))
            .route("/pedidos/{id}", delete(delete_order::<R, U>))
            .route("/register", post(register::<R, U>))
            .route("/login", post(login::<R, U>))
            .layer(CorsLayer::permissive())
            .layer(trace_layer)
            .with_state(state);

        let addr: SocketAddr = format!("0.0.0.0:{}", self.config.port).parse()?;
        tracing::info!("starting server on {}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

async fn health() -> (axum::http::StatusCode, Json<serde_json::Value>) {
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
}

async fn list_orders<R, U>(
    State(state): State<Arc<AppState<R, U>>>,
) -> Result<Json<Vec<Order>>, AppError>
where
    R: OrderRepository,
    U: UserRepository,
{
    let list = state.orders.list_orders().await?;
    Ok(Json(list))
}

async fn create_order<R, U>(
    State(state): State<Arc<AppState<R, U>>>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(axum::http::StatusCode, Json<Order>), AppError>
where
    R: OrderRepository,
    U: UserRepository,
{
    let order = state
        .orders
        .create_order(
            payload.cliente,
            payload.endereco,
            payload.produto,
            &payload.status,
        )
        .await?;
    Ok((axum::http::StatusCode::CREATED, Json(order)))
}

async fn update_order<R, U>(
    State(state): State<Arc<AppState<R, U>>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrderRequest>,
) -> Result<Json<Order>, AppError>
where
    R: OrderRepository,
    U: UserRepository,
{
    let updated = state.orders.update_order(id, payload.into()).await?;
    Ok(Json(updated))
}

async fn delete_order<R, U>(
    State(state): State<Arc<AppState<R, U>>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageBody>, AppError>
where
    R: OrderRepository,
    U: UserRepository,
{
    state.orders.delete_order(id).await?;
    Ok(MessageBody::new("Pedido deletado com sucesso"))
}

async fn register<R, U>(
    State(state): State<Arc<AppState<R, U>>>,
    Json(payload): Json<Credentials>,
) -> Result<(axum::http::StatusCode, Json<MessageBody>), AppError>
where
    R: OrderRepository,
    U: UserRepository,
{
    state.auth.register(payload.email, payload.password).await?;
    Ok((
        axum::http::StatusCode::CREATED,
        MessageBody::new("Usuário registrado com sucesso"),
    ))
}

async fn login<R, U>(
    State(state): State<Arc<AppState<R, U>>>,
    Json(payload): Json<Credentials>,
) -> Result<Json<MessageBody>, AppError>
where
    R: OrderRepository,
    U: UserRepository,
{
    state.auth.login(payload.email, payload.password).await?;
    Ok(MessageBody::new("Login realizado com sucesso"))
}

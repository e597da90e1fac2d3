use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::error_handling::HandleErrorLayer;
use axum::extract::MatchedPath;
use axum::{BoxError, Router};
use http::HeaderValue;
use thiserror::Error;
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use crate::infrastructure::db::{Database, DbError};
use crate::presentation::http::error::{middleware_error, route_not_found};
use crate::presentation::http::openapi::ApiDoc;
use crate::presentation::http::root;
use crate::presentation::http::router::{ResourceRouter, RouteTable};

/// Shown in the interactive documentation.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiMetadata {
    pub title: String,
    pub description: String,
    pub version: String,
}

impl Default for ApiMetadata {
    fn default() -> Self {
        Self {
            title: "Un API de otro mundo".into(),
            description: "Documentación de la API del trabajo Isekai (simulado) como parte \
                de la asignatura Computación Paralela y Distribuida de la UTEM \
                semestre de otoño 2025."
                .into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("database pool could not be established: {0}")]
    Database(#[from] DbError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error("http server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// The servable unit: metadata, mounted routers and the pool lifecycle.
///
/// Lifecycle is `initialize -> mount* -> on_start -> serve -> on_stop`;
/// [`Application::serve`] runs the last three in order.
pub struct Application {
    metadata: ApiMetadata,
    database: Arc<Database>,
    routes: RouteTable,
    mounted: Vec<&'static str>,
}

impl Application {
    pub fn initialize(metadata: ApiMetadata, database: Arc<Database>) -> Self {
        let mut app = Self {
            metadata,
            database,
            routes: RouteTable::default(),
            mounted: Vec::new(),
        };
        app.mount(root::routes());
        app
    }

    pub fn metadata(&self) -> &ApiMetadata {
        &self.metadata
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Router names in mount order.
    pub fn mounted(&self) -> &[&'static str] {
        &self.mounted
    }

    pub fn database(&self) -> &Arc<Database> {
        &self.database
    }

    /// Registers every route of `router`. A route already registered for the
    /// same method and path is replaced.
    pub fn mount(&mut self, router: ResourceRouter) -> &mut Self {
        let (name, prefix, tag) = (router.name(), router.prefix(), router.tag());
        let mut count = 0usize;
        for binding in router.into_bindings() {
            if let Some(prev) = self.routes.insert(binding) {
                warn!(router = name, method = %prev.method, path = %prev.path, "route_overridden");
            }
            count += 1;
        }
        self.mounted.push(name);
        info!(router = name, prefix, tag, routes = count, "router_mounted");
        self
    }

    pub async fn on_start(&self) -> Result<(), StartupError> {
        self.database.connect().await?;
        info!(
            title = %self.metadata.title,
            version = %self.metadata.version,
            "application_started"
        );
        Ok(())
    }

    pub async fn on_stop(&self) {
        self.database.disconnect().await;
        info!(
            open_connections = self.database.open_connections(),
            "application_stopped"
        );
    }

    pub fn openapi(&self) -> utoipa::openapi::OpenApi {
        let mut doc = ApiDoc::openapi();
        doc.info.title = self.metadata.title.clone();
        doc.info.description = Some(self.metadata.description.clone());
        doc.info.version = self.metadata.version.clone();
        doc
    }

    pub fn router(&self, ctx: AppContext) -> Router {
        let cors = cors_layer(&ctx.cfg);
        let timeout = ctx.cfg.request_timeout();
        let timeout_secs = ctx.cfg.request_timeout_secs;
        self.routes
            .to_router()
            .with_state(ctx)
            .merge(SwaggerUi::new("/docs").url("/openapi.json", self.openapi()))
            .fallback(route_not_found)
            .layer(cors)
            .layer(
                ServiceBuilder::new()
                    .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                        middleware_error(err, timeout_secs)
                    }))
                    .layer(TimeoutLayer::new(timeout)),
            )
            .layer(
                TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    let matched = req
                        .extensions()
                        .get::<MatchedPath>()
                        .map(|p| p.as_str().to_string())
                        .unwrap_or_default();
                    tracing::info_span!("http", %method, %uri, matched_path = %matched)
                }),
            )
    }

    /// Connects the pool, serves until `shutdown` resolves, then drains and
    /// disconnects. Nothing is bound when startup fails.
    pub async fn serve<F>(
        self,
        addr: SocketAddr,
        ctx: AppContext,
        shutdown: F,
    ) -> Result<(), ApplicationError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.on_start().await?;

        let listener = match tokio::net::TcpListener::bind(addr).await {
            Ok(l) => l,
            Err(source) => {
                self.on_stop().await;
                return Err(StartupError::Bind { addr, source }.into());
            }
        };
        let local = listener.local_addr().unwrap_or(addr);
        info!(addr = %local, "http_api_listening");

        let app = self.router(ctx);
        let served = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await;
        if let Err(e) = &served {
            tracing::error!(error = ?e, "http_server_failed");
        }

        self.on_stop().await;
        served.map_err(ApplicationError::Serve)
    }
}

fn cors_layer(cfg: &Config) -> CorsLayer {
    let methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
        http::Method::OPTIONS,
    ];
    let base = CorsLayer::new()
        .allow_methods(methods)
        .allow_headers([http::header::CONTENT_TYPE]);
    match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => base.allow_origin(origin),
        Some(Err(_)) | None if cfg.is_production => {
            // Production requires FRONTEND_URL; anything else is denied
            base.allow_origin(AllowOrigin::exact(HeaderValue::from_static(
                "http://invalid",
            )))
        }
        _ => base.allow_origin(AllowOrigin::mirror_request()),
    }
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = ?e, "ctrl_c_handler_failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = ?e, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown_signal_received");
}

use crate::core::shutdown::{shutdown_channel, shutdown_signal, ShutdownSender, ShutdownToken};
use crate::domain::model::NotifyRequest;
use crate::domain::ports::CoreService;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{validate_non_empty_string, validate_non_zero_duration, Validate};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub request_timeout: Duration,
    pub shutdown_grace: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            shutdown_grace: DEFAULT_SHUTDOWN_GRACE,
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("address", &self.address)?;
        validate_non_zero_duration("request_timeout", self.request_timeout)?;
        validate_non_zero_duration("shutdown_grace", self.shutdown_grace)?;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct HttpServiceOptions {
    pub core: Option<Arc<dyn CoreService>>,
    pub server: Option<ServerConfig>,
}

/// HTTP front-end over a [`CoreService`].
pub struct HttpService {
    config: ServerConfig,
    core: Arc<dyn CoreService>,
}

impl HttpService {
    pub fn new(opts: HttpServiceOptions) -> Result<Self> {
        let core = opts.core.ok_or_else(|| ServiceError::missing("core"))?;
        let config = opts.server.unwrap_or_default();
        config.validate()?;

        Ok(Self { config, core })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Single route; every method reaches the handler.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", any(notify_handler))
            .layer(TimeoutLayer::new(self.config.request_timeout))
            .layer(TraceLayer::new_for_http())
            .with_state(self.core.clone())
    }

    /// Starts the listener on a background task.
    ///
    /// Bind and serve failures are logged from inside the task.
    pub fn spawn(&self) -> RunningServer {
        let (shutdown_tx, shutdown_rx) = shutdown_channel();
        let handle = tokio::spawn(listen(
            self.config.address.clone(),
            self.router(),
            shutdown_rx,
        ));

        RunningServer {
            shutdown_tx,
            handle,
            grace: self.config.shutdown_grace,
        }
    }

    pub async fn run_until<F>(&self, signal: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        let running = self.spawn();
        signal.await;
        running.shutdown().await
    }

    /// Serves until Ctrl-C, then drains for at most `shutdown_grace`.
    pub async fn run(&self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }
}

pub struct RunningServer {
    shutdown_tx: ShutdownSender,
    handle: JoinHandle<()>,
    grace: Duration,
}

impl RunningServer {
    /// Stops accepting connections and waits for in-flight requests.
    ///
    /// Requests still running after the grace period are abandoned.
    pub async fn shutdown(self) -> Result<()> {
        self.shutdown_tx.shutdown();
        let abort = self.handle.abort_handle();

        match tokio::time::timeout(self.grace, self.handle).await {
            Ok(Ok(())) => {
                tracing::info!("✅ HTTP server shutdown complete");
                Ok(())
            }
            Ok(Err(e)) => Err(ServiceError::Server {
                message: e.to_string(),
            }),
            Err(_) => {
                abort.abort();
                tracing::warn!("⏱️ Graceful shutdown exceeded {:?}, forcing stop", self.grace);
                Err(ServiceError::ShutdownTimeout { grace: self.grace })
            }
        }
    }
}

async fn listen(address: String, router: Router, mut shutdown: ShutdownToken) {
    let listener = match TcpListener::bind(address.as_str()).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("❌ Failed to bind HTTP listener on {}: {}", address, e);
            return;
        }
    };

    tracing::info!("✅ Server listening on http://{}", address);

    let result = axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.wait().await })
        .await;

    if let Err(e) = result {
        tracing::error!("❌ HTTP server error: {}", e);
    }
}

async fn notify_handler(State(core): State<Arc<dyn CoreService>>, body: Bytes) -> Response {
    let decoded = serde_json::from_slice::<NotifyRequest>(&body).map_err(ServiceError::from);
    let request = match decoded {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(category = ?e.category(), "Rejecting request body: {}", e);
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    if let Err(e) = core.execute(&request).await {
        tracing::error!(category = ?e.category(), "Notification failed: {}", e);
        return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
    }

    (StatusCode::OK, "Done").into_response()
}

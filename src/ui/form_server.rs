use std::convert::Infallible;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::{Filter, Reply};
use crate::config::constants::{
    MAX_FORM_BODY_BYTES, SERVER_SHUTDOWN_GRACE_PERIOD_MS, SUCCESS_MESSAGE, sleep_duration_millis,
};
use crate::errors::{FormError, FormResult};
use crate::services::config_writer::ConfigWriter;
use crate::services::form_extractor::FormExtractor;
use crate::services::yaml_renderer::YamlRenderer;
use crate::structs::config::server_settings::ServerSettings;
use crate::ui::template_registry::TemplateRegistry;

/// Everything a request handler needs. Built once at start-up and shared
/// read-only between requests.
pub struct FormContext {
    pub templates: TemplateRegistry,
    pub renderer: YamlRenderer,
    pub output_path: PathBuf,
    pub static_dir: PathBuf,
}

impl FormContext {
    pub fn new(templates: TemplateRegistry, settings: &ServerSettings) -> Self {
        Self {
            templates,
            renderer: YamlRenderer::new(),
            output_path: PathBuf::from(&settings.output_path),
            static_dir: PathBuf::from(&settings.static_dir),
        }
    }

    /// Extract, render and write one submission.
    pub fn generate(&self, body: &[u8]) -> FormResult<()> {
        let config = FormExtractor::extract_from_body(body)?;
        log::debug!(
            "Rendering config for user '{}' with {} filter entries",
            config.user,
            config.filter_entry_count()
        );
        let yaml = self.renderer.render(&config)?;
        ConfigWriter::write(&self.output_path, &yaml)
    }
}

pub struct FormServer {
    context: Arc<FormContext>,
    address: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl FormServer {
    pub fn new(settings: &ServerSettings, templates: TemplateRegistry) -> FormResult<Self> {
        let address = resolve_address(&settings.host, settings.port)?;
        Ok(Self {
            context: Arc::new(FormContext::new(templates, settings)),
            address,
            shutdown_tx: None,
        })
    }

    pub async fn start(&mut self) -> FormResult<SocketAddr> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let (bound, server) = warp::serve(routes(Arc::clone(&self.context)))
            .try_bind_with_graceful_shutdown(self.address, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| FormError::server_error("bind", &e.to_string()))?;

        self.shutdown_tx = Some(shutdown_tx);
        tokio::spawn(server);

        log::info!("🌐 Config form server started on http://{}", bound);
        log::info!("📝 Submissions are written to {}", self.context.output_path.display());
        Ok(bound)
    }

    pub async fn shutdown(&mut self) -> FormResult<()> {
        log::info!("🛑 Shutting down config form server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                FormError::server_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Config form server shutdown complete");

        Ok(())
    }
}

fn resolve_address(host: &str, port: u16) -> FormResult<SocketAddr> {
    (host, port)
        .to_socket_addrs()
        .map_err(|e| FormError::server_error("resolve address", &e.to_string()))?
        .next()
        .ok_or_else(|| FormError::server_error("resolve address", &format!("No address found for '{}'", host)))
}

pub fn routes(
    context: Arc<FormContext>,
) -> impl Filter<Extract = impl Reply, Error = warp::Rejection> + Clone {
    let static_files = warp::path("static")
        .and(warp::fs::dir(context.static_dir.clone()));

    let context_filter = warp::any().map(move || Arc::clone(&context));

    let form_route = warp::path::end()
        .and(warp::get())
        .and(context_filter.clone())
        .and_then(serve_form_page);

    let generate_route = warp::path("generate")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_FORM_BODY_BYTES))
        .and(warp::body::bytes())
        .and(context_filter)
        .and_then(generate_handler);

    static_files
        .or(form_route)
        .or(generate_route)
        .with(warp::log("backup_config_form::http"))
}

async fn serve_form_page(context: Arc<FormContext>) -> Result<impl Reply, Infallible> {
    Ok(warp::reply::html(context.templates.render_form(None)))
}

async fn generate_handler(body: Bytes, context: Arc<FormContext>) -> Result<warp::reply::Response, Infallible> {
    match context.generate(&body) {
        Ok(()) => Ok(warp::reply::with_status(SUCCESS_MESSAGE, StatusCode::OK).into_response()),
        Err(e) => {
            if e.is_bind_error() {
                log::warn!("⚠️ Rejected submission: {}", e);
            } else {
                log::error!("❌ Failed to save config: {}", e);
            }
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let page = context.templates.render_form(Some(&e.user_message()));
            Ok(warp::reply::with_status(warp::reply::html(page), status).into_response())
        }
    }
}

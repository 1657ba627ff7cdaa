use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quoteflow::config::Config;
use quoteflow::documents::DocumentService;
use quoteflow::middleware::json_config;
use quoteflow::modules::{documents, health};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    init_tracing(&config);

    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting Quoteflow document service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        home = %config.business.home,
        composite_tax_rate = %config.business.composite_tax_rate,
        "Tax configuration loaded"
    );

    let service = web::Data::new(DocumentService::new(config.business.clone()));
    let development = config.app.is_development();

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let cors = if development {
            Cors::permissive()
        } else {
            Cors::default()
                .allowed_methods(vec!["GET", "POST"])
                .allow_any_header()
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .app_data(service.clone())
            .configure(health::controllers::configure)
            .configure(documents::controllers::configure)
            .route("/", web::get().to(index))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("quoteflow={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.app.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Quoteflow",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

use log::{error, info};
use service::{config::Config, logging::Logger, AppState};

#[tokio::main]
async fn main() {
    let config = Config::new();
    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to start logger: {e}");
        std::process::exit(1);
    }

    info!(
        "Streaming frames every {}ms, pages from {}, assets from {}",
        config.frame_interval().as_millis(),
        config.templates_dir().display(),
        config.static_dir().display()
    );

    let app_state = AppState::new(config);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server failed: {e}");
        std::process::exit(1);
    }
}

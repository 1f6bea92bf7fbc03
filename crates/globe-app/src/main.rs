mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use globe_config::GlobeConfig;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- globe-backdrop crashed ---");
        eprintln!("Run with RUST_LOG=globe=debug and include the log when reporting.");
        eprintln!("------------------------------\n");
        default_hook(info);
    }));
}

/// Load config from `--config` or the default location.
fn load_config(args: &cli::Args) -> GlobeConfig {
    let loaded = match &args.config {
        Some(path) => globe_config::load_config_from(path),
        None => globe_config::load_config(),
    };
    loaded.unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        GlobeConfig::default()
    })
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Config is read before the real subscriber exists; surface its warnings anyway.
    let bootstrap_logger = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .finish();
    let mut config =
        tracing::subscriber::with_default(bootstrap_logger, || load_config(&args));
    args.apply_overrides(&mut config);

    if args.print_config {
        println!("{}", globe_config::config_to_json(&config));
        return;
    }

    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.logging.level.directive());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "globe=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("globe-backdrop v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        mode = ?config.window.mode,
        time_source = ?config.animation.time_source,
        particles = config.particles.count,
        seed = ?config.particles.seed,
        "config loaded"
    );

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::GlobeApp::new(config);

    tracing::info!("entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("event loop error: {e}");
    }
    tracing::info!("shutdown complete");
}

use asset_gate::config::{self, AppState};
use asset_gate::gate::AssetRequest;
use asset_gate::{logger, server};
use clap::Parser;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file path (extension optional)
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: String,

    /// Validate the configuration and exit
    #[arg(long)]
    check: bool,

    /// Resolve a request target (e.g. "/assets/img/logo.png") and exit
    #[arg(long, value_name = "URI")]
    resolve: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = config::Config::load_from(&cli.config)?;
    logger::init(&cfg)?;

    let state = AppState::new(&cfg)?;

    if cli.check {
        let location = state.gate.location();
        println!("Configuration OK");
        println!("  - Asset root: {}", location.root().display());
        println!("  - Prefix: {}", location.prefix());
        println!("  - Mode: {:?}", state.gate.mode());
        return Ok(());
    }

    if let Some(target) = cli.resolve {
        match state.gate.resolve(&AssetRequest::parse(&target)) {
            Some(asset) => println!(
                "{} -> {} ({})",
                target,
                asset.path.display(),
                asset.content_type
            ),
            None => println!("{target} -> not applicable"),
        }
        return Ok(());
    }

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg, state))
}

async fn async_main(
    cfg: config::Config,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;
    let state = Arc::new(state);

    logger::log_server_start(&addr, &cfg);
    server::start_signal_handler(Arc::clone(&state.shutdown));

    server::start_server_loop(listener, state, Arc::new(AtomicUsize::new(0))).await;
    Ok(())
}

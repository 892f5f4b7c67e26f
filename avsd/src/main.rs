use avsserver::device_ext::MediaServerDeviceExt;
use avsserver::MEDIA_SERVER;
use avsupnp::UpnpServerExt;
use clap::Parser;
use tracing::{error, info};

/// UPnP AV MediaServer daemon.
#[derive(Parser, Debug)]
#[command(name = "avsd", version, about = "UPnP AV/DLNA media server")]
struct Cli {
    /// Directory holding avsd.yaml; overrides the AVSD_CONFIG environment variable.
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if let Some(config_dir) = cli.config {
        // SAFETY: set before the config singleton's first access below.
        unsafe { std::env::set_var("AVSD_CONFIG", config_dir) };
    }

    // ========== PHASE 1: UPnP/HTTP infrastructure ==========
    let server = match avsweb::Server::create_upnp_server().await {
        Ok(server) => server,
        Err(e) => {
            error!("❌ Failed to start UPnP server infrastructure: {}", e);
            std::process::exit(1);
        }
    };

    // avsstore has no concrete Storage backend registered yet; content
    // directory browse/search actions return an error until one is wired
    // in via avsserver::register_storage.
    let (_autoscan_engine, mut autoscan_tasks) = avsscan::AutoscanEngine::new(256);
    tokio::spawn(async move {
        while let Some(task) = autoscan_tasks.recv().await {
            info!("autoscan task pending storage backend: {:?}", task);
        }
    });

    // ========== PHASE 2: device registration ==========
    info!("📡 Registering MediaServer device...");
    let server_instance = match server.write().await.register_device(MEDIA_SERVER.clone()).await {
        Ok(instance) => instance,
        Err(e) => {
            error!("❌ Failed to register MediaServer device: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(cd_service) = server_instance.get_service("ContentDirectory") {
        avsserver::contentdirectory::state::register_instance(&cd_service);
    } else {
        error!("❌ MediaServer device has no ContentDirectory service");
        std::process::exit(1);
    }

    server_instance.init_protocol_info();

    info!(
        "✅ MediaServer ready at {}{}",
        server_instance.base_url(),
        server_instance.description_route()
    );

    // ========== PHASE 3: start and run ==========
    info!("🌐 Starting HTTP server...");
    server.write().await.start().await;

    info!("✅ avsd is ready. Press Ctrl+C to stop...");
    server.write().await.wait().await;

    info!("Waiting for background tasks to finish...");
    tokio::time::sleep(std::time::Duration::from_secs(2)).await;

    info!("✅ avsd stopped");
    Ok(())
}

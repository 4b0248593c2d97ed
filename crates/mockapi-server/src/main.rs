//! `mockapi` - mock login API for local emulator testing
//!
//! Takes no arguments. Serves on 0.0.0.0:8000 until Ctrl+C.

use anyhow::{Context, Result};
use mockapi_core::handlers::{TEST_EMAIL, TEST_PASSWORD};
use mockapi_core::{Server, ServerConfig};

/// Host loopback as seen from inside the Android emulator
const EMULATOR_HOST: &str = "10.0.2.2";

fn print_banner(port: u16) {
    println!("🚀 Démarrage du serveur de test sur le port {}", port);
    println!("📱 URL pour émulateur: http://{}:{}/api", EMULATOR_HOST, port);
    println!("💻 URL pour navigateur: http://localhost:{}/api", port);
    println!("🔑 Test login: {} / {}", TEST_EMAIL, TEST_PASSWORD);
    println!("⏹️  Arrêter avec Ctrl+C");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::default();
    print_banner(config.port);

    let server = Server::bind(&config)
        .await
        .with_context(|| format!("failed to bind {}:{}", config.hostname, config.port))?;

    server
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await?;

    println!("\n🛑 Serveur arrêté");
    Ok(())
}

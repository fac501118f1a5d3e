mod commands;
pub mod config;
pub mod error;
pub mod sensitivity;

use tauri::Manager;

use crate::config::GeneratorConfig;
use crate::sensitivity::GeminiClient;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            commands::generator::generate_sensitivity,
            commands::health::get_engine_status,
        ])
        .setup(|app| {
            // Read once; later environment changes are not observed.
            let config = GeneratorConfig::from_env()?;
            let client = GeminiClient::new(config)?;
            app.manage(client);
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

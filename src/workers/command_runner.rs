use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::config::constants::SCHEMA_SQL;
use crate::enums::commands::Commands;
use crate::errors::{ReviewError, ReviewResult};
use crate::server::app_state::AppState;
use crate::server::review_server::ReviewServer;
use crate::services::ai_providers::groq::GroqProvider;
use crate::services::http_client::shared_client;
use crate::services::stores::memory_store::MemoryStore;
use crate::services::stores::supabase_store::SupabaseStore;
use crate::structs::config::config::Config;
use crate::traits::ai_provider::AiProvider;
use crate::traits::row_store::RowStore;

#[derive(Default)]
pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> ReviewResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Serve { host, port, config, ephemeral_store } => {
                self.serve_command(host, port, config, ephemeral_store).await
            }
            Commands::Check { config } => self.check_command(config.as_deref()),
            Commands::Schema => {
                println!("{}", SCHEMA_SQL);
                Ok(())
            }
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    async fn serve_command(
        &self,
        host: Option<String>,
        port: Option<u16>,
        config_path: Option<PathBuf>,
        ephemeral_store: bool,
    ) -> ReviewResult<()> {
        log::info!("🚀 Starting review relay...");

        let mut config = ConfigManager::load(config_path.as_deref())?;
        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }

        validated(&config, !ephemeral_store)?;

        let client = shared_client()?;
        let provider: Arc<dyn AiProvider> = Arc::new(GroqProvider::from_config(&config.ai, client.clone())?);
        log::info!("🤖 Using model: {}", config.ai.model);

        let store: Arc<dyn RowStore> = if ephemeral_store {
            log::warn!("⚠️ Using in-memory store; history is lost on exit");
            Arc::new(MemoryStore::new())
        } else {
            let store = SupabaseStore::from_config(&config.store, client)?;
            log::info!("🗄️  History store: {}", store.base_url());
            Arc::new(store)
        };

        let state = Arc::new(AppState::new(provider, store, &config));
        let mut server = ReviewServer::new(state, config.server.clone());
        server.start().await?;

        tokio::signal::ctrl_c()
            .await
            .map_err(|e| ReviewError::system_error("signal handling", &e.to_string()))?;

        server.shutdown().await
    }

    fn check_command(&self, config_path: Option<&Path>) -> ReviewResult<()> {
        log::info!("🔍 Validating configuration...");

        let config = ConfigManager::load(config_path)?;
        validated(&config, true)?;

        log::info!("✅ Configuration is valid");
        log::info!("   Model: {} at {}", config.ai.model, config.ai.base_url);
        log::info!("   Listen: {}:{}", config.server.host, config.server.port);
        Ok(())
    }
}

/// Logs every problem, then fails with the first one.
fn validated(config: &Config, require_store: bool) -> ReviewResult<()> {
    match ConfigManager::validate_config(config, require_store) {
        Ok(()) => Ok(()),
        Err(mut errors) => {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            log::error!("💡 Run 'review-relay check' after fixing the values above.");
            Err(errors.remove(0))
        }
    }
}

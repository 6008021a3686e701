// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;
use reqwest::Client;

use crate::{
    config::Config,
    store::QuizStore,
    utils::llm::{OpenAiClient, TextGenerator},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<QuizStore>,
    pub config: Config,
    /// `None` when no generation credential is configured.
    pub generator: Option<Arc<dyn TextGenerator>>,
    /// Outbound client used by the notifier.
    pub http: Client,
}

impl AppState {
    /// Fresh state with a text-generation client built from `config`.
    ///
    /// A client that fails to build is logged and generation stays disabled.
    pub fn from_config(config: Config) -> Self {
        let generator = match OpenAiClient::from_config(&config) {
            Ok(client) => client.map(|c| Arc::new(c) as Arc<dyn TextGenerator>),
            Err(e) => {
                tracing::error!("Failed to create text-generation client: {}", e);
                None
            }
        };
        Self::with_generator(config, generator)
    }

    pub fn with_generator(config: Config, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            store: Arc::new(QuizStore::default()),
            config,
            generator,
            http: Client::new(),
        }
    }
}

impl FromRef<AppState> for Arc<QuizStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

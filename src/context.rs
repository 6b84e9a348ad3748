use std::sync::Arc;

use anyhow::Result;

use crate::coc::CocClient;
use crate::config::Config;

/// Application context containing shared dependencies
/// This reduces parameter passing and makes it easier to add new dependencies
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub coc: CocClient,
}

impl AppContext {
    /// Creates a new application context
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let coc = CocClient::new(&config)?;
        Ok(Self { config, coc })
    }
}

use crate::api::ApiClient;
use crate::config::Config;
use crate::session::SessionStore;

/// Shared application state handed to every command.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub session: SessionStore,
    /// Kept for flows that report endpoint details; only read at startup
    /// today.
    #[allow(dead_code)]
    pub config: Config,
}

use std::sync::Arc;

use configs::{AppConfig, DroidConfig, GreetingConfig};
use service::coffee::CoffeeService;

/// Shared router state. The property groups are fixed at startup.
#[derive(Clone)]
pub struct ServerState {
    pub coffees: CoffeeService,
    pub greeting: Arc<GreetingConfig>,
    pub droid: Arc<DroidConfig>,
}

impl ServerState {
    pub fn new(coffees: CoffeeService, cfg: &AppConfig) -> Self {
        Self {
            coffees,
            greeting: Arc::new(cfg.greeting.clone()),
            droid: Arc::new(cfg.droid.clone()),
        }
    }
}

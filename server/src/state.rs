use std::sync::Arc;

use super::config::Config;

pub struct State {
    pub config: Config,
}

impl State {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        Arc::new(Self { config })
    }
}

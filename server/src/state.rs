use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use menu::bank::{Bank, MenuSource};

use super::config::Config;

pub struct State {
    pub config: Config,
    /// Comment submissions mutate the bank, so it sits behind a lock.
    pub bank: RwLock<Bank>,
}

impl State {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        let bank = match &config.bank_path {
            Some(path) => Bank::load(path).expect("Bank file misconfigured!"),
            None => Bank::seeded(),
        };

        info!(
            "Bank loaded: {} dishes, {} promotions, {} leaders",
            bank.dishes().len(),
            bank.promotions().len(),
            bank.leaders().len()
        );

        Arc::new(Self {
            config,
            bank: RwLock::new(bank),
        })
    }
}

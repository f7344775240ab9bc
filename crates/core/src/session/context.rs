use std::rc::Rc;
use std::sync::Arc;

use crate::{
    config::{ConfigValidator, LoaderConfig, LoaderConfigValidator},
    error::Result,
    interfaces::{BlockPolicy, Host},
    loader::Loader,
    patterns::BlockList,
    registry::RegistryPool,
    scanner::Scanner,
    scheduler::TaskQueue,
};

/// Process-wide collaborators handed to every session at construction
#[derive(Clone)]
pub struct SessionContext {
    pub host: Rc<dyn Host>,
    pub block_policy: Rc<dyn BlockPolicy>,
    pub pool: Arc<RegistryPool>,
    pub queue: Rc<TaskQueue>,
    pub loader: Rc<Loader>,
    pub min_host_version: Option<String>,
}

impl SessionContext {
    /// Wire up scanner, pool, block list and loader from a validated config
    pub fn from_config(config: &LoaderConfig, host: Rc<dyn Host>) -> Result<Self> {
        LoaderConfigValidator::new().validate(config)?;

        let primary_url = host.primary_url();
        let block_list = BlockList::new(&config.block_list, &primary_url)?;
        let scanner = Scanner::from_config(config);

        Ok(Self {
            host,
            block_policy: Rc::new(block_list),
            pool: Arc::new(RegistryPool::new(Arc::new(scanner))),
            queue: Rc::new(TaskQueue::new()),
            loader: Rc::new(Loader::from_config(config)),
            min_host_version: config.min_host_version.clone(),
        })
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("pool", &self.pool)
            .field("queue", &self.queue)
            .field("loader", &self.loader)
            .field("min_host_version", &self.min_host_version)
            .finish()
    }
}

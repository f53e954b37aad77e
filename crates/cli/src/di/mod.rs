use rusers_application::use_cases::{FindUserUseCase, QueryHostUseCase, QueryHostsUseCase};
use rusers_domain::Config;
use rusers_infrastructure::rusers::RusersClient;
use rusers_infrastructure::system::SystemHostnameResolver;
use std::sync::Arc;

/// Wires the adapters into the use cases.
pub struct UseCases {
    pub query_hosts: Arc<QueryHostsUseCase>,
    pub find_user: Arc<FindUserUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let sessions = Arc::new(RusersClient::new(&config.query));
        let hostnames = Arc::new(SystemHostnameResolver::new());

        let query_host = Arc::new(QueryHostUseCase::new(sessions, hostnames));
        let query_hosts = Arc::new(QueryHostsUseCase::new(query_host));
        let find_user = Arc::new(FindUserUseCase::new(query_hosts.clone()));

        Self {
            query_hosts,
            find_user,
        }
    }
}

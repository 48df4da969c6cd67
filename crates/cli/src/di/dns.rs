use answer_dns_application::use_cases::{AnswerResolver, HandleDnsQueryUseCase, ReloadAnswersUseCase};
use answer_dns_domain::Config;
use answer_dns_infrastructure::answers::{AnswersFileLoader, SharedAnswers};
use answer_dns_infrastructure::dns::{DnsServerHandler, UpstreamForwarder};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub reload: Arc<ReloadAnswersUseCase>,
    pub handler: Arc<DnsServerHandler>,
}

impl DnsServices {
    /// Wires the answer engine and performs the first load. A document that
    /// fails to load at startup is fatal.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        info!(
            answers = %config.answers.path,
            default_ttl = config.dns.default_ttl,
            upstream_timeout_ms = config.dns.upstream_timeout_ms,
            "Initializing DNS services"
        );

        let store = Arc::new(SharedAnswers::default());
        let loader = Arc::new(AnswersFileLoader::new(&config.answers.path));
        let reload = Arc::new(ReloadAnswersUseCase::new(loader, store.clone()));

        reload.execute().await?;

        let forwarder = Arc::new(UpstreamForwarder::new(Duration::from_millis(
            config.dns.upstream_timeout_ms,
        )));
        let resolver = Arc::new(AnswerResolver::new(forwarder, config.dns.default_ttl));
        let query_use_case = Arc::new(HandleDnsQueryUseCase::new(store, resolver));

        Ok(Self {
            reload,
            handler: Arc::new(DnsServerHandler::new(query_use_case)),
        })
    }
}

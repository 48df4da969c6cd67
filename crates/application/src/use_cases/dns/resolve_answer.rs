use crate::ports::UpstreamDelegate;
use crate::services::Shuffler;
use answer_dns_domain::{normalize_fqdn, Answers, ClientKey, CnameChain, ResolvedRecord};
use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::{debug, warn};

/// CNAME hops followed before giving up. Catches cycles that never repeat
/// an exact name.
pub const MAX_CNAME_DEPTH: usize = 10;

/// The answer engine: client tier, then default tier, following CNAME
/// chains, and as a last resort asking upstream for CNAME targets.
pub struct AnswerResolver {
    upstream: Arc<dyn UpstreamDelegate>,
    shuffler: Shuffler,
    default_ttl: u32,
}

/// Per-query state that does not change while recursing.
struct Lookup<'a> {
    answers: &'a Answers,
    origin: ClientKey,
}

impl AnswerResolver {
    pub fn new(upstream: Arc<dyn UpstreamDelegate>, default_ttl: u32) -> Self {
        Self {
            upstream,
            shuffler: Shuffler::default(),
            default_ttl,
        }
    }

    pub fn with_shuffler(mut self, shuffler: Shuffler) -> Self {
        self.shuffler = shuffler;
        self
    }

    /// Resolves `fqdn` for `client` against one answers snapshot.
    ///
    /// Returns the complete answer section (CNAME hops first, then the final
    /// addresses) or `None` when nothing answered. Callers outside the engine
    /// pass an empty chain.
    pub async fn resolve(
        &self,
        answers: &Answers,
        client: ClientKey,
        fqdn: &str,
        chain: CnameChain,
    ) -> Option<Vec<ResolvedRecord>> {
        let lookup = Lookup {
            answers,
            origin: client,
        };
        self.resolve_in_tier(&lookup, client, normalize_fqdn(fqdn), chain)
            .await
    }

    fn resolve_in_tier<'a>(
        &'a self,
        lookup: &'a Lookup<'a>,
        tier: ClientKey,
        fqdn: String,
        chain: CnameChain,
    ) -> BoxFuture<'a, Option<Vec<ResolvedRecord>>> {
        Box::pin(async move {
            if chain.len() >= MAX_CNAME_DEPTH {
                warn!(fqdn = %fqdn, client = %tier, chain = ?chain.names(), "Followed CNAME too many times");
                return None;
            }

            if let Some(cname) = self.matching_cname(lookup.answers, tier, &fqdn) {
                let target = cname.target().map(normalize_fqdn).unwrap_or_default();
                debug!(fqdn = %fqdn, client = %tier, target = %target, "Matched CNAME");

                if target == fqdn {
                    warn!(fqdn = %fqdn, client = %tier, "CNAME is a loop");
                    return None;
                }

                let children = self
                    .resolve_in_tier(lookup, tier, target.clone(), chain.with(cname.clone()))
                    .await;

                match children {
                    Some(children) if !children.is_empty() => {
                        debug!(fqdn = %fqdn, target = %target, client = %tier, answers = children.len(), "Resolved CNAME");
                        let mut records = Vec::with_capacity(children.len() + 1);
                        records.push(cname);
                        records.extend(children);
                        return Some(records);
                    }
                    _ => {
                        debug!(fqdn = %fqdn, target = %target, client = %tier, "CNAME target unresolved, trying A");
                    }
                }
            }

            if let Some(mut records) = self.matching_a(lookup.answers, tier, &fqdn) {
                debug!(fqdn = %fqdn, client = %tier, answers = records.len(), "Matched A");
                self.shuffler.shuffle(&mut records);
                return Some(records);
            }

            if !tier.is_default() {
                return self
                    .resolve_in_tier(lookup, ClientKey::Default, fqdn, CnameChain::new())
                    .await;
            }

            if !chain.is_empty() {
                let hosts = lookup.answers.recurse_hosts(lookup.origin);
                match self.upstream.try_all(&fqdn, &hosts).await {
                    Ok(records) => {
                        debug!(fqdn = %fqdn, client = %lookup.origin, answers = records.len(), "Resolved CNAME target upstream");
                        return Some(records);
                    }
                    Err(e) if e.is_upstream_failure() => {
                        debug!(fqdn = %fqdn, client = %lookup.origin, error = %e, "Upstream lookup failed");
                    }
                    Err(e) => {
                        warn!(fqdn = %fqdn, client = %lookup.origin, error = %e, "Upstream delegate failed unexpectedly");
                    }
                }
            }

            debug!(fqdn = %fqdn, client = %tier, "Did not match anything");
            None
        })
    }

    fn matching_cname(
        &self,
        answers: &Answers,
        tier: ClientKey,
        fqdn: &str,
    ) -> Option<ResolvedRecord> {
        answers
            .lookup(tier)?
            .cname_entry(fqdn)
            .map(|entry| entry.to_record(fqdn, self.default_ttl))
    }

    fn matching_a(
        &self,
        answers: &Answers,
        tier: ClientKey,
        fqdn: &str,
    ) -> Option<Vec<ResolvedRecord>> {
        let records = answers
            .lookup(tier)?
            .a_entry(fqdn)?
            .to_records(fqdn, self.default_ttl);
        (!records.is_empty()).then_some(records)
    }
}

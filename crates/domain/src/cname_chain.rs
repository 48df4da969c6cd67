use crate::dns_record::ResolvedRecord;

/// CNAME records already followed during one resolution, oldest first.
///
/// The chain is a value: [`CnameChain::with`] returns an extended copy and
/// leaves the receiver untouched, so sibling branches of a resolution never
/// observe each other's hops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CnameChain {
    hops: Vec<ResolvedRecord>,
}

impl CnameChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(&self, hop: ResolvedRecord) -> Self {
        let mut hops = Vec::with_capacity(self.hops.len() + 1);
        hops.extend_from_slice(&self.hops);
        hops.push(hop);
        Self { hops }
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn hops(&self) -> &[ResolvedRecord] {
        &self.hops
    }

    /// Names visited so far, for diagnostics.
    pub fn names(&self) -> Vec<&str> {
        self.hops.iter().map(|hop| hop.name.as_str()).collect()
    }
}

use answer_dns_domain::{DomainError, ResolvedRecord};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::RData;
use tracing::debug;

/// The parts of an upstream reply the forwarder cares about.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// QR bit.
    pub is_response: bool,

    /// Name in the first question, if any.
    pub question: Option<String>,

    /// A and CNAME answers in the order the server sent them. Other types
    /// are dropped.
    pub records: Vec<ResolvedRecord>,
}

impl DnsResponse {
    pub fn is_success(&self) -> bool {
        self.rcode == ResponseCode::NoError
    }

    /// True when the question section carries `fqdn`, ignoring case and the
    /// trailing dot.
    pub fn echoes(&self, fqdn: &str) -> bool {
        self.question.as_deref().is_some_and(|question| {
            question
                .trim_end_matches('.')
                .eq_ignore_ascii_case(fqdn.trim_end_matches('.'))
        })
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::MalformedMessage(format!("Failed to parse DNS response: {}", e))
        })?;

        let mut records = Vec::with_capacity(message.answers().len());
        let mut skipped = 0usize;

        for record in message.answers() {
            let name = record.name().to_utf8();
            match record.data() {
                RData::A(a) => records.push(ResolvedRecord::a(name, record.ttl(), a.0)),
                RData::CNAME(canonical) => records.push(ResolvedRecord::cname(
                    name,
                    record.ttl(),
                    canonical.to_utf8(),
                )),
                _ => skipped += 1,
            }
        }

        debug!(
            rcode = ?message.response_code(),
            answers = records.len(),
            skipped,
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            is_response: message.message_type() == MessageType::Response,
            question: message.queries().first().map(|query| query.name().to_utf8()),
            records,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

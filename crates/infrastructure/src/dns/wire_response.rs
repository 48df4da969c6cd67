use super::forwarding::MessageBuilder;
use answer_dns_domain::{DomainError, RecordData, ResolvedRecord};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::{A, CNAME};
use hickory_proto::rr::{Name, RData, Record};
use std::str::FromStr;

/// Largest reply sent over UDP. Clients advertising a bigger EDNS payload
/// still get 512 bytes and retry over TCP.
pub const MAX_UDP_PAYLOAD: usize = 512;

/// Builds reply messages for incoming queries.
pub struct ResponseAssembler;

impl ResponseAssembler {
    /// NOERROR reply carrying `records` in order.
    pub fn answer(request: &Message, records: &[ResolvedRecord]) -> Result<Message, DomainError> {
        let mut response = Self::reply_to(request, ResponseCode::NoError);
        for record in records {
            response.add_answer(Self::to_record(record)?);
        }
        Ok(response)
    }

    pub fn error(request: &Message, code: ResponseCode) -> Message {
        Self::reply_to(request, code)
    }

    /// Empty reply with TC set, telling the client to ask again over TCP.
    pub fn truncated(request: &Message) -> Message {
        let mut response = Self::reply_to(request, ResponseCode::NoError);
        response.set_truncated(true);
        response
    }

    pub fn encode(message: &Message) -> Result<Vec<u8>, DomainError> {
        MessageBuilder::serialize_message(message)
    }

    /// Encodes for a UDP client, falling back to a truncated reply when the
    /// full answer does not fit.
    pub fn encode_for_udp(request: &Message, message: &Message) -> Result<Vec<u8>, DomainError> {
        let bytes = Self::encode(message)?;
        if bytes.len() <= MAX_UDP_PAYLOAD {
            return Ok(bytes);
        }
        Self::encode(&Self::truncated(request))
    }

    pub fn to_record(record: &ResolvedRecord) -> Result<Record, DomainError> {
        let name = parse_name(&record.name)?;
        let rdata = match &record.data {
            RecordData::A(address) => RData::A(A(*address)),
            RecordData::Cname(target) => RData::CNAME(CNAME(parse_name(target)?)),
        };
        Ok(Record::from_rdata(name, record.ttl, rdata))
    }

    fn reply_to(request: &Message, code: ResponseCode) -> Message {
        let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
        response.set_authoritative(true);
        response.set_recursion_desired(request.recursion_desired());
        response.set_recursion_available(true);
        response.set_response_code(code);
        for query in request.queries() {
            response.add_query(query.clone());
        }
        response
    }
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_str(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("Invalid name '{}': {}", name, e)))
}

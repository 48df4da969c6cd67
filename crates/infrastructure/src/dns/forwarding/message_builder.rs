//! DNS query construction in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use answer_dns_domain::{DomainError, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Builds a recursive query with a random ID and a single question.
    ///
    /// Returns the ID alongside the bytes so the caller can match the reply.
    pub fn build_query_with_id(
        domain: &str,
        record_type: RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::MalformedMessage(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_a_query() {
        let (_, bytes) = MessageBuilder::build_query_with_id("website.", RecordType::A).unwrap();

        assert!(bytes.len() >= 12, "DNS message too short: {} bytes", bytes.len());
        // Byte 2: QR(1) + Opcode(4) + AA(1) + TC(1) + RD(1)
        assert_eq!(bytes[2] & 0x01, 0x01, "RD flag should be set");
        assert_eq!(bytes[2] & 0x80, 0x00, "QR flag should be clear");
    }

    #[test]
    fn test_wire_id_matches_returned_id() {
        let (id, bytes) = MessageBuilder::build_query_with_id("test.com.", RecordType::A).unwrap();

        let wire_id = u16::from_be_bytes([bytes[0], bytes[1]]);
        assert_eq!(wire_id, id);
    }

    #[test]
    fn test_question_round_trips_through_parser() {
        let (_, bytes) = MessageBuilder::build_query_with_id("www.example.com.", RecordType::CNAME)
            .unwrap();

        let message = Message::from_vec(&bytes).unwrap();
        let query = &message.queries()[0];
        assert_eq!(query.name().to_utf8(), "www.example.com.");
        assert_eq!(
            query.query_type(),
            hickory_proto::rr::RecordType::CNAME
        );
    }
}

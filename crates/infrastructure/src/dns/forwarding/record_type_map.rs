//! Mapping between `answer_dns_domain::RecordType` and `hickory_proto::rr::RecordType`.

use answer_dns_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::CNAME => HickoryRecordType::CNAME,
        }
    }

    /// Returns `None` for every type the answer engine does not serve.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            _ => None,
        }
    }
}

use crate::dns::forwarding::RecordTypeMapper;
use crate::dns::wire_response::ResponseAssembler;
use answer_dns_application::use_cases::HandleDnsQueryUseCase;
use answer_dns_domain::{DnsRequest, ResolvedRecord};
use hickory_proto::op::{Header, Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::{Record, RecordType as HickoryRecordType};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Answers DNS queries from the per-client answers. TCP connections are
/// served through `RequestHandler`; the UDP listener hands raw datagrams to
/// [`DnsServerHandler::handle_raw_udp`].
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns `None` when nothing should be sent back: the bytes were not a
    /// DNS message, or were a response rather than a query.
    pub async fn handle_raw_udp(&self, bytes: &[u8], client_ip: IpAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(bytes) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %client_ip, error = %e, "Dropping undecodable query");
                return None;
            }
        };

        if request.message_type() != MessageType::Query {
            debug!(client = %client_ip, "Dropping message that is not a query");
            return None;
        }

        let response = self.respond(&request, client_ip).await;

        match ResponseAssembler::encode_for_udp(&request, &response) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(client = %client_ip, error = %e, "Failed to encode response");
                ResponseAssembler::encode(&ResponseAssembler::error(&request, ResponseCode::ServFail))
                    .ok()
            }
        }
    }

    async fn respond(&self, request: &Message, client_ip: IpAddr) -> Message {
        if request.op_code() != OpCode::Query {
            warn!(client = %client_ip, op_code = ?request.op_code(), "Unsupported opcode");
            return ResponseAssembler::error(request, ResponseCode::NotImp);
        }

        let Some(query) = request.queries().first() else {
            warn!(client = %client_ip, "Query without a question");
            return ResponseAssembler::error(request, ResponseCode::FormErr);
        };

        let records = match self
            .resolve(&query.name().to_utf8(), query.query_type(), client_ip)
            .await
        {
            Ok(records) => records,
            Err(code) => return ResponseAssembler::error(request, code),
        };

        match ResponseAssembler::answer(request, &records) {
            Ok(response) => response,
            Err(e) => {
                error!(client = %client_ip, error = %e, "Failed to build answer");
                ResponseAssembler::error(request, ResponseCode::ServFail)
            }
        }
    }

    /// Runs one question through the use case; the error side is the
    /// response code to answer with.
    async fn resolve(
        &self,
        domain: &str,
        hickory_record_type: HickoryRecordType,
        client_ip: IpAddr,
    ) -> Result<Vec<ResolvedRecord>, ResponseCode> {
        debug!(domain = %domain, record_type = ?hickory_record_type, client = %client_ip, "DNS query received");

        let Some(record_type) = RecordTypeMapper::from_hickory(hickory_record_type) else {
            debug!(domain = %domain, record_type = ?hickory_record_type, "Unsupported record type");
            return Err(ResponseCode::NotImp);
        };

        let dns_request = DnsRequest::new(domain, record_type, client_ip);

        self.use_case.execute(&dns_request).await.map_err(|e| {
            debug!(domain = %domain, client = %client_ip, error = %e, "Answering SERVFAIL");
            ResponseCode::ServFail
        })
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let client_ip = request.src().ip();

        if request.header().op_code() != OpCode::Query {
            warn!(client = %client_ip, op_code = ?request.header().op_code(), "Unsupported opcode");
            return send_error_response(request, &mut response_handle, ResponseCode::NotImp).await;
        }

        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                warn!(client = %client_ip, error = %e, "Query without a usable question");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let records = match self
            .resolve(&query.name().to_utf8(), query.query_type(), client_ip)
            .await
        {
            Ok(records) => records,
            Err(code) => return send_error_response(request, &mut response_handle, code).await,
        };

        let answers: Vec<Record> = match records.iter().map(ResponseAssembler::to_record).collect() {
            Ok(answers) => answers,
            Err(e) => {
                error!(client = %client_ip, error = %e, "Failed to build answer");
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        let builder = MessageResponseBuilder::from_message_request(request);
        let header = response_header(request, ResponseCode::NoError);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                debug!(client = %client_ip, error = %e, "Failed to send TCP response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

fn response_header(request: &Request, code: ResponseCode) -> Header {
    let mut header = Header::response_from_request(request.header());
    header.set_authoritative(true);
    header.set_recursion_available(true);
    header.set_response_code(code);
    header
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    let builder = MessageResponseBuilder::from_message_request(request);
    let response = builder.build(response_header(request, code), &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            debug!(code = ?code, error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}

pub mod forwarding;
pub mod server;
pub mod transport;
pub mod wire_response;

pub use forwarding::UpstreamForwarder;
pub use server::DnsServerHandler;
pub use wire_response::ResponseAssembler;

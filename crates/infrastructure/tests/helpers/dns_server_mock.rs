#![allow(dead_code)]
use answer_dns_infrastructure::dns::transport::tcp::{read_with_length_prefix, send_with_length_prefix};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::{A, CNAME};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// How the mock upstream answers every query it receives.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    Answer(Vec<Ipv4Addr>),
    CnameThenA {
        target: String,
        addresses: Vec<Ipv4Addr>,
    },
    Rcode(ResponseCode),
    /// Empty TC reply over UDP, the full answer over TCP.
    TruncateOverUdp(Vec<Ipv4Addr>),
    WrongId,
    /// Reply with the QR bit clear.
    NotResponse,
    /// Reply whose question names a different domain.
    WrongQuestion,
    Silent,
}

/// A local upstream listening on UDP and TCP on the same port.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let udp_count = Arc::clone(&udp_queries);
        let tcp_count = Arc::clone(&tcp_queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            if let Some(reply) = Self::build_reply(&buf[..len], &behavior, false) {
                                let _ = socket.send_to(&reply, peer).await;
                            }
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((mut stream, _)) = accepted {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            let behavior = behavior.clone();
                            tokio::spawn(async move {
                                if let Ok(query) = read_with_length_prefix(&mut stream).await {
                                    if let Some(reply) = Self::build_reply(&query, &behavior, true) {
                                        let _ = send_with_length_prefix(&mut stream, &reply).await;
                                    }
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    fn build_reply(query: &[u8], behavior: &MockBehavior, over_tcp: bool) -> Option<Vec<u8>> {
        let request = Message::from_vec(query).ok()?;
        let mut question = request.queries().first()?.clone();
        let name = question.name().clone();
        if let MockBehavior::WrongQuestion = behavior {
            question.set_name(Name::from_str("evil.example.").ok()?);
        }

        let id = match behavior {
            MockBehavior::WrongId => request.id().wrapping_add(1),
            _ => request.id(),
        };

        let message_type = match behavior {
            MockBehavior::NotResponse => MessageType::Query,
            _ => MessageType::Response,
        };

        let mut reply = Message::new(id, message_type, request.op_code());
        reply.set_recursion_desired(true);
        reply.set_recursion_available(true);
        reply.add_query(question);

        let a_records = |owner: &Name, addresses: &[Ipv4Addr]| -> Vec<Record> {
            addresses
                .iter()
                .map(|ip| Record::from_rdata(owner.clone(), 300, RData::A(A(*ip))))
                .collect()
        };

        match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::Answer(addresses) => {
                for record in a_records(&name, addresses) {
                    reply.add_answer(record);
                }
            }
            MockBehavior::WrongId | MockBehavior::NotResponse | MockBehavior::WrongQuestion => {
                for record in a_records(&name, &[Ipv4Addr::new(10, 9, 9, 9)]) {
                    reply.add_answer(record);
                }
            }
            MockBehavior::CnameThenA { target, addresses } => {
                let target = Name::from_str(target).ok()?;
                reply.add_answer(Record::from_rdata(
                    name.clone(),
                    300,
                    RData::CNAME(CNAME(target.clone())),
                ));
                for record in a_records(&target, addresses) {
                    reply.add_answer(record);
                }
            }
            MockBehavior::Rcode(code) => {
                reply.set_response_code(*code);
            }
            MockBehavior::TruncateOverUdp(addresses) => {
                if over_tcp {
                    for record in a_records(&name, addresses) {
                        reply.add_answer(record);
                    }
                } else {
                    reply.set_truncated(true);
                }
            }
        }

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        reply.emit(&mut encoder).ok()?;
        Some(buf)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

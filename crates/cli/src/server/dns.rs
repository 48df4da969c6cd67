use answer_dns_infrastructure::dns::DnsServerHandler;
use hickory_server::ServerFuture;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

const TCP_IDLE_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_UDP_QUERY_SIZE: usize = 4096;

pub async fn start_dns_server(
    bind_addr: String,
    handler: Arc<DnsServerHandler>,
    tcp_enabled: bool,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let mut join_set: JoinSet<()> = JoinSet::new();

    let udp_socket = Arc::new(create_udp_socket(domain, socket_addr)?);
    let handler_udp = Arc::clone(&handler);
    join_set.spawn(async move {
        run_udp_listener(udp_socket, handler_udp).await;
    });

    if tcp_enabled {
        let tcp_listener = create_tcp_listener(domain, socket_addr)?;
        let handler_tcp = Arc::clone(&handler);
        join_set.spawn(async move {
            run_tcp_listener(tcp_listener, handler_tcp).await;
        });
    }

    info!(bind_address = %socket_addr, tcp_enabled, "DNS server ready");

    while join_set.join_next().await.is_some() {}
    Ok(())
}

async fn run_udp_listener(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>) {
    let mut recv_buf = [0u8; MAX_UDP_QUERY_SIZE];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                // ICMP errors from earlier sends surface here on some platforms.
                warn!(error = %e, "UDP recv error");
                continue;
            }
        };

        let query: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        let handler = Arc::clone(&handler);
        let socket = Arc::clone(&socket);
        tokio::spawn(async move {
            if let Some(response) = handler.handle_raw_udp(&query, from.ip()).await {
                if let Err(e) = socket.send_to(&response, from).await {
                    debug!(client = %from, error = %e, "Failed to send UDP response");
                }
            }
        });
    }
}

async fn run_tcp_listener(listener: TcpListener, handler: Arc<DnsServerHandler>) {
    let mut server = ServerFuture::new((*handler).clone());
    server.register_listener(listener, TCP_IDLE_TIMEOUT);
    if let Err(e) = server.block_until_done().await {
        error!(error = %e, "TCP DNS server error");
    }
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}

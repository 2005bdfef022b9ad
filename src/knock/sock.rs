use std::net::{Shutdown, SocketAddr};
use std::time::Duration;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use socket2::SockRef;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpSocket, UdpSocket};
use tokio::time::timeout;
use crate::Bind;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn udp(&self, dst: SocketAddr, data: &[u8]) -> Result<()>;

    async fn tcp(&self, dst: SocketAddr, data: &[u8]) -> Result<()>;
}

pub struct Sockets {
    bind:   Bind,
    expiry: Duration,
}

impl Sockets {
    pub fn new(bind: &Bind, expiry: Duration) -> Self {
        Self { bind: bind.clone(), expiry }
    }
}

#[async_trait]
impl Transport for Sockets {
    async fn udp(&self, dst: SocketAddr, data: &[u8]) -> Result<()> {
        let sock = UdpSocket::bind(self.bind.source(dst.ip())).await?;

        let n = timeout(self.expiry, sock.send_to(data, dst)).await??;
        match n == data.len() {
            true  => Ok(()),
            false => Err(anyhow!("short datagram: {} of {} bytes", n, data.len())),
        }
    }

    async fn tcp(&self, dst: SocketAddr, data: &[u8]) -> Result<()> {
        let sock = match dst {
            SocketAddr::V4(..) => TcpSocket::new_v4()?,
            SocketAddr::V6(..) => TcpSocket::new_v6()?,
        };
        sock.bind(self.bind.source(dst.ip()))?;

        let mut stream = timeout(self.expiry, sock.connect(dst)).await??;
        timeout(self.expiry, stream.write_all(data)).await??;

        SockRef::from(&stream).shutdown(Shutdown::Both)?;

        Ok(())
    }
}

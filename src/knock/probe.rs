use std::fmt;
use std::net::{IpAddr, SocketAddr, SocketAddrV6};
use crate::Payload;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Protocol {
    UDP,
    TCP,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Probe {
    pub addr:    IpAddr,
    pub scope:   u32,
    pub port:    u16,
    pub proto:   Protocol,
    pub payload: Payload,
}

impl Probe {
    pub fn new(addr: IpAddr, port: u16, proto: Protocol, payload: Payload) -> Self {
        Self { addr, scope: 0, port, proto, payload }
    }

    pub fn scoped(self, scope: u32) -> Self {
        Self { scope, ..self }
    }

    pub fn dst(&self) -> SocketAddr {
        match self.addr {
            IpAddr::V6(ip) => SocketAddr::V6(SocketAddrV6::new(ip, self.port, 0, self.scope)),
            IpAddr::V4(..) => SocketAddr::new(self.addr, self.port),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UDP => f.write_str("UDP"),
            Self::TCP => f.write_str("TCP"),
        }
    }
}

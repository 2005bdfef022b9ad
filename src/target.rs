use std::ffi::CString;
use std::net::{IpAddr, Ipv6Addr};
use crate::knock::{Probe, Protocol};
use crate::Payload;

/// Knock targets in insertion order. Malformed input is silently dropped.
#[derive(Clone, Debug, Default)]
pub struct Targets {
    addrs: Vec<(IpAddr, u32)>,
    udp:   Vec<u16>,
    tcp:   Vec<u16>,
}

impl Targets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_addr(&mut self, text: &str) {
        match parse(text.trim()) {
            Some((addr, scope)) if !addr.is_unspecified() => self.addrs.push((addr, scope)),
            _                                             => (),
        }
    }

    pub fn add_port(&mut self, text: &str, proto: Protocol) {
        if let Ok(port) = text.trim().parse::<u16>() {
            match proto {
                Protocol::UDP => self.udp.push(port),
                Protocol::TCP => self.tcp.push(port),
            }
        }
    }

    pub fn addrs(&self) -> impl Iterator<Item = IpAddr> + '_ {
        self.addrs.iter().map(|&(addr, _)| addr)
    }

    pub fn ports(&self, proto: Protocol) -> &[u16] {
        match proto {
            Protocol::UDP => &self.udp,
            Protocol::TCP => &self.tcp,
        }
    }

    pub fn probes<'a>(&'a self, payload: &'a Payload) -> impl Iterator<Item = Probe> + 'a {
        self.addrs.iter().flat_map(move |&(addr, scope)| {
            let udp = self.udp.iter().map(move |&port| (port, Protocol::UDP));
            let tcp = self.tcp.iter().map(move |&port| (port, Protocol::TCP));
            udp.chain(tcp).map(move |(port, proto)| {
                Probe::new(addr, port, proto, payload.clone()).scoped(scope)
            })
        })
    }
}

// Accepts a zone suffix on IPv6 text, either numeric or an interface name.
fn parse(text: &str) -> Option<(IpAddr, u32)> {
    if let Ok(addr) = text.parse::<IpAddr>() {
        return Some((addr, 0));
    }

    let (addr, zone) = text.split_once('%')?;
    let addr  = addr.parse::<Ipv6Addr>().ok()?;
    let scope = zone.parse::<u32>().ok().or_else(|| index(zone))?;

    Some((IpAddr::V6(addr), scope))
}

fn index(name: &str) -> Option<u32> {
    let name = CString::new(name).ok()?;
    match unsafe { libc::if_nametoindex(name.as_ptr()) } {
        0 => None,
        n => Some(n),
    }
}

use std::io::{self, Write};
use crate::knock::{Outcome, Probe, Protocol};

pub const KNOCKED: &str = "I've knocked for you.";

pub struct Report<W: Write> {
    out:  W,
    sent: usize,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out, sent: 0 }
    }

    pub fn record(&mut self, outcome: &Outcome) -> io::Result<()> {
        if let Some(probe) = outcome.sent() {
            writeln!(self.out, "{}", line(probe))?;
            self.sent += 1;
        }
        Ok(())
    }

    pub fn sent(&self) -> usize {
        self.sent
    }

    pub fn finish(mut self) -> io::Result<bool> {
        if self.sent > 0 {
            writeln!(self.out, "{}", KNOCKED)?;
        }
        self.out.flush()?;
        Ok(self.sent > 0)
    }
}

pub fn line(probe: &Probe) -> String {
    let Probe { addr, scope, port, proto, payload } = probe;
    let host = match scope {
        0 => addr.to_string(),
        _ => format!("{}%{}", addr, scope),
    };
    match proto {
        Protocol::UDP => format!("Sent UDP packet '{}' to {}:{}.", payload, host, port),
        Protocol::TCP => format!("Sent TCP packet to {}:{}.", host, port),
    }
}

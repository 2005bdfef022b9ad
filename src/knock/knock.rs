use std::future::Future;
use std::io::Write;
use std::time::Duration;
use anyhow::{Context, Result};
use futures::{pin_mut, Stream};
use futures::stream::{self, StreamExt};
use log::{debug, warn};
use tokio::time::sleep;
use crate::{Bind, Payload, Report, Source, Targets};
use super::outcome::Outcome;
use super::probe::{Probe, Protocol};
use super::sock::{Sockets, Transport};

#[derive(Debug)]
pub struct Knock {
    pub targets: Targets,
    pub payload: Payload,
    pub delay:   Duration,
}

pub struct Knocker<T = Sockets> {
    transport: T,
}

impl Knocker<Sockets> {
    pub fn new(bind: &Bind, expiry: Duration) -> Self {
        Self::with_transport(Sockets::new(bind, expiry))
    }
}

impl<T: Transport> Knocker<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Resolves the payload, then knocks and reports until done or until
    /// `stop` completes. Returns whether any knock was sent.
    pub async fn run<I, W, F>(
        &self,
        targets: Targets,
        sources: I,
        delay:   Duration,
        out:     W,
        stop:    F,
    ) -> Result<bool>
    where
        I: IntoIterator<Item = Source>,
        W: Write,
        F: Future,
    {
        let payload = Payload::resolve(&Payload::default(), sources).context("invalid packet")?;
        let knock   = Knock { targets, payload, delay };

        let stream = self.knock(&knock);
        pin_mut!(stream);
        pin_mut!(stop);

        let mut report = Report::new(out);

        loop {
            tokio::select! {
                item = stream.next() => match item {
                    Some(outcome) => report.record(&outcome)?,
                    None          => break,
                },
                _ = &mut stop => {
                    warn!("interrupted after {} knocks", report.sent());
                    break;
                }
            }
        }

        Ok(report.finish()?)
    }

    pub fn knock<'a>(&'a self, knock: &'a Knock) -> impl Stream<Item = Outcome> + 'a {
        let Knock { targets, payload, delay } = knock;
        let delay = *delay;

        stream::iter(targets.probes(payload).enumerate()).then(move |(n, probe)| async move {
            if n > 0 && !delay.is_zero() {
                sleep(delay).await;
            }
            self.probe(probe).await
        })
    }

    async fn probe(&self, probe: Probe) -> Outcome {
        let dst  = probe.dst();
        let data = probe.payload.bytes();

        let result = match probe.proto {
            Protocol::UDP => self.transport.udp(dst, data).await,
            Protocol::TCP => self.transport.tcp(dst, data).await,
        };

        match result {
            Ok(()) => {
                debug!("sent {} knock to {}", probe.proto, dst);
                Outcome::Sent(probe)
            }
            Err(e) => {
                debug!("{} knock to {} failed: {}", probe.proto, dst, e);
                Outcome::Failed
            }
        }
    }
}

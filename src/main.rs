use std::io;
use std::net::IpAddr;
use std::time::Duration;
use anyhow::Result;
use env_logger::Env;
use gumdrop::{Options, Opt, Parser, ParsingStyle};
use tokio::signal::ctrl_c;
use portknock::{Bind, Knocker, Protocol, Source, Targets};

/// I'm the one who knocks.
#[derive(Debug, Options)]
pub struct Args {
    #[options(help = "show this help message")]
    help:   bool,
    #[options(meta = "ADDR", help = "IP address to knock on")]
    ip:     Vec<String>,
    #[options(meta = "PORT", help = "UDP port to knock on")]
    udp:    Vec<String>,
    #[options(meta = "PORT", help = "TCP port to knock on")]
    tcp:    Vec<String>,
    #[options(meta = "TEXT", help = "packet as text (default 0x00 0x01)")]
    packet: Option<String>,
    #[options(short = "b", meta = "HEX", help = "packet as hex digits")]
    binary: Option<String>,
    #[options(no_short, meta = "ADDR", help = "local source address")]
    bind:   Vec<IpAddr>,
    #[options(no_short, default = "3000", help = "per-knock timeout in ms")]
    expiry: u64,
    #[options(no_short, default = "0", help = "pause between knocks in ms")]
    delay:  u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let argv = std::env::args().skip(1).collect::<Vec<_>>();
    let args = Args::parse_args_default_or_exit();
    let Args { ip, udp, tcp, bind: addrs, expiry, delay, .. } = args;

    let mut targets = Targets::new();
    ip.iter().for_each(|addr| targets.add_addr(addr));
    udp.iter().for_each(|port| targets.add_port(port, Protocol::UDP));
    tcp.iter().for_each(|port| targets.add_port(port, Protocol::TCP));

    let mut bind = Bind::default();
    addrs.into_iter().for_each(|addr| bind.set(addr));

    let expiry  = Duration::from_millis(expiry);
    let delay   = Duration::from_millis(delay);
    let knocker = Knocker::new(&bind, expiry);

    knocker.run(targets, sources(&argv), delay, io::stdout(), ctrl_c()).await?;

    Ok(())
}

/// Payload overrides in the order they appear on the command line.
fn sources<S: AsRef<str>>(argv: &[S]) -> Vec<Source> {
    let mut parser  = Parser::new(argv, ParsingStyle::AllOptions);
    let mut sources = Vec::new();

    while let Some(opt) = parser.next_opt() {
        let source = match opt {
            Opt::Short('p') | Opt::Long("packet") => parser.next_arg().map(text),
            Opt::Short('b') | Opt::Long("binary") => parser.next_arg().map(hex),
            Opt::LongWithArg("packet", arg)       => Some(text(arg)),
            Opt::LongWithArg("binary", arg)       => Some(hex(arg)),
            Opt::Short('i' | 'u' | 't')           => parser.next_arg().and(None),
            Opt::Long("ip" | "udp" | "tcp" | "bind" | "expiry" | "delay") => {
                parser.next_arg().and(None)
            }
            _ => None,
        };
        sources.extend(source);
    }

    sources
}

fn text(arg: &str) -> Source {
    Source::Text(arg.to_owned())
}

fn hex(arg: &str) -> Source {
    Source::Hex(arg.to_owned())
}

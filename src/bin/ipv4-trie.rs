//! Command-line driver that replays a script of trie commands and prints the results.
//!
//! Each line of the script holds one command: `insert <addr>`, `search <addr>`, `delete <addr>`,
//! or `list`. Blank lines and lines starting with `#` are ignored.

use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use ipv4_trie::{addr, DottedQuad, Ipv4Trie};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const DEMO: &str = "\
insert 192.168.1.1
insert 10.0.0.1
insert 256.0.0.1
search 192.168.1.1
search 10.0.0.1
search 172.16.0.1
search 256.0.0.1
delete 192.168.1.1
search 192.168.1.1
insert 10.8.2.5
insert 10.0.0.1
insert 140.0.0.1
insert 5.80.35.6
list
";

/// Replay insert, search, delete and list commands against a trie of IPv4 addresses.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Script to execute. Commands are read from stdin if omitted.
    script: Option<PathBuf>,

    /// Run the built-in demonstration script instead.
    #[arg(long, conflicts_with = "script")]
    demo: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'a> {
    Insert(&'a str),
    Search(&'a str),
    Delete(&'a str),
    List,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let mut words = line.split_whitespace();
        let cmd = match (words.next(), words.next()) {
            (Some("insert"), Some(a)) => Command::Insert(a),
            (Some("search"), Some(a)) => Command::Search(a),
            (Some("delete"), Some(a)) => Command::Delete(a),
            (Some("list"), None) => Command::List,
            _ => bail!("unknown command: {line}"),
        };
        if words.next().is_some() {
            bail!("trailing arguments: {line}");
        }
        Ok(Some(cmd))
    }
}

fn execute(trie: &mut Ipv4Trie, cmd: Command<'_>, out: &mut impl Write) -> Result<()> {
    match cmd {
        Command::Insert(text) => match addr::parse(text) {
            Ok(key) => {
                writeln!(out, "Valid IP: {text}")?;
                if !trie.insert(key) {
                    debug!(addr = text, "address already present");
                }
            }
            Err(e) => {
                warn!(addr = text, error = %e, "rejected address");
                writeln!(out, "Invalid IP: {text}")?;
            }
        },
        Command::Search(text) => {
            // an unparsable address can never be part of the trie
            let found = addr::parse(text).map(|k| trie.contains(k)).unwrap_or(false);
            let result = if found { "Found" } else { "Not Found" };
            writeln!(out, "Search {text}: {result}")?;
        }
        Command::Delete(text) => match addr::parse(text) {
            Ok(key) => {
                if !trie.remove(key) {
                    debug!(addr = text, "address not present");
                }
            }
            Err(e) => warn!(addr = text, error = %e, "rejected address"),
        },
        Command::List => {
            let list = trie
                .iter()
                .map(|k| DottedQuad(k).to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(out, "{list}")?;
        }
    }
    Ok(())
}

fn run(input: impl BufRead, out: &mut impl Write) -> Result<Ipv4Trie> {
    let mut trie = Ipv4Trie::new();
    for (no, line) in input.lines().enumerate() {
        let line = line.context("cannot read script")?;
        match Command::parse(&line) {
            Ok(Some(cmd)) => execute(&mut trie, cmd, &mut *out)?,
            Ok(None) => {}
            Err(e) => warn!(line = no + 1, "{e}"),
        }
    }
    Ok(trie)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let trie = if args.demo {
        info!("running demonstration script");
        run(DEMO.as_bytes(), &mut out)?
    } else if let Some(path) = &args.script {
        info!(path = %path.display(), "running script");
        let script = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        run(script.as_bytes(), &mut out)?
    } else {
        run(io::stdin().lock(), &mut out)?
    };

    info!(
        addresses = trie.len(),
        nodes = trie.node_count(),
        "script finished"
    );
    Ok(())
}

use clap::{Parser, ValueEnum};
use secgen::formats::jsonl::JsonlWriter;
use secgen::sources::normal::DEFAULT_EVENT_COUNT;
use secgen::sources::ssh::DEFAULT_AUTH_LOG;
use secgen::sources::{
    BruteForceScenario, LogTamperingScenario, NormalTrafficGenerator, PrivilegeAbuseScenario,
    SshLogIngestor,
};
use secgen::traits::{EventSource, EventWriter};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "secgen")]
#[command(about = "Security event generator", long_about = None)]
struct Cli {
    /// Emission mode.
    #[arg(long, value_enum, default_value_t = Mode::Normal)]
    mode: Mode,
    /// Output file; truncated and rewritten on every run.
    #[arg(short, long, default_value = "events.jsonl")]
    output: PathBuf,
    /// Number of normal-traffic events to sample.
    #[arg(long, default_value_t = DEFAULT_EVENT_COUNT)]
    count: usize,
    /// Auth log read in ssh mode.
    #[arg(long, default_value = DEFAULT_AUTH_LOG)]
    auth_log: PathBuf,
    /// RNG seed for deterministic sampling.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Weighted-random baseline traffic.
    Normal,
    /// Baseline traffic followed by the three attack scenarios.
    Attack,
    /// Ingest a real SSH auth log.
    Ssh,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // The output handle is released by drop on every exit path; close() only
    // adds the final flush on success.
    let mut writer = JsonlWriter::create(&cli.output)?;
    println!("[+] writing events to {}", cli.output.display());

    match cli.mode {
        Mode::Normal => {
            let mut source = NormalTrafficGenerator::new(cli.count, cli.seed)?;
            drain(&mut source, &mut writer)?;
        }
        Mode::Attack => {
            let mut sources: Vec<Box<dyn EventSource>> = vec![
                Box::new(NormalTrafficGenerator::new(cli.count, cli.seed)?),
                Box::new(BruteForceScenario::new()),
                Box::new(PrivilegeAbuseScenario::new()),
                Box::new(LogTamperingScenario::new()),
            ];
            for source in &mut sources {
                drain(source.as_mut(), &mut writer)?;
            }
        }
        Mode::Ssh => {
            println!("[+] ingesting ssh auth log from {}", cli.auth_log.display());
            let mut source = SshLogIngestor::open(&cli.auth_log)?;
            drain(&mut source, &mut writer)?;
        }
    }

    writer.close()?;
    println!("[✓] done");
    Ok(())
}

/// Moves every remaining event from `source` into `writer`, in order.
fn drain(source: &mut dyn EventSource, writer: &mut dyn EventWriter) -> io::Result<u64> {
    let mut written = 0;
    while let Some(event) = source.next_event()? {
        writer.write_event(&event)?;
        written += 1;
    }
    Ok(written)
}

use anyhow::{Context, Result};
use flatboy_common::Headless;
use flatboy_gb::{GameBoy, RunConfig, RunSummary};

/// Command line options for the headless runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub rom_path: String,
    pub max_steps: Option<u64>,
    pub trace: bool,
}

pub const USAGE: &str = "\
Usage: flatboy <rom.gb> [--steps N] [--trace]

Runs a ROM-only Game Boy cartridge on the CPU core until it halts.

Options:
  --steps N   stop after N instructions
  --trace     log every instruction at trace level (RUST_LOG=trace)
  -h, --help  print this message";

/// Outcome of argument parsing.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut rom_path = None;
    let mut max_steps = None;
    let mut trace = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--trace" => trace = true,
            "--steps" => {
                let value = args.next().context("--steps needs a value")?;
                let steps = value
                    .parse::<u64>()
                    .with_context(|| format!("invalid step count '{value}'"))?;
                max_steps = Some(steps);
            }
            flag if flag.starts_with('-') => anyhow::bail!("unknown option '{flag}'"),
            path => {
                if rom_path.is_some() {
                    anyhow::bail!("unexpected argument '{path}'");
                }
                rom_path = Some(path.to_string());
            }
        }
    }

    let rom_path = rom_path.context("no ROM path given")?;
    Ok(Command::Run(Options {
        rom_path,
        max_steps,
        trace,
    }))
}

impl Options {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            max_steps: self.max_steps,
            trace: self.trace,
            ..RunConfig::default()
        }
    }
}

/// Validate `rom_data`, then run it headless until it stops.
pub fn run(rom_data: Vec<u8>, config: RunConfig) -> Result<RunSummary> {
    let mut gb = GameBoy::from_rom(rom_data, config).context("failed to load cartridge")?;
    log::info!("Running '{}'", gb.cartridge().title());
    let mut headless = Headless::new();
    let summary = gb.run(&mut headless)?;
    log::info!("Presented {} frames", headless.frames());
    Ok(summary)
}

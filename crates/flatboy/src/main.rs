use anyhow::{Context, Result};
use flatboy::{Command, USAGE};

fn main() -> Result<()> {
    env_logger::init();

    let options = match flatboy::parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    log::info!("Loading ROM path: '{}'", options.rom_path);
    let rom = std::fs::read(&options.rom_path)
        .with_context(|| format!("failed to read ROM file '{}'", options.rom_path))?;

    let summary = flatboy::run(rom, options.run_config())?;
    println!(
        "{:?} after {} steps ({} cycles)",
        summary.stop, summary.steps, summary.cycles
    );
    Ok(())
}

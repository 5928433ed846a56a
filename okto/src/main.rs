use std::path::PathBuf;
use std::process;

use clap::Parser;

use okto_core::constants::DEFAULT_INSTRUCTIONS_PER_SECOND;
use okto_core::Config;

mod keymap;
mod run;
mod tone;

/// A CHIP-8 virtual machine
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// CPU throughput in instructions per second
    #[arg(long, default_value_t = DEFAULT_INSTRUCTIONS_PER_SECOND)]
    ips: u32,

    /// Make the shift instructions operate on VX instead of VY
    #[arg(long)]
    shift_quirk: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = Config {
        instructions_per_second: args.ips,
        shift_quirk: args.shift_quirk,
    };

    if let Err(e) = run::run(args.rom, config) {
        log::error!("{}", e);
        process::exit(1);
    }
}

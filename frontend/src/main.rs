use std::path::PathBuf;
use std::process::ExitCode;

use abacus_core::interrupt;
use abacus_core::memory::Memory;
use abacus_core::vm::Vm;
use clap::Parser;

use abacus_hosts::{loader, registry, report, run_to_completion};

mod config;

/// Run a program image in the abacus word-stack VM.
#[derive(Parser)]
#[command(name = "abacus", version)]
struct Args {
    /// Program image to execute
    rom: Option<PathBuf>,

    /// Host that services cooperative interrupts
    #[arg(long)]
    host: Option<String>,

    /// Memory floor, in words
    #[arg(long, value_name = "WORDS")]
    mem_min: Option<u32>,

    /// Memory ceiling, in words
    #[arg(long, value_name = "WORDS")]
    mem_max: Option<u32>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = config::load();

    // No image is not an error: print the banner and usage, like --help.
    let Some(rom_path) = args.rom else {
        println!("abacus {}", env!("CARGO_PKG_VERSION"));
        println!("Usage: abacus <file>");
        return ExitCode::SUCCESS;
    };

    let host_name = args
        .host
        .or(config.host)
        .unwrap_or_else(|| "console".to_string());
    let Some(entry) = registry::find(&host_name) else {
        eprintln!("Unknown host: {host_name}");
        let names: Vec<&str> = registry::all().iter().map(|e| e.name).collect();
        eprintln!("Available: {}", names.join(", "));
        return ExitCode::FAILURE;
    };

    let mem_min = args
        .mem_min
        .or(config.mem_min_words)
        .unwrap_or(Memory::DEFAULT_MIN_WORDS);
    let mem_max = args
        .mem_max
        .or(config.mem_max_words)
        .unwrap_or(Memory::DEFAULT_MAX_WORDS);

    let mut vm = Vm::with_memory(Memory::with_limits(mem_min, mem_max));
    if let Err(e) = loader::load_file(&mut vm, &rom_path) {
        eprintln!("Cannot open file: {}: {e}", rom_path.display());
        return ExitCode::FAILURE;
    }

    let mut host = (entry.create)();
    let code = run_to_completion(&mut vm, host.as_mut());

    if code != interrupt::END_OF_PROGRAM {
        print!("{}", report::fault_report(&vm.snapshot()));
    }

    ExitCode::SUCCESS
}

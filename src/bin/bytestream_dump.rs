//! bytestream_dump - Hexdump file lewat Stream
//!
//! File di-mmap read-only, disalin ke Stream, lalu sisa bytes dari offset
//! tertentu di-dump dalam format hex + ascii.
//!
//! Usage:
//!   cargo run --release --bin bytestream_dump -- <FILE> [OPTIONS]

use std::io::SeekFrom;

use bytestream::hexdump::hexdump_from;
use bytestream::{ByteOrder, MappedFile, Stream, StreamOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Dump configuration
struct DumpConfig {
    path: Option<String>,
    offset: u64,
    byte_order: ByteOrder,
    read_u32: bool,
    verbose: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            path: None,
            offset: 0,
            byte_order: ByteOrder::Network,
            read_u32: false,
            verbose: false,
        }
    }
}

fn print_usage() {
    println!("bytestream_dump - Hexdump a file through a byte stream\n");
    println!("Usage: bytestream_dump <FILE> [OPTIONS]\n");
    println!("Options:");
    println!("  -o, --offset <N>      Start offset (default: 0)");
    println!("  -e, --endian <ORDER>  network|big|little|native or ! > < @ (default: network)");
    println!("      --u32             Print the 4-byte unsigned value at the offset");
    println!("  -v, --verbose         Debug logging");
    println!("  -h, --help            Show this help");
}

fn parse_args() -> DumpConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = DumpConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--offset" | "-o" => {
                if i + 1 < args.len() {
                    config.offset = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "--endian" | "-e" => {
                if i + 1 < args.len() {
                    config.byte_order = args[i + 1].parse().unwrap_or(ByteOrder::Network);
                    i += 1;
                }
            }
            "--u32" => {
                config.read_u32 = true;
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                config.path = Some(other.to_string());
            }
        }
        i += 1;
    }

    config
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn run(config: DumpConfig) -> bytestream::Result<()> {
    let Some(path) = config.path else {
        print_usage();
        std::process::exit(2);
    };

    let mut mapped = MappedFile::open(&path)?;
    let options = StreamOptions::default().byte_order(config.byte_order);
    let mut stream = Stream::from_source_with(&mut mapped, options)?;

    tracing::info!(path = %path, len = stream.length()?, order = %config.byte_order, "loaded");

    stream.seek(SeekFrom::Start(config.offset))?;

    if config.read_u32 {
        let value = stream.read_ulong()?;
        println!("u32 @ {:#x} ({}): {} ({:#010x})", config.offset, config.byte_order, value, value);
        stream.seek(SeekFrom::Start(config.offset))?;
    }

    let base = stream.tell()?;
    print!("{}", hexdump_from(stream.read_all()?, base));

    stream.close();
    Ok(())
}

fn main() {
    let config = parse_args();
    init_logging(config.verbose);

    if let Err(e) = run(config) {
        eprintln!("❌ Dump error: {}", e);
        std::process::exit(1);
    }
}

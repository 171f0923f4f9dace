use axml_strings::{StringPool, find_string_pool};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "axmlstr", about = "Inspect string pools in compiled Android XML and resource tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show string pool header information
    Info {
        /// Binary XML, resources.arsc, or bare string pool chunk
        input: PathBuf,
    },
    /// Print the strings in the pool
    Dump {
        /// Binary XML, resources.arsc, or bare string pool chunk
        input: PathBuf,
        /// Print only the string at this index
        #[arg(short, long)]
        index: Option<u32>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Yaml,
}

#[derive(Serialize)]
struct Entry<'a> {
    index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input } => cmd_info(&input),
        Commands::Dump {
            input,
            index,
            format,
        } => cmd_dump(&input, index, format),
    }
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn open_pool(path: &Path) -> StringPool {
    let file = File::open(path).unwrap_or_else(|e| fail(format!("{}: {e}", path.display())));
    // SAFETY: the file is only read, and is not expected to change while mapped.
    let map = unsafe { memmap2::Mmap::map(&file) }
        .unwrap_or_else(|e| fail(format!("{}: {e}", path.display())));

    let offset = find_string_pool(&map).unwrap_or_else(|e| fail(e));
    log::info!("{}: string pool at offset {offset:#x}", path.display());
    StringPool::parse_chunk(&map[offset..]).unwrap_or_else(|e| fail(e))
}

fn cmd_info(path: &Path) {
    let pool = open_pool(path);
    println!("=== String Pool ===");
    println!(
        "Encoding:         {}",
        if pool.is_utf8() { "UTF-8" } else { "UTF-16" }
    );
    println!(
        "Sorted:           {}",
        pool.flags().contains(axml_strings::PoolFlags::SORTED)
    );
    println!("Strings:          {}", pool.len());
    println!("Data size:        {} bytes", pool.data_len());
}

fn cmd_dump(path: &Path, index: Option<u32>, format: Format) {
    let pool = open_pool(path);

    let entries: Vec<Entry<'_>> = match index {
        Some(i) => vec![entry(i, pool.get(i))],
        None => pool.iter().map(|(i, r)| entry(i, r)).collect(),
    };

    match format {
        Format::Text => {
            for e in &entries {
                match (e.value, &e.error) {
                    (Some(v), _) => println!("[{}] {v}", e.index),
                    (None, Some(err)) => println!("[{}] <error: {err}>", e.index),
                    (None, None) => println!("[{}]", e.index),
                }
            }
        }
        Format::Yaml => match serde_yaml::to_string(&entries) {
            Ok(s) => print!("{s}"),
            Err(e) => fail(e),
        },
    }
}

fn entry(index: u32, result: axml_strings::Result<&str>) -> Entry<'_> {
    match result {
        Ok(value) => Entry {
            index,
            value: Some(value),
            error: None,
        },
        Err(e) => {
            log::warn!("string {index}: {e}");
            Entry {
                index,
                value: None,
                error: Some(e.to_string()),
            }
        }
    }
}

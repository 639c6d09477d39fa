mod cli;

use std::io::Read;

use clap::Parser;
use cli::{Args, Command, InputArgs};
use guga_translator::{default_translator, Translator};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn read_input(input: InputArgs) -> std::io::Result<String> {
    let text = match (input.text, input.file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(text.trim().to_string())
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let translator = match args.alphabet {
        Some(alphabet) => {
            info!(%alphabet, "using custom alphabet");
            Translator::new(alphabet)?
        }
        None => default_translator().clone(),
    };

    match args.command {
        Command::Encode { input } => {
            let text = read_input(input)?;
            if text.is_empty() {
                warn!("nothing to encode");
                return Err("please provide text to encode".into());
            }
            println!("{}", translator.encode_text(&text));
        }
        Command::Decode { input } => {
            let text = read_input(input)?;
            if text.is_empty() {
                warn!("nothing to decode");
                return Err("please provide text to decode".into());
            }
            match translator.decode_text(&text) {
                Ok(decoded) => println!("{}", decoded),
                Err(e) => {
                    if let Some(stage) = e.stage() {
                        info!(%stage, "decoding failed");
                    }
                    return Err(e.into());
                }
            }
        }
        Command::Table => {
            for (index, (c, code)) in translator.tables().entries().enumerate() {
                println!("{} {:>2}  {}", c, index, code);
            }
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

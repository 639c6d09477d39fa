use std::path::PathBuf;

use clap::Parser;
use guga_translator::Alphabet;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Penguin language translator")]
pub struct Args {
    /// Command to execute (encode, decode or table)
    #[clap(subcommand)]
    pub command: Command,

    /// Five comma-separated symbols to use instead of the penguin alphabet
    #[clap(long, global = true)]
    pub alphabet: Option<Alphabet>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Parser, Debug)]
pub enum Command {
    /// Translate text into the emoji alphabet
    Encode {
        #[clap(flatten)]
        input: InputArgs,
    },
    /// Translate emoji text back into plain text
    Decode {
        #[clap(flatten)]
        input: InputArgs,
    },
    /// Print the Base64 character to code table
    Table,
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Text to translate; read from stdin when omitted
    pub text: Option<String>,

    /// Read the text from a file
    #[clap(long, short, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "clipdeck")]
#[command(about = "A terminal snippet deck with clipboard copy fallbacks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy a string to the clipboard and report which strategy succeeded
    Copy {
        text: String,

        /// Identifier to flag as copied (defaults to the text itself)
        #[arg(short, long)]
        id: Option<String>,
    },
    /// List the built-in snippet deck
    List,
}

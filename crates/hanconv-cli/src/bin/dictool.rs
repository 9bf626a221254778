use clap::{Parser, Subcommand};

use hanconv_cli::commands::{config_ops, dict_ops};

#[derive(Parser)]
#[command(name = "dictool", about = "hanconv dictionary build tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a text dictionary (key<TAB>candidates per line)
    Compile {
        /// Input text file
        input_file: String,
        /// Output binary file
        output_file: String,
    },
    /// Write a compiled dictionary back out as text
    Decompile {
        /// Compiled dictionary file
        input_file: String,
        /// Output text file
        output_file: String,
    },
    /// Show dictionary info
    Info {
        /// Compiled dictionary file
        file: String,
    },
    /// Look up a key in the dictionary (exact match)
    Lookup {
        /// Dictionary file
        dict_file: String,
        /// Key to look up
        key: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Common-prefix search (all keys that are prefixes of the query)
    Prefix {
        /// Dictionary file
        dict_file: String,
        /// Query string
        query: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Compile {
            input_file,
            output_file,
        } => dict_ops::compile(&input_file, &output_file),
        Command::Decompile {
            input_file,
            output_file,
        } => dict_ops::decompile(&input_file, &output_file),
        Command::Info { file } => dict_ops::info(&file),
        Command::Lookup {
            dict_file,
            key,
            json,
        } => dict_ops::lookup(&dict_file, &key, json),
        Command::Prefix { dict_file, query } => dict_ops::prefix(&dict_file, &query),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

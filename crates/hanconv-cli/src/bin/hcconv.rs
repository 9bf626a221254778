use clap::Parser;

use hanconv_cli::commands::convert_ops::{self, ConvertOptions};

#[derive(Parser)]
#[command(name = "hcconv", about = "Convert Chinese text between scripts")]
struct Cli {
    /// Preset name (s2t, t2s, s2tw, s2twp, ...)
    #[arg(short, long, default_value = "s2t")]
    preset: String,
    /// Compiled dictionary file; repeat to add stages in order (overrides --preset)
    #[arg(long = "dict")]
    dicts: Vec<String>,
    /// Directory holding compiled dictionaries
    #[arg(long, default_value = ".")]
    dict_dir: String,
    /// Custom settings TOML file
    #[arg(long)]
    settings: Option<String>,
    /// Print a per-stage JSON report instead of the converted text
    #[arg(long)]
    explain: bool,
    /// Write a JSON trace log to this directory (requires --features trace)
    #[arg(long)]
    trace_dir: Option<String>,
    /// List available presets and exit
    #[arg(long)]
    list_presets: bool,
    /// Text to convert (read from stdin when omitted)
    text: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if cli.list_presets {
        convert_ops::list_presets(&cli.dict_dir, cli.settings.as_deref());
        return;
    }

    convert_ops::convert_cmd(&ConvertOptions {
        preset: cli.preset,
        dict_files: cli.dicts,
        dict_dir: cli.dict_dir,
        settings_file: cli.settings,
        explain: cli.explain,
        trace_dir: cli.trace_dir,
        text: cli.text,
    });
}

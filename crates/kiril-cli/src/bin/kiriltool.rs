use clap::{Parser, Subcommand};

use kiril_cli::commands::{config_ops, convert_ops, load_scheme, replay_ops};

#[derive(Parser)]
#[command(name = "kiriltool", about = "Kiril transliteration tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate Latin text to Cyrillic
    Convert {
        /// Text to convert (reads stdin line by line if omitted)
        text: Option<String>,
        /// Do not carry uppercase source letters over
        #[arg(long)]
        no_preserve_case: bool,
        /// Turn o/u into ө/ү in words with a front vowel
        #[arg(long)]
        harmony: bool,
        /// Custom scheme TOML (optional)
        #[arg(long)]
        scheme: Option<String>,
    },

    /// Spell Cyrillic text back in canonical Latin
    Reverse {
        /// Text to convert (reads stdin line by line if omitted)
        text: Option<String>,
        /// Custom scheme TOML (optional)
        #[arg(long)]
        scheme: Option<String>,
    },

    /// Print the Latin → Cyrillic conversion table
    Table {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Custom scheme TOML (optional)
        #[arg(long)]
        scheme: Option<String>,
    },

    /// Type keys one by one into an edit session and show each step
    Replay {
        /// Keys to type; `\b` is a backspace
        keys: String,
        /// Transliterate the raw word without folding Cyrillic back first
        #[arg(long)]
        forward_only: bool,
        /// Custom scheme TOML (optional)
        #[arg(long)]
        scheme: Option<String>,
    },

    /// Print the default scheme TOML to stdout
    SchemeExport,

    /// Validate a scheme TOML file
    SchemeValidate {
        /// Path to the TOML file
        file: String,
    },

    /// Print the default settings TOML to stdout
    SettingsExport,

    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            text,
            no_preserve_case,
            harmony,
            scheme,
        } => {
            load_scheme(scheme.as_deref());
            convert_ops::convert_cmd(text.as_deref(), !no_preserve_case, harmony);
        }
        Command::Reverse { text, scheme } => {
            load_scheme(scheme.as_deref());
            convert_ops::reverse_cmd(text.as_deref());
        }
        Command::Table { json, scheme } => {
            load_scheme(scheme.as_deref());
            convert_ops::table_cmd(json);
        }
        Command::Replay {
            keys,
            forward_only,
            scheme,
        } => {
            load_scheme(scheme.as_deref());
            replay_ops::replay_cmd(&keys, forward_only);
        }
        Command::SchemeExport => config_ops::scheme_export(),
        Command::SchemeValidate { file } => config_ops::scheme_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

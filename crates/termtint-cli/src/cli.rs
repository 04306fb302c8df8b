//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use termtint::{OutputFormat, Rgb};

/// Colors, themes and custom styles for terminal output.
#[derive(Debug, Parser)]
#[command(name = "termtint", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Log more (repeat for debug and trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the predefined colors and styles.
    Colors {
        /// Only show names containing this text.
        #[arg(long)]
        filter: Option<String>,
    },

    /// Print the color spectra and check the exact escape bytes.
    Verify {
        #[arg(value_enum, default_value_t = VerifyTarget::All)]
        target: VerifyTarget,
    },

    /// Work with theme files.
    Theme(ThemeArgs),

    /// Render text with a color gradient.
    Gradient {
        text: String,

        /// Start color as #rrggbb.
        #[arg(long, default_value = "#ff0000")]
        from: Rgb,

        /// End color as #rrggbb.
        #[arg(long, default_value = "#0000ff")]
        to: Rgb,
    },

    /// Register a custom color and show how it is stored.
    Color(ColorArgs),

    /// Print text in a structured output format.
    Format {
        text: String,

        /// One of: plain, json, xml, yaml, html, csv.
        #[arg(short = 'f', long = "format", default_value = "plain")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VerifyTarget {
    #[value(name = "8bit")]
    EightBit,
    #[value(name = "24bit")]
    TrueColor,
    Predefined,
    All,
}

#[derive(Debug, ClapArgs)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub action: ThemeAction,
}

#[derive(Debug, Subcommand)]
pub enum ThemeAction {
    /// Color text with a theme file. Reads stdin when no text is given.
    Apply {
        file: PathBuf,
        text: Vec<String>,
    },

    /// Dump the mappings of one or more theme files.
    Show {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Add mappings to a theme file from stdin, one `char:code` per line.
    Edit { file: PathBuf },
}

#[derive(Debug, ClapArgs)]
pub struct ColorArgs {
    /// Name to register the color under.
    pub name: String,

    /// Copy the code of a predefined color.
    #[arg(long, conflicts_with = "rgb")]
    pub predefined: Option<String>,

    /// Use a 24-bit color given as #rrggbb.
    #[arg(long)]
    pub rgb: Option<Rgb>,

    /// Apply the 24-bit color to the background.
    #[arg(long, requires = "rgb")]
    pub background: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn verify_defaults_to_all() {
        let args = Args::parse_from(["termtint", "verify"]);
        assert!(matches!(
            args.command,
            Command::Verify {
                target: VerifyTarget::All
            }
        ));
    }

    #[test]
    fn verify_parses_bit_depths() {
        let args = Args::parse_from(["termtint", "verify", "24bit"]);
        assert!(matches!(
            args.command,
            Command::Verify {
                target: VerifyTarget::TrueColor
            }
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::parse_from(["termtint", "colors", "--no-color", "-vv"]);
        assert!(args.no_color);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn gradient_parses_hex_colors() {
        let args = Args::parse_from(["termtint", "gradient", "hi", "--from", "#0f0"]);
        match args.command {
            Command::Gradient { text, from, to } => {
                assert_eq!(text, "hi");
                assert_eq!(from, Rgb(0, 255, 0));
                assert_eq!(to, Rgb(0, 0, 255));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn gradient_rejects_bad_hex() {
        assert!(Args::try_parse_from(["termtint", "gradient", "hi", "--from", "#zz"]).is_err());
    }

    #[test]
    fn color_predefined_conflicts_with_rgb() {
        assert!(Args::try_parse_from([
            "termtint",
            "color",
            "x",
            "--predefined",
            "red",
            "--rgb",
            "#fff"
        ])
        .is_err());
    }

    #[test]
    fn theme_apply_collects_text() {
        let args = Args::parse_from(["termtint", "theme", "apply", "t.theme", "a", "b"]);
        match args.command {
            Command::Theme(ThemeArgs {
                action: ThemeAction::Apply { file, text },
            }) => {
                assert_eq!(file, PathBuf::from("t.theme"));
                assert_eq!(text, vec!["a".to_string(), "b".to_string()]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn format_parses_names() {
        let args = Args::parse_from(["termtint", "format", "x", "-f", "JSON"]);
        assert!(matches!(
            args.command,
            Command::Format {
                format: OutputFormat::Json,
                ..
            }
        ));
    }
}

mod cli;
mod commands;

use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::Parser;
use console::Term;
use termtint::log::{init_logging, LogSettings};
use termtint::Tint;

use cli::{Args, Command, ThemeAction};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LogSettings {
        color: !args.no_color && Term::stderr().is_term(),
        verbosity: args.verbose,
        ..LogSettings::default()
    });

    let color = !args.no_color && Term::stdout().is_term();
    let mut tint = Tint::with_color(color);
    if !color {
        tint.themes().disable_colormap();
    }
    tracing::debug!(color, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut tint, &mut out, args.command)?;
    out.flush()?;
    Ok(())
}

fn run(tint: &mut Tint, out: &mut dyn Write, command: Command) -> Result<()> {
    match command {
        Command::Colors { filter } => commands::colors(tint, out, filter.as_deref()),
        Command::Verify { target } => {
            let mismatches = commands::verify(tint, out, target)?;
            if mismatches > 0 {
                bail!("{} escape sequence(s) did not match", mismatches);
            }
            writeln!(out, "All escape sequences verified.")?;
            Ok(())
        }
        Command::Theme(theme) => match theme.action {
            ThemeAction::Apply { file, text } => {
                commands::theme_apply(tint, out, &file, &text, io::stdin().lock())
            }
            ThemeAction::Show { files } => commands::theme_show(tint, out, &files),
            ThemeAction::Edit { file } => {
                commands::theme_edit(tint, out, &file, io::stdin().lock()).map(|_| ())
            }
        },
        Command::Gradient { text, from, to } => commands::gradient_text(tint, out, &text, from, to),
        Command::Color(args) => commands::color(tint, out, &args),
        Command::Format { text, format } => commands::format(out, &text, format),
    }
}

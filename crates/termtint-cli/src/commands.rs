//! Subcommand implementations.
//!
//! Every command writes to a caller-supplied sink so it can be exercised
//! against an in-memory buffer.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use termtint::style::predefined::predefined_entries;
use termtint::{
    format_escape, gradient, write_formatted, ColorSpec, Layer, OutputFormat, Rgb, Tint, RESET,
};

use crate::cli::{ColorArgs, VerifyTarget};

const APPLY_THEME: &str = "cli";

/// Prints every predefined name painted with its own code.
pub fn colors(tint: &Tint, out: &mut dyn Write, filter: Option<&str>) -> Result<()> {
    let emitter = tint.emitter();
    for (name, code) in predefined_entries() {
        if filter.is_some_and(|f| !name.contains(f)) {
            continue;
        }
        writeln!(out, "{}", emitter.paint(code, name))?;
    }
    Ok(())
}

/// Prints the requested spectra and returns how many sequences were wrong.
pub fn verify(tint: &Tint, out: &mut dyn Write, target: VerifyTarget) -> Result<usize> {
    let mut mismatches = 0;
    if matches!(target, VerifyTarget::EightBit | VerifyTarget::All) {
        mismatches += verify_8bit(tint, out)?;
    }
    if matches!(target, VerifyTarget::TrueColor | VerifyTarget::All) {
        mismatches += verify_24bit(tint, out)?;
    }
    if matches!(target, VerifyTarget::Predefined | VerifyTarget::All) {
        mismatches += verify_predefined(tint, out)?;
    }
    Ok(mismatches)
}

fn check(expected: &str, actual: &str) -> usize {
    if expected == actual {
        0
    } else {
        tracing::error!(expected = ?expected, actual = ?actual, "escape sequence mismatch");
        1
    }
}

fn verify_8bit(tint: &Tint, out: &mut dyn Write) -> Result<usize> {
    let emitter = tint.emitter();
    let mut mismatches = 0;
    for i in 0..=255u8 {
        let code = format_escape(Layer::Foreground, ColorSpec::Indexed(i));
        mismatches += check(&format!("\x1b[38;5;{}m", i), &code);
        mismatches += check(
            &format!("\x1b[48;5;{}m", i),
            &format_escape(Layer::Background, ColorSpec::Indexed(i)),
        );

        emitter.write_code(out, &code)?;
        write!(out, "{:>3} ", i)?;
        if (i as usize + 1) % 16 == 0 {
            writeln!(out)?;
        }
    }
    emitter.write_reset(out)?;
    writeln!(out)?;
    Ok(mismatches)
}

fn verify_24bit(tint: &Tint, out: &mut dyn Write) -> Result<usize> {
    let emitter = tint.emitter();
    let mut mismatches = 0;
    for r in (0..=255u8).step_by(51) {
        for g in (0..=255u8).step_by(51) {
            for b in (0..=255u8).step_by(51) {
                let rgb = Rgb(r, g, b);
                let code = format_escape(Layer::Foreground, rgb.into());
                mismatches += check(&format!("\x1b[38;2;{};{};{}m", r, g, b), &code);
                mismatches += check(
                    &format!("\x1b[48;2;{};{};{}m", r, g, b),
                    &format_escape(Layer::Background, rgb.into()),
                );

                emitter.write_code(out, &code)?;
                write!(out, "({:>3},{:>3},{:>3}) ", r, g, b)?;
                emitter.write_reset(out)?;
                write!(out, " ")?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
    }
    Ok(mismatches)
}

fn verify_predefined(tint: &Tint, out: &mut dyn Write) -> Result<usize> {
    let emitter = tint.emitter();
    let mut mismatches = 0;
    for (name, code) in predefined_entries() {
        if !(code.starts_with("\x1b[") && code.ends_with('m')) {
            tracing::error!(color = %name, "predefined code is not an SGR sequence");
            mismatches += 1;
        }
        write!(out, "{} ", emitter.paint(code, name))?;
    }
    writeln!(out)?;
    Ok(mismatches)
}

/// Loads `path` as a fresh theme named `name` and activates it.
fn load_theme(tint: &Tint, name: &str, path: &Path) -> Result<()> {
    tint.themes()
        .load(name, path)
        .with_context(|| format!("failed to load theme from {}", path.display()))?;
    tint.themes().set(name)?;
    Ok(())
}

/// Colors `text` (or each line of `input` when `text` is empty) with a theme file.
pub fn theme_apply(
    tint: &Tint,
    out: &mut dyn Write,
    file: &Path,
    text: &[String],
    input: impl BufRead,
) -> Result<()> {
    load_theme(tint, APPLY_THEME, file)?;
    if !text.is_empty() {
        writeln!(out, "{}", tint.apply_theme(&text.join(" ")))?;
        return Ok(());
    }
    for line in input.lines() {
        writeln!(out, "{}", tint.apply_theme(&line?))?;
    }
    Ok(())
}

/// Dumps the mappings of each theme file, named after the file stem.
///
/// Repeated stems get a numeric suffix: `x`, `x-2`, `x-3`.
pub fn theme_show(tint: &Tint, out: &mut dyn Write, files: &[impl AsRef<Path>]) -> Result<()> {
    for file in files {
        let path = file.as_ref();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let name = unique_theme_name(tint, &stem);
        tint.themes()
            .load(&name, path)
            .with_context(|| format!("failed to load theme from {}", path.display()))?;
    }
    write!(out, "{}", tint.themes().list_all_theme_maps())?;
    Ok(())
}

fn unique_theme_name(tint: &Tint, stem: &str) -> String {
    let taken = tint.themes().list();
    if !taken.iter().any(|name| name == stem) {
        return stem.to_string();
    }
    (2..)
        .map(|n| format!("{}-{}", stem, n))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| stem.to_string())
}

/// Reads `char:code` lines from `input` into the theme file at `file`.
///
/// An existing file is loaded first so new mappings are merged into it.
pub fn theme_edit(
    tint: &Tint,
    out: &mut dyn Write,
    file: &Path,
    input: impl BufRead,
) -> Result<usize> {
    const EDIT_THEME: &str = "edit";
    if file.exists() {
        tint.themes().load(EDIT_THEME, file)?;
    } else {
        tint.themes().create(EDIT_THEME)?;
    }
    let count = tint.themes().interactive_edit_theme(EDIT_THEME, input, &mut *out)?;
    tint.themes().save(EDIT_THEME, file)?;
    writeln!(out, "Saved {} mapping(s) to {}", count, file.display())?;
    Ok(count)
}

pub fn gradient_text(tint: &Tint, out: &mut dyn Write, text: &str, from: Rgb, to: Rgb) -> Result<()> {
    writeln!(out, "{}", tint.gradient(text, from, to))?;
    let swatch = gradient::swatch(tint.emitter(), from, to, 10);
    if !swatch.is_empty() {
        writeln!(out, "{}", swatch)?;
    }
    Ok(())
}

/// Registers a custom color from the arguments and prints its stored form.
pub fn color(tint: &mut Tint, out: &mut dyn Write, args: &ColorArgs) -> Result<()> {
    let layer = if args.background {
        Layer::Background
    } else {
        Layer::Foreground
    };
    match (&args.predefined, args.rgb) {
        (Some(predefined), _) => tint.colors_mut().set_predefined(&args.name, predefined)?,
        (None, Some(rgb)) => tint.colors_mut().set_rgb(&args.name, layer, rgb),
        (None, None) => bail!("give either --predefined or --rgb"),
    }

    writeln!(out, "{}", tint.colors().inspect(&args.name))?;
    tint.custom_color(out, &args.name, "")?;
    write!(out, "{}", args.name)?;
    tint.emitter().write_code(out, RESET)?;
    writeln!(out)?;
    Ok(())
}

pub fn format(out: &mut dyn Write, text: &str, format: OutputFormat) -> Result<()> {
    write_formatted(out, text, format)?;
    Ok(())
}

//! Command-line front end used by the `lin_pid` binary.
//!
//! [`run`] takes the argument list and output streams explicitly so the whole
//! tool can be driven from tests. It returns the process exit code: 0 on
//! success, 1 for any error including bad arguments.
//!
//! `--color auto` colors only when the caller reports `out` as a terminal.

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use colored::Colorize;
use log::debug;

use crate::error::{Error, Result};
use crate::parser::{BaseHint, parse_with_hint};
use crate::pid::{PidEntry, reference_table};

/// Exit code for success.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code for any failure.
pub const EXIT_FAILURE: u8 = 1;

const AFTER_HELP: &str = "\
Supported hexadecimal formats:
    0xZZ, 0XZZ, xZZ, XZZ, ZZ, Z, ZZh, ZZH, ZZx, ZZX, or ZZ with --hex

Supported decimal formats:
    ZZd, ZZD, Zd, ZD, or ZZ with --dec

Two-digit entries without a prefix or suffix are hexadecimal unless --dec is
given. The format flag may be placed before or after the ID.

Examples:
    lin_pid 0x27        ID 0x27, PID 0xE7
    lin_pid 27          hex assumed: ID 0x27, PID 0xE7
    lin_pid 27d         ID 0x1B, PID 0x5B
    lin_pid --dec 27    same as above
    lin_pid 27 -q       prints E7";

/// LIN Protected Identifier (PID) calculator
#[derive(Parser, Debug)]
#[command(name = "lin_pid")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true, after_help = AFTER_HELP)]
pub struct Cli {
    /// Frame ID (0x00-0x3F) in any supported format
    #[arg(value_name = "ID")]
    pub id: Option<String>,

    /// Read the ID as hexadecimal
    #[arg(short = 'h', long = "hex")]
    pub hex: bool,

    /// Read the ID as decimal
    #[arg(short = 'd', long = "dec")]
    pub dec: bool,

    /// Print only the PID as two hex digits
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// With --quiet, do not print a trailing newline
    #[arg(long = "no-new-line")]
    pub no_new_line: bool,

    /// Print the full ID/PID reference table
    #[arg(short = 't', long, conflicts_with_all = ["id", "hex", "dec", "quiet"])]
    pub table: bool,

    /// Print the result as JSON
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// When to color the output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

/// Output coloring policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when the output is a terminal and `NO_COLOR` is unset.
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    fn enabled(self, out_is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => out_is_terminal && std::env::var_os("NO_COLOR").is_none(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    enabled: bool,
}

impl Palette {
    fn id(self, text: &str) -> String {
        if self.enabled {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn pid(self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(self, text: &str) -> String {
        if self.enabled {
            text.magenta().underline().to_string()
        } else {
            text.to_string()
        }
    }

    fn error(self, text: &str) -> String {
        if self.enabled {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Run the calculator with `args` (including the program name).
///
/// `out_is_terminal` tells `--color auto` whether `out` is an interactive terminal.
pub fn run<I, T>(args: I, out: &mut dyn Write, err: &mut dyn Write, out_is_terminal: bool) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(out, "{}", e.render());
                    EXIT_SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e.render());
                    EXIT_FAILURE
                }
            };
        }
    };
    debug!("arguments: {cli:?}");

    let palette = Palette {
        enabled: cli.color.enabled(out_is_terminal),
    };
    // colored applies its own terminal detection unless overridden
    if palette.enabled {
        colored::control::set_override(true);
    }
    match execute(&cli, palette, out) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            debug!("failed: {e:?}");
            let _ = writeln!(err, "{}", palette.error(&format!("Error: {e}")));
            EXIT_FAILURE
        }
    }
}

fn execute(cli: &Cli, palette: Palette, out: &mut dyn Write) -> Result<()> {
    if cli.table {
        return write_table(out, cli.json, palette);
    }
    let Some(token) = cli.id.as_deref() else {
        write!(out, "{}", Cli::command().render_help())?;
        return Ok(());
    };
    if cli.hex && cli.dec {
        return Err(Error::ConflictingBaseFlags);
    }

    let parsed = parse_with_hint(token, BaseHint::from_flags(cli.hex, cli.dec)?)?;
    debug!("parsed {token:?} as {parsed:?}");
    let entry = PidEntry::new(parsed.value).ok_or(Error::IdOutOfRange { id: parsed.value })?;
    debug!("ID {:#04X} -> PID {:#04X}", entry.id, entry.pid);

    if cli.json {
        serde_json::to_writer(&mut *out, &entry).map_err(std::io::Error::from)?;
        writeln!(out)?;
    } else if cli.quiet {
        if cli.no_new_line {
            write!(out, "{:02X}", entry.pid)?;
        } else {
            writeln!(out, "{:02X}", entry.pid)?;
        }
    } else {
        writeln!(out)?;
        writeln!(out, "ID:  {}", palette.id(&format!("0x{:02X}", entry.id)))?;
        writeln!(out, "PID: {}", palette.pid(&format!("0x{:02X}", entry.pid)))?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_table(out: &mut dyn Write, json: bool, palette: Palette) -> Result<()> {
    if json {
        let entries: Vec<PidEntry> = reference_table().collect();
        serde_json::to_writer_pretty(&mut *out, &entries).map_err(std::io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    const RULE: &str = "---------------";
    writeln!(out)?;
    writeln!(out, "{}", palette.heading("Reference Table"))?;
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "|  {}  |  {} |", palette.id("ID"), palette.pid("PID"))?;
    writeln!(out, "{RULE}")?;
    for entry in reference_table() {
        writeln!(
            out,
            "| {}| {}|",
            palette.id(&format!("0x{:<3X}", entry.id)),
            palette.pid(&format!("0x{:<3X}", entry.pid)),
        )?;
    }
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    Ok(())
}

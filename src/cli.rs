use clap::{builder::styling, ColorChoice, Parser};

use crate::command::{self, Command, Format};
use findgit_core::error::{ExitCode, Fallible};
use findgit_core::SysDir;

#[derive(Parser)]
#[command(
    about = "Locates the installation and configuration directories of Git for Windows",
    long_about = "Locates the installation and configuration directories of Git for Windows

    Directories are found through the Git executables on PATH, the install
    location recorded in the registry, and well-known environment variables.
    To see every kind of directory at once, use `findgit all`.",
    color = ColorChoice::Auto,
    disable_version_flag = true,
    styles = styles()
)]
pub(crate) struct Findgit {
    #[command(subcommand)]
    pub(crate) command: Option<Subcommand>,

    /// Enables verbose diagnostics
    #[arg(long, global = true)]
    pub(crate) verbose: bool,

    /// Prevents unnecessary output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub(crate) quiet: bool,

    /// How to print the discovered directories
    #[arg(long, value_enum, global = true, default_value_t = Format::Human)]
    pub(crate) format: Format,

    /// Prints the current version of findgit
    #[arg(short, long)]
    pub(crate) version: bool,
}

impl Findgit {
    pub(crate) fn run(self) -> Fallible<ExitCode> {
        if self.version {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::Success)
        } else {
            self.command.unwrap_or(Subcommand::All).run(self.format)
        }
    }
}

#[derive(clap::Subcommand)]
pub(crate) enum Subcommand {
    /// Prints the install roots of Git, with a subdirectory appended
    System(command::System),

    /// Prints the user's home directories
    Global,

    /// Prints the user's XDG-style Git configuration directories
    Xdg,

    /// Prints the machine-wide Git directory under ProgramData
    #[command(name = "programdata")]
    ProgramData,

    /// Prints the repository template directories of each Git install
    Template,

    /// Prints every kind of directory
    All,
}

impl Subcommand {
    pub(crate) fn run(self, format: Format) -> Fallible<ExitCode> {
        match self {
            Subcommand::System(system) => system.run(format),
            Subcommand::Global => command::Level(SysDir::Global).run(format),
            Subcommand::Xdg => command::Level(SysDir::Xdg).run(format),
            Subcommand::ProgramData => command::Level(SysDir::ProgramData).run(format),
            Subcommand::Template => command::Level(SysDir::Template).run(format),
            Subcommand::All => command::All.run(format),
        }
    }
}

fn styles() -> styling::Styles {
    styling::Styles::plain()
        .header(
            styling::AnsiColor::Yellow.on_default()
                | styling::Effects::BOLD
                | styling::Effects::ITALIC,
        )
        .usage(
            styling::AnsiColor::Yellow.on_default()
                | styling::Effects::BOLD
                | styling::Effects::ITALIC,
        )
        .literal(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .placeholder(styling::AnsiColor::BrightBlue.on_default())
}

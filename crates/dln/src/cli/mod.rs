//! Command handling for the `dln` binary.
//!
//! Argument parsing and the three commands live here so they can be
//! exercised in tests without spawning a process. The binary only installs
//! logging, loads [`DlnSettings`], and maps the [`Report`] to an exit code.

mod error;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use crate::generator::generate;
use crate::licence::LicenceNumber;
use crate::person::{PersonRecord, Sex};
use crate::settings::DlnSettings;
use crate::validation::check;

pub use error::CliError;

/// `dln` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dln",
    about = "Generate, validate, and decode UK driving licence numbers",
    version
)]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands offered by `dln`.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the licence number for a person.
    Generate {
        /// Person details.
        #[command(flatten)]
        person: PersonArgs,
        /// Characters appended after the 13-character prefix.
        #[arg(long, value_name = "chars")]
        suffix: Option<String>,
    },
    /// Check a licence number, optionally against a person.
    Validate {
        /// Licence number to check.
        code: String,
        /// Person the number should belong to.
        #[command(flatten)]
        person: PersonArgs,
    },
    /// Print the sections of a licence number.
    Decode {
        /// Licence number to decode.
        code: String,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// Person details given as a JSON file, individual flags, or both.
///
/// Flags override fields loaded from the file.
#[derive(Debug, Clone, Default, Args)]
pub struct PersonArgs {
    /// JSON file holding `familyName`, `personalName`, `birthDate`, `sex`.
    #[arg(long = "person", value_name = "path")]
    pub person_file: Option<Utf8PathBuf>,
    /// Family name.
    #[arg(long, value_name = "name")]
    pub family_name: Option<String>,
    /// Given names, separated by spaces.
    #[arg(long, value_name = "names")]
    pub personal_name: Option<String>,
    /// Birth date as YYYY-MM-DD.
    #[arg(long, value_name = "date")]
    pub birth_date: Option<String>,
    /// M or F.
    #[arg(long, value_name = "sex")]
    pub sex: Option<String>,
}

impl PersonArgs {
    /// Returns `true` when neither a file nor any field flag was given.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.person_file.is_none()
            && self.family_name.is_none()
            && self.personal_name.is_none()
            && self.birth_date.is_none()
            && self.sex.is_none()
    }

    /// Builds the person record described by these arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] if the `--person` file cannot be read or parsed.
    pub fn to_record(&self) -> Result<PersonRecord, CliError> {
        let base = match &self.person_file {
            Some(path) => load_person(path)?,
            None => PersonRecord::default(),
        };

        Ok(PersonRecord {
            family_name: self.family_name.clone().or(base.family_name),
            personal_name: self.personal_name.clone().or(base.personal_name),
            birth_date: self.birth_date.clone().or(base.birth_date),
            sex: self.sex.clone().or(base.sex),
        })
    }
}

/// Result of running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Text to print on standard output.
    pub message: String,
    /// Whether the command succeeded; `validate` fails for rejected codes.
    pub success: bool,
}

impl Report {
    fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

/// Runs `command` with the configured defaults.
///
/// # Errors
///
/// Returns [`CliError`] when the input cannot be processed at all: an
/// unreadable person file, a record that cannot be encoded by `generate`, or
/// a malformed code given to `decode`. A code rejected by `validate` is a
/// normal [`Report`] with `success` unset.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use dln::DlnSettings;
/// use dln::cli::{Cli, run};
///
/// let cli = Cli::try_parse_from([
///     "dln", "generate",
///     "--family-name", "Morgan",
///     "--personal-name", "Sarah Meredyth",
///     "--birth-date", "1964-07-05",
///     "--sex", "F",
///     "--suffix", "9IJ",
/// ])
/// .expect("parse args");
/// let settings = DlnSettings { default_suffix: None, json_logs: false };
///
/// let report = run(&cli.command, &settings).expect("run command");
/// assert_eq!(report.message, "MORGA657054SM9IJ");
/// ```
pub fn run(command: &Command, settings: &DlnSettings) -> Result<Report, CliError> {
    match command {
        Command::Generate { person, suffix } => {
            let record = person.to_record()?;
            let code = generate(&record, settings.suffix(suffix.as_deref()))?;
            info!(code = %code, "licence number generated");
            Ok(Report::success(code))
        }
        Command::Validate { code, person } => {
            let record = if person.is_unset() {
                None
            } else {
                Some(person.to_record()?)
            };
            match check(code, record.as_ref()) {
                Ok(()) => Ok(Report::success("valid")),
                Err(rejection) => Ok(Report::failure(format!("invalid: {rejection}"))),
            }
        }
        Command::Decode { code, json } => {
            let number: LicenceNumber = code.parse()?;
            let decoded = DecodedLicence::from(&number);
            let message = if *json {
                serde_json::to_string_pretty(&decoded).map_err(|e| CliError::Render {
                    message: e.to_string(),
                })?
            } else {
                decoded.to_text()
            };
            Ok(Report::success(message))
        }
    }
}

/// Section-by-section view of a licence number for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct DecodedLicence<'a> {
    licence_number: &'a str,
    surname: &'a str,
    sex: Sex,
    birth_month: u8,
    birth_day: u8,
    birth_year_digits: u8,
    initials: &'a str,
    suffix: &'a str,
}

impl<'a> From<&'a LicenceNumber> for DecodedLicence<'a> {
    fn from(number: &'a LicenceNumber) -> Self {
        Self {
            licence_number: number.as_str(),
            surname: number.surname(),
            sex: number.sex(),
            birth_month: number.birth_month(),
            birth_day: number.birth_day(),
            birth_year_digits: number.birth_year_digits(),
            initials: number.initials(),
            suffix: number.suffix(),
        }
    }
}

impl DecodedLicence<'_> {
    fn to_text(&self) -> String {
        format!(
            "licence number: {}\nsurname: {}\nsex: {}\nbirth month: {}\nbirth day: {}\nbirth year: ..{:02}\ninitials: {}\nsuffix: {}",
            self.licence_number,
            self.surname,
            self.sex,
            self.birth_month,
            self.birth_day,
            self.birth_year_digits,
            self.initials,
            self.suffix,
        )
    }
}

fn load_person(path: &Utf8Path) -> Result<PersonRecord, CliError> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| CliError::NotAFile {
        path: path.to_path_buf(),
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| {
        CliError::OpenDirectory {
            path: parent.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    let record = PersonRecord::from_file(&dir, Utf8Path::new(file_name))?;
    debug!(path = %path, "person record loaded");
    Ok(record)
}

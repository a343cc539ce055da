//! `flags` command: mirror resolved parameters as command-line flags.
//!
//! Responsibilities:
//! - Derive one `--<section>_<key>` flag per parameter, typed by its resolved value.
//! - Parse user arguments against those flags.
//! - Report the effective parameters, marking flag-supplied values.
//!
//! Does NOT handle:
//! - Loading the configuration (see `dispatch`).
//!
//! Invariants:
//! - Flags are derived in sorted parameter order; on a name collision the first wins.
//! - A flag that is not given leaves the resolved value and its source untouched.
//! - Malformed flag values are clap usage errors.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use mlp_config::{Configuration, Param, TypedValue, ValueKind};
use tracing::warn;

use crate::formatters::{FLAG_SOURCE, OutputFormat, ParamRow, get_formatter, output_result};

/// Name reserved by clap's generated help flag.
const HELP_FLAG: &str = "help";

/// A flag derived from one resolved parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct MirroredFlag {
    /// Long name without the leading `--`.
    pub name: String,
    pub section: String,
    pub key: String,
    pub default: TypedValue,
}

/// A parameter after flag parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveParam {
    pub param: Param,
    pub from_flag: bool,
}

impl EffectiveParam {
    pub fn row(&self) -> ParamRow<'_> {
        ParamRow {
            section: &self.param.section,
            key: &self.param.key,
            value: &self.param.value,
            source: if self.from_flag {
                FLAG_SOURCE
            } else {
                self.param.source.as_str()
            },
        }
    }
}

/// Long flag name for `section`/`key`: dots in the key become underscores.
pub fn flag_name(section: &str, key: &str) -> String {
    format!("{section}_{}", key.replace('.', "_"))
}

fn is_usable_flag_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.contains(|c: char| c.is_whitespace() || c == '=')
}

/// Derive flags for `params`, skipping names that are unusable or already taken.
pub fn mirror_flags(params: &[Param]) -> Vec<MirroredFlag> {
    let mut seen = HashSet::new();
    let mut flags = Vec::with_capacity(params.len());

    for param in params {
        let name = flag_name(&param.section, &param.key);
        if name == HELP_FLAG || !is_usable_flag_name(&name) {
            warn!(flag = %name, param = %param.id(), "Skipping parameter with unusable flag name");
            continue;
        }
        if !seen.insert(name.clone()) {
            warn!(flag = %name, param = %param.id(), "Skipping duplicate flag name");
            continue;
        }
        flags.push(MirroredFlag {
            name,
            section: param.section.clone(),
            key: param.key.clone(),
            default: param.value.clone(),
        });
    }

    flags
}

/// Build the clap parser for `flags`.
pub fn build_command(flags: &[MirroredFlag]) -> Command {
    let mut command = Command::new("mlp-conf flags")
        .no_binary_name(true)
        .args_override_self(true)
        .about("Override resolved parameters from the command line");

    for flag in flags {
        let default = flag.default.clone();
        let long = format!("--{}", flag.name);
        let numeric = matches!(flag.default.kind(), ValueKind::Integer | ValueKind::Float);
        command = command.arg(
            Arg::new(flag.name.clone())
                .long(flag.name.clone())
                .value_name(flag.default.kind().as_str().to_uppercase())
                .help(format!("({}) default={}", flag.section, flag.default))
                .allow_negative_numbers(numeric)
                .value_parser(move |raw: &str| default.parse_as(&long, raw)),
        );
    }

    command
}

/// Merge parsed flag values into `params`.
pub fn apply_matches(
    params: Vec<Param>,
    flags: &[MirroredFlag],
    matches: &ArgMatches,
) -> Vec<EffectiveParam> {
    let given: BTreeMap<(&str, &str), &TypedValue> = flags
        .iter()
        .filter_map(|flag| {
            matches
                .get_one::<TypedValue>(&flag.name)
                .map(|value| ((flag.section.as_str(), flag.key.as_str()), value))
        })
        .collect();

    params
        .into_iter()
        .map(|mut param| {
            let flag_value = given
                .get(&(param.section.as_str(), param.key.as_str()))
                .map(|value| (*value).clone());
            let from_flag = flag_value.is_some();
            if let Some(value) = flag_value {
                param.value = value;
            }
            EffectiveParam { param, from_flag }
        })
        .collect()
}

pub fn run(
    config: &Configuration,
    args: &[String],
    format: OutputFormat,
    output_file: Option<&Path>,
) -> Result<()> {
    let params = config.params();
    let flags = mirror_flags(&params);
    // Help goes to stdout with status 0; usage errors to stderr with status 2.
    let matches = build_command(&flags)
        .try_get_matches_from(args)
        .unwrap_or_else(|err| err.exit());

    let effective = apply_matches(params, &flags, &matches);
    let rows: Vec<ParamRow<'_>> = effective.iter().map(EffectiveParam::row).collect();
    let output = get_formatter(format).format_params(&rows)?;
    output_result(&output, format, output_file)
}

//! Command-line interface of the `verdict` binary.

use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use verdict_validator::prelude::*;

use crate::address::{
    Address, StreetPolicy, address_rule, form_address_rule, form_postal_address_rule,
};
use crate::config::{Overrides, Settings};
use crate::form::{form_data, parse_pair};
use crate::logging::verbosity_directive;

/// Validate address records and form input
#[derive(Parser, Debug)]
#[command(name = "verdict")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// How to treat a street name without an initial capital
    #[arg(long, global = true, value_enum)]
    pub policy: Option<StreetPolicy>,

    /// Settings file (default: ./verdict.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate an address given field by field
    Address {
        /// House number
        #[arg(long, allow_negative_numbers = true)]
        number: i64,

        /// Street name
        #[arg(long)]
        street: String,
    },

    /// Read an address from KEY=VALUE form fields and validate it
    Form {
        /// Also read and check a `zip` field
        #[arg(long)]
        postal: bool,

        /// Form fields, e.g. number=29 street="acacia road"
        #[arg(value_name = "KEY=VALUE", value_parser = parse_pair)]
        fields: Vec<(String, String)>,
    },
}

/// What a command printed and whether validation passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub passed: bool,
    pub text: String,
}

impl Cli {
    /// Flag values as the top configuration layer.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            policy: self.policy,
            json: self.json,
            log: verbosity_directive(self.verbose).map(str::to_owned),
        }
    }
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Address { .. } => "address",
            Self::Form { postal: false, .. } => "form",
            Self::Form { postal: true, .. } => "form --postal",
        }
    }

    /// Runs the validation this command describes.
    ///
    /// # Errors
    ///
    /// Fails only if the outcome cannot be serialized to JSON.
    pub fn execute(&self, settings: &Settings) -> Result<Report, serde_json::Error> {
        let span = tracing::debug_span!(
            "validate",
            command = self.name(),
            policy = %settings.policy
        );
        let _enter = span.enter();

        let report = match self {
            Self::Address { number, street } => {
                let record = Address::new(*number, street.clone());
                render(address_rule(settings.policy).apply(&record), settings.json)
            }
            Self::Form { postal, fields } => {
                let form = form_data(fields.iter().cloned());
                tracing::debug!(fields = form.len(), "form read");
                if *postal {
                    render(form_postal_address_rule(settings.policy).apply(&form), settings.json)
                } else {
                    render(form_address_rule(settings.policy).apply(&form), settings.json)
                }
            }
        }?;

        tracing::debug!(passed = report.passed, "validation finished");
        Ok(report)
    }
}

fn render<A>(outcome: Outcome<A>, json: bool) -> Result<Report, serde_json::Error>
where
    A: Serialize + fmt::Display,
{
    if let Some(messages) = outcome.messages() {
        tracing::debug!(%messages, "rejected");
    }
    let text = if json {
        serde_json::to_string(&outcome)?
    } else {
        outcome.to_string()
    };
    Ok(Report {
        passed: outcome.is_success(),
        text,
    })
}

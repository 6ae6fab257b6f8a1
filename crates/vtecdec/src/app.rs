//! Decode and report
//!
//! `vtecdec` decodes exactly one P-VTEC string per run. Any
//! decoding error ends the run. Otherwise, unless `--quiet`,
//! it prints a report of every field.

use std::fmt;

use anyhow::Context;
use chrono::{DateTime, Utc};
use log::{info, warn};
use vtec::Vtec;

use crate::cli::Args;

/// Run the application
///
/// Decodes the `args.code` and evaluates its status at `now`.
pub fn run(args: &Args, now: &DateTime<Utc>) -> anyhow::Result<()> {
    let vtec = Vtec::new(args.code.as_str())
        .with_context(|| format!("unable to decode \"{}\"", args.code))?;

    info!("decoded: {:#}", vtec);
    if !vtec.product_class().is_operational() {
        warn!(
            "product class \"{}\" is not operational: {}",
            vtec.product_class_str(),
            vtec.product_class()
        );
    }

    if !args.quiet {
        print!("{}", Report::new(&vtec, now));
    }

    Ok(())
}

/// Event status at a given time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Pending,
    InEffect,
    Expired,
}

impl Status {
    fn at(vtec: &Vtec, now: &DateTime<Utc>) -> Self {
        if vtec.is_expired_at(now) {
            Status::Expired
        } else if vtec.is_in_effect_at(now) {
            Status::InEffect
        } else {
            Status::Pending
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Pending => "pending",
            Status::InEffect => "in effect",
            Status::Expired => "expired",
        })
    }
}

/// Human-readable report, one field per line
struct Report<'a> {
    vtec: &'a Vtec,
    status: Status,
}

impl<'a> Report<'a> {
    fn new(vtec: &'a Vtec, now: &DateTime<Utc>) -> Self {
        Self {
            vtec,
            status: Status::at(vtec, now),
        }
    }
}

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vtec = self.vtec;
        let office = vtec.office();

        writeln!(f, "VTEC:         {}", vtec)?;
        writeln!(
            f,
            "Class:        {} ({})",
            vtec.product_class_str(),
            vtec.product_class()
        )?;
        writeln!(f, "Action:       {} ({})", vtec.action_str(), vtec.action())?;
        writeln!(
            f,
            "Office:       {} ({:#}) {}",
            vtec.office_id(),
            office,
            office
        )?;
        writeln!(
            f,
            "Phenomenon:   {:#} ({})",
            vtec.phenomenon(),
            vtec.phenomenon()
        )?;
        writeln!(
            f,
            "Significance: {:#} ({})",
            vtec.significance(),
            vtec.significance()
        )?;
        writeln!(f, "ETN:          {}", vtec.event_tracking_number())?;
        match vtec.event_beginning() {
            Some(begin) => writeln!(f, "Begins:       {}", format_time(begin))?,
            None => writeln!(f, "Begins:       undefined")?,
        }
        writeln!(f, "Ends:         {}", format_time(vtec.event_ending()))?;
        writeln!(f, "Status:       {}", self.status)
    }
}

fn format_time(tm: DateTime<Utc>) -> impl fmt::Display {
    tm.format("%Y-%m-%d %H:%M UTC")
}

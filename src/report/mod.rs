//! Report driver.
//!
//! Runs the forward query for every catalog entry, prints each section in
//! catalog order, then chains the first A answer into a reverse lookup.

mod style;

use std::io::Write;

use futures::stream::{self, StreamExt};

use crate::config::{PROGRAM_CREDIT, PROGRAM_TITLE, SEPARATOR_WIDTH, USAGE_EXAMPLE_DOMAIN};
use crate::dns::{DnsClient, QueryResult, RecordType, RecordTypeCatalog};
use crate::error_handling::InspectError;

pub use style::{Painter, Style};

/// Outcome of the reverse lookup step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReverseLookup {
    /// No A answer was available; no reverse query was issued.
    NotPossible,
    /// A reverse query was issued for `address`.
    Performed {
        /// First line of the A answer, verbatim
        address: String,
        /// PTR answer lines (possibly empty)
        result: QueryResult,
    },
}

/// Everything printed by one inspection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionReport {
    /// Domain that was inspected
    pub domain: String,
    /// DNS server the queries went to
    pub server: String,
    /// Forward answers in catalog order
    pub records: Vec<(RecordType, QueryResult)>,
    /// Reverse lookup outcome
    pub reverse: ReverseLookup,
}

impl InspectionReport {
    /// Answer for `record_type`, if it was queried.
    pub fn result_for(&self, record_type: RecordType) -> Option<&QueryResult> {
        self.records
            .iter()
            .find(|(rt, _)| *rt == record_type)
            .map(|(_, result)| result)
    }

    /// Number of record types that returned at least one line.
    pub fn found_count(&self) -> usize {
        self.records.iter().filter(|(_, r)| !r.is_empty()).count()
    }
}

/// Prints usage and an example invocation.
pub fn write_usage<W: Write>(out: &mut W, program: &str, painter: &Painter) -> std::io::Result<()> {
    writeln!(
        out,
        "{}",
        painter.paint(&format!("Usage: {program} <domain>"), Style::Notice)
    )?;
    writeln!(
        out,
        "{}",
        painter.paint(
            &format!("Example: {program} {USAGE_EXAMPLE_DOMAIN}"),
            Style::Notice
        )
    )
}

fn write_separator<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
    writeln!(out)
}

/// Prints the title banner and the target block.
pub fn write_banner<W: Write>(
    out: &mut W,
    domain: &str,
    server: &str,
    painter: &Painter,
) -> std::io::Result<()> {
    writeln!(out, "{}", painter.paint(PROGRAM_TITLE, Style::Banner))?;
    writeln!(out, "{}", painter.paint(PROGRAM_CREDIT, Style::Credit))?;
    write_separator(out)?;
    writeln!(
        out,
        "{}",
        painter.paint(&format!("Analyzing domain: {domain}"), Style::Banner)
    )?;
    writeln!(
        out,
        "{}",
        painter.paint(&format!("Using DNS server: {server}"), Style::Banner)
    )?;
    write_separator(out)
}

fn write_lines<W: Write>(out: &mut W, result: &QueryResult, painter: &Painter) -> std::io::Result<()> {
    for line in result.lines() {
        writeln!(out, "{}", painter.paint(&format!("  {line}"), Style::Found))?;
    }
    Ok(())
}

fn write_record_section<W: Write>(
    out: &mut W,
    record_type: RecordType,
    result: &QueryResult,
    painter: &Painter,
) -> std::io::Result<()> {
    let header = format!(
        "--- {} ({}) ---",
        record_type.description(),
        record_type.code()
    );
    writeln!(out, "{}", painter.paint(&header, Style::Section))?;
    if result.is_empty() {
        let notice = format!(
            "  No records found for type {} or error retrieving.",
            record_type.code()
        );
        writeln!(out, "{}", painter.paint(&notice, Style::Notice))?;
    } else {
        write_lines(out, result, painter)?;
    }
    writeln!(out)?;
    out.flush()
}

/// Runs every forward query and the reverse lookup, printing as it goes.
///
/// Up to `max_concurrency` forward queries run at once; sections are printed
/// strictly in catalog order, each one as soon as its own answer is in. The
/// reverse lookup starts only after every forward query has finished.
///
/// # Errors
///
/// Returns the client's fatal error (e.g. `ResolverUnavailable`) as soon as
/// the section it belongs to is due, leaving later sections unprinted, or an
/// I/O error from `out`.
pub async fn inspect_domain<C, W>(
    client: &C,
    domain: &str,
    catalog: &RecordTypeCatalog,
    max_concurrency: usize,
    out: &mut W,
    painter: &Painter,
) -> Result<InspectionReport, InspectError>
where
    C: DnsClient,
    W: Write,
{
    let mut answers = stream::iter(catalog.iter().map(move |record_type| async move {
        (record_type, client.query(domain, record_type).await)
    }))
    .buffered(max_concurrency.max(1));

    let mut records = Vec::with_capacity(catalog.len());
    while let Some((record_type, answer)) = answers.next().await {
        let result = answer?;
        write_record_section(out, record_type, &result, painter)?;
        records.push((record_type, result));
    }

    writeln!(
        out,
        "{}",
        painter.paint("--- PTR (Reverse DNS Lookup) ---", Style::Section)
    )?;

    let address = records
        .iter()
        .find(|(rt, _)| *rt == RecordType::A)
        .and_then(|(_, result)| result.first())
        .map(str::to_string);

    let reverse = match address {
        Some(address) => {
            writeln!(
                out,
                "{}",
                painter.paint(
                    &format!("  Found IP for {domain}: {address}"),
                    Style::Address
                )
            )?;
            let result = client.reverse(&address).await?;
            if result.is_empty() {
                let notice = format!(
                    "  No PTR record for {address} (status: NXDOMAIN or NOERROR with empty response)."
                );
                writeln!(out, "{}", painter.paint(&notice, Style::Notice))?;
            } else {
                write_lines(out, &result, painter)?;
            }
            ReverseLookup::Performed { address, result }
        }
        None => {
            log::debug!("No A record for {domain}, skipping reverse lookup");
            let notice =
                format!("  Could not retrieve IPv4 address for {domain}, PTR query not possible.");
            writeln!(out, "{}", painter.paint(&notice, Style::Notice))?;
            ReverseLookup::NotPossible
        }
    };

    write_separator(out)?;
    writeln!(
        out,
        "{}",
        painter.paint(
            "--- Analysis complete. All available information above. ---",
            Style::Banner
        )
    )?;
    out.flush()?;

    Ok(InspectionReport {
        domain: domain.to_string(),
        server: client.server().to_string(),
        records,
        reverse,
    })
}

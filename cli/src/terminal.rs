//! Colored terminal output for line records and proposals.

use colored::Colorize;

use proposalforge::{
    InlineSpan, LineKind, LineRecord, MarkdownRenderer, ProposalData, ProposalSection,
    SavedProposal,
};

fn inline(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|span| {
            if span.bold {
                span.text.bold().to_string()
            } else {
                span.text.clone()
            }
        })
        .collect()
}

/// Print line records with terminal styling.
pub fn print_records(records: &[LineRecord]) {
    for record in records.iter().filter(|r| r.is_visible()) {
        match record.kind {
            LineKind::Heading1 => println!("{}", inline(&record.spans).cyan().bold()),
            LineKind::Heading2 => println!("{}", inline(&record.spans).cyan()),
            LineKind::Heading3 => println!("{}", inline(&record.spans).bold()),
            LineKind::Bullet => println!("  {} {}", "•".yellow(), inline(&record.spans)),
            LineKind::Ordered => {
                let marker = record
                    .ordinal
                    .as_deref()
                    .map(|n| format!("{}.", n))
                    .unwrap_or_default();
                println!("  {} {}", marker.yellow(), inline(&record.spans));
            }
            LineKind::TableRow => {
                let cells: Vec<String> = record
                    .cells
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .map(|c| inline(&c.spans))
                    .collect();
                println!("  {}", cells.join(&format!(" {} ", "│".dimmed())));
            }
            LineKind::Blank => println!(),
            LineKind::Paragraph => println!("{}", inline(&record.spans)),
        }
    }
}

/// Print every present section of a proposal.
///
/// With `expand_all` unset, sections that start collapsed show only their title.
pub fn print_proposal(proposal: &ProposalData, expand_all: bool) {
    let renderer = MarkdownRenderer::new();

    if let Some(title) = &proposal.proposal_title {
        println!("{}", title.cyan().bold());
    }
    if let Some(date) = &proposal.generated_date {
        println!("{}", date.dimmed());
    }
    println!("{}", "─".repeat(60).dimmed());

    for section in ProposalSection::ALL {
        let Some(body) = proposal.section(section) else {
            continue;
        };
        println!();
        if expand_all || section.default_open() {
            println!("{} {}", "▾".dimmed(), section.title().green().bold());
            print_records(&renderer.render(body));
        } else {
            println!("{} {}", "▸".dimmed(), section.title().green().bold());
        }
    }

    if let Some(total) = &proposal.total_estimate {
        println!();
        println!("{}: {}", "Total Estimate".bold(), total.yellow().bold());
    }
}

/// Print a one-entry summary of a saved proposal for listings.
pub fn print_card(proposal: &SavedProposal) {
    let date = chrono::DateTime::parse_from_rfc3339(&proposal.created_at)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| proposal.created_at.clone());

    println!(
        "{} {}",
        proposal.display_title().bold(),
        format!("[{}]", proposal.form_data.project_type).dimmed()
    );
    println!(
        "  {} {} {} {}",
        proposal.id.dimmed(),
        date.dimmed(),
        proposal.status.to_string().green(),
        proposal.pdf_url.as_deref().map(|_| "PDF").unwrap_or_default().blue()
    );
    let snippet = proposal.snippet();
    if !snippet.is_empty() {
        println!("  {}", snippet);
    }
}

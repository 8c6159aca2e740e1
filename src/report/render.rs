// Terminal rendering of the composed report.
// Splits the body on the section delimiter and prints one bordered panel
// per section. Purely presentational; malformed bodies degrade, never fail.

use std::io::{self, Write};

use chrono::Local;
use crossterm::style::Stylize;

/// Token separating report sections.
pub const SECTION_DELIMITER: &str = "---";

const BANNER: &str = "🚀 GitHub Trending Repositories Report";

/// Width of rendered panels, borders included.
const PANEL_WIDTH: usize = 80;
const INNER_WIDTH: usize = PANEL_WIDTH - 4;

/// One titled block of report text.
#[derive(Debug, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub content: String,
}

/// Split a report body into sections. Each non-empty delimited chunk yields
/// one section titled by its first line; a body without delimiters is a
/// single section.
pub fn split_sections(body: &str) -> Vec<Section> {
    body.split(SECTION_DELIMITER)
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| {
            let trimmed = chunk.trim();
            let mut lines = trimmed.lines();
            let title = lines.next().unwrap_or("").trim().to_string();
            let content = lines.collect::<Vec<_>>().join("\n");
            Section { title, content }
        })
        .collect()
}

/// Print the report to stdout.
pub fn print_report(body: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write_report(&mut stdout, body)
}

fn write_report<W: Write>(out: &mut W, body: &str) -> io::Result<()> {
    writeln!(out)?;
    write_banner(out)?;

    let date_line = format!("Generated on: {}", Local::now().format("%Y-%m-%d"));
    writeln!(out, "{}", date_line.cyan().italic())?;
    writeln!(out)?;

    for section in split_sections(body) {
        write_section(out, &section)?;
        writeln!(out)?;
    }

    Ok(())
}

fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "╭{}╮", "─".repeat(PANEL_WIDTH - 2))?;
    writeln!(out, "│ {} │", pad(BANNER, INNER_WIDTH).magenta().bold())?;
    writeln!(out, "╰{}╯", "─".repeat(PANEL_WIDTH - 2))?;
    Ok(())
}

fn write_section<W: Write>(out: &mut W, section: &Section) -> io::Result<()> {
    let label = format!(" {} ", section.title);
    let fill = PANEL_WIDTH.saturating_sub(label.chars().count() + 3);
    writeln!(out, "╭─{}{}╮", label.yellow().bold(), "─".repeat(fill))?;

    for line in section.content.lines() {
        for part in wrap(line, INNER_WIDTH) {
            writeln!(out, "│ {} │", pad(&part, INNER_WIDTH))?;
        }
    }

    writeln!(out, "╰{}╯", "─".repeat(PANEL_WIDTH - 2))?;
    Ok(())
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

fn wrap(line: &str, width: usize) -> Vec<String> {
    if line.chars().count() <= width {
        return vec![line.to_string()];
    }
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

//! List site content

use anyhow::Result;
use std::io::Write;

use crate::content::loader::ContentLoader;
use crate::content::{Record, Section};
use crate::listing::{entry_href, sort_newest_first};
use crate::Folio;

/// Print the records of a section, newest first
pub fn run(folio: &Folio, section: Section, json: bool) -> Result<()> {
    let mut records = ContentLoader::new(folio).load_section(section)?;
    sort_newest_first(&mut records);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &records)?;
        writeln!(out)?;
    } else {
        write_table(&mut out, section, &records)?;
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, section: Section, records: &[Record]) -> Result<()> {
    writeln!(out, "{} ({}):", section.title(), records.len())?;
    for record in records {
        writeln!(
            out,
            "  {} - {} [{}]",
            record.published.format("%Y-%m-%d"),
            record.metadata.title,
            entry_href(section, &record.slug)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_write_table() {
        let record = Record::parse(
            "hello-world",
            Path::new("hello-world.md"),
            "---\ntitle: Hello\npublishedAt: 2024-01-01\nsummary: s\n---\n",
        )
        .unwrap();

        let mut out = Vec::new();
        write_table(&mut out, Section::Projects, &[record]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Projects (1):\n  2024-01-01 - Hello [/projects/hello-world]\n"
        );
    }
}

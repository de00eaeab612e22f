use crate::extract::ExtractedContent;
use crate::sentiment::SentimentReport;
use std::io::{self, Write};

/// Writes the extracted fields followed by the sentiment section
///
/// # Format
///
/// ```text
/// === Crawled Data ===
/// Title: <title>
/// Meta description: <meta>
/// H1 headings: [..]
/// H2 headings: [..]
/// H3 headings: [..]
/// Paragraphs: [..]
///
/// === Sentiment Analysis ===
/// Title: <label> <result>
/// ...
/// Overall page: <label> <result>
/// ```
pub fn write_report<W: Write>(
    out: &mut W,
    content: &ExtractedContent,
    sentiment: &SentimentReport,
) -> io::Result<()> {
    write_content(out, content)?;
    writeln!(out)?;
    write_sentiment(out, sentiment)?;
    out.flush()
}

/// Writes the "Crawled Data" section
pub fn write_content<W: Write>(out: &mut W, content: &ExtractedContent) -> io::Result<()> {
    writeln!(out, "=== Crawled Data ===")?;
    writeln!(out, "Title: {}", content.title)?;
    writeln!(out, "Meta description: {}", content.meta_description)?;
    writeln!(out, "H1 headings: {:?}", content.h1)?;
    writeln!(out, "H2 headings: {:?}", content.h2)?;
    writeln!(out, "H3 headings: {:?}", content.h3)?;
    writeln!(out, "Paragraphs: {:?}", content.paragraphs)?;
    Ok(())
}

/// Writes the "Sentiment Analysis" section, one line per group
pub fn write_sentiment<W: Write>(out: &mut W, sentiment: &SentimentReport) -> io::Result<()> {
    writeln!(out, "=== Sentiment Analysis ===")?;
    for (name, result) in sentiment.entries() {
        writeln!(out, "{}: {} {}", name, result.label(), result)?;
    }
    Ok(())
}

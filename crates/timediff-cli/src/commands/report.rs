//! Report command: renders every tagged block of a document.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use timediff_core::DocumentSummary;

use super::block::format_block;
use super::total::{compute, format_total};

/// Formats each block under a header naming its opening line, then the
/// document total.
pub fn format_report(summary: &DocumentSummary, tag: &str) -> String {
    let mut output = String::new();

    if summary.blocks.is_empty() {
        writeln!(output, "No `{tag}` blocks found.").unwrap();
        writeln!(output).unwrap();
    }

    for block in &summary.blocks {
        writeln!(output, "Block at line {}", block.start_line).unwrap();
        output.push_str(&format_block(&block.result));
        writeln!(output).unwrap();
    }

    writeln!(output, "{}", format_total(summary)).unwrap();
    output
}

/// Runs the report command.
pub fn run<W: Write>(writer: &mut W, document: &str, tag: &str) -> Result<()> {
    let summary = compute(document, tag);
    write!(writer, "{}", format_report(&summary, tag))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn render(document: &str) -> String {
        let mut output = Vec::new();
        run(&mut output, document, "timediff").unwrap();
        String::from_utf8(output).unwrap().replace('\t', "[TAB]")
    }

    #[test]
    fn report_two_blocks() {
        let document = "```timediff
07:45 - 08:15 commute
inbox zero
08:15 - 11:00
```

```timediff
14:00 - 13:30 typo
```
";
        assert_snapshot!(render(document), @r"
        Block at line 1
        07:45 - 08:15 commute[TAB]0h30min
        inbox zero
        08:15 - 11:00[TAB]2h45min
        Total: 3h15min

        Block at line 7
        14:00 - 13:30 typo[TAB]-1h-30min
        Total: -1h-30min

        Total: 165min - 2h45min
        ");
    }

    #[test]
    fn report_without_blocks() {
        assert_snapshot!(render("plain note\n"), @r"
        No `timediff` blocks found.

        Total: 0min - 0h0min
        ");
    }
}

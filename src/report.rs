use std::io::{self, Write};

use crate::aggregator::Buckets;

const BANNER: &str = "---------------------------------------------------";
const EXAMPLES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Summary,
    /// Print every line with exactly this many hyphens.
    Filter(i64),
}

impl From<Option<i64>> for Mode {
    fn from(filter: Option<i64>) -> Self {
        match filter {
            Some(count) => Mode::Filter(count),
            None => Mode::Summary,
        }
    }
}

pub fn write_report(buckets: &Buckets, mode: Mode, output: &mut dyn Write) -> io::Result<()> {
    match mode {
        Mode::Filter(count) => write_filtered(buckets, count, output),
        Mode::Summary => write_summary(buckets, output),
    }
}

fn write_filtered(buckets: &Buckets, count: i64, output: &mut dyn Write) -> io::Result<()> {
    let lines = usize::try_from(count)
        .ok()
        .and_then(|count| buckets.get(count));
    match lines {
        Some(lines) => {
            for line in lines {
                write_line(line, output)?;
            }
        }
        None => writeln!(output, "No subdomains found with {} hyphens.", count)?,
    }
    Ok(())
}

fn write_summary(buckets: &Buckets, output: &mut dyn Write) -> io::Result<()> {
    let counts = buckets.counts();
    let (Some(&min), Some(&max)) = (counts.first(), counts.last()) else {
        writeln!(output, "No subdomains found.")?;
        return Ok(());
    };

    writeln!(output, "{}", BANNER)?;
    writeln!(output, "[INFO] Minimum number of hyphens: {}", min)?;
    write_examples(buckets, min, output)?;

    writeln!(output)?;
    writeln!(output, "[INFO] Maximum number of hyphens: {}", max)?;
    write_examples(buckets, max, output)?;
    writeln!(output, "{}", BANNER)?;
    Ok(())
}

fn write_examples(buckets: &Buckets, count: usize, output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "[INFO] Example Subdomains:")?;
    for line in buckets.get(count).unwrap_or_default().iter().take(EXAMPLES) {
        write_line(line, output)?;
    }
    Ok(())
}

fn write_line(line: &[u8], output: &mut dyn Write) -> io::Result<()> {
    output.write_all(line)?;
    output.write_all(b"\n")
}

//! Sanitize command implementation: one name in, one safe name out.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{BufRead, Write};

use safename_core::Sanitizer;

/// Where the names to sanitize come from.
pub enum NameSource<R: BufRead> {
    /// Names given on the command line.
    Args(Vec<String>),
    /// One name per line, without the line terminator.
    Lines(R),
}

/// Sanitizes every name from `source` and writes one result per line to `out`.
///
/// Stops at the first name the sanitizer rejects. Returns how many names
/// were written.
pub fn run_sanitize<R: BufRead, W: Write>(
    sanitizer: &Sanitizer,
    source: NameSource<R>,
    out: &mut W,
) -> Result<usize> {
    info!("Starting safename run with {:?}.", sanitizer.options());

    let mut count = 0;
    match source {
        NameSource::Args(names) => {
            for name in &names {
                count += 1;
                write_one(sanitizer, name, count, out)?;
            }
        }
        NameSource::Lines(reader) => {
            for line in reader.lines() {
                let line = line.with_context(|| format!("Failed to read input line {}", count + 1))?;
                count += 1;
                write_one(sanitizer, &line, count, out)?;
            }
        }
    }

    out.flush().context("Failed to flush output")?;
    info!("safename run completed, {} name(s) written.", count);
    Ok(count)
}

fn write_one<W: Write>(sanitizer: &Sanitizer, name: &str, index: usize, out: &mut W) -> Result<()> {
    let safe = sanitizer
        .try_sanitize(name)
        .with_context(|| format!("Name {} ({:?}) cannot be used", index, name))?;
    if safe != name {
        debug!("Name {}: {:?} -> {:?}", index, name, safe);
    }
    writeln!(out, "{}", safe).context("Failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use safename_core::{EmptyPolicy, SanitizeOptions};
    use std::io::Cursor;

    fn run(sanitizer: &Sanitizer, source: NameSource<Cursor<&[u8]>>) -> Result<String> {
        let mut out = Vec::new();
        run_sanitize(sanitizer, source, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn args_are_sanitized_in_order() -> Result<()> {
        let out = run(
            &Sanitizer::default(),
            NameSource::Args(vec!["CON".into(), "a:b".into()]),
        )?;
        assert_eq!(out, "ＣＯＮ\na：b\n");
        Ok(())
    }

    #[test]
    fn lines_are_sanitized_one_per_name() -> Result<()> {
        let input: &[u8] = "report?.txt\r\nnotes...\n".as_bytes();
        let out = run(&Sanitizer::default(), NameSource::Lines(Cursor::new(input)))?;
        assert_eq!(out, "report？.txt\nnotes\n");
        Ok(())
    }

    #[test]
    fn rejected_name_stops_the_run() {
        let sanitizer = Sanitizer::new(SanitizeOptions {
            empty_policy: EmptyPolicy::Reject,
            ..SanitizeOptions::default()
        });
        let mut out = Vec::new();
        let err = run_sanitize(
            &sanitizer,
            NameSource::<Cursor<&[u8]>>::Args(vec!["ok".into(), "...".into(), "never".into()]),
            &mut out,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("Name 2"));
        assert!(format!("{err:#}").contains("empty"));
        assert_eq!(String::from_utf8(out).unwrap(), "ok\n");
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let input: &[u8] = b"fine\n\xff\xfe\n";
        let mut out = Vec::new();
        let err = run_sanitize(&Sanitizer::default(), NameSource::Lines(Cursor::new(input)), &mut out)
            .unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}

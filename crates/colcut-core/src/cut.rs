//! Streaming projection of resolved columns.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::ops::Range;

use tracing::{debug, trace};

use crate::error::{CutError, Result};
use crate::options::{CutOptions, HeaderMode, IndexBase, Source};
use crate::spec::ColumnSpec;
use crate::split::field_spans_into;

/// Counts gathered while cutting one source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CutSummary {
    /// Number of resolved columns per output line (0 for an empty source).
    pub columns: usize,
    /// Whether the projected first line was written.
    pub header_written: bool,
    /// Data lines written after the first line.
    pub rows: usize,
}

/// A specification bound to its index base and header mode.
#[derive(Debug, Clone)]
pub struct Cutter {
    spec: ColumnSpec,
    base: IndexBase,
    header: HeaderMode,
}

impl Cutter {
    /// Builds a cutter from the options in effect for a source.
    ///
    /// Fails with [`CutError::MissingSpecification`] when no specification
    /// was given or it has no tokens.
    pub fn new(options: &CutOptions) -> Result<Self> {
        let spec = options
            .spec
            .as_deref()
            .ok_or(CutError::MissingSpecification)?;
        Ok(Self {
            spec: ColumnSpec::parse(spec)?,
            base: options.base,
            header: options.header,
        })
    }

    /// Cuts every line of `reader` into `writer`.
    ///
    /// The first line anchors the specification. An empty input writes
    /// nothing and is not an error, even when the specification would not
    /// resolve.
    pub fn cut<R: BufRead, W: Write>(&self, mut reader: R, writer: &mut W) -> Result<CutSummary> {
        let mut summary = CutSummary::default();
        let mut line = Vec::new();
        let mut spans: Vec<Range<usize>> = Vec::new();

        if !read_line(&mut reader, &mut line)? {
            return Ok(summary);
        }
        field_spans_into(&line, &mut spans);
        let indices = {
            let header: Vec<&[u8]> = spans.iter().map(|span| &line[span.clone()]).collect();
            self.spec.resolve(self.base, &header)?
        };
        summary.columns = indices.len();

        if self.header == HeaderMode::Print {
            write_projected(writer, &line, &spans, &indices).map_err(write_error)?;
            summary.header_written = true;
        }

        while read_line(&mut reader, &mut line)? {
            field_spans_into(&line, &mut spans);
            write_projected(writer, &line, &spans, &indices).map_err(write_error)?;
            summary.rows += 1;
        }

        writer.flush().map_err(write_error)?;
        trace!(
            columns = summary.columns,
            rows = summary.rows,
            header = summary.header_written,
            "cut complete"
        );
        Ok(summary)
    }
}

/// Opens `source`, cuts it with `options`, and releases it.
pub fn cut_source<W: Write>(
    source: &Source,
    options: &CutOptions,
    writer: &mut W,
) -> Result<CutSummary> {
    match source {
        Source::Stdin => {
            let cutter = Cutter::new(options)?;
            debug!("reading standard input");
            let stdin = io::stdin();
            cutter
                .cut(stdin.lock(), writer)
                .map_err(|err| err.for_source(source))
        }
        Source::File(path) => {
            let file = File::open(path).map_err(|err| CutError::Open {
                path: path.clone(),
                source: err,
            })?;
            let cutter = Cutter::new(options)?;
            debug!(path = %path.display(), "opened input file");
            cutter
                .cut(BufReader::new(file), writer)
                .map_err(|err| err.for_source(source))
        }
    }
}

/// Reads one `\n`-terminated line into `line`, without the terminator.
///
/// Returns false at end of input. A carriage return is kept as data.
fn read_line<R: BufRead>(reader: &mut R, line: &mut Vec<u8>) -> Result<bool> {
    line.clear();
    let read = reader
        .read_until(b'\n', line)
        .map_err(|source| CutError::Read {
            name: "input".to_string(),
            source,
        })?;
    if read == 0 {
        return Ok(false);
    }
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    Ok(true)
}

/// Writes the fields at `indices`, comma-joined, then `\n`.
///
/// Indices past the end of this line produce empty cells.
fn write_projected<W: Write>(
    writer: &mut W,
    line: &[u8],
    spans: &[Range<usize>],
    indices: &[usize],
) -> io::Result<()> {
    for (position, &index) in indices.iter().enumerate() {
        if position > 0 {
            writer.write_all(b",")?;
        }
        if let Some(span) = spans.get(index) {
            writer.write_all(&line[span.clone()])?;
        }
    }
    writer.write_all(b"\n")
}

fn write_error(source: io::Error) -> CutError {
    CutError::Write { source }
}

impl CutError {
    /// Names the source in read errors.
    fn for_source(self, source: &Source) -> Self {
        match self {
            Self::Read { source: err, .. } => Self::Read {
                name: source.to_string(),
                source: err,
            },
            other => other,
        }
    }
}

//! Line Transformer
//!
//! Streams a G-code file line by line, rewriting the coordinates of every
//! `G0`/`G1` move and copying everything else through untouched.
//!
//! Rewritten lines always have the layout
//! `<command> X<x> Y<y> <other tokens...> [Z<z>]`
//! with coordinates printed to exactly three decimals.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use gxform_core::{Axis, TransformError, TransformParameters};

use crate::geometry::CoordinateTransform;
use crate::line::MotionCommand;

/// Buffer size for reading and writing G-code files (256 KB)
const IO_BUFFER_SIZE: usize = 256 * 1024;

/// Statistics for one transform pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Total lines read from the input
    pub lines_read: u64,
    /// Lines rewritten with transformed coordinates
    pub lines_transformed: u64,
    /// Lines copied through unchanged
    pub lines_passed_through: u64,
    /// Total bytes written to the output
    pub bytes_written: u64,
    /// Time taken for the pass (milliseconds)
    pub elapsed_ms: u64,
}

impl TransformReport {
    /// Fraction of lines that were rewritten, as a percentage
    pub fn transformed_percent(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            (self.lines_transformed as f64 / self.lines_read as f64) * 100.0
        }
    }
}

/// Applies one parameter set to G-code text
#[derive(Debug, Clone, Copy)]
pub struct LineTransformer {
    transform: CoordinateTransform,
}

impl LineTransformer {
    /// Create a transformer for `params`
    pub fn new(params: TransformParameters) -> Self {
        Self {
            transform: CoordinateTransform::new(params),
        }
    }

    /// Parameters in use
    pub fn params(&self) -> &TransformParameters {
        self.transform.params()
    }

    /// Transform a single line
    ///
    /// `line` may include its terminator. Lines that are not motion commands,
    /// or whose coordinate fields all fail to parse, are returned borrowed and
    /// byte-identical. Rewritten lines end with a single `\n`.
    pub fn transform_line<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match MotionCommand::parse(line) {
            Some(cmd) if cmd.has_coordinates() => Cow::Owned(self.rewrite(&cmd)),
            _ => Cow::Borrowed(line),
        }
    }

    fn rewrite(&self, cmd: &MotionCommand<'_>) -> String {
        let (x, y, z) = cmd.coordinates.resolved();
        let point = self.transform.apply(x, y, z);

        let mut parts: Vec<Cow<'_, str>> = Vec::with_capacity(cmd.other_tokens.len() + 4);
        parts.push(Cow::Borrowed(cmd.command));
        parts.push(Cow::Owned(coordinate_word(Axis::X, point.x)));
        parts.push(Cow::Owned(coordinate_word(Axis::Y, point.y)));
        parts.extend(cmd.other_tokens.iter().map(|t| Cow::Borrowed(*t)));

        // A Z word is written when the source mentions Z or scaling moved it.
        // A line with no Z at all keeps z == 0.0, so it never gains one.
        if cmd.mentions_z || point.z != z {
            parts.push(Cow::Owned(coordinate_word(Axis::Z, point.z)));
        }

        let mut out = parts.join(" ");
        out.push('\n');
        out
    }

    /// Transform G-code held in memory
    pub fn transform_str(&self, input: &str) -> String {
        input
            .split_inclusive('\n')
            .map(|line| self.transform_line(line))
            .collect()
    }

    /// Transform every line from `reader` into `writer`, in order
    ///
    /// Read failures (including invalid UTF-8) are reported as
    /// [`TransformError::InputAccess`], write failures as
    /// [`TransformError::OutputAccess`]. Output already written before a
    /// failure stays in `writer`.
    pub fn transform_stream<R, W>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<TransformReport, TransformError>
    where
        R: BufRead,
        W: Write,
    {
        self.run(reader, writer, Path::new("<input>"), Path::new("<output>"))
    }

    /// Transform the file at `input` into the file at `output`
    ///
    /// The input is opened before the output is created, so a missing or
    /// unreadable input leaves the output path untouched. The output is
    /// created or truncated; a failure part-way through leaves a partially
    /// written file.
    pub fn transform_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<TransformReport, TransformError> {
        let input = input.as_ref();
        let output = output.as_ref();

        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            params = %self.params(),
            "Starting G-code transform"
        );

        let source = File::open(input).map_err(|e| TransformError::input(input, e))?;
        let reader = BufReader::with_capacity(IO_BUFFER_SIZE, source);

        let target = File::create(output).map_err(|e| TransformError::output(output, e))?;
        let writer = BufWriter::with_capacity(IO_BUFFER_SIZE, target);

        match self.run(reader, writer, input, output) {
            Ok(report) => {
                tracing::info!(
                    input = %input.display(),
                    output = %output.display(),
                    lines = report.lines_read,
                    transformed = report.lines_transformed,
                    percent = report.transformed_percent(),
                    elapsed_ms = report.elapsed_ms,
                    "Transformed G-code file"
                );
                Ok(report)
            }
            Err(e) => {
                let side = if e.is_input_error() { "input" } else { "output" };
                tracing::warn!(
                    side,
                    kind = ?e.io_error().kind(),
                    "G-code transform aborted: {}",
                    e
                );
                Err(e)
            }
        }
    }

    fn run<R, W>(
        &self,
        mut reader: R,
        mut writer: W,
        input: &Path,
        output: &Path,
    ) -> Result<TransformReport, TransformError>
    where
        R: BufRead,
        W: Write,
    {
        let start_time = Instant::now();
        let mut report = TransformReport::default();
        let mut line = String::new();

        let input_err = |e: io::Error| TransformError::input(PathBuf::from(input), e);
        let output_err = |e: io::Error| TransformError::output(PathBuf::from(output), e);

        loop {
            line.clear();
            if reader.read_line(&mut line).map_err(input_err)? == 0 {
                break;
            }
            report.lines_read += 1;

            let out = self.transform_line(&line);
            match out {
                Cow::Owned(_) => report.lines_transformed += 1,
                Cow::Borrowed(_) => report.lines_passed_through += 1,
            }

            writer.write_all(out.as_bytes()).map_err(output_err)?;
            report.bytes_written += out.len() as u64;
        }

        writer.flush().map_err(output_err)?;
        report.elapsed_ms = start_time.elapsed().as_millis() as u64;

        Ok(report)
    }
}

/// Format one coordinate word, e.g. `X12.500`
///
/// NaN is written as `nan`; infinities already print as `inf`/`-inf`.
fn coordinate_word(axis: Axis, value: f64) -> String {
    if value.is_nan() {
        format!("{}nan", axis.letter())
    } else {
        format!("{}{:.3}", axis.letter(), value)
    }
}

impl Default for LineTransformer {
    fn default() -> Self {
        Self::new(TransformParameters::identity())
    }
}

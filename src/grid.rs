use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result, bail};
use camino::Utf8Path;
use rand::Rng;
use tracing::{info, warn};

use crate::util::fs::ensure_parent_dir;

/// Number of characters every field occupies in a line.
pub const FIELD_WIDTH: usize = 5;

/// Largest value a field can hold; the smallest is zero.
pub const FIELD_MAX: u32 = 10u32.pow(FIELD_WIDTH as u32) - 1;

/// Upper bound on the line buffer reserved up front; wider rows grow it.
const LINE_CAPACITY_HINT: usize = 64 * 1024;

/// Dimensions of the grid written to disk.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Characters in one line, excluding the terminator. `None` when the
    /// width does not fit in `usize`.
    pub fn line_len(&self) -> Option<usize> {
        self.cols.checked_mul(FIELD_WIDTH)
    }

    /// Size of the whole file in bytes, saturating at `usize::MAX`.
    pub fn byte_len(&self) -> usize {
        if self.rows == 0 {
            return 0;
        }
        self.line_len()
            .map_or(usize::MAX, |len| len.saturating_add(1))
            .saturating_mul(self.rows)
    }
}

/// Append `value` to `buf` as a zero-padded decimal field.
pub fn render_field(buf: &mut String, value: u32) {
    debug_assert!(value <= FIELD_MAX);
    // Writing into a String cannot fail.
    let _ = write!(buf, "{:0width$}", value, width = FIELD_WIDTH);
}

/// Replace the contents of `buf` with one row of `cols` random fields.
pub fn fill_row<R: Rng + ?Sized>(buf: &mut String, cols: usize, rng: &mut R) {
    buf.clear();
    for _ in 0..cols {
        render_field(buf, rng.gen_range(0..=FIELD_MAX));
    }
}

/// Stream the grid into `writer`, one newline-terminated row at a time.
pub fn write_rows<W, R>(mut writer: W, shape: GridShape, rng: &mut R) -> io::Result<()>
where
    W: Write,
    R: Rng + ?Sized,
{
    let hint = shape.line_len().map_or(LINE_CAPACITY_HINT, |len| len.min(LINE_CAPACITY_HINT));
    let mut line = String::with_capacity(hint + 1);
    for _ in 0..shape.rows {
        fill_row(&mut line, shape.cols, rng);
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()
}

/// Create `output` (and any missing parent directories) and fill it with a
/// freshly generated grid. An existing file is truncated.
///
/// On a write failure the partial file is removed before the error is
/// returned.
pub fn generate<R: Rng + ?Sized>(shape: GridShape, output: &Utf8Path, rng: &mut R) -> Result<()> {
    if shape.rows > 0 && shape.line_len().is_none() {
        bail!("a line of {} fields is too wide to generate", shape.cols);
    }
    ensure_parent_dir(output)?;

    info!(rows = shape.rows, cols = shape.cols, path = %output, "generating grid");

    let file = File::create(output).with_context(|| format!("creating {}", output))?;
    if let Err(err) = write_rows(BufWriter::new(file), shape, rng) {
        if let Err(cleanup) = fs::remove_file(output) {
            warn!(path = %output, error = %cleanup, "failed to remove partial output");
        }
        return Err(err).with_context(|| format!("writing {}", output));
    }

    info!(path = %output, bytes = shape.byte_len(), "grid written");
    Ok(())
}

//! Plain-text output of the converged field.
//!
//! One line per grid row, one value per cell, each value preceded by a
//! single space, in row-major order.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{RelaxError, Result};
use crate::grid::ScalarField;

/// Write `field` to any sink.
pub fn write_field<W: Write>(sink: &mut W, field: &ScalarField) -> io::Result<()> {
    for row in field.rows() {
        for value in row {
            write!(sink, " {}", value)?;
        }
        writeln!(sink)?;
    }
    Ok(())
}

/// Write `field` to a file at `path`, creating or truncating it.
pub fn write_field_to_path<P: AsRef<Path>>(path: P, field: &ScalarField) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| write_error(path, e))?;
    let mut writer = BufWriter::new(file);
    write_field(&mut writer, field).map_err(|e| write_error(path, e))?;
    writer.flush().map_err(|e| write_error(path, e))
}

fn write_error(path: &Path, source: io::Error) -> RelaxError {
    RelaxError::FileWriteError {
        path: path.display().to_string(),
        source,
    }
}

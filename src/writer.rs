//! Buffered delimited output.
//!
//! Plain delimiter-joined lines with no quoting or escaping; the
//! optional header line carries the field names.

use std::io::{BufWriter, Write};

use crate::rows::Row;
use crate::schema::CompiledField;

pub const WRITER_BUFFER_SIZE: usize = 64 * 1024;

pub struct DelimitedWriter<W: Write> {
    out: BufWriter<W>,
    delimiter: char,
}

impl<W: Write> DelimitedWriter<W> {
    pub fn new(out: W, delimiter: char) -> Self {
        Self {
            out: BufWriter::with_capacity(WRITER_BUFFER_SIZE, out),
            delimiter,
        }
    }

    /// Write the header line: field names joined by the delimiter.
    /// Must be called before any row when a header is wanted.
    pub fn write_header(&mut self, fields: &[CompiledField]) -> std::io::Result<()> {
        self.write_line(fields.iter().map(|f| f.name().to_string()))
    }

    /// Write one row as a delimiter-joined line.
    pub fn write_row(&mut self, row: &Row) -> std::io::Result<()> {
        self.write_line(row.values().map(|v| v.to_string()))
    }

    fn write_line(&mut self, cells: impl Iterator<Item = String>) -> std::io::Result<()> {
        let mut first = true;
        for cell in cells {
            if !first {
                write!(self.out, "{}", self.delimiter)?;
            }
            first = false;
            self.out.write_all(cell.as_bytes())?;
        }
        self.out.write_all(b"\n")
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    /// Flush and unwrap the underlying writer (used by tests).
    pub fn into_inner(self) -> std::io::Result<W> {
        self.out.into_inner().map_err(|e| e.into_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{compile, parse_schema};
    use crate::{Registry, RowGenerator};

    fn render(schema: &str, rows: usize, with_header: bool) -> String {
        let registry = Registry::builtin();
        let fields = parse_schema(schema).unwrap();
        let compiled = compile(&registry, &fields).unwrap();
        let mut gen = RowGenerator::with_seed(&compiled, 42);

        let mut writer = DelimitedWriter::new(Vec::new(), '|');
        if with_header {
            writer.write_header(&compiled).unwrap();
        }
        for _ in 0..rows {
            writer.write_row(&gen.next_row().unwrap()).unwrap();
        }
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_header_line_carries_field_names() {
        let out = render("id int[4]\nname firstname", 0, true);
        assert_eq!(out, "id|name\n");
    }

    #[test]
    fn test_delimiter_count_per_line() {
        // 4 fields -> 3 delimiters per line, 5 rows + header = 6 lines.
        let out = render("id int[4]\nfirst firstname\nlast lastname\nactive bool", 5, true);
        assert_eq!(out.matches('|').count(), 18);
        assert_eq!(out.lines().count(), 6);
    }

    #[test]
    fn test_single_column_has_no_delimiter() {
        let out = render("id int[4]", 3, false);
        assert_eq!(out.matches('|').count(), 0);
        assert_eq!(out.lines().count(), 3);
    }
}

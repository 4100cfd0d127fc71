pub use csv;

use {
    crate::Result,
    std::io::{self, Write},
};

/// Builds the writer used for data files: no header, no quoting, `\n` after every record.
pub fn writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(inner)
}

/// One line of the file: `width` copies of `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowModel {
    pub index: usize,
    pub width: usize,
}

impl RowModel {
    pub fn new(index: usize, width: usize) -> Self {
        Self { index, width }
    }

    pub fn fields(&self) -> impl Iterator<Item = String> {
        let field = self.index.to_string();
        std::iter::repeat_n(field, self.width)
    }

    /// A row without fields writes nothing, not even the terminator.
    pub fn serialize_csv<W>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()>
    where
        W: io::Write,
    {
        if self.width == 0 {
            return Ok(());
        }

        let field = self.index.to_string();
        for _ in 0..self.width {
            writer.write_field(&field)?;
        }
        writer.write_record(None::<&[u8]>)?;

        Ok(())
    }
}

impl ToString for RowModel {
    fn to_string(&self) -> String {
        self.fields().collect::<Vec<_>>().join(",")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableModel {
    pub rows: usize,
    pub cols: usize,
}

impl TableModel {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn rows(&self) -> impl Iterator<Item = RowModel> {
        let cols = self.cols;
        (0..self.rows).map(move |i| RowModel::new(i, cols))
    }

    /// Writes every row and flushes; `on_row` fires after each row is handed to the writer.
    pub fn serialize_csv<W, F>(&self, writer: &mut csv::Writer<W>, mut on_row: F) -> Result<()>
    where
        W: io::Write,
        F: FnMut(),
    {
        for row in self.rows() {
            row.serialize_csv(writer)?;
            on_row();
        }
        writer.flush()?;

        Ok(())
    }
}

pub mod models;

use {
    models::TableModel,
    std::{
        fs::File,
        io::{self, Write},
        path::{Path, PathBuf},
    },
    thiserror::Error,
    tracing::debug,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Io(e.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parses a row or column count. Only non-negative integers are accepted.
pub fn parse_count(s: &str) -> Result<usize> {
    s.trim()
        .parse::<usize>()
        .map_err(|e| Error::InvalidArgument(format!("{s:?} is not a non-negative integer ({e})")))
}

pub fn file_name(rows: usize, cols: usize) -> String {
    format!("some_data_file_{rows}_{cols}.txt")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFile {
    pub path: PathBuf,
    pub rows: usize,
    pub cols: usize,
}

pub struct Generator {
    pub rows: usize,
    pub cols: usize,
    pub dir: PathBuf,
}

impl Generator {
    /// Generator writing into the current working directory.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::in_dir(rows, cols, ".")
    }

    pub fn in_dir(rows: usize, cols: usize, dir: impl AsRef<Path>) -> Self {
        Self {
            rows,
            cols,
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn file_name(&self) -> String {
        file_name(self.rows, self.cols)
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(self.file_name())
    }

    /// Creates (or truncates) the data file and fills it.
    ///
    /// The two status lines go to `status`; `on_row` is called once per written row.
    pub fn run<S, F>(&self, status: &mut S, on_row: F) -> Result<DataFile>
    where
        S: Write,
        F: FnMut(),
    {
        let path = self.path();
        writeln!(
            status,
            "Creating {} rows,{} cols to {}.",
            self.rows,
            self.cols,
            self.file_name()
        )?;

        let file = File::create(&path)?;
        debug!(path = %path.display(), "created data file");

        let mut writer = models::writer(file);
        TableModel::new(self.rows, self.cols).serialize_csv(&mut writer, on_row)?;
        drop(writer);
        debug!(rows = self.rows, cols = self.cols, "data file written");

        writeln!(status, "Finished.")?;

        Ok(DataFile {
            path,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

/// Writes `some_data_file_<rows>_<cols>.txt` into the current directory, reporting to stdout.
pub fn generate(rows: usize, cols: usize) -> Result<DataFile> {
    Generator::new(rows, cols).run(&mut io::stdout(), || ())
}

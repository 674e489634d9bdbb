//! compound-storage-json
//!
//! Keeps the whole tracker state in one pretty-printed JSON file. Every write
//! goes to a temporary file in the same directory which is then renamed over
//! the target, so the file on disk is always a complete document.

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use compound_config::Config;
use compound_core::{CoreError, DocumentStorage};
use compound_domain::Document;
use tracing::{debug, info};

const TMP_PREFIX: &str = ".compound-";
const TMP_SUFFIX: &str = ".tmp";

/// Filesystem-backed [`DocumentStorage`] rooted at a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonDocumentStorage {
    path: PathBuf,
}

impl JsonDocumentStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.resolve_data_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn initialize(&self) -> Result<Document, CoreError> {
        let document = Document::new();
        save_document_to_path(&document, &self.path)?;
        info!(path = %self.path.display(), "initialized empty document");
        Ok(document)
    }
}

impl DocumentStorage for JsonDocumentStorage {
    fn load(&self) -> Result<Document, CoreError> {
        match fs::read(&self.path) {
            Ok(data) => {
                let document = parse_document(&self.path, &data)?;
                debug!(
                    path = %self.path.display(),
                    transactions = document.transactions.len(),
                    goals = document.goals.len(),
                    "loaded document"
                );
                Ok(document)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => self.initialize(),
            Err(err) => Err(CoreError::Io(err)),
        }
    }

    fn save(&self, document: &Document) -> Result<(), CoreError> {
        save_document_to_path(document, &self.path)?;
        debug!(
            path = %self.path.display(),
            transactions = document.transactions.len(),
            goals = document.goals.len(),
            "saved document"
        );
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// Atomically replaces the document at `path`, creating parent directories.
pub fn save_document_to_path(document: &Document, path: &Path) -> Result<(), CoreError> {
    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(&mut *writer, document)?;
        writer.write_all(b"\n")
    })?;
    Ok(())
}

/// Reads the document at `path`. A missing file is an I/O error here; only
/// [`JsonDocumentStorage::load`] initializes storage.
pub fn load_document_from_path(path: &Path) -> Result<Document, CoreError> {
    let data = fs::read(path)?;
    parse_document(path, &data)
}

fn parse_document(path: &Path, data: &[u8]) -> Result<Document, CoreError> {
    serde_json::from_slice(data)
        .map_err(|err| CoreError::CorruptData(format!("{}: {}", path.display(), err)))
}

/// Streams content into a temp file next to `path`, syncs it, and renames it
/// into place. The temp file is removed on every failure path.
fn write_atomic<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let dir = parent_dir(path);
    fs::create_dir_all(dir)?;
    let mut tmp = tempfile::Builder::new()
        .prefix(TMP_PREFIX)
        .suffix(TMP_SUFFIX)
        .tempfile_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

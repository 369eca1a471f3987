use super::{
    DotWriter, FrameworkWriter, InstanceReader, JsonReader, JsonWriter, TgfReader, TgfWriter,
};
use crate::aa::{AAFramework, LabelType};
use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::{
    ffi::OsString,
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    process,
    sync::atomic::{AtomicUsize, Ordering as AtomicOrdering},
};

static TMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

// The name holds the process id and a counter, and the file is created with `create_new`,
// so an existing file is never reused.
fn temporary_sibling(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("{} is not a file path", path.display()))?;
    let mut tmp_name = OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(format!(
        ".{}-{}.tmp",
        process::id(),
        TMP_COUNTER.fetch_add(1, AtomicOrdering::Relaxed)
    ));
    Ok(path.with_file_name(tmp_name))
}

/// Writes a file atomically.
///
/// The content is written to a new temporary file next to the target, which is then renamed over the target.
/// If any step fails, the temporary file is removed and the target is left untouched.
/// Other files of the directory are never modified.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let tmp_path = temporary_sibling(path)?;
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .with_context(|| format!("cannot create file {}", tmp_path.display()))?;
    let result = (|| -> Result<()> {
        let mut writer = BufWriter::new(file);
        write(&mut writer)?;
        writer
            .into_inner()
            .map_err(|e| e.into_error())
            .and_then(|f| f.sync_all())
            .with_context(|| format!("cannot write file {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "cannot rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })
    })();
    if result.is_err() && tmp_path.exists() {
        debug!("removing temporary file {}", tmp_path.display());
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn export_with<T, W>(af: &AAFramework<T>, path: &Path, writer: W, format: &str) -> Result<()>
where
    T: LabelType,
    W: FrameworkWriter<T>,
{
    write_atomically(path, |w| writer.write_framework(af, w))
        .with_context(|| format!("while exporting a framework to {}", path.display()))?;
    info!("exported the framework to {} ({})", path.display(), format);
    Ok(())
}

/// Exports a framework to a JSON file (see [JsonWriter]).
pub fn export_to_json<T: LabelType>(af: &AAFramework<T>, path: impl AsRef<Path>) -> Result<()> {
    export_with(af, path.as_ref(), JsonWriter::new_pretty(), "JSON")
}

/// Exports a framework to a TGF file (see [TgfWriter]).
pub fn export_to_tgf<T: LabelType>(af: &AAFramework<T>, path: impl AsRef<Path>) -> Result<()> {
    export_with(af, path.as_ref(), TgfWriter, "TGF")
}

/// Exports a framework to a DOT file (see [DotWriter]).
pub fn export_to_dot<T: LabelType>(af: &AAFramework<T>, path: impl AsRef<Path>) -> Result<()> {
    export_with(af, path.as_ref(), DotWriter, "DOT")
}

fn import_with(path: &Path, reader: &dyn InstanceReader<String>) -> Result<AAFramework<String>> {
    let mut file =
        File::open(path).with_context(|| format!("cannot open file {}", path.display()))?;
    reader
        .read(&mut file)
        .with_context(|| format!("while importing a framework from {}", path.display()))
}

/// Imports a framework from a JSON file (see [JsonReader]).
pub fn import_from_json(path: impl AsRef<Path>) -> Result<AAFramework<String>> {
    import_with(path.as_ref(), &JsonReader::default())
}

/// Imports a framework from a TGF file (see [TgfReader]).
pub fn import_from_tgf(path: impl AsRef<Path>) -> Result<AAFramework<String>> {
    import_with(path.as_ref(), &TgfReader::default())
}

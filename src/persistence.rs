// File: src/persistence.rs
use crate::config::{AssetConfig, DatConfig};
use crate::core::embedding::EmbeddingStore;
use crate::core::engine::Engine;
use crate::core::lexicon::Lexicon;
use crate::error::{DatError, Result};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fs::{self, File};
use std::hash::{Hash, Hasher};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Identifies the exact `words.json` / `forms.json` bytes a snapshot was
/// built from.
///
/// The digest is only compared against digests from the same binary; a
/// toolchain that hashes differently just forces one rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SourceFingerprint {
    words_len: u64,
    forms_len: u64,
    digest: u64,
}

impl SourceFingerprint {
    pub fn of(words: &[u8], forms: &[u8]) -> Self {
        let mut hasher = DefaultHasher::new();
        words.hash(&mut hasher);
        forms.hash(&mut hasher);
        Self {
            words_len: words.len() as u64,
            forms_len: forms.len() as u64,
            digest: hasher.finish(),
        }
    }
}

/// The serializable form of a lexicon. Loading it goes back through
/// `Lexicon::load`, so a snapshot is held to the same invariants as JSON.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct LexiconSnapshot {
    source: SourceFingerprint,
    lemmas: Vec<String>,
    forms: HashMap<String, String>,
}

/// Writes into a temp file beside `path`, then renames it over `path`.
fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&NamedTempFile>) -> Result<()>,
{
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        write(&mut writer)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn parse_lexicon_json(words: &[u8], forms: &[u8]) -> Result<Lexicon> {
    let lemmas: Vec<String> = serde_json::from_slice(words)?;
    let forms: HashMap<String, String> = serde_json::from_slice(forms)?;
    info!(lemmas = lemmas.len(), forms = forms.len(), "dictionary loaded");
    Lexicon::load(lemmas, forms)
}

/// Reads `words.json` (array of lemmas) and `forms.json` (form -> lemma).
pub fn load_lexicon_json(words: &Path, forms: &Path) -> Result<Lexicon> {
    parse_lexicon_json(&fs::read(words)?, &fs::read(forms)?)
}

pub fn save_lexicon_snapshot(lexicon: &Lexicon, source: SourceFingerprint, path: &Path) -> Result<()> {
    let state = LexiconSnapshot {
        source,
        lemmas: lexicon.lemmas().to_vec(),
        forms: lexicon
            .forms()
            .map(|(form, lemma)| (form.to_string(), lemma.to_string()))
            .collect(),
    };
    write_atomically(path, |writer| {
        bincode::serialize_into(writer, &state)?;
        Ok(())
    })
}

/// Fails with `StaleSnapshot` unless the snapshot was built from `source`.
pub fn load_lexicon_snapshot(path: &Path, source: SourceFingerprint) -> Result<Lexicon> {
    let reader = BufReader::new(File::open(path)?);
    let state: LexiconSnapshot = bincode::deserialize_from(reader)?;
    if state.source != source {
        return Err(DatError::StaleSnapshot { path: path.to_path_buf() });
    }
    Lexicon::load(state.lemmas, state.forms)
}

pub fn load_matrix(path: &Path) -> Result<EmbeddingStore> {
    EmbeddingStore::load(fs::read(path)?)
}

pub fn save_matrix(store: &EmbeddingStore, path: &Path) -> Result<()> {
    write_atomically(path, |writer| {
        writer.write_all(store.as_bytes())?;
        Ok(())
    })
}

/// Prefers the snapshot when one is configured and matches the JSON on
/// disk; otherwise parses JSON and refreshes the snapshot.
fn load_lexicon(assets: &AssetConfig) -> Result<Lexicon> {
    let words = fs::read(&assets.words)?;
    let forms = fs::read(&assets.forms)?;
    let Some(snapshot) = assets.snapshot.as_deref() else {
        return parse_lexicon_json(&words, &forms);
    };

    let source = SourceFingerprint::of(&words, &forms);
    if snapshot.exists() {
        match load_lexicon_snapshot(snapshot, source) {
            Ok(lexicon) => {
                info!(path = %snapshot.display(), lemmas = lexicon.len(), "dictionary snapshot loaded");
                return Ok(lexicon);
            }
            Err(DatError::StaleSnapshot { .. }) => {
                info!(path = %snapshot.display(), "dictionary changed since snapshot, rebuilding")
            }
            Err(e) => warn!(path = %snapshot.display(), error = %e, "snapshot unreadable, falling back to JSON"),
        }
    }
    let lexicon = parse_lexicon_json(&words, &forms)?;
    if let Err(e) = save_lexicon_snapshot(&lexicon, source, snapshot) {
        warn!(path = %snapshot.display(), error = %e, "could not write dictionary snapshot");
    }
    Ok(lexicon)
}

/// Loads every asset named in `config` and assembles the engine.
pub fn load_engine(config: &DatConfig) -> Result<Engine> {
    let lexicon = load_lexicon(&config.assets)?;
    let store = load_matrix(&config.assets.matrix)?;
    Engine::from_parts(lexicon, store, config.scoring.scorer()?)
}

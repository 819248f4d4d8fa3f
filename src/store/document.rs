//! Document backend: one JSON document per user, `{"records": [...]}`.

use super::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::record::TimeRecord;
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Entries are kept as raw values so one bad entry does not sink the document.
#[derive(Deserialize)]
struct UserDocumentIn {
    #[serde(default)]
    records: Vec<Value>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum EntryOut<'a> {
    Record(&'a TimeRecord),
    Kept(&'a Value),
}

#[derive(Serialize)]
struct UserDocumentOut<'a> {
    records: Vec<EntryOut<'a>>,
}

/// One user's document as found on disk.
enum Document {
    /// `kept` holds the entries that did not decode (or name another user),
    /// as parsed, so a rewrite carries them along.
    Read {
        records: Vec<TimeRecord>,
        kept: Vec<Value>,
        problems: Vec<String>,
    },
    /// The file is not a `{"records": [...]}` document.
    Unreadable(String),
}

impl Document {
    fn empty() -> Self {
        Document::Read {
            records: Vec::new(),
            kept: Vec::new(),
            problems: Vec::new(),
        }
    }
}

pub struct DocumentStore {
    dir: PathBuf,
}

impl DocumentStore {
    pub fn open(dir: &Path) -> AppResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn document_path(&self, user: &str) -> AppResult<PathBuf> {
        if user.is_empty() || user.contains(['/', '\\']) || user.starts_with('.') {
            return Err(AppError::Store(format!(
                "'{user}' cannot be used as a document name"
            )));
        }
        Ok(self.dir.join(format!("{user}.json")))
    }

    /// Users that currently have a document, sorted.
    pub fn document_ids(&self) -> AppResult<Vec<String>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                let id = stem.to_string_lossy().to_string();
                if !id.starts_with('.') {
                    ids.push(id);
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn read_document(&self, id: &str) -> AppResult<Document> {
        let path = self.document_path(id)?;
        if !path.exists() {
            return Ok(Document::empty());
        }
        let content = fs::read_to_string(&path)?;

        let doc: UserDocumentIn = match serde_json::from_str(&content) {
            Ok(doc) => doc,
            Err(e) => return Ok(Document::Unreadable(e.to_string())),
        };

        let mut records = Vec::new();
        let mut kept = Vec::new();
        let mut problems = Vec::new();
        for (i, raw) in doc.records.into_iter().enumerate() {
            match decode_entry(id, &raw) {
                Ok(rec) => records.push(rec),
                Err(reason) => {
                    problems.push(format!("record {} in document '{}' ({})", i + 1, id, reason));
                    kept.push(raw);
                }
            }
        }

        Ok(Document::Read {
            records,
            kept,
            problems,
        })
    }

    /// Write the whole array, via a temp file so readers never see half a document.
    fn write_document(&self, user: &str, records: &[TimeRecord], kept: &[Value]) -> AppResult<()> {
        let path = self.document_path(user)?;
        let tmp = path.with_extension("json.tmp");

        let entries = records
            .iter()
            .map(EntryOut::Record)
            .chain(kept.iter().map(EntryOut::Kept))
            .collect();
        let json = serde_json::to_string_pretty(&UserDocumentOut { records: entries })?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn unreadable(user: &str, reason: &str) -> AppError {
    AppError::Store(format!(
        "document for '{user}' cannot be read ({reason}); fix or move it before saving"
    ))
}

/// Decode one entry of `id`'s document. Entries may omit the user; the
/// document id names it. An entry naming someone else is not used.
fn decode_entry(id: &str, raw: &Value) -> Result<TimeRecord, String> {
    let mut entry = raw.clone();
    if let Value::Object(map) = &mut entry
        && !map.contains_key("User")
    {
        map.insert("User".into(), Value::String(id.to_string()));
    }

    let rec = serde_json::from_value::<TimeRecord>(entry).map_err(|e| e.to_string())?;
    if rec.user != id {
        return Err(format!("entry belongs to '{}'", rec.user));
    }
    Ok(rec)
}

impl RecordStore for DocumentStore {
    fn load_all(&mut self) -> AppResult<Vec<TimeRecord>> {
        let mut all = Vec::new();
        for id in self.document_ids()? {
            match self.read_document(&id)? {
                Document::Read {
                    records, problems, ..
                } => {
                    for p in problems {
                        warning(format!("Skipping malformed {p}"));
                    }
                    all.extend(records);
                }
                Document::Unreadable(reason) => warning(format!(
                    "Skipping unreadable document {}.json: {}",
                    id, reason
                )),
            }
        }
        Ok(all)
    }

    fn save_user_slice(&mut self, user: &str, records: &[TimeRecord]) -> AppResult<()> {
        match self.read_document(user)? {
            Document::Read { kept, .. } => self.write_document(user, records, &kept),
            Document::Unreadable(reason) => Err(unreadable(user, &reason)),
        }
    }

    fn replace_all(&mut self, records: &[TimeRecord]) -> AppResult<()> {
        let mut by_user: BTreeMap<String, Vec<TimeRecord>> = BTreeMap::new();

        // Documents whose user has no records left are emptied, not deleted.
        for id in self.document_ids()? {
            by_user.entry(id).or_default();
        }
        for rec in records {
            by_user.entry(rec.user.clone()).or_default().push(rec.clone());
        }

        // Check every document before writing any of them.
        let mut writes = Vec::with_capacity(by_user.len());
        for (user, recs) in by_user {
            match self.read_document(&user)? {
                Document::Read { kept, .. } => writes.push((user, recs, kept)),
                // Nothing of it was loaded, so there is nothing to change.
                Document::Unreadable(_) if recs.is_empty() => {}
                Document::Unreadable(reason) => return Err(unreadable(&user, &reason)),
            }
        }

        for (user, recs, kept) in &writes {
            self.write_document(user, recs, kept)?;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("document store {}", self.dir.display())
    }
}

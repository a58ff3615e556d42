//! JSONL file writer for debate events.
//!
//! Every [`DebateEvent`] becomes one line: the payload's fields plus `type`
//! and an RFC3339 `timestamp`. Runs append to the same file.

use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tribunal_application::{DebateEvent, DebateLogger};

pub struct JsonlDebateLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlDebateLogger {
    /// Open `path` for appending, creating parent directories as needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn record(event: DebateEvent) -> Value {
    let mut fields = match event.payload {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("data".to_string(), other);
            map
        }
    };
    fields.insert("type".to_string(), Value::from(event.event_type));
    fields.insert(
        "timestamp".to_string(),
        Value::from(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
    );
    Value::Object(fields)
}

impl DebateLogger for JsonlDebateLogger {
    fn log(&self, event: DebateEvent) {
        let Ok(line) = serde_json::to_string(&record(event)) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            // each line is flushed so a crashed run still leaves a readable log
            let _ = writeln!(writer, "{}", line).and_then(|_| writer.flush());
        }
    }
}

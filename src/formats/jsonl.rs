//! JSONL sink for generated events.
//!
//! Writes one JSON object per line to a file opened in truncate mode.

use crate::core::event::Event;
use crate::core::traits::EventWriter;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Newline-delimited JSON writer over a buffered file.
pub struct JsonlWriter<W: Write> {
    inner: BufWriter<W>,
}

impl JsonlWriter<File> {
    /// Opens `path` for writing, truncating any previous contents.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> JsonlWriter<W> {
    /// Wraps an arbitrary sink; used by tests with in-memory buffers.
    pub fn from_writer(writer: W) -> Self {
        Self {
            inner: BufWriter::new(writer),
        }
    }

    /// Consumes the writer, returning the underlying sink after a flush.
    pub fn into_inner(self) -> io::Result<W> {
        self.inner
            .into_inner()
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))
    }
}

impl<W: Write> EventWriter for JsonlWriter<W> {
    fn write_event(&mut self, event: &Event) -> io::Result<u64> {
        let mut record = serde_json::to_vec(event)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        record.push(b'\n');
        self.inner.write_all(&record)?;
        Ok(record.len() as u64)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    fn close(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::testing::fixed_builder;
    use crate::core::event::Action;
    use serde_json::Map;

    fn lines_of(buffer: &[u8]) -> Vec<&str> {
        std::str::from_utf8(buffer)
            .expect("utf8 output")
            .lines()
            .collect()
    }

    #[test]
    fn one_line_per_event_in_call_order() {
        let mut builder = fixed_builder();
        let mut writer = JsonlWriter::from_writer(Vec::new());
        for user in ["alice", "bob", "charlie"] {
            let event = builder.build(user, "192.168.1.10", Action::LoginSuccess, "auth", Map::new());
            writer.write_event(&event).expect("write event");
        }
        writer.close().expect("close");

        let buffer = writer.into_inner().expect("into inner");
        let lines = lines_of(&buffer);
        assert_eq!(lines.len(), 3);
        let users: Vec<String> = lines
            .iter()
            .map(|line| {
                let event: Event = serde_json::from_str(line).expect("well-formed line");
                event.user
            })
            .collect();
        assert_eq!(users, ["alice", "bob", "charlie"]);
    }

    #[test]
    fn write_event_reports_bytes_written() {
        let mut builder = fixed_builder();
        let mut writer = JsonlWriter::from_writer(Vec::new());
        let event = builder.build("alice", "192.168.1.10", Action::LoginSuccess, "auth", Map::new());
        let written = writer.write_event(&event).expect("write event");
        writer.close().expect("close");

        let buffer = writer.into_inner().expect("into inner");
        assert_eq!(written, buffer.len() as u64);
        assert_eq!(buffer.last(), Some(&b'\n'));
    }

    #[test]
    fn create_truncates_previous_contents() {
        let dir = std::env::temp_dir().join("secgen-jsonl-test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("events.jsonl");
        std::fs::write(&path, "stale line\nstale line\n").expect("seed file");

        let mut builder = fixed_builder();
        let mut writer = JsonlWriter::create(&path).expect("create writer");
        let event = builder.build("alice", "192.168.1.10", Action::LoginSuccess, "auth", Map::new());
        writer.write_event(&event).expect("write event");
        writer.close().expect("close");
        drop(writer);

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents.lines().count(), 1);
        assert!(!contents.contains("stale"));
        std::fs::remove_file(&path).ok();
    }
}

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use anyhow::Context as _;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::foundation::config::BIN_RECORD_LEN;
use crate::foundation::core::EventDataPoint;
use crate::foundation::error::{PerspectiveError, PerspectiveResult};

/// One persisted event, as written by the CSV converter and read back for rendering.
///
/// On disk: `id:i32, event_type:u8, start:i32, run:i32, status:i8, region:u8, progress:u8`,
/// little-endian, no padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventData {
    /// Event identifier.
    pub id: i32,
    /// Event type code.
    pub event_type: u8,
    /// Start time, in seconds since the Unix epoch.
    pub start: i32,
    /// Run time, in seconds.
    pub run: i32,
    /// `0` success, `> 0` failure class, `< 0` still in progress.
    pub status: i8,
    /// Region identifier.
    pub region: u8,
    /// Progress percentage.
    pub progress: u8,
}

impl EventData {
    /// Whether the event has finished (succeeded or failed); in-progress events have no final run time.
    pub fn is_finished(self) -> bool {
        self.status >= 0
    }

    /// The renderer-facing subset of this record.
    pub fn point(self) -> EventDataPoint {
        EventDataPoint::new(self.start, self.run, i16::from(self.status))
    }

    /// Append this record in binary log format.
    pub fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_i32::<LittleEndian>(self.id)?;
        w.write_u8(self.event_type)?;
        w.write_i32::<LittleEndian>(self.start)?;
        w.write_i32::<LittleEndian>(self.run)?;
        w.write_i8(self.status)?;
        w.write_u8(self.region)?;
        w.write_u8(self.progress)?;
        Ok(())
    }

    /// Read the next record. A clean end of input at a record boundary yields `None`; a partial
    /// record is a decode error.
    pub fn read_from<R: Read>(r: &mut R) -> PerspectiveResult<Option<Self>> {
        let mut buf = [0u8; BIN_RECORD_LEN];
        let mut filled = 0usize;
        while filled < buf.len() {
            match r.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(anyhow::Error::new(e).context("read binary log").into()),
            }
        }
        if filled == 0 {
            return Ok(None);
        }
        if filled < buf.len() {
            return Err(PerspectiveError::decode(format!(
                "truncated record: got {filled} of {BIN_RECORD_LEN} bytes"
            )));
        }
        let record = Self::decode(&buf).context("decode binary log record")?;
        Ok(Some(record))
    }

    fn decode(buf: &[u8; BIN_RECORD_LEN]) -> std::io::Result<Self> {
        let mut cur = &buf[..];
        Ok(Self {
            id: cur.read_i32::<LittleEndian>()?,
            event_type: cur.read_u8()?,
            start: cur.read_i32::<LittleEndian>()?,
            run: cur.read_i32::<LittleEndian>()?,
            status: cur.read_i8()?,
            region: cur.read_u8()?,
            progress: cur.read_u8()?,
        })
    }
}

/// Lazy, finite sequence of records decoded from a binary log.
///
/// Iteration stops after the first error. Re-opening the file restarts from the beginning.
pub struct BinLogReader<R> {
    inner: R,
    offset: u64,
    done: bool,
}

impl BinLogReader<BufReader<File>> {
    /// Open a binary log file for reading.
    pub fn open(path: impl AsRef<Path>) -> PerspectiveResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open binary log '{}'", path.display()))?;
        Ok(Self::new(BufReader::new(f)))
    }
}

impl<R: Read> BinLogReader<R> {
    /// Decode records from an arbitrary reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            offset: 0,
            done: false,
        }
    }

    /// Byte offset of the next record.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl<R: Read> Iterator for BinLogReader<R> {
    type Item = PerspectiveResult<EventData>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match EventData::read_from(&mut self.inner) {
            Ok(Some(e)) => {
                self.offset += BIN_RECORD_LEN as u64;
                Some(Ok(e))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(PerspectiveError::Decode(msg)) => {
                self.done = true;
                Some(Err(PerspectiveError::decode(format!(
                    "{msg} at byte offset {}",
                    self.offset
                ))))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Buffered writer for binary logs.
pub struct BinLogWriter<W: Write> {
    inner: BufWriter<W>,
    written: u64,
}

impl BinLogWriter<File> {
    /// Create (or truncate) a binary log file.
    pub fn create(path: impl AsRef<Path>) -> PerspectiveResult<Self> {
        let path = path.as_ref();
        let f = File::create(path)
            .with_context(|| format!("create binary log '{}'", path.display()))?;
        Ok(Self::new(f))
    }
}

impl<W: Write> BinLogWriter<W> {
    /// Wrap an arbitrary writer.
    pub fn new(inner: W) -> Self {
        Self {
            inner: BufWriter::new(inner),
            written: 0,
        }
    }

    /// Append one record.
    pub fn write(&mut self, e: &EventData) -> PerspectiveResult<()> {
        e.write_to(&mut self.inner)
            .context("write event data to binary log")?;
        self.written += 1;
        Ok(())
    }

    /// Flush buffered records and return the inner writer with the record count.
    pub fn finish(self) -> PerspectiveResult<(W, u64)> {
        let written = self.written;
        let inner = self
            .inner
            .into_inner()
            .map_err(|e| anyhow::Error::new(e.into_error()).context("flush binary log"))?;
        Ok((inner, written))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/feeds/binlog.rs"]
mod tests;

//! Fixed-width big-endian primitives
//!
//! All integers are 32-bit signed and all floats are IEEE-754 binary64, both
//! big-endian. The reader exposes the stream position as an explicit
//! [`RollbackPoint`] so speculative reads can be undone with a seek.

use std::io::{self, Read, Seek, SeekFrom, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

/// Stream position a speculative read can rewind to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RollbackPoint(u64);

impl RollbackPoint {
    /// Byte offset from the start of the stream
    pub fn offset(self) -> u64 {
        self.0
    }
}

/// Big-endian scalar reader over a seekable stream
pub struct FixedWidthReader<R> {
    inner: R,
}

impl<R: Read + Seek> FixedWidthReader<R> {
    /// Wrap a seekable stream
    pub fn new(inner: R) -> Self {
        FixedWidthReader { inner }
    }

    /// Read one `i32`, failing on a short read
    pub fn read_i32(&mut self) -> io::Result<i32> {
        self.inner.read_i32::<BigEndian>()
    }

    /// Read one `f64`, failing on a short read
    pub fn read_f64(&mut self) -> io::Result<f64> {
        self.inner.read_f64::<BigEndian>()
    }

    /// Read one `i32`, returning `None` if the stream ends first
    ///
    /// A partial value still advances the stream; callers that need to retry
    /// must rewind to a checkpoint.
    pub fn try_read_i32(&mut self) -> io::Result<Option<i32>> {
        optional(self.inner.read_i32::<BigEndian>())
    }

    /// Read one `f64`, returning `None` if the stream ends first
    pub fn try_read_f64(&mut self) -> io::Result<Option<f64>> {
        optional(self.inner.read_f64::<BigEndian>())
    }

    /// Record the current position
    pub fn checkpoint(&mut self) -> io::Result<RollbackPoint> {
        self.inner.stream_position().map(RollbackPoint)
    }

    /// Return to a recorded position
    pub fn rewind(&mut self, point: RollbackPoint) -> io::Result<()> {
        self.inner.seek(SeekFrom::Start(point.0)).map(|_| ())
    }

    /// Current byte offset
    pub fn position(&mut self) -> io::Result<u64> {
        self.inner.stream_position()
    }

    /// Underlying stream, for handing to a self-delimiting parser
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwrap the underlying stream
    pub fn into_inner(self) -> R {
        self.inner
    }
}

fn optional<T>(result: io::Result<T>) -> io::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e),
    }
}

/// Big-endian scalar writer
pub struct FixedWidthWriter<W> {
    inner: W,
}

impl<W: Write> FixedWidthWriter<W> {
    /// Wrap a sink
    pub fn new(inner: W) -> Self {
        FixedWidthWriter { inner }
    }

    /// Write one `i32`
    pub fn write_i32(&mut self, value: i32) -> io::Result<()> {
        self.inner.write_i32::<BigEndian>(value)
    }

    /// Write one `f64`
    pub fn write_f64(&mut self, value: f64) -> io::Result<()> {
        self.inner.write_f64::<BigEndian>(value)
    }

    /// Underlying sink, for handing to a collaborator writer
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap the underlying sink
    pub fn into_inner(self) -> W {
        self.inner
    }
}

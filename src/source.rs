//! Read-only access to the bytes being displayed.

use std::sync::Arc;

/// A byte buffer of known length.
///
/// Out-of-range reads return `None` rather than panicking; the view only
/// ever asks for the bytes of visible rows.
pub trait ByteSource {
    /// Number of bytes.
    fn size(&self) -> i64;

    /// Byte at `index`, `None` outside `0..size()`.
    fn byte_at(&self, index: i64) -> Option<u8>;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Append up to `len` bytes starting at `start` to `out`, stopping at the
    /// end of the data. Returns the number of bytes appended.
    fn read_into(&self, start: i64, len: i64, out: &mut Vec<u8>) -> usize {
        if start < 0 || len <= 0 {
            return 0;
        }
        let end = start.saturating_add(len).min(self.size());
        let before = out.len();
        for index in start..end {
            match self.byte_at(index) {
                Some(b) => out.push(b),
                None => break,
            }
        }
        out.len() - before
    }
}

fn slice_byte(bytes: &[u8], index: i64) -> Option<u8> {
    usize::try_from(index)
        .ok()
        .and_then(|i| bytes.get(i))
        .copied()
}

fn slice_read(bytes: &[u8], start: i64, len: i64, out: &mut Vec<u8>) -> usize {
    let (Ok(start), Ok(len)) = (usize::try_from(start), usize::try_from(len)) else {
        return 0;
    };
    if start >= bytes.len() {
        return 0;
    }
    let end = start.saturating_add(len).min(bytes.len());
    out.extend_from_slice(&bytes[start..end]);
    end - start
}

impl ByteSource for [u8] {
    fn size(&self) -> i64 {
        self.len() as i64
    }

    fn byte_at(&self, index: i64) -> Option<u8> {
        slice_byte(self, index)
    }

    fn read_into(&self, start: i64, len: i64, out: &mut Vec<u8>) -> usize {
        slice_read(self, start, len, out)
    }
}

impl ByteSource for Vec<u8> {
    fn size(&self) -> i64 {
        self.len() as i64
    }

    fn byte_at(&self, index: i64) -> Option<u8> {
        slice_byte(self, index)
    }

    fn read_into(&self, start: i64, len: i64, out: &mut Vec<u8>) -> usize {
        slice_read(self, start, len, out)
    }
}

impl ByteSource for Arc<[u8]> {
    fn size(&self) -> i64 {
        self.len() as i64
    }

    fn byte_at(&self, index: i64) -> Option<u8> {
        slice_byte(self, index)
    }

    fn read_into(&self, start: i64, len: i64, out: &mut Vec<u8>) -> usize {
        slice_read(self, start, len, out)
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn size(&self) -> i64 {
        (**self).size()
    }

    fn byte_at(&self, index: i64) -> Option<u8> {
        (**self).byte_at(index)
    }

    fn read_into(&self, start: i64, len: i64, out: &mut Vec<u8>) -> usize {
        (**self).read_into(start, len, out)
    }
}

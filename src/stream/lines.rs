//! Iterator baris di atas buffer stream

/// Line terminator
pub const NEWLINE: u8 = b'\n';

/// Offset setelah `\n` berikutnya mulai dari `start`, atau akhir buffer
#[inline(always)]
pub(crate) fn line_end(buf: &[u8], start: usize) -> usize {
    buf[start..]
        .iter()
        .position(|&b| b == NEWLINE)
        .map_or(buf.len(), |i| start + i + 1)
}

/// Iterator yang mengembalikan baris (termasuk `\n`) dan menggeser cursor stream
pub struct Lines<'a> {
    buf: &'a [u8],
    pos: &'a mut usize,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(buf: &'a [u8], pos: &'a mut usize) -> Self {
        Self { buf, pos }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let buf = self.buf;
        let start = *self.pos;
        if start >= buf.len() {
            return None;
        }

        let end = line_end(buf, start);
        *self.pos = end;
        Some(&buf[start..end])
    }
}

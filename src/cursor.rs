use crate::core::StrPack;
use crate::scan;

/// A stateful forward/backward navigator over the items of a
/// [`StrPack`], tracking the byte offsets of the current item.
///
/// The cursor holds a shared borrow of the pack for its whole
/// lifetime, so the buffer cannot be mutated while navigation is in
/// progress; the offsets it tracks stay valid by construction.
///
/// Obtained from [`StrPack::cursor`] or [`StrPack::cursor_at`].
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    pack: &'a StrPack,
    start: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(pack: &'a StrPack, start: usize, end: usize) -> Self {
        Self { pack, start, end }
    }

    /// The item the cursor is positioned on.
    ///
    /// On an empty pack this is the empty string.
    #[must_use]
    pub fn current(&self) -> &'a str {
        &self.pack.as_str()[self.start..self.end]
    }

    /// Moves to the following item and returns it, or `None` when the
    /// cursor already sits on the last item.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&'a str> {
        let buf = self.pack.as_str();
        let delim = self.pack.delimiter();
        if self.end >= buf.len() {
            return None;
        }
        self.start = self.end + delim.len();
        self.end = scan::find_from(buf, delim, self.start).unwrap_or(buf.len());
        Some(&buf[self.start..self.end])
    }

    /// Moves to the preceding item and returns it, or `None` when the
    /// cursor already sits on the first item.
    pub fn previous(&mut self) -> Option<&'a str> {
        let buf = self.pack.as_str();
        let delim = self.pack.delimiter();
        if self.start == 0 {
            return None;
        }
        self.end = self.start - delim.len();
        self.start = if self.end == 0 {
            0
        } else {
            match scan::rfind_upto(buf, delim, self.end - 1) {
                Some(i) => i + delim.len(),
                None => 0,
            }
        };
        Some(&buf[self.start..self.end])
    }
}

use crate::core::StrPack;
use crate::scan;

/// Forward iterator over items in a [`StrPack`].
///
/// Walks the buffer locating the next delimiter from the current
/// offset and emitting the slice up to it. Each iterator owns its own
/// offset state, independent of any other iteration over the same
/// pack.
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct StrPackIter<'a> {
    buf: &'a str,
    delim: &'a str,
    pos: usize,
    remaining: usize,
}

impl<'a> StrPackIter<'a> {
    pub(crate) fn new(pack: &'a StrPack) -> Self {
        Self {
            buf: pack.as_str(),
            delim: pack.delimiter(),
            pos: 0,
            remaining: pack.len(),
        }
    }
}

impl<'a> Iterator for StrPackIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        match scan::find_from(self.buf, self.delim, self.pos) {
            Some(i) => {
                let item = &self.buf[self.pos..i];
                self.pos = i + self.delim.len();
                Some(item)
            }
            None => {
                let item = &self.buf[self.pos..];
                self.pos = self.buf.len();
                Some(item)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for StrPackIter<'_> {}

impl<'a> IntoIterator for &'a StrPack {
    type Item = &'a str;
    type IntoIter = StrPackIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        StrPackIter::new(self)
    }
}

/// Reverse iterator over items in a [`StrPack`], walking from the
/// buffer end back to the start by locating each previous delimiter.
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct StrPackRevIter<'a> {
    buf: &'a str,
    delim: &'a str,
    end: usize,
    remaining: usize,
}

impl<'a> StrPackRevIter<'a> {
    pub(crate) fn new(pack: &'a StrPack) -> Self {
        Self {
            buf: pack.as_str(),
            delim: pack.delimiter(),
            end: pack.byte_len(),
            remaining: pack.len(),
        }
    }
}

impl<'a> Iterator for StrPackRevIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // Last delimiter lying wholly before the current item start.
        let found = if self.end >= self.delim.len() {
            scan::rfind_upto(self.buf, self.delim, self.end - self.delim.len())
        } else {
            None
        };
        match found {
            Some(i) => {
                let item = &self.buf[i + self.delim.len()..self.end];
                self.end = i;
                Some(item)
            }
            None => {
                let item = &self.buf[..self.end];
                self.end = 0;
                Some(item)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for StrPackRevIter<'_> {}

/// Iterator pairing each item of a [`StrPack`] with itself.
///
/// The structure has no positional index, so entries are
/// `(item, item)` rather than `(index, item)`.
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct StrPackEntryIter<'a> {
    iter: StrPackIter<'a>,
}

impl<'a> StrPackEntryIter<'a> {
    pub(crate) fn new(pack: &'a StrPack) -> Self {
        Self {
            iter: StrPackIter::new(pack),
        }
    }
}

impl<'a> Iterator for StrPackEntryIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        Some((item, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for StrPackEntryIter<'_> {}

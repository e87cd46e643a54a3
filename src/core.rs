use std::fmt;

use rand::Rng;
use regex::Regex;

use crate::cursor::Cursor;
use crate::error::StrPackError;
use crate::iter::{StrPackEntryIter, StrPackIter, StrPackRevIter};
use crate::scan;

/// Delimiter used when none is specified: a single EOT control
/// character, chosen because it does not occur in ordinary text.
pub const DEFAULT_DELIMITER: &str = "\u{4}";

/// An ordered collection of strings packed into one contiguous buffer,
/// adjacent items separated by exactly one occurrence of a delimiter
/// substring.
///
/// Item boundaries are re-derived from delimiter positions on every
/// operation; no per-item index is kept. This trades O(n) boundary
/// scans for O(1) amortized append and far lower per-item overhead
/// than a collection of individually allocated strings, and keeps all
/// item bytes contiguous for cache-friendly substring search.
///
/// # Caller contract
///
/// Stored items must not contain the delimiter substring. Boundary
/// scanning cannot distinguish a delimiter inside item content from a
/// delimiter acting as a separator, so an item that violates the
/// contract silently splits into several items. Nothing is escaped or
/// rejected; pick a delimiter that cannot occur in your data (the
/// default is a control character for exactly this reason).
///
/// # Invariants
///
/// - The buffer never starts or ends with the delimiter.
/// - The buffer never contains two consecutive delimiter occurrences;
///   construction and [`concat`](Self::concat) collapse them,
///   discarding the empty items in between.
/// - [`len`](Self::len) always equals the number of non-overlapping
///   delimiter occurrences plus one, or zero for an empty buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrPack {
    buf: String,
    delim: String,
    count: usize,
}

/// Input shape accepted by [`StrPack::from_input`] and
/// [`StrPack::concat`].
///
/// The caller names the shape; the pack never inspects its argument at
/// run time to guess one.
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    /// A string already joined with the destination delimiter.
    Joined(&'a str),
    /// An ordered list of items.
    Items(&'a [&'a str]),
    /// Another pack, possibly using a different delimiter.
    Pack(&'a StrPack),
}

/// Structural match position found by `has`/`remove`: the item's exact
/// content anchored by delimiters or buffer edges on both sides.
enum Structural {
    Prefix,
    Suffix,
    /// Byte offset of the delimiter leading the matched item.
    Interior(usize),
}

fn require_delimiter(delimiter: &str) -> Result<(), StrPackError> {
    if delimiter.is_empty() {
        return Err(StrPackError::EmptyDelimiter);
    }
    Ok(())
}

fn require_item(item: &str, operation: &'static str) -> Result<(), StrPackError> {
    if item.is_empty() {
        return Err(StrPackError::EmptyItem { operation });
    }
    Ok(())
}

impl StrPack {
    /// Creates an empty pack with the given delimiter.
    ///
    /// # Errors
    ///
    /// Returns `StrPackError::EmptyDelimiter` if `delimiter` is empty.
    pub fn new(delimiter: &str) -> Result<Self, StrPackError> {
        require_delimiter(delimiter)?;
        Ok(Self {
            buf: String::new(),
            delim: delimiter.to_string(),
            count: 0,
        })
    }

    /// Creates a pack from a string already joined with `delimiter`.
    ///
    /// The input is normalized first: runs of consecutive delimiters
    /// collapse to one and a single leading or trailing delimiter is
    /// stripped. The item count is then computed by scanning.
    ///
    /// # Errors
    ///
    /// Returns `StrPackError::EmptyDelimiter` if `delimiter` is empty.
    pub fn from_joined(joined: &str, delimiter: &str) -> Result<Self, StrPackError> {
        require_delimiter(delimiter)?;
        let buf = scan::normalize(joined, delimiter).into_owned();
        let count = scan::count_items(&buf, delimiter);
        Ok(Self {
            buf,
            delim: delimiter.to_string(),
            count,
        })
    }

    /// Creates a pack from any finite iterable of strings.
    ///
    /// Items are joined with `delimiter` and the result normalized, so
    /// empty items are discarded and an item containing the delimiter
    /// splits (see the caller contract on [`StrPack`]).
    ///
    /// # Errors
    ///
    /// Returns `StrPackError::EmptyDelimiter` if `delimiter` is empty.
    pub fn from_items<I, S>(items: I, delimiter: &str) -> Result<Self, StrPackError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        require_delimiter(delimiter)?;
        let mut joined = String::new();
        let mut first = true;
        for item in items {
            if !first {
                joined.push_str(delimiter);
            }
            joined.push_str(item.as_ref());
            first = false;
        }
        Self::from_joined(&joined, delimiter)
    }

    /// Creates a pack with the contents of another, rewriting every
    /// occurrence of the other's delimiter to `delimiter`.
    ///
    /// The rewrite is a naive substring replacement; if item content
    /// contains either delimiter the outcome is ambiguous (caller
    /// contract).
    ///
    /// # Errors
    ///
    /// Returns `StrPackError::EmptyDelimiter` if `delimiter` is empty.
    pub fn from_pack(other: &StrPack, delimiter: &str) -> Result<Self, StrPackError> {
        require_delimiter(delimiter)?;
        let buf = if other.delim == delimiter {
            other.buf.clone()
        } else {
            other.buf.replace(other.delim.as_str(), delimiter)
        };
        Ok(Self {
            buf,
            delim: delimiter.to_string(),
            count: other.count,
        })
    }

    /// Creates a pack from a tagged [`Input`] shape.
    ///
    /// # Errors
    ///
    /// Returns `StrPackError::EmptyDelimiter` if `delimiter` is empty.
    pub fn from_input(input: Input<'_>, delimiter: &str) -> Result<Self, StrPackError> {
        match input {
            Input::Joined(joined) => Self::from_joined(joined, delimiter),
            Input::Items(items) => Self::from_items(items.iter().copied(), delimiter),
            Input::Pack(other) => Self::from_pack(other, delimiter),
        }
    }

    /// The delimiter separating adjacent items.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delim
    }

    /// Replaces the delimiter, rewriting every occurrence in the
    /// buffer to the new value.
    ///
    /// # Errors
    ///
    /// Returns `StrPackError::EmptyDelimiter` if `delimiter` is empty.
    pub fn set_delimiter(&mut self, delimiter: &str) -> Result<(), StrPackError> {
        require_delimiter(delimiter)?;
        if delimiter != self.delim {
            self.buf = self.buf.replace(self.delim.as_str(), delimiter);
            self.delim = delimiter.to_string();
        }
        Ok(())
    }

    /// Number of items in the pack.
    ///
    /// Not to be confused with [`byte_len`](Self::byte_len), the
    /// packed buffer's length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Length of the packed buffer in bytes, delimiters included.
    ///
    /// This is the value the structure compares by numerically (the
    /// original exposed it as `valueOf`); it is NOT the item count,
    /// which [`len`](Self::len) reports.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.buf.len()
    }

    /// The raw packed buffer, embedded delimiters and all.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// First item, or `None` if the pack is empty.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        if self.count == 0 {
            return None;
        }
        Some(match scan::find_from(&self.buf, &self.delim, 0) {
            Some(i) => &self.buf[..i],
            None => &self.buf,
        })
    }

    /// Last item, or `None` if the pack is empty.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        if self.count == 0 {
            return None;
        }
        Some(match scan::rfind_upto(&self.buf, &self.delim, self.buf.len()) {
            Some(i) => &self.buf[i + self.delim.len()..],
            None => &self.buf,
        })
    }

    /// A random item, or `None` if the pack is empty.
    ///
    /// Picks a uniformly random byte offset and expands outward to the
    /// enclosing item, so selection probability is proportional to an
    /// item's length plus the delimiter length, NOT uniform per item.
    /// This bias is an accepted property of the offset-based design;
    /// per-item uniformity would need an index of item start offsets.
    #[must_use]
    pub fn random(&self) -> Option<&str> {
        self.random_with(&mut rand::thread_rng())
    }

    /// [`random`](Self::random) with a caller-provided generator, for
    /// deterministic seeding.
    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.count == 0 {
            return None;
        }
        if self.count == 1 {
            return Some(&self.buf);
        }
        let pos = rng.gen_range(0..self.buf.len());
        let (start, end) = scan::item_bounds(&self.buf, &self.delim, pos);
        Some(&self.buf[start..end])
    }

    fn structural_find(&self, item: &str) -> Option<Structural> {
        let delim = self.delim.as_str();
        if self.buf.starts_with(item) && self.buf[item.len()..].starts_with(delim) {
            return Some(Structural::Prefix);
        }
        if self.buf.ends_with(item) && self.buf[..self.buf.len() - item.len()].ends_with(delim) {
            return Some(Structural::Suffix);
        }
        let padded = format!("{}{}{}", delim, item, delim);
        scan::find_from(&self.buf, &padded, 0).map(Structural::Interior)
    }

    /// Whether `item` is stored in the pack, as a structural match:
    /// the exact content anchored by delimiters or buffer edges on
    /// both sides.
    ///
    /// This is substring containment on the delimiter-padded pattern,
    /// not exact tokenization: when stored content itself contains the
    /// delimiter adjacent to real separators, false positives are
    /// possible (caller contract).
    ///
    /// # Errors
    ///
    /// Returns `StrPackError::EmptyItem` if `item` is empty.
    pub fn has(&self, item: &str) -> Result<bool, StrPackError> {
        require_item(item, "has")?;
        if self.count == 0 {
            return Ok(false);
        }
        if self.count == 1 {
            return Ok(self.buf == item);
        }
        Ok(self.structural_find(item).is_some())
    }

    /// Removes the first structural match of `item` and reports
    /// whether a removal occurred.
    ///
    /// # Errors
    ///
    /// Returns `StrPackError::EmptyItem` if `item` is empty.
    pub fn remove(&mut self, item: &str) -> Result<bool, StrPackError> {
        require_item(item, "remove")?;
        if self.count == 0 {
            return Ok(false);
        }
        if self.count == 1 {
            if self.buf == item {
                self.clear();
                return Ok(true);
            }
            return Ok(false);
        }
        match self.structural_find(item) {
            Some(Structural::Prefix) => {
                self.buf.drain(..item.len() + self.delim.len());
            }
            Some(Structural::Suffix) => {
                self.buf.truncate(self.buf.len() - item.len() - self.delim.len());
            }
            Some(Structural::Interior(at)) => {
                // Drop the leading delimiter and the item, keeping the
                // trailing delimiter as the joining one.
                self.buf.replace_range(at..at + self.delim.len() + item.len(), "");
            }
            None => return Ok(false),
        }
        self.count -= 1;
        Ok(true)
    }

    /// Appends an item, returning the new item count.
    ///
    /// # Errors
    ///
    /// Returns `StrPackError::EmptyItem` if `item` is empty.
    pub fn push(&mut self, item: &str) -> Result<usize, StrPackError> {
        require_item(item, "push")?;
        if !self.buf.is_empty() {
            self.buf.push_str(&self.delim);
        }
        self.buf.push_str(item);
        self.count += 1;
        Ok(self.count)
    }

    /// Alias for [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// Returns `StrPackError::EmptyItem` if `item` is empty.
    pub fn add(&mut self, item: &str) -> Result<usize, StrPackError> {
        self.push(item)
    }

    /// Prepends an item, returning the new item count.
    ///
    /// # Errors
    ///
    /// Returns `StrPackError::EmptyItem` if `item` is empty.
    pub fn unshift(&mut self, item: &str) -> Result<usize, StrPackError> {
        require_item(item, "unshift")?;
        if self.buf.is_empty() {
            self.buf.push_str(item);
        } else {
            self.buf.insert_str(0, &self.delim);
            self.buf.insert_str(0, item);
        }
        self.count += 1;
        Ok(self.count)
    }

    /// Removes and returns the trailing item.
    ///
    /// Returns `None` if the pack is empty.
    pub fn pop(&mut self) -> Option<String> {
        if self.count == 0 {
            return None;
        }
        if self.count == 1 {
            self.count = 0;
            return Some(std::mem::take(&mut self.buf));
        }
        let at = scan::rfind_upto(&self.buf, &self.delim, self.buf.len())?;
        let item = self.buf[at + self.delim.len()..].to_string();
        self.buf.truncate(at);
        self.count -= 1;
        Some(item)
    }

    /// Removes and returns the leading item.
    ///
    /// Returns `None` if the pack is empty.
    pub fn shift(&mut self) -> Option<String> {
        if self.count == 0 {
            return None;
        }
        if self.count == 1 {
            self.count = 0;
            return Some(std::mem::take(&mut self.buf));
        }
        let at = scan::find_from(&self.buf, &self.delim, 0)?;
        let item = self.buf[..at].to_string();
        self.buf.drain(..at + self.delim.len());
        self.count -= 1;
        Some(item)
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.count = 0;
    }

    /// The item enclosing the first raw occurrence of `query` anywhere
    /// in the buffer, partial matches inside an item included.
    ///
    /// Returns `None` if `query` never occurs.
    ///
    /// # Errors
    ///
    /// Returns `StrPackError::EmptyItem` if `query` is empty.
    pub fn find(&self, query: &str) -> Result<Option<&str>, StrPackError> {
        require_item(query, "find")?;
        if self.count == 0 {
            return Ok(None);
        }
        let Some(at) = scan::find_from(&self.buf, query, 0) else {
            return Ok(None);
        };
        let (start, end) = scan::item_bounds(&self.buf, &self.delim, at);
        Ok(Some(&self.buf[start..end]))
    }

    /// Every distinct item containing at least one occurrence of
    /// `query`, in buffer order.
    ///
    /// The search resumes past the end of each found item rather than
    /// past the match, so an item is never returned twice even when
    /// `query` occurs in it several times.
    ///
    /// # Errors
    ///
    /// Returns `StrPackError::EmptyItem` if `query` is empty.
    pub fn find_all(&self, query: &str) -> Result<Vec<&str>, StrPackError> {
        require_item(query, "find_all")?;
        let mut items = Vec::new();
        let mut from = 0;
        while let Some(at) = scan::find_from(&self.buf, query, from) {
            let (start, end) = scan::item_bounds(&self.buf, &self.delim, at);
            items.push(&self.buf[start..end]);
            if end == self.buf.len() {
                break;
            }
            from = end + self.delim.len();
        }
        Ok(items)
    }

    /// The item enclosing the first match of `pattern`, or `None` when
    /// nothing matches.
    ///
    /// `Regex::find` is stateless, so repeated calls are idempotent.
    /// A match of the empty string is treated as no match.
    #[must_use]
    pub fn match_first(&self, pattern: &Regex) -> Option<&str> {
        if self.count == 0 {
            return None;
        }
        let m = pattern.find(&self.buf)?;
        if m.is_empty() {
            return None;
        }
        let (start, end) = scan::item_bounds(&self.buf, &self.delim, m.start());
        Some(&self.buf[start..end])
    }

    /// Every distinct item containing a match of `pattern`, in buffer
    /// order, never duplicated.
    ///
    /// The scan position advances past the end of each found item, as
    /// in [`find_all`](Self::find_all). A match of the empty string
    /// terminates the scan.
    #[must_use]
    pub fn match_all(&self, pattern: &Regex) -> Vec<&str> {
        let mut items = Vec::new();
        if self.count == 0 {
            return items;
        }
        let mut from = 0;
        while let Some(m) = pattern.find_at(&self.buf, from) {
            if m.is_empty() {
                break;
            }
            let (start, end) = scan::item_bounds(&self.buf, &self.delim, m.start());
            items.push(&self.buf[start..end]);
            if end == self.buf.len() {
                break;
            }
            from = end + self.delim.len();
        }
        items
    }

    /// Appends the items of `input`, returning the new item count.
    ///
    /// Incoming data is normalized as in construction (delimiter runs
    /// collapsed, edge delimiters stripped) and a pack with a foreign
    /// delimiter is rewritten first; a single joining delimiter
    /// separates old and new contents.
    pub fn concat(&mut self, input: Input<'_>) -> usize {
        match input {
            Input::Pack(other) => {
                if other.count > 0 {
                    let incoming = if other.delim == self.delim {
                        other.buf.clone()
                    } else {
                        other.buf.replace(other.delim.as_str(), &self.delim)
                    };
                    self.append_run(&incoming, other.count);
                }
            }
            Input::Joined(joined) => {
                let clean = scan::normalize(joined, &self.delim);
                if !clean.is_empty() {
                    let added = scan::count_items(&clean, &self.delim);
                    self.append_run(&clean, added);
                }
            }
            Input::Items(items) => {
                let joined = items.join(self.delim.as_str());
                let clean = scan::normalize(&joined, &self.delim);
                if !clean.is_empty() {
                    let added = scan::count_items(&clean, &self.delim);
                    self.append_run(&clean, added);
                }
            }
        }
        self.count
    }

    /// Appends an already-normalized run of `added` items.
    fn append_run(&mut self, run: &str, added: usize) {
        if !self.buf.is_empty() {
            self.buf.push_str(&self.delim);
        }
        self.buf.push_str(run);
        self.count += added;
    }

    /// Builds a new pack by transforming every item in order.
    ///
    /// The transform results are joined with the delimiter and the
    /// joined string re-normalized, so a result that is empty or
    /// contains the delimiter changes the effective item count.
    pub fn map<F>(&self, mut transform: F) -> StrPack
    where
        F: FnMut(&str) -> String,
    {
        let mut joined = String::with_capacity(self.buf.len());
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                joined.push_str(&self.delim);
            }
            joined.push_str(&transform(item));
        }
        let buf = scan::normalize(&joined, &self.delim).into_owned();
        let count = scan::count_items(&buf, &self.delim);
        StrPack {
            buf,
            delim: self.delim.clone(),
            count,
        }
    }

    /// Splits the buffer into an ordered list of items. Empty pack,
    /// empty list.
    #[must_use]
    pub fn to_vec(&self) -> Vec<&str> {
        if self.buf.is_empty() {
            return Vec::new();
        }
        self.buf.split(self.delim.as_str()).collect()
    }

    /// Returns a forward iterator over the items.
    ///
    /// Each call creates an independent iterator state; the pack is
    /// freely re-iterable even though a single iterator instance is
    /// forward-only.
    #[must_use]
    pub fn iter(&self) -> StrPackIter<'_> {
        self.into_iter()
    }

    /// Returns a reverse iterator, walking from the buffer end back to
    /// the start.
    #[must_use]
    pub fn iter_rev(&self) -> StrPackRevIter<'_> {
        StrPackRevIter::new(self)
    }

    /// Returns an iterator pairing each item with itself.
    ///
    /// There is no positional index in this model, so the entry "key"
    /// is the item's own content.
    #[must_use]
    pub fn entries(&self) -> StrPackEntryIter<'_> {
        StrPackEntryIter::new(self)
    }

    /// Returns a cursor positioned at the first item.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_> {
        self.cursor_at("")
    }

    /// Returns a cursor positioned at the item containing the first
    /// occurrence of `query`, or at the first item when `query` is
    /// empty or never occurs.
    #[must_use]
    pub fn cursor_at(&self, query: &str) -> Cursor<'_> {
        let pos = if query.is_empty() {
            0
        } else {
            scan::find_from(&self.buf, query, 0).unwrap_or(0)
        };
        let (start, end) = scan::item_bounds(&self.buf, &self.delim, pos);
        Cursor::new(self, start, end)
    }
}

impl Default for StrPack {
    /// An empty pack with [`DEFAULT_DELIMITER`].
    fn default() -> Self {
        Self {
            buf: String::new(),
            delim: DEFAULT_DELIMITER.to_string(),
            count: 0,
        }
    }
}

/// Displays the raw packed buffer verbatim, embedded delimiters
/// included; this is not a user-facing join.
impl fmt::Display for StrPack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// Appends each item in order; empty strings are discarded, consistent
/// with construction normalization.
impl<S: AsRef<str>> Extend<S> for StrPack {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for item in iter {
            let item = item.as_ref();
            if !item.is_empty() {
                if !self.buf.is_empty() {
                    self.buf.push_str(&self.delim);
                }
                self.buf.push_str(item);
                self.count += 1;
            }
        }
    }
}

/// Collects with [`DEFAULT_DELIMITER`]; empty items are discarded.
impl<S: AsRef<str>> FromIterator<S> for StrPack {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut pack = Self::default();
        pack.extend(iter);
        pack
    }
}

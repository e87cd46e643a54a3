//! `StrPack`: an ordered collection of strings packed into a single
//! contiguous buffer.
//!
//! Instead of allocating every item separately, `StrPack` stores all
//! items concatenated in one owned `String`, adjacent items separated
//! by a sentinel delimiter substring. Item boundaries are re-derived
//! from delimiter positions on demand; no per-item index is kept.
//!
//! This gives near-array ergonomics (push/pop/shift/unshift,
//! iteration, search) while keeping memory contiguous for
//! cache-friendly substring scanning, trading O(n) boundary
//! recomputation for O(1) amortized append and much lower per-item
//! overhead than a `Vec<String>`.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push()`, `add()`: O(1) amortized - append to the buffer tail
//! - `pop()`, `last()`: O(n) - backward scan for the last delimiter
//! - `shift()`, `unshift()`, `first()`: O(n) - buffer head rewrite/scan
//! - `has()`, `remove()`, `find()`: O(n) - substring scan over the buffer
//! - Iterator and cursor steps: O(item length) per step
//!
//! All bounds are in buffer length, never in item count.
//!
//! ## Space Complexity
//! - Per-item overhead: one delimiter occurrence (typically 1 byte)
//! - One allocation for the whole collection, grown amortized
//!
//! # Caller Contract
//!
//! Stored items must not contain the delimiter substring: boundary
//! scanning cannot tell a delimiter inside content from a separator.
//! The default delimiter ([`DEFAULT_DELIMITER`], the EOT control
//! character) is chosen to be absent from ordinary text; pass your own
//! to the constructors when that does not hold for your data.
//!
//! # Examples
//!
//! Construction, mutation and membership:
//!
//! ```
//! use strpack::StrPack;
//!
//! let mut colors = StrPack::from_items(["red", "green", "blue"], ",").unwrap();
//! assert_eq!(colors.len(), 3);
//! assert_eq!(colors.first(), Some("red"));
//! assert_eq!(colors.last(), Some("blue"));
//!
//! colors.push("yellow").unwrap();
//! assert!(colors.has("yellow").unwrap());
//! assert!(colors.remove("green").unwrap());
//! assert_eq!(colors.to_vec(), ["red", "blue", "yellow"]);
//! ```
//!
//! Construction from a pre-joined string is normalized: delimiter runs
//! collapse and edge delimiters are stripped:
//!
//! ```
//! use strpack::StrPack;
//!
//! let pack = StrPack::from_joined(",a,,b,", ",").unwrap();
//! assert_eq!(pack.to_vec(), ["a", "b"]);
//! assert_eq!(pack.len(), 2);
//! ```
//!
//! Search expands any raw match, even one inside an item, to the full
//! enclosing item:
//!
//! ```
//! use strpack::StrPack;
//!
//! let pack = StrPack::from_items(["alpha", "beta", "gamma"], ",").unwrap();
//! assert_eq!(pack.find("mm").unwrap(), Some("gamma"));
//! assert_eq!(pack.find_all("a").unwrap(), ["alpha", "beta", "gamma"]);
//! ```
//!
//! # Cursor Navigation
//!
//! A [`Cursor`] tracks one item's boundary offsets and steps forward
//! or backward incrementally. It borrows the pack, so the pack cannot
//! be mutated while a cursor is live:
//!
//! ```
//! use strpack::StrPack;
//!
//! let pack = StrPack::from_items(["a", "b", "c", "d"], ",").unwrap();
//! let mut cursor = pack.cursor_at("b");
//! assert_eq!(cursor.current(), "b");
//! assert_eq!(cursor.next(), Some("c"));
//! assert_eq!(cursor.next(), Some("d"));
//! assert_eq!(cursor.next(), None);
//! assert_eq!(cursor.previous(), Some("c"));
//! ```
//!
//! # Iterator Support
//!
//! `StrPack` implements standard Rust iterator patterns; every
//! [`iter`](StrPack::iter) call creates an independent state, so the
//! pack is freely re-iterable:
//!
//! ```
//! use strpack::StrPack;
//!
//! let pack = StrPack::from_items(["one", "two"], "|").unwrap();
//!
//! for item in &pack {
//!     println!("{item}");
//! }
//!
//! let forward: Vec<&str> = pack.iter().collect();
//! assert_eq!(forward, ["one", "two"]);
//!
//! let backward: Vec<&str> = pack.iter_rev().collect();
//! assert_eq!(backward, ["two", "one"]);
//! ```

mod core;
mod cursor;
mod error;
mod iter;
mod scan;

// Re-export public types and traits
pub use crate::core::{Input, StrPack, DEFAULT_DELIMITER};
pub use crate::cursor::Cursor;
pub use crate::error::StrPackError;
pub use crate::iter::{StrPackEntryIter, StrPackIter, StrPackRevIter};

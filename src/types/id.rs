use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use rand::RngCore;

/// A 12-byte Xcode object identity: a 4-byte big-endian local counter
/// followed by an 8-byte project salt. Rendered as 24 uppercase hex digits.
///
/// `comment` is a human-readable label (e.g. `"main.m in Sources"`) used
/// only when pretty-printing a reference to this id; it never participates
/// in equality, ordering, or hashing.
#[derive(Debug, Clone)]
pub struct IdRef {
    bytes: [u8; 12],
    pub comment: Option<String>,
}

impl IdRef {
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        IdRef { bytes, comment: None }
    }

    pub fn with_comment(bytes: [u8; 12], comment: impl Into<String>) -> Self {
        IdRef { bytes, comment: Some(comment.into()) }
    }

    pub fn bytes(&self) -> [u8; 12] {
        self.bytes
    }

    /// Render as 24 uppercase hex digits.
    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(24);
        for b in self.bytes {
            s.push_str(&format!("{:02X}", b));
        }
        s
    }

    /// Parse a 24-character string of `[0-9A-F]` into raw id bytes.
    /// Returns `None` for anything that deviates in length or charset —
    /// the ID-literal heuristic from the parser.
    pub fn parse_hex(s: &str) -> Option<[u8; 12]> {
        if s.len() != 24 || !s.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)) {
            return None;
        }
        let mut bytes = [0u8; 12];
        for i in 0..12 {
            bytes[i] = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).ok()?;
        }
        Some(bytes)
    }
}

impl fmt::Display for IdRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// Identity and ordering are defined purely by the raw bytes, never by the
// pretty-print comment: two ids with the same bytes and different comments
// are equal, and ordering is plain lexicographic byte comparison.
impl PartialEq for IdRef {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}
impl Eq for IdRef {}

impl PartialOrd for IdRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for IdRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.bytes.cmp(&other.bytes)
    }
}
impl std::hash::Hash for IdRef {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

/// Process-wide monotonic local counter shared by every minted id,
/// regardless of which document it belongs to. Id minting is not meant to
/// be reentrant across threads, so relaxed ordering on the fetch-add is
/// enough.
static COUNTER: AtomicU32 = AtomicU32::new(0);

fn next_counter() -> u32 {
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Mints fresh 96-bit object ids for a single document. Every id minted by
/// the same `IdAllocator` shares its 8-byte salt; a document's allocator is
/// created once, at `Xcodeproj` root-object construction.
#[derive(Debug, Clone, Copy)]
pub struct IdAllocator {
    salt: [u8; 8],
}

impl IdAllocator {
    /// Create a new allocator, randomizing its salt from a nondeterministic
    /// source so that ids minted in different runs never collide on salt.
    pub fn new() -> Self {
        let mut salt = [0u8; 8];
        rand::thread_rng().fill_bytes(&mut salt);
        IdAllocator { salt }
    }

    pub fn from_salt(salt: [u8; 8]) -> Self {
        IdAllocator { salt }
    }

    pub fn salt(&self) -> [u8; 8] {
        self.salt
    }

    /// Mint a fresh id sharing this allocator's salt.
    pub fn mint(&self) -> IdRef {
        let counter = next_counter().to_be_bytes();
        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&counter);
        bytes[4..].copy_from_slice(&self.salt);
        IdRef::from_bytes(bytes)
    }

    /// Mint a fresh id with a pretty-printing comment attached.
    pub fn mint_with_comment(&self, comment: impl Into<String>) -> IdRef {
        let mut id = self.mint();
        id.comment = Some(comment.into());
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_root_then_children_share_salt() {
        let alloc = IdAllocator::new();
        let root = alloc.mint();
        let child = alloc.mint();
        assert_eq!(&root.bytes()[4..], &child.bytes()[4..]);
        assert_ne!(root.bytes(), child.bytes());
    }

    #[test]
    fn ids_render_as_24_uppercase_hex() {
        let alloc = IdAllocator::new();
        let id = alloc.mint();
        let hex = id.to_hex();
        assert_eq!(hex.len(), 24);
        assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)));
    }

    #[test]
    fn id_literal_heuristic() {
        assert!(IdRef::parse_hex("0123456789ABCDEF01234567").is_some());
        assert!(IdRef::parse_hex("0123456789ABCDEF0123456").is_none()); // 23 chars
        assert!(IdRef::parse_hex("0123456789ABCDEF0123456G").is_none()); // bad char
        assert!(IdRef::parse_hex("0123456789abcdef01234567").is_none()); // lowercase
    }

    #[test]
    fn equality_ignores_comment() {
        let a = IdRef::with_comment([1; 12], "a");
        let b = IdRef::with_comment([1; 12], "different");
        assert_eq!(a, b);
    }

    #[test]
    fn ordering_is_lexicographic_on_bytes() {
        let a = IdRef::from_bytes([0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
        let b = IdRef::from_bytes([0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(a < b);
    }

    #[test]
    fn unique_ids_within_a_document() {
        let alloc = IdAllocator::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(alloc.mint().bytes()));
        }
    }
}

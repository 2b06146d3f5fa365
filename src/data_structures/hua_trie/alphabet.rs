//! Character to child-slot mapping for the Hua Trie.
//!
//! The trie branches on a fixed alphabet of 27 symbols: the 26 Latin letters
//! (case-folded) and the apostrophe. Every path walk goes through [`slot_for`].

/// Number of child slots carried by every node.
pub const ALPHABET_SIZE: usize = 27;

/// Slot reserved for the apostrophe.
pub const APOSTROPHE_SLOT: usize = ALPHABET_SIZE - 1;

/// Maps a character to its child slot, or `None` if the character is not
/// part of the dictionary alphabet.
///
/// Upper- and lowercase letters share a slot.
#[inline]
pub fn slot_for(c: char) -> Option<usize> {
    match c {
        '\'' => Some(APOSTROPHE_SLOT),
        'a'..='z' => Some(c as usize - 'a' as usize),
        'A'..='Z' => Some(c as usize - 'A' as usize),
        _ => None,
    }
}

/// Maps a child slot back to the character it renders as.
///
/// Letters always render lowercase.
#[inline]
pub fn char_for(slot: usize) -> char {
    debug_assert!(slot < ALPHABET_SIZE);
    if slot == APOSTROPHE_SLOT {
        '\''
    } else {
        (b'a' + slot as u8) as char
    }
}

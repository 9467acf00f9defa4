//! Geohash base32 alphabet.
//!
//! This is not RFC 4648 base32: the letters `a`, `i`, `l` and `o` are left
//! out and the ordering is part of the geohash format. Changing it makes
//! every produced hash incompatible with other implementations.

/// The 32 geohash characters, indexed by their 5-bit value.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Bits per geohash character.
pub const BITS_PER_CHAR: usize = 5;

/// Masks selecting each bit of a character value, most significant first.
pub const BIT_MASKS: [u8; BITS_PER_CHAR] = [16, 8, 4, 2, 1];

const INVALID: u8 = 0xff;

/// ASCII byte -> 5-bit value, `INVALID` for bytes outside the alphabet.
const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Character for a 5-bit value. Only the low five bits are used.
#[inline]
pub fn encode_char(value: u8) -> char {
    ALPHABET[(value & 0x1f) as usize] as char
}

/// 5-bit value for a geohash character, `None` outside the alphabet.
#[inline]
pub fn decode_char(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_TABLE[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Iterate the alphabet in order.
pub fn chars() -> impl Iterator<Item = char> {
    ALPHABET.iter().map(|&b| b as char)
}

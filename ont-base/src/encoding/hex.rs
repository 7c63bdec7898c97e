// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

pub use ::hex::{FromHex, FromHexError};

pub trait ToHex {
    fn to_hex_lower(&self) -> String;

    fn to_hex_upper(&self) -> String;
}

impl<T: AsRef<[u8]>> ToHex for T {
    #[inline]
    fn to_hex_lower(&self) -> String {
        ::hex::encode(self)
    }

    #[inline]
    fn to_hex_upper(&self) -> String {
        ::hex::encode_upper(self)
    }
}

/// Hex rendering in reversed byte order, the display form of hashes and addresses.
pub trait ToRevHex {
    fn to_rev_hex_lower(&self) -> String;

    fn to_rev_hex_upper(&self) -> String;
}

#[inline]
fn encode_rev_hex(data: &[u8], table: &[u8; 16]) -> String {
    let mut h = String::with_capacity(data.len() * 2);
    data.iter().rev().for_each(|b| {
        h.push(table[(b >> 4) as usize] as char);
        h.push(table[(b & 0x0F) as usize] as char);
    });

    h
}

impl<T: AsRef<[u8]>> ToRevHex for T {
    #[inline]
    fn to_rev_hex_lower(&self) -> String {
        encode_rev_hex(self.as_ref(), b"0123456789abcdef")
    }

    #[inline]
    fn to_rev_hex_upper(&self) -> String {
        encode_rev_hex(self.as_ref(), b"0123456789ABCDEF")
    }
}

pub trait StartsWith0x {
    fn starts_with_0x(&self) -> bool;
}

impl<T: AsRef<[u8]>> StartsWith0x for T {
    #[inline]
    fn starts_with_0x(&self) -> bool {
        let v = self.as_ref();
        v.starts_with(b"0x") || v.starts_with(b"0X")
    }
}

/// Strips an optional `0x`/`0X` prefix.
#[inline]
pub fn trim_0x(value: &str) -> &str {
    if value.starts_with_0x() {
        &value[2..]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rev_hex_reverses_byte_order() {
        let data = [0x01u8, 0x02, 0xAB];
        assert_eq!(data.to_hex_lower(), "0102ab");
        assert_eq!(data.to_rev_hex_lower(), "ab0201");
        assert_eq!(data.to_rev_hex_upper(), "AB0201");
    }

    #[test]
    fn trim_0x_prefix() {
        assert_eq!(trim_0x("0xdead"), "dead");
        assert_eq!(trim_0x("0Xdead"), "dead");
        assert_eq!(trim_0x("dead"), "dead");
    }
}

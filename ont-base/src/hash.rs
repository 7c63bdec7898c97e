// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use sha2::Digest;

pub trait Sha256 {
    fn sha256(&self) -> [u8; 32];
}

impl<T: AsRef<[u8]>> Sha256 for T {
    #[inline]
    fn sha256(&self) -> [u8; 32] {
        let mut h = sha2::Sha256::new();
        h.update(self);
        h.finalize().into()
    }
}

/// `sha256(sha256(data))`, used for transaction ids and base58check checksums.
pub trait Sha256Twice {
    fn sha256_twice(&self) -> [u8; 32];
}

impl<T: AsRef<[u8]>> Sha256Twice for T {
    #[inline]
    fn sha256_twice(&self) -> [u8; 32] {
        self.sha256().sha256()
    }
}

//! FNV-1a fingerprints of kernel output buffers.
//!
//! Used to assert bit-identical results across repeated runs with the
//! same seed without keeping both buffers around. Floats are hashed by
//! their IEEE-754 bit pattern, so `0.0` and `-0.0` hash differently and
//! every NaN payload is distinguished. Not cryptographically secure.

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Hash every `f64::to_bits()` in order, with the length folded in first.
pub fn f64_hash(data: &[f64]) -> u64 {
    let mut hash = fnv1a_bytes(FNV_OFFSET, &(data.len() as u64).to_le_bytes());
    for &v in data {
        hash = fnv1a_bytes(hash, &v.to_bits().to_le_bytes());
    }
    hash
}

/// Hash a slice of `i32` in order, with the length folded in first.
pub fn i32_hash(data: &[i32]) -> u64 {
    let mut hash = fnv1a_bytes(FNV_OFFSET, &(data.len() as u64).to_le_bytes());
    for &v in data {
        hash = fnv1a_bytes(hash, &v.to_le_bytes());
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_buffers_equal_hashes() {
        let a = vec![1.0, 2.5, -3.0];
        assert_eq!(f64_hash(&a), f64_hash(&a.clone()));
    }

    #[test]
    fn order_matters() {
        assert_ne!(f64_hash(&[1.0, 2.0]), f64_hash(&[2.0, 1.0]));
        assert_ne!(i32_hash(&[1, 2]), i32_hash(&[2, 1]));
    }

    #[test]
    fn signed_zero_distinguished() {
        assert_ne!(f64_hash(&[0.0]), f64_hash(&[-0.0]));
    }

    #[test]
    fn length_is_folded_in() {
        // Same byte stream split differently must not collide on length alone.
        assert_ne!(i32_hash(&[]), i32_hash(&[0]));
        assert_ne!(f64_hash(&[]), FNV_OFFSET);
    }
}

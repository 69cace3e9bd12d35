//! Single-base one-hot encoding and strand complements.
//!
//! Only uppercase `A`, `C`, `G`, `T` and `U` are recognized. Lowercase
//! (soft-masked) bases and IUPAC ambiguity codes encode to [`ZERO_VECTOR`].

/// One-hot vector over the columns `[A, C, G, T/U]`
pub type BaseVector = [u8; 4];

/// Number of columns in a [`BaseVector`]
pub const BASE_WIDTH: usize = 4;

/// Encoding of any base outside of `ACGTU`
pub const ZERO_VECTOR: BaseVector = [0, 0, 0, 0];

/// Encoding of adenine
pub const A_VECTOR: BaseVector = [1, 0, 0, 0];
/// Encoding of cytosine
pub const C_VECTOR: BaseVector = [0, 1, 0, 0];
/// Encoding of guanine
pub const G_VECTOR: BaseVector = [0, 0, 1, 0];
/// Encoding of thymine, shared by uracil
pub const T_VECTOR: BaseVector = [0, 0, 0, 1];

/// Encodes a single nucleotide into its one-hot vector
///
/// `U` shares the `T` column. Every other byte maps to [`ZERO_VECTOR`].
#[inline]
#[must_use]
pub fn encode_base(base: u8) -> BaseVector {
    match base {
        b'A' => A_VECTOR,
        b'C' => C_VECTOR,
        b'G' => G_VECTOR,
        b'T' | b'U' => T_VECTOR,
        _ => ZERO_VECTOR,
    }
}

/// Returns the complementary base, preserving case
///
/// Ambiguity codes map to their IUPAC complement. Bytes outside the DNA
/// table, uracil included, are returned unchanged.
#[inline]
#[must_use]
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'a' => b't',
        b'T' => b'A',
        b't' => b'a',
        b'C' => b'G',
        b'c' => b'g',
        b'G' => b'C',
        b'g' => b'c',
        b'R' => b'Y',
        b'r' => b'y',
        b'Y' => b'R',
        b'y' => b'r',
        b'K' => b'M',
        b'k' => b'm',
        b'M' => b'K',
        b'm' => b'k',
        b'B' => b'V',
        b'b' => b'v',
        b'V' => b'B',
        b'v' => b'b',
        b'D' => b'H',
        b'd' => b'h',
        b'H' => b'D',
        b'h' => b'd',
        // S, W, N, U and anything unrecognized are their own complement
        _ => base,
    }
}

/// Computes the reverse complement of a sequence into a new buffer
#[must_use]
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_known_bases() {
        assert_eq!(encode_base(b'A'), A_VECTOR);
        assert_eq!(encode_base(b'C'), C_VECTOR);
        assert_eq!(encode_base(b'G'), G_VECTOR);
        assert_eq!(encode_base(b'T'), T_VECTOR);
        assert_eq!(encode_base(b'U'), encode_base(b'T'));
    }

    #[test]
    fn test_unknown_bases_are_zero() {
        for b in 0..=u8::MAX {
            if matches!(b, b'A' | b'C' | b'G' | b'T' | b'U') {
                continue;
            }
            assert_eq!(encode_base(b), ZERO_VECTOR, "byte {b}");
        }
    }

    #[test]
    fn test_one_hot_has_single_bit() {
        for b in b"ACGTU" {
            let v = encode_base(*b);
            assert_eq!(v.iter().map(|&x| u32::from(x)).sum::<u32>(), 1);
        }
    }

    #[test]
    fn test_lowercase_not_recognized() {
        for b in b"acgtun" {
            assert_eq!(encode_base(*b), ZERO_VECTOR);
        }
    }

    #[test]
    fn test_complement_is_involution_on_dna() {
        for b in b"ACGTacgtRYKMBVDHSWNrykmbvdhswn" {
            assert_eq!(complement(complement(*b)), *b);
        }
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement(b"AACGTN"), b"NACGTT");
        assert_eq!(reverse_complement(b"acgU"), b"Ucgt");
        assert_eq!(reverse_complement(b"AAUU"), b"UUTT");
        assert!(reverse_complement(b"").is_empty());
    }
}

//! Collation weights used by the string-prefix encoder.
//!
//! Only the fixed-length leading-weight transform is provided: enough to
//! turn the first characters of a string into bytes whose binary order is
//! the collation's order.
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collation {
    Binary,
    Latin1CaseInsensitive,
    Utf8Binary,
    Utf8CaseInsensitive,
}

// Weight substituted for malformed input and characters outside the BMP.
const REPLACEMENT_WEIGHT: u16 = 0xFFFD;

impl Collation {
    /// Collation for a server collation id.
    pub fn from_id(id: u32) -> Result<Self, ConfigError> {
        match id {
            63 | 47 => Ok(Collation::Binary),
            8 | 48 => Ok(Collation::Latin1CaseInsensitive),
            83 | 46 => Ok(Collation::Utf8Binary),
            33 | 45 => Ok(Collation::Utf8CaseInsensitive),
            other => Err(ConfigError::UnknownCollation(other)),
        }
    }

    /// Canonical id of the collation.
    pub fn id(&self) -> u32 {
        match self {
            Collation::Binary => 63,
            Collation::Latin1CaseInsensitive => 8,
            Collation::Utf8Binary => 83,
            Collation::Utf8CaseInsensitive => 33,
        }
    }

    /// Write the weights of `src` into `dst` until either runs out. Returns
    /// the number of bytes written; the rest of `dst` is left untouched.
    pub fn transform(&self, src: &[u8], dst: &mut [u8]) -> usize {
        let mut sink = WeightSink { dst, len: 0 };
        match self {
            Collation::Binary => {
                sink.push(src);
            }
            Collation::Latin1CaseInsensitive => {
                for &b in src {
                    if !sink.push(&[LATIN1_SWEDISH_CI[b as usize]]) {
                        break;
                    }
                }
            }
            Collation::Utf8Binary => utf8_weights(src, &mut sink, |c| c),
            Collation::Utf8CaseInsensitive => utf8_weights(src, &mut sink, utf8_general_fold),
        }
        sink.len
    }
}

struct WeightSink<'a> {
    dst: &'a mut [u8],
    len: usize,
}

impl WeightSink<'_> {
    /// Append as much of `bytes` as fits. False once the sink is full.
    fn push(&mut self, bytes: &[u8]) -> bool {
        let n = bytes.len().min(self.dst.len() - self.len);
        self.dst[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
        self.len < self.dst.len()
    }
}

// latin1_swedish_ci sort order. Case and most accents fold onto the base
// letter; Å, Ä/Æ and Ö sort after Z, Ü sorts as Y.
const LATIN1_SWEDISH_CI: [u8; 256] = {
    const ACCENTED: [u8; 32] = [
        65, 65, 65, 65, 92, 91, 92, 67, 69, 69, 69, 69, 73, 73, 73, 73, //
        68, 78, 79, 79, 79, 79, 93, 215, 216, 85, 85, 85, 89, 89, 222, 223,
    ];
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = match i as u8 {
            b @ b'a'..=b'z' => b - 0x20,
            b @ 0xC0..=0xDF => ACCENTED[(b - 0xC0) as usize],
            0xF7 => 0xF7,
            0xFF => 0xFF,
            b @ 0xE0..=0xFE => ACCENTED[(b - 0xE0) as usize],
            b => b,
        };
        i += 1;
    }
    table
};

// utf8_general_ci base letters for U+00C0..=U+017F. `*` marks characters
// without a single-letter base; those only fold case.
const LATIN_BASE_START: u32 = 0xC0;
const LATIN_BASES: &[u8; 192] = b"AAAAAA*CEEEEIIII*NOOOOO**UUUUY*S\
AAAAAA*CEEEEIIII*NOOOOO**UUUUY*Y\
AAAAAACCCCCCCCDDDDEEEEEEEEEEGGGGGGGGHHHHIIIIIIIIII**JJKK*LLLLLLLLLL\
NNNNNN***OOOOOO**RRRRRRSSSSSSSSTTTTTTUUUUUUUUUUUUWWYYYZZZZZZS";

fn utf8_general_fold(c: char) -> char {
    let base = u32::from(c)
        .checked_sub(LATIN_BASE_START)
        .and_then(|i| LATIN_BASES.get(i as usize));
    match base {
        Some(&b) if b != b'*' => char::from(b),
        _ => utf8_upper(c),
    }
}

fn utf8_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn utf8_weight(c: char) -> u16 {
    u16::try_from(u32::from(c)).unwrap_or(REPLACEMENT_WEIGHT)
}

fn utf8_weights(src: &[u8], sink: &mut WeightSink<'_>, fold: impl Fn(char) -> char) {
    for chunk in src.utf8_chunks() {
        for c in chunk.valid().chars() {
            if !sink.push(&utf8_weight(fold(c)).to_be_bytes()) {
                return;
            }
        }
        if !chunk.invalid().is_empty() && !sink.push(&REPLACEMENT_WEIGHT.to_be_bytes()) {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(Collation::from_id(63), Ok(Collation::Binary));
        assert_eq!(Collation::from_id(48), Ok(Collation::Latin1CaseInsensitive));
        assert_eq!(Collation::from_id(46), Ok(Collation::Utf8Binary));
        assert_eq!(Collation::from_id(33), Ok(Collation::Utf8CaseInsensitive));
        assert_eq!(Collation::from_id(9999), Err(ConfigError::UnknownCollation(9999)));
        for c in [
            Collation::Binary,
            Collation::Latin1CaseInsensitive,
            Collation::Utf8Binary,
            Collation::Utf8CaseInsensitive,
        ] {
            assert_eq!(Collation::from_id(c.id()), Ok(c));
        }
    }

    #[test]
    fn test_latin1_folds_case_and_accents() {
        let mut dst = [0u8; 6];
        let n = Collation::Latin1CaseInsensitive
            .transform(&[b'a', b'Z', 0xE9, 0xF7, 0xE5, 0xFC], &mut dst);
        assert_eq!(n, 6);
        // é -> E, ÷ unchanged, å -> after Z, ü -> Y.
        assert_eq!(dst, [b'A', b'Z', b'E', 0xF7, 91, b'Y']);
    }

    #[test]
    fn test_latin1_table_is_case_blind() {
        for b in 0xE0..=0xFEu8 {
            if b != 0xF7 {
                assert_eq!(LATIN1_SWEDISH_CI[b as usize], LATIN1_SWEDISH_CI[(b - 0x20) as usize]);
            }
        }
    }

    #[test]
    fn test_utf8_general_fold() {
        assert_eq!(utf8_general_fold('é'), 'E');
        assert_eq!(utf8_general_fold('Å'), 'A');
        assert_eq!(utf8_general_fold('ß'), 'S');
        assert_eq!(utf8_general_fold('ł'), 'L');
        assert_eq!(utf8_general_fold('ž'), 'Z');
        assert_eq!(utf8_general_fold('æ'), 'Æ');
        assert_eq!(utf8_general_fold('ж'), 'Ж');
        assert_eq!(utf8_general_fold('÷'), '÷');
    }

    #[test]
    fn test_utf8_weights_are_big_endian() {
        let mut dst = [0u8; 8];
        let n = Collation::Utf8Binary.transform("aé€".as_bytes(), &mut dst);
        assert_eq!(n, 6);
        assert_eq!(&dst[..6], &[0x00, 0x61, 0x00, 0xE9, 0x20, 0xAC]);
    }

    #[test]
    fn test_utf8_invalid_and_supplementary() {
        let mut dst = [0u8; 8];
        let mut src = vec![0xFF];
        src.extend_from_slice("😀".as_bytes());
        Collation::Utf8Binary.transform(&src, &mut dst);
        assert_eq!(&dst[..4], &[0xFF, 0xFD, 0xFF, 0xFD]);
    }

    #[test]
    fn test_transform_truncates() {
        let mut dst = [0u8; 3];
        let n = Collation::Utf8CaseInsensitive.transform(b"abc", &mut dst);
        assert_eq!(n, 3);
        assert_eq!(dst, [0x00, b'A', 0x00]);
    }
}

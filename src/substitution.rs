//! SubstitutionCipher: polyalphabetic keyword substitution over the
//! Russian alphabet.
//!
//! A Gronsfeld-style variant of the Vigenère cipher: the keyword is
//! converted to a sequence of alphabet positions and each plaintext
//! letter is shifted by the key position at its index, cycling through
//! the key. All arithmetic is modular over the 33-letter alphabet in
//! [`crate::alphabet`].

use crate::alphabet;
use crate::error::CipherError;

/// Polyalphabetic substitution cipher keyed by a repeating Russian keyword.
///
/// The key is validated and converted to alphabet positions once, at
/// construction; instances are immutable afterwards and every transform
/// call is independent.
///
/// Validation is deliberately asymmetric between directions:
/// [`encrypt`](Self::encrypt) filters noise (spaces, digits, punctuation)
/// out of its input, while [`decrypt`](Self::decrypt) rejects anything
/// that is not an uppercase alphabet letter.
pub struct SubstitutionCipher {
    key: Vec<usize>,
}

impl SubstitutionCipher {
    /// Creates a cipher from a keyword.
    ///
    /// Every character must lie in the contiguous А..я block; lowercase
    /// letters are normalized to uppercase by a fixed code-point offset.
    /// Ё/ё sit outside that block and are rejected. A key of length > 1
    /// whose characters are all identical is rejected as weak, since it
    /// degenerates to a single repeated shift.
    ///
    /// # Parameters
    /// - `key`: The keyword string (minimum 1 character).
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyKey`] for an empty string,
    /// [`CipherError::KeyInvalidChars`] for characters outside А..я, or
    /// [`CipherError::WeakKey`] for an all-identical key of length > 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use shifr::SubstitutionCipher;
    ///
    /// let cipher = SubstitutionCipher::new("БОРЩ").unwrap();
    /// assert_eq!(cipher.encrypt("СУП").unwrap(), "ТВА");
    /// ```
    ///
    /// ```
    /// use shifr::SubstitutionCipher;
    ///
    /// assert!(SubstitutionCipher::new("ЙЙЙ").is_err());
    /// assert!(SubstitutionCipher::new("Я").is_ok());
    /// ```
    pub fn new(key: &str) -> Result<Self, CipherError> {
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        let mut positions = Vec::new();
        for c in key.chars() {
            let upper = alphabet::normalize(c).ok_or(CipherError::KeyInvalidChars)?;
            let pos = alphabet::position(upper).ok_or(CipherError::KeyInvalidChars)?;
            positions.push(pos);
        }
        if positions.len() > 1 && positions.iter().all(|&p| p == positions[0]) {
            return Err(CipherError::WeakKey);
        }
        Ok(SubstitutionCipher { key: positions })
    }

    /// Encrypts open text.
    ///
    /// Characters outside the А..я block (spaces, digits, punctuation,
    /// Latin letters, and also Ё/ё) are silently dropped; the retained
    /// letters are normalized to uppercase before shifting. The output
    /// has the same length as the filtered input, with no separators.
    ///
    /// # Parameters
    /// - `open_text`: The text to encrypt.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyText`] if nothing survives the filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use shifr::SubstitutionCipher;
    ///
    /// let cipher = SubstitutionCipher::new("БОРЩ").unwrap();
    /// // Spaces and digits are dropped before shifting.
    /// assert_eq!(
    ///     cipher.encrypt("СУП").unwrap(),
    ///     cipher.encrypt("С У П 2024").unwrap(),
    /// );
    /// ```
    pub fn encrypt(&self, open_text: &str) -> Result<String, CipherError> {
        let work: Vec<usize> = open_text
            .chars()
            .filter_map(alphabet::normalize)
            .filter_map(alphabet::position)
            .collect();
        if work.is_empty() {
            return Err(CipherError::EmptyText);
        }
        let out = work
            .iter()
            .enumerate()
            .map(|(i, &p)| alphabet::letter(p + self.key[i % self.key.len()]))
            .collect();
        Ok(out)
    }

    /// Decrypts cipher text.
    ///
    /// Strict counterpart of [`encrypt`](Self::encrypt): the input must
    /// be non-empty and consist solely of uppercase alphabet letters
    /// (А..Я or Ё). Lowercase letters, whitespace, digits, and
    /// punctuation are errors, not noise.
    ///
    /// # Parameters
    /// - `cipher_text`: The text to decrypt.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyText`] for an empty string or
    /// [`CipherError::TextInvalidChars`] for any non-alphabet character.
    ///
    /// # Examples
    ///
    /// ```
    /// use shifr::SubstitutionCipher;
    ///
    /// let cipher = SubstitutionCipher::new("БОРЩ").unwrap();
    /// assert_eq!(cipher.decrypt("ТВА").unwrap(), "СУП");
    /// assert!(cipher.decrypt("тва").is_err());
    /// ```
    pub fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        if cipher_text.is_empty() {
            return Err(CipherError::EmptyText);
        }
        let mut work = Vec::new();
        for c in cipher_text.chars() {
            let pos = alphabet::position(c).ok_or(CipherError::TextInvalidChars)?;
            work.push(pos);
        }
        let out = work
            .iter()
            .enumerate()
            .map(|(i, &p)| alphabet::letter(p + alphabet::RADIX - self.key[i % self.key.len()]))
            .collect();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_normalized_to_uppercase() {
        let upper = SubstitutionCipher::new("БОРЩ").unwrap();
        let lower = SubstitutionCipher::new("борщ").unwrap();
        assert_eq!(upper.encrypt("СУП").unwrap(), lower.encrypt("СУП").unwrap());
    }

    #[test]
    fn test_weak_key_rejected_only_above_length_one() {
        assert_eq!(SubstitutionCipher::new("ЙЙЙ").err(), Some(CipherError::WeakKey));
        assert_eq!(SubstitutionCipher::new("ЙЙ").err(), Some(CipherError::WeakKey));
        assert!(SubstitutionCipher::new("Й").is_ok());
    }

    #[test]
    fn test_mixed_case_weak_key_rejected() {
        // Normalization happens before the weak-key check.
        assert_eq!(SubstitutionCipher::new("Йй").err(), Some(CipherError::WeakKey));
    }

    #[test]
    fn test_key_rejects_yo() {
        // Ё is in the alphabet but outside the validated А..я block.
        assert_eq!(
            SubstitutionCipher::new("ЁЖ").err(),
            Some(CipherError::KeyInvalidChars)
        );
    }

    #[test]
    fn test_encrypt_wraps_around_alphabet_end() {
        // П(16) + Р(17) = 33 ≡ 0 → А
        let cipher = SubstitutionCipher::new("БОРЩ").unwrap();
        assert_eq!(cipher.encrypt("СУП").unwrap(), "ТВА");
    }

    #[test]
    fn test_encrypt_filters_yo_from_open_text() {
        let cipher = SubstitutionCipher::new("БОРЩ").unwrap();
        assert_eq!(
            cipher.encrypt("ЁЛКА").unwrap(),
            cipher.encrypt("ЛКА").unwrap()
        );
    }

    #[test]
    fn test_decrypt_accepts_yo() {
        // Key Б shifts Е(5) to Ё(6); decrypt must take Ё back to Е.
        let cipher = SubstitutionCipher::new("БВ").unwrap();
        assert_eq!(cipher.encrypt("ЕЕ").unwrap(), "ЁЖ");
        assert_eq!(cipher.decrypt("ЁЖ").unwrap(), "ЕЕ");
    }

    #[test]
    fn test_key_longer_than_text() {
        let cipher = SubstitutionCipher::new("ПОМИДОРЫ").unwrap();
        let encrypted = cipher.encrypt("СУП").unwrap();
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), "СУП");
    }
}

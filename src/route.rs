//! RouteCipher: columnar route transposition over the Latin alphabet.
//!
//! The text is written into a rectangular grid row by row and read back
//! column by column from the last column to the first, which permutes
//! letter positions without changing the letters themselves. The key is
//! the column count.
//!
//! The grid is a transient flat buffer of `rows * cols` bytes indexed as
//! `row * cols + col`, allocated per call and dropped at scope exit.

use crate::error::CipherError;

/// Columnar route-transposition cipher keyed by a column count.
///
/// Construction validates the key against an initial text, which bounds
/// the key but is not stored; transform calls use the key as fixed.
///
/// When the filtered text length is not a multiple of the key, the
/// trailing letters do not fit the `rows x key` grid and are dropped, so
/// the output is exactly `rows * key` characters. Round trips through
/// [`encryption`](Self::encryption) and [`transcript`](Self::transcript)
/// are only exact when the filtered length divides evenly by the key.
pub struct RouteCipher {
    key: usize,
}

impl RouteCipher {
    /// Creates a cipher with the given column count.
    ///
    /// # Parameters
    /// - `key`: Number of grid columns.
    /// - `text`: Initial text used only to bound the key; not stored.
    ///
    /// # Errors
    /// Returns [`CipherError::KeyOutOfRange`] unless
    /// `2 <= key <= text.chars().count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shifr::RouteCipher;
    ///
    /// let cipher = RouteCipher::new(3, "PRIVET").unwrap();
    /// assert_eq!(cipher.encryption("PRIVET").unwrap(), "ITREPV");
    /// ```
    ///
    /// ```
    /// use shifr::RouteCipher;
    ///
    /// assert!(RouteCipher::new(1, "DOG").is_err());
    /// assert!(RouteCipher::new(10, "SHORT").is_err());
    /// ```
    pub fn new(key: usize, text: &str) -> Result<Self, CipherError> {
        if key < 2 || key > text.chars().count() {
            return Err(CipherError::KeyOutOfRange);
        }
        Ok(RouteCipher { key })
    }

    /// Encrypts text by route permutation.
    ///
    /// The input is scanned left to right: ASCII letters are kept with
    /// their case preserved, spaces are removed, and any other character
    /// stops the scan with an error. The retained letters fill the grid
    /// row-major; the output reads the grid column-major starting from
    /// the last column, top to bottom within each column.
    ///
    /// # Parameters
    /// - `text`: The text to encrypt.
    ///
    /// # Returns
    /// The permuted text of length `rows * key` where
    /// `rows = filtered_len / key`. Letters beyond the grid are dropped.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyText`] for an empty input or
    /// [`CipherError::TextInvalidChars`] for a character that is neither
    /// an ASCII letter nor a space.
    ///
    /// # Examples
    ///
    /// ```
    /// use shifr::RouteCipher;
    ///
    /// let cipher = RouteCipher::new(3, "PRIVET").unwrap();
    /// // Case survives the permutation; spaces do not.
    /// assert_eq!(cipher.encryption("pri vet").unwrap(), "itrepv");
    /// ```
    pub fn encryption(&self, text: &str) -> Result<String, CipherError> {
        if text.is_empty() {
            return Err(CipherError::EmptyText);
        }
        let mut filtered = Vec::with_capacity(text.len());
        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                filtered.push(c as u8);
            } else if c != ' ' {
                return Err(CipherError::TextInvalidChars);
            }
        }

        let cols = self.key;
        let rows = filtered.len() / cols;
        // The row-major grid is the filtered text truncated to rows*cols.
        let grid = &filtered[..rows * cols];

        let mut out = String::with_capacity(rows * cols);
        for col in (0..cols).rev() {
            for row in 0..rows {
                out.push(grid[row * cols + col] as char);
            }
        }
        Ok(out)
    }

    /// Decrypts cipher text by the inverse route.
    ///
    /// Both arguments must be non-empty and purely ASCII-alphabetic;
    /// spaces are rejected here, unlike in
    /// [`encryption`](Self::encryption). The open text serves only as a
    /// length oracle — its content is never read. The cipher text fills
    /// the grid column-major from the last column to the first, and the
    /// output reads the grid row-major.
    ///
    /// # Parameters
    /// - `cipher_text`: The permuted text to restore.
    /// - `open_text`: Reference text whose length must match.
    ///
    /// # Returns
    /// The restored text of length `rows * key` where
    /// `rows = cipher_text.len() / key`.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyText`] if either argument is empty,
    /// [`CipherError::TextInvalidChars`] for any non-letter in either
    /// argument, or [`CipherError::LengthMismatch`] when the lengths
    /// differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use shifr::RouteCipher;
    ///
    /// let cipher = RouteCipher::new(3, "PRIVET").unwrap();
    /// assert_eq!(cipher.transcript("ITREPV", "PRIVET").unwrap(), "PRIVET");
    /// ```
    pub fn transcript(&self, cipher_text: &str, open_text: &str) -> Result<String, CipherError> {
        if cipher_text.is_empty() || open_text.is_empty() {
            return Err(CipherError::EmptyText);
        }
        for c in cipher_text.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(CipherError::TextInvalidChars);
            }
        }
        for c in open_text.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(CipherError::TextInvalidChars);
            }
        }
        if cipher_text.len() != open_text.len() {
            return Err(CipherError::LengthMismatch);
        }

        let bytes = cipher_text.as_bytes();
        let cols = self.key;
        let rows = bytes.len() / cols;

        // Inverse route: write column-major from the last column, then
        // the row-major read is the grid in storage order.
        let mut grid = vec![0u8; rows * cols];
        let mut k = 0;
        for col in (0..cols).rev() {
            for row in 0..rows {
                grid[row * cols + col] = bytes[k];
                k += 1;
            }
        }

        Ok(grid.iter().map(|&b| b as char).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_read_order_last_column_first() {
        // P R I          col 2: I T
        // V E T   reads  col 1: R E
        //                col 0: P V
        let cipher = RouteCipher::new(3, "PRIVET").unwrap();
        assert_eq!(cipher.encryption("PRIVET").unwrap(), "ITREPV");
    }

    #[test]
    fn test_truncation_to_whole_rows() {
        // 7 letters, 3 columns: 2 rows, the trailing X never enters the grid.
        let cipher = RouteCipher::new(3, "PRIVET").unwrap();
        assert_eq!(cipher.encryption("PRIVETX").unwrap(), "ITREPV");
    }

    #[test]
    fn test_zero_rows_yields_empty_output() {
        // Filtered text shorter than the key: the grid has no rows.
        let cipher = RouteCipher::new(4, "HEDGEHOG").unwrap();
        assert_eq!(cipher.encryption("DOG").unwrap(), "");
    }

    #[test]
    fn test_invalid_char_rejected_mid_scan() {
        let cipher = RouteCipher::new(3, "PRIVET").unwrap();
        assert_eq!(
            cipher.encryption("PR1VET").err(),
            Some(CipherError::TextInvalidChars)
        );
    }

    #[test]
    fn test_transcript_rejects_spaces() {
        let cipher = RouteCipher::new(3, "PRIVET").unwrap();
        assert_eq!(
            cipher.transcript("ITR EPV", "PRIVETX").err(),
            Some(CipherError::TextInvalidChars)
        );
    }

    #[test]
    fn test_transcript_open_text_is_length_oracle_only() {
        // Content of the open text is irrelevant; only its length counts.
        let cipher = RouteCipher::new(3, "PRIVET").unwrap();
        assert_eq!(cipher.transcript("ITREPV", "XXXXXX").unwrap(), "PRIVET");
    }
}

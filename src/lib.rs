//! Classical teaching ciphers: keyword substitution and route transposition.
//!
//! This crate implements two historically significant but cryptographically
//! weak text ciphers as study material. Neither provides any security;
//! both are trivially breakable and exist to demonstrate alphabet
//! mapping, modular shift arithmetic, and grid permutations.
//!
//! # Architecture
//!
//! ```text
//! SubstitutionCipher   keyword over the 33-letter Russian alphabet;
//!                      C_i = (P_i + K_{i mod |K|}) mod 33
//! RouteCipher          column-count key over the Latin alphabet;
//!                      write row-major, read column-major right to left
//! ```
//!
//! The two engines are independent: no shared state, no concurrency.
//! Every validation failure is reported through
//! [`error::CipherError`] — a failed call performed no work at all.
//!
//! # Examples
//!
//! Encrypt and decrypt with the substitution cipher:
//!
//! ```
//! use shifr::SubstitutionCipher;
//!
//! let cipher = SubstitutionCipher::new("БОРЩ").unwrap();
//! let encrypted = cipher.encrypt("СУП").unwrap();
//! assert_eq!(encrypted, "ТВА");
//! assert_eq!(cipher.decrypt(&encrypted).unwrap(), "СУП");
//! ```
//!
//! Permute and restore with the route cipher:
//!
//! ```
//! use shifr::RouteCipher;
//!
//! let cipher = RouteCipher::new(3, "PRIVET").unwrap();
//! let encrypted = cipher.encryption("PRIVET").unwrap();
//! assert_eq!(encrypted, "ITREPV");
//! assert_eq!(cipher.transcript(&encrypted, "PRIVET").unwrap(), "PRIVET");
//! ```

#![deny(clippy::all)]

pub mod error;

pub(crate) mod alphabet;
mod route;
mod substitution;

pub use route::RouteCipher;
pub use substitution::SubstitutionCipher;

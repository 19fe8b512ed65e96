// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Document ID generation and validation.

use crate::error::AppError;
use ring::rand::{SecureRandom, SystemRandom};

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
/// Length of generated IDs (same shape as Firestore auto-IDs).
pub const ID_LEN: usize = 20;
/// Firestore rejects document IDs above this size.
const MAX_ID_BYTES: usize = 1500;
// Largest multiple of the alphabet size that fits in a byte; bytes at or
// above it are discarded so every character is equally likely.
const REJECT_THRESHOLD: u8 = (256 / ID_ALPHABET.len() * ID_ALPHABET.len()) as u8;

/// Generate a random 20-character alphanumeric document ID.
pub fn generate_id(rng: &SystemRandom) -> Result<String, AppError> {
    let mut id = String::with_capacity(ID_LEN);
    let mut buf = [0u8; 32];

    while id.len() < ID_LEN {
        rng.fill(&mut buf)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("System RNG failure")))?;

        for &b in buf.iter().filter(|&&b| b < REJECT_THRESHOLD) {
            if id.len() == ID_LEN {
                break;
            }
            id.push(ID_ALPHABET[b as usize % ID_ALPHABET.len()] as char);
        }
    }

    Ok(id)
}

/// Whether `id` can name a document at all.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_ID_BYTES
        && !id.contains('/')
        && id != "."
        && id != ".."
        && !(id.len() >= 4 && id.starts_with("__") && id.ends_with("__"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_alphanumeric() {
        let rng = SystemRandom::new();
        let id = generate_id(&rng).unwrap();

        assert_eq!(id.len(), ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(is_valid_id(&id));
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let rng = SystemRandom::new();
        let ids: HashSet<String> = (0..1000).map(|_| generate_id(&rng).unwrap()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_invalid_ids() {
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("."));
        assert!(!is_valid_id(".."));
        assert!(!is_valid_id("a/b"));
        assert!(!is_valid_id("__reserved__"));
        assert!(!is_valid_id(&"x".repeat(1501)));

        assert!(is_valid_id("__"));
        assert!(is_valid_id("65f1c2e8a9b3d4e5f6a7b8c9"));
    }
}

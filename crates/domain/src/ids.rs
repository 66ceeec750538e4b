// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier generation.
//!
//! Identifiers are short opaque strings. Uniqueness is probabilistic:
//! collisions are not detected, which is acceptable within the lifetime
//! of a single league.
//!
//! Generators are passed explicitly to whatever needs fresh identifiers
//! so that tests can substitute a deterministic sequence.

use crate::types::Identifier;

/// Number of characters in a randomly generated identifier.
pub const ID_LENGTH: usize = 7;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A source of fresh identifiers.
pub trait IdGenerator {
    /// Produces a new identifier.
    fn generate_id(&mut self) -> Identifier;
}

/// Generates random base-36 identifiers from the process-wide RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    /// Creates a new random identifier generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate_id(&mut self) -> Identifier {
        Identifier::new(encode_base36(rand::random::<u64>()))
    }
}

/// Generates `{prefix}-{n}` identifiers, counting up from 1.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    /// Creates a sequential generator with the given prefix.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&mut self) -> Identifier {
        let id: Identifier = Identifier::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// Renders the low digits of `value` as exactly `ID_LENGTH` base-36 characters.
fn encode_base36(mut value: u64) -> String {
    let mut digits: [u8; ID_LENGTH] = [b'0'; ID_LENGTH];
    for slot in digits.iter_mut().rev() {
        // value % 36 is always < 36
        #[allow(clippy::cast_possible_truncation)]
        let index: usize = (value % 36) as usize;
        *slot = ALPHABET[index];
        value /= 36;
    }
    digits.iter().map(|&b| char::from(b)).collect()
}

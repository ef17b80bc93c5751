//
// Copyright (c) 2026 castellan project (https://github.com/castellan)
//
// This file is part of the Castellan Panel Automation Project
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Throwaway password generation for provisioned accounts.

use rand::Rng;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

pub const DEFAULT_LENGTH: usize = 8;

/// Generates a password of uppercase letters mixed with digits.
///
/// Each position rolls 1..=100 against a chance that grows by 20 per
/// letter emitted; a winning roll emits a digit and resets the chance.
/// The first character is therefore always a letter, and digits never
/// cluster.
pub fn generate(length: usize) -> String {
    let mut rng = rand::rng();
    let mut percent = 0u32;
    let mut out = String::with_capacity(length);
    for _ in 0..length {
        let roll = rng.random_range(1..=100u32);
        if roll < percent {
            percent = 0;
            out.push(DIGITS[rng.random_range(0..DIGITS.len())] as char);
        } else {
            out.push(LETTERS[rng.random_range(0..LETTERS.len())] as char);
        }
        percent += 20;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_respected() {
        assert_eq!(generate(DEFAULT_LENGTH).len(), 8);
        assert_eq!(generate(0).len(), 0);
        assert_eq!(generate(32).len(), 32);
    }

    #[test]
    fn first_character_is_always_a_letter() {
        for _ in 0..50 {
            let pass = generate(DEFAULT_LENGTH);
            assert!(pass.chars().next().unwrap().is_ascii_uppercase());
        }
    }

    #[test]
    fn only_uppercase_letters_and_digits_appear() {
        let pass = generate(256);
        assert!(pass
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}

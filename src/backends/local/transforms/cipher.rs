// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Classical ciphers and spelling alphabets.

fn shift_letter(ch: char, shift: u8) -> char {
    let base = match ch {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return ch,
    };
    (((ch as u8 - base + shift) % 26) + base) as char
}

/// Rotate letters by 13. Self-inverse.
pub fn rot13(input: &str) -> String {
    input.chars().map(|c| shift_letter(c, 13)).collect()
}

/// Shift letters forward by 3.
pub fn caesar_encode(input: &str) -> String {
    input.chars().map(|c| shift_letter(c, 3)).collect()
}

pub fn caesar_decode(input: &str) -> String {
    input.chars().map(|c| shift_letter(c, 23)).collect()
}

/// Mirror the alphabet (a<->z, b<->y, ...). Self-inverse.
pub fn atbash(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            'a'..='z' => (b'z' - (ch as u8 - b'a')) as char,
            'A'..='Z' => (b'Z' - (ch as u8 - b'A')) as char,
            _ => ch,
        })
        .collect()
}

const MORSE_TABLE: &[(char, &str)] = &[
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."),
    ('F', "..-."), ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"),
    ('K', "-.-"), ('L', ".-.."), ('M', "--"), ('N', "-."), ('O', "---"),
    ('P', ".--."), ('Q', "--.-"), ('R', ".-."), ('S', "..."), ('T', "-"),
    ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"), ('Y', "-.--"),
    ('Z', "--.."), ('0', "-----"), ('1', ".----"), ('2', "..---"), ('3', "...--"),
    ('4', "....-"), ('5', "....."), ('6', "-...."), ('7', "--..."), ('8', "---.."),
    ('9', "----."), ('.', ".-.-.-"), (',', "--..--"), ('?', "..--.."), ('!', "-.-.--"),
    ('\'', ".----."), ('/', "-..-."), ('(', "-.--."), (')', "-.--.-"), ('&', ".-..."),
    (':', "---..."), (';', "-.-.-."), ('=', "-...-"), ('+', ".-.-."), ('-', "-....-"),
    ('"', ".-..-."), ('@', ".--.-."),
];

/// Morse in both directions: input made only of `.`, `-`, spaces and `/` is
/// decoded, anything else is encoded.
pub fn morse(input: &str) -> String {
    let looks_like_morse = input.chars().any(|c| c == '.' || c == '-')
        && input.chars().all(|c| matches!(c, '.' | '-' | ' ' | '/' | '\n' | '\r'));

    if looks_like_morse {
        morse_decode(input)
    } else {
        morse_encode(input)
    }
}

/// Letters separated by spaces, words by ` / `. Unknown characters pass through.
pub fn morse_encode(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            word.chars()
                .map(|ch| {
                    let upper = ch.to_ascii_uppercase();
                    MORSE_TABLE
                        .iter()
                        .find(|(c, _)| *c == upper)
                        .map(|(_, code)| code.to_string())
                        .unwrap_or_else(|| ch.to_string())
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Unknown codes decode to `?`.
pub fn morse_decode(input: &str) -> String {
    input
        .split('/')
        .map(|word| {
            word.split_whitespace()
                .map(|code| {
                    MORSE_TABLE
                        .iter()
                        .find(|(_, c)| *c == code)
                        .map(|(ch, _)| *ch)
                        .unwrap_or('?')
                })
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Move the leading consonant cluster of each word to its end and add "ay".
pub fn pig_latin(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let split = word
                .char_indices()
                .find(|(_, c)| "aeiouAEIOU".contains(*c))
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            let (cluster, rest) = word.split_at(split);
            format!("{}{}ay", rest, cluster)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

const NATO: [&str; 26] = [
    "Alfa", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India",
    "Juliett", "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo",
    "Sierra", "Tango", "Uniform", "Victor", "Whiskey", "X-ray", "Yankee", "Zulu",
];

const DIGITS: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

/// Spell text with the NATO alphabet. Encode only.
pub fn nato(input: &str) -> String {
    input
        .chars()
        .filter_map(|ch| match ch {
            'a'..='z' | 'A'..='Z' => {
                Some(NATO[(ch.to_ascii_lowercase() as u8 - b'a') as usize].to_string())
            }
            '0'..='9' => Some(DIGITS[(ch as u8 - b'0') as usize].to_string()),
            ' ' => Some("(space)".to_string()),
            c if c.is_whitespace() => None,
            other => Some(other.to_string()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rot13() {
        assert_eq!(rot13("Hello"), "Uryyb");
        assert_eq!(rot13("Uryyb, Jbeyq!"), "Hello, World!");
    }

    #[test]
    fn test_self_inverse_ciphers() {
        for sample in ["Hello, World!", "", "The Quick Brown Fox 123", "zZaA"] {
            assert_eq!(rot13(&rot13(sample)), sample);
            assert_eq!(atbash(&atbash(sample)), sample);
            assert_eq!(caesar_decode(&caesar_encode(sample)), sample);
        }
    }

    #[test]
    fn test_caesar_and_atbash() {
        assert_eq!(caesar_encode("xyz ABC"), "abc DEF");
        assert_eq!(atbash("abc XYZ"), "zyx CBA");
    }

    #[test]
    fn test_morse_direction_detection() {
        assert_eq!(morse("SOS"), "... --- ...");
        assert_eq!(morse("hi there"), ".... .. / - .... . .-. .");
        assert_eq!(morse(".... .. / - .... . .-. ."), "HI THERE");
        assert_eq!(morse("... ........"), "S?");
    }

    #[test]
    fn test_pig_latin() {
        assert_eq!(pig_latin("hello string apple"), "ellohay ingstray appleay");
        assert_eq!(pig_latin("rhythm"), "rhythmay");
    }

    #[test]
    fn test_nato() {
        assert_eq!(nato("Hi 2"), "Hotel India (space) Two");
        assert_eq!(nato("a-b"), "Alfa - Bravo");
    }
}

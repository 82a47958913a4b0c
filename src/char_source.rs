// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A rewindable character reader over the tokenizer's input.
//!
//! `CharSource` wraps a `Peekable<Chars>` with a single slot of pushback.
//! One character of lookahead/pushback is all the Scanner ever needs; a
//! full buffered reader would be overkill.

use std::str::Chars;

pub struct CharSource<'a> {
    chars: Chars<'a>,
    /// One-slot pushback buffer, filled by `unread`.
    pushed_back: Option<char>,
    /// One-slot lookahead buffer, filled by `peek`.
    peeked: Option<Option<char>>,
}

impl<'a> CharSource<'a> {
    pub fn new(input: &'a str) -> Self {
        CharSource {
            chars: input.chars(),
            pushed_back: None,
            peeked: None,
        }
    }

    /// Look at the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        if let Some(ch) = self.pushed_back {
            return Some(ch);
        }
        if self.peeked.is_none() {
            self.peeked = Some(self.chars.next());
        }
        self.peeked.unwrap()
    }

    /// Consume and return the next character.
    pub fn next(&mut self) -> Option<char> {
        if let Some(ch) = self.pushed_back.take() {
            return Some(ch);
        }
        match self.peeked.take() {
            Some(ch) => ch,
            None => self.chars.next(),
        }
    }

    /// Push a single character back onto the source, so the next `peek`/
    /// `next` observes it again. At most one character of pushback is
    /// supported; calling this twice without an intervening `next` would
    /// overwrite the first pushed character, which no production in this
    /// Scanner ever does.
    pub fn unread(&mut self, ch: char) {
        self.pushed_back = Some(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_consume() {
        let mut s = CharSource::new("ab");
        assert_eq!(s.peek(), Some('a'));
        assert_eq!(s.peek(), Some('a'));
        assert_eq!(s.next(), Some('a'));
        assert_eq!(s.next(), Some('b'));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn unread_is_observed_by_peek_and_next() {
        let mut s = CharSource::new("ab");
        assert_eq!(s.next(), Some('a'));
        s.unread('a');
        assert_eq!(s.peek(), Some('a'));
        assert_eq!(s.next(), Some('a'));
        assert_eq!(s.next(), Some('b'));
    }

    #[test]
    fn empty_source_yields_none() {
        let mut s = CharSource::new("");
        assert_eq!(s.peek(), None);
        assert_eq!(s.next(), None);
    }
}

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

//! The dialect capability: a pluggable classifier the tokenizer consults
//! to turn an uppercased word into a [`KeywordKind`], and to decide which
//! characters may start or continue an identifier.
//!
//! A dialect is a plain value behind `&dyn Dialect` — there is no
//! inheritance hierarchy, just a small trait with three methods.

pub mod generic;
pub mod keywords;

pub use generic::GenericDialect;

use std::fmt;

/// The dialect's classification of an uppercased word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    /// Begins or belongs to a data-manipulation statement (SELECT, INSERT, ...).
    Dml,
    /// Begins or belongs to a data-definition statement (CREATE, ALTER, ...).
    Ddl,
    /// Reserved, but not categorized beyond that (WHERE, AND, NULL, ...).
    Matched,
    /// Not a reserved word at all — an ordinary identifier.
    Unmatched,
}

impl fmt::Display for KeywordKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            KeywordKind::Dml => "DML",
            KeywordKind::Ddl => "DDL",
            KeywordKind::Matched => "MATCHED",
            KeywordKind::Unmatched => "UNMATCHED",
        };
        f.write_str(s)
    }
}

/// A pluggable SQL dialect: classifies words and defines identifier shape.
///
/// Implementations are plain values (typically zero-sized) held by the
/// tokenizer as `&dyn Dialect`; the classifier is consulted once per
/// candidate word, after it has been uppercased.
pub trait Dialect: fmt::Debug {
    /// Returns true if `ch` may start an unquoted identifier.
    fn is_identifier_start(&self, ch: char) -> bool;

    /// Returns true if `ch` may continue an unquoted identifier after the
    /// first character.
    fn is_identifier_part(&self, ch: char) -> bool;

    /// Classify an already-uppercased word.
    fn classify(&self, keyword_upper: &str) -> KeywordKind;
}

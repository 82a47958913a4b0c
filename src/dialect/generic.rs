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

use super::keywords::{DDL_KEYWORDS, DML_KEYWORDS, RESERVED_KEYWORDS};
use super::{Dialect, KeywordKind};

/// The default dialect: ASCII-letter-or-underscore identifiers, and the
/// fixed DML/DDL/reserved keyword tables from [`super::keywords`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericDialect;

impl Dialect for GenericDialect {
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_'
    }

    fn classify(&self, keyword_upper: &str) -> KeywordKind {
        if DML_KEYWORDS.contains(&keyword_upper) {
            KeywordKind::Dml
        } else if DDL_KEYWORDS.contains(&keyword_upper) {
            KeywordKind::Ddl
        } else if RESERVED_KEYWORDS.contains(&keyword_upper) {
            KeywordKind::Matched
        } else {
            KeywordKind::Unmatched
        }
    }
}

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

//! The closed keyword tables consulted by [`GenericDialect`](super::GenericDialect).
//!
//! Words are classified into three buckets before falling back to
//! `Unmatched`: DML, DDL, and "Matched" (reserved, but not categorized any
//! further — clauses, operators-as-words, literals, etc).

/// Keywords that begin a data-manipulation statement.
pub const DML_KEYWORDS: &[&str] = &[
    "SELECT", "INSERT", "UPDATE", "DELETE", "MERGE", "UPSERT", "EXPLAIN",
];

/// Keywords that begin or belong to a data-definition statement.
pub const DDL_KEYWORDS: &[&str] = &[
    "CREATE", "ALTER", "DROP", "TRUNCATE", "RENAME", "TABLE", "VIEW", "INDEX",
    "SCHEMA", "DATABASE", "SEQUENCE", "COLUMN", "CONSTRAINT", "TRIGGER",
];

/// Reserved words that are neither DML nor DDL, but are still reserved
/// (clauses, connectives, literals, join kinds, ...). `classify` returns
/// `KeywordKind::Matched` for these.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "FROM", "WHERE", "JOIN", "INNER", "OUTER", "LEFT", "RIGHT", "FULL",
    "CROSS", "ON", "AND", "OR", "NOT", "NULL", "IS", "AS", "DISTINCT", "ALL",
    "GROUP", "BY", "ORDER", "HAVING", "LIMIT", "OFFSET", "UNION", "INTERSECT",
    "EXCEPT", "IN", "EXISTS", "BETWEEN", "LIKE", "ILIKE", "CASE", "WHEN",
    "THEN", "ELSE", "END", "INTO", "VALUES", "SET", "DEFAULT", "PRIMARY",
    "KEY", "FOREIGN", "REFERENCES", "UNIQUE", "CHECK", "CASCADE", "WITH",
    "RECURSIVE", "ASC", "DESC", "TRUE", "FALSE", "USING",
];

/// The union of every word classified as something other than `Unmatched`.
pub const ALL_KEYWORDS: &[&str] = &[
    "SELECT", "INSERT", "UPDATE", "DELETE", "MERGE", "UPSERT", "EXPLAIN",
    "CREATE", "ALTER", "DROP", "TRUNCATE", "RENAME", "TABLE", "VIEW", "INDEX",
    "SCHEMA", "DATABASE", "SEQUENCE", "COLUMN", "CONSTRAINT", "TRIGGER",
    "FROM", "WHERE", "JOIN", "INNER", "OUTER", "LEFT", "RIGHT", "FULL",
    "CROSS", "ON", "AND", "OR", "NOT", "NULL", "IS", "AS", "DISTINCT", "ALL",
    "GROUP", "BY", "ORDER", "HAVING", "LIMIT", "OFFSET", "UNION", "INTERSECT",
    "EXCEPT", "IN", "EXISTS", "BETWEEN", "LIKE", "ILIKE", "CASE", "WHEN",
    "THEN", "ELSE", "END", "INTO", "VALUES", "SET", "DEFAULT", "PRIMARY",
    "KEY", "FOREIGN", "REFERENCES", "UNIQUE", "CHECK", "CASCADE", "WITH",
    "RECURSIVE", "ASC", "DESC", "TRUE", "FALSE", "USING",
];

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

//! SQL lexical analyzer
//!
//! The front end of a SQL language server: consumes a stream of SQL
//! source characters and emits a sequence of typed, position-tagged
//! tokens for downstream parsing, completion, hover, and diagnostics.
//!
//! Parsing, schema introspection, connection management, and the
//! language-server front end itself are out of scope for this crate; the
//! only collaborator it depends on is a pluggable [`dialect::Dialect`]
//! that classifies words into keyword categories.
//!
//! ```
//! use sql_lexer::dialect::GenericDialect;
//! use sql_lexer::tokenizer::Tokenizer;
//!
//! let dialect = GenericDialect;
//! let mut tokenizer = Tokenizer::new(&dialect, "SELECT 1");
//! let tokens = tokenizer.tokenize().unwrap();
//! assert_eq!(tokens.len(), 3);
//! ```
#![warn(clippy::all)]

mod char_source;
pub mod dialect;
pub mod position;
pub mod tokenizer;

//! Per-language configuration factories.
//!
//! Each factory is a pure function from an optional semantic service handle
//! to a fully validated [`LanguageConfiguration`]. Factories share fragments
//! but never state, so they can run in any order and on any thread.
//!
//! A factory that fails validation is a bug in the grammar tables, not a
//! runtime condition, and panics with the language name and the violated
//! contract.

mod c;
mod css;
mod dart;
mod haskell;
mod html;
mod java;
mod javascript;
mod json;
mod python;
mod swift;

pub use c::c;
pub use css::css;
pub use dart::dart;
pub use haskell::haskell;
pub use html::html;
pub use java::java;
pub use javascript::{javascript, typescript};
pub use json::json;
pub use python::python;
pub use swift::swift;

use crate::comment::BlockComment;
use crate::config::{LanguageConfiguration, LanguageConfigurationBuilder};
use crate::string::Delimiter;

/// `"..."` and `'...'` with backslash escapes, double quote first.
const PLAIN_QUOTES: [Delimiter; 2] = [Delimiter::quote("\""), Delimiter::quote("'")];

/// `/* ... */`, ending at the first `*/`.
const C_BLOCK_COMMENT: BlockComment = BlockComment::new("/*", "*/");

fn finish(builder: LanguageConfigurationBuilder) -> LanguageConfiguration {
    let name = builder.language_name();
    match builder.build() {
        Ok(config) => config,
        Err(err) => panic!("invalid {name} configuration: {err}"),
    }
}

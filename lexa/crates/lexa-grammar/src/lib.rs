//! lexa-grammar - Declarative lexical grammars for syntax highlighting
//!
//! This crate describes the lexical surface of source languages as immutable
//! [`LanguageConfiguration`] values: composable literal grammars plus
//! structural flags and reserved word sets. A highlighting tokenizer probes
//! those grammars to classify spans of text.
//!
//! # Example Usage
//!
//! ```
//! use lexa_grammar::{Language, Probe};
//!
//! let python = Language::Python.configuration();
//! let text = "x = 0x1.2p3 + 1";
//!
//! let number = python.number_grammar().probe(text, 4).unwrap();
//! assert_eq!(number.text(text), "0x1.2p3");
//! assert!(python.is_reserved_identifier("lambda"));
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Character cursor with snapshot and restore
//! - [`probe`] - The [`Probe`] contract and [`Match`]
//! - [`fragment`] - Digit runs, exponents and quoted bodies
//! - [`number`], [`string`], [`comment`], [`identifier`], [`operator`] -
//!   Per-category grammar composers
//! - [`config`] - [`LanguageConfiguration`] and its validating builder
//! - [`languages`] - One factory per supported language
//! - [`registry`] - [`Language`] and the shared, build-once configurations
//! - [`tokenize`] - Reference tokenizer
//!
//! # Resolution Rules
//!
//! Every category is an ordered choice: alternatives are tried in declaration
//! order and the first one that matches is committed to, each extending as
//! far as it can. Orderings that would make an alternative unreachable
//! (a single quote before a triple quote, decimal before `0x`) are rejected
//! when the configuration is built.
//!
//! A literal whose closing delimiter is missing still matches, with
//! [`Match::closed`] set to false. Single-line forms stop before the line
//! break; multi-line forms and block comments run to the end of the buffer.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod comment;
pub mod config;
pub mod cursor;
pub mod error;
pub mod fragment;
pub mod identifier;
pub mod languages;
pub mod number;
pub mod operator;
pub mod probe;
pub mod registry;
pub mod service;
pub mod string;
pub mod tokenize;

// Re-export main types for convenience
pub use config::{LanguageConfiguration, LanguageConfigurationBuilder};
pub use error::{GrammarError, GrammarResult, UnknownLanguage};
pub use probe::{Match, Probe};
pub use registry::{configuration, Language};
pub use service::{LanguageService, ServiceHandle};
pub use tokenize::{tokenize, Token, TokenKind, Tokenizer};

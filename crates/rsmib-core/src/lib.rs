//! rsmib-core: SMIv1/SMIv2 MIB parser library
//!
//! This crate turns MIB source text into a fully-typed abstract syntax
//! tree. It is `no_std` compatible and IO-free; filesystem loading lives
//! in the `rsmib-std` companion crate.
//!
//! # Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST
//!          ^^^^^            ^^^^^^
//!          lexer            parser
//! ```
//!
//! - **Lexer** (`lexer`): Tokenizes MIB source text, tracking positions
//! - **Parser** (`parser`): Builds a [`Module`](ast::Module) from tokens
//!
//! Semantic resolution (OID expansion, cross-module linking, type
//! inheritance) is deliberately out of scope; the AST keeps all
//! cross-references as plain identifiers for a downstream resolver.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ast;
pub mod lexer;
pub mod parser;

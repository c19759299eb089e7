// src/lib.rs

//! Painel administrativo do catálogo de produtos BellaVibe.
//!
//! O painel não tem banco próprio: todas as operações passam pela API REST de
//! produtos através de [`api::ProdutoApi`].

pub mod api;
pub mod config;
pub mod formatacao;
pub mod logging;
pub mod painel;
pub mod produtos;
pub mod shared;

// src/formatacao/mod.rs

//! Funções de apresentação no padrão pt-BR.
//!
//! Todas são puras: recebem valores já normalizados e devolvem texto pronto
//! para exibição. Entradas inválidas nunca causam erro, apenas um aviso no log.

pub mod moeda;
pub mod data;
pub mod texto;
pub mod estoque;

pub use data::formatar_data;
pub use estoque::{classe_estoque, classe_estoque_texto, rotulo_estoque, ClasseEstoque};
pub use moeda::{formatar_moeda, formatar_moeda_texto, MOEDA_ZERO};
pub use texto::{truncar_texto, LIMITE_TEXTO_PADRAO};

// src/api/mod.rs

//! Acesso à API REST de produtos.

pub mod erros;
pub mod produto_api;
pub mod transporte;

pub use erros::{DetalheErro, ErroApi, ErroTransporte};
pub use produto_api::{IdProduto, ProdutoApi, LIMITE_LISTAGEM_PADRAO};
pub use transporte::{Metodo, Requisicao, Resposta, Transporte, TransporteHttp};

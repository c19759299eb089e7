// src/produtos/normalizador.rs

//! Tradução entre os nomes de campo das telas e o esquema canônico da API.
//!
//! É o único lugar que conhece os apelidos `preco` e `estoque`. Quando o campo
//! canônico e o apelido vêm juntos, o canônico vence.

use bigdecimal::BigDecimal;
use serde_json::Value;

use super::produtos_structs::{ProdutoApi, ProdutoCanonico, ProdutoEntrada, ProdutoUi};

/// Formulário -> corpo da requisição. Nunca falha; campos ausentes recebem padrão.
pub fn para_canonico(entrada: &ProdutoEntrada) -> ProdutoCanonico {
    ProdutoCanonico {
        nome: entrada.nome.clone().unwrap_or_default(),
        // Descrição vazia é enviada como null
        descricao: entrada.descricao.clone().filter(|d| !d.is_empty()),
        preco_venda: preco_efetivo(entrada),
        qtd_estoque: estoque_efetivo(entrada),
    }
}

/// Resposta da API -> formato das telas.
pub fn para_ui(produto: ProdutoApi) -> ProdutoUi {
    ProdutoUi {
        id: produto.id,
        nome: produto.nome.unwrap_or_default(),
        descricao: produto.descricao,
        preco_venda: produto.preco_venda.unwrap_or_else(|| BigDecimal::from(0)),
        qtd_estoque: produto.qtd_estoque.unwrap_or(0),
        // Só `false` explícito desativa
        ativo: !matches!(produto.ativo, Some(Value::Bool(false))),
        data_cadastro: produto.data_cadastro,
    }
}

/// Normaliza uma lista inteira devolvida pela API.
pub fn lista_para_ui(produtos: Vec<ProdutoApi>) -> Vec<ProdutoUi> {
    produtos.into_iter().map(para_ui).collect()
}

fn preco_efetivo(entrada: &ProdutoEntrada) -> BigDecimal {
    entrada
        .preco_venda
        .as_ref()
        .or(entrada.preco.as_ref())
        .cloned()
        .unwrap_or_else(|| BigDecimal::from(0))
}

fn estoque_efetivo(entrada: &ProdutoEntrada) -> i64 {
    entrada.qtd_estoque.or(entrada.estoque).unwrap_or(0)
}

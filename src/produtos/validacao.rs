// src/produtos/validacao.rs

use bigdecimal::BigDecimal;
use thiserror::Error;

use super::normalizador::para_canonico;
use super::produtos_structs::{ProdutoCanonico, ProdutoEntrada};

/// Tamanho máximo do nome (mesmo limite da coluna VARCHAR(100) da API).
pub const TAMANHO_MAXIMO_NOME: usize = 100;

/// Casas decimais aceitas no preço.
pub const CASAS_DECIMAIS_PRECO: i64 = 2;

/// Regras violadas por um produto antes do envio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErroValidacao {
    #[error("Nome do produto é obrigatório")]
    NomeObrigatorio,
    #[error("Nome deve ter no máximo 100 caracteres")]
    NomeMuitoLongo,
    #[error("Preço deve ser maior que zero")]
    PrecoNaoPositivo,
    #[error("Preço deve ter no máximo 2 casas decimais")]
    CasasDecimaisExcedidas,
    #[error("Estoque não pode ser negativo")]
    EstoqueNegativo,
}

/// Resultado da validação: erros na ordem em que as regras são avaliadas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultadoValidacao {
    pub valido: bool,
    pub erros: Vec<ErroValidacao>,
}

impl ResultadoValidacao {
    fn de_erros(erros: Vec<ErroValidacao>) -> Self {
        ResultadoValidacao {
            valido: erros.is_empty(),
            erros,
        }
    }

    /// Mensagens legíveis, na ordem das regras.
    pub fn mensagens(&self) -> Vec<String> {
        self.erros.iter().map(ToString::to_string).collect()
    }

    /// Primeira mensagem, para telas que mostram um erro por vez.
    pub fn primeira_mensagem(&self) -> Option<String> {
        self.erros.first().map(ToString::to_string)
    }
}

/// Valida os dados do formulário. Os apelidos são resolvidos pelo normalizador.
pub fn validar(entrada: &ProdutoEntrada) -> ResultadoValidacao {
    validar_canonico(&para_canonico(entrada))
}

/// Valida um produto já no formato canônico.
/// Todas as regras são avaliadas; nenhuma interrompe as seguintes.
pub fn validar_canonico(produto: &ProdutoCanonico) -> ResultadoValidacao {
    let mut erros = Vec::new();

    if produto.nome.trim().is_empty() {
        erros.push(ErroValidacao::NomeObrigatorio);
    } else if produto.nome.chars().count() > TAMANHO_MAXIMO_NOME {
        erros.push(ErroValidacao::NomeMuitoLongo);
    }

    let zero = BigDecimal::from(0);
    if produto.preco_venda <= zero {
        erros.push(ErroValidacao::PrecoNaoPositivo);
    }

    // Truncar em 2 casas não pode alterar o valor
    if produto.preco_venda.with_scale(CASAS_DECIMAIS_PRECO) != produto.preco_venda {
        erros.push(ErroValidacao::CasasDecimaisExcedidas);
    }

    if produto.qtd_estoque < 0 {
        erros.push(ErroValidacao::EstoqueNegativo);
    }

    ResultadoValidacao::de_erros(erros)
}

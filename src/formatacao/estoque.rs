// src/formatacao/estoque.rs

use serde::Serialize;

use crate::shared::numeros::inteiro_de_texto;

/// Até esta quantidade o estoque é considerado baixo.
pub const LIMITE_ESTOQUE_BAIXO: i64 = 10;
/// Até esta quantidade o estoque é considerado médio.
pub const LIMITE_ESTOQUE_MEDIO: i64 = 30;

/// Faixa de estoque usada apenas para o estilo da tela.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClasseEstoque {
    Baixo,
    Medio,
    Bom,
}

impl ClasseEstoque {
    /// Classe CSS correspondente.
    pub const fn classe_css(&self) -> &'static str {
        match self {
            Self::Baixo => "estoque-baixo",
            Self::Medio => "estoque-medio",
            Self::Bom => "estoque-bom",
        }
    }
}

/// Classifica a quantidade em estoque.
pub fn classe_estoque(quantidade: i64) -> ClasseEstoque {
    if quantidade <= LIMITE_ESTOQUE_BAIXO {
        ClasseEstoque::Baixo
    } else if quantidade <= LIMITE_ESTOQUE_MEDIO {
        ClasseEstoque::Medio
    } else {
        ClasseEstoque::Bom
    }
}

/// Classifica uma quantidade digitada; texto não numérico conta como 0.
pub fn classe_estoque_texto(quantidade: &str) -> ClasseEstoque {
    classe_estoque(inteiro_de_texto(quantidade).unwrap_or(0))
}

/// Rótulo exibido na coluna de estoque: "5 unidades".
pub fn rotulo_estoque(quantidade: i64) -> String {
    format!("{} unidades", quantidade)
}

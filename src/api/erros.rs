// src/api/erros.rs

//! Erros das chamadas à API de produtos.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::produtos::validacao::ErroValidacao;

/// Falhas em que nenhuma resposta HTTP foi recebida.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErroTransporte {
    /// Servidor inacessível ou conexão interrompida.
    #[error("sem resposta do servidor: {0}")]
    SemResposta(String),

    /// A requisição excedeu o tempo limite.
    #[error("tempo limite de {0:?} esgotado")]
    TempoEsgotado(Duration),

    /// O cliente HTTP não pôde ser montado.
    #[error("cliente HTTP inválido: {0}")]
    Configuracao(String),
}

/// Item do `detail` em lista (erros de validação da API, status 422).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErroCampo {
    #[serde(default)]
    pub loc: Vec<Value>,
    #[serde(default)]
    pub msg: String,
}

impl ErroCampo {
    /// Nome do campo: segundo item de `loc` (o primeiro é "body").
    pub fn campo(&self) -> String {
        match self.loc.get(1) {
            Some(Value::String(nome)) => nome.clone(),
            Some(outro) => outro.to_string(),
            None => "campo".to_string(),
        }
    }
}

/// Conteúdo do campo `detail` de uma resposta de erro.
#[derive(Debug, Clone, PartialEq)]
pub enum DetalheErro {
    Ausente,
    Texto(String),
    Campos(Vec<ErroCampo>),
}

impl DetalheErro {
    /// Extrai o `detail` do corpo de erro, se houver.
    pub fn de_corpo(corpo: Option<&Value>) -> Self {
        match corpo.and_then(|corpo| corpo.get("detail")) {
            None | Some(Value::Null) => DetalheErro::Ausente,
            Some(Value::String(texto)) => DetalheErro::Texto(texto.clone()),
            Some(Value::Array(itens)) => DetalheErro::Campos(
                itens
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect(),
            ),
            Some(outro) => DetalheErro::Texto(outro.to_string()),
        }
    }

    /// Texto plano do detalhe; a forma em lista vira "campo: mensagem, ...".
    pub fn mensagem(&self) -> Option<String> {
        match self {
            DetalheErro::Ausente => None,
            DetalheErro::Texto(texto) => Some(texto.clone()),
            DetalheErro::Campos(campos) => Some(
                campos
                    .iter()
                    .map(|erro| format!("{}: {}", erro.campo(), erro.msg))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}

/// Erros das operações de [`super::ProdutoApi`].
#[derive(Debug, Error)]
pub enum ErroApi {
    /// Dados rejeitados antes de qualquer chamada de rede.
    #[error("dados inválidos: {}", juntar(.0))]
    Validacao(Vec<ErroValidacao>),

    /// ID que não é um inteiro positivo; nenhuma chamada é feita.
    #[error("ID do produto inválido: {0:?}")]
    IdInvalido(String),

    /// Nenhuma resposta recebida.
    #[error(transparent)]
    Transporte(#[from] ErroTransporte),

    /// O servidor respondeu com status fora da faixa 2xx.
    #[error("API respondeu {status}: {}", .detalhe.mensagem().unwrap_or_default())]
    Http { status: u16, detalhe: DetalheErro },

    /// Resposta 2xx com corpo que não pôde ser lido.
    #[error("resposta inválida da API: {0}")]
    RespostaInvalida(String),
}

impl ErroApi {
    /// Indica resposta 404 da API.
    pub fn eh_nao_encontrado(&self) -> bool {
        matches!(self, ErroApi::Http { status: 404, .. })
    }

    /// Mensagem para exibir ao usuário do painel.
    pub fn mensagem_usuario(&self) -> String {
        match self {
            ErroApi::Validacao(erros) => format!("Erro: {}", juntar(erros)),
            ErroApi::IdInvalido(_) => "ID do produto inválido".to_string(),
            ErroApi::Transporte(_) => {
                "Não foi possível conectar ao servidor. Verifique sua conexão.".to_string()
            }
            ErroApi::Http { status, detalhe } => match status {
                422 => format!(
                    "Erro de validação: {}",
                    detalhe.mensagem().unwrap_or_else(|| "dados inválidos".to_string())
                ),
                400 => format!(
                    "Erro: {}",
                    detalhe.mensagem().unwrap_or_else(|| "Dados inválidos".to_string())
                ),
                409 => "Já existe um produto com este nome.".to_string(),
                404 => "Produto não encontrado no servidor.".to_string(),
                500..=599 => "Erro interno no servidor.".to_string(),
                outro => format!("Erro inesperado do servidor (status {}).", outro),
            },
            ErroApi::RespostaInvalida(_) => "Resposta inválida do servidor.".to_string(),
        }
    }

    /// Status HTTP que o painel devolve para este erro.
    pub fn status_painel(&self) -> u16 {
        match self {
            ErroApi::Validacao(_) | ErroApi::IdInvalido(_) => 400,
            ErroApi::Transporte(ErroTransporte::TempoEsgotado(_)) => 504,
            ErroApi::Transporte(_) | ErroApi::RespostaInvalida(_) => 502,
            ErroApi::Http { status, .. } => *status,
        }
    }
}

fn juntar(erros: &[ErroValidacao]) -> String {
    erros
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Atalho para os resultados das operações da API.
pub type Result<T> = std::result::Result<T, ErroApi>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detalhe_em_texto() {
        let corpo = json!({"detail": "Produto não encontrado"});
        let detalhe = DetalheErro::de_corpo(Some(&corpo));
        assert_eq!(detalhe.mensagem().as_deref(), Some("Produto não encontrado"));
    }

    #[test]
    fn detalhe_em_lista_junta_campo_e_mensagem() {
        let corpo = json!({"detail": [
            {"loc": ["body", "preco_venda"], "msg": "Input should be greater than 0"},
            {"loc": ["body"], "msg": "Field required"}
        ]});
        let detalhe = DetalheErro::de_corpo(Some(&corpo));
        assert_eq!(
            detalhe.mensagem().as_deref(),
            Some("preco_venda: Input should be greater than 0, campo: Field required")
        );
    }

    #[test]
    fn detalhe_ausente() {
        assert_eq!(DetalheErro::de_corpo(None), DetalheErro::Ausente);
        assert_eq!(DetalheErro::de_corpo(Some(&json!({"erro": 1}))), DetalheErro::Ausente);
    }

    #[test]
    fn mensagens_para_o_usuario() {
        let erro = ErroApi::Http {
            status: 422,
            detalhe: DetalheErro::Texto("nome vazio".to_string()),
        };
        assert_eq!(erro.mensagem_usuario(), "Erro de validação: nome vazio");

        let erro = ErroApi::Http {
            status: 409,
            detalhe: DetalheErro::Ausente,
        };
        assert_eq!(erro.mensagem_usuario(), "Já existe um produto com este nome.");

        let erro = ErroApi::from(ErroTransporte::SemResposta("recusada".to_string()));
        assert!(erro.mensagem_usuario().contains("conectar ao servidor"));
        assert_eq!(erro.status_painel(), 502);

        let erro = ErroApi::Validacao(vec![ErroValidacao::NomeObrigatorio, ErroValidacao::EstoqueNegativo]);
        assert_eq!(
            erro.mensagem_usuario(),
            "Erro: Nome do produto é obrigatório, Estoque não pode ser negativo"
        );
        assert_eq!(erro.status_painel(), 400);
    }

    #[test]
    fn nao_encontrado() {
        let erro = ErroApi::Http {
            status: 404,
            detalhe: DetalheErro::Ausente,
        };
        assert!(erro.eh_nao_encontrado());
        assert_eq!(erro.status_painel(), 404);
    }
}

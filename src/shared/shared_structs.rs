// src/shared/shared_structs.rs

use serde::Serialize;

/// Estrutura genérica para padronizar as respostas do painel.
/// 'T' é o tipo do corpo da resposta, que pode ser opcional.
#[derive(Debug, Serialize)]
pub struct GenericResponse<T> {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")] // Não serializa 'body' se for None
    pub body: Option<T>,
}

impl<T> GenericResponse<T> {
    /// Resposta de sucesso com corpo.
    pub fn sucesso(message: impl Into<String>, body: T) -> Self {
        GenericResponse {
            status: "success".to_string(),
            message: message.into(),
            body: Some(body),
        }
    }

    /// Resposta de erro com corpo (ex.: lista de erros de validação).
    pub fn erro_com_corpo(message: impl Into<String>, body: T) -> Self {
        GenericResponse {
            status: "error".to_string(),
            message: message.into(),
            body: Some(body),
        }
    }
}

impl GenericResponse<()> {
    /// Resposta de erro sem corpo.
    pub fn erro(message: impl Into<String>) -> Self {
        GenericResponse {
            status: "error".to_string(),
            message: message.into(),
            body: None,
        }
    }
}

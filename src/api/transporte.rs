// src/api/transporte.rs

//! Transporte HTTP usado pela [`super::ProdutoApi`].
//!
//! O adaptador só conhece [`Transporte`]; a implementação real usa `reqwest`.

use std::time::Duration;

use futures::future::BoxFuture;
use serde_json::Value;
use tracing::debug;

use super::erros::ErroTransporte;

/// Métodos HTTP usados pela API de produtos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metodo {
    Get,
    Post,
    Put,
    Delete,
}

/// Requisição já montada pelo adaptador.
#[derive(Debug, Clone, PartialEq)]
pub struct Requisicao {
    pub metodo: Metodo,
    /// Caminho relativo à URL base, começando com '/'.
    pub caminho: String,
    pub consulta: Vec<(String, String)>,
    pub corpo: Option<Value>,
    pub tempo_limite: Duration,
}

impl Requisicao {
    pub fn nova(metodo: Metodo, caminho: impl Into<String>, tempo_limite: Duration) -> Self {
        Requisicao {
            metodo,
            caminho: caminho.into(),
            consulta: Vec::new(),
            corpo: None,
            tempo_limite,
        }
    }

    pub fn com_consulta(mut self, chave: &str, valor: impl ToString) -> Self {
        self.consulta.push((chave.to_string(), valor.to_string()));
        self
    }

    pub fn com_corpo(mut self, corpo: Value) -> Self {
        self.corpo = Some(corpo);
        self
    }
}

/// Resposta recebida, com qualquer status.
#[derive(Debug, Clone, PartialEq)]
pub struct Resposta {
    pub status: u16,
    /// Corpo JSON; texto que não é JSON vira `Value::String`.
    pub corpo: Option<Value>,
}

impl Resposta {
    pub fn sucesso(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Envia requisições à API. Falhas sem resposta viram [`ErroTransporte`];
/// respostas com status de erro são devolvidas normalmente.
pub trait Transporte: Send + Sync {
    fn enviar(&self, requisicao: Requisicao) -> BoxFuture<'_, Result<Resposta, ErroTransporte>>;
}

/// Transporte real sobre `reqwest`.
#[derive(Debug, Clone)]
pub struct TransporteHttp {
    cliente: reqwest::Client,
    url_base: String,
}

impl TransporteHttp {
    /// Cria o transporte para a URL base da API (ex.: `http://localhost:8000`).
    pub fn new(url_base: impl Into<String>) -> Result<Self, ErroTransporte> {
        let cliente = reqwest::Client::builder()
            .build()
            .map_err(|e| ErroTransporte::Configuracao(format!("falha ao criar cliente HTTP: {e}")))?;

        Ok(TransporteHttp {
            cliente,
            url_base: url_base.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn url_base(&self) -> &str {
        &self.url_base
    }

    async fn executar(&self, requisicao: Requisicao) -> Result<Resposta, ErroTransporte> {
        let url = format!("{}{}", self.url_base, requisicao.caminho);
        debug!("{:?} {}", requisicao.metodo, url);

        let mut construtor = match requisicao.metodo {
            Metodo::Get => self.cliente.get(&url),
            Metodo::Post => self.cliente.post(&url),
            Metodo::Put => self.cliente.put(&url),
            Metodo::Delete => self.cliente.delete(&url),
        }
        .timeout(requisicao.tempo_limite);

        if !requisicao.consulta.is_empty() {
            construtor = construtor.query(&requisicao.consulta);
        }
        if let Some(corpo) = &requisicao.corpo {
            construtor = construtor.json(corpo);
        }

        let tempo_limite = requisicao.tempo_limite;
        let resposta = construtor
            .send()
            .await
            .map_err(|e| classificar(e, tempo_limite))?;

        let status = resposta.status().as_u16();
        let texto = resposta
            .text()
            .await
            .map_err(|e| classificar(e, tempo_limite))?;

        let corpo = if texto.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(&texto).unwrap_or(Value::String(texto)))
        };

        Ok(Resposta { status, corpo })
    }
}

impl Transporte for TransporteHttp {
    fn enviar(&self, requisicao: Requisicao) -> BoxFuture<'_, Result<Resposta, ErroTransporte>> {
        Box::pin(self.executar(requisicao))
    }
}

fn classificar(erro: reqwest::Error, tempo_limite: Duration) -> ErroTransporte {
    if erro.is_timeout() {
        ErroTransporte::TempoEsgotado(tempo_limite)
    } else {
        ErroTransporte::SemResposta(erro.to_string())
    }
}

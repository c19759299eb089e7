// src/painel/painel_state.rs

//! Estado compartilhado do painel.
//!
//! Listagens, buscas e estatísticas podem terminar fora de ordem. Cada
//! atualização recebe uma geração de [`Geracoes`] antes de chamar a API, e
//! [`Publicado::publicar`] só troca o valor exibido quando a geração é mais
//! nova que a já publicada.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};

use super::painel_structs::{Estatisticas, StatusApi, TabelaProdutos};
use crate::api::ProdutoApi;
use crate::config::Configuracao;

/// Contador monotônico de gerações.
#[derive(Debug, Default)]
pub struct Geracoes(AtomicU64);

impl Geracoes {
    /// Reserva a próxima geração (a primeira é 1).
    pub fn proxima(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Valor publicado junto da geração que o produziu.
#[derive(Debug)]
pub struct Publicado<T> {
    conteudo: Mutex<Option<(u64, T)>>,
}

impl<T> Default for Publicado<T> {
    fn default() -> Self {
        Publicado {
            conteudo: Mutex::new(None),
        }
    }
}

impl<T: Clone> Publicado<T> {
    /// Publica `valor` se `geracao` for mais nova que a atual.
    /// Retorna `false` quando o valor chegou atrasado e foi descartado.
    pub fn publicar(&self, geracao: u64, valor: T) -> bool {
        let mut conteudo = self.conteudo.lock().unwrap_or_else(PoisonError::into_inner);
        match conteudo.as_ref() {
            Some((atual, _)) if *atual >= geracao => false,
            _ => {
                *conteudo = Some((geracao, valor));
                true
            }
        }
    }

    pub fn atual(&self) -> Option<T> {
        let conteudo = self.conteudo.lock().unwrap_or_else(PoisonError::into_inner);
        conteudo.as_ref().map(|(_, valor)| valor.clone())
    }

    /// Geração do valor publicado (0 se nada foi publicado).
    pub fn geracao(&self) -> u64 {
        let conteudo = self.conteudo.lock().unwrap_or_else(PoisonError::into_inner);
        conteudo.as_ref().map_or(0, |(geracao, _)| *geracao)
    }
}

/// O que o painel está exibindo no momento.
#[derive(Debug)]
pub struct EstadoPainel {
    pub geracoes: Geracoes,
    pub tabela: Publicado<TabelaProdutos>,
    pub estatisticas: Publicado<Estatisticas>,
    status: RwLock<StatusApi>,
}

impl Default for EstadoPainel {
    fn default() -> Self {
        EstadoPainel {
            geracoes: Geracoes::default(),
            tabela: Publicado::default(),
            estatisticas: Publicado::default(),
            status: RwLock::new(StatusApi::Desconhecido),
        }
    }
}

impl EstadoPainel {
    pub fn status(&self) -> StatusApi {
        *self.status.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn definir_status(&self, status: StatusApi) {
        *self.status.write().unwrap_or_else(PoisonError::into_inner) = status;
    }
}

/// Estado da aplicação, criado uma vez no `main` e compartilhado via `web::Data`.
#[derive(Debug)]
pub struct EstadoApp {
    pub api: ProdutoApi,
    pub config: Configuracao,
    pub painel: EstadoPainel,
}

impl EstadoApp {
    pub fn new(api: ProdutoApi, config: Configuracao) -> Self {
        EstadoApp {
            api,
            config,
            painel: EstadoPainel::default(),
        }
    }
}

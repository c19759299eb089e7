// src/logging.rs

//! Inicialização do `tracing`.
//!
//! `RUST_LOG` tem prioridade sobre o nível configurado.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Error)]
pub enum ErroLogging {
    #[error("nível de log inválido {nivel:?}: {origem}")]
    NivelInvalido {
        nivel: String,
        #[source]
        origem: ParseError,
    },

    #[error("falha ao iniciar logging: {0}")]
    JaIniciado(#[from] TryInitError),
}

/// Instala o subscriber global. Falha se já houver um instalado.
pub fn init_logging(nivel: &str) -> Result<(), ErroLogging> {
    let filtro = match EnvFilter::try_from_default_env() {
        Ok(filtro) => filtro,
        Err(_) => filtro_de_nivel(nivel)?,
    };

    tracing_subscriber::registry()
        .with(filtro)
        .with(fmt::layer().with_target(false))
        .try_init()?;
    Ok(())
}

/// Filtro a partir de diretivas no formato do `RUST_LOG` (`info`, `bellavibe_painel=debug`).
pub fn filtro_de_nivel(nivel: &str) -> Result<EnvFilter, ErroLogging> {
    EnvFilter::try_new(nivel).map_err(|origem| ErroLogging::NivelInvalido {
        nivel: nivel.to_string(),
        origem,
    })
}

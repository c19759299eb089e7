// src/config.rs

use std::time::Duration;

use clap::Parser;

use crate::api::LIMITE_LISTAGEM_PADRAO;

/// Configuração do painel, montada a partir da linha de comando e do ambiente.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuracao {
    /// URL base da API de produtos.
    pub url_api: String,
    pub endereco: String,
    pub tempo_limite: Duration,
    pub tempo_limite_health: Duration,
    pub intervalo_status: Duration,
    pub intervalo_estatisticas: Duration,
    /// Produtos por página na tabela.
    pub limite_listagem: u32,
    /// Produtos lidos para calcular as estatísticas.
    pub limite_estatisticas: u32,
    /// Produtos recentes exibidos no dashboard.
    pub limite_recentes: u32,
    pub nivel_log: String,
}

impl Default for Configuracao {
    fn default() -> Self {
        Configuracao {
            url_api: "http://localhost:8000".to_string(),
            endereco: "127.0.0.1:8080".to_string(),
            tempo_limite: Duration::from_millis(10_000),
            tempo_limite_health: Duration::from_millis(5_000),
            intervalo_status: Duration::from_secs(30),
            intervalo_estatisticas: Duration::from_secs(60),
            limite_listagem: LIMITE_LISTAGEM_PADRAO,
            limite_estatisticas: 1000,
            limite_recentes: 10,
            nivel_log: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "bellavibe-painel", about = "Painel administrativo de produtos BellaVibe")]
pub struct Cli {
    /// URL base da API REST de produtos.
    #[arg(long, env = "PAINEL_URL_API", default_value = "http://localhost:8000")]
    pub url_api: String,

    /// Endereço em que o painel escuta.
    #[arg(long, env = "PAINEL_ENDERECO", default_value = "127.0.0.1:8080")]
    pub endereco: String,

    /// Tempo limite das chamadas à API (ms).
    #[arg(long, env = "PAINEL_TEMPO_LIMITE_MS", default_value_t = 10_000)]
    pub tempo_limite_ms: u64,

    /// Tempo limite do health check (ms).
    #[arg(long, env = "PAINEL_TEMPO_LIMITE_HEALTH_MS", default_value_t = 5_000)]
    pub tempo_limite_health_ms: u64,

    /// Intervalo da verificação de status (s).
    #[arg(long, env = "PAINEL_INTERVALO_STATUS_S", default_value_t = 30)]
    pub intervalo_status_s: u64,

    /// Intervalo de atualização das estatísticas (s).
    #[arg(long, env = "PAINEL_INTERVALO_ESTATISTICAS_S", default_value_t = 60)]
    pub intervalo_estatisticas_s: u64,

    #[arg(long, env = "PAINEL_LIMITE_LISTAGEM", default_value_t = LIMITE_LISTAGEM_PADRAO)]
    pub limite_listagem: u32,

    #[arg(long, env = "PAINEL_LIMITE_ESTATISTICAS", default_value_t = 1000)]
    pub limite_estatisticas: u32,

    #[arg(long, env = "PAINEL_LIMITE_RECENTES", default_value_t = 10)]
    pub limite_recentes: u32,

    /// Nível de log (sobrescrito por RUST_LOG).
    #[arg(long, env = "PAINEL_NIVEL_LOG", default_value = "info")]
    pub nivel_log: String,
}

impl From<Cli> for Configuracao {
    fn from(cli: Cli) -> Self {
        Configuracao {
            url_api: cli.url_api,
            endereco: cli.endereco,
            tempo_limite: Duration::from_millis(cli.tempo_limite_ms),
            tempo_limite_health: Duration::from_millis(cli.tempo_limite_health_ms),
            // Intervalo zero faria o timer disparar sem parar
            intervalo_status: Duration::from_secs(cli.intervalo_status_s.max(1)),
            intervalo_estatisticas: Duration::from_secs(cli.intervalo_estatisticas_s.max(1)),
            limite_listagem: cli.limite_listagem,
            limite_estatisticas: cli.limite_estatisticas,
            limite_recentes: cli.limite_recentes,
            nivel_log: cli.nivel_log,
        }
    }
}

// src/painel/tarefas.rs

//! Atualizações periódicas do dashboard.
//!
//! As duas tarefas rodam enquanto o servidor estiver no ar, cada uma com seu
//! próprio intervalo. Uma falha só é registrada no log: o painel continua
//! exibindo os últimos valores conhecidos.

use actix_web::{rt, web};
use tracing::{debug, warn};

use super::painel_state::EstadoApp;

/// Inicia as tarefas de status e de estatísticas no runtime atual.
pub fn iniciar_tarefas(estado: web::Data<EstadoApp>) {
    let intervalo_status = estado.config.intervalo_status;
    let intervalo_estatisticas = estado.config.intervalo_estatisticas;

    let para_status = estado.clone();
    rt::spawn(async move {
        let mut relogio = rt::time::interval(intervalo_status);
        loop {
            relogio.tick().await;
            let status = para_status.verificar_status().await;
            debug!("Verificação periódica de status: {:?}", status);
        }
    });

    rt::spawn(async move {
        let mut relogio = rt::time::interval(intervalo_estatisticas);
        loop {
            relogio.tick().await;
            if let Err(erro) = estado.atualizar_estatisticas().await {
                warn!("Falha ao atualizar estatísticas: {}", erro);
            }
        }
    });
}

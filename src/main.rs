// src/main.rs

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing::{info, warn};

use bellavibe_painel::api::{ProdutoApi, TransporteHttp};
use bellavibe_painel::config::{Cli, Configuracao};
use bellavibe_painel::logging::init_logging;
use bellavibe_painel::painel::{painel_router, tarefas, EstadoApp};

// Função principal do painel Actix Web.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Configuracao::from(Cli::parse());

    if let Err(e) = init_logging(&config.nivel_log) {
        eprintln!("{}", e);
    }

    // Cliente da API REST de produtos; o painel não acessa banco diretamente
    let transporte = TransporteHttp::new(config.url_api.clone())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let api = ProdutoApi::new(Arc::new(transporte))
        .com_tempos_limite(config.tempo_limite, config.tempo_limite_health);

    if api.testar_conexao().await {
        info!("Conexão com a API estabelecida em {}", config.url_api);
    } else {
        warn!("API não responde em {}. Verifique se o servidor está rodando.", config.url_api);
    }

    let endereco = config.endereco.clone();

    // Estado compartilhado entre as rotas e as tarefas periódicas
    let estado = web::Data::new(EstadoApp::new(api, config));
    tarefas::iniciar_tarefas(estado.clone());

    info!("Iniciando painel BellaVibe em {}...", endereco);

    HttpServer::new(move || {
        App::new()
            .app_data(estado.clone())
            .configure(painel_router::configurar_rotas)
    })
    .bind(endereco)?
    .run()
    .await
}

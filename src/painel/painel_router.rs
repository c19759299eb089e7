// src/painel/painel_router.rs

use actix_web::http::StatusCode;
use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::painel_state::EstadoApp;
use super::painel_structs::{ResultadoMutacao, StatusApi, TabelaProdutos};
use crate::api::ErroApi;
use crate::produtos::produtos_structs::ProdutoEntrada;
use crate::shared::shared_structs::GenericResponse;

#[derive(Debug, Deserialize)]
pub struct ParametrosBusca {
    #[serde(default)]
    pub termo: Option<String>,
}

/// Tela inicial: status da API, estatísticas e produtos recentes.
#[get("/painel")]
pub async fn exibir_dashboard(data: web::Data<EstadoApp>) -> HttpResponse {
    let dashboard = data.montar_dashboard().await;
    HttpResponse::Ok().json(GenericResponse::sucesso("Dashboard carregado.", dashboard))
}

/// Verifica a API agora, sem esperar a tarefa periódica.
#[get("/painel/status")]
pub async fn verificar_status(data: web::Data<EstadoApp>) -> HttpResponse {
    let status = data.verificar_status().await;
    let message = match status {
        StatusApi::Online => "API Online",
        _ => "API Offline",
    };
    HttpResponse::Ok().json(GenericResponse::sucesso(message, json!({ "status": status })))
}

/// Tabela completa de produtos.
#[get("/painel/produtos")]
pub async fn listar_produtos(data: web::Data<EstadoApp>) -> HttpResponse {
    match data.carregar_tabela().await {
        Ok(tabela) => HttpResponse::Ok().json(GenericResponse::sucesso(tabela.mensagem.clone(), tabela)),
        Err(e) => resposta_erro(&e),
    }
}

/// Busca por nome. Precisa ser registrada antes de `/painel/produtos/{id}`.
#[get("/painel/produtos/buscar")]
pub async fn buscar_produtos(
    data: web::Data<EstadoApp>,
    parametros: web::Query<ParametrosBusca>,
) -> HttpResponse {
    let termo = parametros.termo.as_deref().unwrap_or_default();
    match data.pesquisar(termo).await {
        Ok(tabela) => HttpResponse::Ok().json(GenericResponse::sucesso(tabela.mensagem.clone(), tabela)),
        Err(e) => resposta_erro(&e),
    }
}

/// Produto para o formulário de edição.
#[get("/painel/produtos/{id}")]
pub async fn buscar_produto_por_id(data: web::Data<EstadoApp>, id: web::Path<String>) -> HttpResponse {
    match data.api.buscar_por_id(&id).await {
        Ok(produto) => HttpResponse::Ok().json(GenericResponse::sucesso("Produto encontrado.", produto)),
        Err(e) => resposta_erro(&e),
    }
}

#[post("/painel/produtos")]
pub async fn cadastrar_produto(
    data: web::Data<EstadoApp>,
    produto: web::Json<ProdutoEntrada>,
) -> HttpResponse {
    match data.api.criar(&produto).await {
        Ok(criado) => {
            let resultado = ResultadoMutacao {
                produto: Some(criado),
                tabela: recarregar(&data).await,
            };
            HttpResponse::Created().json(GenericResponse::sucesso("Produto criado com sucesso!", resultado))
        }
        Err(e) => resposta_erro(&e),
    }
}

#[put("/painel/produtos/{id}")]
pub async fn atualizar_produto(
    data: web::Data<EstadoApp>,
    id: web::Path<String>,
    produto: web::Json<ProdutoEntrada>,
) -> HttpResponse {
    match data.api.atualizar(&id, &produto).await {
        Ok(atualizado) => {
            let resultado = ResultadoMutacao {
                produto: Some(atualizado),
                tabela: recarregar(&data).await,
            };
            HttpResponse::Ok().json(GenericResponse::sucesso("Produto atualizado com sucesso!", resultado))
        }
        Err(e) => resposta_erro(&e),
    }
}

#[delete("/painel/produtos/{id}")]
pub async fn deletar_produto(data: web::Data<EstadoApp>, id: web::Path<String>) -> HttpResponse {
    match data.api.excluir(&id).await {
        Ok(()) => {
            let resultado = ResultadoMutacao {
                produto: None,
                tabela: recarregar(&data).await,
            };
            HttpResponse::Ok().json(GenericResponse::sucesso("Produto excluído com sucesso!", resultado))
        }
        Err(e) => resposta_erro(&e),
    }
}

/// Registra todas as rotas do painel, na ordem correta.
pub fn configurar_rotas(cfg: &mut web::ServiceConfig) {
    cfg.service(exibir_dashboard)
        .service(verificar_status)
        .service(listar_produtos)
        .service(buscar_produtos)
        .service(buscar_produto_por_id)
        .service(cadastrar_produto)
        .service(atualizar_produto)
        .service(deletar_produto);
}

// Depois de uma alteração a tabela é sempre relida; falha na releitura não desfaz a alteração
async fn recarregar(data: &EstadoApp) -> Option<TabelaProdutos> {
    match data.carregar_tabela().await {
        Ok(tabela) => Some(tabela),
        Err(e) => {
            warn!("Erro ao recarregar produtos: {}", e);
            None
        }
    }
}

fn resposta_erro(erro: &ErroApi) -> HttpResponse {
    let status = StatusCode::from_u16(erro.status_painel()).unwrap_or(StatusCode::BAD_GATEWAY);
    match erro {
        ErroApi::Validacao(erros) => {
            let mensagens: Vec<String> = erros.iter().map(ToString::to_string).collect();
            HttpResponse::build(status).json(GenericResponse::erro_com_corpo(erro.mensagem_usuario(), mensagens))
        }
        _ => HttpResponse::build(status).json(GenericResponse::erro(erro.mensagem_usuario())),
    }
}

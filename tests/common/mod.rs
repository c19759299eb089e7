// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::web;
use futures::future::BoxFuture;
use serde_json::{json, Value};

use bellavibe_painel::api::{ErroTransporte, Metodo, ProdutoApi, Requisicao, Resposta, Transporte};
use bellavibe_painel::config::Configuracao;
use bellavibe_painel::painel::EstadoApp;

/// API de produtos em memória, com o mesmo contrato da API real.
#[derive(Default)]
pub struct BackendFalso {
    produtos: Mutex<Vec<Value>>,
    proximo_id: Mutex<i64>,
    recebidas: Mutex<Vec<Requisicao>>,
    fora_do_ar: AtomicBool,
}

impl BackendFalso {
    pub fn novo() -> Arc<Self> {
        Arc::new(BackendFalso::default())
    }

    pub fn com_produtos(produtos: Vec<Value>) -> Arc<Self> {
        let backend = BackendFalso::default();
        *backend.proximo_id.lock().unwrap() = produtos.len() as i64;
        *backend.produtos.lock().unwrap() = produtos;
        Arc::new(backend)
    }

    pub fn derrubar(&self) {
        self.fora_do_ar.store(true, Ordering::SeqCst);
    }

    pub fn recebidas(&self) -> Vec<Requisicao> {
        self.recebidas.lock().unwrap().clone()
    }

    fn responder(&self, requisicao: &Requisicao) -> Resposta {
        let segmentos: Vec<&str> = requisicao.caminho.trim_matches('/').split('/').collect();
        match (requisicao.metodo, segmentos.as_slice()) {
            (Metodo::Get, [""]) => ok(200, json!({"message": "API BellaVibe"})),
            (Metodo::Get, ["health"]) => ok(200, json!({"status": "ok"})),
            (Metodo::Get, ["produtos"]) => self.listar(requisicao),
            (Metodo::Post, ["produtos"]) => self.criar(requisicao.corpo.clone().unwrap_or_default()),
            (Metodo::Get, ["produtos", "buscar", nome]) => self.buscar(nome),
            (Metodo::Get, ["produtos", id]) => match self.posicao(id) {
                Some(i) => ok(200, self.produtos.lock().unwrap()[i].clone()),
                None => nao_encontrado(),
            },
            (Metodo::Put, ["produtos", id]) => self.atualizar(id, requisicao.corpo.clone().unwrap_or_default()),
            (Metodo::Delete, ["produtos", id]) => match self.posicao(id) {
                Some(i) => {
                    self.produtos.lock().unwrap().remove(i);
                    Resposta { status: 204, corpo: None }
                }
                None => nao_encontrado(),
            },
            _ => ok(405, json!({"detail": "Method Not Allowed"})),
        }
    }

    fn listar(&self, requisicao: &Requisicao) -> Resposta {
        let parametro = |nome: &str| {
            requisicao
                .consulta
                .iter()
                .find(|(chave, _)| chave == nome)
                .and_then(|(_, valor)| valor.parse::<usize>().ok())
        };
        let skip = parametro("skip").unwrap_or(0);
        let limite = parametro("limit").unwrap_or(100);

        let produtos = self.produtos.lock().unwrap();
        let pagina: Vec<Value> = produtos.iter().skip(skip).take(limite).cloned().collect();
        ok(200, Value::Array(pagina))
    }

    fn criar(&self, corpo: Value) -> Resposta {
        let mut produtos = self.produtos.lock().unwrap();
        if produtos.iter().any(|p| p["nome"] == corpo["nome"]) {
            return ok(409, json!({"detail": "Produto já cadastrado"}));
        }

        let mut id = self.proximo_id.lock().unwrap();
        *id += 1;
        let produto = json!({
            "id": *id,
            "nome": corpo["nome"],
            "descricao": corpo["descricao"],
            "preco_venda": corpo["preco_venda"],
            "qtd_estoque": corpo["qtd_estoque"],
            "ativo": true,
            "data_cadastro": "2024-05-01T09:30:00"
        });
        produtos.push(produto.clone());
        ok(201, produto)
    }

    fn atualizar(&self, id: &str, corpo: Value) -> Resposta {
        let posicao = match self.posicao(id) {
            Some(i) => i,
            None => return nao_encontrado(),
        };
        let mut produtos = self.produtos.lock().unwrap();
        let produto = &mut produtos[posicao];
        for campo in ["nome", "descricao", "preco_venda", "qtd_estoque"] {
            produto[campo] = corpo[campo].clone();
        }
        ok(200, produto.clone())
    }

    fn buscar(&self, nome: &str) -> Resposta {
        let termo = urlencoding::decode(nome).unwrap().to_lowercase();
        let produtos = self.produtos.lock().unwrap();
        let encontrados: Vec<Value> = produtos
            .iter()
            .filter(|p| p["nome"].as_str().unwrap_or_default().to_lowercase().contains(&termo))
            .cloned()
            .collect();
        if encontrados.is_empty() {
            nao_encontrado()
        } else {
            ok(200, Value::Array(encontrados))
        }
    }

    fn posicao(&self, id: &str) -> Option<usize> {
        let id: i64 = id.parse().ok()?;
        self.produtos.lock().unwrap().iter().position(|p| p["id"] == id)
    }
}

impl Transporte for BackendFalso {
    fn enviar(&self, requisicao: Requisicao) -> BoxFuture<'_, Result<Resposta, ErroTransporte>> {
        self.recebidas.lock().unwrap().push(requisicao.clone());
        let resultado = if self.fora_do_ar.load(Ordering::SeqCst) {
            Err(ErroTransporte::SemResposta("conexão recusada".to_string()))
        } else {
            Ok(self.responder(&requisicao))
        };
        Box::pin(async move { resultado })
    }
}

fn ok(status: u16, corpo: Value) -> Resposta {
    Resposta {
        status,
        corpo: Some(corpo),
    }
}

fn nao_encontrado() -> Resposta {
    ok(404, json!({"detail": "Produto não encontrado"}))
}

pub fn estado_com(transporte: Arc<dyn Transporte>) -> web::Data<EstadoApp> {
    estado_com_config(transporte, Configuracao::default())
}

pub fn estado_com_config(transporte: Arc<dyn Transporte>, config: Configuracao) -> web::Data<EstadoApp> {
    web::Data::new(EstadoApp::new(ProdutoApi::new(transporte), config))
}

// src/api/produto_api.rs

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{error, warn};

use super::erros::{DetalheErro, ErroApi, Result};
use super::transporte::{Metodo, Requisicao, Transporte};
use crate::produtos::normalizador::{lista_para_ui, para_canonico, para_ui};
use crate::produtos::produtos_structs::{ProdutoApi as ProdutoRespostaApi, ProdutoEntrada, ProdutoUi};
use crate::produtos::validacao::validar_canonico;

/// Tempo limite das chamadas comuns.
pub const TEMPO_LIMITE_PADRAO: Duration = Duration::from_millis(10_000);
/// Tempo limite do health check, mais curto.
pub const TEMPO_LIMITE_HEALTH: Duration = Duration::from_millis(5_000);
/// Quantidade padrão de produtos por listagem.
pub const LIMITE_LISTAGEM_PADRAO: u32 = 100;

/// ID de produto já verificado: inteiro positivo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdProduto(u64);

impl IdProduto {
    /// Interpreta o ID vindo da tela ou da URL.
    pub fn analisar(valor: &str) -> Result<Self> {
        match valor.trim().parse::<u64>() {
            Ok(id) if id > 0 => Ok(IdProduto(id)),
            _ => Err(ErroApi::IdInvalido(valor.to_string())),
        }
    }

    pub fn valor(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for IdProduto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Adaptador da API REST de produtos.
///
/// Valida e normaliza antes de enviar, e normaliza as respostas para o formato
/// das telas. Não repete chamadas que falharam.
#[derive(Clone)]
pub struct ProdutoApi {
    transporte: Arc<dyn Transporte>,
    tempo_limite: Duration,
    tempo_limite_health: Duration,
}

impl ProdutoApi {
    pub fn new(transporte: Arc<dyn Transporte>) -> Self {
        ProdutoApi {
            transporte,
            tempo_limite: TEMPO_LIMITE_PADRAO,
            tempo_limite_health: TEMPO_LIMITE_HEALTH,
        }
    }

    /// Substitui os tempos limite padrão (chamadas comuns e health check).
    pub fn com_tempos_limite(mut self, padrao: Duration, health: Duration) -> Self {
        self.tempo_limite = padrao;
        self.tempo_limite_health = health;
        self
    }

    /// GET /produtos?skip=&limit=
    pub async fn listar(&self, skip: u32, limite: u32) -> Result<Vec<ProdutoUi>> {
        let requisicao = Requisicao::nova(Metodo::Get, "/produtos", self.tempo_limite)
            .com_consulta("skip", skip)
            .com_consulta("limit", limite);

        let resultado = self.executar(requisicao).await.and_then(decodificar_lista);
        resultado.inspect_err(|erro| error!("Erro ao listar produtos: {}", erro))
    }

    /// POST /produtos, depois de validar os dados.
    pub async fn criar(&self, produto: &ProdutoEntrada) -> Result<ProdutoUi> {
        let resultado = async {
            let corpo = corpo_validado(produto)?;
            let requisicao = Requisicao::nova(Metodo::Post, "/produtos", self.tempo_limite).com_corpo(corpo);
            decodificar_produto(self.executar(requisicao).await?)
        }
        .await;

        resultado.inspect_err(|erro| error!("Erro ao criar produto: {}", erro))
    }

    /// GET /produtos/{id}
    pub async fn buscar_por_id(&self, id: &str) -> Result<ProdutoUi> {
        let resultado = async {
            let id = IdProduto::analisar(id)?;
            let requisicao = Requisicao::nova(Metodo::Get, format!("/produtos/{}", id), self.tempo_limite);
            decodificar_produto(self.executar(requisicao).await?)
        }
        .await;

        resultado.inspect_err(|erro| error!("Erro ao buscar produto ID {}: {}", id, erro))
    }

    /// PUT /produtos/{id}, substituindo nome, descrição, preço e estoque.
    pub async fn atualizar(&self, id: &str, produto: &ProdutoEntrada) -> Result<ProdutoUi> {
        let resultado = async {
            let id = IdProduto::analisar(id)?;
            let corpo = corpo_validado(produto)?;
            let requisicao =
                Requisicao::nova(Metodo::Put, format!("/produtos/{}", id), self.tempo_limite).com_corpo(corpo);
            decodificar_produto(self.executar(requisicao).await?)
        }
        .await;

        resultado.inspect_err(|erro| error!("Erro ao atualizar produto ID {}: {}", id, erro))
    }

    /// DELETE /produtos/{id}
    pub async fn excluir(&self, id: &str) -> Result<()> {
        let resultado = async {
            let id = IdProduto::analisar(id)?;
            let requisicao = Requisicao::nova(Metodo::Delete, format!("/produtos/{}", id), self.tempo_limite);
            self.executar(requisicao).await.map(|_| ())
        }
        .await;

        resultado.inspect_err(|erro| error!("Erro ao excluir produto ID {}: {}", id, erro))
    }

    /// GET /produtos/buscar/{nome}. Termo em branco devolve lista vazia sem chamar a API.
    pub async fn buscar_por_nome(&self, termo: &str) -> Result<Vec<ProdutoUi>> {
        let termo = termo.trim();
        if termo.is_empty() {
            return Ok(Vec::new());
        }

        let caminho = format!("/produtos/buscar/{}", urlencoding::encode(termo));
        let requisicao = Requisicao::nova(Metodo::Get, caminho, self.tempo_limite);

        let resultado = self.executar(requisicao).await.and_then(decodificar_lista);
        resultado.inspect_err(|erro| error!("Erro ao buscar produtos por nome {:?}: {}", termo, erro))
    }

    /// GET /health com o tempo limite curto. Devolve o corpo da resposta.
    pub async fn health(&self) -> Result<Value> {
        let requisicao = Requisicao::nova(Metodo::Get, "/health", self.tempo_limite_health);
        let resultado = self
            .executar(requisicao)
            .await
            .map(|corpo| corpo.unwrap_or(Value::Null));

        resultado.inspect_err(|erro| error!("Erro no health check: {}", erro))
    }

    /// GET / com o tempo limite curto. Nunca falha: devolve se a API respondeu.
    pub async fn testar_conexao(&self) -> bool {
        let requisicao = Requisicao::nova(Metodo::Get, "/", self.tempo_limite_health);
        match self.executar(requisicao).await {
            Ok(_) => true,
            Err(erro) => {
                warn!("Falha na conexão com a API: {}", erro);
                false
            }
        }
    }

    // Envia e separa respostas 2xx (corpo) das demais (erro HTTP)
    async fn executar(&self, requisicao: Requisicao) -> Result<Option<Value>> {
        let resposta = self.transporte.enviar(requisicao).await?;

        if resposta.sucesso() {
            Ok(resposta.corpo)
        } else {
            Err(ErroApi::Http {
                status: resposta.status,
                detalhe: DetalheErro::de_corpo(resposta.corpo.as_ref()),
            })
        }
    }
}

impl fmt::Debug for ProdutoApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProdutoApi")
            .field("tempo_limite", &self.tempo_limite)
            .field("tempo_limite_health", &self.tempo_limite_health)
            .finish_non_exhaustive()
    }
}

// Normaliza e valida; só devolve o corpo se nenhuma regra foi violada
fn corpo_validado(produto: &ProdutoEntrada) -> Result<Value> {
    let canonico = para_canonico(produto);
    let validacao = validar_canonico(&canonico);
    if !validacao.valido {
        return Err(ErroApi::Validacao(validacao.erros));
    }
    Ok(json!({
        "nome": canonico.nome,
        "descricao": canonico.descricao,
        "preco_venda": canonico.preco_venda.to_string(),
        "qtd_estoque": canonico.qtd_estoque,
    }))
}

fn decodificar<T: DeserializeOwned>(corpo: Option<Value>) -> Result<T> {
    let corpo = corpo.ok_or_else(|| ErroApi::RespostaInvalida("corpo vazio".to_string()))?;
    serde_json::from_value(corpo).map_err(|e| ErroApi::RespostaInvalida(e.to_string()))
}

fn decodificar_produto(corpo: Option<Value>) -> Result<ProdutoUi> {
    decodificar::<ProdutoRespostaApi>(corpo).map(para_ui)
}

fn decodificar_lista(corpo: Option<Value>) -> Result<Vec<ProdutoUi>> {
    decodificar::<Vec<ProdutoRespostaApi>>(corpo).map(lista_para_ui)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::erros::ErroTransporte;
    use crate::api::transporte::Resposta;
    use crate::produtos::validacao::ErroValidacao;
    use bigdecimal::BigDecimal;
    use futures::executor::block_on;
    use futures::future::BoxFuture;
    use std::collections::VecDeque;
    use std::str::FromStr;
    use std::sync::Mutex;

    #[derive(Default)]
    struct TransporteFalso {
        respostas: Mutex<VecDeque<std::result::Result<Resposta, ErroTransporte>>>,
        recebidas: Mutex<Vec<Requisicao>>,
    }

    impl TransporteFalso {
        fn com(respostas: Vec<std::result::Result<Resposta, ErroTransporte>>) -> Arc<Self> {
            Arc::new(TransporteFalso {
                respostas: Mutex::new(respostas.into()),
                recebidas: Mutex::default(),
            })
        }

        fn recebidas(&self) -> Vec<Requisicao> {
            self.recebidas.lock().unwrap().clone()
        }
    }

    impl Transporte for TransporteFalso {
        fn enviar(&self, requisicao: Requisicao) -> BoxFuture<'_, std::result::Result<Resposta, ErroTransporte>> {
            self.recebidas.lock().unwrap().push(requisicao);
            let resposta = self
                .respostas
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ErroTransporte::SemResposta("sem resposta roteirizada".to_string())));
            Box::pin(async move { resposta })
        }
    }

    fn ok(status: u16, corpo: Value) -> std::result::Result<Resposta, ErroTransporte> {
        Ok(Resposta {
            status,
            corpo: Some(corpo),
        })
    }

    fn entrada(valor: Value) -> ProdutoEntrada {
        serde_json::from_value(valor).unwrap()
    }

    #[test]
    fn id_produto() {
        assert_eq!(IdProduto::analisar("42").unwrap().valor(), 42);
        assert_eq!(IdProduto::analisar(" 7 ").unwrap().to_string(), "7");
        for invalido in ["", "0", "-1", "abc", "1.5"] {
            assert!(matches!(IdProduto::analisar(invalido), Err(ErroApi::IdInvalido(_))));
        }
    }

    #[test]
    fn listar_envia_paginacao_e_normaliza() {
        let falso = TransporteFalso::com(vec![ok(
            200,
            json!([{"id": 1, "nome": "Base", "preco_venda": "39.90", "qtd_estoque": 12}]),
        )]);
        let api = ProdutoApi::new(falso.clone());

        let produtos = block_on(api.listar(0, 100)).unwrap();

        assert_eq!(produtos.len(), 1);
        assert_eq!(produtos[0].preco(), &BigDecimal::from_str("39.9").unwrap());
        assert_eq!(produtos[0].estoque(), 12);

        let enviada = &falso.recebidas()[0];
        assert_eq!(enviada.metodo, Metodo::Get);
        assert_eq!(enviada.caminho, "/produtos");
        assert_eq!(
            enviada.consulta,
            vec![("skip".to_string(), "0".to_string()), ("limit".to_string(), "100".to_string())]
        );
        assert_eq!(enviada.tempo_limite, TEMPO_LIMITE_PADRAO);
    }

    #[test]
    fn criar_invalido_nao_chama_a_rede() {
        let falso = TransporteFalso::com(vec![]);
        let api = ProdutoApi::new(falso.clone());

        let erro = block_on(api.criar(&entrada(json!({"preco": 0})))).unwrap_err();

        match erro {
            ErroApi::Validacao(erros) => assert_eq!(
                erros,
                vec![ErroValidacao::NomeObrigatorio, ErroValidacao::PrecoNaoPositivo]
            ),
            outro => panic!("erro inesperado: {outro:?}"),
        }
        assert!(falso.recebidas().is_empty());
    }

    #[test]
    fn criar_envia_formato_canonico() {
        let falso = TransporteFalso::com(vec![ok(
            201,
            json!({"id": 9, "nome": "Widget", "preco_venda": "19.90", "qtd_estoque": 5, "data_cadastro": "2024-05-01T09:00:00"}),
        )]);
        let api = ProdutoApi::new(falso.clone());

        let criado = block_on(api.criar(&entrada(json!({"nome": "Widget", "preco": 19.9, "estoque": 5})))).unwrap();

        assert_eq!(criado.id, Some(9));
        let corpo = falso.recebidas()[0].corpo.clone().unwrap();
        assert_eq!(
            corpo,
            json!({"nome": "Widget", "descricao": null, "preco_venda": "19.9", "qtd_estoque": 5})
        );
    }

    #[test]
    fn corpo_validado_usa_texto_canonico_do_preco() {
        let corpo = corpo_validado(&entrada(json!({
            "nome": "Creme",
            "descricao": "Hidratante",
            "preco": "1,5e1",
            "estoque": "3"
        })))
        .unwrap();
        assert_eq!(
            corpo,
            json!({"nome": "Creme", "descricao": "Hidratante", "preco_venda": "15", "qtd_estoque": 3})
        );

        let erro = corpo_validado(&entrada(json!({"nome": "Creme", "preco": "1e999999999"}))).unwrap_err();
        assert!(matches!(erro, ErroApi::Validacao(erros) if erros == vec![ErroValidacao::PrecoNaoPositivo]));
    }

    #[test]
    fn id_invalido_nao_chama_a_rede() {
        let falso = TransporteFalso::com(vec![]);
        let api = ProdutoApi::new(falso.clone());
        let produto = entrada(json!({"nome": "X", "preco": 1}));

        assert!(matches!(block_on(api.buscar_por_id("abc")), Err(ErroApi::IdInvalido(_))));
        assert!(matches!(block_on(api.atualizar("0", &produto)), Err(ErroApi::IdInvalido(_))));
        assert!(matches!(block_on(api.excluir("-3")), Err(ErroApi::IdInvalido(_))));
        assert!(falso.recebidas().is_empty());
    }

    #[test]
    fn atualizar_usa_put_no_id() {
        let falso = TransporteFalso::com(vec![ok(200, json!({"id": 4, "nome": "Novo", "preco_venda": 5, "qtd_estoque": 1}))]);
        let api = ProdutoApi::new(falso.clone());

        let atualizado = block_on(api.atualizar("4", &entrada(json!({"nome": "Novo", "preco_venda": 5, "qtd_estoque": 1}))))
            .unwrap();

        assert_eq!(atualizado.nome, "Novo");
        let enviada = &falso.recebidas()[0];
        assert_eq!(enviada.metodo, Metodo::Put);
        assert_eq!(enviada.caminho, "/produtos/4");
    }

    #[test]
    fn excluir_aceita_204_sem_corpo() {
        let falso = TransporteFalso::com(vec![Ok(Resposta { status: 204, corpo: None })]);
        let api = ProdutoApi::new(falso.clone());

        assert!(block_on(api.excluir("12")).is_ok());
        assert_eq!(falso.recebidas()[0].metodo, Metodo::Delete);
    }

    #[test]
    fn erro_http_preserva_status_e_detalhe() {
        let falso = TransporteFalso::com(vec![ok(404, json!({"detail": "Produto 3 não encontrado"}))]);
        let api = ProdutoApi::new(falso);

        let erro = block_on(api.buscar_por_id("3")).unwrap_err();
        assert!(erro.eh_nao_encontrado());
        match erro {
            ErroApi::Http { detalhe, .. } => {
                assert_eq!(detalhe.mensagem().as_deref(), Some("Produto 3 não encontrado"))
            }
            outro => panic!("erro inesperado: {outro:?}"),
        }
    }

    #[test]
    fn falha_de_transporte_propaga_sem_repetir() {
        let falso = TransporteFalso::com(vec![Err(ErroTransporte::TempoEsgotado(TEMPO_LIMITE_PADRAO))]);
        let api = ProdutoApi::new(falso.clone());

        let erro = block_on(api.listar(0, 10)).unwrap_err();
        assert!(matches!(erro, ErroApi::Transporte(ErroTransporte::TempoEsgotado(_))));
        assert_eq!(falso.recebidas().len(), 1);
    }

    #[test]
    fn busca_por_nome_codifica_termo() {
        let falso = TransporteFalso::com(vec![ok(200, json!([]))]);
        let api = ProdutoApi::new(falso.clone());

        let encontrados = block_on(api.buscar_por_nome(" pó compacto ")).unwrap();

        assert!(encontrados.is_empty());
        assert_eq!(falso.recebidas()[0].caminho, "/produtos/buscar/p%C3%B3%20compacto");
    }

    #[test]
    fn busca_em_branco_nao_chama_a_rede() {
        let falso = TransporteFalso::com(vec![]);
        let api = ProdutoApi::new(falso.clone());

        assert!(block_on(api.buscar_por_nome("   ")).unwrap().is_empty());
        assert!(falso.recebidas().is_empty());
    }

    #[test]
    fn health_usa_tempo_limite_curto() {
        let falso = TransporteFalso::com(vec![ok(200, json!({"status": "ok"}))]);
        let api = ProdutoApi::new(falso.clone());

        assert_eq!(block_on(api.health()).unwrap()["status"], "ok");
        let enviada = &falso.recebidas()[0];
        assert_eq!(enviada.caminho, "/health");
        assert_eq!(enviada.tempo_limite, TEMPO_LIMITE_HEALTH);
    }

    #[test]
    fn testar_conexao_nunca_falha() {
        let falso = TransporteFalso::com(vec![ok(200, json!({})), ok(500, json!({}))]);
        let api = ProdutoApi::new(falso);

        assert!(block_on(api.testar_conexao()));
        assert!(!block_on(api.testar_conexao()));
        assert!(!block_on(api.testar_conexao()));
    }

    #[test]
    fn lista_que_nao_e_array_e_resposta_invalida() {
        let falso = TransporteFalso::com(vec![ok(200, json!({"produtos": []}))]);
        let api = ProdutoApi::new(falso);

        assert!(matches!(block_on(api.listar(0, 10)), Err(ErroApi::RespostaInvalida(_))));
    }
}

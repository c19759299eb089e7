// src/painel/painel_operacoes.rs

use tracing::{debug, info, warn};

use super::painel_state::EstadoApp;
use super::painel_structs::{linhas, Dashboard, Estatisticas, StatusApi, TabelaProdutos, VisaoLinha};
use crate::api::erros::Result;

impl EstadoApp {
    /// Recarrega a tabela completa e devolve a tabela exibida.
    ///
    /// Se uma atualização mais nova já foi publicada, a resposta desta chamada
    /// é descartada e a mais nova é devolvida no lugar.
    pub async fn carregar_tabela(&self) -> Result<TabelaProdutos> {
        let geracao = self.painel.geracoes.proxima();

        let tabela = match self.api.listar(0, self.config.limite_listagem).await {
            Ok(produtos) => {
                let mensagem = if produtos.is_empty() {
                    "Nenhum produto cadastrado no sistema.".to_string()
                } else {
                    format!("{} produtos carregados com sucesso!", produtos.len())
                };
                TabelaProdutos::nova(None, &produtos, mensagem)
            }
            Err(erro) if erro.eh_nao_encontrado() => {
                TabelaProdutos::nova(None, &[], "Nenhum produto cadastrado no sistema.")
            }
            Err(erro) => return Err(erro),
        };

        Ok(self.publicar_tabela(geracao, tabela))
    }

    /// Busca por nome. Termo em branco recarrega a tabela completa.
    /// Devolve a tabela exibida, como [`EstadoApp::carregar_tabela`].
    pub async fn pesquisar(&self, termo: &str) -> Result<TabelaProdutos> {
        let termo = termo.trim();
        if termo.is_empty() {
            return self.carregar_tabela().await;
        }

        let geracao = self.painel.geracoes.proxima();

        let tabela = match self.api.buscar_por_nome(termo).await {
            Ok(produtos) => {
                let mensagem = format!("Encontrados {} produtos para \"{}\"", produtos.len(), termo);
                TabelaProdutos::nova(Some(termo.to_string()), &produtos, mensagem)
            }
            Err(erro) if erro.eh_nao_encontrado() => TabelaProdutos::nova(
                Some(termo.to_string()),
                &[],
                format!("Nenhum produto encontrado para \"{}\"", termo),
            ),
            Err(erro) => return Err(erro),
        };

        Ok(self.publicar_tabela(geracao, tabela))
    }

    /// Recalcula as estatísticas do dashboard e devolve as exibidas.
    pub async fn atualizar_estatisticas(&self) -> Result<Estatisticas> {
        let geracao = self.painel.geracoes.proxima();
        let produtos = self.api.listar(0, self.config.limite_estatisticas).await?;
        let estatisticas = Estatisticas::calcular(&produtos);

        if self.painel.estatisticas.publicar(geracao, estatisticas.clone()) {
            return Ok(estatisticas);
        }
        debug!("Estatísticas da geração {} descartadas: já existe uma mais nova", geracao);
        Ok(self.painel.estatisticas.atual().unwrap_or(estatisticas))
    }

    /// Consulta o health check e guarda o resultado.
    pub async fn verificar_status(&self) -> StatusApi {
        let status = match self.api.health().await {
            Ok(_) => StatusApi::Online,
            Err(_) => StatusApi::Offline,
        };

        if self.painel.status() != status {
            info!("Status da API: {:?}", status);
        }
        self.painel.definir_status(status);
        status
    }

    /// Monta a tela inicial. Falhas parciais não impedem a exibição do restante.
    pub async fn montar_dashboard(&self) -> Dashboard {
        let (status_api, estatisticas, recentes) = futures::join!(
            self.verificar_status(),
            self.atualizar_estatisticas(),
            self.api.listar(0, self.config.limite_recentes),
        );

        let estatisticas = match estatisticas {
            Ok(estatisticas) => Some(estatisticas),
            Err(erro) => {
                warn!("Mantendo estatísticas anteriores: {}", erro);
                self.painel.estatisticas.atual()
            }
        };
        let recentes = match recentes {
            Ok(produtos) => linhas(&produtos, VisaoLinha::Resumida),
            Err(erro) => {
                warn!("Produtos recentes indisponíveis: {}", erro);
                Vec::new()
            }
        };

        Dashboard {
            status_api,
            estatisticas,
            recentes,
        }
    }

    /// Tabela em exibição no painel, se alguma já foi carregada.
    pub fn tabela_exibida(&self) -> Option<TabelaProdutos> {
        self.painel.tabela.atual()
    }

    fn publicar_tabela(&self, geracao: u64, tabela: TabelaProdutos) -> TabelaProdutos {
        if self.painel.tabela.publicar(geracao, tabela.clone()) {
            return tabela;
        }
        debug!("Tabela da geração {} descartada: já existe uma mais nova", geracao);
        self.tabela_exibida().unwrap_or(tabela)
    }
}

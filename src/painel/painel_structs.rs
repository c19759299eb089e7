// src/painel/painel_structs.rs

use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::formatacao::{
    classe_estoque, formatar_data, formatar_moeda, rotulo_estoque, truncar_texto, ClasseEstoque,
    LIMITE_TEXTO_PADRAO,
};
use crate::produtos::produtos_structs::ProdutoUi;

/// Quanto do texto de cada produto aparece na linha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisaoLinha {
    /// Dashboard: nome até 30 e descrição até 40 caracteres.
    Resumida,
    /// Tabela de produtos: nome inteiro e descrição até 50.
    Completa,
}

impl VisaoLinha {
    fn limite_nome(self) -> Option<usize> {
        match self {
            VisaoLinha::Resumida => Some(30),
            VisaoLinha::Completa => None,
        }
    }

    fn limite_descricao(self) -> usize {
        match self {
            VisaoLinha::Resumida => 40,
            VisaoLinha::Completa => LIMITE_TEXTO_PADRAO,
        }
    }
}

/// Linha de produto pronta para exibição.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinhaProduto {
    pub id: Option<i64>,
    pub nome: String,
    pub descricao: String,
    pub preco_formatado: String,
    pub estoque: i64,
    pub rotulo_estoque: String,
    pub classe_estoque: ClasseEstoque,
    pub classe_css: &'static str,
    pub ativo: bool,
    pub data_cadastro: String,
}

impl LinhaProduto {
    pub fn de_produto(produto: &ProdutoUi, visao: VisaoLinha) -> Self {
        let nome = match visao.limite_nome() {
            Some(limite) => truncar_texto(Some(&produto.nome), limite),
            None => produto.nome.clone(),
        };
        let classe = classe_estoque(produto.qtd_estoque);

        LinhaProduto {
            id: produto.id,
            nome,
            descricao: truncar_texto(produto.descricao.as_deref(), visao.limite_descricao()),
            preco_formatado: formatar_moeda(&produto.preco_venda),
            estoque: produto.qtd_estoque,
            rotulo_estoque: rotulo_estoque(produto.qtd_estoque),
            classe_estoque: classe,
            classe_css: classe.classe_css(),
            ativo: produto.ativo,
            data_cadastro: formatar_data(produto.data_cadastro.as_deref(), false),
        }
    }
}

pub fn linhas(produtos: &[ProdutoUi], visao: VisaoLinha) -> Vec<LinhaProduto> {
    produtos.iter().map(|p| LinhaProduto::de_produto(p, visao)).collect()
}

/// Totais exibidos nos cartões do painel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estatisticas {
    pub total_produtos: usize,
    /// Produtos com estoque baixo (classe `Baixo`).
    pub estoque_baixo: usize,
    /// Soma de preço × estoque.
    pub valor_total_estoque: BigDecimal,
    pub valor_total_formatado: String,
}

impl Estatisticas {
    pub fn calcular(produtos: &[ProdutoUi]) -> Self {
        let estoque_baixo = produtos
            .iter()
            .filter(|p| classe_estoque(p.qtd_estoque) == ClasseEstoque::Baixo)
            .count();
        let valor_total_estoque = produtos
            .iter()
            .fold(BigDecimal::from(0), |total, p| total + &p.preco_venda * BigDecimal::from(p.qtd_estoque));

        Estatisticas {
            total_produtos: produtos.len(),
            estoque_baixo,
            valor_total_formatado: formatar_moeda(&valor_total_estoque),
            valor_total_estoque,
        }
    }
}

/// Último estado conhecido da API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusApi {
    Online,
    Offline,
    /// Nenhuma verificação concluída ainda.
    Desconhecido,
}

/// Tabela de produtos (lista completa ou resultado de busca).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabelaProdutos {
    /// Termo da busca; `None` na listagem completa.
    pub termo: Option<String>,
    pub linhas: Vec<LinhaProduto>,
    pub estatisticas: Estatisticas,
    pub mensagem: String,
}

impl TabelaProdutos {
    pub fn nova(termo: Option<String>, produtos: &[ProdutoUi], mensagem: impl Into<String>) -> Self {
        TabelaProdutos {
            termo,
            linhas: linhas(produtos, VisaoLinha::Completa),
            estatisticas: Estatisticas::calcular(produtos),
            mensagem: mensagem.into(),
        }
    }
}

/// Tela inicial do painel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub status_api: StatusApi,
    /// Ausente enquanto nenhuma leitura de estatísticas deu certo.
    pub estatisticas: Option<Estatisticas>,
    pub recentes: Vec<LinhaProduto>,
}

/// Resposta de criação, edição ou exclusão: o produto afetado e a tabela recarregada.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultadoMutacao {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produto: Option<ProdutoUi>,
    /// `None` se a recarga falhou; a operação em si já foi concluída.
    pub tabela: Option<TabelaProdutos>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn produto(nome: &str, preco: &str, estoque: i64) -> ProdutoUi {
        ProdutoUi {
            id: Some(1),
            nome: nome.to_string(),
            descricao: Some("Uma descrição bem longa que passa de quarenta caracteres com folga".to_string()),
            preco_venda: BigDecimal::from_str(preco).unwrap(),
            qtd_estoque: estoque,
            ativo: true,
            data_cadastro: Some("2024-05-01T09:30:00".to_string()),
        }
    }

    #[test]
    fn linha_completa() {
        let linha = LinhaProduto::de_produto(&produto("Widget", "19.9", 5), VisaoLinha::Completa);

        assert_eq!(linha.preco_formatado, "R$ 19,90");
        assert_eq!(linha.rotulo_estoque, "5 unidades");
        assert_eq!(linha.classe_estoque, ClasseEstoque::Baixo);
        assert_eq!(linha.classe_css, "estoque-baixo");
        assert_eq!(linha.data_cadastro, "01/05/2024");
        assert_eq!(linha.descricao.chars().count(), 53);
    }

    #[test]
    fn linha_resumida_trunca_nome_e_descricao() {
        let nome = "Kit de maquiagem profissional completo";
        let linha = LinhaProduto::de_produto(&produto(nome, "1", 50), VisaoLinha::Resumida);

        assert_eq!(linha.nome, "Kit de maquiagem profissional ...");
        assert_eq!(linha.descricao.chars().count(), 43);
        assert_eq!(linha.classe_estoque, ClasseEstoque::Bom);
    }

    #[test]
    fn estatisticas_somam_preco_vezes_estoque() {
        let produtos = vec![produto("A", "10.50", 2), produto("B", "3", 10), produto("C", "1", 31)];
        let estatisticas = Estatisticas::calcular(&produtos);

        assert_eq!(estatisticas.total_produtos, 3);
        assert_eq!(estatisticas.estoque_baixo, 2);
        assert_eq!(estatisticas.valor_total_estoque, BigDecimal::from(82));
        assert_eq!(estatisticas.valor_total_formatado, "R$ 82,00");
    }

    #[test]
    fn estatisticas_vazias() {
        let estatisticas = Estatisticas::calcular(&[]);
        assert_eq!(estatisticas.total_produtos, 0);
        assert_eq!(estatisticas.valor_total_formatado, "R$ 0,00");
    }
}

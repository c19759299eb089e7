// src/produtos/produtos_structs.rs

use bigdecimal::BigDecimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::shared::numeros::{decimal_opcional, inteiro_opcional};

/// Dados de produto como chegam do formulário do painel.
///
/// Telas antigas usam `preco`/`estoque`; as novas já enviam `preco_venda`/`qtd_estoque`.
/// Os números podem vir como número JSON ou como texto digitado ("19,90").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProdutoEntrada {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(default, deserialize_with = "decimal_opcional", skip_serializing_if = "Option::is_none")]
    pub preco: Option<BigDecimal>,
    #[serde(default, deserialize_with = "decimal_opcional", skip_serializing_if = "Option::is_none")]
    pub preco_venda: Option<BigDecimal>,
    #[serde(default, deserialize_with = "inteiro_opcional", skip_serializing_if = "Option::is_none")]
    pub estoque: Option<i64>,
    #[serde(default, deserialize_with = "inteiro_opcional", skip_serializing_if = "Option::is_none")]
    pub qtd_estoque: Option<i64>,
}

/// Estrutura no formato que a API espera no corpo do POST/PUT /produtos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProdutoCanonico {
    pub nome: String,
    pub descricao: Option<String>,
    pub preco_venda: BigDecimal,
    pub qtd_estoque: i64,
}

/// Produto como a API devolve.
/// Todos os campos são opcionais: a normalização decide os valores padrão.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProdutoApi {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    // A API serializa Decimal como texto ("22.90")
    #[serde(default, deserialize_with = "decimal_opcional")]
    pub preco_venda: Option<BigDecimal>,
    #[serde(default, deserialize_with = "inteiro_opcional")]
    pub qtd_estoque: Option<i64>,
    #[serde(default)]
    pub ativo: Option<Value>,
    #[serde(default)]
    pub data_cadastro: Option<String>,
}

/// Produto no formato usado pelas telas.
///
/// Guarda apenas os campos canônicos; os apelidos `preco` e `estoque` são
/// escritos na serialização com os mesmos valores, então nunca divergem.
#[derive(Debug, Clone, PartialEq)]
pub struct ProdutoUi {
    pub id: Option<i64>,
    pub nome: String,
    pub descricao: Option<String>,
    pub preco_venda: BigDecimal,
    pub qtd_estoque: i64,
    pub ativo: bool,
    pub data_cadastro: Option<String>,
}

impl ProdutoUi {
    /// Apelido legado de `preco_venda`.
    pub fn preco(&self) -> &BigDecimal {
        &self.preco_venda
    }

    /// Apelido legado de `qtd_estoque`.
    pub fn estoque(&self) -> i64 {
        self.qtd_estoque
    }

    /// Converte de volta para o formato do formulário (tela de edição).
    pub fn como_entrada(&self) -> ProdutoEntrada {
        ProdutoEntrada {
            nome: Some(self.nome.clone()),
            descricao: self.descricao.clone(),
            preco: None,
            preco_venda: Some(self.preco_venda.clone()),
            estoque: None,
            qtd_estoque: Some(self.qtd_estoque),
        }
    }
}

impl Serialize for ProdutoUi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut estado = serializer.serialize_struct("ProdutoUi", 9)?;
        estado.serialize_field("id", &self.id)?;
        estado.serialize_field("nome", &self.nome)?;
        estado.serialize_field("descricao", &self.descricao)?;
        estado.serialize_field("preco", &self.preco_venda)?;
        estado.serialize_field("preco_venda", &self.preco_venda)?;
        estado.serialize_field("estoque", &self.qtd_estoque)?;
        estado.serialize_field("qtd_estoque", &self.qtd_estoque)?;
        estado.serialize_field("ativo", &self.ativo)?;
        estado.serialize_field("data_cadastro", &self.data_cadastro)?;
        estado.end()
    }
}

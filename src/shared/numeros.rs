// src/shared/numeros.rs

//! Leitura tolerante de números vindos de formulários e da API.
//!
//! Os campos numéricos chegam ora como número JSON, ora como texto digitado
//! (`"19,90"`, `" 5 "`). A leitura aceita vírgula como separador decimal e,
//! assim como o `parseFloat`/`parseInt` dos navegadores, considera apenas o
//! prefixo numérico do texto.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Lê um decimal a partir de texto. Retorna `None` se não houver prefixo numérico.
pub fn decimal_de_texto(texto: &str) -> Option<BigDecimal> {
    // Apenas a primeira vírgula vira ponto ("1.234,56" -> "1.234.56" -> 1.234)
    let normalizado = texto.trim_start().replacen(',', ".", 1);
    let prefixo = prefixo_decimal(&normalizado)?;

    // Fora da faixa finita de f64 não é número, como no parseFloat
    let aproximado: f64 = prefixo.parse().ok()?;
    if !aproximado.is_finite() {
        return None;
    }
    if prefixo.contains(['e', 'E']) {
        // O expoente nunca chega ao BigDecimal: escala gigante trava with_scale
        return BigDecimal::from_str(&aproximado.to_string()).ok();
    }
    BigDecimal::from_str(prefixo).ok()
}

/// Lê um inteiro a partir de texto, ignorando o que vier depois dos dígitos.
pub fn inteiro_de_texto(texto: &str) -> Option<i64> {
    let texto = texto.trim_start();
    let bytes = texto.as_bytes();
    let mut fim = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        fim = 1;
    }
    let inicio_digitos = fim;
    while fim < bytes.len() && bytes[fim].is_ascii_digit() {
        fim += 1;
    }
    if fim == inicio_digitos {
        return None;
    }
    texto[..fim].parse().ok()
}

/// Converte um valor JSON (número ou texto) em decimal.
pub fn decimal_de_valor(valor: &Value) -> Option<BigDecimal> {
    match valor {
        Value::Number(numero) => decimal_de_texto(&numero.to_string()),
        Value::String(texto) => decimal_de_texto(texto),
        _ => None,
    }
}

/// Converte um valor JSON (número ou texto) em inteiro, truncando frações.
pub fn inteiro_de_valor(valor: &Value) -> Option<i64> {
    match valor {
        Value::Number(numero) => numero.as_i64().or_else(|| {
            numero
                .as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(texto) => inteiro_de_texto(texto),
        _ => None,
    }
}

/// `deserialize_with` para campos decimais opcionais e tolerantes.
pub fn decimal_opcional<'de, D>(deserializer: D) -> Result<Option<BigDecimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let valor = Option::<Value>::deserialize(deserializer)?;
    Ok(valor.as_ref().and_then(decimal_de_valor))
}

/// `deserialize_with` para campos inteiros opcionais e tolerantes.
pub fn inteiro_opcional<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let valor = Option::<Value>::deserialize(deserializer)?;
    Ok(valor.as_ref().and_then(inteiro_de_valor))
}

// Maior prefixo no formato [sinal]dígitos[.dígitos][e[sinal]dígitos]
fn prefixo_decimal(texto: &str) -> Option<&str> {
    let bytes = texto.as_bytes();
    let mut fim = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        fim = 1;
    }

    let mut digitos = 0;
    while fim < bytes.len() && bytes[fim].is_ascii_digit() {
        fim += 1;
        digitos += 1;
    }
    if fim < bytes.len() && bytes[fim] == b'.' {
        let mut depois = fim + 1;
        let mut fracao = 0;
        while depois < bytes.len() && bytes[depois].is_ascii_digit() {
            depois += 1;
            fracao += 1;
        }
        if fracao > 0 {
            fim = depois;
            digitos += fracao;
        } else if digitos > 0 {
            // "12." vale 12
            fim += 1;
        }
    }
    if digitos == 0 {
        return None;
    }

    if fim < bytes.len() && (bytes[fim] == b'e' || bytes[fim] == b'E') {
        let mut depois = fim + 1;
        if matches!(bytes.get(depois), Some(b'+') | Some(b'-')) {
            depois += 1;
        }
        let inicio_expoente = depois;
        while depois < bytes.len() && bytes[depois].is_ascii_digit() {
            depois += 1;
        }
        if depois > inicio_expoente {
            fim = depois;
        }
    }

    Some(texto[..fim].trim_end_matches('.'))
}

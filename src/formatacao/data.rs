// src/formatacao/data.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::warn;

// Datas com fuso explícito além do RFC 3339 estrito
const FORMATOS_COM_FUSO: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

const FORMATOS_SEM_FUSO: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Formata uma data ISO-8601 como `DD/MM/YYYY` (ou `DD/MM/YYYY HH:mm`).
///
/// O horário exibido é o do próprio texto, sem conversão de fuso.
/// Vazio ou irreconhecível resulta em texto vazio. Se o texto começa com uma
/// data válida mas o restante não é interpretável, devolve o trecho bruto.
pub fn formatar_data(valor: Option<&str>, incluir_hora: bool) -> String {
    let texto = match valor.map(str::trim) {
        Some(texto) if !texto.is_empty() => texto,
        _ => return String::new(),
    };

    if let Some(data_hora) = interpretar(texto) {
        let formato = if incluir_hora { "%d/%m/%Y %H:%M" } else { "%d/%m/%Y" };
        return data_hora.format(formato).to_string();
    }

    let comeca_com_data = texto
        .get(..10)
        .is_some_and(|prefixo| NaiveDate::parse_from_str(prefixo, "%Y-%m-%d").is_ok());
    if !comeca_com_data {
        return String::new();
    }

    warn!("Erro ao formatar data: {:?}", texto);
    if incluir_hora {
        texto.chars().take(16).collect::<String>().replace('T', " ")
    } else {
        texto.chars().take(10).collect()
    }
}

fn interpretar(texto: &str) -> Option<NaiveDateTime> {
    if let Ok(data_hora) = DateTime::parse_from_rfc3339(texto) {
        return Some(data_hora.naive_local());
    }
    for formato in FORMATOS_COM_FUSO {
        if let Ok(data_hora) = DateTime::parse_from_str(texto, formato) {
            return Some(data_hora.naive_local());
        }
    }
    for formato in FORMATOS_SEM_FUSO {
        if let Ok(data_hora) = NaiveDateTime::parse_from_str(texto, formato) {
            return Some(data_hora);
        }
    }
    NaiveDate::parse_from_str(texto, "%Y-%m-%d")
        .ok()
        .and_then(|data| data.and_hms_opt(0, 0, 0))
}

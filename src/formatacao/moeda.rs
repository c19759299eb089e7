// src/formatacao/moeda.rs

use bigdecimal::BigDecimal;
use tracing::warn;

use crate::shared::numeros::decimal_de_texto;

/// Texto exibido para valores ausentes ou inválidos.
pub const MOEDA_ZERO: &str = "R$ 0,00";

/// Formata um valor como moeda brasileira: `R$ 1.234,50`.
///
/// Sempre duas casas decimais, arredondando a metade para longe do zero.
pub fn formatar_moeda(valor: &BigDecimal) -> String {
    let zero = BigDecimal::from(0);
    let negativo = *valor < zero;

    // Trabalha em centavos inteiros para não depender de ponto flutuante
    let escalado = valor.abs() * BigDecimal::from(100);
    let truncado = escalado.with_scale(0);
    let resto = &escalado - &truncado;
    let centavos = if resto * BigDecimal::from(2) >= BigDecimal::from(1) {
        truncado + BigDecimal::from(1)
    } else {
        truncado
    };

    let digitos = centavos.with_scale(0).to_string();
    let digitos = format!("{:0>3}", digitos);
    let (reais, fracao) = digitos.split_at(digitos.len() - 2);

    let sinal = if negativo && digitos.bytes().any(|b| b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}R$ {},{}", sinal, agrupar_milhares(reais), fracao)
}

/// Formata um valor digitado (vírgula como separador decimal).
/// Ausente, vazio ou não numérico resulta em [`MOEDA_ZERO`].
pub fn formatar_moeda_texto(valor: Option<&str>) -> String {
    let texto = match valor {
        Some(texto) if !texto.is_empty() => texto,
        _ => return MOEDA_ZERO.to_string(),
    };

    match decimal_de_texto(texto) {
        Some(numero) => formatar_moeda(&numero),
        None => {
            warn!("Valor inválido para formatação: {:?}", texto);
            MOEDA_ZERO.to_string()
        }
    }
}

fn agrupar_milhares(digitos: &str) -> String {
    let mut resultado = String::with_capacity(digitos.len() + digitos.len() / 3);
    for (posicao, caractere) in digitos.chars().enumerate() {
        if posicao > 0 && (digitos.len() - posicao) % 3 == 0 {
            resultado.push('.');
        }
        resultado.push(caractere);
    }
    resultado
}

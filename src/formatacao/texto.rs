// src/formatacao/texto.rs

/// Limite padrão de caracteres antes de truncar.
pub const LIMITE_TEXTO_PADRAO: usize = 50;

/// Trunca o texto em `limite` caracteres, acrescentando "..." quando corta.
pub fn truncar_texto(texto: Option<&str>, limite: usize) -> String {
    let texto = match texto {
        Some(texto) => texto,
        None => return String::new(),
    };

    // Conta caracteres, não bytes, para não partir acentos ao meio
    match texto.char_indices().nth(limite) {
        Some((corte, _)) => format!("{}...", &texto[..corte]),
        None => texto.to_string(),
    }
}

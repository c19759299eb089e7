// src/shared/mod.rs

// Envelope padrão das respostas do painel
pub mod shared_structs;
// Leitura tolerante de números digitados em formulários
pub mod numeros;

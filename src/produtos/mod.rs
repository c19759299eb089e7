// src/produtos/mod.rs

// Declara o submódulo com as estruturas de produto (formulário, API e telas)
pub mod produtos_structs;
// Declara o submódulo que traduz os nomes de campo entre telas e API
pub mod normalizador;
// Declara o submódulo com as regras de validação antes do envio
pub mod validacao;

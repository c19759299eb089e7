// src/painel/mod.rs

pub mod painel_operacoes;
pub mod painel_router;
pub mod painel_state;
pub mod painel_structs;
pub mod tarefas;

pub use painel_state::EstadoApp;

// ==========================================
// Gestão de Canteiro de Obras - Erros da Camada de API
// ==========================================
// Responsabilidade: traduzir falhas técnicas em mensagens de negócio.
// Toda mensagem carrega a razão explícita.
// ==========================================

use crate::config::ConfigError;
use crate::importer::ImportError;
use thiserror::Error;

/// Erros da camada de API
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Regras de entrada =====
    #[error("entrada inválida: {0}")]
    EntradaInvalida(String),

    #[error("recurso não encontrado: {0}")]
    NaoEncontrado(String),

    // ===== Camadas adjacentes =====
    #[error("falha de importação: {0}")]
    Importacao(#[from] ImportError),

    #[error("falha de configuração: {0}")]
    Configuracao(#[from] ConfigError),

    // ===== Genéricos =====
    #[error("erro interno: {0}")]
    ErroInterno(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias de Result da camada de API
pub type ApiResult<T> = Result<T, ApiError>;

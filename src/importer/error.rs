// ==========================================
// Gestão de Canteiro de Obras - Erros de Importação
// ==========================================
// Ferramenta: macro derive do thiserror
// ==========================================

use thiserror::Error;

/// Erros da camada de importação
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Arquivo =====
    #[error("arquivo não encontrado: {0}")]
    ArquivoNaoEncontrado(String),

    #[error("formato de arquivo não suportado: {0} (apenas .csv/.json)")]
    FormatoNaoSuportado(String),

    #[error("falha de leitura do arquivo: {0}")]
    LeituraFalhou(String),

    #[error("falha ao interpretar CSV: {0}")]
    CsvParseError(String),

    #[error("falha ao interpretar JSON: {0}")]
    JsonParseError(String),

    // ===== Mapeamento de dados =====
    #[error("campo obrigatório vazio (linha {linha}): {campo}")]
    CampoObrigatorioVazio { linha: usize, campo: String },

    #[error("valor inválido (linha {linha}, campo {campo}): {mensagem}")]
    ValorInvalido {
        linha: usize,
        campo: String,
        mensagem: String,
    },

    #[error("data inválida (linha {linha}, campo {campo}): esperado AAAA-MM-DD, recebido {valor}")]
    DataInvalida {
        linha: usize,
        campo: String,
        valor: String,
    },

    // ===== Genéricos =====
    #[error("erro interno: {0}")]
    ErroInterno(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::LeituraFalhou(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::JsonParseError(err.to_string())
    }
}

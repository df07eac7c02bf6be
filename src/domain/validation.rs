// ==========================================
// Gestão de Canteiro de Obras - Apontamentos de Validação
// ==========================================
// Apontamento é sinalização, nunca rejeição de gravação.
// Efêmero: recalculado a cada avaliação, jamais persistido.
// ==========================================

use crate::domain::types::Severidade;
use serde::{Deserialize, Serialize};

// ==========================================
// Validacao - apontamento com severidade
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validacao {
    pub tipo: Severidade,         // SUCESSO | INFO | ALERTA | ERRO
    pub mensagem: String,         // texto legível para o usuário
    pub campo: Option<String>,    // caminho do campo para destaque na UI
}

impl Validacao {
    pub fn erro(mensagem: impl Into<String>, campo: Option<String>) -> Self {
        Self {
            tipo: Severidade::Erro,
            mensagem: mensagem.into(),
            campo,
        }
    }

    pub fn alerta(mensagem: impl Into<String>, campo: Option<String>) -> Self {
        Self {
            tipo: Severidade::Alerta,
            mensagem: mensagem.into(),
            campo,
        }
    }

    pub fn sucesso(mensagem: impl Into<String>) -> Self {
        Self {
            tipo: Severidade::Sucesso,
            mensagem: mensagem.into(),
            campo: None,
        }
    }
}

/// Severidade mais alta presente na lista (None para lista vazia)
pub fn severidade_maxima(validacoes: &[Validacao]) -> Option<Severidade> {
    validacoes.iter().map(|v| v.tipo).max()
}

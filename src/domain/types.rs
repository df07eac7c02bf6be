// ==========================================
// Gestão de Canteiro de Obras - Tipos de Domínio
// ==========================================
// Baseado em: Regras_Negocio_RDO.md - 2. Enumerações do domínio
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Severidade de apontamento (Validacao)
// ==========================================
// Ordem: Sucesso < Info < Alerta < Erro
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severidade {
    Sucesso, // todas as regras passaram
    Info,    // informativo
    Alerta,  // requer atenção, não bloqueia
    Erro,    // violação de regra de negócio
}

impl fmt::Display for Severidade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severidade::Sucesso => write!(f, "SUCESSO"),
            Severidade::Info => write!(f, "INFO"),
            Severidade::Alerta => write!(f, "ALERTA"),
            Severidade::Erro => write!(f, "ERRO"),
        }
    }
}

// ==========================================
// Status do RDO (Relatório Diário de Obra)
// ==========================================
// Ciclo de vida: RASCUNHO → PENDENTE → APROVADO | SINALIZADO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusRdo {
    Rascunho,   // em edição pelo encarregado
    Pendente,   // aguardando aprovação
    Aprovado,   // aprovado pela fiscalização
    Sinalizado, // devolvido com pendências
}

impl fmt::Display for StatusRdo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusRdo::Rascunho => write!(f, "RASCUNHO"),
            StatusRdo::Pendente => write!(f, "PENDENTE"),
            StatusRdo::Aprovado => write!(f, "APROVADO"),
            StatusRdo::Sinalizado => write!(f, "SINALIZADO"),
        }
    }
}

// ==========================================
// Status de atividade do RDO
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusAtividade {
    NaoIniciada,
    EmAndamento,
    Concluida,
    Pausada,
}

impl fmt::Display for StatusAtividade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusAtividade::NaoIniciada => write!(f, "NAO_INICIADA"),
            StatusAtividade::EmAndamento => write!(f, "EM_ANDAMENTO"),
            StatusAtividade::Concluida => write!(f, "CONCLUIDA"),
            StatusAtividade::Pausada => write!(f, "PAUSADA"),
        }
    }
}

// ==========================================
// Condição climática registrada no RDO
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CondicaoClimatica {
    Ensolarado,
    Nublado,
    Chuva,
    Tempestade,
}

impl fmt::Display for CondicaoClimatica {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CondicaoClimatica::Ensolarado => write!(f, "ENSOLARADO"),
            CondicaoClimatica::Nublado => write!(f, "NUBLADO"),
            CondicaoClimatica::Chuva => write!(f, "CHUVA"),
            CondicaoClimatica::Tempestade => write!(f, "TEMPESTADE"),
        }
    }
}

// ==========================================
// Status de certificação (NRs, treinamentos)
// ==========================================
// A validade (data) é verificada à parte; o status reflete o cadastro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCertificacao {
    Valida,
    Vencida,
    Suspensa,
}

impl fmt::Display for StatusCertificacao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCertificacao::Valida => write!(f, "VALIDA"),
            StatusCertificacao::Vencida => write!(f, "VENCIDA"),
            StatusCertificacao::Suspensa => write!(f, "SUSPENSA"),
        }
    }
}

// ==========================================
// Status geral do controle de HH
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusGeralHh {
    Conforme,   // nenhum alerta gerado
    ComAlertas, // pelo menos um alerta pendente
}

impl fmt::Display for StatusGeralHh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusGeralHh::Conforme => write!(f, "CONFORME"),
            StatusGeralHh::ComAlertas => write!(f, "COM_ALERTAS"),
        }
    }
}

// ==========================================
// Status de lead (funil comercial)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusLead {
    Novo,
    EmContato,
    Qualificado,
    Proposta,
    Ganho,
    Perdido,
}

impl StatusLead {
    /// Lead ainda em aberto no funil (não ganho nem perdido)
    pub fn ativo(&self) -> bool {
        !matches!(self, StatusLead::Ganho | StatusLead::Perdido)
    }
}

impl fmt::Display for StatusLead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLead::Novo => write!(f, "NOVO"),
            StatusLead::EmContato => write!(f, "EM_CONTATO"),
            StatusLead::Qualificado => write!(f, "QUALIFICADO"),
            StatusLead::Proposta => write!(f, "PROPOSTA"),
            StatusLead::Ganho => write!(f, "GANHO"),
            StatusLead::Perdido => write!(f, "PERDIDO"),
        }
    }
}

// ==========================================
// Status de oportunidade (proposta comercial)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusOportunidade {
    EmAnalise,
    Enviada,
    Aprovada,
    Recusada,
    Perdida,
}

impl StatusOportunidade {
    /// Oportunidade conta para o pipeline (não recusada nem perdida)
    pub fn no_pipeline(&self) -> bool {
        !matches!(
            self,
            StatusOportunidade::Recusada | StatusOportunidade::Perdida
        )
    }
}

impl fmt::Display for StatusOportunidade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusOportunidade::EmAnalise => write!(f, "EM_ANALISE"),
            StatusOportunidade::Enviada => write!(f, "ENVIADA"),
            StatusOportunidade::Aprovada => write!(f, "APROVADA"),
            StatusOportunidade::Recusada => write!(f, "RECUSADA"),
            StatusOportunidade::Perdida => write!(f, "PERDIDA"),
        }
    }
}

// ==========================================
// Status de contrato
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusContrato {
    Pendente,  // assinado, aguardando início
    Ativo,     // em execução
    Concluido, // entregue
    Cancelado, // rescindido
}

impl fmt::Display for StatusContrato {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusContrato::Pendente => write!(f, "PENDENTE"),
            StatusContrato::Ativo => write!(f, "ATIVO"),
            StatusContrato::Concluido => write!(f, "CONCLUIDO"),
            StatusContrato::Cancelado => write!(f, "CANCELADO"),
        }
    }
}

// ==========================================
// Faixa de desvio de margem de contrato
// ==========================================
// Ordem: Saudavel < Atencao < Critico (quanto maior, pior)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FaixaDesvioMargem {
    Saudavel, // margem real dentro do previsto
    Atencao,  // queda moderada de margem
    Critico,  // queda severa de margem
}

impl fmt::Display for FaixaDesvioMargem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaixaDesvioMargem::Saudavel => write!(f, "SAUDAVEL"),
            FaixaDesvioMargem::Atencao => write!(f, "ATENCAO"),
            FaixaDesvioMargem::Critico => write!(f, "CRITICO"),
        }
    }
}

impl FaixaDesvioMargem {
    /// Converte string de filtro (API/CLI) para a faixa correspondente
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "SAUDAVEL" => Some(FaixaDesvioMargem::Saudavel),
            "ATENCAO" => Some(FaixaDesvioMargem::Atencao),
            "CRITICO" => Some(FaixaDesvioMargem::Critico),
            _ => None,
        }
    }
}

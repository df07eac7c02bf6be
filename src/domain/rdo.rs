// ==========================================
// Gestão de Canteiro de Obras - RDO (Relatório Diário de Obra)
// ==========================================
// Baseado em: Regras_Negocio_RDO.md - 1. Estrutura do RDO
// ==========================================
// Um RDO por obra por data. Nunca excluído enquanto referenciado
// pelos consolidados financeiros.
// ==========================================

use crate::domain::types::{CondicaoClimatica, StatusAtividade, StatusRdo};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// Rdo - Relatório Diário de Obra
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rdo {
    pub rdo_id: String,              // identificador do relatório
    pub obra_id: String,             // obra (canteiro) a que pertence
    pub data: NaiveDate,             // data do relatório

    // ===== Condições ambientais =====
    pub clima: CondicaoClimatica,    // condição predominante do dia
    pub temperatura: f64,            // temperatura ambiente (°C)

    // ===== Planejamento do dia =====
    pub total_horas_previstas: f64,  // meta de HH do dia

    // ===== Lançamentos =====
    pub atividades: Vec<Atividade>,  // atividades executadas
    pub mao_de_obra: Vec<MaoDeObra>, // apontamentos de equipe

    // ===== Ciclo de vida =====
    pub status: StatusRdo,           // RASCUNHO → PENDENTE → APROVADO | SINALIZADO
    pub criado_por: String,          // encarregado responsável
    pub criado_em: NaiveDateTime,    // carimbo de criação
}

// ==========================================
// MaoDeObra - apontamento de equipe
// ==========================================
// horas_trabalhadas é informada pelo chamador e tratada como confiável:
// valores negativos ou absurdos propagam para os agregados sem rejeição.
// Repetição de funcionário no mesmo RDO é apontamento de validação,
// nunca rejeição de gravação.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaoDeObra {
    pub funcionario: String,       // nome (referência ao diretório, não possuído)
    pub hora_inicio: String,       // "07:00"
    pub hora_fim: String,          // "17:00"
    pub horas_trabalhadas: f64,    // derivado de fim - início pelo chamador
}

// ==========================================
// Atividade - serviço executado no dia
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Atividade {
    pub descricao: String,             // descrição do serviço
    pub responsavel: Option<String>,   // ausência gera apontamento de validação
    pub percentual_concluido: f64,     // avanço físico (0-100)
    pub status: StatusAtividade,       // situação da atividade
}

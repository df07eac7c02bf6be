// ==========================================
// Gestão de Canteiro de Obras - Controle de HH
// ==========================================
// Baseado em: Regras_Negocio_RDO.md - 4. Controle de homem-hora
// ==========================================
// Snapshot de avaliação: recalculado por inteiro a cada chamada,
// nunca atualizado incrementalmente. Fonte só-leitura para a
// camada de apresentação.
// ==========================================

use crate::domain::types::StatusGeralHh;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// HhControlData - resultado da avaliação de HH
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HhControlData {
    pub avaliacao_id: String,          // id do snapshot de avaliação
    pub rdo_id: String,                // RDO avaliado
    pub data_referencia: NaiveDate,    // relógio injetado (certificações, etc.)

    // ===== Horas =====
    pub total_horas_executadas: f64,   // soma dos apontamentos
    pub total_horas_previstas: f64,    // meta do dia
    pub desvio_produtividade: f64,     // (executadas - previstas) / previstas

    // ===== Custo =====
    pub custo_total_hh: f64,           // média das taxas × horas totais

    // ===== Verificações =====
    pub certificacoes_validas: bool,   // todos com certificação vigente
    pub hh_dentro_limite: bool,        // total <= limite legal diário
    pub custo_dentro_orcamento: bool,  // |desvio| <= tolerância
    pub equipamentos_disponiveis: bool, // reservado (sempre true por ora)

    // ===== Alertas =====
    pub alertas: Vec<String>,          // mensagens acumuladas, ordem fixa

    // ===== Metadados =====
    pub gerado_em: NaiveDateTime,      // carimbo de geração
}

impl Default for HhControlData {
    /// Estado zerado/falso usado antes de qualquer recomputação
    fn default() -> Self {
        Self {
            avaliacao_id: String::new(),
            rdo_id: String::new(),
            data_referencia: NaiveDate::default(),
            total_horas_executadas: 0.0,
            total_horas_previstas: 0.0,
            desvio_produtividade: 0.0,
            custo_total_hh: 0.0,
            certificacoes_validas: false,
            hh_dentro_limite: false,
            custo_dentro_orcamento: false,
            equipamentos_disponiveis: false,
            alertas: Vec::new(),
            gerado_em: NaiveDateTime::default(),
        }
    }
}

// ==========================================
// Trait: AvaliacaoHh
// ==========================================
// Leituras derivadas do snapshot, com divisões protegidas
pub trait AvaliacaoHh {
    /// Eficiência percentual (executadas / previstas × 100)
    fn eficiencia(&self) -> f64;

    /// Custo realizado por hora executada
    fn custo_por_hora(&self) -> f64;

    /// Nenhum alerta pendente
    fn conforme(&self) -> bool;

    /// Status geral derivado da lista de alertas
    fn status_geral(&self) -> StatusGeralHh;
}

impl AvaliacaoHh for HhControlData {
    fn eficiencia(&self) -> f64 {
        if self.total_horas_previstas <= 0.0 {
            return 0.0;
        }

        (self.total_horas_executadas / self.total_horas_previstas) * 100.0
    }

    fn custo_por_hora(&self) -> f64 {
        if self.total_horas_executadas <= 0.0 {
            return 0.0;
        }

        self.custo_total_hh / self.total_horas_executadas
    }

    fn conforme(&self) -> bool {
        self.alertas.is_empty()
    }

    fn status_geral(&self) -> StatusGeralHh {
        if self.conforme() {
            StatusGeralHh::Conforme
        } else {
            StatusGeralHh::ComAlertas
        }
    }
}

// ==========================================
// RelatorioProdutividade - visão derivada
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatorioProdutividade {
    pub rdo_id: String,               // RDO de origem
    pub eficiencia: f64,              // percentual
    pub custo_por_hora: f64,          // R$/h executada
    pub status_geral: StatusGeralHh,  // CONFORME | COM_ALERTAS
    pub recomendacoes: Vec<String>,   // sugestões independentes, podem coexistir
}

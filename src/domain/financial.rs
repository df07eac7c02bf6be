// ==========================================
// Gestão de Canteiro de Obras - Domínio Comercial/Financeiro
// ==========================================
// Baseado em: Regras_Negocio_CRM.md - Funil e margens
// ==========================================
// Registros fornecidos pela camada de estado; o núcleo apenas
// reduz para o consolidado do painel.
// ==========================================

use crate::domain::types::{
    FaixaDesvioMargem, StatusContrato, StatusLead, StatusOportunidade,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// Lead - contato do funil comercial
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub lead_id: String,
    pub nome: String,              // empresa ou pessoa de contato
    pub origem: Option<String>,    // indicação, site, feira...
    pub status: StatusLead,
    pub data_criacao: NaiveDate,
}

// ==========================================
// Oportunidade - proposta em negociação
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Oportunidade {
    pub oportunidade_id: String,
    pub lead_id: Option<String>,             // lead de origem, quando houver
    pub descricao: String,
    pub valor: f64,                          // valor proposto (R$)
    pub probabilidade_fechamento: f64,       // 0-100
    pub status: StatusOportunidade,
    pub data_criacao: NaiveDate,
    pub data_fechamento: Option<NaiveDate>,  // preenchida ao aprovar/recusar
}

// ==========================================
// Orcamento - orçamento de projeto
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orcamento {
    pub orcamento_id: String,
    pub projeto: String,
    pub valor_previsto: f64,    // custo orçado (R$)
    pub valor_realizado: f64,   // custo apropriado até agora (R$)
}

// ==========================================
// Contrato - contrato firmado
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contrato {
    pub contrato_id: String,
    pub projeto: String,
    pub status: StatusContrato,
    pub valor_total: f64,                // valor contratado (R$)
    pub valor_faturado: f64,             // faturado até agora (R$)
    pub margem_prevista: f64,            // margem orçada (%)
    pub margem_real: f64,                // margem apurada (%)
    pub orcamento_id: Option<String>,    // vínculo com orçamento, quando houver
    pub data_assinatura: NaiveDate,
}

// ==========================================
// DesvioMargemContrato - linha do painel de margens
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesvioMargemContrato {
    pub contrato_id: String,
    pub projeto: String,
    pub margem_prevista: f64,       // %
    pub margem_real: f64,           // %
    pub desvio: f64,                // margem_real - margem_prevista (p.p.)
    pub faixa: FaixaDesvioMargem,   // SAUDAVEL | ATENCAO | CRITICO
}

// ==========================================
// ConsolidadoFinanceiro - snapshot do painel
// ==========================================
// Derivado a cada carga do painel; nunca mutado de forma independente.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidadoFinanceiro {
    pub data_referencia: NaiveDate,            // mês de referência para leads_mes

    // ===== Funil =====
    pub leads_ativos: usize,                   // em aberto no funil
    pub leads_mes: usize,                      // criados no mês de referência
    pub taxa_conversao: f64,                   // oportunidades / leads (%)

    // ===== Pipeline =====
    pub valor_pipeline_total: f64,             // soma das oportunidades não perdidas
    pub probabilidade_media_fechamento: f64,   // média do pipeline (0-100)
    pub ciclo_medio_dias: f64,                 // criação → fechamento, só aprovadas

    // ===== Contratos =====
    pub contratos_pendentes: usize,
    pub contratos_ativos: usize,
    pub valor_total_contratos: f64,            // não cancelados
    pub total_faturado: f64,
    pub total_a_faturar: f64,

    // ===== Margens =====
    pub margem_media_real: f64,                // média sobre não cancelados (%)
    pub desvio_orcamentario_medio: f64,        // média sobre contratos com orçamento (%)
    pub desvios_margem: Vec<DesvioMargemContrato>, // ordem de entrada preservada

    // ===== Metadados =====
    pub gerado_em: NaiveDateTime,
}

// ==========================================
// Trait: AnaliseFinanceira
// ==========================================
// Leituras derivadas do consolidado
pub trait AnaliseFinanceira {
    /// Contrato em pior situação de margem
    ///
    /// # Regras
    /// - Pior faixa primeiro (CRITICO > ATENCAO > SAUDAVEL)
    /// - Dentro da mesma faixa, menor desvio (queda mais funda)
    fn contrato_mais_critico(&self) -> Option<&DesvioMargemContrato>;

    /// Existe ao menos um contrato fora da faixa saudável
    fn tem_risco_margem(&self) -> bool;
}

impl AnaliseFinanceira for ConsolidadoFinanceiro {
    fn contrato_mais_critico(&self) -> Option<&DesvioMargemContrato> {
        let mut pior: Option<&DesvioMargemContrato> = None;

        for desvio in &self.desvios_margem {
            match pior {
                None => pior = Some(desvio),
                Some(atual) => {
                    if desvio.faixa > atual.faixa
                        || (desvio.faixa == atual.faixa && desvio.desvio < atual.desvio)
                    {
                        pior = Some(desvio);
                    }
                }
            }
        }

        pior
    }

    fn tem_risco_margem(&self) -> bool {
        self.desvios_margem
            .iter()
            .any(|d| d.faixa != FaixaDesvioMargem::Saudavel)
    }
}

// ==========================================
// Gestão de Canteiro de Obras - Motor de Consolidação Financeira
// ==========================================
// Baseado em: Regras_Negocio_CRM.md - Painel comercial e de margens
// ==========================================
// Responsabilidade: reduzir leads/oportunidades/orçamentos/contratos
// ao consolidado do painel
// Restrição: reduções independentes de ordem; toda divisão protegida
// ==========================================

use crate::config::ControlConfig;
use crate::domain::financial::{
    ConsolidadoFinanceiro, Contrato, DesvioMargemContrato, Lead, Oportunidade, Orcamento,
};
use crate::domain::types::{FaixaDesvioMargem, StatusContrato, StatusOportunidade};
use chrono::{Datelike, NaiveDate, Utc};

// ==========================================
// FinancialEngine - motor de consolidação
// ==========================================
pub struct FinancialEngine {}

impl FinancialEngine {
    /// Construtor
    pub fn new() -> Self {
        Self {}
    }

    /// Consolida o snapshot financeiro do painel
    ///
    /// # Parâmetros
    /// - `leads` / `oportunidades` / `orcamentos` / `contratos`: registros
    ///   fornecidos pela camada de estado (só-leitura)
    /// - `data_referencia`: mês de referência para `leads_mes`
    /// - `config`: faixas de desvio de margem
    ///
    /// # Retorno
    /// ConsolidadoFinanceiro sempre totalmente preenchido; coleções
    /// vazias produzem métricas zeradas, nunca erro
    pub fn consolidate(
        &self,
        leads: &[Lead],
        oportunidades: &[Oportunidade],
        orcamentos: &[Orcamento],
        contratos: &[Contrato],
        data_referencia: NaiveDate,
        config: &ControlConfig,
    ) -> ConsolidadoFinanceiro {
        // 1. Funil
        let (leads_ativos, leads_mes, taxa_conversao) =
            self.calculate_funil(leads, oportunidades, data_referencia);

        // 2. Pipeline
        let (valor_pipeline_total, probabilidade_media_fechamento) =
            self.calculate_pipeline(oportunidades);
        let ciclo_medio_dias = self.calculate_ciclo_medio(oportunidades);

        // 3. Contratos e faturamento
        let (
            contratos_pendentes,
            contratos_ativos,
            valor_total_contratos,
            total_faturado,
            total_a_faturar,
        ) = self.calculate_contratos(contratos);

        // 4. Margens
        let margem_media_real = self.calculate_margem_media(contratos);
        let desvio_orcamentario_medio =
            self.calculate_desvio_orcamentario(contratos, orcamentos);
        let desvios_margem = self.gerar_desvios_margem(contratos, config);

        ConsolidadoFinanceiro {
            data_referencia,
            leads_ativos,
            leads_mes,
            taxa_conversao,
            valor_pipeline_total,
            probabilidade_media_fechamento,
            ciclo_medio_dias,
            contratos_pendentes,
            contratos_ativos,
            valor_total_contratos,
            total_faturado,
            total_a_faturar,
            margem_media_real,
            desvio_orcamentario_medio,
            desvios_margem,
            gerado_em: Utc::now().naive_utc(),
        }
    }

    // ==========================================
    // Métricas de funil
    // ==========================================

    /// (leads_ativos, leads_mes, taxa_conversao)
    fn calculate_funil(
        &self,
        leads: &[Lead],
        oportunidades: &[Oportunidade],
        data_referencia: NaiveDate,
    ) -> (usize, usize, f64) {
        let leads_ativos = leads.iter().filter(|l| l.status.ativo()).count();

        let leads_mes = leads
            .iter()
            .filter(|l| {
                l.data_criacao.year() == data_referencia.year()
                    && l.data_criacao.month() == data_referencia.month()
            })
            .count();

        let taxa_conversao = if leads.is_empty() {
            0.0
        } else {
            (oportunidades.len() as f64 / leads.len() as f64) * 100.0
        };

        (leads_ativos, leads_mes, taxa_conversao)
    }

    // ==========================================
    // Métricas de pipeline
    // ==========================================

    /// (valor_pipeline_total, probabilidade_media_fechamento)
    ///
    /// Oportunidades recusadas ou perdidas ficam fora das duas métricas.
    fn calculate_pipeline(&self, oportunidades: &[Oportunidade]) -> (f64, f64) {
        let no_pipeline: Vec<&Oportunidade> = oportunidades
            .iter()
            .filter(|o| o.status.no_pipeline())
            .collect();

        if no_pipeline.is_empty() {
            return (0.0, 0.0);
        }

        let valor_total: f64 = no_pipeline.iter().map(|o| o.valor).sum();
        let probabilidade_media: f64 = no_pipeline
            .iter()
            .map(|o| o.probabilidade_fechamento)
            .sum::<f64>()
            / no_pipeline.len() as f64;

        (valor_total, probabilidade_media)
    }

    /// Ciclo comercial médio (dias da criação ao fechamento)
    ///
    /// Entram apenas oportunidades APROVADA com data de fechamento.
    fn calculate_ciclo_medio(&self, oportunidades: &[Oportunidade]) -> f64 {
        let ciclos: Vec<f64> = oportunidades
            .iter()
            .filter(|o| o.status == StatusOportunidade::Aprovada)
            .filter_map(|o| {
                o.data_fechamento
                    .map(|fechamento| (fechamento - o.data_criacao).num_days() as f64)
            })
            .collect();

        if ciclos.is_empty() {
            return 0.0;
        }

        ciclos.iter().sum::<f64>() / ciclos.len() as f64
    }

    // ==========================================
    // Métricas de contratos
    // ==========================================

    /// (pendentes, ativos, valor_total, faturado, a_faturar)
    ///
    /// Contratos cancelados não entram nos totais de carteira.
    fn calculate_contratos(&self, contratos: &[Contrato]) -> (usize, usize, f64, f64, f64) {
        let mut pendentes = 0;
        let mut ativos = 0;
        let mut valor_total = 0.0;
        let mut faturado = 0.0;
        let mut a_faturar = 0.0;

        for contrato in contratos {
            match contrato.status {
                StatusContrato::Pendente => pendentes += 1,
                StatusContrato::Ativo => ativos += 1,
                _ => {}
            }

            if contrato.status != StatusContrato::Cancelado {
                valor_total += contrato.valor_total;
                faturado += contrato.valor_faturado;
                a_faturar += (contrato.valor_total - contrato.valor_faturado).max(0.0);
            }
        }

        (pendentes, ativos, valor_total, faturado, a_faturar)
    }

    /// Margem real média sobre contratos não cancelados
    fn calculate_margem_media(&self, contratos: &[Contrato]) -> f64 {
        let margens: Vec<f64> = contratos
            .iter()
            .filter(|c| c.status != StatusContrato::Cancelado)
            .map(|c| c.margem_real)
            .collect();

        if margens.is_empty() {
            return 0.0;
        }

        margens.iter().sum::<f64>() / margens.len() as f64
    }

    /// Desvio orçamentário médio (%) sobre contratos com orçamento vinculado
    ///
    /// Desvio de um par = (realizado - previsto) / previsto × 100.
    /// Orçamento com previsto <= 0 fica fora da média (proteção de divisão).
    fn calculate_desvio_orcamentario(
        &self,
        contratos: &[Contrato],
        orcamentos: &[Orcamento],
    ) -> f64 {
        let mut desvios = Vec::new();

        for contrato in contratos {
            let orcamento_id = match &contrato.orcamento_id {
                Some(id) => id,
                None => continue,
            };

            let orcamento = match orcamentos.iter().find(|o| o.orcamento_id == *orcamento_id) {
                Some(o) => o,
                None => continue,
            };

            if orcamento.valor_previsto <= 0.0 {
                continue;
            }

            desvios.push(
                (orcamento.valor_realizado - orcamento.valor_previsto)
                    / orcamento.valor_previsto
                    * 100.0,
            );
        }

        if desvios.is_empty() {
            return 0.0;
        }

        desvios.iter().sum::<f64>() / desvios.len() as f64
    }

    // ==========================================
    // Desvio de margem por contrato
    // ==========================================

    /// Linhas do painel de margens, na ordem de entrada dos contratos
    ///
    /// Cancelados ficam fora do painel.
    fn gerar_desvios_margem(
        &self,
        contratos: &[Contrato],
        config: &ControlConfig,
    ) -> Vec<DesvioMargemContrato> {
        contratos
            .iter()
            .filter(|c| c.status != StatusContrato::Cancelado)
            .map(|c| {
                let desvio = c.margem_real - c.margem_prevista;
                DesvioMargemContrato {
                    contrato_id: c.contrato_id.clone(),
                    projeto: c.projeto.clone(),
                    margem_prevista: c.margem_prevista,
                    margem_real: c.margem_real,
                    desvio,
                    faixa: classificar_faixa(desvio, config),
                }
            })
            .collect()
    }
}

impl Default for FinancialEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifica a queda de margem em faixas
///
/// # Regras
/// - desvio >= -atencao: SAUDAVEL (inclui margem acima do previsto)
/// - desvio >= -critico: ATENCAO
/// - abaixo disso: CRITICO
fn classificar_faixa(desvio: f64, config: &ControlConfig) -> FaixaDesvioMargem {
    if desvio >= -config.desvio_margem_atencao {
        FaixaDesvioMargem::Saudavel
    } else if desvio >= -config.desvio_margem_critico {
        FaixaDesvioMargem::Atencao
    } else {
        FaixaDesvioMargem::Critico
    }
}

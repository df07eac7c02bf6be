// ==========================================
// Gestão de Canteiro de Obras - API do Painel Financeiro
// ==========================================
// Responsabilidade: fachada da consolidação comercial/financeira
// para o painel, com filtros de consulta
// ==========================================

use chrono::NaiveDate;

use crate::api::error::{ApiError, ApiResult};
use crate::config::ControlConfig;
use crate::domain::financial::{
    AnaliseFinanceira, ConsolidadoFinanceiro, DesvioMargemContrato,
};
use crate::domain::types::FaixaDesvioMargem;
use crate::engine::FinancialEngine;
use crate::importer::CrmSnapshot;

// ==========================================
// DashboardApi - fachada do painel
// ==========================================
pub struct DashboardApi {
    engine: FinancialEngine,
    config: ControlConfig,
}

impl DashboardApi {
    /// Cria a fachada com os parâmetros de negócio dados
    pub fn new(config: ControlConfig) -> Self {
        Self {
            engine: FinancialEngine::new(),
            config,
        }
    }

    /// Consolida o snapshot comercial para o painel
    ///
    /// Coleções vazias produzem consolidado zerado, nunca erro.
    pub fn consolidate(
        &self,
        snapshot: &CrmSnapshot,
        data_referencia: NaiveDate,
    ) -> ApiResult<ConsolidadoFinanceiro> {
        Ok(self.engine.consolidate(
            &snapshot.leads,
            &snapshot.oportunidades,
            &snapshot.orcamentos,
            &snapshot.contratos,
            data_referencia,
            &self.config,
        ))
    }

    /// Linhas do painel de margens, com filtro opcional de faixa e limite
    ///
    /// # Parâmetros
    /// - `faixa_filtro`: "SAUDAVEL" | "ATENCAO" | "CRITICO" (opcional)
    /// - `limite`: máximo de linhas (1-1000, opcional)
    pub fn margin_deviations(
        &self,
        consolidado: &ConsolidadoFinanceiro,
        faixa_filtro: Option<&str>,
        limite: Option<usize>,
    ) -> ApiResult<Vec<DesvioMargemContrato>> {
        let faixa = match faixa_filtro {
            Some(texto) => Some(FaixaDesvioMargem::from_str(texto).ok_or_else(|| {
                ApiError::EntradaInvalida(format!("faixa desconhecida: {}", texto))
            })?),
            None => None,
        };

        if let Some(n) = limite {
            if n == 0 || n > 1000 {
                return Err(ApiError::EntradaInvalida(
                    "limite deve estar entre 1 e 1000".to_string(),
                ));
            }
        }

        let linhas = consolidado
            .desvios_margem
            .iter()
            .filter(|d| faixa.map(|f| d.faixa == f).unwrap_or(true))
            .take(limite.unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(linhas)
    }

    /// Contrato em pior situação de margem, se houver
    pub fn most_critical_contract(
        &self,
        consolidado: &ConsolidadoFinanceiro,
    ) -> Option<DesvioMargemContrato> {
        consolidado.contrato_mais_critico().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consolidado_com_faixas() -> ConsolidadoFinanceiro {
        let api = DashboardApi::new(ControlConfig::default());
        let snapshot = CrmSnapshot::default();
        let mut consolidado = api
            .consolidate(&snapshot, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
            .unwrap();

        consolidado.desvios_margem = vec![
            DesvioMargemContrato {
                contrato_id: "C1".to_string(),
                projeto: "Galpão Norte".to_string(),
                margem_prevista: 20.0,
                margem_real: 19.0,
                desvio: -1.0,
                faixa: FaixaDesvioMargem::Saudavel,
            },
            DesvioMargemContrato {
                contrato_id: "C2".to_string(),
                projeto: "Torre Sul".to_string(),
                margem_prevista: 25.0,
                margem_real: 5.0,
                desvio: -20.0,
                faixa: FaixaDesvioMargem::Critico,
            },
        ];
        consolidado
    }

    #[test]
    fn test_filtro_de_faixa() {
        let api = DashboardApi::new(ControlConfig::default());
        let consolidado = consolidado_com_faixas();

        let linhas = api
            .margin_deviations(&consolidado, Some("critico"), None)
            .unwrap();

        assert_eq!(linhas.len(), 1);
        assert_eq!(linhas[0].contrato_id, "C2");
    }

    #[test]
    fn test_faixa_desconhecida_rejeitada() {
        let api = DashboardApi::new(ControlConfig::default());
        let consolidado = consolidado_com_faixas();

        let result = api.margin_deviations(&consolidado, Some("PESSIMA"), None);

        assert!(matches!(result, Err(ApiError::EntradaInvalida(_))));
    }

    #[test]
    fn test_limite_fora_da_faixa_rejeitado() {
        let api = DashboardApi::new(ControlConfig::default());
        let consolidado = consolidado_com_faixas();

        assert!(api.margin_deviations(&consolidado, None, Some(0)).is_err());
        assert!(api
            .margin_deviations(&consolidado, None, Some(1001))
            .is_err());
    }

    #[test]
    fn test_contrato_mais_critico() {
        let api = DashboardApi::new(ControlConfig::default());
        let consolidado = consolidado_com_faixas();

        let pior = api.most_critical_contract(&consolidado).unwrap();
        assert_eq!(pior.contrato_id, "C2");
    }
}

// ==========================================
// Gestão de Canteiro de Obras - API de Controle de RDO
// ==========================================
// Responsabilidade: fachada dos motores de HH, produtividade e
// validação para a camada de apresentação
// Arquitetura: API → motores (puros) sobre snapshots recebidos
// ==========================================
// A validação de entrada acontece só aqui, na borda; os motores
// continuam funções totais.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::error::{ApiError, ApiResult};
use crate::config::ControlConfig;
use crate::domain::hh_control::{HhControlData, RelatorioProdutividade};
use crate::domain::rdo::Rdo;
use crate::domain::validation::Validacao;
use crate::domain::workforce::Funcionario;
use crate::engine::{HhControlEngine, ProductivityEngine, RdoValidationEngine};

// ==========================================
// RdoControlReport - visão agregada
// ==========================================
/// Resultado combinado de uma rodada completa de avaliação
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RdoControlReport {
    pub avaliacao: HhControlData,
    pub produtividade: RelatorioProdutividade,
    pub validacoes: Vec<Validacao>,
}

// ==========================================
// ControlApi - fachada de controle de RDO
// ==========================================
pub struct ControlApi {
    hh_engine: HhControlEngine,
    productivity_engine: ProductivityEngine,
    validation_engine: RdoValidationEngine,
    config: ControlConfig,
}

impl ControlApi {
    /// Cria a fachada com os parâmetros de negócio dados
    pub fn new(config: ControlConfig) -> Self {
        Self {
            hh_engine: HhControlEngine::new(),
            productivity_engine: ProductivityEngine::new(),
            validation_engine: RdoValidationEngine::new(),
            config,
        }
    }

    /// Avalia o controle de HH de um RDO
    ///
    /// # Parâmetros
    /// - `rdo`: relatório a avaliar
    /// - `diretorio`: diretório de mão de obra (só-leitura)
    /// - `data_referencia`: relógio injetado
    ///
    /// # Retorno
    /// - Ok(HhControlData): snapshot de avaliação
    /// - Err(ApiError): entrada rejeitada na borda
    pub fn evaluate_hh_control(
        &self,
        rdo: &Rdo,
        diretorio: &[Funcionario],
        data_referencia: NaiveDate,
    ) -> ApiResult<HhControlData> {
        self.validar_identificacao(rdo)?;

        // Horas negativas propagam por contrato; ficam visíveis no log
        for membro in &rdo.mao_de_obra {
            if membro.horas_trabalhadas < 0.0 {
                warn!(
                    "RDO {}: {}h negativas apontadas para {}",
                    rdo.rdo_id, membro.horas_trabalhadas, membro.funcionario
                );
            }
        }

        Ok(self
            .hh_engine
            .evaluate(rdo, diretorio, data_referencia, &self.config))
    }

    /// Deriva o relatório de produtividade de uma avaliação
    pub fn productivity_report(
        &self,
        avaliacao: &HhControlData,
    ) -> ApiResult<RelatorioProdutividade> {
        if avaliacao.rdo_id.trim().is_empty() {
            return Err(ApiError::EntradaInvalida(
                "avaliação sem rdo_id".to_string(),
            ));
        }

        Ok(self.productivity_engine.report(avaliacao, &self.config))
    }

    /// Valida os campos de um RDO em edição
    pub fn validate_rdo(&self, rdo: &Rdo) -> ApiResult<Vec<Validacao>> {
        self.validar_identificacao(rdo)?;

        Ok(self.validation_engine.validate(rdo, &self.config))
    }

    /// Rodada completa: avaliação de HH + produtividade + validação de campos
    pub fn full_report(
        &self,
        rdo: &Rdo,
        diretorio: &[Funcionario],
        data_referencia: NaiveDate,
    ) -> ApiResult<RdoControlReport> {
        let avaliacao = self.evaluate_hh_control(rdo, diretorio, data_referencia)?;
        let produtividade = self.productivity_engine.report(&avaliacao, &self.config);
        let validacoes = self.validation_engine.validate(rdo, &self.config);

        Ok(RdoControlReport {
            avaliacao,
            produtividade,
            validacoes,
        })
    }

    /// Identificação mínima exigida na borda
    fn validar_identificacao(&self, rdo: &Rdo) -> ApiResult<()> {
        if rdo.rdo_id.trim().is_empty() {
            return Err(ApiError::EntradaInvalida(
                "rdo_id não pode ser vazio".to_string(),
            ));
        }

        if rdo.obra_id.trim().is_empty() {
            return Err(ApiError::EntradaInvalida(
                "obra_id não pode ser vazio".to_string(),
            ));
        }

        Ok(())
    }
}

// ==========================================
// Gestão de Canteiro de Obras - Motor de Produtividade
// ==========================================
// Baseado em: Regras_Negocio_RDO.md - 5. Indicadores de produtividade
// ==========================================
// Responsabilidade: derivar indicadores e recomendações do snapshot
// de controle de HH
// Entrada: HhControlData
// Saída: RelatorioProdutividade
// ==========================================

use crate::config::ControlConfig;
use crate::domain::hh_control::{AvaliacaoHh, HhControlData, RelatorioProdutividade};

// ==========================================
// ProductivityEngine - motor de produtividade
// ==========================================
pub struct ProductivityEngine {}

impl ProductivityEngine {
    /// Construtor
    pub fn new() -> Self {
        Self {}
    }

    /// Deriva o relatório de produtividade de uma avaliação de HH
    ///
    /// Regras de recomendação, independentes entre si (a lista pode
    /// acumular mais de uma):
    /// - desvio < -tolerância: replanejar / reforçar equipe
    /// - desvio > +tolerância: produtividade acima do previsto, otimizar
    ///   cronograma (exclusiva com a anterior pelo sinal)
    /// - qualquer alerta pendente: resolver pendências de conformidade
    ///
    /// Divisões protegidas: meta zero → eficiência 0; horas zero →
    /// custo/hora 0.
    pub fn report(
        &self,
        avaliacao: &HhControlData,
        config: &ControlConfig,
    ) -> RelatorioProdutividade {
        let mut recomendacoes = Vec::new();

        let desvio = avaliacao.desvio_produtividade;

        if desvio < -config.tolerancia_desvio {
            recomendacoes.push(
                "Horas executadas abaixo do previsto: replanejar atividades ou reforçar a equipe"
                    .to_string(),
            );
        }

        if desvio > config.tolerancia_desvio {
            recomendacoes.push(
                "Produtividade acima do previsto: considerar otimização do cronograma"
                    .to_string(),
            );
        }

        if !avaliacao.alertas.is_empty() {
            recomendacoes.push(
                "Resolver pendências de certificação e conformidade antes da aprovação"
                    .to_string(),
            );
        }

        RelatorioProdutividade {
            rdo_id: avaliacao.rdo_id.clone(),
            eficiencia: avaliacao.eficiencia(),
            custo_por_hora: avaliacao.custo_por_hora(),
            status_geral: avaliacao.status_geral(),
            recomendacoes,
        }
    }
}

impl Default for ProductivityEngine {
    fn default() -> Self {
        Self::new()
    }
}

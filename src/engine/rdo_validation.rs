// ==========================================
// Gestão de Canteiro de Obras - Motor de Validação de RDO
// ==========================================
// Baseado em: Regras_Negocio_RDO.md - 6. Regras de validação de rascunho
// ==========================================
// Responsabilidade: validar os campos brutos de um RDO em edição
// Saída: lista de apontamentos com severidade, em ordem determinística
// Restrição: todas as regras sempre executam; nenhuma interrompe as demais
// ==========================================

use crate::config::ControlConfig;
use crate::domain::rdo::Rdo;
use crate::domain::types::CondicaoClimatica;
use crate::domain::validation::Validacao;
use std::collections::HashMap;

// ==========================================
// RdoValidationEngine - motor de validação
// ==========================================
pub struct RdoValidationEngine {}

impl RdoValidationEngine {
    /// Construtor
    pub fn new() -> Self {
        Self {}
    }

    /// Valida o RDO em edição e devolve os apontamentos
    ///
    /// Ordem fixa de avaliação (a saída preserva esta ordem):
    /// 1. Horas individuais por apontamento (alerta > 10h, erro adicional > 12h)
    /// 2. Temperatura fora da faixa plausível
    /// 3. Chuva com temperatura alta (combinação suspeita)
    /// 4. Funcionário repetido entre apontamentos (erro na repetição)
    /// 5. Atividade sem responsável (um alerta por atividade)
    /// 6. Marcador de sucesso quando nada mais foi apontado
    pub fn validate(&self, rdo: &Rdo, config: &ControlConfig) -> Vec<Validacao> {
        let mut validacoes = Vec::new();

        // 1. Horas individuais: os dois apontamentos podem coexistir
        for (i, membro) in rdo.mao_de_obra.iter().enumerate() {
            if membro.horas_trabalhadas > config.alerta_hh_individual {
                validacoes.push(Validacao::alerta(
                    format!(
                        "{}h apontadas para {}: acima de {}h diárias",
                        membro.horas_trabalhadas, membro.funcionario, config.alerta_hh_individual
                    ),
                    Some(format!("mao_de_obra[{}].horas_trabalhadas", i)),
                ));
            }

            if membro.horas_trabalhadas > config.erro_hh_individual {
                validacoes.push(Validacao::erro(
                    format!(
                        "{}h apontadas para {}: ultrapassa o limite legal de {}h",
                        membro.horas_trabalhadas, membro.funcionario, config.erro_hh_individual
                    ),
                    Some(format!("mao_de_obra[{}].horas_trabalhadas", i)),
                ));
            }
        }

        // 2. Temperatura fora da faixa plausível
        if rdo.temperatura < config.temperatura_minima
            || rdo.temperatura > config.temperatura_maxima
        {
            validacoes.push(Validacao::alerta(
                format!(
                    "Temperatura de {}°C fora da faixa plausível ({}°C a {}°C)",
                    rdo.temperatura, config.temperatura_minima, config.temperatura_maxima
                ),
                Some("temperatura".to_string()),
            ));
        }

        // 3. Chuva com calor: sinaliza para revisão humana, não rejeita
        if rdo.clima == CondicaoClimatica::Chuva
            && rdo.temperatura > config.temperatura_chuva_suspeita
        {
            validacoes.push(Validacao::alerta(
                format!(
                    "Chuva registrada com temperatura acima de {}°C: revisar lançamento",
                    config.temperatura_chuva_suspeita
                ),
                Some("clima".to_string()),
            ));
        }

        // 4. Funcionário repetido: o mapa nome → horas é populado durante a
        // varredura; a primeira ocorrência nunca é apontada, só a repetição
        let mut horas_por_funcionario: HashMap<&str, f64> = HashMap::new();
        for (i, membro) in rdo.mao_de_obra.iter().enumerate() {
            if horas_por_funcionario.contains_key(membro.funcionario.as_str()) {
                validacoes.push(Validacao::erro(
                    format!(
                        "Funcionário {} apontado mais de uma vez no mesmo RDO",
                        membro.funcionario
                    ),
                    Some(format!("mao_de_obra[{}].funcionario", i)),
                ));
            } else {
                horas_por_funcionario
                    .insert(membro.funcionario.as_str(), membro.horas_trabalhadas);
            }
        }

        // 5. Atividade sem responsável
        for (i, atividade) in rdo.atividades.iter().enumerate() {
            if atividade.responsavel.is_none() {
                validacoes.push(Validacao::alerta(
                    format!(
                        "Atividade '{}' sem responsável definido",
                        atividade.descricao
                    ),
                    Some(format!("atividades[{}].responsavel", i)),
                ));
            }
        }

        // 6. Marcador de sucesso, exclusivo com qualquer outro apontamento
        if validacoes.is_empty() {
            validacoes.push(Validacao::sucesso("Todas as validações passaram"));
        }

        validacoes
    }
}

impl Default for RdoValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

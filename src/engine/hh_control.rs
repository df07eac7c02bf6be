// ==========================================
// Gestão de Canteiro de Obras - Motor de Controle de HH
// ==========================================
// Baseado em: Regras_Negocio_RDO.md - 4. Controle de homem-hora
// Baseado em: CLT Art. 59 - limite de jornada diária
// ==========================================
// Responsabilidade: agregação de horas, custeio e verificação de
// conformidade de um RDO
// Entrada: RDO + diretório de mão de obra + data de referência
// Saída: HhControlData (snapshot de avaliação)
// ==========================================

use crate::config::ControlConfig;
use crate::domain::hh_control::HhControlData;
use crate::domain::rdo::{MaoDeObra, Rdo};
use crate::domain::workforce::Funcionario;
use chrono::{NaiveDate, Utc};
use tracing::debug;
use uuid::Uuid;

// ==========================================
// HhControlEngine - motor de controle de HH
// ==========================================
pub struct HhControlEngine {
    // Motor sem estado; o diretório chega por parâmetro a cada chamada
}

impl HhControlEngine {
    /// Construtor
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // Agregação de horas
    // ==========================================

    /// Soma as horas trabalhadas de todos os apontamentos
    ///
    /// Não há saneamento: valores zero ou negativos propagam sem corte.
    /// Função total, nunca falha.
    pub fn aggregate_worked_hours(&self, mao_de_obra: &[MaoDeObra]) -> f64 {
        mao_de_obra.iter().map(|m| m.horas_trabalhadas).sum()
    }

    // ==========================================
    // Custeio
    // ==========================================

    /// Estima o custo de mão de obra do dia
    ///
    /// Resolve a taxa horária de cada funcionário distinto no diretório,
    /// substituindo a taxa padrão quando não cadastrado, e aplica
    /// `média(taxas) × total_horas`.
    ///
    /// Simplificação de modelo assumida: a média das taxas aproxima a
    /// distribuição de custo sem exigir rateio de horas por funcionário.
    /// Não é folha de pagamento exata.
    ///
    /// # Retorno
    /// Custo estimado (0.0 para equipe vazia)
    pub fn estimate_labor_cost(
        &self,
        mao_de_obra: &[MaoDeObra],
        diretorio: &[Funcionario],
        total_horas: f64,
        config: &ControlConfig,
    ) -> f64 {
        let nomes = nomes_distintos(mao_de_obra);
        if nomes.is_empty() {
            return 0.0;
        }

        let mut soma_taxas = 0.0;
        for nome in &nomes {
            let taxa = match diretorio.iter().find(|f| f.nome == *nome) {
                Some(funcionario) => funcionario.valor_hora,
                None => {
                    debug!(
                        "funcionário {} sem cadastro no diretório, usando taxa padrão de {}",
                        nome, config.valor_hora_padrao
                    );
                    config.valor_hora_padrao
                }
            };
            soma_taxas += taxa;
        }

        let taxa_media = soma_taxas / nomes.len() as f64;
        taxa_media * total_horas
    }

    // ==========================================
    // Avaliação de conformidade
    // ==========================================

    /// Avalia o RDO e gera o snapshot de controle de HH
    ///
    /// Quatro verificações independentes:
    /// 1. Certificações vigentes de toda a equipe
    /// 2. Teto legal de HH diárias (12h exatas passam; só acima viola)
    /// 3. Desvio de produtividade dentro da tolerância (limite inclusivo)
    /// 4. Disponibilidade de equipamentos (reservado)
    ///
    /// Os alertas acumulam em ordem fixa; mais de uma mensagem de
    /// produtividade pode coexistir para o mesmo RDO.
    ///
    /// # Parâmetros
    /// - `rdo`: relatório avaliado
    /// - `diretorio`: diretório de mão de obra (só-leitura)
    /// - `data_referencia`: relógio injetado para checagem de validade
    /// - `config`: parâmetros de negócio
    ///
    /// # Retorno
    /// HhControlData sempre totalmente preenchido; função total
    pub fn evaluate(
        &self,
        rdo: &Rdo,
        diretorio: &[Funcionario],
        data_referencia: NaiveDate,
        config: &ControlConfig,
    ) -> HhControlData {
        // 1. Agrega horas e estima custo
        let total_horas = self.aggregate_worked_hours(&rdo.mao_de_obra);
        let custo_total =
            self.estimate_labor_cost(&rdo.mao_de_obra, diretorio, total_horas, config);

        // 2. Desvio de produtividade (divisão protegida)
        let desvio = calcular_desvio(total_horas, rdo.total_horas_previstas);

        // 3. Verificações independentes
        let certificacoes_validas =
            self.check_certificacoes(&rdo.mao_de_obra, diretorio, data_referencia);
        let hh_dentro_limite = total_horas <= config.limite_diario_hh;
        let custo_dentro_orcamento = desvio.abs() <= config.tolerancia_desvio;
        // TODO(HH-EQP): consultar o cadastro de equipamentos quando o módulo
        // de frota entrar; até lá a verificação é sempre positiva
        let equipamentos_disponiveis = true;

        // 4. Acumula alertas em ordem fixa
        let mut alertas = Vec::new();

        if !certificacoes_validas {
            alertas.push("Existem funcionários sem certificação vigente".to_string());
        }

        if !hh_dentro_limite {
            alertas.push(format!(
                "Total de HH ultrapassa o limite legal de {}h diárias",
                config.limite_diario_hh
            ));
        }

        if !custo_dentro_orcamento {
            alertas.push(format!(
                "Desvio de produtividade acima da tolerância de {}%",
                config.tolerancia_desvio * 100.0
            ));
        }

        // Mensagem adicional, não exclusiva com a anterior
        if desvio.abs() > config.desvio_critico {
            alertas.push("Produtividade muito abaixo do esperado".to_string());
        }

        if !equipamentos_disponiveis {
            alertas.push("Equipamentos indisponíveis para as atividades do dia".to_string());
        }

        // 5. Monta o snapshot
        HhControlData {
            avaliacao_id: Uuid::new_v4().to_string(),
            rdo_id: rdo.rdo_id.clone(),
            data_referencia,
            total_horas_executadas: total_horas,
            total_horas_previstas: rdo.total_horas_previstas,
            desvio_produtividade: desvio,
            custo_total_hh: custo_total,
            certificacoes_validas,
            hh_dentro_limite,
            custo_dentro_orcamento,
            equipamentos_disponiveis,
            alertas,
            gerado_em: Utc::now().naive_utc(),
        }
    }

    /// Toda a equipe apontada possui certificação vigente
    ///
    /// Avaliação por `all()`: um único funcionário sem certificação VALIDA
    /// com validade estritamente posterior à data de referência reprova o
    /// lote inteiro. Funcionário fora do diretório reprova.
    ///
    /// Equipe vazia passa por vacuidade.
    fn check_certificacoes(
        &self,
        mao_de_obra: &[MaoDeObra],
        diretorio: &[Funcionario],
        data_referencia: NaiveDate,
    ) -> bool {
        nomes_distintos(mao_de_obra).iter().all(|nome| {
            diretorio
                .iter()
                .find(|f| f.nome == *nome)
                .map(|f| f.certificacao_vigente(data_referencia))
                .unwrap_or(false)
        })
    }
}

impl Default for HhControlEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Desvio de produtividade: (executadas - previstas) / previstas
///
/// Meta zero ou negativa define desvio 0.0 (proteção uniforme de divisão).
fn calcular_desvio(executadas: f64, previstas: f64) -> f64 {
    if previstas <= 0.0 {
        return 0.0;
    }

    (executadas - previstas) / previstas
}

/// Nomes na ordem da primeira ocorrência, sem repetição
fn nomes_distintos(mao_de_obra: &[MaoDeObra]) -> Vec<&str> {
    let mut nomes: Vec<&str> = Vec::new();
    for membro in mao_de_obra {
        if !nomes.contains(&membro.funcionario.as_str()) {
            nomes.push(membro.funcionario.as_str());
        }
    }
    nomes
}

// ==========================================
// Teste ponta a ponta da camada de API
// ==========================================
// Objetivo: fluxo completo avaliação → produtividade → validação
// através das fachadas, como a camada de apresentação consome
// ==========================================

use chrono::NaiveDate;
use obra_control::api::{ApiError, ControlApi, DashboardApi};
use obra_control::config::ControlConfig;
use obra_control::domain::rdo::{Atividade, MaoDeObra, Rdo};
use obra_control::domain::types::{
    CondicaoClimatica, Severidade, StatusAtividade, StatusCertificacao, StatusGeralHh, StatusRdo,
};
use obra_control::domain::workforce::{Certificacao, Funcionario};
use obra_control::importer::CrmSnapshot;

// ==========================================
// Funções auxiliares de teste
// ==========================================

fn data(ano: i32, mes: u32, dia: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
}

fn criar_rdo_completo() -> Rdo {
    Rdo {
        rdo_id: "RDO-2025-0100".to_string(),
        obra_id: "OBRA-TORRE-02".to_string(),
        data: data(2025, 4, 2),
        clima: CondicaoClimatica::Nublado,
        temperatura: 24.0,
        total_horas_previstas: 8.0,
        atividades: vec![Atividade {
            descricao: "Armação da viga V12".to_string(),
            responsavel: Some("Maria".to_string()),
            percentual_concluido: 60.0,
            status: StatusAtividade::EmAndamento,
        }],
        mao_de_obra: vec![MaoDeObra {
            funcionario: "João".to_string(),
            hora_inicio: "07:00".to_string(),
            hora_fim: "16:00".to_string(),
            horas_trabalhadas: 9.0,
        }],
        status: StatusRdo::Pendente,
        criado_por: "Ana".to_string(),
        criado_em: data(2025, 4, 2).and_hms_opt(17, 45, 0).unwrap(),
    }
}

fn criar_diretorio() -> Vec<Funcionario> {
    vec![Funcionario {
        nome: "João".to_string(),
        funcao: "armador".to_string(),
        valor_hora: 48.0,
        certificacoes: vec![Certificacao {
            nome: "NR-35".to_string(),
            status: StatusCertificacao::Valida,
            validade: data(2026, 4, 2),
        }],
        ativo: true,
    }]
}

// ==========================================
// Fluxo conforme de ponta a ponta
// ==========================================

#[test]
fn test_fluxo_completo_conforme() {
    println!("\n=== Teste: fluxo completo conforme ===");

    let api = ControlApi::new(ControlConfig::default());
    let rdo = criar_rdo_completo();
    let diretorio = criar_diretorio();

    let relatorio = api
        .full_report(&rdo, &diretorio, data(2025, 4, 2))
        .expect("fluxo deve concluir");

    // Avaliação: 9h sobre meta de 8h, desvio 0.125
    assert!(relatorio.avaliacao.hh_dentro_limite);
    assert!(relatorio.avaliacao.custo_dentro_orcamento);
    assert!(relatorio.avaliacao.certificacoes_validas);
    assert!(relatorio.avaliacao.alertas.is_empty());

    // Produtividade derivada
    assert_eq!(relatorio.produtividade.status_geral, StatusGeralHh::Conforme);
    assert_eq!(relatorio.produtividade.eficiencia, 112.5);
    assert_eq!(relatorio.produtividade.custo_por_hora, 48.0);
    assert!(relatorio.produtividade.recomendacoes.is_empty());

    // Validação de campos limpa
    assert_eq!(relatorio.validacoes.len(), 1);
    assert_eq!(relatorio.validacoes[0].tipo, Severidade::Sucesso);
}

// ==========================================
// Fluxo com alertas
// ==========================================

#[test]
fn test_fluxo_com_estouro_de_jornada() {
    println!("\n=== Teste: fluxo com estouro de jornada ===");

    let api = ControlApi::new(ControlConfig::default());
    let mut rdo = criar_rdo_completo();
    rdo.mao_de_obra[0].horas_trabalhadas = 13.0;
    let diretorio = criar_diretorio();

    let relatorio = api
        .full_report(&rdo, &diretorio, data(2025, 4, 2))
        .expect("fluxo deve concluir");

    assert!(!relatorio.avaliacao.hh_dentro_limite);
    assert!(relatorio
        .avaliacao
        .alertas
        .iter()
        .any(|a| a.contains("12h")));
    assert_eq!(
        relatorio.produtividade.status_geral,
        StatusGeralHh::ComAlertas
    );
    assert!(relatorio
        .produtividade
        .recomendacoes
        .iter()
        .any(|r| r.contains("pendências")));

    // O rascunho também aponta as horas individuais
    assert!(relatorio
        .validacoes
        .iter()
        .any(|v| v.tipo == Severidade::Erro));
}

// ==========================================
// Rejeição na borda
// ==========================================

#[test]
fn test_identificacao_vazia_rejeitada() {
    let api = ControlApi::new(ControlConfig::default());
    let mut rdo = criar_rdo_completo();
    rdo.obra_id = "".to_string();

    let result = api.evaluate_hh_control(&rdo, &[], data(2025, 4, 2));

    match result {
        Err(ApiError::EntradaInvalida(msg)) => assert!(msg.contains("obra_id")),
        _ => panic!("esperado ApiError::EntradaInvalida"),
    }
}

// ==========================================
// Painel financeiro via fachada
// ==========================================

#[test]
fn test_painel_com_snapshot_vazio() {
    let api = DashboardApi::new(ControlConfig::default());
    let snapshot = CrmSnapshot::default();

    let consolidado = api
        .consolidate(&snapshot, data(2025, 4, 2))
        .expect("snapshot vazio não falha");

    assert_eq!(consolidado.valor_pipeline_total, 0.0);
    assert_eq!(consolidado.probabilidade_media_fechamento, 0.0);
    assert!(api.most_critical_contract(&consolidado).is_none());

    let linhas = api
        .margin_deviations(&consolidado, None, Some(10))
        .expect("consulta não falha");
    assert!(linhas.is_empty());
}

// ==========================================
// Serialização do relatório agregado
// ==========================================

#[test]
fn test_relatorio_serializa_para_json() {
    let api = ControlApi::new(ControlConfig::default());
    let rdo = criar_rdo_completo();
    let diretorio = criar_diretorio();

    let relatorio = api
        .full_report(&rdo, &diretorio, data(2025, 4, 2))
        .expect("fluxo deve concluir");

    let json = serde_json::to_string(&relatorio).expect("serialização deve funcionar");

    // Contrato de dados consumido pela apresentação
    assert!(json.contains("\"hh_dentro_limite\":true"));
    assert!(json.contains("\"custo_dentro_orcamento\":true"));
    assert!(json.contains("\"status_geral\":\"CONFORME\""));
    assert!(json.contains("\"tipo\":\"SUCESSO\""));
}

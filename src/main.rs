// ==========================================
// Gestão de Canteiro de Obras - Entrada CLI
// ==========================================
// Uso:
//   obra-control avaliar --rdo <rdo.json> --equipe <equipe.csv>
//       [--data-referencia AAAA-MM-DD] [--config <config.json>]
//   obra-control financeiro --crm <crm.json>
//       [--data-referencia AAAA-MM-DD] [--config <config.json>]
// ==========================================

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

use obra_control::api::{ControlApi, DashboardApi};
use obra_control::config::ConfigManager;
use obra_control::i18n;
use obra_control::importer::{load_crm, load_rdo, WorkforceImporter};
use obra_control::logging;

fn main() {
    logging::init();
    i18n::set_locale("pt-BR");

    tracing::info!("==================================================");
    tracing::info!("{} - apoio à decisão", obra_control::APP_NAME);
    tracing::info!("versão: {}", obra_control::VERSION);
    tracing::info!("==================================================");

    if let Err(err) = executar() {
        tracing::error!("{}", err);
        eprintln!("{}: {}", i18n::t("common.error"), err);
        std::process::exit(1);
    }
}

fn executar() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let comando = args
        .first()
        .ok_or_else(|| anyhow!(i18n::t("cli.usage")))?
        .clone();

    match comando.as_str() {
        "avaliar" => avaliar(&args[1..]),
        "financeiro" => financeiro(&args[1..]),
        _ => Err(anyhow!(i18n::t("cli.usage"))),
    }
}

/// Avalia um RDO: controle de HH + produtividade + validação de campos
fn avaliar(args: &[String]) -> Result<()> {
    let rdo_path = opcao(args, "--rdo")?.ok_or_else(|| anyhow!("--rdo é obrigatório"))?;
    let equipe_path =
        opcao(args, "--equipe")?.ok_or_else(|| anyhow!("--equipe é obrigatório"))?;

    let rdo = load_rdo(&PathBuf::from(&rdo_path))?;
    let diretorio = WorkforceImporter::new().import_csv(&PathBuf::from(&equipe_path))?;
    let data_referencia = data_referencia(args, rdo.data)?;
    let config = carregar_config(args)?;

    tracing::info!(
        "{}",
        i18n::t_with_args("cli.evaluating", &[("rdo", &rdo.rdo_id)])
    );

    let api = ControlApi::new(config);
    let relatorio = api.full_report(&rdo, &diretorio, data_referencia)?;

    if relatorio.avaliacao.alertas.is_empty() {
        tracing::info!("{}", i18n::t("report.compliant"));
    } else {
        tracing::warn!("{}", i18n::t("report.with_alerts"));
    }

    println!("{}", serde_json::to_string_pretty(&relatorio)?);
    tracing::info!("{}", i18n::t("cli.done"));
    Ok(())
}

/// Consolida o painel financeiro a partir do snapshot comercial
fn financeiro(args: &[String]) -> Result<()> {
    let crm_path = opcao(args, "--crm")?.ok_or_else(|| anyhow!("--crm é obrigatório"))?;

    let snapshot = load_crm(&PathBuf::from(&crm_path))?;
    let hoje = chrono::Local::now().date_naive();
    let data_referencia = data_referencia(args, hoje)?;
    let config = carregar_config(args)?;

    tracing::info!("{}", i18n::t("cli.consolidating"));

    let api = DashboardApi::new(config);
    let consolidado = api.consolidate(&snapshot, data_referencia)?;

    println!("{}", serde_json::to_string_pretty(&consolidado)?);
    tracing::info!("{}", i18n::t("cli.done"));
    Ok(())
}

/// Valor de uma opção "--chave valor", se presente
fn opcao(args: &[String], chave: &str) -> Result<Option<String>> {
    match args.iter().position(|a| a == chave) {
        Some(i) => {
            let valor = args
                .get(i + 1)
                .ok_or_else(|| anyhow!("{} exige um valor", chave))?;
            Ok(Some(valor.clone()))
        }
        None => Ok(None),
    }
}

/// Data de referência: opção explícita ou o padrão fornecido
fn data_referencia(args: &[String], padrao: NaiveDate) -> Result<NaiveDate> {
    match opcao(args, "--data-referencia")? {
        Some(texto) => NaiveDate::parse_from_str(&texto, "%Y-%m-%d")
            .with_context(|| format!("data de referência inválida: {}", texto)),
        None => Ok(padrao),
    }
}

/// Configuração: arquivo explícito, caminho padrão, ou padrões de negócio
fn carregar_config(args: &[String]) -> Result<obra_control::ControlConfig> {
    let manager = match opcao(args, "--config")? {
        Some(caminho) => ConfigManager::from_file(&PathBuf::from(caminho))?,
        None => ConfigManager::load_or_default(),
    };
    Ok(manager.config().clone())
}

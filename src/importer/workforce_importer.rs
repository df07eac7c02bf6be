// ==========================================
// Gestão de Canteiro de Obras - Importador do Diretório de Mão de Obra
// ==========================================
// Formato: CSV com cabeçalho
//   nome,funcao,valor_hora,ativo,certificacao,status_certificacao,validade
// Uma certificação por linha; linhas com o mesmo nome são mescladas em
// um único funcionário. Colunas de certificação em branco significam
// "linha sem certificação".
// ==========================================

use crate::domain::types::StatusCertificacao;
use crate::domain::workforce::{Certificacao, Funcionario};
use crate::importer::error::ImportError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Linha crua do CSV, antes da conversão de tipos
#[derive(Debug, Deserialize)]
struct LinhaDiretorio {
    nome: String,
    funcao: String,
    valor_hora: String,
    ativo: String,
    #[serde(default)]
    certificacao: String,
    #[serde(default)]
    status_certificacao: String,
    #[serde(default)]
    validade: String,
}

// ==========================================
// WorkforceImporter - importador do diretório
// ==========================================
pub struct WorkforceImporter {}

impl WorkforceImporter {
    /// Construtor
    pub fn new() -> Self {
        Self {}
    }

    /// Importa o diretório de mão de obra de um arquivo CSV
    ///
    /// # Retorno
    /// Funcionários na ordem da primeira ocorrência no arquivo
    pub fn import_csv(&self, path: &Path) -> Result<Vec<Funcionario>, ImportError> {
        if !path.exists() {
            return Err(ImportError::ArquivoNaoEncontrado(
                path.display().to_string(),
            ));
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut funcionarios: Vec<Funcionario> = Vec::new();

        for (i, resultado) in reader.deserialize::<LinhaDiretorio>().enumerate() {
            // Linha 1 é o cabeçalho
            let linha = i + 2;
            let registro = resultado?;

            if registro.nome.is_empty() {
                return Err(ImportError::CampoObrigatorioVazio {
                    linha,
                    campo: "nome".to_string(),
                });
            }

            let valor_hora = registro.valor_hora.parse::<f64>().map_err(|_| {
                ImportError::ValorInvalido {
                    linha,
                    campo: "valor_hora".to_string(),
                    mensagem: format!("'{}' não é um número", registro.valor_hora),
                }
            })?;

            let ativo = parse_ativo(&registro.ativo, linha)?;
            let certificacao = parse_certificacao(&registro, linha)?;

            // Mescla linhas do mesmo funcionário
            match funcionarios.iter_mut().find(|f| f.nome == registro.nome) {
                Some(existente) => {
                    if let Some(cert) = certificacao {
                        existente.certificacoes.push(cert);
                    }
                }
                None => {
                    funcionarios.push(Funcionario {
                        nome: registro.nome,
                        funcao: registro.funcao,
                        valor_hora,
                        certificacoes: certificacao.into_iter().collect(),
                        ativo,
                    });
                }
            }
        }

        info!(
            "diretório importado de {}: {} funcionários",
            path.display(),
            funcionarios.len()
        );

        Ok(funcionarios)
    }
}

impl Default for WorkforceImporter {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_ativo(valor: &str, linha: usize) -> Result<bool, ImportError> {
    match valor.to_lowercase().as_str() {
        "" | "sim" | "true" | "1" => Ok(true),
        "nao" | "não" | "false" | "0" => Ok(false),
        outro => Err(ImportError::ValorInvalido {
            linha,
            campo: "ativo".to_string(),
            mensagem: format!("'{}' não é sim/nao", outro),
        }),
    }
}

/// Converte as colunas de certificação da linha, quando preenchidas
fn parse_certificacao(
    registro: &LinhaDiretorio,
    linha: usize,
) -> Result<Option<Certificacao>, ImportError> {
    if registro.certificacao.is_empty() {
        return Ok(None);
    }

    let status = match registro.status_certificacao.to_uppercase().as_str() {
        "VALIDA" => StatusCertificacao::Valida,
        "VENCIDA" => StatusCertificacao::Vencida,
        "SUSPENSA" => StatusCertificacao::Suspensa,
        outro => {
            return Err(ImportError::ValorInvalido {
                linha,
                campo: "status_certificacao".to_string(),
                mensagem: format!("'{}' não é VALIDA/VENCIDA/SUSPENSA", outro),
            })
        }
    };

    let validade = NaiveDate::parse_from_str(&registro.validade, "%Y-%m-%d").map_err(|_| {
        ImportError::DataInvalida {
            linha,
            campo: "validade".to_string(),
            valor: registro.validade.clone(),
        }
    })?;

    Ok(Some(Certificacao {
        nome: registro.certificacao.clone(),
        status,
        validade,
    }))
}

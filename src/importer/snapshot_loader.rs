// ==========================================
// Gestão de Canteiro de Obras - Carga de Snapshots JSON
// ==========================================
// RDOs e registros comerciais chegam como arquivos JSON exportados
// pela camada de estado. O núcleo só lê.
// ==========================================

use crate::domain::financial::{Contrato, Lead, Oportunidade, Orcamento};
use crate::domain::rdo::Rdo;
use crate::importer::error::ImportError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Snapshot comercial completo (coleções ausentes viram vazias)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrmSnapshot {
    #[serde(default)]
    pub leads: Vec<Lead>,
    #[serde(default)]
    pub oportunidades: Vec<Oportunidade>,
    #[serde(default)]
    pub orcamentos: Vec<Orcamento>,
    #[serde(default)]
    pub contratos: Vec<Contrato>,
}

/// Carrega um RDO de arquivo JSON
pub fn load_rdo(path: &Path) -> Result<Rdo, ImportError> {
    let conteudo = ler_arquivo(path)?;
    Ok(serde_json::from_str(&conteudo)?)
}

/// Carrega o snapshot comercial de arquivo JSON
pub fn load_crm(path: &Path) -> Result<CrmSnapshot, ImportError> {
    let conteudo = ler_arquivo(path)?;
    Ok(serde_json::from_str(&conteudo)?)
}

fn ler_arquivo(path: &Path) -> Result<String, ImportError> {
    if !path.exists() {
        return Err(ImportError::ArquivoNaoEncontrado(
            path.display().to_string(),
        ));
    }

    Ok(std::fs::read_to_string(path)?)
}

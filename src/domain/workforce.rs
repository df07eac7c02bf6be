// ==========================================
// Gestão de Canteiro de Obras - Diretório de Mão de Obra
// ==========================================
// Baseado em: Regras_Negocio_RDO.md - 3. Cadastro de funcionários
// ==========================================
// Cadastro mantido fora do núcleo; os motores apenas leem.
// Funcionário ausente do diretório não é erro: a taxa padrão
// de configuração é substituída no custeio.
// ==========================================

use crate::domain::types::StatusCertificacao;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Funcionario - entrada do diretório
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Funcionario {
    pub nome: String,                       // chave de referência usada nos RDOs
    pub funcao: String,                     // pedreiro, armador, eletricista...
    pub valor_hora: f64,                    // taxa horária (R$/h)
    pub certificacoes: Vec<Certificacao>,   // NRs e treinamentos
    pub ativo: bool,                        // desligados permanecem para histórico
}

impl Funcionario {
    /// Possui ao menos uma certificação VALIDA com validade estritamente
    /// posterior à data de referência. Uma única certificação vigente basta.
    pub fn certificacao_vigente(&self, data_referencia: NaiveDate) -> bool {
        self.certificacoes.iter().any(|c| {
            c.status == StatusCertificacao::Valida && c.validade > data_referencia
        })
    }
}

// ==========================================
// Certificacao - NR ou treinamento
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificacao {
    pub nome: String,                  // "NR-35", "NR-10"...
    pub status: StatusCertificacao,    // situação cadastral
    pub validade: NaiveDate,           // data de expiração
}

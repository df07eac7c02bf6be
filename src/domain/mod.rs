// ==========================================
// Gestão de Canteiro de Obras - Camada de Domínio
// ==========================================
// Baseado em: Regras_Negocio_RDO.md / Regras_Negocio_CRM.md
// ==========================================
// Responsabilidade: entidades, tipos e regras de leitura derivada
// Restrição: sem acesso a dados, sem lógica de motor
// ==========================================

pub mod financial;
pub mod hh_control;
pub mod rdo;
pub mod types;
pub mod validation;
pub mod workforce;

// Reexporta tipos centrais
pub use financial::{
    AnaliseFinanceira, ConsolidadoFinanceiro, Contrato, DesvioMargemContrato, Lead,
    Oportunidade, Orcamento,
};
pub use hh_control::{AvaliacaoHh, HhControlData, RelatorioProdutividade};
pub use rdo::{Atividade, MaoDeObra, Rdo};
pub use types::{
    CondicaoClimatica, FaixaDesvioMargem, Severidade, StatusAtividade, StatusCertificacao,
    StatusContrato, StatusGeralHh, StatusLead, StatusOportunidade, StatusRdo,
};
pub use validation::{severidade_maxima, Validacao};
pub use workforce::{Certificacao, Funcionario};

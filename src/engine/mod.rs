// ==========================================
// Gestão de Canteiro de Obras - Camada de Motores
// ==========================================
// Baseado em: Regras_Negocio_RDO.md / Regras_Negocio_CRM.md
// ==========================================
// Responsabilidade: regras de negócio puras sobre snapshots em memória
// Restrição: sem I/O, sem estado compartilhado; toda regra gera mensagem
// legível; recomputação sempre integral
// ==========================================

pub mod financial;
pub mod hh_control;
pub mod productivity;
pub mod rdo_validation;

// Reexporta os motores
pub use financial::FinancialEngine;
pub use hh_control::HhControlEngine;
pub use productivity::ProductivityEngine;
pub use rdo_validation::RdoValidationEngine;

// ==========================================
// Gestão de Canteiro de Obras - Biblioteca Núcleo
// ==========================================
// Baseado em: Regras_Negocio_RDO.md / Regras_Negocio_CRM.md
// Stack: Rust puro (motores) + serde/chrono/tracing
// Posicionamento: apoio à decisão (controle humano final)
// ==========================================

// Inicializa o sistema de internacionalização
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// Declaração de módulos
// ==========================================

// Camada de domínio - entidades e tipos
pub mod domain;

// Camada de motores - regras de negócio
pub mod engine;

// Camada de importação - dados externos
pub mod importer;

// Camada de configuração - parâmetros de negócio
pub mod config;

// Sistema de logs
pub mod logging;

// Internacionalização
pub mod i18n;

// Camada de API - fachadas de negócio
pub mod api;

// ==========================================
// Reexporta tipos centrais
// ==========================================

// Tipos de domínio
pub use domain::types::{
    CondicaoClimatica, FaixaDesvioMargem, Severidade, StatusAtividade, StatusCertificacao,
    StatusContrato, StatusGeralHh, StatusLead, StatusOportunidade, StatusRdo,
};

// Entidades de domínio
pub use domain::{
    Atividade, Certificacao, ConsolidadoFinanceiro, Contrato, DesvioMargemContrato,
    Funcionario, HhControlData, Lead, MaoDeObra, Oportunidade, Orcamento, Rdo,
    RelatorioProdutividade, Validacao,
};

// Traits de leitura derivada
pub use domain::{AnaliseFinanceira, AvaliacaoHh};

// Motores
pub use engine::{FinancialEngine, HhControlEngine, ProductivityEngine, RdoValidationEngine};

// Configuração
pub use config::{ConfigManager, ControlConfig};

// API
pub use api::{ControlApi, DashboardApi, RdoControlReport};

// ==========================================
// Constantes do sistema
// ==========================================

// Versão do sistema
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nome do sistema
pub const APP_NAME: &str = "Gestão de Canteiro de Obras";

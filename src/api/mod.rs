// ==========================================
// Gestão de Canteiro de Obras - Camada de API
// ==========================================
// Responsabilidade: fachadas de negócio para a camada de apresentação
// Restrição: validação de entrada na borda; motores permanecem totais
// ==========================================

pub mod control_api;
pub mod dashboard_api;
pub mod error;

pub use control_api::{ControlApi, RdoControlReport};
pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};

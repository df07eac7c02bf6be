// ==========================================
// Gestão de Canteiro de Obras - Camada de Importação
// ==========================================
// Adaptadores de entrada externa (CSV/JSON). Fora do núcleo de
// cálculo: os motores nunca tocam arquivo.
// ==========================================

pub mod error;
pub mod snapshot_loader;
pub mod workforce_importer;

pub use error::ImportError;
pub use snapshot_loader::{load_crm, load_rdo, CrmSnapshot};
pub use workforce_importer::WorkforceImporter;

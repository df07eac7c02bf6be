// ==========================================
// Gestão de Canteiro de Obras - Gerenciador de Configuração
// ==========================================
// Baseado em: Regras_Negocio_RDO.md - 7. Parâmetros de controle
// ==========================================
// Responsabilidade: carga e consulta dos parâmetros de negócio
// Armazenamento: arquivo JSON (sobrescreve os padrões campo a campo)
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Erros da camada de configuração
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("arquivo de configuração não encontrado: {0}")]
    ArquivoNaoEncontrado(String),

    #[error("falha ao ler configuração: {0}")]
    LeituraFalhou(#[from] std::io::Error),

    #[error("configuração inválida: {0}")]
    FormatoInvalido(#[from] serde_json::Error),
}

// ==========================================
// ControlConfig - parâmetros de negócio
// ==========================================
// Os padrões refletem as regras vigentes; o arquivo JSON permite
// sobrescrever obra a obra.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    // ===== Limites de HH =====
    /// Teto legal de HH somadas no dia (12 exatas passam; só > 12 viola)
    pub limite_diario_hh: f64,
    /// Horas individuais acima disso geram alerta no rascunho
    pub alerta_hh_individual: f64,
    /// Horas individuais acima disso geram erro adicional no rascunho
    pub erro_hh_individual: f64,

    // ===== Tolerâncias de produtividade =====
    /// |desvio| até este valor (inclusive) passa na verificação de orçamento
    pub tolerancia_desvio: f64,
    /// |desvio| acima disso acrescenta o alerta de produtividade crítica
    pub desvio_critico: f64,

    // ===== Custeio =====
    /// Taxa horária substituída quando o funcionário não está no diretório (R$/h)
    pub valor_hora_padrao: f64,

    // ===== Plausibilidade ambiental =====
    pub temperatura_minima: f64,
    pub temperatura_maxima: f64,
    /// Chuva com temperatura acima disso é combinação suspeita
    pub temperatura_chuva_suspeita: f64,

    // ===== Margens de contrato =====
    /// Queda de margem (p.p.) além da qual o contrato entra em ATENCAO
    pub desvio_margem_atencao: f64,
    /// Queda de margem (p.p.) além da qual o contrato entra em CRITICO
    pub desvio_margem_critico: f64,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            limite_diario_hh: 12.0,
            alerta_hh_individual: 10.0,
            erro_hh_individual: 12.0,
            tolerancia_desvio: 0.15,
            desvio_critico: 0.25,
            valor_hora_padrao: 50.0,
            temperatura_minima: 5.0,
            temperatura_maxima: 40.0,
            temperatura_chuva_suspeita: 30.0,
            desvio_margem_atencao: 5.0,
            desvio_margem_critico: 15.0,
        }
    }
}

// ==========================================
// ConfigManager - carga e consulta
// ==========================================
pub struct ConfigManager {
    config: ControlConfig,
}

impl ConfigManager {
    /// Configuração padrão, sem arquivo
    pub fn new() -> Self {
        Self {
            config: ControlConfig::default(),
        }
    }

    /// Carrega do arquivo JSON indicado
    ///
    /// Campos ausentes no arquivo recebem o valor padrão (serde default).
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ArquivoNaoEncontrado(
                path.display().to_string(),
            ));
        }

        let conteudo = std::fs::read_to_string(path)?;
        let config: ControlConfig = serde_json::from_str(&conteudo)?;

        info!("configuração carregada de {}", path.display());
        Ok(Self { config })
    }

    /// Carrega do caminho padrão se existir; caso contrário usa os padrões
    pub fn load_or_default() -> Self {
        let caminho = Self::default_config_path();
        match Self::from_file(&caminho) {
            Ok(manager) => manager,
            Err(_) => {
                debug!(
                    "sem arquivo de configuração em {}, usando padrões",
                    caminho.display()
                );
                Self::new()
            }
        }
    }

    /// Caminho padrão do arquivo de configuração
    ///
    /// `~/.config/obra-control/config.json` (ou equivalente da plataforma)
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("obra-control")
            .join("config.json")
    }

    /// Parâmetros vigentes
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

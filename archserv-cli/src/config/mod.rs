//! Configuration des couches et de la découverte des fichiers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use archserv::Code;

/// Configuration principale
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Extensions des fichiers de relevé lors du parcours d'un dossier
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Couche par code (clé: code numérique en texte, ex: "6")
    #[serde(default)]
    pub layers: HashMap<String, LayerConfig>,
}

/// Configuration d'une couche
#[derive(Debug, Deserialize, Serialize)]
pub struct LayerConfig {
    /// Nom de la couche en sortie
    pub layer: String,

    #[serde(default)]
    pub description: Option<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string()]
}

impl Config {
    /// Charge une configuration depuis un fichier
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// Charge une configuration depuis un preset embarqué
    pub fn from_preset(preset: &str) -> Result<Self> {
        match preset {
            "default" => Self::load_embedded(include_str!("presets/default.json")),
            _ => anyhow::bail!("Unknown preset: {}. Use: default", preset),
        }
    }

    /// Preset embarqué ou chemin vers un JSON
    pub fn resolve(spec: &str) -> Result<Self> {
        match spec {
            "default" => Self::from_preset(spec),
            _ => Self::load(Path::new(spec)),
        }
    }

    fn load_embedded(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse embedded config")
    }

    /// Nom de couche d'un code: configuration, sinon table des codes, sinon `code_NN`
    pub fn layer_name(&self, code: u8) -> String {
        if let Some(layer) = self.layers.get(&code.to_string()) {
            return layer.layer.clone();
        }
        match Code::from_value(code) {
            Some(known) => known.name().to_lowercase(),
            None => format!("code_{:02}", code),
        }
    }

    /// Vrai si le fichier a une extension de relevé
    pub fn is_survey_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| {
                self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
            })
    }
}

//! Rapport de lecture des relevés
//!
//! Un rapport par fichier: compteurs de stations et de points, regroupements
//! par couche, durée et erreur éventuelle.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use archserv::Dataset;
use serde::Serialize;

use crate::config::Config;

/// Statut de la lecture d'un fichier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadStatus {
    /// Fichier lu entièrement
    Success,
    /// Lecture interrompue (fichier illisible ou ligne invalide)
    Failed,
}

/// Statistiques par couche
#[derive(Debug, Clone, Default, Serialize)]
pub struct LayerStats {
    /// Nombre de couples (contexte, groupe) distincts
    pub groups: usize,
    /// Nombre de points
    pub points: usize,
}

/// Rapport de lecture d'un fichier
#[derive(Debug, Clone, Serialize)]
pub struct ReadReport {
    /// Fichier source
    pub path: String,
    /// Durée de la lecture
    pub duration_secs: f64,
    /// Statut global
    pub status: ReadStatus,

    /// Nombre de stations
    pub stations: usize,
    /// Nombre de points codés
    pub points: usize,
    /// Nombre de couples (contexte, code)
    pub features: usize,

    /// Statistiques par couche
    pub by_layer: BTreeMap<String, LayerStats>,

    /// Message d'erreur en cas d'échec
    pub error: Option<String>,
}

impl ReadReport {
    /// Crée un nouveau rapport pour un fichier
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.display().to_string(),
            duration_secs: 0.0,
            status: ReadStatus::Success,
            stations: 0,
            points: 0,
            features: 0,
            by_layer: BTreeMap::new(),
            error: None,
        }
    }

    /// Enregistre le contenu d'un dataset lu
    pub fn record_dataset(&mut self, dataset: &Dataset, config: &Config) {
        self.stations = dataset.stations.len();
        self.points = dataset.points.len();

        let features = dataset.features();
        self.features = features.len();
        for (key, groups) in features.iter() {
            let stats = self.by_layer.entry(config.layer_name(key.code)).or_default();
            stats.groups += groups.len();
            stats.points += groups.values().map(Vec::len).sum::<usize>();
        }
    }

    /// Enregistre l'échec de la lecture
    pub fn record_failure(&mut self, message: &str) {
        self.status = ReadStatus::Failed;
        self.error = Some(message.to_string());
    }

    /// Définit la durée de la lecture
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    /// Affiche le rapport sur la console
    pub fn display(&self) {
        println!("\n{}", "=".repeat(60));
        println!("SURVEY REPORT - {}", self.path);
        println!("{}", "=".repeat(60));

        println!("\nStatus: {:?}", self.status);
        println!("Duration: {:.3}s", self.duration_secs);

        if let Some(ref error) = self.error {
            println!("\nError: {}", error);
            return;
        }

        println!("\n--- SUMMARY ---");
        println!(
            "Stations: {}, points: {}, features: {}",
            self.stations, self.points, self.features
        );

        if !self.by_layer.is_empty() {
            println!("\n--- BY LAYER ---");
            for (layer, stats) in &self.by_layer {
                println!("  {}: {} groups, {} points", layer, stats.groups, stats.points);
            }
        }
    }

    /// Affichage compact pour le résumé
    pub fn summary(&self) -> String {
        match self.status {
            ReadStatus::Success => format!(
                "{}: {} stations, {} points, {} features",
                self.path, self.stations, self.points, self.features
            ),
            ReadStatus::Failed => format!(
                "{}: failed ({})",
                self.path,
                self.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}

/// Sauvegarde les rapports en JSON
pub fn save_reports(reports: &[ReadReport], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    std::fs::write(path, json)?;
    Ok(())
}

//! Définition et implémentation des commandes CLI
//!
//! - `info`: rapport de lecture d'un fichier ou d'un dossier de relevés
//! - `stations`: liste des stations
//! - `points`: liste des points codés triés
//! - `features`: regroupement des points par (contexte, code) puis groupe

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use archserv::{Dataset, PointRecord};
use clap::Subcommand;
use geo::{BoundingRect, MultiPoint};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::Config;
use crate::report::{save_reports, ReadReport, ReadStatus};

#[derive(Subcommand)]
pub enum Commands {
    /// Read survey files and print a report per file
    Info {
        /// Path to a survey file or a directory (searched recursively)
        path: PathBuf,

        /// Save the reports as JSON
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// List station records in file order
    Stations {
        /// Path to a survey file
        path: PathBuf,
    },

    /// List encoded points in key order
    Points {
        /// Path to a survey file
        path: PathBuf,
    },

    /// Show points grouped by context, code and group
    Features {
        /// Path to a survey file
        path: PathBuf,
    },
}

/// Exécute la commande info
pub fn cmd_info(path: &Path, config: &Config, report_path: Option<&Path>) -> Result<()> {
    let surveys = collect_surveys(path, config)?;

    if surveys.is_empty() {
        anyhow::bail!("No survey files found in {}", path.display());
    }

    info!("Found {} survey files", surveys.len());

    // Chaque fichier a son propre dataset: lecture en parallèle
    let reports: Vec<ReadReport> = surveys
        .par_iter()
        .map(|survey| read_survey(survey, config))
        .collect();

    for report in &reports {
        report.display();
    }

    let failed = reports
        .iter()
        .filter(|r| r.status == ReadStatus::Failed)
        .count();

    println!(
        "\nRead complete: {}/{} files",
        reports.len() - failed,
        reports.len()
    );
    if failed > 0 {
        warn!("{} files failed", failed);
    }

    if let Some(report_path) = report_path {
        save_reports(&reports, report_path)
            .with_context(|| format!("Failed to save report to {}", report_path.display()))?;
        info!("Report saved to {}", report_path.display());
    }

    Ok(())
}

/// Exécute la commande stations
pub fn cmd_stations(path: &Path) -> Result<()> {
    let dataset = load_dataset(path)?;

    for station in &dataset.stations {
        println!("{}", station);
    }

    Ok(())
}

/// Exécute la commande points
pub fn cmd_points(path: &Path) -> Result<()> {
    let dataset = load_dataset(path)?;

    let mut points: Vec<&PointRecord> = dataset.points.iter().collect();
    points.sort_by_key(|p| p.key);

    for point in points {
        println!("{}", point);
    }

    Ok(())
}

/// Exécute la commande features
pub fn cmd_features(path: &Path, config: &Config) -> Result<()> {
    let dataset = load_dataset(path)?;
    let features = dataset.features();

    for key in features.sorted_keys() {
        let Some(groups) = features.get(key.context, key.code) else {
            continue;
        };

        let kind = key
            .known_code()
            .map(|code| code.geometry_kind().to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        println!(
            "{:04}/{:02} {} ({})",
            key.context,
            key.code,
            config.layer_name(key.code),
            kind
        );

        let mut letters: Vec<&char> = groups.keys().collect();
        letters.sort();
        for letter in letters {
            let points = &groups[letter];
            println!(
                "  {}: {} points{}",
                letter,
                points.len(),
                format_extent(points)
            );
        }
    }

    println!(
        "\n{} features, {} points, {} stations",
        features.len(),
        features.point_count(),
        dataset.stations.len()
    );

    Ok(())
}

/// Lit un fichier et produit son rapport (l'échec est consigné, pas propagé)
fn read_survey(path: &Path, config: &Config) -> ReadReport {
    let start = Instant::now();
    let mut report = ReadReport::new(path);

    match archserv::parse(path) {
        Ok(dataset) => report.record_dataset(&dataset, config),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            report.record_failure(&e.to_string());
        }
    }

    report.set_duration(start.elapsed());
    report
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    archserv::parse(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Emprise planimétrique d'un groupe de points
fn format_extent(points: &[&PointRecord]) -> String {
    let multi: MultiPoint<f64> = points.iter().map(|p| p.position()).collect();
    match multi.bounding_rect() {
        Some(rect) => format!(
            ", extent [{:.3}, {:.3}] - [{:.3}, {:.3}]",
            rect.min().x,
            rect.min().y,
            rect.max().x,
            rect.max().y
        ),
        None => String::new(),
    }
}

/// Collecte récursivement les fichiers de relevé
fn collect_surveys(path: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let mut surveys = Vec::new();

    // Un fichier explicite est lu quelle que soit son extension
    if path.is_file() {
        surveys.push(path.to_path_buf());
        return Ok(surveys);
    }

    let entries =
        std::fs::read_dir(path).with_context(|| format!("Cannot read {}", path.display()))?;
    for entry in entries {
        let entry_path = entry?.path();

        if entry_path.is_dir() {
            surveys.extend(collect_surveys(&entry_path, config)?);
        } else if config.is_survey_file(&entry_path) {
            surveys.push(entry_path);
        }
    }

    surveys.sort();
    Ok(surveys)
}

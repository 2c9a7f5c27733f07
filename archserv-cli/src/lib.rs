//! # archserv-cli
//!
//! Inspection de relevés ArchServ en ligne de commande.
//!
//! ## Features
//!
//! - Rapport de lecture par fichier (lecture parallèle d'un dossier)
//! - Liste des stations et des points codés
//! - Regroupement en features avec nom de couche configurable
//!
//! ## Usage CLI
//!
//! ```bash
//! archserv info ./releves/ --report report.json
//! archserv stations ./releve.txt
//! archserv --config ./couches.json features ./releve.txt
//! ```

pub mod cli;
pub mod config;
pub mod report;

pub use config::Config;
pub use report::{ReadReport, ReadStatus};

//! # archserv
//!
//! Parser pour le format de relevé topographique ArchServ.
//!
//! ## Features
//!
//! - Distinction stations / points codés (`CCCCGCCIII`) au décodage de la clé
//! - Regroupement des points triés par (contexte, code) puis par groupe
//! - Table des codes avec le type de géométrie attendu (point, ligne, polygone)
//! - Validation UTF-8 SIMD avec `simdutf8`, repli ISO-8859-15 via `encoding_rs`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use archserv::parse;
//! use std::path::Path;
//!
//! let dataset = parse(Path::new("releve.txt"))?;
//! println!("Stations: {}", dataset.stations.len());
//!
//! let features = dataset.features();
//! for key in features.sorted_keys() {
//!     for (group, points) in features.get(key.context, key.code).into_iter().flatten() {
//!         println!("{:04}/{:02} {}: {} points", key.context, key.code, group, points.len());
//!     }
//! }
//! ```

pub mod codes;
pub mod dataset;
pub mod error;
pub mod key;
pub mod parser;
pub mod types;

pub use codes::{Code, GeometryKind};
pub use dataset::{Dataset, FeatureGroups, FeatureKey, Features};
pub use error::ArchServError;
pub use key::{decode, Key, StructuredKey};
pub use types::{Classified, PointRecord, Record, StationRecord};

use std::path::Path;

/// Lit un fichier de relevé ArchServ.
///
/// # Errors
///
/// Retourne `ArchServError::Io` si le fichier est illisible, ou
/// `ArchServError::MalformedLine` à la première ligne invalide.
pub fn parse(path: &Path) -> Result<Dataset, ArchServError> {
    let data = std::fs::read(path)?;
    let text = parser::text::decode(&data);

    let dataset = Dataset::from_lines(text.lines())?;

    tracing::debug!(
        path = %path.display(),
        points = dataset.points.len(),
        stations = dataset.stations.len(),
        "Fichier lu"
    );
    Ok(dataset)
}

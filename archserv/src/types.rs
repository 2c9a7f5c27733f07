//! Types de données pour le crate archserv

use std::fmt;

use geo::Point;

use crate::key::{Key, StructuredKey};

/// Un enregistrement du relevé (une ligne du fichier)
///
/// Générique sur le type de clé: la sortie brute du parser porte une [`Key`],
/// le dataset range ensuite les points sous [`StructuredKey`] et les stations
/// sous leur nom.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<K = Key> {
    /// Identifiant du point ou nom de la station
    pub key: K,

    pub x: f64,
    pub y: f64,
    pub z: f64,

    /// Code de classification libre (souvent absent pour les stations)
    pub code: Option<String>,
}

/// Point levé avec clé codée
pub type PointRecord = Record<StructuredKey>;

/// Station (point de référence nommé librement)
pub type StationRecord = Record<String>;

/// Résultat du tri d'un enregistrement brut
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    Point(PointRecord),
    Station(StationRecord),
}

impl<K> Record<K> {
    /// Coordonnées XYZ
    pub fn xyz(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Position planimétrique (X, Y)
    pub fn position(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }
}

impl Record<Key> {
    /// Vrai si la clé n'a pas pu être décodée (nom de station).
    ///
    /// Ne dépend pas de la présence du code.
    pub fn is_station(&self) -> bool {
        self.key.is_raw()
    }

    /// Sépare points et stations selon le type de clé
    pub fn classify(self) -> Classified {
        let Record { key, x, y, z, code } = self;
        match key {
            Key::Structured(key) => Classified::Point(Record { key, x, y, z, code }),
            Key::Raw(key) => Classified::Station(Record { key, x, y, z, code }),
        }
    }
}

impl<K: fmt::Display> fmt::Display for Record<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t\t{}\t{}\t{}\t{}",
            self.key,
            self.x,
            self.y,
            self.z,
            self.code.as_deref().unwrap_or("")
        )
    }
}

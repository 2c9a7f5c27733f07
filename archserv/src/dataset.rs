//! Agrégation des enregistrements et regroupement en features

use std::collections::HashMap;
use std::io::BufRead;

use tracing::{debug, trace};

use crate::codes::Code;
use crate::parser;
use crate::types::{Classified, PointRecord, StationRecord};
use crate::ArchServError;

/// Résultat de la lecture d'un relevé
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    /// Points à clé codée, dans l'ordre du fichier
    pub points: Vec<PointRecord>,

    /// Stations, dans l'ordre du fichier
    pub stations: Vec<StationRecord>,
}

/// Clé de premier niveau du regroupement: (contexte, code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureKey {
    pub context: u16,
    pub code: u8,
}

impl FeatureKey {
    pub fn new(context: u16, code: u8) -> Self {
        Self { context, code }
    }

    pub fn known_code(&self) -> Option<Code> {
        Code::from_value(self.code)
    }
}

/// Points regroupés par groupe (lettre), triés par index
pub type FeatureGroups<'a> = HashMap<char, Vec<&'a PointRecord>>;

/// Points triés et regroupés par (contexte, code) puis par groupe
///
/// L'ordre d'itération des maps n'est pas garanti, voir [`Features::sorted_keys`].
#[derive(Debug, Default)]
pub struct Features<'a> {
    groups: HashMap<FeatureKey, FeatureGroups<'a>>,
}

impl<'a> Features<'a> {
    pub fn get(&self, context: u16, code: u8) -> Option<&FeatureGroups<'a>> {
        self.groups.get(&FeatureKey::new(context, code))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FeatureKey, &FeatureGroups<'a>)> {
        self.groups.iter()
    }

    /// Clés triées, pour un affichage déterministe
    pub fn sorted_keys(&self) -> Vec<FeatureKey> {
        let mut keys: Vec<_> = self.groups.keys().copied().collect();
        keys.sort();
        keys
    }

    /// Nombre de couples (contexte, code)
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Nombre total de points regroupés
    pub fn point_count(&self) -> usize {
        self.groups
            .values()
            .flat_map(|groups| groups.values())
            .map(Vec::len)
            .sum()
    }
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construit un dataset depuis des lignes de texte
    pub fn from_lines<I, S>(lines: I) -> Result<Self, ArchServError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dataset = Self::new();
        dataset.read(lines)?;
        Ok(dataset)
    }

    /// Lit des lignes et les ajoute aux points ou aux stations.
    ///
    /// Les lignes vides sont ignorées. La première ligne invalide interrompt la
    /// lecture: le dataset est alors dans un état partiel à ne pas utiliser.
    pub fn read<I, S>(&mut self, lines: I) -> Result<(), ArchServError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, line) in lines.into_iter().enumerate() {
            self.read_line(i + 1, line.as_ref())?;
        }

        debug!(
            points = self.points.len(),
            stations = self.stations.len(),
            "Relevé lu"
        );
        Ok(())
    }

    /// Lit depuis un flux bufferisé (les erreurs d'I/O sont propagées)
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<(), ArchServError> {
        for (i, line) in reader.lines().enumerate() {
            self.read_line(i + 1, &line?)?;
        }

        debug!(
            points = self.points.len(),
            stations = self.stations.len(),
            "Relevé lu"
        );
        Ok(())
    }

    fn read_line(&mut self, line_no: usize, line: &str) -> Result<(), ArchServError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        let record = parser::point::parse(line).map_err(|e| e.at_line(line_no))?;
        match record.classify() {
            Classified::Point(point) => self.points.push(point),
            Classified::Station(station) => {
                trace!(line = line_no, station = %station.key, "Station");
                self.stations.push(station);
            }
        }
        Ok(())
    }

    /// Regroupe les points triés par (contexte, code) puis par groupe.
    ///
    /// Les stations sont exclues. Dans un groupe, les points sont triés par index.
    pub fn features(&self) -> Features<'_> {
        let mut sorted: Vec<&PointRecord> = self.points.iter().collect();
        sorted.sort_by_key(|point| point.key);

        let mut groups: HashMap<FeatureKey, FeatureGroups<'_>> = HashMap::new();
        for point in sorted {
            let key = FeatureKey::new(point.key.context(), point.key.code());
            groups
                .entry(key)
                .or_default()
                .entry(point.key.group())
                .or_default()
                .push(point);
        }

        Features { groups }
    }
}

//! Types d'erreurs pour le crate archserv

use thiserror::Error;

/// Erreurs pouvant survenir lors de la lecture d'un relevé ArchServ
#[derive(Debug, Error)]
pub enum ArchServError {
    /// Erreur d'I/O lors de la lecture du fichier
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ligne non vide qui ne respecte pas la grammaire d'un enregistrement
    #[error(
        "Malformed line{}: {line:?}",
        .line_no.map(|n| format!(" {n}")).unwrap_or_default()
    )]
    MalformedLine {
        /// Numéro de ligne (1-based), connu seulement lors d'une lecture complète
        line_no: Option<usize>,
        /// Texte brut de la ligne fautive
        line: String,
    },

    /// Identifiant qui n'a pas la forme d'une clé codée (CCCCGCCIII)
    #[error("Invalid structured key: {0:?}")]
    InvalidKey(String),
}

impl ArchServError {
    /// Crée une erreur de ligne malformée sans numéro de ligne
    pub fn malformed(line: impl Into<String>) -> Self {
        Self::MalformedLine {
            line_no: None,
            line: line.into(),
        }
    }

    /// Attache un numéro de ligne à une erreur de ligne malformée
    pub fn at_line(self, line_no: usize) -> Self {
        match self {
            Self::MalformedLine { line, .. } => Self::MalformedLine {
                line_no: Some(line_no),
                line,
            },
            other => other,
        }
    }
}

//! Parsers pour le format texte ArchServ

pub mod point;
pub mod text;

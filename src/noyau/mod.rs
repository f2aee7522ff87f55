//! Noyau du convertisseur de notations
//!
//! Organisation interne :
//! - jetons.rs     : tokenisation (lexeur à balayage)
//! - notation.rs   : les trois notations + table de précédence
//! - erreurs.rs    : taxonomie des erreurs (valeurs, jamais de panique)
//! - automate.rs   : validation (automate infixe, compteur de profondeur)
//! - conversion.rs : pivot infixe + réductions par pile
//! - api.rs        : façade valider / convertir

pub mod api;
pub mod automate;
pub mod conversion;
pub mod erreurs;
pub mod jetons;
pub mod notation;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use api::{convertir, valider, ResultatConversion, ResultatValidation};
pub use erreurs::ErreurExpr;
pub use notation::Notation;

// src/lib.rs
//
// Convertisseur de notations — racine de la bibliothèque
// ------------------------------------------------------
// But:
// - valider qu'une expression arithmétique est bien formée dans la
//   notation annoncée (infixe, préfixe ou postfixe)
// - convertir entre n'importe quel couple de ces trois notations,
//   toujours via un pivot infixe unique
//
// La bibliothèque est sans état et sans E/S : les front-ends (menu CLI,
// formulaire web, entraîneur de combos…) sont des collaborateurs
// externes qui marshalent le texte utilisateur vers `valider` /
// `convertir` et affichent les chaînes retournées.

pub mod noyau;

pub use noyau::{
    convertir, valider, ErreurExpr, Notation, ResultatConversion, ResultatValidation,
};

// src/noyau/notation.rs
//
// Les trois notations supportées + la table de précédence.
// La table est une constante du processus : partageable par autant
// d'appels simultanés que voulu, jamais modifiée après construction.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::jetons::Jeton;

/// Notation d'écriture d'une expression arithmétique.
/// Passée par valeur (Copy). Se parse depuis les étiquettes que les
/// front-ends marshalent ("infixe", "prefix", …) et s'affiche pour les
/// traces et les messages.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Notation {
    /// Opérateur entre ses deux opérandes : `A + B`.
    #[strum(to_string = "infixe", serialize = "infix")]
    Infixe,

    /// Opérateur avant ses opérandes (polonaise) : `+ A B`.
    #[strum(to_string = "préfixe", serialize = "prefixe", serialize = "prefix")]
    Prefixe,

    /// Opérateur après ses opérandes (polonaise inversée) : `A B +`.
    #[strum(to_string = "postfixe", serialize = "postfix")]
    Postfixe,
}

/// Associativité d'un opérateur dans la table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Gauche,
    Droite,
}

/// Rang de précédence : ^ (3) > * / (2) > + - (1).
/// 0 pour tout jeton qui n'est pas un opérateur.
pub fn precedence(j: &Jeton) -> i32 {
    match j {
        Jeton::Plus | Jeton::Minus => 1,
        Jeton::Star | Jeton::Slash => 2,
        Jeton::Caret => 3,
        _ => 0,
    }
}

/// Associativité : gauche pour + - * /, droite pour ^.
/// None pour tout jeton qui n'est pas un opérateur.
pub fn associativite(j: &Jeton) -> Option<Assoc> {
    match j {
        Jeton::Plus | Jeton::Minus | Jeton::Star | Jeton::Slash => Some(Assoc::Gauche),
        Jeton::Caret => Some(Assoc::Droite),
        _ => None,
    }
}

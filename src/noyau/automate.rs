// src/noyau/automate.rs
//
// Validation des trois notations.
// - Infixe : automate à deux états (alternance opérande/opérateur)
//   + compteur d'équilibre des parenthèses, indépendant de l'état.
// - Postfixe / préfixe : compteur de profondeur ("opérandes nets
//   disponibles") ; le préfixe est le MÊME balayage, lu de droite à
//   gauche — l'ordre de lecture est la seule différence.

use super::erreurs::ErreurExpr;
use super::jetons::Jeton;
use super::notation::Notation;

/// État courant de l'automate infixe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Etat {
    AttendOperande,
    AttendOperateur,
}

/// Valide une suite de jetons dans la notation annoncée.
/// Une suite vide est refusée d'emblée, quelle que soit la notation.
pub fn valider_jetons(jetons: &[Jeton], notation: Notation) -> Result<(), ErreurExpr> {
    if jetons.is_empty() {
        return Err(ErreurExpr::EntreeVide);
    }

    match notation {
        Notation::Infixe => valider_infixe(jetons),
        Notation::Postfixe => valider_profondeur(jetons.iter()),
        Notation::Prefixe => valider_profondeur(jetons.iter().rev()),
    }
}

/// Automate infixe : état initial AttendOperande, transition exhaustive
/// par (état, jeton), équilibre des parenthèses vérifié en fin de
/// balayage seulement.
fn valider_infixe(jetons: &[Jeton]) -> Result<(), ErreurExpr> {
    let mut etat = Etat::AttendOperande;
    let mut equilibre: i64 = 0;

    for j in jetons {
        match j {
            Jeton::Operande(_) => match etat {
                Etat::AttendOperande => etat = Etat::AttendOperateur,
                Etat::AttendOperateur => return Err(ErreurExpr::OperateurAttendu(j.texte())),
            },

            Jeton::Plus | Jeton::Minus | Jeton::Star | Jeton::Slash | Jeton::Caret => match etat {
                Etat::AttendOperateur => etat = Etat::AttendOperande,
                Etat::AttendOperande => return Err(ErreurExpr::OperandeAttendu(j.texte())),
            },

            // '(' légale seulement en position d'opérande ; l'état ne change pas.
            Jeton::LPar => {
                if etat == Etat::AttendOperateur {
                    return Err(ErreurExpr::ParentheseMalPlacee(j.texte()));
                }
                equilibre += 1;
            }

            // ')' légale seulement en position d'opérateur ; l'état ne change pas.
            Jeton::RPar => {
                if etat == Etat::AttendOperande {
                    return Err(ErreurExpr::ParentheseMalPlacee(j.texte()));
                }
                equilibre -= 1;
            }
        }
    }

    if equilibre != 0 {
        return Err(ErreurExpr::ParenthesesDesequilibrees);
    }
    if etat == Etat::AttendOperande {
        return Err(ErreurExpr::FinSurOperateur);
    }
    Ok(())
}

/// Balayage préfixe/postfixe : profondeur = opérandes nets disponibles.
/// Chaque opérateur consomme deux opérandes et en produit un ; une
/// expression bien formée termine à profondeur 1 exactement.
fn valider_profondeur<'a, I>(jetons: I) -> Result<(), ErreurExpr>
where
    I: Iterator<Item = &'a Jeton>,
{
    let mut profondeur: usize = 0;

    for j in jetons {
        match j {
            Jeton::Operande(_) => profondeur += 1,

            Jeton::Plus | Jeton::Minus | Jeton::Star | Jeton::Slash | Jeton::Caret => {
                if profondeur < 2 {
                    return Err(ErreurExpr::OperandesInsuffisants(j.texte()));
                }
                profondeur -= 1;
            }

            // Flux sans parenthèses : toute parenthèse est illégale ici.
            Jeton::LPar | Jeton::RPar => return Err(ErreurExpr::JetonIllegal(j.texte())),
        }
    }

    if profondeur != 1 {
        return Err(ErreurExpr::DesequilibreStructurel(profondeur));
    }
    Ok(())
}

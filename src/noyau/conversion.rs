// src/noyau/conversion.rs
//
// Conversion entre notations, toujours via un pivot infixe unique :
//   source -> infixe (pivot) -> cible
//
// Règles:
// - postfixe/préfixe -> infixe : réduction par pile de sous-chaînes
//   parenthésées. L'ordre de pop est un CONTRAT (nommé sur chaque
//   fonction) : l'inverser re-parenthèse l'expression et fausse les
//   opérateurs non commutatifs.
// - infixe -> postfixe : shunting-yard (réduction par précédence),
//   dépile à précédence égale.
// - infixe -> préfixe : renverse -> échange '(' et ')' -> même
//   réduction en comparaison STRICTE -> renverse la sortie. C'est LA
//   dérivation du préfixe ; toute autre se trompe sur les précédences
//   mélangées.

use super::erreurs::ErreurExpr;
use super::jetons::{format_jetons, tokenize, Jeton};
use super::notation::{precedence, Notation};

/// Pipeline complet (validation exclue — voir api.rs) : normalise la
/// source vers le pivot infixe puis émet la cible.
pub fn convertir_jetons(
    expression: &str,
    jetons: &[Jeton],
    de: Notation,
    vers: Notation,
) -> Result<String, ErreurExpr> {
    let pivot = vers_infixe(expression, jetons, de)?;

    Ok(match vers {
        Notation::Infixe => pivot,
        Notation::Postfixe => infixe_vers_postfixe(&tokenize(&pivot)),
        Notation::Prefixe => infixe_vers_prefixe(&tokenize(&pivot)),
    })
}

/// Normalise l'expression source vers le pivot infixe.
/// `de = Infixe` : la chaîne passe inchangée (elle EST le pivot).
pub fn vers_infixe(
    expression: &str,
    jetons: &[Jeton],
    de: Notation,
) -> Result<String, ErreurExpr> {
    match de {
        Notation::Infixe => Ok(expression.to_string()),
        Notation::Postfixe => postfixe_vers_infixe(jetons),
        Notation::Prefixe => prefixe_vers_infixe(jetons),
    }
}

/// Postfixe -> infixe. Balayage gauche→droite ; sur un opérateur, le
/// PREMIER pop est l'opérande DROIT (droite puis gauche), d'où
/// "(gauche OP droite)".
pub fn postfixe_vers_infixe(jetons: &[Jeton]) -> Result<String, ErreurExpr> {
    let mut pile: Vec<String> = Vec::new();

    for j in jetons {
        match j {
            Jeton::Operande(s) => pile.push(s.clone()),

            Jeton::Plus | Jeton::Minus | Jeton::Star | Jeton::Slash | Jeton::Caret => {
                let droite = pile.pop().ok_or(ErreurExpr::PileInterne(0))?;
                let gauche = pile.pop().ok_or(ErreurExpr::PileInterne(0))?;
                let op = j.texte();
                pile.push(format!("({gauche} {op} {droite})"));
            }

            Jeton::LPar | Jeton::RPar => return Err(ErreurExpr::JetonIllegal(j.texte())),
        }
    }

    fin_de_reduction(pile)
}

/// Préfixe -> infixe. Même réduction, balayage droite→gauche ; le
/// PREMIER pop est l'opérande GAUCHE (gauche puis droite), d'où
/// "(gauche OP droite)" là aussi.
pub fn prefixe_vers_infixe(jetons: &[Jeton]) -> Result<String, ErreurExpr> {
    let mut pile: Vec<String> = Vec::new();

    for j in jetons.iter().rev() {
        match j {
            Jeton::Operande(s) => pile.push(s.clone()),

            Jeton::Plus | Jeton::Minus | Jeton::Star | Jeton::Slash | Jeton::Caret => {
                let gauche = pile.pop().ok_or(ErreurExpr::PileInterne(0))?;
                let droite = pile.pop().ok_or(ErreurExpr::PileInterne(0))?;
                let op = j.texte();
                pile.push(format!("({gauche} {op} {droite})"));
            }

            Jeton::LPar | Jeton::RPar => return Err(ErreurExpr::JetonIllegal(j.texte())),
        }
    }

    fin_de_reduction(pile)
}

/// Fin de réduction : la pile DOIT contenir exactement un élément.
/// Une autre taille malgré une validation passée est un bug interne —
/// signalé, jamais tronqué en silence.
fn fin_de_reduction(mut pile: Vec<String>) -> Result<String, ErreurExpr> {
    if pile.len() != 1 {
        return Err(ErreurExpr::PileInterne(pile.len()));
    }
    Ok(pile.pop().unwrap())
}

/// Infixe -> postfixe. Jetons de sortie joints par des espaces.
pub fn infixe_vers_postfixe(jetons: &[Jeton]) -> String {
    format_jetons(&reduction_postfixe(jetons, true))
}

/// Infixe -> préfixe, en quatre étapes :
/// renverse -> échange '(' et ')' -> réduction postfixe STRICTE
/// (à précédence égale on ne dépile pas : l'inégalité stricte
/// ré-associe correctement le balayage renversé) -> renverse la sortie.
pub fn infixe_vers_prefixe(jetons: &[Jeton]) -> String {
    let miroir: Vec<Jeton> = jetons
        .iter()
        .rev()
        .cloned()
        .map(|j| match j {
            Jeton::LPar => Jeton::RPar,
            Jeton::RPar => Jeton::LPar,
            autre => autre,
        })
        .collect();

    let mut sortie = reduction_postfixe(&miroir, false);
    sortie.reverse();
    format_jetons(&sortie)
}

/// Réduction par précédence (shunting-yard) : suite infixe -> suite
/// postfixe.
/// `depile_egalite` : à précédence égale, dépiler (passe directe,
/// réduction associative à gauche) ou non (passe miroir du préfixe).
fn reduction_postfixe(jetons: &[Jeton], depile_egalite: bool) -> Vec<Jeton> {
    let mut sortie: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    for j in jetons.iter().cloned() {
        match j {
            Jeton::Operande(_) => sortie.push(j),

            Jeton::LPar => ops.push(j),

            Jeton::RPar => {
                // dépile jusqu'à '(' — l'équilibre est garanti par la validation
                while let Some(haut) = ops.pop() {
                    if matches!(haut, Jeton::LPar) {
                        break;
                    }
                    sortie.push(haut);
                }
            }

            Jeton::Plus | Jeton::Minus | Jeton::Star | Jeton::Slash | Jeton::Caret => {
                while let Some(haut) = ops.last() {
                    if matches!(haut, Jeton::LPar) {
                        break;
                    }

                    let p_haut = precedence(haut);
                    let p_jeton = precedence(&j);

                    let doit_depiler = if depile_egalite {
                        p_haut >= p_jeton
                    } else {
                        p_haut > p_jeton
                    };

                    if doit_depiler {
                        sortie.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(j);
            }
        }
    }

    while let Some(op) = ops.pop() {
        debug_assert!(
            !matches!(op, Jeton::LPar),
            "parenthèse résiduelle malgré la validation"
        );
        sortie.push(op);
    }

    sortie
}

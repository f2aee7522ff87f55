// src/noyau/api.rs
//
// Façade publique : les DEUX opérations offertes aux collaborateurs
// (menu CLI, formulaire web, harnais de test). Sans état, sans E/S.
// Chaque appel tokenise et valide pour son propre compte — `convertir`
// ne fait jamais confiance à une validation antérieure de l'appelant,
// les deux opérations restent donc utilisables indépendamment.

use serde::Serialize;
use tracing::debug;

use super::automate::valider_jetons;
use super::conversion::convertir_jetons;
use super::jetons::tokenize;
use super::notation::Notation;

/// Verdict de validation. `ok == false` porte toujours un diagnostic
/// non vide nommant la condition fautive.
#[derive(Clone, Debug, Serialize)]
pub struct ResultatValidation {
    pub ok: bool,
    pub message: String,
}

/// Résultat de conversion. `valeur == None` seulement si la validation
/// a refusé l'entrée ou si l'invariant interne de réduction a été violé
/// (branche défensive).
#[derive(Clone, Debug, Serialize)]
pub struct ResultatConversion {
    pub valeur: Option<String>,
    pub message: String,
}

/// Valide `expression` dans la notation annoncée.
pub fn valider(expression: &str, notation: Notation) -> ResultatValidation {
    let jetons = tokenize(expression);

    match valider_jetons(&jetons, notation) {
        Ok(()) => ResultatValidation {
            ok: true,
            message: message_valide(notation).to_string(),
        },
        Err(e) => {
            debug!(%notation, erreur = %e, "validation refusée");
            ResultatValidation {
                ok: false,
                message: e.to_string(),
            }
        }
    }
}

/// Convertit `expression` de la notation `de` vers la notation `vers`.
/// Valide d'abord contre `de` ; en cas de refus, le diagnostic de
/// validation devient le message d'échec (valeur = None).
pub fn convertir(expression: &str, de: Notation, vers: Notation) -> ResultatConversion {
    let jetons = tokenize(expression);

    if let Err(e) = valider_jetons(&jetons, de) {
        debug!(%de, %vers, erreur = %e, "conversion refusée à la validation");
        return ResultatConversion {
            valeur: None,
            message: e.to_string(),
        };
    }

    match convertir_jetons(expression, &jetons, de, vers) {
        Ok(valeur) => {
            debug!(%de, %vers, %valeur, "conversion réussie");
            ResultatConversion {
                valeur: Some(valeur),
                message: "conversion réussie".to_string(),
            }
        }
        // branche défensive : pile de réduction incohérente malgré la
        // validation — on surface le diagnostic, valeur absente
        Err(e) => ResultatConversion {
            valeur: None,
            message: e.to_string(),
        },
    }
}

/// Message d'acceptation par notation.
fn message_valide(notation: Notation) -> &'static str {
    match notation {
        Notation::Infixe => "expression infixe valide",
        Notation::Prefixe => "expression préfixe valide",
        Notation::Postfixe => "expression postfixe valide",
    }
}

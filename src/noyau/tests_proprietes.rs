//! Campagne de propriétés : les garanties publiées de la façade.
//!
//! But : vérifier les invariants de conversion sans construire d'arbre.
//! - aller-retour par le postfixe : structure préservée à parenthésage
//!   près (re-dériver le postfixe depuis l'infixe aller-retour redonne
//!   exactement la même chaîne)
//! - précédence jamais inversée dans la sortie postfixe
//! - idempotence de la conversion à notation identique
//! - toute sortie de conversion est valide dans sa notation cible

use strum::IntoEnumIterator;

use super::api::{convertir, valider};
use super::notation::Notation;

fn conv_ok(expr: &str, de: Notation, vers: Notation) -> String {
    let r = convertir(expr, de, vers);
    r.valeur
        .unwrap_or_else(|| panic!("conversion {de} -> {vers} refusée pour {expr:?} : {}", r.message))
}

/// Échantillon valide par notation (même structure dans les trois).
fn echantillon(notation: Notation) -> &'static str {
    match notation {
        Notation::Infixe => "3+5*(2-8)",
        Notation::Postfixe => "3 5 2 8 - * +",
        Notation::Prefixe => "+ 3 * 5 - 2 8",
    }
}

/* ------------------------ Aller-retour ------------------------ */

#[test]
fn prop_aller_retour_par_le_postfixe() {
    for expr in [
        "3+5*2",
        "3+5*(2-8)",
        "a*(b+c)/d-e",
        "1+2+3+4",
        "x^y^z",
        "((a))",
        "(a+b)*(c-d)",
    ] {
        let postfixe = conv_ok(expr, Notation::Infixe, Notation::Postfixe);
        let retour = conv_ok(&postfixe, Notation::Postfixe, Notation::Infixe);
        assert_eq!(
            conv_ok(&retour, Notation::Infixe, Notation::Postfixe),
            postfixe,
            "structure altérée par l'aller-retour, expr={expr:?}"
        );
    }
}

#[test]
fn prop_aller_retour_par_le_prefixe() {
    for expr in ["3+5*2", "3+5*(2-8)", "a*(b+c)/d-e", "8/2/2"] {
        let prefixe = conv_ok(expr, Notation::Infixe, Notation::Prefixe);
        let retour = conv_ok(&prefixe, Notation::Prefixe, Notation::Infixe);
        assert_eq!(
            conv_ok(&retour, Notation::Infixe, Notation::Prefixe),
            prefixe,
            "structure altérée par l'aller-retour, expr={expr:?}"
        );
    }
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn prop_precedence_jamais_inversee() {
    // l'opérateur qui lie plus fort sort AVANT celui qui lie moins fort
    assert_eq!(conv_ok("3 + 5 * 2", Notation::Infixe, Notation::Postfixe), "3 5 2 * +");
    assert_eq!(conv_ok("3 * 5 + 2", Notation::Infixe, Notation::Postfixe), "3 5 * 2 +");
    assert_eq!(
        conv_ok("1 + 2 ^ 3 * 4", Notation::Infixe, Notation::Postfixe),
        "1 2 3 ^ 4 * +"
    );
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn prop_idempotence_meme_notation() {
    for notation in Notation::iter() {
        let expr = echantillon(notation);
        let une = conv_ok(expr, notation, notation);
        let deux = conv_ok(&une, notation, notation);
        assert_eq!(une, deux, "conversion {notation} -> {notation} non stable");
    }
}

/* ------------------------ Clôture sur les neuf couples ------------------------ */

#[test]
fn prop_toute_sortie_est_valide_dans_sa_cible() {
    for de in Notation::iter() {
        for vers in Notation::iter() {
            let sortie = conv_ok(echantillon(de), de, vers);
            let verdict = valider(&sortie, vers);
            assert!(
                verdict.ok,
                "sortie {de} -> {vers} invalide : {sortie:?} ({})",
                verdict.message
            );
        }
    }
}

/* ------------------------ Équivalence des trois écritures ------------------------ */

#[test]
fn prop_les_trois_echantillons_concordent() {
    // les trois échantillons décrivent la même structure : normalisés
    // vers l'infixe, ils donnent le même postfixe
    let reference = conv_ok(echantillon(Notation::Postfixe), Notation::Postfixe, Notation::Infixe);
    let depuis_prefixe =
        conv_ok(echantillon(Notation::Prefixe), Notation::Prefixe, Notation::Infixe);
    assert_eq!(reference, depuis_prefixe);

    let postfixe_depuis_infixe =
        conv_ok(echantillon(Notation::Infixe), Notation::Infixe, Notation::Postfixe);
    assert_eq!(postfixe_depuis_infixe, echantillon(Notation::Postfixe));
}

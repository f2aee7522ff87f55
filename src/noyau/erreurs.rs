// src/noyau/erreurs.rs
//
// Taxonomie des erreurs du noyau. Toutes récupérables : elles circulent
// en valeur (jamais de panique), et leur Display est le diagnostic
// montré tel quel par les front-ends.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurExpr {
    /// Aucun jeton après tokenisation.
    #[error("entrée vide")]
    EntreeVide,

    /// Jeton sans place dans la notation annoncée
    /// (parenthèse dans un flux préfixe/postfixe).
    #[error("jeton illégal : '{0}'")]
    JetonIllegal(String),

    /// Alternance infixe rompue : opérande reçu en position d'opérateur.
    #[error("erreur sur '{0}' : opérateur attendu")]
    OperateurAttendu(String),

    /// Alternance infixe rompue : opérateur reçu en position d'opérande.
    #[error("erreur sur '{0}' : opérande attendu")]
    OperandeAttendu(String),

    /// Parenthèse dans un état où l'automate l'interdit.
    #[error("parenthèse mal placée : '{0}'")]
    ParentheseMalPlacee(String),

    /// Équilibre des parenthèses non nul en fin de balayage.
    #[error("parenthèses non équilibrées")]
    ParenthesesDesequilibrees,

    /// Balayage infixe terminé en attente d'un opérande.
    #[error("l'expression se termine sur un opérateur")]
    FinSurOperateur,

    /// Opérateur préfixe/postfixe rencontré avec moins de deux opérandes
    /// disponibles.
    #[error("opérandes insuffisants pour l'opérateur '{0}'")]
    OperandesInsuffisants(String),

    /// Profondeur finale ≠ 1 en préfixe/postfixe (compte
    /// opérandes/opérateurs incohérent).
    #[error("structure invalide : {0} opérande(s) résiduel(s)")]
    DesequilibreStructurel(usize),

    /// Défensif seulement : la réduction vers l'infixe termine avec une
    /// pile de taille ≠ 1 alors que la validation est passée. Signale un
    /// désaccord validateur/convertisseur ; jamais masqué.
    #[error("invariant interne violé : pile de réduction de taille {0}")]
    PileInterne(usize),
}

// src/noyau/jetons.rs

/// Jeton lexical : atome immuable, sans position (l'ordre de la suite
/// est la seule structure).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    // Suite maximale de caractères alphanumériques ("3", "42", "ab3").
    Operande(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,
}

impl Jeton {
    /// Vrai pour les cinq opérateurs binaires (+ - * / ^).
    pub fn est_operateur(&self) -> bool {
        matches!(
            self,
            Jeton::Plus | Jeton::Minus | Jeton::Star | Jeton::Slash | Jeton::Caret
        )
    }

    /// Texte source du jeton, tel qu'il sera ré-émis.
    pub fn texte(&self) -> String {
        match self {
            Jeton::Operande(s) => s.clone(),

            Jeton::Plus => "+".to_string(),
            Jeton::Minus => "-".to_string(),
            Jeton::Star => "*".to_string(),
            Jeton::Slash => "/".to_string(),
            Jeton::Caret => "^".to_string(),

            Jeton::LPar => "(".to_string(),
            Jeton::RPar => ")".to_string(),
        }
    }
}

/// Tokenize une chaîne en jetons. Règle (lexeur à balayage, PAS de
/// découpe sur espaces — variante retenue et documentée ici) :
/// - une suite maximale de caractères alphanumériques = un Operande
/// - chacun de + - * / ^ ( ) = un jeton d'un caractère
/// - tout autre caractère (espaces compris) est un séparateur et ne
///   produit aucun jeton
///
/// Conséquence : "(3+5)" et "( 3 + 5 )" donnent la même suite.
/// Ne peut pas échouer — une entrée vide ou faite de séparateurs donne
/// une suite vide ; c'est la validation qui signale ce cas, pas ici.
pub fn tokenize(s: &str) -> Vec<Jeton> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Parenthèses
        if c == '(' {
            out.push(Jeton::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Jeton::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Jeton::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Jeton::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Jeton::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Jeton::Caret);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Opérandes : suite maximale alphanumérique
        if c.is_alphanumeric() {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_alphanumeric() {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            out.push(Jeton::Operande(texte));
            continue;
        }

        // Séparateur (espace ou caractère hors alphabet) : ignoré
        i += 1;
    }

    out
}

/// Format utilitaire : suite de jetons en texte, un espace entre chaque.
/// C'est aussi le format d'émission des conversions.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(Jeton::texte)
        .collect::<Vec<_>>()
        .join(" ")
}

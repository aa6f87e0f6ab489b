//! Static keyword table, consulted by the Scanner when finalizing an
//! identifier lexeme.

use crate::token::TokenKind;

/// Returns the keyword token kind for `text`, or `None` if `text` is not a
/// reserved word (in which case the caller should emit `Identificar`).
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    match text {
        "incluir" => Some(TokenKind::Incluir),
        "e" => Some(TokenKind::E),
        "classe" => Some(TokenKind::Classe),
        "senao" => Some(TokenKind::Senao),
        "falso" => Some(TokenKind::Falso),
        "por" => Some(TokenKind::Por),
        "definir" => Some(TokenKind::Definir),
        "se" => Some(TokenKind::Se),
        "nulo" => Some(TokenKind::Nulo),
        "ou" => Some(TokenKind::Ou),
        "said" => Some(TokenKind::Said),
        "saida" => Some(TokenKind::Saida),
        "retorne" => Some(TokenKind::Retorne),
        "super" => Some(TokenKind::Super),
        "isso" => Some(TokenKind::Isso),
        "verdadeiro" => Some(TokenKind::Verdadeiro),
        "var" => Some(TokenKind::Var),
        "enquanto" => Some(TokenKind::Enquanto),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_incluir() {
        assert_eq!(keyword_from_ident("incluir"), Some(TokenKind::Incluir));
    }

    #[test]
    fn keyword_e() {
        assert_eq!(keyword_from_ident("e"), Some(TokenKind::E));
    }

    #[test]
    fn keyword_classe() {
        assert_eq!(keyword_from_ident("classe"), Some(TokenKind::Classe));
    }

    #[test]
    fn keyword_senao() {
        assert_eq!(keyword_from_ident("senao"), Some(TokenKind::Senao));
    }

    #[test]
    fn keyword_falso() {
        assert_eq!(keyword_from_ident("falso"), Some(TokenKind::Falso));
    }

    #[test]
    fn keyword_por() {
        assert_eq!(keyword_from_ident("por"), Some(TokenKind::Por));
    }

    #[test]
    fn keyword_definir() {
        assert_eq!(keyword_from_ident("definir"), Some(TokenKind::Definir));
    }

    #[test]
    fn keyword_se() {
        assert_eq!(keyword_from_ident("se"), Some(TokenKind::Se));
    }

    #[test]
    fn keyword_nulo() {
        assert_eq!(keyword_from_ident("nulo"), Some(TokenKind::Nulo));
    }

    #[test]
    fn keyword_ou() {
        assert_eq!(keyword_from_ident("ou"), Some(TokenKind::Ou));
    }

    #[test]
    fn keyword_said() {
        assert_eq!(keyword_from_ident("said"), Some(TokenKind::Said));
    }

    #[test]
    fn keyword_saida() {
        assert_eq!(keyword_from_ident("saida"), Some(TokenKind::Saida));
    }

    #[test]
    fn keyword_retorne() {
        assert_eq!(keyword_from_ident("retorne"), Some(TokenKind::Retorne));
    }

    #[test]
    fn keyword_super() {
        assert_eq!(keyword_from_ident("super"), Some(TokenKind::Super));
    }

    #[test]
    fn keyword_isso() {
        assert_eq!(keyword_from_ident("isso"), Some(TokenKind::Isso));
    }

    #[test]
    fn keyword_verdadeiro() {
        assert_eq!(keyword_from_ident("verdadeiro"), Some(TokenKind::Verdadeiro));
    }

    #[test]
    fn keyword_var() {
        assert_eq!(keyword_from_ident("var"), Some(TokenKind::Var));
    }

    #[test]
    fn keyword_enquanto() {
        assert_eq!(keyword_from_ident("enquanto"), Some(TokenKind::Enquanto));
    }

    #[test]
    fn non_keyword_returns_none() {
        assert_eq!(keyword_from_ident("minhaVariavel"), None);
        assert_eq!(keyword_from_ident("said2"), None);
        assert_eq!(keyword_from_ident(""), None);
    }
}

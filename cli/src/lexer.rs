use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[regex(r"-?[0-9]+", priority = 3)]
    Number,

    #[regex(r"[a-zA-Z0-9_+\-*/\\=<>!&]+")]
    Symbol,
}

/// How many brackets are still open at the end of `buffer`.
///
/// Returns `None` when the buffer contains something the grammar would never
/// accept, so the caller can hand it to the parser for a proper error.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for token_res in Token::lexer(buffer) {
        match token_res {
            Ok(Token::LParen) | Ok(Token::LBrace) => depth += 1,
            Ok(Token::RParen) | Ok(Token::RBrace) => depth -= 1,

            // Valid tokens that don't affect depth
            Ok(_) => {}

            Err(_) => {
                return None;
            }
        }
    }

    if depth < 0 {
        Some(0)
    } else {
        Some(depth as usize)
    }
}

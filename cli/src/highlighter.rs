use logos::Logos;
use lispy::Builtin;
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

use crate::lexer::Token;

const DEFAULT: Color = Color::White;

fn token_color(token: Token, text: &str) -> Color {
    match token {
        Token::Number => Color::Cyan,
        Token::Symbol if Builtin::from_name(text).is_some() => Color::Blue,
        Token::Symbol => Color::Red,
        Token::LParen | Token::RParen => Color::White,
        Token::LBrace | Token::RBrace => Color::Magenta,
    }
}

/// Colours numbers, builtin names, unknown symbols and brackets.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut curr_end = 0;

        for (token_res, span) in Token::lexer(line).spanned() {
            // Whitespace between tokens
            if span.start > curr_end {
                output.push((Style::new().fg(DEFAULT), line[curr_end..span.start].to_string()));
            }

            let text = &line[span.clone()];
            let color = match token_res {
                Ok(token) => token_color(token, text),
                Err(_) => Color::LightRed,
            };
            output.push((Style::new().fg(color), text.to_string()));
            curr_end = span.end;
        }

        if curr_end < line.len() {
            output.push((Style::new().fg(DEFAULT), line[curr_end..].to_string()));
        }

        output
    }
}

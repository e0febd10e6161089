use nom::{
    bytes::complete::{take_till1, take_while},
    IResult,
};
use crate::token::{Span, Token};

fn skip_space(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

/// Split a sentence on whitespace, keeping byte spans into `original_input`.
///
/// This is the tokenization the constituency parser receives; punctuation
/// stays attached to its word.
pub fn tokenize(original_input: &str) -> Vec<Token<'_>> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        // 1. Skip whitespace
        let (next_input, _) = match skip_space(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        // 2. Take everything up to the next whitespace
        match word(input) {
            Ok((next_input, text)) => {
                let start = input.as_ptr() as usize - original_input.as_ptr() as usize;
                result.push(Token { span: Span::new(start, start + text.len()), text });
                input = next_input;
            }
            Err(_) => break,
        }
    }

    result
}

/// Owned words of `tokenize`, as sent to a parser service.
pub fn words(input: &str) -> Vec<String> {
    tokenize(input).into_iter().map(|t| t.text.to_string()).collect()
}

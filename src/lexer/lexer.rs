use tracing::trace;

use crate::{Position, MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_keyword, Token, TokenKind};

/// Stands in for the current character once the buffer is exhausted. A NUL inside the
/// buffer terminates it the same way.
pub const EOF_CHAR: char = '\0';

const CHAR_ESCAPES: [char; 6] = ['\\', '\'', '0', 'n', 't', 'r'];

/// A pull-based scanner over a borrowed source buffer.
///
/// `index` marks the start of the token being scanned and `read_index` the scan cursor,
/// so `read_index >= index` always holds. `current_char` is the character that ends at
/// `read_index`, or `EOF_CHAR` once the input is exhausted.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    content_length: usize,
    index: usize,
    read_index: usize,
    line_number: usize,
    line_start: usize,
    current_char: char,
    token_line: usize,
    token_line_start: usize,
    emit_comments: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer that skips comments.
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer::create(source, false)
    }

    /// Creates a lexer that emits `BlockComment` and `LineComment` tokens.
    pub fn with_comments(source: &'a str) -> Lexer<'a> {
        Lexer::create(source, true)
    }

    fn create(source: &'a str, emit_comments: bool) -> Lexer<'a> {
        Lexer {
            source,
            content_length: source.len(),
            index: 0,
            read_index: 0,
            line_number: 1,
            line_start: 0,
            current_char: EOF_CHAR,
            token_line: 1,
            token_line_start: 0,
            emit_comments,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn line_start(&self) -> usize {
        self.line_start
    }

    /// Scans and returns the next token. Once the input is exhausted every call
    /// returns an `EOF` token positioned at the end of the buffer.
    pub fn next_token(&mut self) -> Token {
        let token = self.scan();
        trace!(kind = ?token.kind, lexeme = %token.value, line = token.span.start.line, "scanned token");
        token
    }

    fn scan(&mut self) -> Token {
        loop {
            self.begin_token();

            match self.read_char() {
                EOF_CHAR => return self.make(TokenKind::EOF, String::new()),
                '\n' => self.new_line(),
                c if c.is_whitespace() => continue,
                '#' => {
                    let kind = self.skip_comment();
                    if self.emit_comments {
                        return self.symbol(kind);
                    }
                }
                c => return self.scan_token(c),
            }
        }
    }

    fn scan_token(&mut self, c: char) -> Token {
        match c {
            '{' => self.symbol(TokenKind::OpenCurly),
            '}' => self.symbol(TokenKind::CloseCurly),
            '(' => self.symbol(TokenKind::OpenParen),
            ')' => self.symbol(TokenKind::CloseParen),
            '[' => self.symbol(TokenKind::OpenBracket),
            ']' => self.symbol(TokenKind::CloseBracket),
            ',' => self.symbol(TokenKind::Comma),
            '.' => self.symbol(TokenKind::Dot),
            ';' => self.symbol(TokenKind::Semicolon),
            ':' => self.symbol(TokenKind::Colon),
            '@' => self.symbol(TokenKind::At),
            '~' => self.symbol(TokenKind::Tilde),
            '=' => self.select(&[('=', TokenKind::Equals)], TokenKind::Assignment),
            '!' => self.select(&[('=', TokenKind::NotEquals)], TokenKind::Not),
            '<' => self.select(&[('=', TokenKind::LessEquals)], TokenKind::Less),
            '>' => self.select(&[('=', TokenKind::GreaterEquals)], TokenKind::Greater),
            '&' => self.select(&[('&', TokenKind::And)], TokenKind::Ampersand),
            '|' => self.select(&[('|', TokenKind::Or)], TokenKind::Pipe),
            '+' => self.select(
                &[('+', TokenKind::PlusPlus), ('=', TokenKind::PlusEquals)],
                TokenKind::Plus,
            ),
            '-' => self.select(
                &[('-', TokenKind::MinusMinus), ('=', TokenKind::MinusEquals)],
                TokenKind::Dash,
            ),
            '*' => self.select(
                &[('*', TokenKind::Exponent), ('=', TokenKind::StarEquals)],
                TokenKind::Star,
            ),
            '/' => self.select(
                &[('/', TokenKind::FloorDiv), ('=', TokenKind::SlashEquals)],
                TokenKind::Slash,
            ),
            '%' => self.select(&[('=', TokenKind::PercentEquals)], TokenKind::Percent),
            '\'' => self.char_literal(),
            '"' => self.string_literal(),
            c if is_letter(c) => self.identifier(),
            c if c.is_ascii_digit() => self.number(),
            _ => self.symbol(TokenKind::IllegalChar),
        }
    }

    fn begin_token(&mut self) {
        self.index = self.read_index;
        self.token_line = self.line_number;
        self.token_line_start = self.line_start;
    }

    /// Reads the character under the scan cursor and moves past it. At the end of the
    /// input the cursor stays put and `EOF_CHAR` is returned.
    fn read_char(&mut self) -> char {
        if self.read_index >= self.content_length {
            self.current_char = EOF_CHAR;
            return self.current_char;
        }

        match self.source[self.read_index..].chars().next() {
            Some(c) if c != EOF_CHAR => {
                self.read_index += c.len_utf8();
                self.current_char = c;
            }
            _ => self.current_char = EOF_CHAR,
        }

        self.current_char
    }

    fn peek_char(&self) -> char {
        self.source[self.read_index..]
            .chars()
            .next()
            .unwrap_or(EOF_CHAR)
    }

    fn new_line(&mut self) {
        self.line_number += 1;
        self.line_start = self.read_index;
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.index..self.read_index]
    }

    fn make(&self, kind: TokenKind, value: String) -> Token {
        let start = Position::new(
            self.index,
            self.token_line,
            self.index - self.token_line_start + 1,
        );
        let end = Position::new(
            self.read_index,
            self.line_number,
            self.read_index - self.line_start + 1,
        );

        MK_TOKEN!(kind, value, MK_SPAN!(start, end))
    }

    fn symbol(&self, kind: TokenKind) -> Token {
        self.make(kind, self.lexeme().to_string())
    }

    /// Resolves a one-character lookahead: the first option whose character is next
    /// gets consumed, otherwise the single-character fallback is produced.
    fn select(&mut self, options: &[(char, TokenKind)], fallback: TokenKind) -> Token {
        let next = self.peek_char();

        match options.iter().find(|(c, _)| *c == next) {
            Some((_, kind)) => {
                self.read_char();
                self.symbol(*kind)
            }
            None => self.symbol(fallback),
        }
    }

    fn skip_comment(&mut self) -> TokenKind {
        if self.peek_char() == '#' {
            self.read_char();

            loop {
                match self.read_char() {
                    EOF_CHAR => break,
                    '\n' => self.new_line(),
                    '#' if self.peek_char() == '#' => {
                        self.read_char();
                        break;
                    }
                    _ => {}
                }
            }

            TokenKind::BlockComment
        } else {
            while !matches!(self.peek_char(), '\n' | EOF_CHAR) {
                self.read_char();
            }

            TokenKind::LineComment
        }
    }

    fn identifier(&mut self) -> Token {
        while is_letter(self.peek_char()) {
            self.read_char();
        }

        let lexeme = self.lexeme();
        self.make(lookup_keyword(lexeme), lexeme.to_string())
    }

    fn number(&mut self) -> Token {
        let mut dots = 0;

        loop {
            match self.peek_char() {
                '.' => dots += 1,
                c if c.is_ascii_digit() => {}
                _ => break,
            }
            self.read_char();
        }

        let kind = match dots {
            0 => TokenKind::IntLiteral,
            1 => TokenKind::FloatLiteral,
            _ => TokenKind::FloatError,
        };

        self.symbol(kind)
    }

    fn char_literal(&mut self) -> Token {
        match self.peek_char() {
            '\'' => {
                self.read_char();
                return self.symbol(TokenKind::EmptyCharError);
            }
            '\n' | EOF_CHAR => return self.symbol(TokenKind::IllegalChar),
            _ => {}
        }

        if self.read_char() == '\\' {
            let escaped = self.peek_char();

            if !CHAR_ESCAPES.contains(&escaped) {
                if !matches!(escaped, '\n' | EOF_CHAR) {
                    self.read_char();
                    if self.peek_char() == '\'' {
                        self.read_char();
                    }
                }
                return self.symbol(TokenKind::IllegalChar);
            }

            self.read_char();
        }

        if self.peek_char() == '\'' {
            self.read_char();
            let body = &self.source[self.index + 1..self.read_index - 1];
            return self.make(TokenKind::CharLiteral, body.to_string());
        }

        let rest_of_line = self.source[self.read_index..]
            .split(|c: char| c == '\n' || c == EOF_CHAR)
            .next()
            .unwrap_or_default();

        match rest_of_line.find('\'') {
            Some(offset) => {
                self.read_index += offset + 1;
                self.current_char = '\'';
                self.symbol(TokenKind::MultiCharError)
            }
            None => {
                // no closing quote on this line, so only the quote itself is illegal
                self.read_index = self.index + 1;
                self.current_char = '\'';
                self.symbol(TokenKind::IllegalChar)
            }
        }
    }

    fn string_literal(&mut self) -> Token {
        loop {
            match self.read_char() {
                EOF_CHAR => return self.symbol(TokenKind::UnterminatedString),
                '\\' => {
                    if self.read_char() == '\n' {
                        self.new_line();
                    }
                }
                '\n' => self.new_line(),
                '"' => break,
                _ => {}
            }
        }

        let body = &self.source[self.index + 1..self.read_index - 1];
        self.make(TokenKind::StringLiteral, body.to_string())
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, `EOF`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Drains a fresh lexer over `source`, returning every token including the final `EOF`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}

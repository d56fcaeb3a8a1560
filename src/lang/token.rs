#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Number(i32),
    Operator(Operator),
    Command(Command),
    Unknown(String),
}

impl Token {
    /// Classify a single non-digit character. Anything that is neither an
    /// operator nor a command becomes `Unknown` and is reported verbatim
    /// by the evaluator.
    pub fn from_char(c: char) -> Token {
        if let Some(operator) = Operator::from_char(c) {
            return Token::Operator(operator);
        }
        if let Some(command) = Command::from_char(c) {
            return Token::Command(command);
        }
        Token::Unknown(c.to_string())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
    Caret,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        use Operator::*;
        match c {
            '+' => Some(Plus),
            '-' => Some(Minus),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            '%' => Some(Modulus),
            '^' => Some(Caret),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Dump,
    Random,
    Equals,
}

impl Command {
    pub fn from_char(c: char) -> Option<Command> {
        use Command::*;
        match c {
            'd' => Some(Dump),
            'r' => Some(Random),
            '=' => Some(Equals),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        let t = Token::from_char('%');
        assert_eq!(t, Token::Operator(Operator::Modulus));
        let t = Token::from_char('d');
        assert_eq!(t, Token::Command(Command::Dump));
        let t = Token::from_char('!');
        assert_eq!(t, Token::Unknown("!".to_string()));
    }
}

use super::{Operation, Random, Stack};
use crate::lang::token::{Command, Operator, Token};
use crate::lang::{lex, Error};
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// Calculator output, reported in emission order by [`Runtime::execute`].
#[derive(Debug, PartialEq)]
pub enum Event {
    /// One numeric output line.
    Print(String),
    /// Diagnostics raised by a single token.
    Errors(Vec<Error>),
    /// The queue is drained; feed another line.
    Stopped,
}

/// One calculator session. The operand stack and the random cursor live
/// for the whole run; they are never reset between lines.
pub struct Runtime {
    stack: Stack<i32>,
    random: Random,
    events: VecDeque<Event>,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime {
            stack: Stack::new(),
            random: Random::new(),
            events: VecDeque::new(),
        }
    }
}

impl Runtime {
    /// Fully process one input line, queueing any output it produces.
    /// Diagnostics never abort the line; evaluation continues with the
    /// next token.
    pub fn enter(&mut self, line: &str) {
        let (echoes, tokens) = lex(line);
        for digit in echoes {
            self.print(digit);
        }
        for token in tokens {
            if let Err(error) = self.process(token) {
                self.events.push_back(Event::Errors(vec![error]));
            }
        }
    }

    /// Next queued event, or `Stopped` once the queue is drained.
    pub fn execute(&mut self) -> Event {
        self.events.pop_front().unwrap_or(Event::Stopped)
    }

    fn process(&mut self, token: Token) -> Result<()> {
        match token {
            Token::Number(number) => self.stack.push(number),
            Token::Operator(operator) => self.operate(&operator),
            Token::Command(Command::Dump) => {
                self.dump();
                Ok(())
            }
            Token::Command(Command::Random) => {
                if self.stack.is_full() {
                    // rejected pushes must not advance the cursor
                    return Err(Error::StackOverflow);
                }
                let value = self.random.gen();
                self.stack.push(value)
            }
            Token::Command(Command::Equals) => self.peek(),
            Token::Unknown(text) => Err(Error::Unrecognised(text)),
        }
    }

    /// Guard chain for one operator: overflow, underflow, divide by
    /// zero, negative power. Only the final compute-and-push step
    /// touches the stack, so a failed guard leaves both operands where
    /// they were.
    fn operate(&mut self, operator: &Operator) -> Result<()> {
        if self.stack.is_full() {
            return Err(Error::StackOverflow);
        }
        if self.stack.len() < 2 {
            return Err(Error::StackUnderflow);
        }
        let rhs = *self.stack.last().ok_or(Error::StackUnderflow)?;
        let lhs = *self
            .stack
            .get(self.stack.len() - 2)
            .ok_or(Error::StackUnderflow)?;
        match operator {
            // either operand of / triggers, only the divisor of %
            Operator::Divide if lhs == 0 || rhs == 0 => return Err(Error::DivideByZero),
            Operator::Modulus if rhs == 0 => return Err(Error::DivideByZero),
            Operator::Caret if rhs < 0 => return Err(Error::NegativePower),
            _ => {}
        }
        let (lhs, rhs) = self.stack.pop_2()?;
        self.stack.push(Operation::apply(operator, lhs, rhs))
    }

    /// The `d` command: every stack value bottom to top, or the minimum
    /// representable value when the stack is empty.
    fn dump(&mut self) {
        if self.stack.is_empty() {
            self.print(i32::MIN);
            return;
        }
        let values: Vec<i32> = self.stack.iter().copied().collect();
        for value in values {
            self.print(value);
        }
    }

    /// The `=` command: print the top of the stack without popping it.
    fn peek(&mut self) -> Result<()> {
        let top = *self.stack.last().ok_or(Error::StackEmpty)?;
        self.print(top);
        Ok(())
    }

    fn print<T: std::fmt::Display>(&mut self, value: T) {
        self.events.push_back(Event::Print(value.to_string()));
    }
}

//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};
use std::io;
use tictactoe_core::{Board, GameResult, Prompt, evaluate};

/// Every board reachable from empty by alternating legal play, terminal
/// boards included.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if evaluate(&board) != GameResult::Ongoing {
            continue;
        }
        for (_, next) in board.successors(board.turn()) {
            stack.push(next);
        }
    }
    seen.into_iter().collect()
}

/// Parses board text, panicking on malformed input.
pub fn board(text: &str) -> Board {
    text.parse().expect("valid board text")
}

/// Prompt that answers from a script and records what it was told.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
    pub messages: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front())
    }

    fn tell(&mut self, message: &str) -> io::Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }
}

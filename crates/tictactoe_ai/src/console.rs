//! Standard input and output for humans and for game display.

use std::io::{self, BufRead, Write};
use tictactoe_core::{Board, GameEvent, Prompt};

/// [`Prompt`] over the process's stdin and stdout.
///
/// Stdin is locked per line, so several prompts (two human players and the
/// command loop) can share the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{question}")?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn tell(&mut self, message: &str) -> io::Result<()> {
        writeln!(io::stdout(), "{message}")
    }
}

/// Draws game events the way the console game shows them.
///
/// Event callbacks cannot fail, so the first write error is kept and
/// returned by [`Renderer::finish`].
#[derive(Debug)]
pub struct Renderer<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Draws `board` on its own.
    pub fn board(&mut self, board: &Board) {
        let written = writeln!(self.out, "{board}");
        self.keep(written);
    }

    /// Draws one game event.
    pub fn event(&mut self, event: &GameEvent) {
        let written = match event {
            GameEvent::Thinking { kind, .. } => writeln!(self.out, "Making move level \"{kind}\""),
            GameEvent::MoveMade { board, .. } => writeln!(self.out, "{board}"),
            GameEvent::Finished(result) => writeln!(self.out, "{result}"),
        };
        self.keep(written);
    }

    /// Flushes and returns the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn keep(&mut self, written: io::Result<()>) {
        if let Err(error) = written
            && self.error.is_none()
        {
            self.error = Some(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Coord, GameResult, Player, PlayerKind};

    #[test]
    fn test_renders_events() {
        let board: Board = "X________".parse().unwrap();
        let mut renderer = Renderer::new(Vec::new());
        renderer.event(&GameEvent::Thinking {
            player: Player::X,
            kind: PlayerKind::Medium,
        });
        renderer.event(&GameEvent::MoveMade {
            player: Player::X,
            coord: Coord::new(1, 3).unwrap(),
            board,
        });
        renderer.event(&GameEvent::Finished(GameResult::Won(Player::O)));

        let text = String::from_utf8(renderer.finish().unwrap()).unwrap();
        assert_eq!(
            text,
            "Making move level \"medium\"\n\
             ---------\n| X     |\n|       |\n|       |\n---------\n\
             O wins\n"
        );
    }

    #[derive(Debug)]
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_keeps_first_error() {
        let mut renderer = Renderer::new(Broken);
        renderer.board(&Board::new());
        renderer.event(&GameEvent::Finished(GameResult::Draw));
        let err = renderer.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}

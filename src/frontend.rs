use std::{future::Future, io::Write, time::Duration};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use log::{debug, info};

use crate::{game::Board, game::Simulation, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderMode {
    /// Clears the screen and paints cells with background colours.
    Color,
    /// Escape-free text, one frame after another.
    Plain,
}

pub struct Frontend {
    mode: RenderMode,
}

impl Frontend {
    pub fn new(mode: RenderMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn output_game_state<W: Write>(
        &self,
        out: &mut W,
        board: &Board,
        generation: u64,
    ) -> Result<()> {
        match self.mode {
            RenderMode::Color => Self::output_colored(out, board)?,
            RenderMode::Plain => Self::output_plain(out, board, generation)?,
        }
        out.flush()?;
        Ok(())
    }

    fn output_colored<W: Write>(out: &mut W, board: &Board) -> std::io::Result<()> {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        for row in board.rows() {
            for cell in row {
                if cell.is_alive() {
                    queue!(
                        out,
                        SetBackgroundColor(Color::White),
                        SetForegroundColor(Color::Black),
                        Print('o')
                    )?;
                } else {
                    queue!(out, SetBackgroundColor(Color::Black), Print(' '))?;
                }
            }
            queue!(out, ResetColor, Print("\n"))?;
        }
        Ok(())
    }

    fn output_plain<W: Write>(out: &mut W, board: &Board, generation: u64) -> std::io::Result<()> {
        let mut str_builder = String::with_capacity((board.width() + 1) * board.height() + 32);
        str_builder.push_str(&format!("-------- generation {} --------\n", generation));
        str_builder.push_str(&board.to_string());
        out.write_all(str_builder.as_bytes())
    }
}

/// Render / tick / sleep loop around a [`Simulation`].
pub struct Driver {
    simulation: Simulation,
    frontend: Frontend,
    delay: Duration,
    max_generations: Option<u64>,
}

impl Driver {
    pub fn new(
        simulation: Simulation,
        frontend: Frontend,
        delay: Duration,
        max_generations: Option<u64>,
    ) -> Self {
        Self {
            simulation,
            frontend,
            delay,
            max_generations,
        }
    }

    /// Runs until `shutdown` resolves or the generation limit is reached.
    ///
    /// `shutdown` is raced against every sleep, so a pending frame is never
    /// rendered after it fires.
    pub async fn run<W, F>(mut self, out: &mut W, shutdown: F) -> Result<Simulation>
    where
        W: Write,
        F: Future,
    {
        tokio::pin!(shutdown);
        loop {
            self.frontend.output_game_state(
                out,
                self.simulation.board(),
                self.simulation.generation(),
            )?;

            if self
                .max_generations
                .is_some_and(|max| self.simulation.generation() >= max)
            {
                info!(
                    "reached generation limit {}, stopping",
                    self.simulation.generation()
                );
                break;
            }

            let stats = self.simulation.tick();
            debug!(
                "generation {}: population {} (+{} -{})",
                self.simulation.generation(),
                stats.population,
                stats.births,
                stats.deaths
            );

            tokio::select! {
                _ = tokio::time::sleep(self.delay) => {}
                _ = &mut shutdown => {
                    info!("shutdown requested at generation {}", self.simulation.generation());
                    break;
                }
            }
        }
        Ok(self.simulation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::EdgePolicy;

    #[test]
    fn plain_frame_has_header_and_rows() {
        let board = Board::from_cells(3, 4, &[(1, 1), (1, 2)]).unwrap();
        let mut out = Vec::new();
        Frontend::new(RenderMode::Plain)
            .output_game_state(&mut out, &board, 7)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "-------- generation 7 --------\n....\n.oo.\n....\n"
        );
    }

    #[test]
    fn colored_frame_clears_and_draws_glyphs() {
        let board = Board::from_cells(3, 3, &[(1, 1)]).unwrap();
        let mut out = Vec::new();
        Frontend::new(RenderMode::Color)
            .output_game_state(&mut out, &board, 0)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\u{1b}[2J"));
        assert_eq!(text.matches('o').count(), 1);
        assert_eq!(text.matches('\n').count(), 3);
    }

    #[tokio::test]
    async fn driver_stops_at_generation_limit() {
        let board = Board::from_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
        let driver = Driver::new(
            Simulation::new(board, EdgePolicy::Frozen),
            Frontend::new(RenderMode::Plain),
            Duration::from_millis(1),
            Some(2),
        );
        let mut out = Vec::new();
        let sim = driver
            .run(&mut out, std::future::pending::<()>())
            .await
            .unwrap();
        assert_eq!(sim.generation(), 2);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("-------- generation").count(), 3);
    }

    #[tokio::test]
    async fn driver_stops_on_shutdown() {
        let board = Board::empty(5, 5).unwrap();
        let driver = Driver::new(
            Simulation::new(board, EdgePolicy::Frozen),
            Frontend::new(RenderMode::Plain),
            Duration::from_secs(3600),
            None,
        );
        let mut out = Vec::new();
        let sim = driver.run(&mut out, async {}).await.unwrap();
        assert_eq!(sim.generation(), 1);
    }
}

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context as _;
use cluegrid_client::{Endpoints, HttpCategorySource, new_round};
use cluegrid_core::{Board, BoardConfig, RoundId, Session};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::SeedableRng as _;
use rand::rngs::StdRng;

use crate::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What the status line should say.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Status {
    Loading,
    Ready,
    Failed(String),
}

type LoadResult = (RoundId, anyhow::Result<Board>);

/// The presentation adapter: owns the session, forwards key presses
/// into reveal transitions, and routes background load results back
/// through the session's round bookkeeping.
pub(crate) struct App {
    config: BoardConfig,
    endpoints: Endpoints,
    seed: Option<u64>,
    session: Session,
    /// Selected cell as (column, row).
    cursor: (usize, usize),
    status: Status,
    results_tx: mpsc::Sender<LoadResult>,
    results_rx: mpsc::Receiver<LoadResult>,
    spinner_frame: usize,
    should_exit: bool,
}

impl App {
    pub(crate) fn new(config: BoardConfig, endpoints: Endpoints, seed: Option<u64>) -> Self {
        let (results_tx, results_rx) = mpsc::channel();
        Self {
            config,
            endpoints,
            seed,
            session: Session::new(),
            cursor: (0, 0),
            status: Status::Loading,
            results_tx,
            results_rx,
            spinner_frame: 0,
            should_exit: false,
        }
    }

    pub(crate) fn run(&mut self) -> anyhow::Result<()> {
        self.start_round();
        ratatui::run(|terminal| {
            while !self.should_exit {
                self.drain_load_results();
                terminal.draw(|frame| ui::draw(frame, self))?;

                if event::poll(POLL_INTERVAL)? {
                    if let Event::Key(key) = event::read()?
                        && key.kind == KeyEventKind::Press
                    {
                        self.handle_key(key.code);
                    }
                } else {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
            }
            Ok(())
        })
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub(crate) fn status(&self) -> &Status {
        &self.status
    }

    pub(crate) fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    /// Kick off a sample-and-load round on a background thread. The
    /// session hands out the round token; the result comes back over
    /// the channel tagged with it, so a result from a superseded round
    /// is dropped by the session rather than installed.
    fn start_round(&mut self) {
        let round = self.session.begin_round();
        self.status = Status::Loading;

        let config = self.config;
        let endpoints = self.endpoints.clone();
        let seed = self.seed.map(|seed| seed.wrapping_add(round.as_u64()));
        let tx = self.results_tx.clone();
        thread::spawn(move || {
            let result = run_load(config, endpoints, seed);
            // The receiver only goes away when the app is shutting
            // down, at which point the result is moot.
            let _ = tx.send((round, result));
        });
    }

    fn drain_load_results(&mut self) {
        while let Ok((round, result)) = self.results_rx.try_recv() {
            match result {
                Ok(board) => {
                    if self.session.complete_round(round, board).is_installed() {
                        self.cursor = (0, 0);
                        self.status = Status::Ready;
                    }
                }
                Err(err) => {
                    log::warn!("round {round} failed: {err:#}");
                    if self.session.fail_round(round) {
                        self.status = Status::Failed(format!("{err:#}"));
                    }
                }
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('r') => self.start_round(),
            KeyCode::Enter | KeyCode::Char(' ') => self.reveal_selected(),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(0, 1),
            _ => {}
        }
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        let Some(board) = self.session.board() else {
            return;
        };
        let (columns, rows) = (board.columns(), board.rows());
        if columns == 0 || rows == 0 {
            return;
        }
        let (column, row) = self.cursor;
        let column = column
            .saturating_add_signed(dx)
            .min(columns.saturating_sub(1));
        let row = row.saturating_add_signed(dy).min(rows.saturating_sub(1));
        self.cursor = (column, row);
    }

    fn reveal_selected(&mut self) {
        let (column, row) = self.cursor;
        match self.session.transition(column, row) {
            Ok(outcome) => {
                if outcome.has_update() {
                    log::debug!("revealed cell ({column}, {row})");
                }
            }
            // The cursor is clamped to the board, so this only fires on
            // an empty session; nothing to show the user.
            Err(err) => log::warn!("reveal rejected: {err}"),
        }
    }
}

/// Runs the async pipeline to completion on this (background) thread.
fn run_load(
    config: BoardConfig,
    endpoints: Endpoints,
    seed: Option<u64>,
) -> anyhow::Result<Board> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building load runtime")?;

    let source = HttpCategorySource::new(endpoints);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let board = runtime.block_on(new_round(&source, config, &mut rng))?;
    Ok(board)
}

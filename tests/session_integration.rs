//! End-to-end turn loop tests with scripted, console and batch agents

use std::{
    io::Cursor,
    sync::{Arc, Mutex},
};

use noughts::{
    Result,
    agents::{MinimaxAgent, OpponentKind},
    cli::console::{ConsoleAgent, INVALID_INPUT, PROMPT},
    config::GameConfig,
    ports::Observer,
    session::{BoardPrinter, Session, SessionResult},
    tictactoe::{Board, Game, Move, Outcome, Side},
};

mod common;
use common::{ScriptedAgent, SharedBuffer};

/// Records callback names in order
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
    fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.0.lock().unwrap().push(event);
    }
}

impl Observer for Recorder {
    fn on_session_start(&mut self, total_games: usize) -> Result<()> {
        self.push(format!("session_start {total_games}"));
        Ok(())
    }

    fn on_game_start(&mut self, game_num: usize, first: Side) -> Result<()> {
        self.push(format!("game_start {game_num} {first}"));
        Ok(())
    }

    fn on_move(&mut self, _game_num: usize, mv: &Move, _board: &Board) -> Result<()> {
        self.push(format!("move {} {}", mv.side, mv.position));
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, game: &Game) -> Result<()> {
        self.push(format!("game_end {game_num} {}", game.outcome()));
        Ok(())
    }

    fn on_session_end(&mut self) -> Result<()> {
        self.push("session_end".to_string());
        Ok(())
    }
}

fn bot() -> MinimaxAgent {
    MinimaxAgent::new("Bot".to_string())
}

mod scripted_games {
    use super::*;

    #[test]
    fn test_bot_punishes_weak_replies() {
        // Bot opens 0, human answers 1 and 2, bot completes the left column.
        let recorder = Recorder::default();
        let mut session = Session::new(Side::Bot).with_observer(Box::new(recorder.clone()));
        let mut human = ScriptedAgent::new(vec![1, 2]);
        let mut bot = bot();

        let game = session.play_game(0, &mut human, &mut bot).unwrap();

        assert_eq!(game.outcome(), Outcome::BotWins);
        assert_eq!(game.board(), &Board::from_marks(&[1, 2], &[0, 3, 6]).unwrap());
        assert_eq!(
            recorder.events(),
            vec![
                "game_start 0 bot",
                "move bot 0",
                "move human 1",
                "move bot 3",
                "move human 2",
                "move bot 6",
                "game_end 0 bot wins",
            ]
        );
    }

    #[test]
    fn test_board_printer_transcript() {
        let buffer = SharedBuffer::default();
        let mut session =
            Session::new(Side::Bot).with_observer(Box::new(BoardPrinter::new(buffer.clone())));
        let mut human = ScriptedAgent::new(vec![1, 2]);
        let mut bot = bot();

        session.play_game(0, &mut human, &mut bot).unwrap();

        let printed = buffer.contents();
        assert!(printed.starts_with("1|2|3\n4|5|6\n7|8|9\n"));
        assert!(printed.contains("Bot's move:\nX|2|3\n4|5|6\n7|8|9\n"));
        assert!(printed.contains("Your Move:\nX|O|3\n4|5|6\n7|8|9\n"));
        assert_eq!(printed.matches("Bot's move:").count(), 3);
        assert_eq!(printed.matches("Your Move:").count(), 2);
        assert!(printed.ends_with("Game Over! Result: bot wins\n"));
    }

    #[test]
    fn test_occupied_cell_from_agent_is_rejected() {
        let mut session = Session::new(Side::Bot);
        let mut human = ScriptedAgent::new(vec![0]);
        let mut bot = bot();

        let err = session.play_game(0, &mut human, &mut bot).unwrap_err();
        assert!(matches!(err, noughts::Error::InvalidMove { position: 0 }));
    }

    #[test]
    fn test_session_event_order() {
        let recorder = Recorder::default();
        let mut session = Session::new(Side::Human).with_observer(Box::new(recorder.clone()));
        let mut human = MinimaxAgent::new("Mirror".to_string());
        let mut bot = bot();

        let result = session.run(2, &mut human, &mut bot).unwrap();
        assert_eq!(
            result,
            SessionResult {
                total_games: 2,
                wins: 0,
                draws: 2,
                losses: 0,
            }
        );

        let events = recorder.events();
        assert_eq!(events.first().map(String::as_str), Some("session_start 2"));
        assert_eq!(events.last().map(String::as_str), Some("session_end"));
        assert_eq!(events.iter().filter(|e| e.starts_with("game_start")).count(), 2);
        assert_eq!(events.iter().filter(|e| *e == "game_end 1 draw").count(), 1);
        // A drawn game fills the board.
        assert_eq!(events.iter().filter(|e| e.starts_with("move")).count(), 18);
    }
}

mod console_games {
    use super::*;

    #[test]
    fn test_full_game_from_typed_input() {
        // "2" is accepted, then a repeat of the occupied "2" is refused.
        let input = Cursor::new(b"2\n2\n3\n".to_vec());
        let mut human = ConsoleAgent::new("You".to_string(), input, Vec::new());
        let mut bot = bot();
        let mut session = Session::new(Side::Bot);

        let game = session.play_game(0, &mut human, &mut bot).unwrap();
        assert_eq!(game.outcome(), Outcome::BotWins);

        let printed = String::from_utf8(human.into_output()).unwrap();
        assert_eq!(printed.matches(PROMPT).count(), 3);
        assert_eq!(printed.matches(INVALID_INPUT).count(), 1);
    }

    #[test]
    fn test_input_ending_mid_game() {
        let input = Cursor::new(b"5\n".to_vec());
        let mut human = ConsoleAgent::new("You".to_string(), input, Vec::new());
        let mut bot = bot();
        let mut session = Session::new(Side::Human);

        let err = session.play_game(0, &mut human, &mut bot).unwrap_err();
        assert!(matches!(err, noughts::Error::InputClosed));
    }
}

mod batch_play {
    use super::*;

    #[test]
    fn test_seeded_random_opponent_never_wins() {
        for first in [Side::Human, Side::Bot] {
            let config = GameConfig::default()
                .with_first(first)
                .with_games(50)
                .with_seed(42);
            let mut adversary = config.opponent.build(config.seed);
            let mut bot = bot();

            let result = Session::from_config(&config)
                .run(config.games, adversary.as_mut(), &mut bot)
                .unwrap();
            assert_eq!(result.total_games, 50);
            assert_eq!(result.losses, 0);
            assert_eq!(result.loss_rate(), 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_record() {
        let config = GameConfig::default().with_games(20).with_seed(7);
        let run = || {
            let mut adversary = config.opponent.build(config.seed);
            Session::from_config(&config)
                .run(config.games, adversary.as_mut(), &mut bot())
                .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_optimal_opponent_always_draws() {
        let config = GameConfig::default()
            .with_first(Side::Bot)
            .with_games(3)
            .with_opponent(OpponentKind::Optimal);
        let mut adversary = config.opponent.build(None);

        let result = Session::from_config(&config)
            .run(config.games, adversary.as_mut(), &mut bot())
            .unwrap();
        assert_eq!(result.draws, 3);
    }
}

mod config_files {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noughts.json");
        let config = GameConfig::default()
            .with_first(Side::Bot)
            .with_games(12)
            .with_opponent(OpponentKind::Optimal)
            .with_seed(3);

        config.save(&path).unwrap();
        assert_eq!(GameConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "first": "bot" }"#).unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config, GameConfig::default().with_first(Side::Bot));
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            GameConfig::load(dir.path().join("absent.json")),
            Err(noughts::Error::Io { .. })
        ));

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(noughts::Error::Serialization(_))
        ));
    }
}

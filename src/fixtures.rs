// src/fixtures.rs
//! Sample records shown in the tournament, lesson and history tabs.
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus { Active, Registration, Upcoming }

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty { Easy, Medium, Hard }

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome { Win, Draw, Loss }

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Tournament {
    pub id: u32,
    pub name: String,
    pub players: u32,
    pub prize: String,
    pub status: TournamentStatus,
    pub time_control: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    pub difficulty: Difficulty,
    pub rating: u32,
    pub solved: u32,
    pub category: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub id: u32,
    pub opponent: String,
    pub result: GameOutcome,
    pub moves: u32,
    pub rating: u32,
    pub date: String,
    pub opening: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Profile {
    pub rating: u32,
    pub wins: u32,
    pub losses: u32,
}

/// Clock faces are display-only; nothing ticks.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Clocks {
    pub light: String,
    pub dark: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Fixtures {
    pub tournaments: Vec<Tournament>,
    pub lessons: Vec<Lesson>,
    pub history: Vec<GameRecord>,
    pub profile: Profile,
    pub clocks: Clocks,
}

impl Default for Fixtures {
    fn default() -> Self { Fixtures::sample() }
}

fn tournament(id: u32, name: &str, players: u32, prize: &str, status: TournamentStatus, time_control: &str) -> Tournament {
    Tournament {
        id, name: name.to_string(), players, prize: prize.to_string(), status,
        time_control: time_control.to_string(),
    }
}

fn lesson(id: u32, title: &str, difficulty: Difficulty, rating: u32, solved: u32, category: &str) -> Lesson {
    Lesson { id, title: title.to_string(), difficulty, rating, solved, category: category.to_string() }
}

fn game(id: u32, opponent: &str, result: GameOutcome, moves: u32, rating: u32, date: &str, opening: &str) -> GameRecord {
    GameRecord {
        id, opponent: opponent.to_string(), result, moves, rating,
        date: date.to_string(), opening: opening.to_string(),
    }
}

impl Fixtures {
    /// The built-in data set used when no fixtures file is given.
    pub fn sample() -> Self {
        use Difficulty::*;
        use GameOutcome::*;
        use TournamentStatus::*;
        Fixtures {
            tournaments: vec![
                tournament(1, "World Blitz Championship", 128, "₽500,000", Active, "3+2"),
                tournament(2, "Grandmaster Invitational", 64, "₽250,000", Registration, "15+10"),
                tournament(3, "Bullet Marathon", 256, "₽150,000", Active, "1+0"),
                tournament(4, "Classical Open", 32, "₽100,000", Upcoming, "30+0"),
            ],
            lessons: vec![
                lesson(1, "Mate in 2", Easy, 1200, 1543, "Tactics"),
                lesson(2, "King's Gambit", Medium, 1600, 892, "Opening"),
                lesson(3, "Rook Endgame", Hard, 1900, 421, "Endgame"),
                lesson(4, "Knight Fork", Easy, 1100, 2134, "Tactics"),
            ],
            history: vec![
                game(1, "GM_Magnus", Win, 42, 2850, "15.01.2026", "Sicilian Defence"),
                game(2, "IM_Petrov", Draw, 67, 2650, "14.01.2026", "Italian Game"),
                game(3, "FM_Ivanov", Loss, 38, 2400, "13.01.2026", "Ruy Lopez"),
                game(4, "CM_Sidorov", Win, 28, 2200, "12.01.2026", "French Defence"),
            ],
            profile: Profile { rating: 2450, wins: 342, losses: 156 },
            clocks: Clocks { light: "10:00".to_string(), dark: "10:00".to_string() },
        }
    }

    pub fn from_json(json: &str, origin: &Path) -> Result<Self, FixtureError> {
        serde_json::from_str(json).map_err(|e| FixtureError::Parse(origin.to_path_buf(), e))
    }

    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let json = fs::read_to_string(path).map_err(|e| FixtureError::Io(path.to_path_buf(), e))?;
        let fixtures = Self::from_json(&json, path)?;
        info!(
            "loaded fixtures from {}: {} tournaments, {} lessons, {} games",
            path.display(), fixtures.tournaments.len(), fixtures.lessons.len(), fixtures.history.len()
        );
        Ok(fixtures)
    }
}

#[derive(Debug)]
pub enum FixtureError {
    Io(PathBuf, io::Error),
    Parse(PathBuf, serde_json::Error),
}
impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Io(path, e) => write!(f, "I/O error with fixtures file '{}': {}", path.display(), e),
            FixtureError::Parse(path, e) => write!(f, "Malformed fixtures file '{}': {}", path.display(), e),
        }
    }
}
impl Error for FixtureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FixtureError::Io(_, e) => Some(e),
            FixtureError::Parse(_, e) => Some(e),
        }
    }
}

// src/presentation.rs
//! Direct data-to-view mappings: glyphs, badge tones and labels.
use crate::board::{PieceKind, Side, Token};
use crate::fixtures::{Difficulty, GameOutcome, TournamentStatus};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GlyphSet { Unicode, Ascii }

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone { Green, Yellow, Red, Blue, Muted }

/// How the terminal view draws things.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Style {
    pub glyphs: GlyphSet,
    pub color: bool,
}

impl Default for Style {
    fn default() -> Self { Style { glyphs: GlyphSet::Unicode, color: true } }
}

impl Style {
    pub fn plain() -> Self { Style { glyphs: GlyphSet::Ascii, color: false } }

    pub fn glyph(&self, token: Token) -> String {
        match self.glyphs {
            GlyphSet::Unicode => unicode_glyph(token).to_string(),
            GlyphSet::Ascii => token.to_string(),
        }
    }

    /// Wraps `text` in the ANSI colour for `tone` when colour is on.
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.color { return text.to_string(); }
        format!("\x1b[{}m{}\x1b[0m", ansi_code(tone), text)
    }

    pub fn badge(&self, tone: Tone, text: &str) -> String {
        self.paint(tone, &format!("[{}]", text))
    }
}

pub fn unicode_glyph(token: Token) -> char {
    match (token.side, token.kind) {
        (Side::Light, PieceKind::King) => '♔',
        (Side::Light, PieceKind::Queen) => '♕',
        (Side::Light, PieceKind::Rook) => '♖',
        (Side::Light, PieceKind::Bishop) => '♗',
        (Side::Light, PieceKind::Knight) => '♘',
        (Side::Light, PieceKind::Pawn) => '♙',
        (Side::Dark, PieceKind::King) => '♚',
        (Side::Dark, PieceKind::Queen) => '♛',
        (Side::Dark, PieceKind::Rook) => '♜',
        (Side::Dark, PieceKind::Bishop) => '♝',
        (Side::Dark, PieceKind::Knight) => '♞',
        (Side::Dark, PieceKind::Pawn) => '♟',
    }
}

fn ansi_code(tone: Tone) -> u8 {
    match tone {
        Tone::Green => 32, Tone::Yellow => 33, Tone::Red => 31, Tone::Blue => 34, Tone::Muted => 90,
    }
}

// --- Tournament badges ---

pub fn status_tone(status: TournamentStatus) -> Tone {
    match status {
        TournamentStatus::Active => Tone::Green,
        TournamentStatus::Registration => Tone::Blue,
        TournamentStatus::Upcoming => Tone::Yellow,
    }
}

pub fn status_label(status: TournamentStatus) -> &'static str {
    match status {
        TournamentStatus::Active => "Live",
        TournamentStatus::Registration => "Registration",
        TournamentStatus::Upcoming => "Soon",
    }
}

pub fn status_action(status: TournamentStatus) -> &'static str {
    match status {
        TournamentStatus::Active => "Watch",
        TournamentStatus::Registration => "Register",
        TournamentStatus::Upcoming => "Notify me",
    }
}

// --- Lesson badges ---

pub fn difficulty_tone(difficulty: Difficulty) -> Tone {
    match difficulty {
        Difficulty::Easy => Tone::Green,
        Difficulty::Medium => Tone::Yellow,
        Difficulty::Hard => Tone::Red,
    }
}

pub fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Medium => "Medium",
        Difficulty::Hard => "Hard",
    }
}

// --- Game history ---

pub fn result_tone(result: GameOutcome) -> Tone {
    match result {
        GameOutcome::Win => Tone::Green,
        GameOutcome::Draw => Tone::Yellow,
        GameOutcome::Loss => Tone::Red,
    }
}

pub fn result_score(result: GameOutcome) -> &'static str {
    match result {
        GameOutcome::Win => "1-0",
        GameOutcome::Draw => "½-½",
        GameOutcome::Loss => "0-1",
    }
}

pub fn result_label(result: GameOutcome) -> &'static str {
    match result {
        GameOutcome::Win => "Win",
        GameOutcome::Draw => "Draw",
        GameOutcome::Loss => "Loss",
    }
}

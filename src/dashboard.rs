// src/dashboard.rs
use std::fmt::{self, Write};

use log::debug;

use crate::board::{Board, Interaction, Square, BOARD_SIZE};
use crate::fixtures::Fixtures;
use crate::input::Command;
use crate::presentation::{self, Style, Tone};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Board,
    Tournaments,
    Lessons,
    History,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Board, Tab::Tournaments, Tab::Lessons, Tab::History];

    pub fn from_name(name: &str) -> Option<Tab> {
        match name.to_lowercase().as_str() {
            "board" => Some(Tab::Board),
            "tournaments" => Some(Tab::Tournaments),
            "lessons" => Some(Tab::Lessons),
            "history" => Some(Tab::History),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Board => "Board",
            Tab::Tournaments => "Tournaments",
            Tab::Lessons => "Lessons",
            Tab::History => "History",
        }
    }
}

/// Whether the session should keep reading input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow { Continue, Quit }

/// Owns the board, the sample records and the active tab.
/// Rendering always reads the board fresh.
pub struct Dashboard {
    board: Board,
    fixtures: Fixtures,
    active_tab: Tab,
    style: Style,
    last_interaction: Option<Interaction>,
}

impl Dashboard {
    pub fn new(fixtures: Fixtures, style: Style) -> Self {
        Dashboard { board: Board::initial(), fixtures, active_tab: Tab::Board, style, last_interaction: None }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn fixtures(&self) -> &Fixtures { &self.fixtures }
    pub fn active_tab(&self) -> Tab { self.active_tab }
    pub fn last_interaction(&self) -> Option<Interaction> { self.last_interaction }

    pub fn switch_tab(&mut self, tab: Tab) {
        if tab != self.active_tab {
            debug!("tab {} -> {}", self.active_tab.title(), tab.title());
            self.active_tab = tab;
        }
    }

    /// Clicking a square always happens on the board tab.
    pub fn click(&mut self, sq: Square) -> Interaction {
        self.switch_tab(Tab::Board);
        let interaction = self.board.select_or_move_at(sq);
        self.last_interaction = Some(interaction);
        interaction
    }

    pub fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Click(sq) => { self.click(sq); }
            Command::SwitchTab(tab) => self.switch_tab(tab),
            Command::Help => {}
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_screen(&mut out);
        out
    }

    fn write_screen(&self, f: &mut String) -> fmt::Result {
        writeln!(f, "ChessMaster Pro :: Play. Learn. Win.")?;
        self.write_tab_bar(f)?;
        writeln!(f, "------------------------------------------")?;
        match self.active_tab {
            Tab::Board => self.write_board_tab(f),
            Tab::Tournaments => self.write_tournaments(f),
            Tab::Lessons => self.write_lessons(f),
            Tab::History => self.write_history(f),
        }
    }

    fn write_tab_bar(&self, f: &mut String) -> fmt::Result {
        let labels: Vec<String> = Tab::ALL.iter().map(|tab| {
            if *tab == self.active_tab { format!("[{}]", tab.title()) } else { format!(" {} ", tab.title()) }
        }).collect();
        writeln!(f, "{}", labels.join(" "))
    }

    fn write_board_tab(&self, f: &mut String) -> fmt::Result {
        writeln!(f, "Select a piece, then its target square.")?;
        writeln!(f, "    a  b  c  d  e  f  g  h")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{} {} ", BOARD_SIZE - row, row)?;
            for col in 0..BOARD_SIZE {
                let Some(sq) = Square::new(row, col) else { continue };
                let symbol = match self.board.token_at(sq) {
                    Some(token) => self.style.glyph(token),
                    None if sq.is_light() => " ".to_string(),
                    None => "·".to_string(),
                };
                if self.board.is_selected(sq) {
                    write!(f, "{}", self.style.paint(Tone::Yellow, &format!("<{}>", symbol)))?;
                } else {
                    write!(f, " {} ", symbol)?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "    0  1  2  3  4  5  6  7")?;
        match self.board.selection().square() {
            Some(sq) => writeln!(f, "Selected: {}", sq)?,
            None => writeln!(f, "Selected: -")?,
        }
        writeln!(f)?;

        let clocks = &self.fixtures.clocks;
        writeln!(f, "Clock   Light {}   Dark {}", clocks.light, clocks.dark)?;
        let profile = &self.fixtures.profile;
        writeln!(
            f, "Stats   Rating {}   Wins {}   Losses {}",
            profile.rating,
            self.style.paint(Tone::Green, &profile.wins.to_string()),
            self.style.paint(Tone::Red, &profile.losses.to_string()),
        )
    }

    fn write_tournaments(&self, f: &mut String) -> fmt::Result {
        for t in &self.fixtures.tournaments {
            writeln!(
                f, "{} {}",
                t.name,
                self.style.badge(presentation::status_tone(t.status), presentation::status_label(t.status)),
            )?;
            writeln!(f, "  {} players   prize {}   time {}", t.players, t.prize, t.time_control)?;
            writeln!(f, "  > {}", presentation::status_action(t.status))?;
        }
        Ok(())
    }

    fn write_lessons(&self, f: &mut String) -> fmt::Result {
        for lesson in &self.fixtures.lessons {
            writeln!(
                f, "{} {}",
                lesson.title,
                self.style.badge(
                    presentation::difficulty_tone(lesson.difficulty),
                    presentation::difficulty_label(lesson.difficulty),
                ),
            )?;
            writeln!(f, "  {}   {} solved   rating {}", lesson.category, lesson.solved, lesson.rating)?;
        }
        Ok(())
    }

    fn write_history(&self, f: &mut String) -> fmt::Result {
        for game in &self.fixtures.history {
            let tone = presentation::result_tone(game.result);
            writeln!(
                f, "{} {}  vs {} ({})",
                self.style.paint(tone, presentation::result_score(game.result)),
                presentation::result_label(game.result),
                game.opponent,
                game.rating,
            )?;
            writeln!(
                f, "  {}   {} moves   {}",
                game.opening, game.moves, self.style.paint(Tone::Muted, &game.date),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Selection;

    fn dashboard() -> Dashboard {
        Dashboard::new(Fixtures::sample(), Style::plain())
    }

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn starts_on_board_tab() {
        let dash = dashboard();
        assert_eq!(dash.active_tab(), Tab::Board);
        let screen = dash.render();
        assert!(screen.contains("[Board]"));
        assert!(screen.contains("8 0  r  n  b  q  k  b  n  r "));
        assert!(screen.contains("1 7  R  N  B  Q  K  B  N  R "));
        assert!(screen.contains("Selected: -"));
        assert!(screen.contains("Rating 2450"));
    }

    #[test]
    fn selected_square_is_marked() {
        let mut dash = dashboard();
        dash.handle(Command::Click(sq(6, 4)));
        let screen = dash.render();
        assert!(screen.contains("<P>"));
        assert!(screen.contains("Selected: e2"));
        assert_eq!(dash.board().selection(), Selection::Selected(sq(6, 4)));
    }

    #[test]
    fn click_from_another_tab_returns_to_board() {
        let mut dash = dashboard();
        dash.handle(Command::SwitchTab(Tab::History));
        assert_eq!(dash.active_tab(), Tab::History);
        dash.handle(Command::Click(sq(6, 4)));
        assert_eq!(dash.active_tab(), Tab::Board);
        assert_eq!(dash.last_interaction(), Some(Interaction::Selected(sq(6, 4))));
    }

    #[test]
    fn render_reflects_relocation() {
        let mut dash = dashboard();
        dash.handle(Command::Click(sq(6, 4)));
        dash.handle(Command::Click(sq(4, 4)));
        let screen = dash.render();
        let rank_four = screen.lines().find(|line| line.starts_with("4 4 ")).unwrap();
        assert_eq!(rank_four, "4 4     ·     ·  P  ·     · ");
        let rank_two = screen.lines().find(|line| line.starts_with("2 6 ")).unwrap();
        assert_eq!(rank_two, "2 6  P  P  P  P     P  P  P ");
        assert!(screen.contains("Selected: -"));
    }

    #[test]
    fn list_tabs_show_badges() {
        let mut dash = dashboard();
        dash.switch_tab(Tab::Tournaments);
        let screen = dash.render();
        assert!(screen.contains("World Blitz Championship [Live]"));
        assert!(screen.contains("> Register"));

        dash.switch_tab(Tab::Lessons);
        assert!(dash.render().contains("Rook Endgame [Hard]"));

        dash.switch_tab(Tab::History);
        let screen = dash.render();
        assert!(screen.contains("½-½ Draw  vs IM_Petrov (2650)"));
        assert!(screen.contains("0-1 Loss"));
    }

    #[test]
    fn quit_ends_the_session() {
        let mut dash = dashboard();
        assert_eq!(dash.handle(Command::Help), Flow::Continue);
        assert_eq!(dash.handle(Command::Quit), Flow::Quit);
    }
}

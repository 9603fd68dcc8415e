/// Frame composition.
///
/// [`compose`] turns the session into a flat list of draw commands in
/// logical canvas coordinates. It does not touch assets or the terminal, so
/// the exact contents of a frame can be asserted on directly.
use crate::config::{GameConfig, MAX_LIVES};
use crate::core::surface::{Point, PxRect, Rgb};
use crate::game::animation::AnimSet;
use crate::game::session::Session;
use crate::game::state::GameState;

pub const PANEL_BG: Rgb = Rgb(26, 26, 26);
pub const HINT_COLOR: Rgb = Rgb(220, 220, 220);

const MARGIN: i32 = 12;
const HEART_SIZE: u32 = 32;
const HEART_STEP: i32 = 38;
const WORD_Y: i32 = 240;
const WORD_STEP: i32 = 28;
const GUESSED_STEP: i32 = 18;
const GUESSED_LINE: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Image {
    Sheet(AnimSet),
    Heart { full: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCmd {
    Clear(Rgb),
    Fill {
        rect: PxRect,
        color: Rgb,
    },
    Image {
        image: Image,
        src: Option<PxRect>,
        dst: PxRect,
    },
    Text {
        text: String,
        at: Point,
        color: Rgb,
        wrap: Option<u32>,
    },
}

fn text(s: impl Into<String>, x: i32, y: i32) -> DrawCmd {
    DrawCmd::Text {
        text: s.into(),
        at: Point::new(x, y),
        color: Rgb::WHITE,
        wrap: None,
    }
}

pub fn compose(session: &Session, cfg: &GameConfig) -> Vec<DrawCmd> {
    let win = &cfg.window;
    let mut cmds = vec![DrawCmd::Clear(Rgb::BLACK)];

    // Dog, centred in the left third.
    let sprite = &cfg.sprite;
    let (fw, fh) = (sprite.frame_width, sprite.frame_height);
    let (dw, dh) = (fw * sprite.scale, fh * sprite.scale);
    let clock = session.animation();
    cmds.push(DrawCmd::Image {
        image: Image::Sheet(clock.displayed_set(session.state())),
        src: Some(PxRect::new((clock.current_frame() * fw) as i32, 0, fw, fh)),
        dst: PxRect::new(
            win.width / 3 - dw as i32 / 2,
            win.height / 2 - dh as i32 / 2,
            dw,
            dh,
        ),
    });

    // Side panel.
    let panel = PxRect::new(win.width - win.panel_width, 0, win.panel_width as u32, win.height as u32);
    let left = panel.x + MARGIN;
    cmds.push(DrawCmd::Fill {
        rect: panel,
        color: PANEL_BG,
    });
    cmds.push(text("Guess the Word!", left, 20));

    let round = session.round();
    let lives = round.map_or(MAX_LIVES, |r| r.lives());
    for i in 0..MAX_LIVES {
        cmds.push(DrawCmd::Image {
            image: Image::Heart { full: i < lives },
            src: None,
            dst: PxRect::new(left + i as i32 * HEART_STEP, 60, HEART_SIZE, HEART_SIZE),
        });
    }

    if let Some(round) = round {
        cmds.push(text("Hint:", left, 110));
        cmds.push(DrawCmd::Text {
            text: round.hint().to_string(),
            at: Point::new(left, 136),
            color: HINT_COLOR,
            wrap: Some(panel.w - 2 * MARGIN as u32),
        });

        for (i, c) in round.masked_word().chars().enumerate() {
            cmds.push(text(c.to_string(), left + i as i32 * WORD_STEP, WORD_Y));
        }

        cmds.push(text("Guessed:", left, WORD_Y + 48));
        let right_limit = panel.x + panel.w as i32 - 20;
        let (mut gx, mut gy) = (left, WORD_Y + 76);
        for letter in round.guessed_letters() {
            cmds.push(text(letter.as_char().to_ascii_uppercase().to_string(), gx, gy));
            gx += GUESSED_STEP;
            if gx > right_limit {
                gx = left;
                gy += GUESSED_LINE;
            }
        }
    }

    if let Some(prompt) = session.state().prompt() {
        let offset = match session.state() {
            GameState::Win => 160,
            GameState::Dead => 200,
            _ => 120,
        };
        cmds.push(text(prompt, win.width / 2 - offset, win.height - 80));
    }

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::round::{Letter, RoundState};
    use crate::game::words::index_of;

    fn texts(cmds: &[DrawCmd]) -> Vec<(&str, Point)> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, at, .. } => Some((text.as_str(), *at)),
                _ => None,
            })
            .collect()
    }

    fn hearts(cmds: &[DrawCmd]) -> Vec<bool> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Image {
                    image: Image::Heart { full },
                    ..
                } => Some(*full),
                _ => None,
            })
            .collect()
    }

    fn session_on(word: &str) -> Session {
        let mut s = Session::with_seed(3);
        s.begin_round(RoundState::new(index_of(word).unwrap()));
        s
    }

    #[test]
    fn start_screen_has_prompt_and_full_hearts() {
        let cfg = GameConfig::default();
        let cmds = compose(&Session::with_seed(0), &cfg);

        assert_eq!(cmds[0], DrawCmd::Clear(Rgb::BLACK));
        assert_eq!(hearts(&cmds), vec![true; 6]);
        let t = texts(&cmds);
        assert!(t.contains(&("Guess the Word!", Point::new(492, 20))));
        assert!(t.contains(&("Press SPACE to Start", Point::new(280, 400))));
        assert!(!t.iter().any(|(s, _)| *s == "Hint:"));
    }

    #[test]
    fn sprite_uses_current_frame_scaled_three_times() {
        let cfg = GameConfig::default();
        let cmds = compose(&Session::with_seed(0), &cfg);
        assert_eq!(
            cmds[1],
            DrawCmd::Image {
                image: Image::Sheet(AnimSet::Idle),
                src: Some(PxRect::new(0, 0, 64, 64)),
                dst: PxRect::new(170, 144, 192, 192),
            }
        );
        assert_eq!(
            cmds[2],
            DrawCmd::Fill {
                rect: PxRect::new(480, 0, 320, 480),
                color: PANEL_BG,
            }
        );
    }

    #[test]
    fn play_screen_shows_word_hint_and_guesses() {
        let cfg = GameConfig::default();
        let mut s = session_on("ball");
        s.guess(Letter::from_char('l').unwrap());
        s.guess(Letter::from_char('z').unwrap());
        let cmds = compose(&s, &cfg);

        assert_eq!(hearts(&cmds), vec![true, true, true, true, true, false]);
        let t = texts(&cmds);
        assert!(t.contains(&("_", Point::new(492, 240))));
        assert!(t.contains(&("_", Point::new(520, 240))));
        assert!(t.contains(&("L", Point::new(548, 240))));
        assert!(t.contains(&("L", Point::new(576, 240))));
        assert!(t.contains(&("Guessed:", Point::new(492, 288))));
        assert!(t.contains(&("L", Point::new(492, 316))));
        assert!(t.contains(&("Z", Point::new(510, 316))));
        assert_eq!(s.state().prompt(), None);

        let hint = cmds.iter().find_map(|c| match c {
            DrawCmd::Text { text, wrap: Some(w), color, .. } => Some((text.clone(), *w, *color)),
            _ => None,
        });
        assert_eq!(
            hint,
            Some((
                "A round toy used for throwing and catching.".to_string(),
                296,
                HINT_COLOR
            ))
        );
    }

    #[test]
    fn guessed_letters_wrap_at_panel_edge() {
        let mut cfg = GameConfig::default();
        // Room for five letters per line: 692, 710, 728, 746, 764.
        cfg.window.panel_width = 120;
        let mut s = session_on("biscuit");
        for c in "bcistadefg".chars() {
            s.guess(Letter::from_char(c).unwrap());
        }
        assert_eq!(s.state(), GameState::Play);

        let cmds = compose(&s, &cfg);
        let guessed: Vec<Point> = texts(&cmds)
            .iter()
            .filter(|(_, at)| at.y >= 316)
            .map(|(_, at)| *at)
            .collect();
        assert_eq!(guessed.len(), 10);
        assert_eq!(guessed[4], Point::new(764, 316));
        assert_eq!(guessed[5], Point::new(692, 336));
        assert_eq!(guessed[9], Point::new(764, 336));
    }

    #[test]
    fn dead_screen_draws_death_sheet() {
        let cfg = GameConfig::default();
        let mut s = session_on("park");
        for c in "zxqwvu".chars() {
            s.guess(Letter::from_char(c).unwrap());
        }
        assert_eq!(s.state(), GameState::Dead);
        let cmds = compose(&s, &cfg);
        assert!(matches!(
            cmds[1],
            DrawCmd::Image {
                image: Image::Sheet(AnimSet::Death),
                ..
            }
        ));
        assert_eq!(hearts(&cmds), vec![false; 6]);
        assert!(texts(&cmds).contains(&(
            "The dog died... Press SPACE to restart",
            Point::new(200, 400)
        )));
    }
}

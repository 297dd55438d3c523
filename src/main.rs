use ::rand::rngs::StdRng;
use ::rand::SeedableRng;
use log::{info, warn, LevelFilter};
use macroquad::prelude::*;
use simplelog::{Config, SimpleLogger};

use snake_arcade::cosmetics::{Banner, Cosmetics};
use snake_arcade::{
    Effect, FoodKind, GameEvent, GameOverReason, GameSession, GameState, JsonFileStore, ScoreStore, Snapshot, GRID_COUNT,
};

const WINDOW_SIZE: i32 = 600;
const HUD_HEIGHT: f32 = 48.0;

#[derive(Copy, Clone)]
struct Palette {
    background: Color,
    wall: Color,
    body: Color,
    head: Color,
    text: Color,
    dim: Color,
}

const DARK: Palette = Palette {
    background: Color::new(0.07, 0.08, 0.10, 1.0),
    wall: Color::new(0.20, 0.29, 0.37, 1.0),
    body: Color::new(0.18, 0.80, 0.44, 1.0),
    head: Color::new(0.13, 0.59, 0.33, 1.0),
    text: WHITE,
    dim: GRAY,
};

const LIGHT: Palette = Palette {
    background: WHITE,
    wall: Color::new(0.20, 0.29, 0.37, 1.0),
    body: Color::new(0.18, 0.80, 0.44, 1.0),
    head: Color::new(0.13, 0.59, 0.33, 1.0),
    text: BLACK,
    dim: DARKGRAY,
};

fn food_color(kind: FoodKind) -> Color {
    match kind {
        FoodKind::Normal => Color::from_rgba(0xFF, 0x57, 0x22, 255),
        FoodKind::Speed => Color::from_rgba(0x21, 0x96, 0xF3, 255),
        FoodKind::Slow => Color::from_rgba(0x9C, 0x27, 0xB0, 255),
        FoodKind::Bonus => Color::from_rgba(0xFF, 0xD7, 0x00, 255),
    }
}

fn effect_label(effect: Effect) -> &'static str {
    match effect {
        Effect::SpeedUp => "SPEED",
        Effect::SlowDown => "SLOW",
    }
}

/// Keys polled each frame, in the order they reach the session.
const INPUT_KEYS: [KeyCode; 11] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
];

/// Key names understood by the session's input handlers.
fn key_name(key: KeyCode) -> Option<&'static str> {
    match key {
        KeyCode::Up => Some("ArrowUp"),
        KeyCode::Down => Some("ArrowDown"),
        KeyCode::Left => Some("ArrowLeft"),
        KeyCode::Right => Some("ArrowRight"),
        KeyCode::W => Some("w"),
        KeyCode::A => Some("a"),
        KeyCode::S => Some("s"),
        KeyCode::D => Some("d"),
        KeyCode::Key1 => Some("1"),
        KeyCode::Key2 => Some("2"),
        KeyCode::Key3 => Some("3"),
        _ => None,
    }
}

/// Board placement for the current window: tile size and top-left corner.
struct Layout {
    tile: f32,
    off_x: f32,
    off_y: f32,
}

impl Layout {
    fn fit() -> Self {
        let sw = screen_width();
        let sh = screen_height() - HUD_HEIGHT;
        let tile = (sw / GRID_COUNT as f32).min(sh / GRID_COUNT as f32);
        let board = tile * GRID_COUNT as f32;
        Self { tile, off_x: (sw - board) * 0.5, off_y: HUD_HEIGHT + (sh - board) * 0.5 }
    }

    fn to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (self.off_x + x * self.tile, self.off_y + y * self.tile)
    }
}

fn draw_board(snap: &Snapshot<'_>, fx: &Cosmetics, layout: &Layout, palette: &Palette, t: f64) {
    let tile = layout.tile;

    for c in snap.walls.iter() {
        let (x, y) = layout.to_screen(c.x as f32, c.y as f32);
        draw_rectangle(x, y, tile - 1.0, tile - 1.0, palette.wall);
    }

    // tail first so the head ends up on top
    let len = snap.segments.len() as f32;
    for (i, &(sx, sy)) in snap.segments.iter().enumerate().rev() {
        let alpha = 1.0 - (i as f32 / len) * 0.6;
        let (x, y) = layout.to_screen(sx as f32, sy as f32);
        let color = Color { a: alpha, ..palette.body };
        draw_rectangle(x, y, tile - 1.0, tile - 1.0, color);
    }

    if let Some(food) = snap.food {
        let color = food_color(food.kind);
        let pulse = 0.15 * (t * 1000.0 / 150.0).sin() as f32 + 0.85;
        let (x, y) = layout.to_screen(food.cell.x as f32 + 0.5, food.cell.y as f32 + 0.5);
        draw_circle(x, y, tile * 0.8 * pulse, Color { a: 0.25, ..color });
        draw_circle(x, y, tile * 0.5 * pulse, color);
    }

    if let Some(&(hx, hy)) = snap.segments.first() {
        let (x, y) = layout.to_screen(hx as f32 + 0.5, hy as f32 + 0.5);
        draw_circle(x, y, tile * 0.5, palette.head);
    }

    for p in fx.particles() {
        let (x, y) = layout.to_screen(p.x, p.y);
        draw_circle(x, y, tile * 0.12, Color { a: p.alpha(), ..food_color(p.kind) });
    }
    for text in fx.texts() {
        let (x, y) = layout.to_screen(text.x, text.y);
        draw_text(&text.text, x, y, tile * 1.2, Color { a: text.alpha(), ..palette.text });
    }
}

fn draw_hud(snap: &Snapshot<'_>, fx: &Cosmetics, palette: &Palette) {
    let line = format!(
        "Score: {}  High Score: {}  [{}]",
        snap.score,
        snap.high_score,
        snap.difficulty.label()
    );
    draw_text(&line, 8.0, 20.0, 24.0, palette.text);

    let mut status = String::new();
    if let Some(left) = snap.combo_remaining.filter(|_| snap.combo > 1) {
        status.push_str(&format!("Combo x{} ({:.1}s)  ", snap.combo, left / 1000.0));
    }
    for (effect, left) in &snap.effects {
        status.push_str(&format!("{} {:.1}s  ", effect_label(*effect), left / 1000.0));
    }
    draw_text(&status, 8.0, 40.0, 18.0, palette.dim);

    let banner = match fx.banner() {
        Some(Banner::Combo(n)) => format!("COMBO x{n}!"),
        Some(Banner::ComboEnded) => "combo ended".to_string(),
        Some(Banner::Effect(e)) => format!("{}!", effect_label(*e)),
        Some(Banner::EffectEnded(e)) => format!("{} wore off", effect_label(*e)),
        Some(Banner::NewHighScore(s)) => format!("NEW HIGH SCORE {s}"),
        None => return,
    };
    let m = measure_text(&banner, None, 28, 1.0);
    draw_text(&banner, (screen_width() - m.width) * 0.5, HUD_HEIGHT + 36.0, 28.0, palette.text);
}

fn draw_game_over(snap: &Snapshot<'_>, reason: GameOverReason, palette: &Palette) {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.4));
    let sw = screen_width();
    let sh = screen_height();
    let title = match reason {
        GameOverReason::BoardFull => "BOARD CLEARED",
        _ => "GAME OVER",
    };
    let tm = measure_text(title, None, 36, 1.0);
    draw_text(title, (sw - tm.width) * 0.5, sh * 0.4, 36.0, palette.head);
    let score = format!("Score: {}  High Score: {}", snap.score, snap.high_score);
    let sm = measure_text(&score, None, 24, 1.0);
    draw_text(&score, (sw - sm.width) * 0.5, sh * 0.4 + 40.0, 24.0, WHITE);
    let hint = "R / Enter: Play again  Esc: Quit";
    let hm = measure_text(hint, None, 22, 1.0);
    draw_text(hint, (sw - hm.width) * 0.5, sh * 0.4 + 76.0, 22.0, WHITE);
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: WINDOW_SIZE,
        window_height: WINDOW_SIZE + HUD_HEIGHT as i32,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(e) = SimpleLogger::init(LevelFilter::Info, Config::default()) {
        eprintln!("logger unavailable: {e}");
    }

    let mut store = JsonFileStore::default();
    let high_score = store.load().unwrap_or_else(|e| {
        warn!("could not read {}: {e}", store.path().display());
        0
    });
    info!("starting with high score {high_score}");

    let seed = (macroquad::miniquad::date::now() * 1_000_000.0) as u64;
    let mut session = GameSession::seeded(seed, high_score);
    let mut fx = Cosmetics::default();
    let mut fx_rng = StdRng::seed_from_u64(seed ^ 0x5EED);
    let mut light_theme = false;

    loop {
        let now = get_time() * 1000.0;

        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::T) {
            light_theme = !light_theme;
        }
        // get_keys_pressed() is a HashSet; poll a fixed table instead
        let mut turns = Vec::new();
        for name in INPUT_KEYS.into_iter().filter(|k| is_key_pressed(*k)).filter_map(key_name) {
            if !session.handle_difficulty_key(name) {
                turns.push(name);
            }
        }
        session.handle_key_batch(&turns);
        if !session.is_running() && (is_key_pressed(KeyCode::R) || is_key_pressed(KeyCode::Enter)) {
            session.reset();
            fx.clear();
        }

        let report = session.frame(now);
        for event in &report.events {
            fx.observe(event, &mut fx_rng);
            if let GameEvent::NewHighScore(score) = event {
                if let Err(e) = store.save(*score) {
                    warn!("could not save high score: {e}");
                }
            }
        }
        fx.update(get_frame_time());

        let palette = if light_theme { LIGHT } else { DARK };
        clear_background(palette.background);
        let layout = Layout::fit();
        let snap = session.snapshot(now);
        draw_board(&snap, &fx, &layout, &palette, get_time());
        draw_hud(&snap, &fx, &palette);
        if let GameState::GameOver(reason) = snap.state {
            draw_game_over(&snap, reason, &palette);
        }

        next_frame().await;
    }
}

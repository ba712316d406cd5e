use macroquad::prelude::*;
use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snake_canvas::config::{CONFIG_PATH, GameConfig};
use snake_canvas::render::Screen;
use snake_canvas::Driver;

// Room under the field for the score label
const SCORE_STRIP: i32 = 30;

fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: config.field_width,
        window_height: config.field_height + SCORE_STRIP,
        window_resizable: false,
        ..Default::default()
    }
}

fn load_config() -> GameConfig {
    GameConfig::load(CONFIG_PATH).unwrap_or_else(|e| {
        warn!("ignoring {}: {}", CONFIG_PATH, e);
        GameConfig::default()
    })
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snake_canvas=info".into()),
        )
        .init();

    // Read once so the window and the game agree on the field size
    let config = load_config();
    info!(?config, "starting");

    macroquad::Window::from_config(window_conf(&config), run(config));
}

async fn run(config: GameConfig) {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut driver = match Driver::new(&config, rng, get_time()) {
        Ok(driver) => driver,
        Err(e) => {
            error!("could not set up the field: {}", e);
            return;
        }
    };
    let grid = driver.state().grid;
    let mut screen = Screen;

    loop {
        if is_key_pressed(KeyCode::Q) {
            break;
        }

        driver.on_keys_pressed(is_key_pressed);
        driver.update(get_time());

        clear_background(BLACK);
        driver.frame().replay(&mut screen);
        driver.score_board().draw(&grid);

        next_frame().await;
    }
}

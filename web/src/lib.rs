use clap::Parser;
use morpion_core::{CELL_COUNT, LINES, Player};
use wasm_bindgen::prelude::*;
use yew::prelude::*;

mod board;
mod game;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

impl Args {
    /// Parses a URL fragment such as `#-v&-v` as command line arguments.
    fn from_fragment(fragment: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(fragment.split(['#', '&']))
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <game::GameView/>
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_fragment(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::info!(
        "mounting board: {} cells, {} winning lines, {} opens",
        CELL_COUNT,
        LINES.len(),
        Player::for_move(0)
    );
    yew::Renderer::<App>::with_root(root).render();
}

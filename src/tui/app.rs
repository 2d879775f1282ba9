mod compliments;
mod menu;
mod state;

pub use compliments::{
    Complimenter, KLONDIKE_COMPLIMENTS, MATCH3_COMPLIMENTS, MOVE_COMPLIMENT_CHANCE,
};
pub use state::{AppState, GameChoice, InputAction, KlondikeCursor, Scene};

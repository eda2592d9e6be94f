use morpion_core as game;
use game::{Mark, Player, Position, Snapshot};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct CellProps {
    position: Position,
    mark: Mark,
    onclick: Callback<Position>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        position,
        mark,
        onclick,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", position.index());
        onclick.emit(position);
    });

    html! {
        <button class="square" {onclick}>{mark.map(Player::symbol).unwrap_or_default()}</button>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct BoardProps {
    pub next_player: Player,
    pub squares: Snapshot,
    pub on_play: Callback<Snapshot>,
}

/// Snapshot resulting from a click at `position`, if the click counts as a move.
fn next_squares(squares: &Snapshot, next_player: Player, position: Position) -> Option<Snapshot> {
    match game::apply_move(squares, position, next_player) {
        Ok(next) => {
            log::debug!("{} plays cell {}", next_player, position.index());
            Some(next)
        }
        Err(err) => {
            log::debug!("click on cell {} ignored: {}", position.index(), err);
            None
        }
    }
}

#[function_component(BoardView)]
pub(crate) fn board_component(props: &BoardProps) -> Html {
    let BoardProps {
        next_player,
        squares,
        on_play,
    } = props.clone();

    let status = game::Status::for_board(&squares, next_player);

    let onclick = {
        let squares = squares.clone();
        Callback::from(move |position: Position| {
            if let Some(next) = next_squares(&squares, next_player, position) {
                on_play.emit(next);
            }
        })
    };

    html! {
        <>
            <div class="status">{status.to_string()}</div>
            {
                for squares.rows().map(|row| html! {
                    <div class="board-row">
                        {
                            for row.map(|(position, mark)| html! {
                                <CellView {position} {mark} onclick={onclick.clone()}/>
                            })
                        }
                    </div>
                })
            }
        </>
    }
}

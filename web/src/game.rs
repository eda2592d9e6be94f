use crate::board::BoardView;
use morpion_core as game;
use game::{GameHistory, HistoryOutcome, Snapshot};
use yew::prelude::*;

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<HistoryOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, HistoryOutcome::has_update)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Play(Snapshot),
    JumpTo(usize),
}

/// Label of the history button leading to move `index`.
fn move_label(index: usize) -> String {
    if index > 0 {
        format!("Aller au coup #{}", index)
    } else {
        "Revenir au début".to_string()
    }
}

#[derive(Debug, Default)]
pub(crate) struct GameView {
    history: GameHistory,
}

impl GameView {
    /// Applies `msg` to the history, returning whether a redraw is needed.
    fn apply(&mut self, msg: Msg) -> bool {
        use Msg::*;

        match msg {
            Play(next) => {
                let updated = self.history.play(next).has_update();
                log::debug!(
                    "move #{} recorded, status: {}",
                    self.history.current_index(),
                    self.history.status()
                );
                updated
            }
            JumpTo(index) => {
                log::debug!("jump to move #{}", index);
                self.history
                    .jump_to(index)
                    .inspect_err(|err| log::warn!("cannot jump to move #{}: {}", index, err))
                    .has_update()
            }
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.apply(msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_play = link.callback(Msg::Play);

        html! {
            <div class="game">
                <div class="game-board">
                    <BoardView
                        next_player={self.history.next_player()}
                        squares={self.history.current().clone()}
                        {on_play}
                    />
                </div>
                <div class="game-info">
                    <ol>
                        {
                            for self.history.snapshots().iter().enumerate().map(|(index, _)| {
                                let onclick = link.callback(move |_: MouseEvent| Msg::JumpTo(index));
                                html! {
                                    <li key={index}>
                                        <button {onclick}>{move_label(index)}</button>
                                    </li>
                                }
                            })
                        }
                    </ol>
                </div>
            </div>
        }
    }
}

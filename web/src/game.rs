use crate::utils::*;
use clap::Args;
use minefield_core as game;
use yew::prelude::*;

/// Result of a move that only needs a redraw when it changed something.
pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl HasUpdate for game::Result<game::FlagOutcome> {
    fn has_update(self) -> bool {
        match self {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::warn!("flag rejected: {}", err);
                false
            }
        }
    }
}

impl HasUpdate for game::Result<game::RevealOutcome> {
    fn has_update(self) -> bool {
        match self {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::warn!("reveal rejected: {}", err);
                false
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Reveal(game::Coord2),
    ToggleFlag(game::Coord2),
    NewGame,
}

fn cell_classes(view: game::CellView) -> Classes {
    use game::CellView::*;

    classes!(
        "cell",
        match view {
            Hidden => classes!(),
            Flagged => classes!("flagged"),
            Revealed(count) => classes!("revealed", format!("num-{}", count)),
            Mine => classes!("revealed", "mine"),
            TriggeredMine => classes!("revealed", "mine", "oops"),
        }
    )
}

fn cell_glyph(view: game::CellView) -> Option<String> {
    use game::CellView::*;

    match view {
        Hidden | Revealed(0) => None,
        Flagged => Some("⚑".to_string()),
        Revealed(count) => Some(count.to_string()),
        Mine | TriggeredMine => Some("💣".to_string()),
    }
}

fn status_text(session: &game::Session) -> String {
    use game::SessionState::*;

    match session.state() {
        InProgress => format!("Mines left: {}", session.remaining_mines()),
        Won => "You won!".to_string(),
        Lost => "You lost!".to_string(),
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    view: game::CellView,
    callback: Callback<Msg>,
}

#[function_component(CellTile)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        view,
        callback,
    } = props.clone();

    let class = cell_classes(view);

    let onclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("({}, {}) left click", row, col);
            callback.emit(Msg::Reveal((row, col)));
        })
    };

    let oncontextmenu = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        log::trace!("({}, {}) right click", row, col);
        callback.emit(Msg::ToggleFlag((row, col)));
    });

    html! {
        <td {class} {onclick} {oncontextmenu}>{for cell_glyph(view)}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::Session,
    forced_seed: Option<u64>,
}

impl GameView {
    fn next_seed(&self) -> u64 {
        self.forced_seed.unwrap_or_else(js_random_seed)
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let forced_seed = ctx.props().seed;
        let seed = forced_seed.unwrap_or_else(js_random_seed);
        Self {
            session: game::Session::new(game::GameConfig::DEFAULT, seed),
            forced_seed,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Reveal(pos) => {
                log::debug!("reveal cell: {:?}", pos);
                self.session.reveal(pos).has_update()
            }
            ToggleFlag(pos) => {
                log::debug!("flag cell: {:?}", pos);
                self.session.toggle_flag(pos).has_update()
            }
            NewGame => {
                let seed = self.next_seed();
                log::debug!("new game, seed: {}", seed);
                self.session = self.session.reset(seed);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (rows, cols) = self.session.size();
        let is_playable = !self.session.is_terminal();
        let status = status_text(&self.session);

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        html! {
            <div class="minefield" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <h1>{"Minefield"}</h1>
                <table class={classes!("board", is_playable.then_some("playable"))}>
                    {
                        for (0..rows).map(|row| html! {
                            <tr>
                                {
                                    for (0..cols).map(|col| {
                                        let view = self.session.view_at((row, col)).unwrap_or_default();
                                        let callback = ctx.link().callback(|msg: Msg| msg);
                                        html! {
                                            <CellTile {row} {col} {view} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <div class="message">
                    {status}
                    if !is_playable {
                        <>
                            {" "}
                            <button onclick={cb_new_game}>{"Play again"}</button>
                        </>
                    }
                </div>
            </div>
        }
    }
}

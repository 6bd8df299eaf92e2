use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::session::Session;
use crate::ui::notice::Notice;

pub struct AppState {
    pub session: Signal<Session>,
    pub busy: Signal<bool>,
    pub notices: Signal<Vec<(u64, Notice)>>,
    pub next_notice_id: Signal<u64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: use_signal(Session::new),
            busy: use_signal(|| false),
            notices: use_signal(Vec::<(u64, Notice)>::new),
            next_notice_id: use_signal(|| 0_u64),
        }
    }
}

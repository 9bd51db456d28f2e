use super::presenter::{self, Presentation};
use super::state::{Randomizer, RequestTicket, Settlement};
use crate::domain::a001_pokemon::api;
use crate::shared::config::ApiConfig;
use crate::shared::notify;
use contracts::domain::a001_pokemon::FetchOutcome;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the randomizer screen
#[derive(Clone, Copy)]
pub struct RandomizerViewModel {
    pub machine: RwSignal<Randomizer>,
    api: StoredValue<ApiConfig>,
}

impl RandomizerViewModel {
    pub fn new(api: ApiConfig) -> Self {
        log::debug!("RandomizerViewModel created");
        Self {
            machine: RwSignal::new(Randomizer::new()),
            api: StoredValue::new(api),
        }
    }

    pub fn presentation(&self) -> Presentation {
        self.machine.with(|m| presenter::render(m.state()))
    }

    /// Start one fetch. Ignored while another one is in flight
    pub fn trigger_command(&self) {
        let Some(ticket) = self.machine.try_update(|m| m.trigger()).flatten() else {
            log::debug!("Trigger ignored: fetch already in flight");
            return;
        };

        let machine = self.machine;
        let api_config = self.api.get_value();
        spawn_local(async move {
            let outcome = api::fetch_random_pokemon(&api_config).await;

            // None if the screen was disposed meanwhile
            let settled = machine.try_update(|m| settle(m, ticket, outcome, notify::alert));
            if settled.is_none() {
                log::debug!("Fetch #{} finished after dispose", ticket.seq());
            }
        });
    }
}

/// Apply a finished fetch and report a failure through `notify` exactly once
pub(crate) fn settle(
    machine: &mut Randomizer,
    ticket: RequestTicket,
    outcome: FetchOutcome,
    notify: impl FnOnce(&str),
) -> Settlement {
    let settlement = machine.resolve(ticket, outcome);
    if let Settlement::Failed { message } = &settlement {
        notify(message);
    }
    settlement
}

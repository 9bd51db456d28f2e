use contracts::domain::a001_pokemon::{FetchOutcome, PokemonRecord};

/// Complete UI state of the randomizer screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub result: Option<PokemonRecord>,
    pub loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
}

impl ViewState {
    pub fn phase(&self) -> Phase {
        match (self.loading, &self.result) {
            (true, _) => Phase::Loading,
            (false, None) => Phase::Idle,
            (false, Some(_)) => Phase::Loaded,
        }
    }
}

/// Identifies one fetch; only the latest issued ticket may settle the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Loaded,
    /// Caller must report `message` to the user
    Failed { message: String },
    /// Ticket was superseded or nothing was loading; state untouched
    Stale,
}

/// ViewState plus the request sequence guarding it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Randomizer {
    state: ViewState,
    issued: u64,
}

impl Randomizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// `Idle|Loaded -> Loading`. Returns `None` while a fetch is in flight.
    pub fn trigger(&mut self) -> Option<RequestTicket> {
        if self.state.loading {
            return None;
        }

        let from = self.state.phase();
        self.issued += 1;
        self.state.loading = true;
        log::debug!("randomizer: {:?} -> Loading (request #{})", from, self.issued);
        Some(RequestTicket(self.issued))
    }

    pub fn resolve(&mut self, ticket: RequestTicket, outcome: FetchOutcome) -> Settlement {
        if !self.state.loading || ticket.0 != self.issued {
            log::debug!(
                "randomizer: discarding response #{} (latest #{})",
                ticket.0,
                self.issued
            );
            return Settlement::Stale;
        }

        self.state.loading = false;

        match outcome {
            Ok(record) => {
                log::debug!("randomizer: Loading -> Loaded ({})", record.display_name);
                self.state.result = Some(record);
                Settlement::Loaded
            }
            Err(error) => {
                if error.is_network() {
                    log::warn!("randomizer: fetch #{} failed: {}", ticket.0, error);
                } else {
                    log::error!("randomizer: fetch #{} returned bad data: {}", ticket.0, error);
                }
                log::debug!("randomizer: Loading -> {:?}", self.state.phase());
                Settlement::Failed {
                    message: error.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_pokemon::FetchError;

    fn pikachu() -> PokemonRecord {
        PokemonRecord::new("PIKACHU", "http://x/pikachu.png")
    }

    fn mew() -> PokemonRecord {
        PokemonRecord::new("mew", "http://x/mew.png")
    }

    #[test]
    fn test_initial_state_is_idle() {
        let machine = Randomizer::new();
        assert_eq!(machine.state(), &ViewState::default());
        assert_eq!(machine.state().phase(), Phase::Idle);
    }

    #[test]
    fn test_trigger_sets_loading_and_keeps_result() {
        let mut machine = Randomizer::new();
        let ticket = machine.trigger().unwrap();
        assert!(machine.state().loading);
        assert_eq!(machine.state().result, None);

        machine.resolve(ticket, Ok(mew()));
        machine.trigger().unwrap();
        assert!(machine.state().loading);
        assert_eq!(machine.state().result, Some(mew()));
        assert_eq!(machine.state().phase(), Phase::Loading);
    }

    #[test]
    fn test_trigger_while_loading_is_refused() {
        let mut machine = Randomizer::new();
        let first = machine.trigger().unwrap();
        let before = machine.clone();

        assert_eq!(machine.trigger(), None);
        assert_eq!(machine, before);

        assert_eq!(machine.resolve(first, Ok(mew())), Settlement::Loaded);
    }

    #[test]
    fn test_success_replaces_result() {
        let mut machine = Randomizer::new();
        let ticket = machine.trigger().unwrap();
        machine.resolve(ticket, Ok(mew()));

        let ticket = machine.trigger().unwrap();
        assert_eq!(machine.resolve(ticket, Ok(pikachu())), Settlement::Loaded);
        assert_eq!(
            machine.state(),
            &ViewState {
                result: Some(pikachu()),
                loading: false,
            }
        );
        assert_eq!(machine.state().phase(), Phase::Loaded);
    }

    #[test]
    fn test_failure_keeps_previous_result() {
        let mut machine = Randomizer::new();
        let ticket = machine.trigger().unwrap();
        machine.resolve(ticket, Ok(mew()));

        let ticket = machine.trigger().unwrap();
        let settlement = machine.resolve(ticket, Err(FetchError::Status { status: 500 }));

        assert_eq!(
            settlement,
            Settlement::Failed {
                message: "oh no, network is down! (HTTP 500)".to_string()
            }
        );
        assert_eq!(
            machine.state(),
            &ViewState {
                result: Some(mew()),
                loading: false,
            }
        );
    }

    #[test]
    fn test_failure_from_idle_returns_to_idle() {
        let mut machine = Randomizer::new();
        let ticket = machine.trigger().unwrap();
        let settlement =
            machine.resolve(ticket, Err(FetchError::Network("network is down".into())));

        assert_eq!(
            settlement,
            Settlement::Failed {
                message: FetchError::Network("network is down".into()).to_string()
            }
        );
        assert_eq!(machine.state().phase(), Phase::Idle);
    }

    #[test]
    fn test_outdated_ticket_is_discarded() {
        let mut machine = Randomizer::new();
        let old = machine.trigger().unwrap();
        machine.resolve(old, Err(FetchError::Timeout { millis: 10 }));

        let current = machine.trigger().unwrap();
        assert!(current.seq() > old.seq());

        assert_eq!(machine.resolve(old, Ok(mew())), Settlement::Stale);
        assert!(machine.state().loading);
        assert_eq!(machine.state().result, None);

        assert_eq!(machine.resolve(current, Ok(pikachu())), Settlement::Loaded);
        assert_eq!(machine.resolve(current, Ok(mew())), Settlement::Stale);
        assert_eq!(machine.state().result, Some(pikachu()));
    }
}

use std::future::Future;

use contracts::domain::a001_pokemon::{parse_pokemon, FetchError, PokemonId, PokemonRecord};
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::{AbortController, AbortSignal};

use crate::shared::config::ApiConfig;

/// Fetch a Pokémon with a random id in `PokemonId::MIN..=PokemonId::MAX`
pub async fn fetch_random_pokemon(api: &ApiConfig) -> Result<PokemonRecord, FetchError> {
    let id = PokemonId::random(&mut rand::thread_rng());
    fetch_pokemon(api, id).await
}

/// Single GET, no retries. Bounded by `api.timeout_ms` unless it is 0
pub async fn fetch_pokemon(api: &ApiConfig, id: PokemonId) -> Result<PokemonRecord, FetchError> {
    let url = api.pokemon_url(id);
    log::debug!("GET {}", url);

    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());

    let body = with_timeout(
        get_body(&url, signal.as_ref()),
        api.timeout_ms,
        TimeoutFuture::new,
    )
    .await;

    // Dropping the future does not stop the browser request
    if let (Err(FetchError::Timeout { .. }), Some(controller)) = (&body, &controller) {
        controller.abort();
    }

    parse_pokemon(&body?)
}

async fn get_body(url: &str, signal: Option<&AbortSignal>) -> Result<String, FetchError> {
    let response = Request::get(url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    check_status(response.ok(), response.status())?;

    response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))
}

fn check_status(ok: bool, status: u16) -> Result<(), FetchError> {
    if ok {
        Ok(())
    } else {
        Err(FetchError::Status { status })
    }
}

/// Race `request` against `delay(millis)`; `millis == 0` waits for the request only
async fn with_timeout<T, F, D>(
    request: F,
    millis: u32,
    delay: impl FnOnce(u32) -> D,
) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
    D: Future<Output = ()>,
{
    if millis == 0 {
        return request.await;
    }

    match select(Box::pin(request), Box::pin(delay(millis))).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(FetchError::Timeout { millis }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready, Ready};

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(true, 200), Ok(()));
        assert_eq!(
            check_status(false, 404),
            Err(FetchError::Status { status: 404 })
        );
        assert_eq!(
            check_status(false, 503),
            Err(FetchError::Status { status: 503 })
        );
    }

    #[test]
    fn test_slow_request_times_out() {
        let request = pending::<Result<String, FetchError>>();
        let result = block_on(with_timeout(request, 50, |_| ready(())));
        assert_eq!(result, Err(FetchError::Timeout { millis: 50 }));
    }

    #[test]
    fn test_fast_request_wins() {
        let request = ready(Ok::<_, FetchError>("{}".to_string()));
        let result = block_on(with_timeout(request, 50, |_| pending::<()>()));
        assert_eq!(result, Ok("{}".to_string()));
    }

    #[test]
    fn test_request_error_is_kept() {
        let request = ready(Err::<String, _>(FetchError::Status { status: 500 }));
        let result = block_on(with_timeout(request, 50, |_| pending::<()>()));
        assert_eq!(result, Err(FetchError::Status { status: 500 }));
    }

    #[test]
    fn test_zero_timeout_disables_bound() {
        let mut delay_started = false;
        let request = ready(Ok::<_, FetchError>("{}".to_string()));
        let result = block_on(with_timeout(request, 0, |_| -> Ready<()> {
            delay_started = true;
            ready(())
        }));

        assert_eq!(result, Ok("{}".to_string()));
        assert!(!delay_started);
    }
}

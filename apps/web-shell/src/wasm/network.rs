use super::*;

#[derive(Debug, Clone)]
pub(super) struct FetchError {
    pub(super) status_code: u16,
    pub(super) message: String,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.status_code == 0 {
            write!(formatter, "network error: {}", self.message)
        } else {
            write!(formatter, "http {}: {}", self.status_code, self.message)
        }
    }
}

pub(super) async fn fetch_fragment(url: &str) -> Result<FragmentPayload, FetchError> {
    let body = fetch_json(url).await?;
    serde_json::from_value(body).map_err(|error| FetchError {
        status_code: 200,
        message: format!("failed to decode fragment response: {error}"),
    })
}

/// Issues one GET and decodes the JSON body, with spinner accounting around
/// the whole request.
pub(super) async fn fetch_json(url: &str) -> Result<Value, FetchError> {
    note_request_started();
    let outcome = fetch_json_inner(url).await;
    note_request_settled();
    outcome
}

async fn fetch_json_inner(url: &str) -> Result<Value, FetchError> {
    let response = Request::get(url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(map_network_error)?;
    decode_json_response(response).await
}

fn map_network_error(error: gloo_net::Error) -> FetchError {
    FetchError {
        status_code: 0,
        message: error.to_string(),
    }
}

async fn decode_json_response(response: gloo_net::http::Response) -> Result<Value, FetchError> {
    let status = response.status();
    let raw = response.text().await.map_err(|error| FetchError {
        status_code: status,
        message: format!("failed to read response body: {error}"),
    })?;

    if !(200..=299).contains(&status) {
        return Err(FetchError {
            status_code: status,
            message: format!("request failed with status {status}"),
        });
    }

    serde_json::from_str(&raw).map_err(|error| FetchError {
        status_code: status,
        message: format!("failed to decode response: {error}"),
    })
}

pub(super) fn note_request_started() {
    let first_in_flight = SPINNER_STATE.with(|state| state.borrow_mut().request_started());
    if !first_in_flight {
        return;
    }

    // The indicator only appears when a request is still running once the
    // show delay elapses; fast cycles never reach it.
    spawn_local(async {
        sleep(Duration::from_millis(SPINNER_SHOW_DELAY_MS)).await;
        let still_executing = SPINNER_STATE.with(|state| state.borrow().is_executing());
        if still_executing {
            show_spinner();
        }
    });
}

pub(super) fn note_request_settled() {
    let all_settled = SPINNER_STATE.with(|state| state.borrow_mut().request_settled());
    if all_settled {
        hide_spinner();
    }
}

use async_trait::async_trait;
use common::Coordinates;
use dashboard::{LocateError, Locator};
use js_sys::{Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Geolocation, PositionOptions};

// GeolocationPositionError codes
const PERMISSION_DENIED: u16 = 1;
const TIMEOUT: u16 = 3;

/// Position from the browser's Geolocation API.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserLocator;

impl BrowserLocator {
    fn geolocation() -> Option<Geolocation> {
        let navigator = window()?.navigator();
        // The getter returns `undefined` rather than failing on browsers without the API
        let present = Reflect::get(&navigator, &JsValue::from_str("geolocation"))
            .map(|value| !value.is_undefined() && !value.is_null())
            .unwrap_or(false);
        if !present {
            return None;
        }
        navigator.geolocation().ok()
    }
}

#[async_trait(?Send)]
impl Locator for BrowserLocator {
    fn is_supported(&self) -> bool {
        Self::geolocation().is_some()
    }

    async fn locate(&self, timeout_ms: u32) -> Result<Coordinates, LocateError> {
        let geolocation = Self::geolocation().ok_or(LocateError::Unsupported)?;
        let options = PositionOptions::new();
        options.set_timeout(timeout_ms);

        let promise = Promise::new(&mut |resolve, reject| {
            let requested = geolocation.get_current_position_with_error_callback_and_options(
                &resolve,
                Some(&reject),
                &options,
            );
            if let Err(err) = requested {
                let _ = reject.call1(&JsValue::NULL, &err);
            }
        });

        log::debug!("Requesting current position (timeout {} ms)", timeout_ms);
        match JsFuture::from(promise).await {
            Ok(position) => coordinates_of(&position),
            Err(err) => Err(position_error(&err)),
        }
    }
}

fn number_at(object: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(object, &JsValue::from_str(key)).ok()?.as_f64()
}

fn coordinates_of(position: &JsValue) -> Result<Coordinates, LocateError> {
    let coords = Reflect::get(position, &JsValue::from_str("coords"))
        .map_err(|_| LocateError::PositionUnavailable("position without coordinates".into()))?;
    match (number_at(&coords, "latitude"), number_at(&coords, "longitude")) {
        (Some(latitude), Some(longitude)) => Ok(Coordinates {
            latitude,
            longitude,
        }),
        _ => Err(LocateError::PositionUnavailable(
            "position without coordinates".into(),
        )),
    }
}

fn position_error(err: &JsValue) -> LocateError {
    let message = Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_default();
    let code = number_at(err, "code").map(|c| c as u16);
    log::warn!("Geolocation failed (code {:?}): {}", code, message);
    match code {
        Some(PERMISSION_DENIED) => LocateError::PermissionDenied(message),
        Some(TIMEOUT) => LocateError::Timeout(message),
        _ => LocateError::PositionUnavailable(message),
    }
}

//! Bridge to the Stacks Connect library loaded on the page as
//! `window.StacksConnect`.

use js_sys::{Function, Promise, Reflect};
use shared::{WalletConnectResponse, WalletConnection, WalletError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::services::js::describe_js_error;

const LIBRARY_GLOBAL: &str = "StacksConnect";

fn library() -> Result<JsValue, WalletError> {
    let window = web_sys::window().ok_or(WalletError::Unavailable)?;
    let library = Reflect::get(&JsValue::from(window), &JsValue::from_str(LIBRARY_GLOBAL))
        .map_err(|_| WalletError::Unavailable)?;
    if library.is_undefined() || library.is_null() {
        return Err(WalletError::Unavailable);
    }
    Ok(library)
}

fn library_function(library: &JsValue, name: &str) -> Result<Function, WalletError> {
    Reflect::get(library, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or(WalletError::Unavailable)
}

async fn resolve(value: JsValue) -> Result<JsValue, WalletError> {
    if value.is_instance_of::<Promise>() {
        JsFuture::from(value.unchecked_into::<Promise>())
            .await
            .map_err(|e| WalletError::Rejected(describe_js_error(e)))
    } else {
        Ok(value)
    }
}

async fn request_connect() -> Result<WalletConnectResponse, WalletError> {
    let library = library()?;
    let connect = library_function(&library, "connect")?;
    let returned = connect
        .call0(&library)
        .map_err(|e| WalletError::Rejected(describe_js_error(e)))?;
    let value = resolve(returned).await?;

    let json = js_sys::JSON::stringify(&value)
        .map(String::from)
        .map_err(|e| WalletError::Malformed(describe_js_error(e)))?;
    WalletConnectResponse::from_json(&json)
}

/// Ask the wallet for an address
pub async fn connect() -> WalletConnection {
    match request_connect().await {
        Ok(response) => response.into_connection(),
        Err(reason) => WalletConnection::Failed { reason },
    }
}

/// Tell the wallet library to forget the session
pub async fn disconnect() -> Result<(), WalletError> {
    let library = library()?;
    let disconnect = library_function(&library, "disconnect")?;
    let returned = disconnect
        .call0(&library)
        .map_err(|e| WalletError::Rejected(describe_js_error(e)))?;
    resolve(returned).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn install_library(connect_body: &str) {
        let library = js_sys::Object::new();
        Reflect::set(&library, &"connect".into(), &Function::new_no_args(connect_body)).unwrap();
        Reflect::set(&library, &"disconnect".into(), &Function::new_no_args("return undefined;")).unwrap();
        let window = web_sys::window().unwrap();
        Reflect::set(&window, &LIBRARY_GLOBAL.into(), &library).unwrap();
    }

    fn remove_library() {
        let window = web_sys::window().unwrap();
        Reflect::delete_property(&window, &LIBRARY_GLOBAL.into()).unwrap();
    }

    // One test so the global is never shared between concurrently running cases
    #[wasm_bindgen_test]
    async fn test_connect_with_and_without_library() {
        remove_library();
        assert_eq!(
            connect().await,
            WalletConnection::Failed { reason: WalletError::Unavailable }
        );
        assert_eq!(disconnect().await, Err(WalletError::Unavailable));

        install_library(
            "return Promise.resolve({ addresses: [{ address: 'ST1STUB' }], \
             profile: { stxAddress: { mainnet: 'SP1', testnet: 'ST1' } }, address: 42 });",
        );
        assert_eq!(
            connect().await,
            WalletConnection::Connected { address: "ST1STUB".to_string() }
        );
        assert_eq!(disconnect().await, Ok(()));

        install_library("return Promise.reject(new Error('User rejected'));");
        assert_eq!(
            connect().await,
            WalletConnection::Failed { reason: WalletError::Rejected("User rejected".to_string()) }
        );

        remove_library();
    }
}

//! Stripe.js Bindings
//!
//! Just enough of the browser SDK to mount a payment element and confirm
//! a payment intent. Stripe.js is loaded by a script tag in `index.html`.

use aquaease_core::checkout::PAYMENT_ERROR_FALLBACK;
use js_sys::{Object, Promise, Reflect, JSON};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    type Stripe;

    #[wasm_bindgen(catch, js_name = Stripe)]
    fn load_stripe(publishable_key: &str) -> Result<Stripe, JsValue>;

    #[wasm_bindgen(method)]
    fn elements(this: &Stripe, options: &JsValue) -> Elements;

    #[wasm_bindgen(method, js_name = confirmPayment)]
    fn confirm_payment(this: &Stripe, options: &JsValue) -> Promise;

    #[derive(Clone)]
    type Elements;

    #[wasm_bindgen(method)]
    fn create(this: &Elements, kind: &str) -> Element;

    type Element;

    #[wasm_bindgen(method)]
    fn mount(this: &Element, target: &JsValue);

    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    fn write_text(text: &str) -> Result<Promise, JsValue>;
}

fn json(value: &serde_json::Value) -> Result<JsValue, String> {
    JSON::parse(&value.to_string()).map_err(|e| message(&e))
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), String> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| message(&e))
}

/// `error.message` of a JS error, or the generic fallback
fn message(error: &JsValue) -> String {
    Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| PAYMENT_ERROR_FALLBACK.to_string())
}

/// A mounted payment element bound to one payment intent
#[derive(Clone)]
pub struct PaymentForm {
    stripe: Stripe,
    elements: Elements,
}

impl PaymentForm {
    pub fn mount(publishable_key: &str, client_secret: &str, target: &JsValue) -> Result<Self, String> {
        let stripe = load_stripe(publishable_key).map_err(|e| message(&e))?;

        let options = json(&serde_json::json!({
            "clientSecret": client_secret,
            "appearance": {
                "theme": "stripe",
                "variables": {
                    "colorPrimary": "#0EA5E9",
                    "colorBackground": "#ffffff",
                    "colorText": "#0b1b2b",
                    "colorDanger": "#e11d48",
                    "borderRadius": "16px",
                },
            },
        }))?;

        let elements = stripe.elements(&options);
        elements.create("payment").mount(target);

        Ok(Self { stripe, elements })
    }

    /// Confirm the payment, redirecting only when the method requires it
    pub async fn confirm(&self, return_url: &str) -> Result<(), String> {
        let options = Object::new();
        set(&options, "elements", self.elements.as_ref())?;
        set(&options, "confirmParams", &json(&serde_json::json!({ "return_url": return_url }))?)?;
        set(&options, "redirect", &JsValue::from_str("if_required"))?;

        let result = JsFuture::from(self.stripe.confirm_payment(&options))
            .await
            .map_err(|e| message(&e))?;

        let error = Reflect::get(&result, &JsValue::from_str("error")).unwrap_or(JsValue::UNDEFINED);
        if error.is_undefined() || error.is_null() {
            Ok(())
        } else {
            Err(Reflect::get(&error, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
                .unwrap_or_else(|| "Payment failed.".to_string()))
        }
    }
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let promise = write_text(text).map_err(|e| message(&e))?;
    JsFuture::from(promise).await.map(|_| ()).map_err(|e| message(&e))
}

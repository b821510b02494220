//! Session sequences.
//!
//! Failures here land in the auth slice instead of the snackbar; the
//! login and activation pages render them inline.

use crate::gateway::{endpoints, ApiRequest};
use crate::i18n::keys;
use crate::state::auth::AuthIntent;
use crate::state::notification::NotificationIntent;

use super::context::EffectContext;
use super::Outcome;

pub(super) async fn logout(ctx: &EffectContext) -> Outcome {
    match ctx.call(ApiRequest::post(endpoints::SIGN_OUT)).await {
        Ok(_) => Ok(vec![AuthIntent::LoggedOut.into()]),
        Err(err) => Ok(vec![AuthIntent::Error(ctx.error_message(&err)).into()]),
    }
}

pub(super) async fn activate(ctx: &EffectContext, token: &str) -> Outcome {
    let request = ApiRequest::get(endpoints::ACTIVATE_ACCOUNT).query("token", token);
    match ctx.call(request).await {
        Ok(_) => {
            let message = ctx.translator().t(keys::ACCOUNT_ACTIVATED);
            Ok(vec![
                AuthIntent::Activated(message.clone()).into(),
                NotificationIntent::success(message).into(),
            ])
        }
        Err(err) => Ok(vec![AuthIntent::Error(ctx.error_message(&err)).into()]),
    }
}

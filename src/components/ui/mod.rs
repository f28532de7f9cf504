mod alert;
mod button;
mod captcha;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use captcha::CaptchaField;
pub(crate) use spinner::Spinner;

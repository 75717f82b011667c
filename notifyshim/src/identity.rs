use crate::config::NotifierConfig;
use crate::error::{NotifyError, Result};

/// Longest Application User Model ID Windows accepts.
pub const MAX_AUMI_LEN: usize = 128;

/// Who the OS should show notifications as coming from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub app_name: String,
    /// AUMI on Windows, bundle identifier on macOS when set explicitly.
    pub app_id: String,
    pub explicit: bool,
}

impl AppIdentity {
    /// # Errors
    /// Returns `NotifyError::Initialization` if the resulting id is empty or
    /// longer than [`MAX_AUMI_LEN`].
    pub fn from_config(config: &NotifierConfig) -> Result<Self> {
        let (app_id, explicit) = match config.app_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => (id.to_string(), true),
            _ => (
                configure_aumi(&config.company, &config.product, &config.sub_product, &config.version),
                false,
            ),
        };

        if app_id.is_empty() {
            return Err(NotifyError::Initialization("application id is empty".to_string()));
        }
        let len = app_id.chars().count();
        if len > MAX_AUMI_LEN {
            return Err(NotifyError::Initialization(format!(
                "application id is {len} characters, at most {MAX_AUMI_LEN} allowed"
            )));
        }

        Ok(Self {
            app_name: config.app_name.clone(),
            app_id,
            explicit,
        })
    }
}

/// Builds `company.product[.sub_product[.version]]`. The version is only
/// appended when a sub-product is present.
pub fn configure_aumi(company: &str, product: &str, sub_product: &str, version: &str) -> String {
    let mut aumi = String::new();
    for part in [company, product] {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !aumi.is_empty() {
            aumi.push('.');
        }
        aumi.push_str(part);
    }
    let sub_product = sub_product.trim();
    if !sub_product.is_empty() {
        aumi.push('.');
        aumi.push_str(sub_product);
        let version = version.trim();
        if !version.is_empty() {
            aumi.push('.');
            aumi.push_str(version);
        }
    }
    aumi
}

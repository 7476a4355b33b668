//! Device metrics queried from the host.

use serde::{Deserialize, Serialize};
use tessera_carton::String;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseSystemInfo {
    pub platform: String,
    pub pixel_ratio: f64,
    pub window_width: f64,
}

pub trait SystemInfo {
    fn base_system_info(&self) -> BaseSystemInfo;

    fn statusbar_height(&self) -> f64;
}

//! chromiumoxide-backed [`PageDriver`](checkset_core::PageDriver): browser
//! launch/attach, page stabilization, and the injected-JS primitives (deep
//! query across open shadow roots, same-origin frame enumeration, the
//! synthetic event burst, the native-setter bypass).

pub mod chromium;
pub mod shared;

pub use chromium::{BrowserSession, ChromiumPage};
pub use shared::{LaunchConfig, TimeoutConfig};

//! Order sharing: the plain-text share request, its handlers and the
//! share sheet that offers them.

mod handler;
mod request;
mod sheet;
mod summary;

pub use handler::{ClipboardHandler, OutboxHandler, ShareError, ShareHandler};
pub use request::{ShareAction, ShareRequest, MIME_TEXT_PLAIN};
pub use sheet::{ChooserOption, ShareSheet};
pub use summary::order_summary;

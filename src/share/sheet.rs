use crate::config::ShareConfig;
use crate::share::handler::{ClipboardHandler, OutboxHandler, ShareError, ShareHandler};
use crate::share::request::ShareRequest;

/// A handler offered by the chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooserOption {
    pub handler: usize,
    pub name: String,
}

/// The host's share mechanism: a registry of handlers and the chooser
/// that picks one of them.
#[derive(Default)]
pub struct ShareSheet {
    handlers: Vec<Box<dyn ShareHandler>>,
}

impl ShareSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handlers enabled by configuration. A clipboard that cannot be opened
    /// is left out rather than failing startup.
    pub fn from_config(config: &ShareConfig) -> Self {
        let mut sheet = Self::new();
        if config.clipboard {
            match ClipboardHandler::new() {
                Ok(handler) => sheet.register(Box::new(handler)),
                Err(err) => tracing::warn!(error = %err, "clipboard share handler disabled"),
            }
        }
        if let Some(path) = &config.outbox {
            sheet.register(Box::new(OutboxHandler::new(path.clone())));
        }
        sheet
    }

    pub fn register(&mut self, handler: Box<dyn ShareHandler>) {
        tracing::debug!(handler = handler.name(), "share handler registered");
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handlers able to take `request`, in registration order.
    pub fn chooser_for(&self, request: &ShareRequest) -> Vec<ChooserOption> {
        self.handlers
            .iter()
            .enumerate()
            .filter(|(_, handler)| handler.accepts(request))
            .map(|(index, handler)| ChooserOption {
                handler: index,
                name: handler.name().to_string(),
            })
            .collect()
    }

    /// Hand `request` to the chosen handler. Returns the handler's name.
    pub fn deliver(&mut self, handler: usize, request: &ShareRequest) -> Result<String, ShareError> {
        let Some(target) = self.handlers.get_mut(handler) else {
            return Err(ShareError::NoHandler);
        };
        if !target.accepts(request) {
            return Err(ShareError::NoHandler);
        }
        target.deliver(request)?;
        tracing::info!(handler = target.name(), bytes = request.body.len(), "share delivered");
        Ok(target.name().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Recording {
        name: &'static str,
        accepts: bool,
        received: Arc<Mutex<Vec<ShareRequest>>>,
    }

    impl ShareHandler for Recording {
        fn name(&self) -> &str {
            self.name
        }

        fn accepts(&self, _request: &ShareRequest) -> bool {
            self.accepts
        }

        fn deliver(&mut self, request: &ShareRequest) -> Result<(), ShareError> {
            self.received.lock().push(request.clone());
            Ok(())
        }
    }

    fn recording(name: &'static str, accepts: bool) -> (Box<Recording>, Arc<Mutex<Vec<ShareRequest>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let handler = Box::new(Recording {
            name,
            accepts,
            received: Arc::clone(&received),
        });
        (handler, received)
    }

    #[test]
    fn chooser_lists_accepting_handlers() {
        let mut sheet = ShareSheet::new();
        let (mail, _) = recording("Mail", true);
        let (printer, _) = recording("Printer", false);
        let (chat, _) = recording("Chat", true);
        sheet.register(mail);
        sheet.register(printer);
        sheet.register(chat);

        let options = sheet.chooser_for(&ShareRequest::order_summary("1 x Mug"));
        assert_eq!(
            options,
            vec![
                ChooserOption {
                    handler: 0,
                    name: "Mail".to_string()
                },
                ChooserOption {
                    handler: 2,
                    name: "Chat".to_string()
                },
            ]
        );
    }

    #[test]
    fn deliver_reaches_chosen_handler() {
        let mut sheet = ShareSheet::new();
        let (mail, received) = recording("Mail", true);
        sheet.register(mail);

        let request = ShareRequest::order_summary("1 x Mug");
        assert_eq!(sheet.deliver(0, &request).unwrap(), "Mail");
        assert_eq!(*received.lock(), vec![request]);
    }

    #[test]
    fn deliver_without_handler_fails() {
        let mut sheet = ShareSheet::new();
        let request = ShareRequest::order_summary("");
        assert!(sheet.is_empty());
        assert!(sheet.chooser_for(&request).is_empty());
        assert!(matches!(sheet.deliver(0, &request), Err(ShareError::NoHandler)));
    }

    #[test]
    fn outbox_only_config_skips_clipboard() {
        let config = ShareConfig {
            clipboard: false,
            outbox: Some("/tmp/jetreward-outbox.jsonl".into()),
        };
        let sheet = ShareSheet::from_config(&config);
        assert_eq!(sheet.len(), 1);
    }
}
